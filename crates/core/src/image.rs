//! Character sprites.

/// Immutable 2D grid of glyphs.
///
/// Rows are stored flattened; `width` is the longest source row and shorter
/// rows are padded with spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
}

impl Image {
    pub fn from_rows(rows: &[&str]) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let height = rows.len();

        let mut glyphs = Vec::with_capacity(width * height);
        for row in rows {
            let before = glyphs.len();
            glyphs.extend(row.chars());
            glyphs.resize(before + width, ' ');
        }

        Self {
            width: width as u16,
            height: height as u16,
            glyphs,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Glyph at column `x`, row `y`.
    pub fn glyph(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.glyphs
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    /// Iterate rows as glyph slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty image simply has no rows.
        self.glyphs.chunks(self.width.max(1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_follow_rows() {
        let img = Image::from_rows(&["ab", "cde", ""]);
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 3);
        assert_eq!(img.glyph(2, 0), Some(' '));
        assert_eq!(img.glyph(2, 1), Some('e'));
        assert_eq!(img.glyph(0, 2), Some(' '));
        assert_eq!(img.glyph(3, 0), None);
        assert_eq!(img.glyph(0, 3), None);
    }

    #[test]
    fn rows_iterate_padded() {
        let img = Image::from_rows(&["#", "##"]);
        let rows: Vec<String> = img.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["# ".to_string(), "##".to_string()]);
    }

    #[test]
    fn empty_image_has_no_rows() {
        let img = Image::from_rows(&[]);
        assert_eq!(img.width(), 0);
        assert_eq!(img.height(), 0);
        assert_eq!(img.rows().count(), 0);
    }
}
