//! Sprite art for every entity.

use crate::image::Image;

const PLAYER_STANDING: [&str; 10] = [
    "    ##  ",
    "    ####",
    "    ####",
    "    ##  ",
    "   ###  ",
    "  ##### ",
    " #####  ",
    "######  ",
    "  #  #  ",
    "  ## ## ",
];

const PLAYER_CROUCHING: [&str; 7] = [
    "    ##  ",
    "    ####",
    "    ####",
    "   ###  ",
    "  ##### ",
    "######  ",
    "  ## ## ",
];

const METEOR: [&str; 6] = [
    " #### #",
    "#  # # ",
    "###  ##",
    "#  # # ",
    "#   ## ",
    " #### #",
];

const CACTUS: [&str; 6] = [
    "## ##",
    "## ##",
    "#####",
    "#### ",
    " ##  ",
    " ##  ",
];

pub fn player_standing() -> Image {
    Image::from_rows(&PLAYER_STANDING)
}

pub fn player_crouching() -> Image {
    Image::from_rows(&PLAYER_CROUCHING)
}

pub fn meteor() -> Image {
    Image::from_rows(&METEOR)
}

pub fn cactus() -> Image {
    Image::from_rows(&CACTUS)
}
