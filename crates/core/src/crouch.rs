//! Deferred crouch release.
//!
//! A crouch is transient: some time after it begins the player stands back up
//! on its own. The deadline is counted in game time and consumed by the
//! orchestrator at the start of a tick, so the stand-up never happens outside
//! a tick boundary.

/// One-shot countdown. Arming while already armed replaces the pending deadline.
///
/// The tick that consumes an arm only starts the countdown: time spent before
/// the crouch was requested does not count against it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrouchRelease {
    remaining_ms: Option<u32>,
    just_armed: bool,
}

impl CrouchRelease {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
        self.just_armed = true;
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
        self.just_armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Count down by `elapsed_ms`. Returns true exactly once, when the deadline passes.
    ///
    /// The first call after [`arm`](Self::arm) only clears the arm marker.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if std::mem::take(&mut self.just_armed) {
            return false;
        }
        match self.remaining_ms {
            Some(remaining) if remaining <= elapsed_ms => {
                self.remaining_ms = None;
                true
            }
            Some(remaining) => {
                self.remaining_ms = Some(remaining - elapsed_ms);
                false
            }
            None => false,
        }
    }
}
