//! Hero slideshow state.
//!
//! DESIGN
//! ======
//! The slide index and the auto-advance timer policy are plain data here; the
//! hero component reconciles one browser timer against [`TimerMode`] each
//! time it changes. Manual navigation opens a cooldown identified by an epoch
//! so a stale cooldown callback can never resume the timer.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

/// Which auto-advance timer should currently exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerMode {
    /// Advance every slide interval.
    Running,
    /// Manual navigation happened; resume after the cooldown.
    Cooldown { epoch: u64 },
    /// Hovered or tab hidden; no timer.
    Paused,
}

/// Manual navigation request from a dot click or arrow key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    To(usize),
}

impl Navigation {
    /// Map a `KeyboardEvent.key` value to a navigation, if it is one.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlideshowState {
    pub index: usize,
    pub len: usize,
    hovered: bool,
    hidden: bool,
    cooldown: Option<u64>,
    epoch: u64,
}

impl SlideshowState {
    pub fn new(len: usize) -> Self {
        Self { len, ..Self::default() }
    }

    pub fn is_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// Move forward one slide, wrapping to the first.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Move back one slide, wrapping to the last.
    pub fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to slide `i`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, i: usize) -> bool {
        if i >= self.len {
            return false;
        }
        self.index = i;
        true
    }

    /// Apply a user navigation and restart the cooldown.
    pub fn navigate(&mut self, nav: Navigation) {
        match nav {
            Navigation::Next => self.advance(),
            Navigation::Previous => self.retreat(),
            Navigation::To(i) => {
                if !self.go_to(i) {
                    return;
                }
            }
        }
        self.epoch += 1;
        self.cooldown = Some(self.epoch);
    }

    /// Resume auto-advance if `epoch` is still the pending cooldown.
    pub fn cooldown_elapsed(&mut self, epoch: u64) {
        if self.cooldown == Some(epoch) {
            self.cooldown = None;
        }
    }

    /// Pointer entered or left the hero. Either edge drops a pending
    /// cooldown, so leaving always resumes the plain auto-advance.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.cooldown = None;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
        self.cooldown = None;
    }

    pub fn timer_mode(&self) -> TimerMode {
        if self.hovered || self.hidden || self.len < 2 {
            TimerMode::Paused
        } else if let Some(epoch) = self.cooldown {
            TimerMode::Cooldown { epoch }
        } else {
            TimerMode::Running
        }
    }
}
