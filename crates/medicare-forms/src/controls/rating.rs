//! Star rating control
//!
//! Five discrete levels with a committed value and a transient hover
//! preview. Selection commits immediately.

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RatingControl {
    committed: u8,
    preview: u8,
}

/// One rendered star
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RatingIndicator {
    pub level: u8,
    pub filled: bool,
}

impl RatingControl {
    pub const LEVELS: u8 = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a stored field value; anything but `1..=5` is unset
    pub fn from_value(value: &str) -> Self {
        let committed = value.trim().parse::<u8>().ok().filter(|l| Self::in_range(*l)).unwrap_or(0);
        Self { committed, preview: 0 }
    }

    pub fn hover(&mut self, level: u8) {
        if Self::in_range(level) {
            self.preview = level;
        }
    }

    pub fn leave(&mut self) {
        self.preview = 0;
    }

    /// Commit a level, returning the field value to store
    pub fn select(&mut self, level: u8) -> Option<String> {
        if !Self::in_range(level) {
            return None;
        }
        self.committed = level;
        Some(self.value())
    }

    pub fn committed(&self) -> Option<u8> {
        (self.committed > 0).then_some(self.committed)
    }

    pub fn preview(&self) -> Option<u8> {
        (self.preview > 0).then_some(self.preview)
    }

    /// Preview if hovering, else committed, else zero
    pub fn display_level(&self) -> u8 {
        if self.preview > 0 {
            self.preview
        } else {
            self.committed
        }
    }

    pub fn indicators(&self) -> Vec<RatingIndicator> {
        let shown = self.display_level();
        (1..=Self::LEVELS)
            .map(|level| RatingIndicator { level, filled: level <= shown })
            .collect()
    }

    pub fn caption(&self) -> Option<String> {
        self.committed().map(|l| format!("{} out of {} stars", l, Self::LEVELS))
    }

    /// Field value for the committed level, empty when unset
    pub fn value(&self) -> String {
        self.committed().map(|l| l.to_string()).unwrap_or_default()
    }

    fn in_range(level: u8) -> bool {
        (1..=Self::LEVELS).contains(&level)
    }
}
