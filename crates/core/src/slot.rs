use std::fmt;

use serde::Serialize;

/// Named regions of the composed view, listed in render order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Navigation,
    MainContent,
    Logging,
}

impl Slot {
    pub const ORDER: [Slot; 3] = [Slot::Navigation, Slot::MainContent, Slot::Logging];

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::Navigation => "navigation",
            Slot::MainContent => "main_content",
            Slot::Logging => "logging",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Slot::Navigation => 0,
            Slot::MainContent => 1,
            Slot::Logging => 2,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
