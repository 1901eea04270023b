//! ANSI color codes for terminal output.
//!
//! Semantic colors with an orthogonal dim modifier:
//! - Blue: node names
//! - Green: term text
//! - Yellow: suffix attributes (filter keys, boosts)
//! - Dim: structure and metadata
//! - Reset: return to default

/// ANSI color palette for CLI dumps.
///
/// Uses only standard 16-color ANSI codes so it reads in light and dark themes.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        yellow: "\x1b[33m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        yellow: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}
