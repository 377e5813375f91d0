//! Decorative coloring for fixture product output.

/// ANSI escape codes used by the step banners. Every field is an empty
/// string when coloring is disabled, so callers can interpolate
/// unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub red: &'static str,
    pub green: &'static str,
    pub blue: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn new(no_color: bool) -> Self {
        if no_color { Self::plain() } else { Self::ansi() }
    }

    /// Light red / light green / light blue.
    pub fn ansi() -> Self {
        Self {
            red: "\x1b[1;31m",
            green: "\x1b[1;32m",
            blue: "\x1b[1;34m",
            reset: "\x1b[0m",
        }
    }

    pub fn plain() -> Self {
        Self {
            red: "",
            green: "",
            blue: "",
            reset: "",
        }
    }
}
