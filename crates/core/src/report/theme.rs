use std::borrow::Cow;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// A status label and the ANSI color it is printed in, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub label: &'static str,
    pub color: Option<&'static str>,
}

impl Marker {
    const fn new(label: &'static str, color: &'static str) -> Self {
        Self {
            label,
            color: Some(color),
        }
    }

    const fn plain(label: &'static str) -> Self {
        Self { label, color: None }
    }

    pub fn paint(&self) -> Cow<'static, str> {
        match self.color {
            Some(color) => Cow::Owned(format!("{color}{}{RESET}", self.label)),
            None => Cow::Borrowed(self.label),
        }
    }
}

/// Presentation constants handed to the reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub success: Marker,
    pub failure: Marker,
    pub timeout: Marker,
    pub skipped: Marker,
    pub warning: Marker,
}

impl Theme {
    pub const fn ansi() -> Self {
        Self {
            success: Marker::new("ok", GREEN),
            failure: Marker::new("FAILED", RED),
            timeout: Marker::new("TIMEOUT", YELLOW),
            skipped: Marker::new("skipped", BLUE),
            warning: Marker::new("warning", YELLOW),
        }
    }

    pub const fn plain() -> Self {
        Self {
            success: Marker::plain("ok"),
            failure: Marker::plain("FAILED"),
            timeout: Marker::plain("TIMEOUT"),
            skipped: Marker::plain("skipped"),
            warning: Marker::plain("warning"),
        }
    }

    /// Colors only when writing to a terminal
    pub fn detect() -> Self {
        use std::io::IsTerminal;
        if std::io::stdout().is_terminal() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}
