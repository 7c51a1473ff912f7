use crate::terminal::detect::TerminalDetector;

/// What the attached terminal can display
pub struct TerminalCapabilities {
    detector: TerminalDetector,
}

impl TerminalCapabilities {
    pub fn new() -> Self {
        Self::with_detector(TerminalDetector::new())
    }

    pub fn with_detector(detector: TerminalDetector) -> Self {
        Self { detector }
    }

    /// Icons are glyphs, so they need both a TTY and unicode
    pub fn supports_icons(&self) -> bool {
        self.detector.is_tty() && self.detector.supports_unicode()
    }

    pub fn supports_unicode_trees(&self) -> bool {
        self.detector.supports_unicode()
    }

    /// Get the tree branch characters based on capabilities
    pub fn tree_chars(&self) -> TreeChars {
        if self.supports_unicode_trees() {
            TreeChars::unicode()
        } else {
            TreeChars::ascii()
        }
    }
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self::new()
    }
}

/// Tree drawing characters
#[derive(Debug, Clone, PartialEq)]
pub struct TreeChars {
    pub branch: &'static str,
    pub last_branch: &'static str,
    pub vertical: &'static str,
    pub empty: &'static str,
}

impl TreeChars {
    pub fn unicode() -> Self {
        Self {
            branch: "├─ ",
            last_branch: "└─ ",
            vertical: "│  ",
            empty: "   ",
        }
    }

    pub fn ascii() -> Self {
        Self {
            branch: "|-- ",
            last_branch: "`-- ",
            vertical: "|   ",
            empty: "    ",
        }
    }
}
