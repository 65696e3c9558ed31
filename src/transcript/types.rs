//! Type definitions specific to the transcript module.

/// Classification bucket for a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Error,
    Warning,
    Info,
}

impl Category {
    /// Every category, in priority order.
    pub const ALL: [Category; 3] = [Category::Error, Category::Warning, Category::Info];

    /// Plural heading used for counts and listings.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Error => "Errors",
            Category::Warning => "Warnings",
            Category::Info => "Info",
        }
    }
}

/// Marker whose presence anywhere in the transcript means the test passed.
pub const PASSED_MARKER: &str = "TEST PASSED";
/// Marker whose presence means the test failed, when no pass marker exists.
pub const FAILED_MARKER: &str = "TEST FAILED";

/// Overall outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Passed,
    Failed,
    Unknown,
}

impl Verdict {
    /// Derive the verdict from raw transcript lines.
    ///
    /// The pass marker is checked first, so a transcript containing both
    /// markers is `Passed`. Matching is exact-case substring search.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        if lines.iter().any(|l| l.as_ref().contains(PASSED_MARKER)) {
            Verdict::Passed
        } else if lines.iter().any(|l| l.as_ref().contains(FAILED_MARKER)) {
            Verdict::Failed
        } else {
            Verdict::Unknown
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Verdict::Passed => "✅",
            Verdict::Failed => "❌",
            Verdict::Unknown => "⚠️",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Passed => write!(f, "PASSED"),
            Verdict::Failed => write!(f, "FAILED"),
            Verdict::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
