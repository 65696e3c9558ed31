//! Classify transcript lines into errors, warnings and info.
//!
//! Rules are evaluated in table order and the first match wins, so a line
//! carrying both an error and an info marker counts only as an error.
//!
//! ```text
//! [ERROR] scoreboard mismatch                     -> Error   ("[ERROR]")
//! UVM_ERROR @ 100ns: uvm_test_top [SCB] mismatch  -> Error   ("UVM_ERROR")
//! uvm_warning: timeout soon                       -> Warning ("UVM_WARNING", any case)
//! UVM_INFO @ 0: uvm_test_top.env [DRV] start      -> Info
//! $finish at simulation time 1000                 -> unclassified
//! ```

use super::types::Category;

/// One entry of the classification table.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyRule {
    pub category: Category,
    /// Case-sensitive substrings.
    pub markers: &'static [&'static str],
    /// Upper-case keywords matched against the upper-cased line.
    pub keywords: &'static [&'static str],
}

impl ClassifyRule {
    fn matches(&self, line: &str, upper: &str) -> bool {
        self.markers.iter().any(|m| line.contains(m)) || self.keywords.iter().any(|k| upper.contains(k))
    }
}

/// Classification table in priority order.
pub const DEFAULT_RULES: [ClassifyRule; 3] = [
    ClassifyRule {
        category: Category::Error,
        markers: &["[ERROR]"],
        keywords: &["UVM_ERROR"],
    },
    ClassifyRule {
        category: Category::Warning,
        markers: &["[WARN]"],
        keywords: &["UVM_WARNING"],
    },
    ClassifyRule {
        category: Category::Info,
        markers: &["[INFO]"],
        keywords: &["UVM_INFO"],
    },
];

/// Classify a single (already trimmed) line against the default table.
pub fn classify_line(line: &str) -> Option<Category> {
    classify_with(&DEFAULT_RULES, line)
}

fn classify_with(rules: &[ClassifyRule], line: &str) -> Option<Category> {
    let upper = line.to_uppercase();
    rules.iter().find(|rule| rule.matches(line, &upper)).map(|rule| rule.category)
}

/// Classified lines of one transcript.
///
/// The three lists are disjoint and keep transcript order. Lines matching no
/// rule are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogAnalysis {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub info: Vec<String>,
}

impl LogAnalysis {
    /// Single pass over `lines`, trimming each before classification.
    pub fn classify<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut analysis = Self::default();
        for line in lines {
            let line = line.as_ref().trim();
            if let Some(category) = classify_line(line) {
                analysis.bucket_mut(category).push(line.to_string());
            }
        }
        log::debug!(
            "Classified {} of {} lines: {} errors, {} warnings, {} info",
            analysis.classified_count(),
            lines.len(),
            analysis.errors.len(),
            analysis.warnings.len(),
            analysis.info.len()
        );
        analysis
    }

    /// Lines of one category, in transcript order.
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Error => &self.errors,
            Category::Warning => &self.warnings,
            Category::Info => &self.info,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Error => &mut self.errors,
            Category::Warning => &mut self.warnings,
            Category::Info => &mut self.info,
        }
    }

    /// Number of lines that matched any rule.
    pub fn classified_count(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.info.len()
    }
}
