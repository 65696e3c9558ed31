//! Component tag statistics over info lines.
//!
//! The component is the first `[word]` token of a line that is not itself a
//! level marker:
//!
//! ```text
//! UVM_INFO @ 0: uvm_test_top.env.agent [DRV] start   -> DRV
//! [INFO] [MON] sampled                               -> MON
//! [INFO] reset released                              -> (none)
//! ```

use regex::Regex;
use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::LazyLock;

static COMPONENT_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(\w+)\]").unwrap());

/// Bracketed tokens that mark a line's level rather than its source.
const LEVEL_TAGS: [&str; 3] = ["ERROR", "WARN", "INFO"];

/// Extract the component tag of a line.
pub fn component_tag(line: &str) -> Option<&str> {
    COMPONENT_TAG_REGEX
        .captures_iter(line)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .find(|tag| !LEVEL_TAGS.contains(tag))
}

/// Occurrence counts per component tag.
///
/// Ordered by descending count; equal counts keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentTally {
    counts: Vec<(String, usize)>,
}

impl ComponentTally {
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for tag in lines.iter().filter_map(|l| component_tag(l.as_ref())) {
            match index.get(tag) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.to_string(), counts.len());
                    counts.push((tag.to_string(), 1));
                }
            }
        }

        // Stable sort keeps first-seen order among ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        log::debug!("Tallied {} distinct components", counts.len());
        Self { counts }
    }

    /// The `limit` most frequent tags.
    pub fn top(&self, limit: usize) -> &[(String, usize)] {
        &self.counts[..limit.min(self.counts.len())]
    }

    /// Write the statistics block with the `limit` most frequent tags.
    pub fn write_to<W: Write>(&self, out: &mut W, limit: usize) -> io::Result<()> {
        writeln!(out, "\nComponent statistics:")?;
        writeln!(out, "{}", "-".repeat(60))?;
        for (tag, count) in self.top(limit) {
            writeln!(out, "  {}: {}", tag, count)?;
        }
        Ok(())
    }
}
