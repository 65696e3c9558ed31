//! Type definitions specific to the regress module.

/// Result string counted as a passing test.
pub const RESULT_PASS: &str = "PASS";
/// Result string counted as a failing test.
pub const RESULT_FAIL: &str = "FAIL";
/// Result used when a summary line has no second field.
pub const RESULT_UNKNOWN: &str = "UNKNOWN";
/// Duration used when a summary line has no third field.
pub const DURATION_DEFAULT: &str = "0";

/// One test entry from `summary.log`.
///
/// `result` and `duration` are kept as free text; only the exact strings
/// `PASS` and `FAIL` carry meaning for the aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRecord {
    pub name: String,
    pub result: String,
    pub duration: String,
}

impl TestRecord {
    pub fn is_pass(&self) -> bool {
        self.result == RESULT_PASS
    }

    pub fn is_fail(&self) -> bool {
        self.result == RESULT_FAIL
    }
}

/// Aggregate counts over a record set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegressionStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl RegressionStats {
    pub fn from_records(records: &[TestRecord]) -> Self {
        Self {
            total: records.len(),
            passed: records.iter().filter(|r| r.is_pass()).count(),
            failed: records.iter().filter(|r| r.is_fail()).count(),
        }
    }

    /// Percentage of passing tests, `0.0` for an empty set.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, result: &str) -> TestRecord {
        TestRecord {
            name: name.to_string(),
            result: result.to_string(),
            duration: DURATION_DEFAULT.to_string(),
        }
    }

    #[test]
    fn test_stats_counts_exact_results_only() {
        let records = vec![
            record("t1", "PASS"),
            record("t2", "FAIL"),
            record("t3", "pass"),
            record("t4", "TIMEOUT"),
        ];
        let stats = RegressionStats::from_records(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.passed, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.pass_rate(), 25.0);
    }

    #[test]
    fn test_pass_rate_empty_is_zero() {
        let stats = RegressionStats::from_records(&[]);
        assert_eq!(stats, RegressionStats::default());
        assert_eq!(stats.pass_rate(), 0.0);
    }

    #[test]
    fn test_pass_rate_bounds() {
        let all_pass = RegressionStats::from_records(&[record("a", "PASS"), record("b", "PASS")]);
        assert_eq!(all_pass.pass_rate(), 100.0);

        let none_pass = RegressionStats::from_records(&[record("a", "FAIL")]);
        assert_eq!(none_pass.pass_rate(), 0.0);
    }
}
