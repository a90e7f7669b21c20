use chrono::{DateTime, Local};

/// Text shown in the Results tab before anything has run.
pub const RESULTS_PLACEHOLDER: &str = "Results will appear here after running an algorithm";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The output of one execution-stub invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub algorithm: String,
    pub timestamp: DateTime<Local>,
}

impl ResultRecord {
    pub fn new(algorithm: impl Into<String>, timestamp: DateTime<Local>) -> Self {
        Self {
            algorithm: algorithm.into(),
            timestamp,
        }
    }

    /// Stamps a record with the current local time.
    pub fn now(algorithm: impl Into<String>) -> Self {
        Self::new(algorithm, Local::now())
    }

    /// Renders the fixed placeholder report shown in the Results tab.
    pub fn render(&self) -> String {
        format!(
            "
Algorithm: {}
Timestamp: {}

Status: Ready for implementation
This is a placeholder for actual ML algorithm execution.

Next steps:
1. Integrate an ML algorithms backend
2. Add data loading and processing
3. Implement plotting for visualization
4. Add model evaluation metrics
",
            self.algorithm,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_render_embeds_name_and_timestamp() {
        let ts = Local.with_ymd_and_hms(2024, 6, 9, 14, 5, 7).unwrap();
        let text = ResultRecord::new("Random Forest", ts).render();

        assert!(text.starts_with("\nAlgorithm: Random Forest\n"));
        assert!(text.contains("Timestamp: 2024-06-09 14:05:07\n"));
        assert!(text.contains("Status: Ready for implementation"));
        assert!(text.ends_with("4. Add model evaluation metrics\n"));
    }

    #[test]
    fn test_render_full_template() {
        let ts = Local.with_ymd_and_hms(2025, 1, 20, 8, 30, 0).unwrap();
        let expected = "
Algorithm: SVM
Timestamp: 2025-01-20 08:30:00

Status: Ready for implementation
This is a placeholder for actual ML algorithm execution.

Next steps:
1. Integrate an ML algorithms backend
2. Add data loading and processing
3. Implement plotting for visualization
4. Add model evaluation metrics
";
        assert_eq!(ResultRecord::new("SVM", ts).render(), expected);
    }
}
