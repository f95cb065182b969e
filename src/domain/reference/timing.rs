//! Timing categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a milestone's age compares with the reference peak age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimingCategory {
    Early,
    Mainstream,
    Late,
}

impl TimingCategory {
    /// Display text used in the report and in the summary prompt.
    pub fn label(&self) -> &'static str {
        match self {
            TimingCategory::Early => "先行 (偏早)",
            TimingCategory::Mainstream => "同行 (主流)",
            TimingCategory::Late => "沉淀 (偏晚)",
        }
    }
}

impl fmt::Display for TimingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_fixed() {
        assert_eq!(TimingCategory::Early.label(), "先行 (偏早)");
        assert_eq!(TimingCategory::Mainstream.label(), "同行 (主流)");
        assert_eq!(TimingCategory::Late.label(), "沉淀 (偏晚)");
    }

    #[test]
    fn serializes_in_screaming_case() {
        let json = serde_json::to_string(&TimingCategory::Mainstream).unwrap();
        assert_eq!(json, "\"MAINSTREAM\"");
    }
}
