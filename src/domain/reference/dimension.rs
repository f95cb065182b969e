//! Life dimensions and their per-dimension lookup tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::status::{StatusOption, CAREER_STATUS_OPTIONS, EMOTION_STATUS_OPTIONS};
use crate::domain::foundation::ValidationError;

/// One of the two life tracks a milestone belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Emotion,
    Career,
}

impl Dimension {
    /// Order in which comparisons are computed and fed to the summary prompt.
    pub const ALL: [Dimension; 2] = [Dimension::Emotion, Dimension::Career];

    /// Order in which the finished report lists its tracks.
    pub const REPORT_ORDER: [Dimension; 2] = [Dimension::Career, Dimension::Emotion];

    /// Age at which the reference population most commonly reaches a milestone.
    pub fn peak_age(&self) -> i64 {
        match self {
            Dimension::Career => 24,
            Dimension::Emotion => 27,
        }
    }

    /// The nine status options a milestone in this dimension may carry.
    pub fn status_options(&self) -> &'static [StatusOption] {
        match self {
            Dimension::Emotion => &EMOTION_STATUS_OPTIONS,
            Dimension::Career => &CAREER_STATUS_OPTIONS,
        }
    }

    /// Looks up a status option by its code.
    pub fn status_option(&self, code: &str) -> Option<&'static StatusOption> {
        self.status_options().iter().find(|o| o.value == code)
    }

    /// Display label for a status code, empty when the code is unknown.
    pub fn status_label(&self, code: &str) -> &'static str {
        self.status_option(code).map(|o| o.label).unwrap_or("")
    }

    /// First option of the table; preselected whenever the tab changes.
    pub fn default_status(&self) -> &'static StatusOption {
        &self.status_options()[0]
    }

    /// Tab caption in the input step.
    pub fn tab_label(&self) -> &'static str {
        match self {
            Dimension::Emotion => "情感维度",
            Dimension::Career => "事业维度",
        }
    }

    /// Short noun used in prompts such as "添加情感里程碑".
    pub fn short_label(&self) -> &'static str {
        match self {
            Dimension::Emotion => "情感",
            Dimension::Career => "事业",
        }
    }

    /// Section title in the report.
    pub fn track_title(&self) -> &'static str {
        match self {
            Dimension::Emotion => "情感轨迹",
            Dimension::Career => "事业轨迹",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Emotion => "EMOTION",
            Dimension::Career => "CAREER",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emotion" | "e" | "情感" => Ok(Dimension::Emotion),
            "career" | "c" | "事业" => Ok(Dimension::Career),
            other => Err(ValidationError::invalid_format(
                "dimension",
                format!("expected 'emotion' or 'career', got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak_ages_match_reference() {
        assert_eq!(Dimension::Career.peak_age(), 24);
        assert_eq!(Dimension::Emotion.peak_age(), 27);
    }

    #[test]
    fn each_dimension_has_nine_distinct_codes() {
        for dim in Dimension::ALL {
            let options = dim.status_options();
            assert_eq!(options.len(), 9);
            for (i, a) in options.iter().enumerate() {
                for b in &options[i + 1..] {
                    assert_ne!(a.value, b.value);
                }
            }
        }
    }

    #[test]
    fn status_lookup_is_scoped_to_dimension() {
        assert_eq!(Dimension::Career.status_label("first_job"), "开始第一份全职工作");
        assert_eq!(Dimension::Emotion.status_label("first_job"), "");
        assert!(Dimension::Emotion.status_option("first_love").is_some());
    }

    #[test]
    fn default_status_is_first_option() {
        assert_eq!(Dimension::Emotion.default_status().value, "first_love");
        assert_eq!(Dimension::Career.default_status().value, "first_job");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("CAREER".parse::<Dimension>().unwrap(), Dimension::Career);
        assert_eq!("emotion".parse::<Dimension>().unwrap(), Dimension::Emotion);
        assert!("health".parse::<Dimension>().is_err());
    }

    #[test]
    fn serializes_in_screaming_case() {
        let json = serde_json::to_string(&Dimension::Emotion).unwrap();
        assert_eq!(json, "\"EMOTION\"");
    }
}
