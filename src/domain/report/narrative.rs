//! Narrative summary: prompt construction and fallback texts.
//!
//! The summary itself comes from an external text-generation service. This
//! module only decides what is sent and what is shown when nothing usable
//! comes back.

use serde::Serialize;

use super::LifeReport;
use crate::domain::comparison::ComparisonData;
use crate::domain::reference::Dimension;

/// Shown when the service answers with blank text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "每一处停留，都是时间在为你准备下一场更好的奔赴。";

/// Shown when the service call fails for any reason.
pub const FAILURE_FALLBACK: &str =
    "在漫长的生命里，快慢并无标准。你留下的每一个刻度，都是属于你独一无二的生命参照系。";

/// Placeholder for a dimension without milestones.
pub const UNRECORDED: &str = "未记录";

/// Where the summary text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SummarySource {
    /// Draft report; the summary step has not run yet.
    Pending,
    /// Text returned by the service, trimmed.
    Generated,
    /// Canned text substituted for a missing or failed response.
    Fallback { reason: FallbackReason },
}

/// Why a fallback text was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cause", content = "detail", rename_all = "snake_case")]
pub enum FallbackReason {
    EmptyResponse,
    ProviderError(String),
    TimedOut,
}

/// Typed result of the summary step: always has displayable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeSummary {
    pub text: String,
    pub source: SummarySource,
}

impl NarrativeSummary {
    /// Wraps service output; blank output turns into the empty-response fallback.
    pub fn from_completion(content: &str) -> Self {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Self::fallback(FallbackReason::EmptyResponse);
        }
        Self {
            text: trimmed.to_string(),
            source: SummarySource::Generated,
        }
    }

    /// Canned text for the given reason.
    pub fn fallback(reason: FallbackReason) -> Self {
        let text = match reason {
            FallbackReason::EmptyResponse => EMPTY_RESPONSE_FALLBACK,
            FallbackReason::ProviderError(_) | FallbackReason::TimedOut => FAILURE_FALLBACK,
        };
        Self {
            text: text.to_string(),
            source: SummarySource::Fallback { reason },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, SummarySource::Fallback { .. })
    }
}

/// `"{age_range}岁发生[{status}]({timing})"`
pub fn describe_comparison(comparison: &ComparisonData) -> String {
    format!(
        "{}岁发生[{}]({})",
        comparison.age_range_label,
        comparison.status_label,
        comparison.timing_category.label()
    )
}

/// All comparisons of one dimension joined with `"; "`, in report order.
/// Empty string when the dimension has none.
pub fn describe_track(comparisons: &[ComparisonData], dimension: Dimension) -> String {
    comparisons
        .iter()
        .filter(|c| c.dimension == dimension)
        .map(describe_comparison)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Builds the natural-language request for the life summary.
pub fn build_prompt(report: &LifeReport) -> String {
    let track = |dimension: Dimension| {
        let described = describe_track(report.comparisons(), dimension);
        if described.is_empty() {
            UNRECORDED.to_string()
        } else {
            described
        }
    };

    format!(
        "作为一名资深生命教练，请为用户的这份“人生轨迹图”撰写一份深刻的总结。\n\
         \n\
         用户出生日期：{birth}\n\
         情感轨迹：{emotion}\n\
         事业轨迹：{career}\n\
         \n\
         要求：\n\
         1. 洞察力：通过事业与情感的节点顺序、节奏快慢，找出其中的关联或人生模式。\n\
         2. 风格：人文感、温暖、充满哲理。\n\
         3. 字数：80-120字。\n\
         4. 禁忌：不要列举数据，要讲关于“时间与选择”的本质。\n",
        birth = report.profile().birth_date(),
        emotion = track(Dimension::Emotion),
        career = track(Dimension::Career),
    )
}
