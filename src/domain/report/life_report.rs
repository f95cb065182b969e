//! LifeReport aggregate.

use serde::Serialize;

use super::narrative::{NarrativeSummary, SummarySource};
use super::ReportError;
use crate::domain::comparison::{ComparisonData, ComparisonEngine};
use crate::domain::foundation::{ReportId, Timestamp};
use crate::domain::profile::UserProfile;
use crate::domain::reference::Dimension;

/// A profile snapshot, its comparisons and the narrative summary.
///
/// Built in two steps: [`LifeReport::draft`] computes every comparison with
/// an empty summary, then [`LifeReport::with_summary`] attaches the text once
/// the summary step has finished.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeReport {
    id: ReportId,
    profile: UserProfile,
    comparisons: Vec<ComparisonData>,
    ai_summary: String,
    summary_source: SummarySource,
    generated_at: Timestamp,
}

impl LifeReport {
    /// Computes all comparisons for a profile.
    ///
    /// # Errors
    ///
    /// `ReportError::EmptyProfile` when neither dimension has a milestone.
    pub fn draft(profile: UserProfile) -> Result<Self, ReportError> {
        if profile.is_empty() {
            return Err(ReportError::EmptyProfile);
        }

        let comparisons = ComparisonEngine::compare_profile(&profile);

        Ok(Self {
            id: ReportId::new(),
            profile,
            comparisons,
            ai_summary: String::new(),
            summary_source: SummarySource::Pending,
            generated_at: Timestamp::now(),
        })
    }

    /// Finalizes the report with the summary text.
    pub fn with_summary(mut self, summary: NarrativeSummary) -> Self {
        self.ai_summary = summary.text;
        self.summary_source = summary.source;
        self
    }

    pub fn id(&self) -> ReportId {
        self.id
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn comparisons(&self) -> &[ComparisonData] {
        &self.comparisons
    }

    /// Comparisons of one dimension, in list order.
    pub fn comparisons_for(&self, dimension: Dimension) -> impl Iterator<Item = &ComparisonData> {
        self.comparisons
            .iter()
            .filter(move |c| c.dimension == dimension)
    }

    pub fn ai_summary(&self) -> &str {
        &self.ai_summary
    }

    pub fn summary_source(&self) -> &SummarySource {
        &self.summary_source
    }

    pub fn generated_at(&self) -> Timestamp {
        self.generated_at
    }

    /// True until a summary has been attached.
    pub fn is_draft(&self) -> bool {
        self.summary_source == SummarySource::Pending
    }
}
