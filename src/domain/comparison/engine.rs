//! Comparison Engine - Timing classification against the reference population.

use serde::Serialize;

use super::distribution::{reference_distribution, DistributionPoint};
use crate::domain::foundation::MilestoneId;
use crate::domain::profile::{Milestone, UserProfile};
use crate::domain::reference::{Dimension, TimingCategory};

/// Years before the peak age below which a milestone counts as early.
pub const EARLY_MARGIN_YEARS: i64 = 2;

/// Years after the peak age above which a milestone counts as late.
pub const LATE_MARGIN_YEARS: i64 = 4;

/// How one milestone compares with the reference population.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonData {
    pub dimension: Dimension,
    pub milestone_id: MilestoneId,
    pub status_label: String,
    pub age_range_label: String,
    pub timing_category: TimingCategory,
    pub distribution: Vec<DistributionPoint>,
}

impl ComparisonData {
    /// The flagged distribution bucket, if any.
    pub fn user_position(&self) -> Option<&DistributionPoint> {
        self.distribution.iter().find(|p| p.is_user_position)
    }
}

/// Stateless comparison of milestones against the reference distribution.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Classifies a start age against the dimension's peak age.
    ///
    /// The window is asymmetric: two years of slack before the peak, four
    /// after. Without a start age every comparison is false and the result
    /// is `Mainstream`.
    pub fn classify(dimension: Dimension, start_age: Option<u32>) -> TimingCategory {
        let peak = dimension.peak_age();
        match start_age.map(i64::from) {
            Some(age) if age < peak - EARLY_MARGIN_YEARS => TimingCategory::Early,
            Some(age) if age > peak + LATE_MARGIN_YEARS => TimingCategory::Late,
            _ => TimingCategory::Mainstream,
        }
    }

    /// Compares a single milestone.
    pub fn compare(dimension: Dimension, milestone: &Milestone) -> ComparisonData {
        let start_age = milestone.start_age();

        ComparisonData {
            dimension,
            milestone_id: milestone.id(),
            status_label: dimension.status_label(milestone.status_code()).to_string(),
            age_range_label: milestone.age_range().label().to_string(),
            timing_category: Self::classify(dimension, start_age),
            distribution: reference_distribution(start_age),
        }
    }

    /// Compares every milestone of a profile: EMOTION first, then CAREER,
    /// each in its (age-sorted) list order.
    pub fn compare_profile(profile: &UserProfile) -> Vec<ComparisonData> {
        Dimension::ALL
            .iter()
            .flat_map(|dim| {
                profile
                    .milestones(*dim)
                    .iter()
                    .map(move |ms| Self::compare(*dim, ms))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reference::AgeRange;

    #[test]
    fn career_twenty_one_is_early() {
        // 21 < 24 - 2
        let ms = Milestone::new(AgeRange::new("21-25"), "first_job");
        let data = ComparisonEngine::compare(Dimension::Career, &ms);
        assert_eq!(data.timing_category, TimingCategory::Early);
        assert_eq!(data.status_label, "开始第一份全职工作");
        assert_eq!(data.age_range_label, "21-25");
        assert_eq!(data.user_position().map(|p| p.age_range), Some("21-25"));
    }

    #[test]
    fn career_boundaries() {
        assert_eq!(ComparisonEngine::classify(Dimension::Career, Some(21)), TimingCategory::Early);
        assert_eq!(ComparisonEngine::classify(Dimension::Career, Some(22)), TimingCategory::Mainstream);
        assert_eq!(ComparisonEngine::classify(Dimension::Career, Some(28)), TimingCategory::Mainstream);
        assert_eq!(ComparisonEngine::classify(Dimension::Career, Some(29)), TimingCategory::Late);
    }

    #[test]
    fn emotion_boundaries() {
        assert_eq!(ComparisonEngine::classify(Dimension::Emotion, Some(24)), TimingCategory::Early);
        assert_eq!(ComparisonEngine::classify(Dimension::Emotion, Some(25)), TimingCategory::Mainstream);
        assert_eq!(ComparisonEngine::classify(Dimension::Emotion, Some(31)), TimingCategory::Mainstream);
        assert_eq!(ComparisonEngine::classify(Dimension::Emotion, Some(32)), TimingCategory::Late);
    }

    #[test]
    fn ui_buckets_classify_as_expected() {
        let emotion_26 = Milestone::new(AgeRange::new("26-30"), "stable");
        let career_31 = Milestone::new(AgeRange::new("31-35"), "bottleneck");
        assert_eq!(
            ComparisonEngine::compare(Dimension::Emotion, &emotion_26).timing_category,
            TimingCategory::Mainstream
        );
        assert_eq!(
            ComparisonEngine::compare(Dimension::Career, &career_31).timing_category,
            TimingCategory::Late
        );
    }

    #[test]
    fn malformed_label_degrades_silently() {
        let ms = Milestone::new(AgeRange::new("someday"), "success");
        let data = ComparisonEngine::compare(Dimension::Career, &ms);
        assert_eq!(data.timing_category, TimingCategory::Mainstream);
        assert!(data.user_position().is_none());
        assert_eq!(data.distribution.len(), 5);
    }

    #[test]
    fn unknown_status_code_has_empty_label() {
        let ms = Milestone::new(AgeRange::new("26-30"), "first_job");
        let data = ComparisonEngine::compare(Dimension::Emotion, &ms);
        assert_eq!(data.status_label, "");
    }

    #[test]
    fn compare_profile_orders_emotion_before_career() {
        let mut profile = UserProfile::default();
        profile.commit(Dimension::Career, AgeRange::new("16-20"), "first_job");
        profile.commit(Dimension::Emotion, AgeRange::new("31-35"), "recovery");
        profile.commit(Dimension::Emotion, AgeRange::new("21-25"), "first_love");

        let comparisons = ComparisonEngine::compare_profile(&profile);
        let order: Vec<_> = comparisons
            .iter()
            .map(|c| (c.dimension, c.age_range_label.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Dimension::Emotion, "21-25"),
                (Dimension::Emotion, "31-35"),
                (Dimension::Career, "16-20"),
            ]
        );
    }

    #[test]
    fn compare_profile_is_deterministic() {
        let mut profile = UserProfile::default();
        profile.commit(Dimension::Career, AgeRange::new("26-30"), "upgrade");
        profile.commit(Dimension::Emotion, AgeRange::new("41-45"), "peaceful_single");

        assert_eq!(
            ComparisonEngine::compare_profile(&profile),
            ComparisonEngine::compare_profile(&profile)
        );
    }
}
