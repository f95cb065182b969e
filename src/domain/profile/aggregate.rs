//! UserProfile aggregate.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Milestone;
use crate::domain::foundation::{BirthDate, MilestoneId};
use crate::domain::reference::{AgeRange, Dimension};

/// Per-dimension milestone lists, each kept sorted by start age.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub(crate) struct MilestoneTracks {
    #[serde(rename = "EMOTION")]
    emotion: Vec<Milestone>,
    #[serde(rename = "CAREER")]
    career: Vec<Milestone>,
}

impl MilestoneTracks {
    pub fn get(&self, dimension: Dimension) -> &[Milestone] {
        match dimension {
            Dimension::Emotion => &self.emotion,
            Dimension::Career => &self.career,
        }
    }

    fn get_mut(&mut self, dimension: Dimension) -> &mut Vec<Milestone> {
        match dimension {
            Dimension::Emotion => &mut self.emotion,
            Dimension::Career => &mut self.career,
        }
    }
}

/// The user's birth date and recorded milestones for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileRecord")]
pub struct UserProfile {
    birth_date: BirthDate,
    milestones: MilestoneTracks,
}

impl UserProfile {
    /// Creates an empty profile.
    pub fn new(birth_date: BirthDate) -> Self {
        Self {
            birth_date,
            milestones: MilestoneTracks::default(),
        }
    }

    pub fn birth_date(&self) -> BirthDate {
        self.birth_date
    }

    pub fn set_birth_date(&mut self, birth_date: BirthDate) {
        self.birth_date = birth_date;
    }

    pub fn milestones(&self, dimension: Dimension) -> &[Milestone] {
        self.milestones.get(dimension)
    }

    /// Total number of milestones across both dimensions.
    pub fn milestone_count(&self) -> usize {
        Dimension::ALL
            .iter()
            .map(|d| self.milestones(*d).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.milestone_count() == 0
    }

    /// Records a milestone and returns its new identifier.
    ///
    /// The dimension's list is re-sorted by start age after the insert. The
    /// sort is stable, so milestones sharing a bucket keep insertion order.
    pub fn commit(
        &mut self,
        dimension: Dimension,
        age_range: AgeRange,
        status_code: impl Into<String>,
    ) -> MilestoneId {
        let milestone = Milestone::new(age_range, status_code);
        let id = milestone.id();
        self.insert(dimension, milestone);
        id
    }

    /// Removes a milestone by identifier. Returns false if it was not present.
    pub fn remove(&mut self, dimension: Dimension, id: MilestoneId) -> bool {
        let list = self.milestones.get_mut(dimension);
        let before = list.len();
        list.retain(|m| m.id() != id);
        list.len() != before
    }

    fn insert(&mut self, dimension: Dimension, milestone: Milestone) {
        let list = self.milestones.get_mut(dimension);
        list.push(milestone);
        list.sort_by_key(Milestone::sort_key);
    }
}

/// Serialized shape of a profile as read from a file.
///
/// Milestone ids are optional; missing or duplicated ids are replaced with
/// fresh ones. Every milestone goes through the same sorted insert as a
/// commit, so a loaded profile honors the ordering invariant.
#[derive(Debug, Deserialize)]
struct ProfileRecord {
    #[serde(default)]
    birth_date: BirthDate,
    #[serde(default)]
    milestones: TracksRecord,
}

#[derive(Debug, Default, Deserialize)]
struct TracksRecord {
    #[serde(default, rename = "EMOTION", alias = "emotion")]
    emotion: Vec<MilestoneRecord>,
    #[serde(default, rename = "CAREER", alias = "career")]
    career: Vec<MilestoneRecord>,
}

#[derive(Debug, Deserialize)]
struct MilestoneRecord {
    #[serde(default)]
    id: Option<MilestoneId>,
    #[serde(alias = "age_range_label")]
    age_range: AgeRange,
    #[serde(alias = "status")]
    status_code: String,
}

impl From<ProfileRecord> for UserProfile {
    fn from(record: ProfileRecord) -> Self {
        let mut profile = UserProfile::new(record.birth_date);
        let mut seen = HashSet::new();
        let TracksRecord { emotion, career } = record.milestones;

        for (dimension, records) in [(Dimension::Emotion, emotion), (Dimension::Career, career)] {
            for r in records {
                let id = match r.id {
                    Some(id) if seen.insert(id) => id,
                    _ => {
                        let fresh = MilestoneId::new();
                        seen.insert(fresh);
                        fresh
                    }
                };
                profile.insert(dimension, Milestone::with_id(id, r.age_range, r.status_code));
            }
        }

        profile
    }
}
