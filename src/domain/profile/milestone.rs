//! Milestone entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::MilestoneId;
use crate::domain::reference::AgeRange;

/// A single recorded life event: an age bucket plus a status code.
///
/// Milestones are created on commit and removed on delete; they are never
/// edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    id: MilestoneId,
    age_range: AgeRange,
    status_code: String,
}

impl Milestone {
    /// Creates a milestone with a fresh session-local identifier.
    pub fn new(age_range: AgeRange, status_code: impl Into<String>) -> Self {
        Self::with_id(MilestoneId::new(), age_range, status_code)
    }

    /// Creates a milestone with a known identifier.
    pub fn with_id(id: MilestoneId, age_range: AgeRange, status_code: impl Into<String>) -> Self {
        Self {
            id,
            age_range,
            status_code: status_code.into(),
        }
    }

    pub fn id(&self) -> MilestoneId {
        self.id
    }

    pub fn age_range(&self) -> &AgeRange {
        &self.age_range
    }

    pub fn status_code(&self) -> &str {
        &self.status_code
    }

    /// Start age of the milestone's bucket, if the label has one.
    pub fn start_age(&self) -> Option<u32> {
        self.age_range.start_age()
    }

    /// Ordering key: ascending start age, unparseable labels last.
    pub(crate) fn sort_key(&self) -> (bool, u32) {
        match self.start_age() {
            Some(age) => (false, age),
            None => (true, 0),
        }
    }
}
