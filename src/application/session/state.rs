//! LifeSession - explicit wizard state with reducer transitions.
//!
//! Every user action is a [`SessionAction`]; [`LifeSession::reduce`] returns
//! the next session or an error, leaving the current one untouched. The
//! front end only ever swaps whole sessions.

use crate::domain::foundation::{BirthDate, MilestoneId, StateMachine};
use crate::domain::profile::UserProfile;
use crate::domain::reference::{AgeRange, Dimension};
use crate::domain::report::{LifeReport, ReportError};

use super::{SessionError, WizardStep};

/// One user action against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetBirthDate(BirthDate),
    /// Switch the active dimension; resets the selected status.
    SwitchTab(Dimension),
    /// Select one of the ten fixed age ranges.
    SelectRange(String),
    ClearRange,
    /// Select a status code of the active dimension.
    SelectStatus(String),
    /// Record the current selection in the active dimension.
    Commit,
    Remove {
        dimension: Dimension,
        id: MilestoneId,
    },
    /// Enter the blocking generation step.
    BeginGeneration,
    /// Store the finished report and show it.
    FinishGeneration(LifeReport),
    /// Abandon a pending generation.
    CancelGeneration,
    /// Leave the report and go back to editing.
    BackToInput,
}

/// Complete state of one wizard run.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeSession {
    profile: UserProfile,
    step: WizardStep,
    active_tab: Dimension,
    selected_range: Option<AgeRange>,
    selected_status: String,
    report: Option<LifeReport>,
}

impl Default for LifeSession {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

impl LifeSession {
    /// Fresh session on the input step with the EMOTION tab active.
    pub fn new(profile: UserProfile) -> Self {
        let active_tab = Dimension::Emotion;
        Self {
            profile,
            step: WizardStep::Input,
            active_tab,
            selected_range: None,
            selected_status: active_tab.default_status().value.to_string(),
            report: None,
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn active_tab(&self) -> Dimension {
        self.active_tab
    }

    pub fn selected_range(&self) -> Option<&AgeRange> {
        self.selected_range.as_ref()
    }

    pub fn selected_status(&self) -> &str {
        &self.selected_status
    }

    /// Last finished report, if any.
    pub fn report(&self) -> Option<&LifeReport> {
        self.report.as_ref()
    }

    /// Applies an action and returns the resulting session.
    ///
    /// # Errors
    ///
    /// - `InputBlocked` for edits outside the input step
    /// - `UnknownAgeRange` / `UnknownStatus` for selections outside the tables
    /// - `Report(EmptyProfile)` when generation starts with no milestones
    /// - `InvalidTransition` for step changes the wizard does not allow
    pub fn reduce(&self, action: SessionAction) -> Result<LifeSession, SessionError> {
        let mut next = self.clone();

        match action {
            SessionAction::SetBirthDate(birth_date) => {
                self.require_input()?;
                next.profile.set_birth_date(birth_date);
            }
            SessionAction::SwitchTab(dimension) => {
                self.require_input()?;
                next.active_tab = dimension;
                next.selected_status = dimension.default_status().value.to_string();
            }
            SessionAction::SelectRange(label) => {
                self.require_input()?;
                let range = AgeRange::standard(&label)
                    .map_err(|_| SessionError::UnknownAgeRange(label.clone()))?;
                next.selected_range = Some(range);
            }
            SessionAction::ClearRange => {
                self.require_input()?;
                next.selected_range = None;
            }
            SessionAction::SelectStatus(code) => {
                self.require_input()?;
                let option = self.active_tab.status_option(code.trim()).ok_or_else(|| {
                    SessionError::UnknownStatus {
                        dimension: self.active_tab.to_string(),
                        code: code.clone(),
                    }
                })?;
                next.selected_status = option.value.to_string();
            }
            SessionAction::Commit => {
                self.require_input()?;
                // Nothing selected: no-op.
                if let Some(range) = next.selected_range.take() {
                    let id = next
                        .profile
                        .commit(self.active_tab, range, self.selected_status.clone());
                    tracing::debug!(dimension = %self.active_tab, milestone_id = %id, "milestone committed");
                }
            }
            SessionAction::Remove { dimension, id } => {
                self.require_input()?;
                if next.profile.remove(dimension, id) {
                    tracing::debug!(%dimension, milestone_id = %id, "milestone removed");
                }
            }
            SessionAction::BeginGeneration => {
                self.require_input()?;
                if self.profile.is_empty() {
                    return Err(ReportError::EmptyProfile.into());
                }
                next.step = self.transition(WizardStep::Generating)?;
            }
            SessionAction::FinishGeneration(report) => {
                next.step = self.transition(WizardStep::Report)?;
                next.report = Some(report);
            }
            SessionAction::CancelGeneration => {
                if self.step != WizardStep::Generating {
                    return Err(self.invalid(WizardStep::Input));
                }
                next.step = self.transition(WizardStep::Input)?;
            }
            SessionAction::BackToInput => {
                if self.step != WizardStep::Report {
                    return Err(self.invalid(WizardStep::Input));
                }
                next.step = self.transition(WizardStep::Input)?;
            }
        }

        if next.step != self.step {
            tracing::debug!(from = %self.step, to = %next.step, "wizard step changed");
        }

        Ok(next)
    }

    fn require_input(&self) -> Result<(), SessionError> {
        if self.step.accepts_input() {
            Ok(())
        } else {
            Err(SessionError::InputBlocked(self.step))
        }
    }

    fn transition(&self, to: WizardStep) -> Result<WizardStep, SessionError> {
        self.step.transition_to(to).map_err(|_| self.invalid(to))
    }

    fn invalid(&self, to: WizardStep) -> SessionError {
        SessionError::InvalidTransition {
            from: self.step,
            to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::NarrativeSummary;

    fn apply(session: &LifeSession, actions: Vec<SessionAction>) -> LifeSession {
        actions
            .into_iter()
            .fold(session.clone(), |s, a| s.reduce(a).unwrap())
    }

    fn with_one_milestone() -> LifeSession {
        apply(
            &LifeSession::default(),
            vec![
                SessionAction::SelectRange("21-25".into()),
                SessionAction::Commit,
            ],
        )
    }

    #[test]
    fn new_session_defaults() {
        let session = LifeSession::default();
        assert_eq!(session.step(), WizardStep::Input);
        assert_eq!(session.active_tab(), Dimension::Emotion);
        assert_eq!(session.selected_status(), "first_love");
        assert!(session.selected_range().is_none());
        assert_eq!(session.profile().birth_date().to_string(), "1995-06-15");
    }

    #[test]
    fn switch_tab_resets_status_but_keeps_range() {
        let session = apply(
            &LifeSession::default(),
            vec![
                SessionAction::SelectStatus("breakup".into()),
                SessionAction::SelectRange("26-30".into()),
                SessionAction::SwitchTab(Dimension::Career),
            ],
        );

        assert_eq!(session.active_tab(), Dimension::Career);
        assert_eq!(session.selected_status(), "first_job");
        assert_eq!(session.selected_range().map(|r| r.label()), Some("26-30"));
    }

    #[test]
    fn commit_without_range_is_noop() {
        let session = LifeSession::default();
        let next = session.reduce(SessionAction::Commit).unwrap();
        assert_eq!(next, session);
    }

    #[test]
    fn commit_clears_range_and_keeps_status() {
        let session = apply(
            &LifeSession::default(),
            vec![
                SessionAction::SwitchTab(Dimension::Career),
                SessionAction::SelectStatus("upgrade".into()),
                SessionAction::SelectRange("31-35".into()),
                SessionAction::Commit,
            ],
        );

        assert!(session.selected_range().is_none());
        assert_eq!(session.selected_status(), "upgrade");
        let career = session.profile().milestones(Dimension::Career);
        assert_eq!(career.len(), 1);
        assert_eq!(career[0].status_code(), "upgrade");
    }

    #[test]
    fn rejects_unknown_selections_without_change() {
        let session = LifeSession::default();

        assert_eq!(
            session.reduce(SessionAction::SelectRange("20-22".into())),
            Err(SessionError::UnknownAgeRange("20-22".into()))
        );
        // A career code is not valid on the emotion tab.
        assert!(matches!(
            session.reduce(SessionAction::SelectStatus("first_job".into())),
            Err(SessionError::UnknownStatus { .. })
        ));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let session = with_one_milestone();
        let next = session
            .reduce(SessionAction::Remove {
                dimension: Dimension::Emotion,
                id: MilestoneId::new(),
            })
            .unwrap();
        assert_eq!(next.profile(), session.profile());
    }

    #[test]
    fn remove_deletes_milestone() {
        let session = with_one_milestone();
        let id = session.profile().milestones(Dimension::Emotion)[0].id();
        let next = session
            .reduce(SessionAction::Remove {
                dimension: Dimension::Emotion,
                id,
            })
            .unwrap();
        assert!(next.profile().is_empty());
    }

    #[test]
    fn begin_generation_rejects_empty_profile() {
        let session = LifeSession::default();
        let err = session.reduce(SessionAction::BeginGeneration).unwrap_err();
        assert_eq!(err, SessionError::Report(ReportError::EmptyProfile));
        assert_eq!(err.to_string(), "请至少记录一个人生节点");
    }

    #[test]
    fn generating_blocks_input() {
        let generating = with_one_milestone()
            .reduce(SessionAction::BeginGeneration)
            .unwrap();
        assert_eq!(generating.step(), WizardStep::Generating);

        for action in [
            SessionAction::Commit,
            SessionAction::SwitchTab(Dimension::Career),
            SessionAction::SelectRange("21-25".into()),
            SessionAction::BeginGeneration,
        ] {
            assert_eq!(
                generating.reduce(action),
                Err(SessionError::InputBlocked(WizardStep::Generating))
            );
        }
    }

    #[test]
    fn full_cycle_through_report_and_back() {
        let generating = with_one_milestone()
            .reduce(SessionAction::BeginGeneration)
            .unwrap();
        let report = LifeReport::draft(generating.profile().clone())
            .unwrap()
            .with_summary(NarrativeSummary::from_completion("ok"));

        let shown = generating
            .reduce(SessionAction::FinishGeneration(report.clone()))
            .unwrap();
        assert_eq!(shown.step(), WizardStep::Report);
        assert_eq!(shown.report(), Some(&report));

        let back = shown.reduce(SessionAction::BackToInput).unwrap();
        assert_eq!(back.step(), WizardStep::Input);
        assert_eq!(back.profile(), generating.profile());
    }

    #[test]
    fn cancel_returns_to_input_with_profile_intact() {
        let session = with_one_milestone();
        let cancelled = session
            .reduce(SessionAction::BeginGeneration)
            .unwrap()
            .reduce(SessionAction::CancelGeneration)
            .unwrap();

        assert_eq!(cancelled.step(), WizardStep::Input);
        assert_eq!(cancelled.profile(), session.profile());
        assert!(cancelled.report().is_none());
    }

    #[test]
    fn finish_requires_generating_step() {
        let session = with_one_milestone();
        let report = LifeReport::draft(session.profile().clone()).unwrap();
        assert_eq!(
            session.reduce(SessionAction::FinishGeneration(report)),
            Err(SessionError::InvalidTransition {
                from: WizardStep::Input,
                to: WizardStep::Report
            })
        );
    }

    #[test]
    fn cancel_outside_generation_is_invalid() {
        assert!(matches!(
            LifeSession::default().reduce(SessionAction::CancelGeneration),
            Err(SessionError::InvalidTransition { .. })
        ));
    }
}
