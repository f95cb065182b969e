//! Wizard step state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the user is in the two-screen flow.
///
/// `Generating` is the blocking overlay between the input form and the
/// report; nothing but cancellation is accepted while in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    #[default]
    Input,
    Generating,
    Report,
}

impl WizardStep {
    /// True when profile edits are accepted.
    pub fn accepts_input(&self) -> bool {
        matches!(self, WizardStep::Input)
    }
}

impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            WizardStep::Input => vec![WizardStep::Generating],
            // Report on completion, Input on cancellation.
            WizardStep::Generating => vec![WizardStep::Report, WizardStep::Input],
            WizardStep::Report => vec![WizardStep::Input],
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardStep::Input => write!(f, "input"),
            WizardStep::Generating => write!(f, "generating"),
            WizardStep::Report => write!(f, "report"),
        }
    }
}
