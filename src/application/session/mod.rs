//! Session module - wizard state for one interactive run.
//!
//! The session is an explicit state value advanced by a reducer. Front ends
//! (the terminal wizard, tests) feed it `SessionAction`s and render whatever
//! comes back.

mod errors;
mod state;
mod step;

pub use errors::SessionError;
pub use state::{LifeSession, SessionAction};
pub use step::WizardStep;
