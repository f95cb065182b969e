//! Terminal front end.
//!
//! - `Wizard` - interactive input/report loop
//! - `renderer` - text screens (input form, report card, distribution chart)
//! - `LoadingTicker` - cycling message while the summary is pending

mod command;
mod loading;
pub mod renderer;
mod wizard;

pub use command::{CommandError, WizardCommand};
pub use loading::{LoadingTicker, DEFAULT_LOADING_INTERVAL, LOADING_MESSAGES};
pub use wizard::{Wizard, WizardError};
