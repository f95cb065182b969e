//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Summary providers (Gemini, OpenAI-compatible, disabled, mock)
//! - `export` - Markdown/JSON exporters and local file storage
//! - `profile_file` - Loads a profile from YAML or JSON
//! - `terminal` - Interactive wizard and text rendering

pub mod ai;
pub mod export;
pub mod profile_file;
pub mod terminal;

pub use ai::{build_provider, DisabledProvider, GeminiProvider, MockAIProvider, OpenAIProvider};
pub use export::{exporter_for, JsonReportExporter, LocalReportStorage, MarkdownReportExporter};
pub use profile_file::{load_profile, ProfileFileError};
pub use terminal::{Wizard, WizardError};
