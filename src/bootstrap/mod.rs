pub mod cli;
pub mod config;
pub mod run;
pub mod settings;
pub mod tracing;
pub mod wiring;

pub use cli::Cli;
pub use config::load_config;
pub use run::run_app;
pub use settings::{resolve_settings, ModifierSource, Settings};
pub use wiring::{wire_services, AppServices, WiringError};
