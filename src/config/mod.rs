pub mod settings;

pub use settings::{ApiSettings, LogSettings, Settings};
