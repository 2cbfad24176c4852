pub mod app;
pub mod config;
pub mod logging;
pub mod render;
pub mod utils;

pub use config::{Settings, SettingsOverrides};
pub use render::{OutputFormat, RenderOptions};
