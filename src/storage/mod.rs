//! Storage module for application configuration.

pub mod config;

pub use config::{
    AppConfig, AssetSettings, ConfigError, RecognitionSettings, SpeechSettings, UiSettings,
};
