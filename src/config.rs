use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_result_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_result_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_result_limit() -> u16 {
    20
}
fn default_max_limit() -> u16 {
    100
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Scoring weights as configured; mirrors `ScoringWeights` with serde
/// defaults so a partial `[scoring.weights]` table still loads
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_courses_weight")]
    pub courses: f64,
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_credential_weight")]
    pub credential: f64,
    #[serde(default = "default_course_step")]
    pub course_step: f64,
    #[serde(default = "default_skill_step")]
    pub skill_step: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            courses: default_courses_weight(),
            skills: default_skills_weight(),
            location: default_location_weight(),
            credential: default_credential_weight(),
            course_step: default_course_step(),
            skill_step: default_skill_step(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        Self {
            courses: config.courses,
            skills: config.skills,
            location: config.location,
            credential: config.credential,
            course_step: config.course_step,
            skill_step: config.skill_step,
        }
    }
}

fn default_courses_weight() -> f64 {
    40.0
}
fn default_skills_weight() -> f64 {
    30.0
}
fn default_location_weight() -> f64 {
    15.0
}
fn default_credential_weight() -> f64 {
    15.0
}
fn default_course_step() -> f64 {
    13.0
}
fn default_skill_step() -> f64 {
    7.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TALENT__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TALENT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("TALENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TALENT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
