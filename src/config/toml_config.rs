use crate::domain::template::{ExportFlow, TemplateSelector};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// Every table is optional; an empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub export: ExportSection,
    pub source: Option<SourceSection>,
    pub render: Option<RenderSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportSection {
    pub flow: Option<ExportFlow>,
    /// `"modern"`, `"classic"`, `1` or `2`.
    pub template: Option<TemplateSelector>,
    pub output_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceSection {
    pub profile_path: Option<String>,
    pub demo: Option<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSection {
    pub icon_font_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    /// `compact` (default) or `json`.
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ExportError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ExportError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ExportError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn profile_path(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.profile_path.as_deref())
    }

    pub fn demo(&self) -> Option<u8> {
        self.source.as_ref().and_then(|s| s.demo)
    }

    pub fn configured_icon_font_url(&self) -> Option<&str> {
        self.render.as_ref().and_then(|r| r.icon_font_url.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|format| format.eq_ignore_ascii_case("json"))
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(output_path) = &self.export.output_path {
            validate_path("export.output_path", output_path)?;
        }

        if let Some(url) = self.configured_icon_font_url() {
            validate_url("render.icon_font_url", url)?;
        }

        if let Some(profile_path) = self.profile_path() {
            validate_file_extension("source.profile_path", profile_path, &["json", "toml"])?;
        }

        if let Some(demo) = self.demo() {
            if !(1..=2).contains(&demo) {
                return Err(ExportError::InvalidConfigValueError {
                    field: "source.demo".to_string(),
                    value: demo.to_string(),
                    reason: "Demo profiles are numbered 1 and 2".to_string(),
                });
            }
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ExportError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            if !LOG_FORMATS.contains(&format.to_ascii_lowercase().as_str()) {
                return Err(ExportError::InvalidConfigValueError {
                    field: "logging.format".to_string(),
                    value: format.to_string(),
                    reason: format!("Valid formats: {}", LOG_FORMATS.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
