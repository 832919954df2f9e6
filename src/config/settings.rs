use crate::config::toml_config::{TomlConfig, DEFAULT_OUTPUT_PATH};
use crate::core::pipeline::ProfileSource;
use crate::core::render::DEFAULT_ICON_FONT_URL;
use crate::core::ConfigProvider;
use crate::domain::builder::demo_profile;
use crate::domain::template::{ExportFlow, TemplateSelector};
use crate::utils::error::{ExportError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, validate_url, Validate};
use std::path::PathBuf;

/// Per-run values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ExportOverrides {
    pub profile: Option<String>,
    pub demo: Option<u8>,
    pub flow: Option<ExportFlow>,
    pub template: Option<TemplateSelector>,
    pub output_path: Option<String>,
}

/// Fully resolved export settings: overrides, then the config file, then defaults.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub source: ProfileSource,
    pub flow: ExportFlow,
    /// Only set when chosen explicitly; builder inputs otherwise bring their own.
    pub template: Option<TemplateSelector>,
    pub output_path: String,
    pub icon_font_url: String,
}

impl ExportSettings {
    pub fn resolve(overrides: &ExportOverrides, file: Option<&TomlConfig>) -> Result<Self> {
        let profile = overrides
            .profile
            .clone()
            .or_else(|| file.and_then(|f| f.profile_path()).map(str::to_string));
        let demo = overrides.demo.or_else(|| file.and_then(|f| f.demo()));

        let source = match (profile, demo) {
            (Some(_), Some(_)) => {
                return Err(ExportError::ConfigError {
                    message: "Choose either a profile file or a demo profile, not both".to_string(),
                })
            }
            (Some(path), None) => ProfileSource::File(PathBuf::from(path)),
            (None, Some(number)) => ProfileSource::Demo(number),
            (None, None) => {
                return Err(ExportError::MissingConfigError {
                    field: "profile".to_string(),
                })
            }
        };

        // Demo profiles are builder-shaped.
        let source_flow = matches!(source, ProfileSource::Demo(_)).then_some(ExportFlow::Builder);

        let flow = overrides
            .flow
            .or_else(|| file.and_then(|f| f.export.flow))
            .or(source_flow)
            .unwrap_or_default();
        let template = overrides
            .template
            .or_else(|| file.and_then(|f| f.export.template));
        let output_path = overrides
            .output_path
            .clone()
            .or_else(|| file.and_then(|f| f.export.output_path.clone()))
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());
        let icon_font_url = file
            .and_then(|f| f.configured_icon_font_url())
            .unwrap_or(DEFAULT_ICON_FONT_URL)
            .to_string();

        Ok(Self {
            source,
            flow,
            template,
            output_path,
            icon_font_url,
        })
    }
}

impl ConfigProvider for ExportSettings {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn flow(&self) -> ExportFlow {
        self.flow
    }

    fn template(&self) -> Option<TemplateSelector> {
        self.template
    }

    fn icon_font_url(&self) -> &str {
        &self.icon_font_url
    }
}

impl Validate for ExportSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_url("icon_font_url", &self.icon_font_url)?;

        match &self.source {
            ProfileSource::File(path) => {
                let path = path.to_string_lossy();
                validate_file_extension("profile", &path, &["json", "toml"])
            }
            ProfileSource::Demo(number) if demo_profile(*number).is_none() => {
                Err(ExportError::InvalidConfigValueError {
                    field: "demo".to_string(),
                    value: number.to_string(),
                    reason: "Demo profiles are numbered 1 and 2".to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_file_with_defaults() {
        let overrides = ExportOverrides {
            profile: Some("me.json".to_string()),
            ..Default::default()
        };
        let settings = ExportSettings::resolve(&overrides, None).unwrap();

        assert_eq!(settings.source, ProfileSource::File(PathBuf::from("me.json")));
        assert_eq!(settings.flow, ExportFlow::Profile);
        assert_eq!(settings.template, None);
        assert_eq!(settings.output_path, DEFAULT_OUTPUT_PATH);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_demo_implies_builder_flow() {
        let overrides = ExportOverrides {
            demo: Some(2),
            ..Default::default()
        };
        let settings = ExportSettings::resolve(&overrides, None).unwrap();

        assert_eq!(settings.flow, ExportFlow::Builder);
        assert_eq!(settings.template, None);
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[export]
template = "classic"
output_path = "./from-file"

[source]
profile_path = "file.toml"
"#,
        )
        .unwrap();
        let overrides = ExportOverrides {
            template: Some(TemplateSelector::Modern),
            ..Default::default()
        };

        let settings = ExportSettings::resolve(&overrides, Some(&file)).unwrap();
        assert_eq!(settings.template, Some(TemplateSelector::Modern));
        assert_eq!(settings.output_path, "./from-file");
        assert_eq!(settings.source, ProfileSource::File(PathBuf::from("file.toml")));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let result = ExportSettings::resolve(&ExportOverrides::default(), None);
        assert!(matches!(result, Err(ExportError::MissingConfigError { .. })));
    }

    #[test]
    fn test_profile_and_demo_together_is_an_error() {
        let overrides = ExportOverrides {
            profile: Some("me.json".to_string()),
            demo: Some(1),
            ..Default::default()
        };
        assert!(ExportSettings::resolve(&overrides, None).is_err());
    }

    #[test]
    fn test_validation_rejects_unknown_extension() {
        let overrides = ExportOverrides {
            profile: Some("me.yaml".to_string()),
            ..Default::default()
        };
        let settings = ExportSettings::resolve(&overrides, None).unwrap();
        assert!(settings.validate().is_err());
    }
}
