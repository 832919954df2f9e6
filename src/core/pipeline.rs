use crate::core::package::{archive_file_name, package_site_in_background};
use crate::core::render::{render_site, RenderOptions};
use crate::core::{ConfigProvider, ExportBundle, ExportPipeline, LoadedProfile, ProfileRecord, Storage};
use crate::domain::builder::{demo_profile, BuilderProfile};
use crate::domain::template::ExportFlow;
use crate::utils::error::{ExportError, Result};
use std::path::PathBuf;

/// Where the finished profile record comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    /// A `.json` or `.toml` file. Builder-shaped when the flow is [`ExportFlow::Builder`].
    File(PathBuf),
    /// One of the built-in demo builder profiles.
    Demo(u8),
    /// A record already held in memory by the caller.
    Inline(Box<ProfileRecord>),
}

fn parse_profile<T: serde::de::DeserializeOwned>(path: &str, content: &str, is_toml: bool) -> Result<T> {
    let parsed = if is_toml {
        toml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| ExportError::ProfileLoadError {
        path: path.to_string(),
        message,
    })
}

fn builder_input(builder: BuilderProfile) -> LoadedProfile {
    LoadedProfile {
        layout: Some(builder.template_selector()),
        record: ProfileRecord::from(builder),
    }
}

impl ProfileSource {
    pub async fn load(&self, flow: ExportFlow) -> Result<LoadedProfile> {
        match self {
            ProfileSource::Inline(profile) => Ok(LoadedProfile::from((**profile).clone())),
            ProfileSource::Demo(number) => demo_profile(*number)
                .map(builder_input)
                .ok_or_else(|| ExportError::InvalidConfigValueError {
                    field: "demo".to_string(),
                    value: number.to_string(),
                    reason: "Demo profiles are numbered 1 and 2".to_string(),
                }),
            ProfileSource::File(path) => {
                let display = path.display().to_string();
                let content = tokio::fs::read_to_string(path).await.map_err(|e| {
                    ExportError::ProfileLoadError {
                        path: display.clone(),
                        message: e.to_string(),
                    }
                })?;
                let is_toml = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

                match flow {
                    ExportFlow::Profile => {
                        parse_profile::<ProfileRecord>(&display, &content, is_toml).map(LoadedProfile::from)
                    }
                    ExportFlow::Builder => {
                        parse_profile::<BuilderProfile>(&display, &content, is_toml).map(builder_input)
                    }
                }
            }
        }
    }
}

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: ProfileSource,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C, source: ProfileSource) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            icon_font_url: self.config.icon_font_url().to_string(),
        }
    }

    /// Render without packaging, for dry runs.
    pub async fn preview(&self) -> Result<ExportBundle> {
        let profile = self.extract().await?;
        self.transform(profile).await
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> ExportPipeline for SitePipeline<S, C> {
    async fn extract(&self) -> Result<LoadedProfile> {
        tracing::debug!("Loading profile from {:?}", self.source);
        let loaded = self.source.load(self.config.flow()).await?;
        let profile = &loaded.record;
        tracing::debug!(
            "Loaded profile: {} skills, {} projects, {} experience, {} education entries",
            profile.skills.len(),
            profile.projects.len(),
            profile.experience.len(),
            profile.education.len()
        );
        Ok(loaded)
    }

    async fn transform(&self, loaded: LoadedProfile) -> Result<ExportBundle> {
        let LoadedProfile { record: profile, layout } = loaded;
        let flow = self.config.flow();
        let template = self.config.template().or(layout).unwrap_or_default();
        let site = render_site(&profile, flow, template, &self.render_options());
        let archive_name = archive_file_name(&profile.personal_info.name, flow, template);

        Ok(ExportBundle { site, archive_name })
    }

    async fn load(&self, bundle: ExportBundle) -> Result<String> {
        let ExportBundle { site, archive_name } = bundle;
        tracing::debug!(
            "Packaging {} artifacts ({} bytes of text)",
            site.artifacts().len(),
            site.total_bytes()
        );

        let zip_data = package_site_in_background(site).await?;

        tracing::debug!("Writing {} ({} bytes) to storage", archive_name, zip_data.len());
        self.storage.write_file(&archive_name, &zip_data).await?;

        Ok(format!("{}/{}", self.config.output_path(), archive_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::TemplateSelector;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        flow: ExportFlow,
        template: Option<TemplateSelector>,
    }

    impl ConfigProvider for MockConfig {
        fn output_path(&self) -> &str {
            "test_output"
        }

        fn flow(&self) -> ExportFlow {
            self.flow
        }

        fn template(&self) -> Option<TemplateSelector> {
            self.template
        }

        fn icon_font_url(&self) -> &str {
            "https://icons.test/all.css"
        }
    }

    fn pipeline_with(
        flow: ExportFlow,
        template: Option<TemplateSelector>,
        source: ProfileSource,
    ) -> (SitePipeline<MockStorage, MockConfig>, MockStorage) {
        let storage = MockStorage::default();
        let config = MockConfig { flow, template };
        (SitePipeline::new(storage.clone(), config, source), storage)
    }

    fn pipeline(flow: ExportFlow, source: ProfileSource) -> (SitePipeline<MockStorage, MockConfig>, MockStorage) {
        pipeline_with(flow, Some(TemplateSelector::Classic), source)
    }

    fn builder_file(dir: &tempfile::TempDir, json: serde_json::Value) -> ProfileSource {
        let path = dir.path().join("builder.json");
        std::fs::write(&path, json.to_string()).unwrap();
        ProfileSource::File(path)
    }

    #[tokio::test]
    async fn test_extract_demo_profile() {
        let (pipeline, _) = pipeline(ExportFlow::Builder, ProfileSource::Demo(2));
        let loaded = pipeline.extract().await.unwrap();
        assert_eq!(loaded.record.personal_info.name, "Sarah Johnson");
        assert_eq!(loaded.record.skills.len(), 9);
        assert_eq!(loaded.layout, Some(TemplateSelector::Classic));
    }

    #[tokio::test]
    async fn test_extract_unknown_demo_fails() {
        let (pipeline, _) = pipeline(ExportFlow::Builder, ProfileSource::Demo(7));
        assert!(matches!(
            pipeline.extract().await,
            Err(ExportError::InvalidConfigValueError { .. })
        ));
    }

    #[tokio::test]
    async fn test_extract_missing_file_fails() {
        let source = ProfileSource::File(PathBuf::from("/definitely/not/here.json"));
        let (pipeline, _) = pipeline(ExportFlow::Profile, source);
        assert!(matches!(
            pipeline.extract().await,
            Err(ExportError::ProfileLoadError { .. })
        ));
    }

    #[tokio::test]
    async fn test_builder_file_layout_number_picks_stylesheet() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let source = builder_file(
            &temp_dir,
            serde_json::json!({"name": "Sam", "skills": "Go", "template": 2}),
        );
        let (pipeline, _) = pipeline_with(ExportFlow::Builder, None, source);

        let bundle = pipeline.preview().await.unwrap();
        assert_eq!(bundle.site.template, TemplateSelector::Classic);
        assert!(bundle.site.css.contains("Creative & Dynamic"));
    }

    #[tokio::test]
    async fn test_configured_layout_beats_builder_file_number() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let source = builder_file(&temp_dir, serde_json::json!({"name": "Sam", "template": 2}));
        let (pipeline, _) = pipeline_with(ExportFlow::Builder, Some(TemplateSelector::Modern), source);

        let bundle = pipeline.preview().await.unwrap();
        assert_eq!(bundle.site.template, TemplateSelector::Modern);
        assert!(bundle.site.css.contains("Modern & Clean"));
    }

    #[tokio::test]
    async fn test_profile_record_without_layout_uses_default() {
        let (pipeline, _) = pipeline_with(
            ExportFlow::Profile,
            None,
            ProfileSource::Inline(Box::new(ProfileRecord::new())),
        );

        let bundle = pipeline.preview().await.unwrap();
        assert_eq!(bundle.site.template, TemplateSelector::Modern);
    }

    #[tokio::test]
    async fn test_transform_uses_configured_layout_and_icon_font() {
        let mut profile = ProfileRecord::new();
        profile.personal_info.name = "Ada Lovelace".to_string();
        let (pipeline, _) = pipeline(ExportFlow::Profile, ProfileSource::Inline(Box::new(profile.clone())));

        let bundle = pipeline.transform(LoadedProfile::from(profile)).await.unwrap();
        assert_eq!(bundle.archive_name, "ada-lovelace-portfolio.zip");
        assert_eq!(bundle.site.template, TemplateSelector::Classic);
        assert!(bundle.site.html.contains("classic-template"));
        assert!(bundle.site.html.contains("https://icons.test/all.css"));
    }

    #[tokio::test]
    async fn test_load_writes_archive_to_storage() {
        let (pipeline, storage) = pipeline(ExportFlow::Builder, ProfileSource::Demo(1));
        let loaded = pipeline.extract().await.unwrap();
        let bundle = pipeline.transform(loaded).await.unwrap();

        let output_path = pipeline.load(bundle).await.unwrap();
        assert_eq!(output_path, "test_output/john-doe-portfolio.zip");

        let zip_data = storage.get_file("john-doe-portfolio.zip").await.unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(zip_data)).unwrap();
        assert_eq!(archive.len(), 2);
    }

    #[tokio::test]
    async fn test_preview_does_not_write() {
        let (pipeline, storage) = pipeline(ExportFlow::Builder, ProfileSource::Demo(1));
        let bundle = pipeline.preview().await.unwrap();
        assert!(bundle.site.html.contains("John Doe"));
        assert!(storage.files.lock().await.is_empty());
    }
}
