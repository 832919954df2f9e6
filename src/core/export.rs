use crate::core::{ExportPipeline, Notifier};
use crate::utils::error::Result;

/// Shown to the user whenever an export fails, whatever the cause.
pub const EXPORT_FAILURE_MESSAGE: &str = "Error exporting portfolio. Please try again.";

pub struct ExportEngine<P: ExportPipeline> {
    pipeline: P,
}

impl<P: ExportPipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting portfolio export...");

        let profile = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded profile for {}",
            if profile.record.personal_info.name.trim().is_empty() {
                "<unnamed>"
            } else {
                profile.record.personal_info.name.as_str()
            }
        );

        let bundle = self.pipeline.transform(profile).await?;
        tracing::info!(
            "Rendered {} {} site",
            bundle.site.flow,
            bundle.site.template
        );

        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!("Portfolio saved to: {}", output_path);

        Ok(output_path)
    }

    /// Runs once and reports failure through `notifier`. No retry; the user re-triggers.
    pub async fn run_or_notify(&self, notifier: &dyn Notifier) -> Option<String> {
        match self.run().await {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::error!(
                    "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                notifier.alert(EXPORT_FAILURE_MESSAGE);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExportBundle, LoadedProfile, ProfileRecord};
    use crate::domain::site::RenderedSite;
    use crate::domain::template::{ExportFlow, TemplateSelector};
    use crate::utils::error::ExportError;
    use std::sync::Mutex;

    struct StubPipeline {
        fail_load: bool,
    }

    #[async_trait::async_trait]
    impl ExportPipeline for StubPipeline {
        async fn extract(&self) -> Result<LoadedProfile> {
            let mut profile = ProfileRecord::new();
            profile.personal_info.name = "Grace Hopper".to_string();
            Ok(LoadedProfile::from(profile))
        }

        async fn transform(&self, _profile: LoadedProfile) -> Result<ExportBundle> {
            Ok(ExportBundle {
                site: RenderedSite {
                    flow: ExportFlow::Profile,
                    template: TemplateSelector::Modern,
                    html: String::new(),
                    css: String::new(),
                    script: None,
                },
                archive_name: "grace-hopper-portfolio.zip".to_string(),
            })
        }

        async fn load(&self, bundle: ExportBundle) -> Result<String> {
            if self.fail_load {
                return Err(ExportError::IoError(std::io::Error::other("disk full")));
            }
            Ok(format!("out/{}", bundle.archive_name))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_run_returns_output_path() {
        let engine = ExportEngine::new(StubPipeline { fail_load: false });
        assert_eq!(engine.run().await.unwrap(), "out/grace-hopper-portfolio.zip");
    }

    #[tokio::test]
    async fn test_failure_alerts_once_without_retry() {
        let engine = ExportEngine::new(StubPipeline { fail_load: true });
        let notifier = RecordingNotifier::default();

        assert!(engine.run_or_notify(&notifier).await.is_none());
        assert_eq!(
            *notifier.messages.lock().unwrap(),
            vec![EXPORT_FAILURE_MESSAGE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_success_is_silent() {
        let engine = ExportEngine::new(StubPipeline { fail_load: false });
        let notifier = RecordingNotifier::default();

        assert!(engine.run_or_notify(&notifier).await.is_some());
        assert!(notifier.messages.lock().unwrap().is_empty());
    }
}
