use crate::domain::site::{ExportBundle, LoadedProfile};
use crate::domain::template::{ExportFlow, TemplateSelector};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Download target for finished archives.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn flow(&self) -> ExportFlow;
    /// Explicitly chosen layout. `None` lets the input decide, then the default applies.
    fn template(&self) -> Option<TemplateSelector>;
    fn icon_font_url(&self) -> &str;
}

/// Blocking user-facing notification for failed exports.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

#[async_trait]
pub trait ExportPipeline: Send + Sync {
    async fn extract(&self) -> Result<LoadedProfile>;
    async fn transform(&self, profile: LoadedProfile) -> Result<ExportBundle>;
    async fn load(&self, bundle: ExportBundle) -> Result<String>;
}
