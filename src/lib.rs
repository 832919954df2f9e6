pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{
    cli::{ConsoleNotifier, LocalStorage},
    ExportOverrides, ExportSettings, TomlConfig,
};

pub use core::{
    export::ExportEngine,
    pipeline::{ProfileSource, SitePipeline},
    render::{render_site, RenderOptions},
};
pub use domain::builder::BuilderProfile;
pub use domain::model::ProfileRecord;
pub use domain::template::{ExportFlow, TemplateSelector};
pub use session::{IdentityProvider, SessionContext};
pub use utils::error::{ExportError, Result};
