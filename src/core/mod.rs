pub mod export;
pub mod layout;
pub mod package;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::ProfileRecord;
pub use crate::domain::ports::{ConfigProvider, ExportPipeline, Notifier, Storage};
pub use crate::domain::site::{ExportBundle, LoadedProfile};
pub use crate::utils::error::Result;
