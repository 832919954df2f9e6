use crate::domain::model::ProfileRecord;
use crate::domain::template::{ExportFlow, TemplateSelector};

/// A record as read from its source. Builder-shaped inputs carry their own layout number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedProfile {
    pub record: ProfileRecord,
    pub layout: Option<TemplateSelector>,
}

impl From<ProfileRecord> for LoadedProfile {
    fn from(record: ProfileRecord) -> Self {
        Self { record, layout: None }
    }
}

/// The text documents produced for one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSite {
    pub flow: ExportFlow,
    pub template: TemplateSelector,
    pub html: String,
    pub css: String,
    pub script: Option<String>,
}

impl RenderedSite {
    /// Archive entries as `(file name, contents)`, in the order they are written.
    pub fn artifacts(&self) -> Vec<(&'static str, &str)> {
        let mut artifacts = vec![
            ("index.html", self.html.as_str()),
            (self.flow.stylesheet_name(), self.css.as_str()),
        ];
        if let (Some(name), Some(script)) = (self.flow.script_name(), self.script.as_deref()) {
            artifacts.push((name, script));
        }
        artifacts
    }

    pub fn total_bytes(&self) -> usize {
        self.artifacts().iter().map(|(_, contents)| contents.len()).sum()
    }
}

/// A rendered site plus the file name its archive should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportBundle {
    pub site: RenderedSite,
    pub archive_name: String,
}
