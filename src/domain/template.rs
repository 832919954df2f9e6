use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two fixed visual layouts to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "SelectorRepr")]
pub enum TemplateSelector {
    #[default]
    Modern,
    Classic,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SelectorRepr {
    Number(i64),
    Name(String),
}

impl TryFrom<SelectorRepr> for TemplateSelector {
    type Error = String;

    fn try_from(repr: SelectorRepr) -> Result<Self, Self::Error> {
        match repr {
            SelectorRepr::Number(1) => Ok(TemplateSelector::Modern),
            SelectorRepr::Number(2) => Ok(TemplateSelector::Classic),
            SelectorRepr::Number(n) => Err(format!("unknown template number {}, expected 1 or 2", n)),
            SelectorRepr::Name(name) => name.parse(),
        }
    }
}

impl TemplateSelector {
    /// Builder forms store the layout as a number; anything but 1 picks the second layout.
    pub fn from_builder_number(number: u8) -> Self {
        if number == 1 {
            TemplateSelector::Modern
        } else {
            TemplateSelector::Classic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSelector::Modern => "modern",
            TemplateSelector::Classic => "classic",
        }
    }
}

impl FromStr for TemplateSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" | "1" => Ok(TemplateSelector::Modern),
            "classic" | "2" => Ok(TemplateSelector::Classic),
            other => Err(format!(
                "unknown template '{}', expected modern, classic, 1 or 2",
                other
            )),
        }
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which export flow produced the request. Decides the artifact set and layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFlow {
    /// Multi-section profile: index.html, styles.css, script.js.
    #[default]
    Profile,
    /// Simple builder profile: index.html, style.css.
    Builder,
}

impl ExportFlow {
    pub fn stylesheet_name(&self) -> &'static str {
        match self {
            ExportFlow::Profile => "styles.css",
            ExportFlow::Builder => "style.css",
        }
    }

    pub fn script_name(&self) -> Option<&'static str> {
        match self {
            ExportFlow::Profile => Some("script.js"),
            ExportFlow::Builder => None,
        }
    }

    /// Archive name used when the profile has no name.
    pub fn fallback_archive_name(&self, template: TemplateSelector) -> String {
        match self {
            ExportFlow::Profile => "my-portfolio.zip".to_string(),
            ExportFlow::Builder => format!("{}-portfolio.zip", template.as_str()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFlow::Profile => "profile",
            ExportFlow::Builder => "builder",
        }
    }
}

impl FromStr for ExportFlow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "profile" => Ok(ExportFlow::Profile),
            "builder" => Ok(ExportFlow::Builder),
            other => Err(format!("unknown flow '{}', expected profile or builder", other)),
        }
    }
}

impl fmt::Display for ExportFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
