//! Turns a [`ProfileRecord`] into the text documents of a static site.
//!
//! Rendering is total: every record, however incomplete, produces a full
//! document. Missing fields fall back to placeholder copy and empty sequences
//! drop their section. All user text passes through [`html_escape`].

use crate::core::layout::{BuilderLayout, ClassicLayout, ModernLayout};
use crate::domain::model::ProfileRecord;
use crate::domain::site::RenderedSite;
use crate::domain::template::{ExportFlow, TemplateSelector};
use crate::utils::html::html_escape;

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_TITLE: &str = "Your Title";
pub const PLACEHOLDER_BIO: &str = "Tell us about yourself...";

pub const DEFAULT_ICON_FONT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.0.0/css/all.min.css";

/// Which optional blocks have renderable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionPresence {
    pub skills: bool,
    pub projects: bool,
    pub experience: bool,
    pub education: bool,
    pub contact: bool,
}

impl SectionPresence {
    pub fn of(profile: &ProfileRecord) -> Self {
        Self {
            skills: !profile.skills.is_empty(),
            projects: !profile.projects.is_empty(),
            experience: !profile.experience.is_empty(),
            education: !profile.education.is_empty(),
            contact: profile.personal_info.has_contact_info(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Icon-font stylesheet linked from profile layouts.
    pub icon_font_url: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            icon_font_url: DEFAULT_ICON_FONT_URL.to_string(),
        }
    }
}

/// Everything a layout reads while rendering one document.
pub struct ProfileView<'a> {
    pub profile: &'a ProfileRecord,
    pub presence: SectionPresence,
    pub options: &'a RenderOptions,
    pub flow: ExportFlow,
}

fn escaped_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        html_escape(value)
    }
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a ProfileRecord, options: &'a RenderOptions, flow: ExportFlow) -> Self {
        Self {
            profile,
            presence: SectionPresence::of(profile),
            options,
            flow,
        }
    }

    pub fn name(&self) -> String {
        escaped_or(&self.profile.personal_info.name, PLACEHOLDER_NAME)
    }

    pub fn title(&self) -> String {
        escaped_or(&self.profile.personal_info.title, PLACEHOLDER_TITLE)
    }

    pub fn bio(&self) -> String {
        escaped_or(&self.profile.personal_info.bio, PLACEHOLDER_BIO)
    }

    /// `"{name} - Portfolio"`, or just `"Portfolio"` without a name.
    pub fn document_title(&self) -> String {
        let name = self.profile.personal_info.name.trim();
        if name.is_empty() {
            "Portfolio".to_string()
        } else {
            format!("{} - Portfolio", html_escape(name))
        }
    }

    /// `<head>` element shared by every layout. The icon font is only linked when requested.
    pub fn document_head(&self, with_icon_font: bool) -> String {
        let icon_font = if with_icon_font {
            format!(
                "\n    <link href=\"{}\" rel=\"stylesheet\">",
                html_escape(&self.options.icon_font_url)
            )
        } else {
            String::new()
        };

        format!(
            r#"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="{stylesheet}">{icon_font}
</head>"#,
            title = self.document_title(),
            stylesheet = self.flow.stylesheet_name(),
            icon_font = icon_font,
        )
    }
}

/// One fixed visual layout.
pub trait LayoutStrategy: Send + Sync {
    fn render_html(&self, view: &ProfileView<'_>) -> String;
    fn stylesheet(&self) -> &'static str;
    fn script(&self) -> Option<&'static str>;
}

pub fn layout_for(flow: ExportFlow, template: TemplateSelector) -> Box<dyn LayoutStrategy> {
    match (flow, template) {
        (ExportFlow::Profile, TemplateSelector::Modern) => Box::new(ModernLayout),
        (ExportFlow::Profile, TemplateSelector::Classic) => Box::new(ClassicLayout),
        (ExportFlow::Builder, template) => Box::new(BuilderLayout::new(template)),
    }
}

pub fn render_site(
    profile: &ProfileRecord,
    flow: ExportFlow,
    template: TemplateSelector,
    options: &RenderOptions,
) -> RenderedSite {
    let view = ProfileView::new(profile, options, flow);
    tracing::debug!(
        "Rendering {} layout for {} flow (presence: {:?})",
        template,
        flow,
        view.presence
    );

    let layout = layout_for(flow, template);
    RenderedSite {
        flow,
        template,
        html: layout.render_html(&view),
        css: layout.stylesheet().to_string(),
        script: layout.script().map(str::to_string),
    }
}
