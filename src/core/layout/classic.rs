use crate::core::layout::modern::PROFILE_SCRIPT;
use crate::core::layout::sections::{render_profile_sections, SectionClasses};
use crate::core::render::{LayoutStrategy, ProfileView};
use crate::domain::model::{ContactField, ContactKind};
use crate::utils::html::html_escape;

const CLASSIC_CSS: &str = include_str!("../../../assets/classic.css");

const CLASSES: SectionClasses = SectionClasses {
    section_modifier: " classic-section",
    skills_container: "skills-list",
    skill_tag: "skill-item",
    projects_container: "projects-list",
    project_card: "project-item",
    tech_tag: "tech-item",
};

/// Serif typography, bordered header and a two-column section grid.
pub struct ClassicLayout;

fn contact_line(field: &ContactField<'_>) -> String {
    let value = html_escape(field.value);
    let body = match field.kind {
        ContactKind::LinkedIn => format!("<a href=\"{}\" target=\"_blank\">LinkedIn</a>", value),
        ContactKind::GitHub => format!("<a href=\"{}\" target=\"_blank\">GitHub</a>", value),
        _ => value,
    };
    format!(
        "\n                <p><i class=\"{}\"></i> {}</p>",
        field.kind.icon_class(),
        body
    )
}

impl LayoutStrategy for ClassicLayout {
    fn render_html(&self, view: &ProfileView<'_>) -> String {
        let contact = if view.presence.contact {
            let lines: String = view
                .profile
                .personal_info
                .contact_fields()
                .iter()
                .map(contact_line)
                .collect();
            format!(
                "\n            <div class=\"contact-info classic-contact\">{}\n            </div>",
                lines
            )
        } else {
            String::new()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
{head}
<body class="classic-template">
    <div class="container">
        <header class="header classic-header">
            <div class="profile">
                <h1>{name}</h1>
                <h2>{title}</h2>
                <p class="bio">{bio}</p>
            </div>{contact}
        </header>

        <div class="content-grid">{sections}
        </div>
    </div>

    <script src="script.js"></script>
</body>
</html>
"#,
            head = view.document_head(true),
            name = view.name(),
            title = view.title(),
            bio = view.bio(),
            contact = contact,
            sections = render_profile_sections(view, &CLASSES),
        )
    }

    fn stylesheet(&self) -> &'static str {
        CLASSIC_CSS
    }

    fn script(&self) -> Option<&'static str> {
        Some(PROFILE_SCRIPT)
    }
}
