use crate::core::layout::sections::{render_profile_sections, SectionClasses};
use crate::core::render::{LayoutStrategy, ProfileView};
use crate::domain::model::{ContactField, ContactKind};
use crate::utils::html::html_escape;

const MODERN_CSS: &str = include_str!("../../../assets/modern.css");
pub(crate) const PROFILE_SCRIPT: &str = include_str!("../../../assets/script.js");

const CLASSES: SectionClasses = SectionClasses {
    section_modifier: "",
    skills_container: "skills-grid",
    skill_tag: "skill-tag",
    projects_container: "projects-grid",
    project_card: "project-card",
    tech_tag: "tech-tag",
};

/// Gradient cards on a purple backdrop, contact details as pills.
pub struct ModernLayout;

fn contact_item(field: &ContactField<'_>) -> String {
    let value = html_escape(field.value);
    let body = match field.kind {
        ContactKind::LinkedIn => format!("<a href=\"{}\" target=\"_blank\">LinkedIn Profile</a>", value),
        ContactKind::GitHub => format!("<a href=\"{}\" target=\"_blank\">GitHub Profile</a>", value),
        _ => format!("<span>{}</span>", value),
    };

    format!(
        r#"
                <div class="contact-item">
                    <i class="{icon}"></i>
                    {body}
                </div>"#,
        icon = field.kind.icon_class(),
        body = body,
    )
}

fn contact_block(view: &ProfileView<'_>) -> String {
    if !view.presence.contact {
        return String::new();
    }
    let items: String = view
        .profile
        .personal_info
        .contact_fields()
        .iter()
        .map(contact_item)
        .collect();
    format!(
        "\n            <div class=\"contact-info\">{}\n            </div>",
        items
    )
}

impl LayoutStrategy for ModernLayout {
    fn render_html(&self, view: &ProfileView<'_>) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
{head}
<body>
    <div class="container">
        <header class="header">
            <div class="profile">
                <div class="profile-image">
                    <i class="fas fa-user-circle"></i>
                </div>
                <h1>{name}</h1>
                <h2>{title}</h2>
                <p class="bio">{bio}</p>
            </div>{contact}
        </header>
{sections}
    </div>

    <script src="script.js"></script>
</body>
</html>
"#,
            head = view.document_head(true),
            name = view.name(),
            title = view.title(),
            bio = view.bio(),
            contact = contact_block(view),
            sections = render_profile_sections(view, &CLASSES),
        )
    }

    fn stylesheet(&self) -> &'static str {
        MODERN_CSS
    }

    fn script(&self) -> Option<&'static str> {
        Some(PROFILE_SCRIPT)
    }
}
