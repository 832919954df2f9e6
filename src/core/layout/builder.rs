use crate::core::render::{LayoutStrategy, ProfileView};
use crate::domain::template::TemplateSelector;
use crate::utils::html::html_escape;

const CLEAN_CSS: &str = include_str!("../../../assets/builder_clean.css");
const CREATIVE_CSS: &str = include_str!("../../../assets/builder_creative.css");

/// Single-page hero layout for builder profiles: skills, projects and an email link.
/// Both templates share the markup and differ only in stylesheet.
pub struct BuilderLayout {
    template: TemplateSelector,
}

impl BuilderLayout {
    pub fn new(template: TemplateSelector) -> Self {
        Self { template }
    }
}

fn section(kind: &str, heading: &str, body: &str) -> String {
    format!(
        r#"
        <section class="{kind}-section">
            <div class="section-content">
                <h2>{heading}</h2>{body}
            </div>
        </section>
"#,
        kind = kind,
        heading = heading,
        body = body,
    )
}

fn skills_section(view: &ProfileView<'_>) -> String {
    if !view.presence.skills {
        return String::new();
    }
    let tags: String = view
        .profile
        .skills
        .iter()
        .map(|skill| format!("<span class=\"skill-tag\">{}</span>", html_escape(skill)))
        .collect();
    section(
        "skills",
        "Skills &amp; Expertise",
        &format!("\n                <div class=\"skills-grid\">{}</div>", tags),
    )
}

fn projects_section(view: &ProfileView<'_>) -> String {
    if !view.presence.projects {
        return String::new();
    }
    let cards: String = view
        .profile
        .projects
        .iter()
        .map(|project| {
            let link = project
                .live_link()
                .map(|link| {
                    format!(
                        "\n                        <a href=\"{}\" target=\"_blank\" class=\"project-link\">View Project →</a>",
                        html_escape(link)
                    )
                })
                .unwrap_or_default();
            format!(
                "\n                    <div class=\"project-card\">\n                        <h3>{}</h3>{}\n                    </div>",
                html_escape(&project.title),
                link
            )
        })
        .collect();
    section(
        "projects",
        "Featured Projects",
        &format!(
            "\n                <div class=\"projects-grid\">{}\n                </div>",
            cards
        ),
    )
}

fn contact_section(view: &ProfileView<'_>) -> String {
    let email = view.profile.personal_info.email.trim();
    if email.is_empty() {
        return String::new();
    }
    let email = html_escape(email);
    section(
        "contact",
        "Get In Touch",
        &format!(
            "\n                <div class=\"contact-info\">\n                    <p>📧 <a href=\"mailto:{email}\">{email}</a></p>\n                </div>",
            email = email
        ),
    )
}

impl LayoutStrategy for BuilderLayout {
    fn render_html(&self, view: &ProfileView<'_>) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
{head}
<body>
    <div class="portfolio-container">
        <header class="hero-section">
            <div class="hero-content">
                <h1 class="hero-title">{name}</h1>
                <p class="hero-subtitle">{about}</p>
            </div>
        </header>
{skills}{projects}{contact}    </div>
</body>
</html>
"#,
            head = view.document_head(false),
            name = view.name(),
            about = view.bio(),
            skills = skills_section(view),
            projects = projects_section(view),
            contact = contact_section(view),
        )
    }

    fn stylesheet(&self) -> &'static str {
        match self.template {
            TemplateSelector::Modern => CLEAN_CSS,
            TemplateSelector::Classic => CREATIVE_CSS,
        }
    }

    fn script(&self) -> Option<&'static str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::RenderOptions;
    use crate::domain::builder::demo_profile;
    use crate::domain::model::{PersonalInfo, ProfileRecord};
    use crate::domain::template::ExportFlow;

    fn render(profile: &ProfileRecord) -> String {
        let options = RenderOptions::default();
        BuilderLayout::new(TemplateSelector::Modern)
            .render_html(&ProfileView::new(profile, &options, ExportFlow::Builder))
    }

    #[test]
    fn test_builder_renders_demo_profile() {
        let profile = ProfileRecord::from(demo_profile(1).unwrap());
        let html = render(&profile);

        assert!(html.contains("<title>John Doe - Portfolio</title>"));
        assert!(html.contains(r#"<span class="skill-tag">UI/UX Design</span>"#));
        assert_eq!(html.matches("class=\"project-card\"").count(), 3);
        assert!(html.contains(r#"<a href="mailto:john.doe@example.com">john.doe@example.com</a>"#));
        assert!(!html.contains("experience-section"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn test_builder_contact_ignores_other_fields() {
        let profile = ProfileRecord {
            personal_info: PersonalInfo {
                phone: Some("555-0100".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render(&profile);

        assert!(!html.contains("contact-section"));
        assert!(!html.contains("555-0100"));
        assert!(html.contains(r#"<h1 class="hero-title">Your Name</h1>"#));
    }

    #[test]
    fn test_builder_stylesheets_differ_by_template() {
        let clean = BuilderLayout::new(TemplateSelector::Modern).stylesheet();
        let creative = BuilderLayout::new(TemplateSelector::Classic).stylesheet();
        assert!(clean.contains("Modern & Clean"));
        assert!(creative.contains("Creative & Dynamic"));
    }
}
