//! Section blocks shared by the profile layouts. Each layout supplies its own
//! class names; the order of sections and fields is fixed here.

use crate::core::render::ProfileView;
use crate::domain::model::{Education, Experience, Project};
use crate::utils::html::html_escape;

pub(crate) struct SectionClasses {
    /// Extra class appended to every `<section>`.
    pub section_modifier: &'static str,
    pub skills_container: &'static str,
    pub skill_tag: &'static str,
    pub projects_container: &'static str,
    pub project_card: &'static str,
    pub tech_tag: &'static str,
}

fn section_open(kind: &str, classes: &SectionClasses, heading: &str) -> String {
    format!(
        "\n        <section class=\"{kind}-section{modifier}\">\n            <h2>{heading}</h2>",
        kind = kind,
        modifier = classes.section_modifier,
        heading = heading,
    )
}

const SECTION_CLOSE: &str = "\n        </section>";

fn render_skills(skills: &[String], classes: &SectionClasses) -> String {
    let mut out = section_open("skills", classes, "Skills");
    out.push_str(&format!("\n            <div class=\"{}\">", classes.skills_container));
    for skill in skills {
        out.push_str(&format!(
            "\n                <span class=\"{}\">{}</span>",
            classes.skill_tag,
            html_escape(skill)
        ));
    }
    out.push_str("\n            </div>");
    out.push_str(SECTION_CLOSE);
    out
}

fn render_project(project: &Project, classes: &SectionClasses) -> String {
    let technologies: String = project
        .technologies
        .iter()
        .map(|tech| {
            format!(
                "\n                        <span class=\"{}\">{}</span>",
                classes.tech_tag,
                html_escape(tech)
            )
        })
        .collect();

    let mut links = String::new();
    if let Some(link) = project.live_link() {
        links.push_str(&format!(
            "\n                        <a href=\"{}\" target=\"_blank\" class=\"project-link\">Live Demo</a>",
            html_escape(link)
        ));
    }
    if let Some(source) = project.source_link() {
        links.push_str(&format!(
            "\n                        <a href=\"{}\" target=\"_blank\" class=\"project-link\">GitHub</a>",
            html_escape(source)
        ));
    }

    format!(
        r#"
                <div class="{card}">
                    <h3>{title}</h3>
                    <p>{description}</p>
                    <div class="project-tech">{technologies}
                    </div>
                    <div class="project-links">{links}
                    </div>
                </div>"#,
        card = classes.project_card,
        title = html_escape(&project.title),
        description = html_escape(&project.description),
        technologies = technologies,
        links = links,
    )
}

fn render_projects(projects: &[Project], classes: &SectionClasses) -> String {
    let mut out = section_open("projects", classes, "Projects");
    out.push_str(&format!("\n            <div class=\"{}\">", classes.projects_container));
    for project in projects {
        out.push_str(&render_project(project, classes));
    }
    out.push_str("\n            </div>");
    out.push_str(SECTION_CLOSE);
    out
}

fn render_experience(entries: &[Experience], classes: &SectionClasses) -> String {
    let mut out = section_open("experience", classes, "Experience");
    out.push_str("\n            <div class=\"experience-list\">");
    for entry in entries {
        out.push_str(&format!(
            r#"
                <div class="experience-item">
                    <h3>{title}</h3>
                    <h4>{company}</h4>
                    <p class="period">{period}</p>
                    <p>{description}</p>
                </div>"#,
            title = html_escape(&entry.title),
            company = html_escape(&entry.company),
            period = html_escape(&entry.period),
            description = html_escape(&entry.description),
        ));
    }
    out.push_str("\n            </div>");
    out.push_str(SECTION_CLOSE);
    out
}

fn render_education(entries: &[Education], classes: &SectionClasses) -> String {
    let mut out = section_open("education", classes, "Education");
    out.push_str("\n            <div class=\"education-list\">");
    for entry in entries {
        let description = entry
            .description()
            .map(|d| format!("\n                    <p>{}</p>", html_escape(d)))
            .unwrap_or_default();
        out.push_str(&format!(
            r#"
                <div class="education-item">
                    <h3>{degree}</h3>
                    <h4>{institution}</h4>
                    <p class="year">{year}</p>{description}
                </div>"#,
            degree = html_escape(&entry.degree),
            institution = html_escape(&entry.institution),
            year = html_escape(&entry.year),
            description = description,
        ));
    }
    out.push_str("\n            </div>");
    out.push_str(SECTION_CLOSE);
    out
}

/// Skills, projects, experience, education: each only when present.
pub(crate) fn render_profile_sections(view: &ProfileView<'_>, classes: &SectionClasses) -> String {
    let profile = view.profile;
    let presence = view.presence;
    let mut out = String::new();

    if presence.skills {
        out.push_str(&render_skills(&profile.skills, classes));
    }
    if presence.projects {
        out.push_str(&render_projects(&profile.projects, classes));
    }
    if presence.experience {
        out.push_str(&render_experience(&profile.experience, classes));
    }
    if presence.education {
        out.push_str(&render_education(&profile.education, classes));
    }
    out
}
