use portfolio_export::core::package::package_site;
use portfolio_export::domain::model::{Experience, PersonalInfo, ProjectDraft};
use portfolio_export::{render_site, ExportFlow, ProfileRecord, RenderOptions, TemplateSelector};

fn ada() -> ProfileRecord {
    ProfileRecord {
        personal_info: PersonalInfo {
            name: "Ada Lovelace".to_string(),
            title: "Analyst".to_string(),
            bio: "Wrote the first program.".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        },
        skills: vec!["Mathematics".to_string()],
        ..Default::default()
    }
}

#[test]
fn test_empty_profile_renders_placeholders_and_no_sections() {
    let profile = ProfileRecord::new();
    let options = RenderOptions::default();

    for template in [TemplateSelector::Modern, TemplateSelector::Classic] {
        let site = render_site(&profile, ExportFlow::Profile, template, &options);
        assert!(site.html.contains("<title>Portfolio</title>"));
        assert!(site.html.contains("Your Name"));
        assert!(site.html.contains("Your Title"));
        assert!(site.html.contains("Tell us about yourself..."));
        assert!(!site.html.contains("<section"));
        assert!(!site.html.contains("contact-info"));
    }
}

#[test]
fn test_user_text_is_escaped_everywhere() {
    let mut profile = ada();
    profile.personal_info.name = "<script>alert(1)</script>".to_string();
    profile.add_skill("C & \"C++\"");
    profile.add_project(ProjectDraft {
        title: "<b>bold</b>".to_string(),
        technologies: "a<b".to_string(),
        ..Default::default()
    });
    let options = RenderOptions::default();

    for flow in [ExportFlow::Profile, ExportFlow::Builder] {
        for template in [TemplateSelector::Modern, TemplateSelector::Classic] {
            let site = render_site(&profile, flow, template, &options);
            assert!(!site.html.contains("<script>alert"), "{flow}/{template}");
            assert!(site.html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
            assert!(site.html.contains("C &amp; &quot;C++&quot;"));
            assert!(!site.html.contains("<b>bold</b>"));
        }
    }
}

#[test]
fn test_sections_follow_presence() {
    let mut profile = ada();
    profile.experience.push(Experience {
        id: "1".to_string(),
        title: "Collaborator".to_string(),
        company: "Babbage & Co".to_string(),
        period: "1842-1843".to_string(),
        description: "Translated and annotated".to_string(),
    });
    let site = render_site(&profile, ExportFlow::Profile, TemplateSelector::Classic, &RenderOptions::default());

    assert!(site.html.contains("skills-section classic-section"));
    assert!(site.html.contains("experience-section classic-section"));
    assert!(site.html.contains("Babbage &amp; Co"));
    assert!(!site.html.contains("projects-section"));
    assert!(!site.html.contains("education-section"));

    let skills_at = site.html.find("skills-section").unwrap();
    let experience_at = site.html.find("experience-section").unwrap();
    assert!(skills_at < experience_at);
}

#[test]
fn test_rendering_is_pure() {
    let profile = ada();
    let options = RenderOptions::default();
    let first = render_site(&profile, ExportFlow::Profile, TemplateSelector::Modern, &options);
    let second = render_site(&profile, ExportFlow::Profile, TemplateSelector::Modern, &options);

    assert_eq!(first, second);
    assert_eq!(package_site(&first).unwrap(), package_site(&second).unwrap());
}

#[test]
fn test_builder_flow_omits_icon_font_and_script() {
    let site = render_site(&ada(), ExportFlow::Builder, TemplateSelector::Modern, &RenderOptions::default());

    assert!(site.script.is_none());
    assert!(!site.html.contains("font-awesome"));
    assert!(site.html.contains(r#"<link rel="stylesheet" href="style.css">"#));
    assert!(site.html.contains(r#"<a href="mailto:ada@example.com">ada@example.com</a>"#));
    assert!(site.css.contains("Modern & Clean"));
}

#[test]
fn test_single_project_scenario() {
    let mut profile = ada();
    profile.personal_info.bio = String::new();
    profile.add_project(ProjectDraft {
        title: "Engine".to_string(),
        link: "https://x.test".to_string(),
        ..Default::default()
    });
    let site = render_site(&profile, ExportFlow::Profile, TemplateSelector::Modern, &RenderOptions::default());

    assert_eq!(site.html.matches(r#"<span class="skill-tag">"#).count(), 1);
    assert_eq!(site.html.matches(r#"<div class="project-card">"#).count(), 1);
    assert!(site.html.contains(r#"<a href="https://x.test" target="_blank" class="project-link">Live Demo</a>"#));
    assert!(!site.html.contains("experience-section"));
    assert!(!site.html.contains("education-section"));
    assert_eq!(site.html.matches(r#"<div class="contact-item">"#).count(), 1);
    assert!(site.html.contains("fas fa-envelope"));
    assert!(!site.script.as_deref().unwrap_or_default().is_empty());
}

#[test]
fn test_whitespace_email_is_absent_in_both_flows() {
    let mut profile = ada();
    profile.personal_info.email = "   ".to_string();
    let options = RenderOptions::default();

    let profile_site = render_site(&profile, ExportFlow::Profile, TemplateSelector::Modern, &options);
    assert!(!profile_site.html.contains("contact-info"));
    assert!(!profile_site.html.contains("fa-envelope"));

    let builder_site = render_site(&profile, ExportFlow::Builder, TemplateSelector::Modern, &options);
    assert!(!builder_site.html.contains("contact-section"));
}
