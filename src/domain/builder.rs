//! The simple "builder" profile shape: one free-text skills field, title-and-link
//! projects and a single contact email. It is only an input format; every
//! builder profile is converted into a [`ProfileRecord`] before rendering.

use crate::domain::model::{split_comma_list, PersonalInfo, ProfileRecord, Project};
use crate::domain::template::TemplateSelector;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderProject {
    pub id: String,
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderProfile {
    pub name: String,
    pub about: String,
    /// Comma-separated.
    pub skills: String,
    pub projects: Vec<BuilderProject>,
    pub contact: String,
    pub template: u8,
}

impl Default for BuilderProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            about: String::new(),
            skills: String::new(),
            projects: Vec::new(),
            contact: String::new(),
            template: 1,
        }
    }
}

impl BuilderProfile {
    pub fn template_selector(&self) -> TemplateSelector {
        TemplateSelector::from_builder_number(self.template)
    }
}

impl From<BuilderProfile> for ProfileRecord {
    fn from(builder: BuilderProfile) -> Self {
        let projects = builder
            .projects
            .into_iter()
            .filter(|project| !project.title.trim().is_empty())
            .map(|project| Project {
                id: project.id,
                title: project.title,
                link: Some(project.link).filter(|link| !link.trim().is_empty()),
                ..Default::default()
            })
            .collect();

        ProfileRecord {
            personal_info: PersonalInfo {
                name: builder.name,
                bio: builder.about,
                email: builder.contact.trim().to_string(),
                ..Default::default()
            },
            skills: split_comma_list(&builder.skills),
            projects,
            ..Default::default()
        }
    }
}

fn demo_project(id: &str, title: &str, link: &str) -> BuilderProject {
    BuilderProject {
        id: id.to_string(),
        title: title.to_string(),
        link: link.to_string(),
    }
}

/// Built-in sample profiles used to showcase both builder layouts.
pub fn demo_profile(number: u8) -> Option<BuilderProfile> {
    match number {
        1 => Some(BuilderProfile {
            name: "John Doe".to_string(),
            about: "Passionate Full-Stack Developer with 5+ years of experience building modern web applications. I love creating elegant solutions to complex problems and am always eager to learn new technologies.".to_string(),
            skills: "React, Node.js, TypeScript, Python, AWS, Docker, MongoDB, PostgreSQL, UI/UX Design".to_string(),
            projects: vec![
                demo_project("1", "E-Commerce Platform", "https://github.com/johndoe/ecommerce"),
                demo_project("2", "Task Management App", "https://github.com/johndoe/taskmanager"),
                demo_project("3", "Portfolio Website", "https://johndoe.dev"),
            ],
            contact: "john.doe@example.com".to_string(),
            template: 1,
        }),
        2 => Some(BuilderProfile {
            name: "Sarah Johnson".to_string(),
            about: "Creative UI/UX Designer and Frontend Developer who believes in the power of beautiful, functional design. I transform ideas into engaging digital experiences that users love.".to_string(),
            skills: "Figma, Adobe Creative Suite, React, Vue.js, CSS3, HTML5, JavaScript, User Research, Prototyping".to_string(),
            projects: vec![
                demo_project("1", "Mobile Banking App Redesign", "https://dribbble.com/sarahjohnson/banking-app"),
                demo_project("2", "E-Learning Platform UI", "https://dribbble.com/sarahjohnson/elearning"),
            ],
            contact: "sarah.johnson@creative.com".to_string(),
            template: 2,
        }),
        _ => None,
    }
}
