use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "linkedin")]
    pub linkedin_url: Option<String>,
    #[serde(alias = "github")]
    pub github_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    /// Font Awesome classes for the icon shown next to the entry.
    pub fn icon_class(&self) -> &'static str {
        match self {
            ContactKind::Email => "fas fa-envelope",
            ContactKind::Phone => "fas fa-phone",
            ContactKind::Location => "fas fa-map-marker-alt",
            ContactKind::LinkedIn => "fab fa-linkedin",
            ContactKind::GitHub => "fab fa-github",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactField<'a> {
    pub kind: ContactKind,
    pub value: &'a str,
}

fn non_blank(value: &str) -> Option<&str> {
    Some(value.trim()).filter(|v| !v.is_empty())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().and_then(non_blank)
}

impl PersonalInfo {
    /// Non-empty contact entries in display order: email, phone, location, linkedin, github.
    pub fn contact_fields(&self) -> Vec<ContactField<'_>> {
        let candidates = [
            (ContactKind::Email, non_blank(&self.email)),
            (ContactKind::Phone, non_empty(&self.phone)),
            (ContactKind::Location, non_empty(&self.location)),
            (ContactKind::LinkedIn, non_empty(&self.linkedin_url)),
            (ContactKind::GitHub, non_empty(&self.github_url)),
        ];

        candidates
            .into_iter()
            .filter_map(|(kind, value)| value.map(|value| ContactField { kind, value }))
            .collect()
    }

    pub fn has_contact_info(&self) -> bool {
        !self.contact_fields().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    #[serde(alias = "github")]
    pub github_url: Option<String>,
}

impl Project {
    pub fn live_link(&self) -> Option<&str> {
        non_empty(&self.link)
    }

    pub fn source_link(&self) -> Option<&str> {
        non_empty(&self.github_url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: Option<String>,
}

impl Education {
    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// The portfolio content entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    #[serde(alias = "personal_info")]
    pub personal_info: PersonalInfo,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
}

/// Raw form input for a new project. Technologies are comma-separated.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub github_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExperienceDraft {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits a comma-separated list, trimming entries and dropping empty ones.
pub fn split_comma_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Millisecond timestamp token, bumped until it is unused in `existing`.
pub fn next_id<'a>(existing: impl Iterator<Item = &'a str> + Clone) -> String {
    let mut candidate = chrono::Utc::now().timestamp_millis();
    while existing.clone().any(|id| id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

impl ProfileRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a trimmed skill unless it is blank or already present (exact match).
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            tracing::debug!("Rejected skill entry: {:?}", skill);
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| s != skill);
        self.skills.len() != before
    }

    /// Adds a project when the draft has a title. Returns the new id.
    pub fn add_project(&mut self, draft: ProjectDraft) -> Option<String> {
        let title = draft.title.trim();
        if title.is_empty() {
            tracing::debug!("Rejected project draft without a title");
            return None;
        }

        let id = next_id(self.projects.iter().map(|p| p.id.as_str()));
        self.projects.push(Project {
            id: id.clone(),
            title: title.to_string(),
            description: draft.description.trim().to_string(),
            technologies: split_comma_list(&draft.technologies),
            link: optional(&draft.link),
            github_url: optional(&draft.github_url),
        });
        Some(id)
    }

    pub fn remove_project(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        self.projects.len() != before
    }

    /// Adds an education entry when both degree and institution are given.
    pub fn add_education(&mut self, draft: EducationDraft) -> Option<String> {
        let degree = draft.degree.trim();
        let institution = draft.institution.trim();
        if degree.is_empty() || institution.is_empty() {
            tracing::debug!("Rejected education draft missing degree or institution");
            return None;
        }

        let id = next_id(self.education.iter().map(|e| e.id.as_str()));
        self.education.push(Education {
            id: id.clone(),
            degree: degree.to_string(),
            institution: institution.to_string(),
            year: draft.year.trim().to_string(),
            description: optional(&draft.description),
        });
        Some(id)
    }

    pub fn remove_education(&mut self, id: &str) -> bool {
        let before = self.education.len();
        self.education.retain(|e| e.id != id);
        self.education.len() != before
    }

    /// Adds an experience entry when both title and company are given.
    pub fn add_experience(&mut self, draft: ExperienceDraft) -> Option<String> {
        let title = draft.title.trim();
        let company = draft.company.trim();
        if title.is_empty() || company.is_empty() {
            tracing::debug!("Rejected experience draft missing title or company");
            return None;
        }

        let id = next_id(self.experience.iter().map(|e| e.id.as_str()));
        self.experience.push(Experience {
            id: id.clone(),
            title: title.to_string(),
            company: company.to_string(),
            period: draft.period.trim().to_string(),
            description: draft.description.trim().to_string(),
        });
        Some(id)
    }

    pub fn remove_experience(&mut self, id: &str) -> bool {
        let before = self.experience.len();
        self.experience.retain(|e| e.id != id);
        self.experience.len() != before
    }
}
