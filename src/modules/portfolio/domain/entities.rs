use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// The whole portfolio document: one optional value per named section.
///
/// Absent sections stay absent through a round-trip (they are skipped on
/// serialization, not emitted as `null`), so whatever an editor saved is
/// exactly what a later read returns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct PortfolioRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillCategory>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experiences: Option<Vec<Experience>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactCopy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl PortfolioRecord {
    /// Clone out one section, if present.
    pub fn section(&self, section: Section) -> Option<SectionValue> {
        match section {
            Section::Profile => self.profile.clone().map(SectionValue::Profile),
            Section::About => self.about.clone().map(SectionValue::About),
            Section::Skills => self.skills.clone().map(SectionValue::Skills),
            Section::Projects => self.projects.clone().map(SectionValue::Projects),
            Section::Experiences => self.experiences.clone().map(SectionValue::Experiences),
            Section::Certifications => self
                .certifications
                .clone()
                .map(SectionValue::Certifications),
            Section::Contact => self.contact.clone().map(SectionValue::Contact),
            Section::Seo => self.seo.clone().map(SectionValue::Seo),
        }
    }

    /// Replace one section wholesale. The value carries its own
    /// discriminant, so a payload can never land under the wrong key.
    pub fn set_section(&mut self, value: SectionValue) {
        match value {
            SectionValue::Profile(v) => self.profile = Some(v),
            SectionValue::About(v) => self.about = Some(v),
            SectionValue::Skills(v) => self.skills = Some(v),
            SectionValue::Projects(v) => self.projects = Some(v),
            SectionValue::Experiences(v) => self.experiences = Some(v),
            SectionValue::Certifications(v) => self.certifications = Some(v),
            SectionValue::Contact(v) => self.contact = Some(v),
            SectionValue::Seo(v) => self.seo = Some(v),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Section name and payload
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    About,
    Skills,
    Projects,
    Experiences,
    Certifications,
    Contact,
    Seo,
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("Unknown section: {0}")]
pub struct UnknownSection(pub String);

impl std::str::FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profile" => Ok(Section::Profile),
            "about" => Ok(Section::About),
            "skills" => Ok(Section::Skills),
            "projects" => Ok(Section::Projects),
            "experiences" => Ok(Section::Experiences),
            "certifications" => Ok(Section::Certifications),
            "contact" => Ok(Section::Contact),
            "seo" => Ok(Section::Seo),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experiences => "experiences",
            Section::Certifications => "certifications",
            Section::Contact => "contact",
            Section::Seo => "seo",
        }
    }

    /// Validate a raw JSON payload against this section's shape.
    pub fn parse_value(&self, raw: Value) -> Result<SectionValue, serde_json::Error> {
        match self {
            Section::Profile => serde_json::from_value(raw).map(SectionValue::Profile),
            Section::About => serde_json::from_value(raw).map(SectionValue::About),
            Section::Skills => serde_json::from_value(raw).map(SectionValue::Skills),
            Section::Projects => serde_json::from_value(raw).map(SectionValue::Projects),
            Section::Experiences => serde_json::from_value(raw).map(SectionValue::Experiences),
            Section::Certifications => {
                serde_json::from_value(raw).map(SectionValue::Certifications)
            }
            Section::Contact => serde_json::from_value(raw).map(SectionValue::Contact),
            Section::Seo => serde_json::from_value(raw).map(SectionValue::Seo),
        }
    }
}

/// A validated section payload. Serializes as the bare section value
/// (no enum tag), which is what the HTTP surface returns.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SectionValue {
    Profile(Profile),
    About(About),
    Skills(Vec<SkillCategory>),
    Projects(Vec<Project>),
    Experiences(Vec<Experience>),
    Certifications(Vec<String>),
    Contact(ContactCopy),
    Seo(Seo),
}

//
// ──────────────────────────────────────────────────────────
// Section shapes
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,

    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct Highlight {
    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub desc: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct SkillCategory {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub skills: Vec<SkillItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct SkillItem {
    #[serde(default)]
    pub name: String,

    /// Proficiency, 0-100.
    #[serde(default)]
    pub level: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub tech: Vec<String>,

    #[serde(default)]
    pub icon: String,

    #[serde(default)]
    pub gradient: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
pub struct Experience {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub location: String,

    #[serde(default)]
    pub period: String,

    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Static copy for the contact section of the page, not contact details.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactCopy {
    #[serde(default)]
    pub intro_title: String,

    #[serde(default)]
    pub intro_text: String,

    #[serde(default)]
    pub form_title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: String,

    #[serde(default)]
    pub og_image: String,
}
