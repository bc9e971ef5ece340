use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize};

/// Literal end date carried by an experience entry that is still ongoing.
pub const PRESENT: &str = "Present";

/// The canonical candidate profile.
///
/// Field names serialize in camelCase: this is both the document shape the
/// store persists and the context shape embedded into model prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linked_in: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
}

impl Profile {
    /// The blank profile handed to an editor when the user has none yet.
    /// Carries one placeholder skill so the form always has a row.
    pub fn blank() -> Self {
        Self {
            skills: vec![String::new()],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub is_present: bool,
    /// Accomplishment lines, in display order.
    pub description: Vec<String>,
}

impl Experience {
    /// A fresh editor row: ongoing, with one empty accomplishment line.
    pub fn blank_entry() -> Self {
        Self {
            end_date: PRESENT.to_string(),
            is_present: true,
            description: vec![String::new()],
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.title) && is_blank(&self.company)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_empty")]
    pub project_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub month_and_year: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub project_description: String,
}

impl Project {
    pub fn is_blank(&self) -> bool {
        is_blank(&self.project_name) && is_blank(&self.project_description)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "null_as_empty")]
    pub institution: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub degree: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub graduation_year: String,
}

impl Education {
    /// A fresh editor row, graduating this year.
    pub fn blank_entry() -> Self {
        Self {
            graduation_year: chrono::Utc::now().year().to_string(),
            ..Self::default()
        }
    }

    pub fn is_blank(&self) -> bool {
        is_blank(&self.institution) && is_blank(&self.degree)
    }
}

/// Reads an explicit `null` as an empty string. Missing keys are covered by
/// the container's `#[serde(default)]`.
pub(crate) fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
