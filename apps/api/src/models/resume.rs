use serde::Deserialize;

use crate::models::profile::{null_as_empty, Education, Project};

/// A profile fragment decoded from unstructured resume text.
///
/// Every field is optional: a field the model left out keeps the current
/// profile's value when reconciled. Shapes the model is known to bend
/// (`skills`, experience `description`) accept either a list or a bare string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeParseResult {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linked_in: Option<String>,
    pub summary: Option<String>,
    pub skills: Option<OneOrMany>,
    pub experience: Option<Vec<ParsedExperience>>,
    pub projects: Option<Vec<Project>>,
    pub education: Option<Vec<Education>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedExperience {
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
    pub description: Option<OneOrMany>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// `null` items are kept here and dropped by `into_vec`.
    Many(Vec<Option<String>>),
    One(String),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::Many(items) => items.into_iter().flatten().collect(),
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_skills_decode_as_one() {
        let parsed: ResumeParseResult =
            serde_json::from_value(json!({"skills": "Python"})).unwrap();
        assert_eq!(parsed.skills, Some(OneOrMany::One("Python".to_string())));
    }

    #[test]
    fn test_absent_and_null_fields_are_none() {
        let parsed: ResumeParseResult =
            serde_json::from_value(json!({"name": "Ada", "phone": null})).unwrap();
        assert_eq!(parsed.name.as_deref(), Some("Ada"));
        assert!(parsed.phone.is_none());
        assert!(parsed.experience.is_none());
    }

    #[test]
    fn test_experience_description_accepts_string() {
        let parsed: ResumeParseResult = serde_json::from_value(json!({
            "experience": [{"title": "SRE", "description": "Ran on-call"}]
        }))
        .unwrap();
        let exp = &parsed.experience.unwrap()[0];
        assert_eq!(exp.description, Some(OneOrMany::One("Ran on-call".to_string())));
        assert!(exp.company.is_empty());
    }

    #[test]
    fn test_null_nested_fields_read_as_empty() {
        let parsed: ResumeParseResult = serde_json::from_value(json!({
            "skills": ["Rust", null],
            "experience": [{"title": "SRE", "company": null, "endDate": null, "description": [null, "Ran on-call"]}],
            "projects": [{"projectName": "Compiler", "monthAndYear": null}],
            "education": [{"institution": null, "degree": "BSc", "graduationYear": null}]
        }))
        .unwrap();

        assert_eq!(parsed.skills.unwrap().into_vec(), vec!["Rust"]);
        let exp = &parsed.experience.unwrap()[0];
        assert!(exp.company.is_empty());
        assert!(exp.end_date.is_empty());
        assert_eq!(
            exp.description.clone().unwrap().into_vec(),
            vec!["Ran on-call"]
        );
        assert!(parsed.projects.unwrap()[0].month_and_year.is_empty());
        assert!(parsed.education.unwrap()[0].institution.is_empty());
    }
}
