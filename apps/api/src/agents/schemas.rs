//! Response schemas sent as `generationConfig.responseSchema`.
//!
//! They steer the model only. What actually binds the result is the
//! `Deserialize` impl of the matching Rust type.

use serde_json::{json, Value};

pub fn profile_refine_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summarySuggestion": {
                "type": "STRING",
                "description": "A 2-3 sentence suggestion for modifying the current professional summary to better target the job."
            },
            "keySkillsToHighlight": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "5-8 specific skills or keywords from the JD that should be present and prominent in the profile."
            },
            "missingKeywords": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "3-5 technical or domain terms from the JD that are completely missing from the current skills, summary and experience."
            }
        },
        "required": ["summarySuggestion", "keySkillsToHighlight", "missingKeywords"]
    })
}

pub fn resume_parse_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING" },
            "email": { "type": "STRING" },
            "phone": { "type": "STRING" },
            "linkedIn": { "type": "STRING" },
            "summary": { "type": "STRING" },
            "skills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Key technical and soft skills."
            },
            "experience": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "company": { "type": "STRING" },
                        "startDate": { "type": "STRING", "description": "Start date, preferably YYYY-MM." },
                        "endDate": { "type": "STRING", "description": "End date: 'Present' or YYYY-MM." },
                        "description": {
                            "type": "ARRAY",
                            "items": { "type": "STRING" },
                            "description": "3-5 key achievements or responsibilities."
                        }
                    },
                    "required": ["title", "company", "startDate", "endDate", "description"]
                }
            },
            "projects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "projectName": { "type": "STRING" },
                        "monthAndYear": { "type": "STRING" },
                        "projectDescription": { "type": "STRING" }
                    }
                }
            },
            "education": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "institution": { "type": "STRING" },
                        "degree": { "type": "STRING" },
                        "graduationYear": { "type": "STRING" }
                    }
                }
            }
        },
        "required": ["name", "email", "summary", "skills", "experience"]
    })
}
