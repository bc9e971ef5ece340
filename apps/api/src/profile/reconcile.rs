//! Merges a decoded resume into the canonical profile.
//!
//! Merge policy: every field present in the parse result replaces the current
//! value wholesale; absent fields keep their prior value. Collections are
//! normalized on the way in, field by field:
//!
//! - `skills`: a bare string becomes a one-element list, blank items are
//!   dropped, and an empty result becomes a single `""` editor row.
//! - `experience`: `description` gets the same list treatment (placeholder
//!   row when empty), `isPresent` is derived from `endDate` (which is then
//!   written as "Present"), and entries with neither title nor company are
//!   dropped. Explicit nulls in entries read as blank.
//! - `education` / `projects`: entries with all-blank identifying fields are
//!   dropped.

use crate::models::profile::{is_blank, Experience, Profile, PRESENT};
use crate::models::resume::{OneOrMany, ParsedExperience, ResumeParseResult};

pub fn reconcile(parsed: ResumeParseResult, current: Profile) -> Profile {
    let mut profile = current;

    let ResumeParseResult {
        name,
        email,
        phone,
        linked_in,
        summary,
        skills,
        experience,
        projects,
        education,
    } = parsed;

    overwrite(&mut profile.name, name);
    overwrite(&mut profile.email, email);
    overwrite(&mut profile.phone, phone);
    overwrite(&mut profile.linked_in, linked_in);
    overwrite(&mut profile.summary, summary);

    if let Some(skills) = skills {
        profile.skills = non_blank_lines(skills);
    }
    if let Some(experience) = experience {
        profile.experience = experience
            .into_iter()
            .map(normalize_experience)
            .filter(|exp| !exp.is_blank())
            .collect();
    }
    if let Some(projects) = projects {
        profile.projects = projects.into_iter().filter(|p| !p.is_blank()).collect();
    }
    if let Some(education) = education {
        profile.education = education.into_iter().filter(|e| !e.is_blank()).collect();
    }

    with_placeholder(&mut profile.skills);
    profile
}

fn overwrite(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn normalize_experience(parsed: ParsedExperience) -> Experience {
    let mut description = parsed
        .description
        .map(non_blank_lines)
        .unwrap_or_default();
    with_placeholder(&mut description);

    let is_present = parsed.end_date.trim().eq_ignore_ascii_case(PRESENT);
    Experience {
        is_present,
        title: parsed.title,
        company: parsed.company,
        start_date: parsed.start_date,
        end_date: if is_present {
            PRESENT.to_string()
        } else {
            parsed.end_date
        },
        description,
    }
}

fn non_blank_lines(items: OneOrMany) -> Vec<String> {
    items.into_vec().into_iter().filter(|s| !is_blank(s)).collect()
}

/// Editors need at least one row to render.
pub(crate) fn with_placeholder(items: &mut Vec<String>) {
    if items.is_empty() {
        items.push(String::new());
    }
}
