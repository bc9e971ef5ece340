//! Request-scoped editing operations on a profile.
//!
//! The server keeps no form state: a client sends the profile it is editing
//! along with one `ProfileEdit` and receives the edited profile back.

use serde::Deserialize;
use thiserror::Error;

use crate::models::profile::{Education, Experience, Profile, Project, PRESENT};
use crate::profile::reconcile::with_placeholder;

#[derive(Debug, Error, PartialEq)]
#[error("No {collection} entry at index {index}")]
pub struct EditError {
    pub collection: &'static str,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    LinkedIn,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Title,
    Company,
    StartDate,
    EndDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    ProjectName,
    MonthAndYear,
    ProjectDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Institution,
    Degree,
    GraduationYear,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum ProfileEdit {
    SetField { field: ProfileField, value: String },

    SetSkill { index: usize, value: String },
    AddSkill,
    RemoveSkill { index: usize },

    AddExperience,
    RemoveExperience { index: usize },
    SetExperienceField { index: usize, field: ExperienceField, value: String },
    TogglePresent { index: usize },
    SetAccomplishment { index: usize, line: usize, value: String },
    AddAccomplishment { index: usize },
    RemoveAccomplishment { index: usize, line: usize },

    AddProject,
    RemoveProject { index: usize },
    SetProjectField { index: usize, field: ProjectField, value: String },

    AddEducation,
    RemoveEducation { index: usize },
    SetEducationField { index: usize, field: EducationField, value: String },
}

/// Applies one edit. An out-of-range index fails before anything is changed.
pub fn apply_edit(mut profile: Profile, edit: ProfileEdit) -> Result<Profile, EditError> {
    match edit {
        ProfileEdit::SetField { field, value } => {
            let target = match field {
                ProfileField::Name => &mut profile.name,
                ProfileField::Email => &mut profile.email,
                ProfileField::Phone => &mut profile.phone,
                ProfileField::LinkedIn => &mut profile.linked_in,
                ProfileField::Summary => &mut profile.summary,
            };
            *target = value;
        }

        ProfileEdit::SetSkill { index, value } => {
            *at(&mut profile.skills, "skill", index)? = value;
        }
        ProfileEdit::AddSkill => profile.skills.push(String::new()),
        ProfileEdit::RemoveSkill { index } => {
            remove(&mut profile.skills, "skill", index)?;
            with_placeholder(&mut profile.skills);
        }

        ProfileEdit::AddExperience => profile.experience.push(Experience::blank_entry()),
        ProfileEdit::RemoveExperience { index } => {
            remove(&mut profile.experience, "experience", index)?;
        }
        ProfileEdit::SetExperienceField { index, field, value } => {
            let exp = at(&mut profile.experience, "experience", index)?;
            let target = match field {
                ExperienceField::Title => &mut exp.title,
                ExperienceField::Company => &mut exp.company,
                ExperienceField::StartDate => &mut exp.start_date,
                ExperienceField::EndDate => &mut exp.end_date,
            };
            *target = value;
        }
        ProfileEdit::TogglePresent { index } => {
            toggle_present(at(&mut profile.experience, "experience", index)?);
        }
        ProfileEdit::SetAccomplishment { index, line, value } => {
            let exp = at(&mut profile.experience, "experience", index)?;
            *at(&mut exp.description, "accomplishment", line)? = value;
        }
        ProfileEdit::AddAccomplishment { index } => {
            at(&mut profile.experience, "experience", index)?
                .description
                .push(String::new());
        }
        ProfileEdit::RemoveAccomplishment { index, line } => {
            let exp = at(&mut profile.experience, "experience", index)?;
            remove(&mut exp.description, "accomplishment", line)?;
            with_placeholder(&mut exp.description);
        }

        ProfileEdit::AddProject => profile.projects.push(Project::default()),
        ProfileEdit::RemoveProject { index } => {
            remove(&mut profile.projects, "project", index)?;
        }
        ProfileEdit::SetProjectField { index, field, value } => {
            let project = at(&mut profile.projects, "project", index)?;
            let target = match field {
                ProjectField::ProjectName => &mut project.project_name,
                ProjectField::MonthAndYear => &mut project.month_and_year,
                ProjectField::ProjectDescription => &mut project.project_description,
            };
            *target = value;
        }

        ProfileEdit::AddEducation => profile.education.push(Education::blank_entry()),
        ProfileEdit::RemoveEducation { index } => {
            remove(&mut profile.education, "education", index)?;
        }
        ProfileEdit::SetEducationField { index, field, value } => {
            let edu = at(&mut profile.education, "education", index)?;
            let target = match field {
                EducationField::Institution => &mut edu.institution,
                EducationField::Degree => &mut edu.degree,
                EducationField::GraduationYear => &mut edu.graduation_year,
            };
            *target = value;
        }
    }

    Ok(profile)
}

/// Turning the flag on pins `endDate` to "Present"; turning it off clears
/// `endDate` only when it still says "Present".
fn toggle_present(exp: &mut Experience) {
    exp.is_present = !exp.is_present;
    if exp.is_present {
        exp.end_date = PRESENT.to_string();
    } else if exp.end_date == PRESENT {
        exp.end_date.clear();
    }
}

fn at<'a, T>(items: &'a mut [T], collection: &'static str, index: usize) -> Result<&'a mut T, EditError> {
    items.get_mut(index).ok_or(EditError { collection, index })
}

fn remove<T>(items: &mut Vec<T>, collection: &'static str, index: usize) -> Result<T, EditError> {
    if index >= items.len() {
        return Err(EditError { collection, index });
    }
    Ok(items.remove(index))
}
