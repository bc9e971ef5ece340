use crate::models::profile::{is_blank, Experience, Profile, PRESENT};

/// Strips incomplete entries from a profile.
///
/// Runs before every `put_profile` and before a profile is embedded in a
/// prompt. Pure and idempotent. Unlike `reconcile`, it never inserts
/// placeholder rows: an empty list stays empty.
pub fn sanitize(profile: Profile) -> Profile {
    Profile {
        skills: profile
            .skills
            .into_iter()
            .filter(|s| !is_blank(s))
            .collect(),
        experience: profile
            .experience
            .into_iter()
            .filter(|exp| !exp.is_blank())
            .map(sanitize_experience)
            .collect(),
        projects: profile
            .projects
            .into_iter()
            .filter(|p| !p.is_blank())
            .collect(),
        education: profile
            .education
            .into_iter()
            .filter(|e| !e.is_blank())
            .collect(),
        ..profile
    }
}

fn sanitize_experience(exp: Experience) -> Experience {
    Experience {
        end_date: if exp.is_present {
            PRESENT.to_string()
        } else {
            exp.end_date
        },
        description: exp
            .description
            .into_iter()
            .filter(|line| !is_blank(line))
            .collect(),
        ..exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Project};
    use proptest::prelude::*;

    fn experience(title: &str, company: &str) -> Experience {
        Experience {
            title: title.to_string(),
            company: company.to_string(),
            ..Experience::default()
        }
    }

    #[test]
    fn test_present_flag_forces_end_date() {
        let mut exp = experience("SRE", "Acme");
        exp.is_present = true;
        exp.end_date = "2022-01".to_string();
        let profile = sanitize(Profile {
            experience: vec![exp],
            ..Profile::default()
        });
        assert_eq!(profile.experience[0].end_date, "Present");
    }

    #[test]
    fn test_end_date_kept_when_not_present() {
        let mut exp = experience("SRE", "Acme");
        exp.end_date = "2022-01".to_string();
        let profile = sanitize(Profile {
            experience: vec![exp],
            ..Profile::default()
        });
        assert_eq!(profile.experience[0].end_date, "2022-01");
    }

    #[test]
    fn test_blank_project_dropped_named_project_kept() {
        let profile = sanitize(Profile {
            projects: vec![
                Project {
                    project_name: "  ".to_string(),
                    month_and_year: "2024-02".to_string(),
                    project_description: "".to_string(),
                },
                Project {
                    project_name: "Compiler".to_string(),
                    ..Project::default()
                },
            ],
            ..Profile::default()
        });
        assert_eq!(profile.projects.len(), 1);
        assert_eq!(profile.projects[0].project_name, "Compiler");
    }

    #[test]
    fn test_skills_have_no_placeholder() {
        let profile = sanitize(Profile::blank());
        assert!(profile.skills.is_empty());
    }

    #[test]
    fn test_blank_accomplishments_and_entries_removed() {
        let mut kept = experience("", "Acme");
        kept.description = vec!["Shipped v2".to_string(), " ".to_string(), String::new()];
        let profile = sanitize(Profile {
            experience: vec![experience(" ", ""), kept],
            education: vec![
                Education::default(),
                Education {
                    degree: "BSc".to_string(),
                    ..Education::default()
                },
            ],
            ..Profile::default()
        });
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.experience[0].description, vec!["Shipped v2".to_string()]);
        assert_eq!(profile.education.len(), 1);
    }

    #[test]
    fn test_identity_fields_untouched() {
        let profile = sanitize(Profile {
            name: " Ada ".to_string(),
            summary: "Builds things".to_string(),
            ..Profile::default()
        });
        assert_eq!(profile.name, " Ada ");
        assert_eq!(profile.summary, "Builds things");
    }

    fn text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            Just("Present".to_string()),
            "[a-z ]{0,8}",
        ]
    }

    fn experience_strategy() -> impl Strategy<Value = Experience> {
        (
            text(),
            text(),
            text(),
            any::<bool>(),
            prop::collection::vec(text(), 0..4),
        )
            .prop_map(|(title, company, end_date, is_present, description)| Experience {
                title,
                company,
                start_date: "2020-01".to_string(),
                end_date,
                is_present,
                description,
            })
    }

    fn profile_strategy() -> impl Strategy<Value = Profile> {
        (
            prop::collection::vec(text(), 0..5),
            prop::collection::vec(experience_strategy(), 0..4),
            prop::collection::vec((text(), text(), text()), 0..4),
            prop::collection::vec((text(), text(), text()), 0..4),
        )
            .prop_map(|(skills, experience, projects, education)| Profile {
                skills,
                experience,
                projects: projects
                    .into_iter()
                    .map(|(project_name, month_and_year, project_description)| Project {
                        project_name,
                        month_and_year,
                        project_description,
                    })
                    .collect(),
                education: education
                    .into_iter()
                    .map(|(institution, degree, graduation_year)| Education {
                        institution,
                        degree,
                        graduation_year,
                    })
                    .collect(),
                ..Profile::default()
            })
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(profile in profile_strategy()) {
            let once = sanitize(profile);
            let twice = sanitize(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn sanitized_profile_has_no_blank_skills(profile in profile_strategy()) {
            let clean = sanitize(profile);
            prop_assert!(clean.skills.iter().all(|s| !s.trim().is_empty()));
            prop_assert!(clean.experience.iter().all(|e| !e.is_present || e.end_date == "Present"));
        }
    }
}
