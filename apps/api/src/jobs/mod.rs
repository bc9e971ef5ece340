//! Saved jobs: validation and HTTP handlers.

pub mod handlers;

use crate::models::job::NewJob;
use crate::models::profile::is_blank;

pub const INCOMPLETE_JOB: &str = "Job must have a title, company, and description.";

/// A job can be saved only with a title, company and description.
/// `sourceUri` stays optional for manual entries.
pub fn validate_new_job(job: &NewJob) -> Result<(), &'static str> {
    if is_blank(&job.job_title) || is_blank(&job.company_name) || is_blank(&job.job_description) {
        return Err(INCOMPLETE_JOB);
    }
    Ok(())
}
