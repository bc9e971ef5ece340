// Shared prompt fragments.
// Each agent operation defines its own prompts in agents/prompts.rs.
// This file contains the cross-cutting pieces.

/// Closing line for prompts that request schema-constrained output.
pub const SCHEMA_OUTPUT_INSTRUCTION: &str = "Output MUST be in the specified JSON schema.";

/// Appended to every prompt that embeds the candidate's profile as context.
pub const GROUNDING_INSTRUCTION: &str = "\
    Use ONLY facts present in the profile provided. \
    Do NOT invent employers, dates, credentials, or metrics.";

/// Wraps a job description and serialized profile into the user query
/// shared by refinement and document generation.
pub fn profile_and_job_query(
    job_description: &str,
    profile_json: &str,
    profile_heading: &str,
    closing: &str,
) -> String {
    format!(
        "JOB DESCRIPTION (JD):\n{job_description}\n\n{profile_heading}:\n{profile_json}\n\n{closing}"
    )
}
