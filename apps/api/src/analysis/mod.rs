//! Resume analysis — formats the fixed evaluation prompt and forwards it
//! to the LLM client. Service errors surface to the handler; the UI is
//! expected to display them.

pub mod handlers;
pub mod prompts;

use crate::llm_client::{LlmClient, LlmError};
use prompts::{ANALYSIS_INSTRUCTIONS, JOB_DESCRIPTION_SECTION_LABEL, RESUME_SECTION_LABEL};

/// Builds the analysis prompt: instruction block, resume text, then the
/// job description when one was supplied. A blank job description is
/// treated as absent.
pub fn build_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    let mut prompt =
        format!("{ANALYSIS_INSTRUCTIONS}{RESUME_SECTION_LABEL}{resume_text}");
    if let Some(jd) = job_description {
        if !jd.trim().is_empty() {
            prompt.push_str(JOB_DESCRIPTION_SECTION_LABEL);
            prompt.push_str(jd);
        }
    }
    prompt
}

/// Submits the extracted resume text (and optional job description) for
/// evaluation, returning the model's response trimmed. No retries and no
/// output post-processing beyond trimming.
pub async fn analyze(
    resume_text: &str,
    job_description: Option<&str>,
    llm: &LlmClient,
) -> Result<String, LlmError> {
    let prompt = build_prompt(resume_text, job_description);
    let response = llm.generate(&prompt).await?;
    Ok(response.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_resume_text() {
        let prompt = build_prompt("Ten years of systems programming.", None);
        assert!(prompt.contains("Resume:\nTen years of systems programming."));
    }

    #[test]
    fn test_prompt_without_job_description_has_no_jd_section() {
        let prompt = build_prompt("resume body", None);
        assert!(!prompt.contains("Job Description:"));
    }

    #[test]
    fn test_blank_job_description_is_treated_as_absent() {
        let prompt = build_prompt("resume body", Some("   \n "));
        assert!(!prompt.contains("Job Description:"));
    }

    #[test]
    fn test_prompt_sections_are_in_fixed_order() {
        let prompt = build_prompt("resume body", Some("Senior Rust engineer"));
        let resume_at = prompt.find("Resume:\nresume body").unwrap();
        let jd_at = prompt.find("Job Description:\nSenior Rust engineer").unwrap();
        assert!(resume_at < jd_at, "resume section must precede job description");
    }

    #[test]
    fn test_prompt_starts_with_instruction_block() {
        let prompt = build_prompt("resume body", Some("jd"));
        assert!(prompt.starts_with("You are a hiring expert."));
    }
}
