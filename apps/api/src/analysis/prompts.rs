// All LLM prompt constants for the Analysis module.
// The full prompt is assembled in `analysis::build_prompt`.

/// Fixed instruction block prepended to every analysis prompt.
pub const ANALYSIS_INSTRUCTIONS: &str = "You are a hiring expert. Evaluate the resume below.\n\
    - Identify skills, strengths, weaknesses.\n\
    - Suggest improvements & course recommendations.\n\
    - Compare with job description if provided.\n\n";

/// Label opening the resume section of the prompt.
pub const RESUME_SECTION_LABEL: &str = "Resume:\n";

/// Label opening the optional job-description section of the prompt.
pub const JOB_DESCRIPTION_SECTION_LABEL: &str = "\n\nJob Description:\n";
