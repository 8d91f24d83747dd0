use crate::prompts::analysis_prompt::{ANALYSIS_CRITERIA, ANALYSIS_RESPONSE_FORMAT, JSON_ONLY_INSTRUCTION};
use crate::structs::submission::Submission;

pub fn generate_analysis_prompt(submission: &Submission) -> String {
    let mut prompt = format!(
        "You are a code analysis expert. Analyze this {} coding solution for the problem \"{}\":\n\nCode:\n{}\n\n",
        submission.language, submission.problem_name, submission.code
    );

    prompt.push_str("IMPORTANT: Respond with ONLY a valid JSON object in this exact format:\n\n");
    prompt.push_str(ANALYSIS_RESPONSE_FORMAT);
    prompt.push_str("\n\nAnalysis criteria:\n");
    for criterion in ANALYSIS_CRITERIA {
        prompt.push_str(&format!("- {}\n", criterion));
    }
    prompt.push('\n');
    prompt.push_str(JSON_ONLY_INSTRUCTION);

    prompt
}
