pub const ANALYSIS_RESPONSE_FORMAT: &str = r#"{
  "strengths": "List 2-3 specific strengths of this solution",
  "improvements": "List 2-3 specific areas for improvement",
  "recommendations": "Provide 2-3 personalized learning recommendations",
  "timeComplexity": "O(n) or similar notation",
  "spaceComplexity": "O(n) or similar notation",
  "score": 85
}"#;

pub const ANALYSIS_CRITERIA: &[&str] = &[
    "Code quality and structure",
    "Algorithm efficiency and correctness",
    "Problem-solving approach",
    "Knowledge gaps and learning opportunities",
    "Time and space complexity analysis",
    "Best practices and optimization opportunities",
];

pub const JSON_ONLY_INSTRUCTION: &str = "CRITICAL: Do not include any text before or after the JSON. Do not use markdown formatting. Return ONLY the JSON object.";
