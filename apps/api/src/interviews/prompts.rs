// LLM prompt constants for the interview-generation module.

/// Question-generation prompt template.
/// Replace: {amount}, {role}, {level}, {type}, {techstack}
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate ONLY a valid JSON array of {amount} interview questions.
NO explanation. NO additional text.

Role: {role}
Level: {level}
Type: {type}
Techstack: {techstack}

Return STRICT JSON like:
["Question 1", "Question 2", "Question 3"]"#;
