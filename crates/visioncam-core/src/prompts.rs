//! Prompt templates.

/// Instruction appended to every question so answers stay grounded in the frame.
pub const VISIBLE_ONLY_CONSTRAINT: &str = "Answer ONLY from what you can see in the image. If unsure, say you're unsure and suggest how to improve the photo (move closer, reduce glare).";

/// Prompt used for the initial caption.
pub const ANALYZE_PROMPT: &str = "Describe what you see in this image in 1-2 sentences. Answer ONLY from what you can see. If unsure, say you're unsure and suggest how to improve the photo (move closer, reduce glare).";

/// Build the prompt for a follow-up question.
pub fn question_prompt(question: &str) -> String {
    format!("{}\n\n{}", question, VISIBLE_ONLY_CONSTRAINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_appends_constraint() {
        let prompt = question_prompt("What color is the mug?");
        assert!(prompt.starts_with("What color is the mug?\n\n"));
        assert!(prompt.ends_with(VISIBLE_ONLY_CONSTRAINT));
    }

    #[test]
    fn test_analyze_prompt_is_grounded() {
        assert!(ANALYZE_PROMPT.starts_with("Describe what you see"));
        assert!(ANALYZE_PROMPT.contains("Answer ONLY from what you can see"));
    }
}
