//! The fixed instruction template wrapped around the manual text.

const PROMPT_PREAMBLE: &str = "
# Identity

You are a game assistant for the UNO card game and answer questions from the user about the rules of the game.

# Instructions

1. Only answer based on the context of the manual.
2. If the manual has no answer, or no definite answer, to the question, say so.
3. Always answer in the language of the user's question.

# Manual
";

/// Build the system message content for a manual.
pub fn build_system_prompt(manual_text: &str) -> String {
    let mut prompt = String::with_capacity(PROMPT_PREAMBLE.len() + manual_text.len() + 1);
    prompt.push_str(PROMPT_PREAMBLE);
    prompt.push_str(manual_text);
    prompt.push('\n');
    prompt
}
