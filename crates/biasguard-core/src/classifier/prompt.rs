//! Moderation prompt.

use crate::llm::ChatMessage;

/// Fixed instruction sent ahead of the user's sentence.
///
/// The listed categories are examples; the model may answer with any similar
/// label.
pub const INSTRUCTION: &str = "Analyze the following sentence for any form of harmful \
stereotypes, prejudice, or discrimination. This includes racial, gender, sexual orientation, \
or other forms of bias. Respond in exactly two lines: The first line should be either \
'Racist', 'Sexist', 'Homophobic', 'Ableist', or similar categories depending on the content. \
The second line should explain why the sentence falls into that category, including the \
negative impact of such discrimination.";

/// Builds the full prompt for `text`.
pub fn build_prompt(text: &str) -> String {
    format!("{} Sentence: {}", INSTRUCTION, text)
}

/// Builds the message list for a single-turn completion.
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::user(build_prompt(text))]
}
