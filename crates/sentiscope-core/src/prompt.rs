use crate::types::ChatMessage;

/// Instruction sent as the system message of every classification request.
pub const SYSTEM_PROMPT: &str = "You are a sentiment analysis tool. \
Analyze the sentiment of the given comment and respond with ONLY a JSON object with exactly two fields:\n\
- sentiment: exactly one of 'positive', 'negative', or 'neutral'\n\
- rating: an integer from 1 (very negative) to 5 (very positive)\n\
Rules: positive = rating 4 or 5, neutral = 3, negative = 1 or 2.\n\
Output only the JSON object, no other text.";

/// Pair the system instruction with the comment. The comment is sent as-is, untrimmed.
pub fn build_messages(system: &str, comment: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(system), ChatMessage::user(comment)]
}
