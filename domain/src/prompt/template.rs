//! Prompt template for the combination request

use crate::core::concept::Concept;

/// Instruction sent to the generator, followed by `{first} + {second}`.
/// Must stay byte-for-byte.
const COMBINE_PREFIX: &str = "act as if you are a game that combines 2 expressions to form new expressions related to the both of the input expressions, you should ONLY output the resulting expression, no explanation or anything except the final expression result, your inputs are: ";

/// Templates for generating prompts
pub struct PromptTemplate;

impl PromptTemplate {
    /// Fill the combination instruction with both concepts verbatim
    pub fn combine(first: &Concept, second: &Concept) -> String {
        format!("{COMBINE_PREFIX}{} + {}", first.as_str(), second.as_str())
    }
}
