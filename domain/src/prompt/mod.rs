//! Prompt templates sent to the text generator

pub mod template;

pub use template::PromptTemplate;
