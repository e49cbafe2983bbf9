//! Error types for question resolution and file generation
//!
//! These are contract violations rather than user mistakes: a user typing an
//! invalid selector is handled by re-prompting, never by one of these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScaffoldError {
    /// An answer was looked up before any question produced it
    #[error("Answer '{name}' has not been resolved")]
    MissingAnswer { name: String },

    #[error("Answer '{name}' was resolved more than once")]
    DuplicateAnswer { name: String },

    #[error("Question '{name}' is declared more than once")]
    DuplicateQuestion { name: String },

    /// A question reads an answer that is produced later (or never)
    #[error("Question '{question}' uses answer '{depends_on}' before it is resolved")]
    UnorderedDependency {
        question: String,
        depends_on: String,
    },

    #[error("Question '{name}' has neither a prompt nor an answer to derive from")]
    NoInputSource { name: String },

    #[error("Answer '{name}' has an unexpected value: expected {expected}")]
    UnexpectedValue { name: String, expected: &'static str },

    #[error("Derived question '{name}' rejected the value of '{source_answer}'")]
    DerivedRejected { name: String, source_answer: String },

    #[error("Input '{input}' for '{name}' was rejected")]
    ScriptedInputRejected { name: String, input: String },

    #[error("Refusing to overwrite existing file: {}", path.display())]
    FileExists { path: PathBuf },
}

impl ScaffoldError {
    pub fn missing(name: &str) -> Self {
        ScaffoldError::MissingAnswer {
            name: name.to_string(),
        }
    }
}
