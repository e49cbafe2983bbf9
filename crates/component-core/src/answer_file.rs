//! Pre-supplied raw input loaded from a YAML answers file
//!
//! ```yaml
//! selector: my-widget
//! styles: no
//! template: true
//! hooks: [init, destroy]
//! ```
//!
//! Questions named in the file are answered without prompting; everything
//! else falls through to the wrapped prompter.

use crate::engine::Prompter;
use crate::error::ScaffoldError;
use crate::questions::Question;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A value as written in the answers file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawInput {
    Flag(bool),
    Number(serde_yaml::Number),
    Text(String),
    List(Vec<RawInput>),
}

impl RawInput {
    /// The text a user would have typed for this value
    fn into_input(self) -> String {
        match self {
            RawInput::Flag(true) => "y".to_string(),
            RawInput::Flag(false) => "n".to_string(),
            RawInput::Number(n) => n.to_string(),
            RawInput::Text(s) => s,
            RawInput::List(items) => items
                .into_iter()
                .map(RawInput::into_input)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

/// Raw inputs keyed by question name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerFile {
    inputs: HashMap<String, String>,
}

impl AnswerFile {
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: HashMap<String, Option<RawInput>> =
            serde_yaml::from_str(content).context("Failed to parse answers file")?;

        let inputs = raw
            .into_iter()
            .map(|(name, value)| (name, value.map(RawInput::into_input).unwrap_or_default()))
            .collect();

        Ok(Self { inputs })
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inputs.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Answers from the file first, then the wrapped prompter
pub struct AnswerFilePrompter<P> {
    file: AnswerFile,
    inner: P,
}

impl<P: Prompter> AnswerFilePrompter<P> {
    pub fn new(file: AnswerFile, inner: P) -> Self {
        Self { file, inner }
    }

    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Prompter> Prompter for AnswerFilePrompter<P> {
    fn ask(&mut self, question: &Question) -> Result<String> {
        match self.file.get(question.name) {
            Some(input) => Ok(input.to_string()),
            None => self.inner.ask(question),
        }
    }

    fn rejected(&mut self, question: &Question, input: &str) -> Result<()> {
        // Asking again would return the same input forever
        if let Some(scripted) = self.file.get(question.name) {
            return Err(ScaffoldError::ScriptedInputRejected {
                name: question.name.to_string(),
                input: scripted.to_string(),
            }
            .into());
        }
        self.inner.rejected(question, input)
    }
}
