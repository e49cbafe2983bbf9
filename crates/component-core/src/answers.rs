//! Resolved answers and the ordered set they accumulate in

use crate::error::ScaffoldError;
use std::fmt;

/// Whether a piece of component content lives inline or in its own file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Inline,
    /// Relative path of the external file, e.g. `./my-widget.component.scss`
    File(String),
}

impl Toggle {
    pub fn is_inline(&self) -> bool {
        matches!(self, Toggle::Inline)
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // An empty template literal in the generated TypeScript
            Toggle::Inline => write!(f, "``"),
            Toggle::File(path) => write!(f, "'{}'", path),
        }
    }
}

/// Value of a resolved answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Text(String),
    Toggle(Toggle),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        AnswerValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::Toggle(_) => None,
        }
    }

    pub fn as_toggle(&self) -> Option<&Toggle> {
        match self {
            AnswerValue::Toggle(t) => Some(t),
            AnswerValue::Text(_) => None,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Text(s) => f.write_str(s),
            AnswerValue::Toggle(t) => t.fmt(f),
        }
    }
}

/// A named, resolved answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: &'static str,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(name: &'static str, value: AnswerValue) -> Self {
        Self { name, value }
    }

    pub fn text(name: &'static str, value: impl Into<String>) -> Self {
        Self::new(name, AnswerValue::text(value))
    }
}

/// Answers in the order they were resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<Answer>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, answer: Answer) -> Result<(), ScaffoldError> {
        if self.contains(answer.name) {
            return Err(ScaffoldError::DuplicateAnswer {
                name: answer.name.to_string(),
            });
        }
        self.answers.push(answer);
        Ok(())
    }

    /// Build a set from `answers`, failing on the first repeated name
    pub fn try_from_answers(
        answers: impl IntoIterator<Item = Answer>,
    ) -> Result<Self, ScaffoldError> {
        let mut set = AnswerSet::new();
        for answer in answers {
            set.push(answer)?;
        }
        Ok(set)
    }

    /// Append every answer of `other`, keeping its order
    pub fn extend(&mut self, other: &AnswerSet) -> Result<(), ScaffoldError> {
        for answer in &other.answers {
            self.push(answer.clone())?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up an answer that must already be resolved
    pub fn require(&self, name: &str) -> Result<&AnswerValue, ScaffoldError> {
        self.get(name)
            .map(|a| &a.value)
            .ok_or_else(|| ScaffoldError::missing(name))
    }

    pub fn require_text(&self, name: &str) -> Result<&str, ScaffoldError> {
        self.require(name)?
            .as_text()
            .ok_or_else(|| ScaffoldError::UnexpectedValue {
                name: name.to_string(),
                expected: "text",
            })
    }

    pub fn require_toggle(&self, name: &str) -> Result<&Toggle, ScaffoldError> {
        self.require(name)?
            .as_toggle()
            .ok_or_else(|| ScaffoldError::UnexpectedValue {
                name: name.to_string(),
                expected: "an inline/file toggle",
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.answers.iter().map(|a| a.name)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// Literal seeding for tests; later duplicates are dropped. Production code
/// goes through [`AnswerSet::try_from_answers`].
#[cfg(test)]
impl FromIterator<Answer> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = Answer>>(iter: I) -> Self {
        let mut set = AnswerSet::new();
        for answer in iter {
            let _ = set.push(answer);
        }
        set
    }
}
