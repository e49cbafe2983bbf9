//! Question descriptors and ordered question lists

use crate::answers::{AnswerSet, AnswerValue};
use crate::error::ScaffoldError;
use std::collections::HashSet;

/// Outcome of running a transform over an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Accepted(AnswerValue),
    /// The input is invalid; the question is asked again
    Rejected,
}

/// Computes an answer from its input and the answers resolved before it
///
/// The answer set is a snapshot of everything known at the time the
/// question is resolved, including answers supplied up front.
pub type Transform = fn(&AnswerValue, &AnswerSet) -> Result<Resolution, ScaffoldError>;

/// A single question in the flow
#[derive(Debug, Clone)]
pub struct Question {
    /// Name of the answer this question produces
    pub name: &'static str,

    /// Prompt shown to the user; `None` for derived questions
    pub prompt: Option<&'static str>,

    /// Whether an empty input is passed to the transform instead of re-asking
    pub allow_blank: bool,

    /// Hint displayed in the input field
    pub placeholder: Option<&'static str>,

    /// Take the input from this earlier answer instead of asking
    pub use_answer: Option<&'static str>,

    pub transform: Transform,
}

impl Question {
    /// A question the user is asked
    pub fn ask(name: &'static str, prompt: &'static str, transform: Transform) -> Self {
        Self {
            name,
            prompt: Some(prompt),
            allow_blank: false,
            placeholder: None,
            use_answer: None,
            transform,
        }
    }

    /// A question derived from another answer
    pub fn derive(name: &'static str, use_answer: &'static str, transform: Transform) -> Self {
        Self {
            name,
            prompt: None,
            allow_blank: false,
            placeholder: None,
            use_answer: Some(use_answer),
            transform,
        }
    }

    pub fn allow_blank(mut self) -> Self {
        self.allow_blank = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Questions in resolution order, checked so every dependency comes first
#[derive(Debug, Clone)]
pub struct QuestionList {
    questions: Vec<Question>,
}

impl QuestionList {
    /// Validate `questions` against the names of the answers known up front
    pub fn new<'a>(
        known: impl IntoIterator<Item = &'a str>,
        questions: Vec<Question>,
    ) -> Result<Self, ScaffoldError> {
        let mut available: HashSet<&str> = known.into_iter().collect();

        for question in &questions {
            if question.prompt.is_none() && question.use_answer.is_none() {
                return Err(ScaffoldError::NoInputSource {
                    name: question.name.to_string(),
                });
            }
            if let Some(dependency) = question.use_answer {
                if !available.contains(dependency) {
                    return Err(ScaffoldError::UnorderedDependency {
                        question: question.name.to_string(),
                        depends_on: dependency.to_string(),
                    });
                }
            }
            if !available.insert(question.name) {
                return Err(ScaffoldError::DuplicateQuestion {
                    name: question.name.to_string(),
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(input: &AnswerValue, _answers: &AnswerSet) -> Result<Resolution, ScaffoldError> {
        Ok(Resolution::Accepted(input.clone()))
    }

    #[test]
    fn test_dependency_on_earlier_question() {
        let list = QuestionList::new(
            [],
            vec![
                Question::ask("hooks", "Hooks?", echo),
                Question::derive("implements", "hooks", echo),
            ],
        )
        .unwrap();
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_dependency_on_known_answer() {
        let list = QuestionList::new(
            ["selector"],
            vec![Question::derive("componentName", "selector", echo)],
        );
        assert!(list.is_ok());
    }

    #[test]
    fn test_misordered_dependency_fails() {
        let err = QuestionList::new(
            [],
            vec![
                Question::derive("implements", "hooks", echo),
                Question::ask("hooks", "Hooks?", echo),
            ],
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScaffoldError::UnorderedDependency {
                question: "implements".to_string(),
                depends_on: "hooks".to_string(),
            }
        );
    }

    #[test]
    fn test_duplicate_question_fails() {
        let err = QuestionList::new(
            ["selector"],
            vec![Question::ask("selector", "Selector?", echo)],
        )
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::DuplicateQuestion { .. }));
    }

    #[test]
    fn test_question_without_input_source_fails() {
        let mut question = Question::ask("styles", "Inline?", echo);
        question.prompt = None;

        let err = QuestionList::new([], vec![question]).unwrap_err();
        assert!(matches!(err, ScaffoldError::NoInputSource { .. }));
    }
}
