//! Question resolution
//!
//! Resolves a [`QuestionList`] strictly left to right. Each transform sees the
//! answers known up front plus everything resolved before it, so derived
//! questions can read the selector even when it was never asked.

use crate::answers::{Answer, AnswerSet, AnswerValue};
use crate::error::ScaffoldError;
use crate::questions::{Question, QuestionList, Resolution};
use anyhow::Result;
use std::collections::{HashMap, VecDeque};

/// Source of raw user input
pub trait Prompter {
    /// Ask `question` and return the raw input
    fn ask(&mut self, question: &Question) -> Result<String>;

    /// Called when the transform rejected `input`, before asking again
    fn rejected(&mut self, _question: &Question, _input: &str) -> Result<()> {
        Ok(())
    }
}

/// Resolve every question in `questions`, returning only the new answers
pub fn resolve_questions<P: Prompter>(
    questions: &QuestionList,
    known: &AnswerSet,
    prompter: &mut P,
) -> Result<AnswerSet> {
    let mut snapshot = known.clone();
    let mut resolved = AnswerSet::new();

    for question in questions.iter() {
        let value = match question.use_answer {
            Some(source) => resolve_derived(question, source, &snapshot)?,
            None => resolve_asked(question, &snapshot, prompter)?,
        };

        let answer = Answer::new(question.name, value);
        snapshot.push(answer.clone())?;
        resolved.push(answer)?;
    }

    Ok(resolved)
}

fn resolve_derived(
    question: &Question,
    source: &'static str,
    snapshot: &AnswerSet,
) -> Result<AnswerValue> {
    let input = snapshot.require(source)?;

    match (question.transform)(input, snapshot)? {
        Resolution::Accepted(value) => Ok(value),
        Resolution::Rejected => Err(ScaffoldError::DerivedRejected {
            name: question.name.to_string(),
            source_answer: source.to_string(),
        }
        .into()),
    }
}

fn resolve_asked<P: Prompter>(
    question: &Question,
    snapshot: &AnswerSet,
    prompter: &mut P,
) -> Result<AnswerValue> {
    loop {
        let raw = prompter.ask(question)?;

        if raw.trim().is_empty() && !question.allow_blank {
            prompter.rejected(question, &raw)?;
            continue;
        }

        let input = AnswerValue::Text(raw.clone());
        match (question.transform)(&input, snapshot)? {
            Resolution::Accepted(value) => return Ok(value),
            Resolution::Rejected => prompter.rejected(question, &raw)?,
        }
    }
}

/// Prompter that replays canned input, for non-interactive runs and tests
///
/// Each question name has its own queue; running out of input is an error
/// rather than a hang.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inputs: HashMap<String, VecDeque<String>>,
    asked: Vec<String>,
    rejections: Vec<(String, String)>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `input` as the next reply to the question named `name`
    pub fn answer(mut self, name: &str, input: &str) -> Self {
        self.inputs
            .entry(name.to_string())
            .or_default()
            .push_back(input.to_string());
        self
    }

    /// Names of the questions asked, in order (repeats included)
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// `(question, input)` pairs that were rejected
    pub fn rejections(&self) -> &[(String, String)] {
        &self.rejections
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        self.asked.push(question.name.to_string());
        self.inputs
            .get_mut(question.name)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| anyhow::anyhow!("No scripted input left for '{}'", question.name))
    }

    fn rejected(&mut self, question: &Question, input: &str) -> Result<()> {
        self.rejections
            .push((question.name.to_string(), input.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(input: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
        let text = input.as_text().unwrap_or_default();
        if text == "bad" {
            return Ok(Resolution::Rejected);
        }
        Ok(Resolution::Accepted(AnswerValue::text(text.to_uppercase())))
    }

    fn with_selector(input: &AnswerValue, answers: &AnswerSet) -> Result<Resolution, ScaffoldError> {
        let selector = answers.require_text("selector")?;
        Ok(Resolution::Accepted(AnswerValue::text(format!(
            "{}:{}",
            selector, input
        ))))
    }

    fn always_reject(_: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
        Ok(Resolution::Rejected)
    }

    #[test]
    fn test_resolves_in_order_with_derived_answers() {
        let list = QuestionList::new(
            [],
            vec![
                Question::ask("name", "Name?", upper),
                Question::derive("shout", "name", upper),
            ],
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new().answer("name", "abc");

        let answers = resolve_questions(&list, &AnswerSet::new(), &mut prompter).unwrap();

        assert_eq!(answers.require_text("name").unwrap(), "ABC");
        assert_eq!(answers.require_text("shout").unwrap(), "ABC");
        assert_eq!(prompter.asked(), ["name"]);
    }

    #[test]
    fn test_rejected_input_is_asked_again() {
        let list = QuestionList::new([], vec![Question::ask("name", "Name?", upper)]).unwrap();
        let mut prompter = ScriptedPrompter::new()
            .answer("name", "bad")
            .answer("name", "good");

        let answers = resolve_questions(&list, &AnswerSet::new(), &mut prompter).unwrap();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.require_text("name").unwrap(), "GOOD");
        assert_eq!(
            prompter.rejections(),
            [("name".to_string(), "bad".to_string())]
        );
    }

    #[test]
    fn test_blank_input_reasked_unless_allowed() {
        let list = QuestionList::new(
            [],
            vec![
                Question::ask("strict", "Strict?", upper),
                Question::ask("lenient", "Lenient?", upper).allow_blank(),
            ],
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new()
            .answer("strict", "  ")
            .answer("strict", "x")
            .answer("lenient", "");

        let answers = resolve_questions(&list, &AnswerSet::new(), &mut prompter).unwrap();

        assert_eq!(answers.require_text("strict").unwrap(), "X");
        assert_eq!(answers.require_text("lenient").unwrap(), "");
        assert_eq!(prompter.asked(), ["strict", "strict", "lenient"]);
    }

    #[test]
    fn test_known_answers_visible_but_not_returned() {
        let known: AnswerSet = [Answer::text("selector", "my-widget")].into_iter().collect();
        let list = QuestionList::new(
            known.names(),
            vec![Question::ask("styles", "Styles?", with_selector)],
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new().answer("styles", "n");

        let answers = resolve_questions(&list, &known, &mut prompter).unwrap();

        assert_eq!(answers.len(), 1);
        assert_eq!(answers.require_text("styles").unwrap(), "my-widget:n");
    }

    #[test]
    fn test_missing_known_answer_is_fatal() {
        let list = QuestionList::new([], vec![Question::ask("styles", "Styles?", with_selector)])
            .unwrap();
        let mut prompter = ScriptedPrompter::new().answer("styles", "n");

        let err = resolve_questions(&list, &AnswerSet::new(), &mut prompter).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ScaffoldError>(),
            Some(&ScaffoldError::missing("selector"))
        );
    }

    #[test]
    fn test_rejected_derived_question_is_fatal() {
        let list = QuestionList::new(
            [],
            vec![
                Question::ask("name", "Name?", upper),
                Question::derive("never", "name", always_reject),
            ],
        )
        .unwrap();
        let mut prompter = ScriptedPrompter::new().answer("name", "abc");

        let err = resolve_questions(&list, &AnswerSet::new(), &mut prompter).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::DerivedRejected { .. })
        ));
    }

    #[test]
    fn test_exhausted_script_errors() {
        let list = QuestionList::new([], vec![Question::ask("name", "Name?", upper)]).unwrap();
        let mut prompter = ScriptedPrompter::new().answer("name", "bad");

        assert!(resolve_questions(&list, &AnswerSet::new(), &mut prompter).is_err());
    }
}
