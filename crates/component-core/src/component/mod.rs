//! Component generation
//!
//! This module provides:
//! - The component question list (`options`, `hooks`)
//! - The generated file descriptors (`files`)
//! - Follow-up instructions (`notify`)
//! - [`generate_component`], which ties them together

pub mod files;
pub mod hooks;
pub mod notify;
pub mod options;

use crate::answers::{Answer, AnswerSet};
use crate::engine::{resolve_questions, Prompter};
use crate::error::ScaffoldError;
use crate::names::is_dash_format;
use crate::questions::QuestionList;
use crate::templates::{plan, write_files, WriteOptions};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub use files::component_templates;
pub use hooks::LifecycleHook;
pub use notify::{notify_lines, notify_user};
pub use options::{all_questions, component_name, component_option_questions};

/// Result of a generation run
#[derive(Debug, Clone)]
pub struct Generated {
    /// Every answer, known ones first
    pub answers: AnswerSet,

    /// Files written (or, in a dry run, the files that would be written)
    pub files: Vec<PathBuf>,
}

/// Answers seeded from a selector supplied on the command line
pub fn known_answers(selector: &str) -> Result<AnswerSet, ScaffoldError> {
    AnswerSet::try_from_answers([
        Answer::text("selector", selector),
        Answer::text("componentName", component_name(selector)),
    ])
}

/// Resolve every component answer
///
/// A valid dash-case `selector` skips the selector questions; anything else
/// asks for the selector first.
pub fn collect_answers<P: Prompter>(selector: Option<&str>, prompter: &mut P) -> Result<AnswerSet> {
    match selector.filter(|s| is_dash_format(s)) {
        Some(selector) => {
            let mut answers = known_answers(selector)?;
            let questions = QuestionList::new(answers.names(), component_option_questions())?;
            let resolved = resolve_questions(&questions, &answers, prompter)?;
            answers.extend(&resolved)?;
            Ok(answers)
        }
        None => {
            let questions = QuestionList::new([], all_questions())?;
            resolve_questions(&questions, &AnswerSet::new(), prompter)
        }
    }
}

/// Ask the component questions and write the component files under `root`
pub async fn generate_component<P: Prompter>(
    root: &Path,
    selector: Option<&str>,
    prompter: &mut P,
    options: WriteOptions,
) -> Result<Generated> {
    let answers = collect_answers(selector, prompter)?;

    let rendered = plan(&component_templates(), root, &answers)?;
    let files = write_files(&rendered, options).await?;

    Ok(Generated { answers, files })
}
