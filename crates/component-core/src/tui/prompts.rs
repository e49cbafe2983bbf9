//! Charm-style CLI prompts using cliclack

use crate::answer_file::{AnswerFile, AnswerFilePrompter};
use crate::component::{generate_component, notify_user, Generated};
use crate::engine::Prompter;
use crate::names::is_dash_format;
use crate::questions::Question;
use crate::templates::WriteOptions;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// CLI arguments for the component command
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Component selector in dash-case; asked for when missing or invalid
    pub selector: Option<String>,

    /// Project root; files go under `<root>/src/<selector>/`
    pub root: Option<PathBuf>,

    /// YAML file with answers to skip prompting for
    pub answers: Option<PathBuf>,

    /// Overwrite existing files
    pub force: bool,

    /// Show the files that would be generated without writing them
    pub dry_run: bool,
}

/// Prompter backed by cliclack text inputs
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question) -> Result<String> {
        let prompt = question.prompt.unwrap_or(question.name);
        let mut input = cliclack::input(prompt).required(!question.allow_blank);
        if let Some(placeholder) = question.placeholder {
            input = input.placeholder(placeholder);
        }
        Ok(input.interact()?)
    }

    fn rejected(&mut self, question: &Question, input: &str) -> Result<()> {
        let message = match question.name {
            "selector" => format!("'{}' is not dash-case (e.g. my-widget)", input),
            _ => format!("'{}' is not a valid answer", input),
        };
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: GenerateArgs) -> Result<()> {
    cliclack::intro("Generate component")?;

    // Step 1: Resolve the project root
    let root = select_root(&args)?;

    // Step 2: Check the selector passed on the command line
    let selector = args.selector.as_deref().filter(|s| !s.is_empty());
    if let Some(selector) = selector {
        if !is_dash_format(selector) {
            cliclack::log::warning(format!(
                "'{}' is not dash-case, asking for the selector instead",
                selector
            ))?;
        }
    }

    // Step 3: Ask the questions and write the files
    let options = WriteOptions {
        force: args.force,
        dry_run: args.dry_run,
    };
    let generated = match &args.answers {
        Some(path) => {
            let file = AnswerFile::load(path).await?;
            cliclack::log::info(format!(
                "Using {} answer(s) from {}",
                file.len(),
                path.display()
            ))?;
            let mut prompter = AnswerFilePrompter::new(file, TerminalPrompter);
            generate_component(&root, selector, &mut prompter, options).await?
        }
        None => generate_component(&root, selector, &mut TerminalPrompter, options).await?,
    };

    // Step 4: Report what was generated
    print_files(&root, &generated, args.dry_run)?;

    // Step 5: Show the manual follow-up steps
    print_next_steps(&generated)?;

    Ok(())
}

fn select_root(args: &GenerateArgs) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let path = match &args.root {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Project root does not exist: {}", path.display());
    }

    cliclack::log::info(format!("Using project root: {}", path.display()))?;
    Ok(path)
}

fn print_files(root: &Path, generated: &Generated, dry_run: bool) -> Result<()> {
    if dry_run {
        cliclack::log::info("Dry run, no files written")?;
    } else {
        cliclack::log::success(format!("Created {} files", generated.files.len()))?;
    }

    for file in &generated.files {
        let shown = file.strip_prefix(root).unwrap_or(file);
        println!("  {} {}", "->".blue(), shown.display());
    }

    Ok(())
}

fn print_next_steps(generated: &Generated) -> Result<()> {
    notify_user(&generated.answers)?;
    println!();

    cliclack::outro("Happy coding!")?;

    Ok(())
}
