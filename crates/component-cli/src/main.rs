//! ng-component CLI - Component scaffolding for Angular projects

use anyhow::Result;
use clap::{Parser, Subcommand};
use component_core::tui::GenerateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ng-component")]
#[command(about = "CLI for scaffolding Angular components")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub component: CliComponentArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new component
    Component(CliComponentArgs),
}

#[derive(Parser, Debug, Default)]
pub struct CliComponentArgs {
    /// Component selector in dash-case (e.g. my-widget); asked for when omitted.
    /// A selector named `component` must follow the subcommand:
    /// `ng-component component component`
    pub selector: Option<String>,

    /// Project root directory (defaults to the current directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// YAML file with answers to skip prompting for (selector, styles, template, hooks)
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Show the files that would be generated without writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl From<CliComponentArgs> for GenerateArgs {
    fn from(args: CliComponentArgs) -> Self {
        GenerateArgs {
            selector: args.selector,
            root: args.root,
            answers: args.answers,
            force: args.force,
            dry_run: args.dry_run,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    // No subcommand behaves like `component`
    let component_args = match args.command {
        Some(Command::Component(component_args)) => component_args,
        None => args.component,
    };

    let result = component_core::run(component_args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
