//! Component Core - Shared library for component scaffolding CLIs
//!
//! Generates the files of a front-end component from a selector name and a
//! few questions (inline styles? inline template? lifecycle hooks?).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name checks, answers, question lists, flat template rendering
//! - **Layer 2: Workflow Orchestration** - The `Prompter` seam, question resolution and
//!   [`generate_component`] for custom UIs
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! Questions are resolved strictly in order. A question either asks the user
//! or derives its answer from an earlier one, and every transform receives
//! the answers resolved so far:
//!
//! ```text
//! selector ─► componentName
//! styles   ─► styleAttribute
//! template ─► templateAttribute
//! hooks    ─► implements, lifecycleNg
//! ```
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use component_core::{generate_component, ScriptedPrompter, WriteOptions};
//!
//! let mut prompter = ScriptedPrompter::new()
//!     .answer("styles", "n")
//!     .answer("template", "y")
//!     .answer("hooks", "init");
//! let generated =
//!     generate_component(root, Some("my-widget"), &mut prompter, WriteOptions::default()).await?;
//! ```

pub mod answer_file;
pub mod answers;
pub mod component;
pub mod engine;
pub mod error;
pub mod names;
pub mod questions;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answer_file::{AnswerFile, AnswerFilePrompter};
pub use answers::{Answer, AnswerSet, AnswerValue, Toggle};
pub use component::{generate_component, Generated, LifecycleHook};
pub use engine::{resolve_questions, Prompter, ScriptedPrompter};
pub use error::ScaffoldError;
pub use names::{dash_to_pascal, is_dash_format};
pub use questions::{Question, QuestionList, Resolution};
pub use templates::{TemplateDescriptor, WriteOptions};

#[cfg(feature = "tui")]
pub use tui::run;
