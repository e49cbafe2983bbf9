//! File templates and their rendering
//!
//! This module provides:
//! - Template descriptors (body, destination pattern, inclusion check)
//! - Flat `{{ token }}` substitution over resolved answers
//! - Writing rendered files to disk

pub mod descriptor;
pub mod render;
pub mod writer;

pub use descriptor::{InclusionCheck, TemplateBody, TemplateDescriptor};
pub use render::{plan, render, RenderedFile};
pub use writer::{write_files, WriteOptions};
