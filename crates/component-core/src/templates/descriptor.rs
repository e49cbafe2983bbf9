//! Template descriptor types

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;

/// Decides from the final answers whether a file is generated
pub type InclusionCheck = fn(&AnswerSet) -> Result<bool, ScaffoldError>;

/// Contents of a generated file before substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateBody {
    Static(&'static str),
    /// An empty file
    Blank,
}

impl TemplateBody {
    pub fn text(&self) -> &'static str {
        match self {
            TemplateBody::Static(text) => text,
            TemplateBody::Blank => "",
        }
    }
}

/// One file to generate
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    pub body: TemplateBody,

    /// Destination relative to the output root, may contain `{{ token }}` placeholders
    pub destination: String,

    /// Generate only when this returns true; `None` means always
    pub check: Option<InclusionCheck>,
}

impl TemplateDescriptor {
    pub fn new(body: TemplateBody, destination: impl Into<String>) -> Self {
        Self {
            body,
            destination: destination.into(),
            check: None,
        }
    }

    pub fn blank(destination: impl Into<String>) -> Self {
        Self::new(TemplateBody::Blank, destination)
    }

    pub fn with_check(mut self, check: InclusionCheck) -> Self {
        self.check = Some(check);
        self
    }

    pub fn is_included(&self, answers: &AnswerSet) -> Result<bool, ScaffoldError> {
        match self.check {
            Some(check) => check(answers),
            None => Ok(true),
        }
    }
}
