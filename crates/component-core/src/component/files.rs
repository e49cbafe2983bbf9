//! Files generated for a component

use crate::answers::AnswerSet;
use crate::component::options::{MARKUP_EXTENSION, STYLE_EXTENSION};
use crate::error::ScaffoldError;
use crate::templates::{TemplateBody, TemplateDescriptor};

const APP_TEMPLATE: &str = include_str!("../../templates/app.ts");
const SPEC_TEMPLATE: &str = include_str!("../../templates/spec.ts");

pub const PRIMARY_EXTENSION: &str = "ts";

/// Descriptors for the component, its spec, and the optional style and markup files
///
/// Destinations are relative to the project root: `src/{{ selector }}/`.
pub fn component_templates() -> Vec<TemplateDescriptor> {
    let destination =
        |suffix: &str| format!("src/{{{{ selector }}}}/{{{{ selector }}}}.component.{}", suffix);

    vec![
        TemplateDescriptor::new(
            TemplateBody::Static(APP_TEMPLATE),
            destination(PRIMARY_EXTENSION),
        ),
        TemplateDescriptor::new(
            TemplateBody::Static(SPEC_TEMPLATE),
            destination(&format!("spec.{}", PRIMARY_EXTENSION)),
        ),
        TemplateDescriptor::blank(destination(STYLE_EXTENSION)).with_check(check_for_styles_file),
        TemplateDescriptor::blank(destination(MARKUP_EXTENSION))
            .with_check(check_for_template_file),
    ]
}

fn check_for_styles_file(answers: &AnswerSet) -> Result<bool, ScaffoldError> {
    Ok(!answers.require_toggle("styles")?.is_inline())
}

fn check_for_template_file(answers: &AnswerSet) -> Result<bool, ScaffoldError> {
    Ok(!answers.require_toggle("template")?.is_inline())
}
