//! Component questions and their transforms

use crate::answers::{AnswerSet, AnswerValue, Toggle};
use crate::component::hooks::hook_questions;
use crate::error::ScaffoldError;
use crate::names::{dash_to_pascal, is_dash_format};
use crate::questions::{Question, Resolution};

pub const STYLE_EXTENSION: &str = "scss";
pub const MARKUP_EXTENSION: &str = "html";

/// Selector, component name, then the component options
pub fn all_questions() -> Vec<Question> {
    let mut questions = vec![
        Question::ask(
            "selector",
            "What is the component selector (in dash-case)?",
            set_selector,
        )
        .placeholder("my-widget"),
        Question::derive("componentName", "selector", set_component_name),
    ];
    questions.extend(component_option_questions());
    questions
}

/// Questions asked once `selector` is known
pub fn component_option_questions() -> Vec<Question> {
    let mut questions = vec![
        Question::ask("styles", "Use inline styles (y/N)?", set_inline_styles)
            .allow_blank()
            .placeholder("n"),
        Question::ask("template", "Use inline template (y/N)?", set_inline_template)
            .allow_blank()
            .placeholder("n"),
        Question::derive("styleAttribute", "styles", pick_style_attribute),
        Question::derive("templateAttribute", "template", pick_template_attribute),
    ];
    questions.extend(hook_questions());
    questions
}

/// `MyWidgetComponent` for `my-widget`
pub fn component_name(selector: &str) -> String {
    format!("{}Component", dash_to_pascal(selector))
}

fn set_selector(input: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    let selector = input.to_string();
    let selector = selector.trim();

    if is_dash_format(selector) {
        Ok(Resolution::Accepted(AnswerValue::text(selector)))
    } else {
        Ok(Resolution::Rejected)
    }
}

fn set_component_name(selector: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    Ok(Resolution::Accepted(AnswerValue::Text(component_name(
        &selector.to_string(),
    ))))
}

/// `Some(true)` for yes, `Some(false)` for no, `None` if unrecognized
///
/// Blank input takes `default`.
pub fn parse_yes_no(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn inline_toggle(
    input: &AnswerValue,
    answers: &AnswerSet,
    extension: &str,
) -> Result<Resolution, ScaffoldError> {
    let Some(inline) = parse_yes_no(&input.to_string(), false) else {
        return Ok(Resolution::Rejected);
    };

    let toggle = if inline {
        Toggle::Inline
    } else {
        let selector = answers.require_text("selector")?;
        Toggle::File(format!("./{}.component.{}", selector, extension))
    };
    Ok(Resolution::Accepted(AnswerValue::Toggle(toggle)))
}

fn set_inline_styles(input: &AnswerValue, answers: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    inline_toggle(input, answers, STYLE_EXTENSION)
}

fn set_inline_template(
    input: &AnswerValue,
    answers: &AnswerSet,
) -> Result<Resolution, ScaffoldError> {
    inline_toggle(input, answers, MARKUP_EXTENSION)
}

fn expect_toggle<'a>(name: &str, value: &'a AnswerValue) -> Result<&'a Toggle, ScaffoldError> {
    value.as_toggle().ok_or_else(|| ScaffoldError::UnexpectedValue {
        name: name.to_string(),
        expected: "an inline/file toggle",
    })
}

fn pick_style_attribute(styles: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    let attribute = match expect_toggle("styles", styles)? {
        Toggle::Inline => "styles",
        Toggle::File(_) => "styleUrls",
    };
    Ok(Resolution::Accepted(AnswerValue::text(attribute)))
}

fn pick_template_attribute(
    template: &AnswerValue,
    _: &AnswerSet,
) -> Result<Resolution, ScaffoldError> {
    let attribute = match expect_toggle("template", template)? {
        Toggle::Inline => "template",
        Toggle::File(_) => "templateUrl",
    };
    Ok(Resolution::Accepted(AnswerValue::text(attribute)))
}
