//! Single-pass `{{ token }}` substitution

use crate::answers::AnswerSet;
use crate::error::ScaffoldError;
use crate::templates::descriptor::TemplateDescriptor;
use std::path::{Path, PathBuf};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A descriptor after its check passed and its tokens were substituted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Replace every `{{ name }}` in `text` with the value of answer `name`
///
/// In a run of opening braces the last two open the token, so `{{{ x }}}`
/// renders as `{value}`. Unknown names and an unterminated `{{` are kept as
/// written. Substituted values are not scanned again.
pub fn render(text: &str, answers: &AnswerSet) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        if after_open.starts_with('{') {
            output.push('{');
            rest = &rest[start + 1..];
            continue;
        }

        let Some(end) = after_open.find(CLOSE) else {
            output.push_str(&rest[start..]);
            return output;
        };

        let key = after_open[..end].trim();
        match answers.get(key) {
            Some(answer) => output.push_str(&answer.value.to_string()),
            None => output.push_str(&rest[start..start + OPEN.len() + end + CLOSE.len()]),
        }
        rest = &after_open[end + CLOSE.len()..];
    }

    output.push_str(rest);
    output
}

/// Render the descriptors that pass their check, placing them under `root`
///
/// Only the relative destination is rendered; `root` is joined as a path so
/// it is never round-tripped through a string.
pub fn plan(
    descriptors: &[TemplateDescriptor],
    root: &Path,
    answers: &AnswerSet,
) -> Result<Vec<RenderedFile>, ScaffoldError> {
    let mut files = Vec::new();

    for descriptor in descriptors {
        if !descriptor.is_included(answers)? {
            continue;
        }
        files.push(RenderedFile {
            path: root.join(render(&descriptor.destination, answers)),
            contents: render(descriptor.body.text(), answers),
        });
    }

    Ok(files)
}
