//! Lifecycle hook questions
//!
//! One asked question (`hooks`) and two derived from it (`implements`,
//! `lifecycleNg`). The `hooks` answer keeps a leading `", "` so it can be
//! appended to the `Component` import in the template.

use crate::answers::{AnswerSet, AnswerValue};
use crate::error::ScaffoldError;
use crate::questions::{Question, Resolution};
use std::fmt;

const SEPARATOR: &str = ", ";

/// Lifecycle interfaces a component can implement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleHook {
    OnChanges,
    DoCheck,
    OnDestroy,
    OnInit,
}

impl LifecycleHook {
    /// Match a user-typed hook name, ignoring case and surrounding space
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "changes" | "onchanges" => Some(LifecycleHook::OnChanges),
            "check" | "docheck" => Some(LifecycleHook::DoCheck),
            "destroy" | "ondestroy" => Some(LifecycleHook::OnDestroy),
            "init" | "oninit" => Some(LifecycleHook::OnInit),
            _ => None,
        }
    }

    pub fn interface_name(&self) -> &'static str {
        match self {
            LifecycleHook::OnChanges => "OnChanges",
            LifecycleHook::DoCheck => "DoCheck",
            LifecycleHook::OnDestroy => "OnDestroy",
            LifecycleHook::OnInit => "OnInit",
        }
    }
}

impl fmt::Display for LifecycleHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.interface_name())
    }
}

/// Parse a comma-separated list, dropping names that are not hooks
///
/// Order and duplicates are kept.
pub fn parse_hooks(input: &str) -> Vec<LifecycleHook> {
    input.split(',').filter_map(LifecycleHook::parse).collect()
}

pub fn hook_questions() -> Vec<Question> {
    vec![
        Question::ask("hooks", "Lifecycle hooks (comma-separated):", set_lifecycle_hooks)
            .allow_blank()
            .placeholder("init, destroy"),
        Question::derive("implements", "hooks", set_lifecycle_implements),
        Question::derive("lifecycleNg", "hooks", set_lifecycle_methods),
    ]
}

fn set_lifecycle_hooks(input: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    let hooks = parse_hooks(&input.to_string());
    Ok(Resolution::Accepted(AnswerValue::Text(hooks_fragment(&hooks))))
}

fn set_lifecycle_implements(
    hooks: &AnswerValue,
    _: &AnswerSet,
) -> Result<Resolution, ScaffoldError> {
    Ok(Resolution::Accepted(AnswerValue::Text(implements_clause(
        &hooks.to_string(),
    ))))
}

fn set_lifecycle_methods(hooks: &AnswerValue, _: &AnswerSet) -> Result<Resolution, ScaffoldError> {
    Ok(Resolution::Accepted(AnswerValue::Text(method_stubs(
        &hooks.to_string(),
    ))))
}

/// `""` or `", OnInit, OnDestroy"`
pub fn hooks_fragment(hooks: &[LifecycleHook]) -> String {
    hooks
        .iter()
        .map(|hook| format!("{}{}", SEPARATOR, hook))
        .collect()
}

/// `""` or `" implements OnInit, OnDestroy"`
pub fn implements_clause(fragment: &str) -> String {
    if fragment.is_empty() {
        return String::new();
    }
    format!(
        " implements {}",
        fragment.strip_prefix(SEPARATOR).unwrap_or(fragment)
    )
}

/// A newline followed by one empty `ngX() {}` block per hook
pub fn method_stubs(fragment: &str) -> String {
    let mut methods = String::from("\n");
    if fragment.is_empty() {
        return methods;
    }

    for hook in fragment
        .strip_prefix(SEPARATOR)
        .unwrap_or(fragment)
        .split(',')
    {
        methods.push_str(&format!("\n    ng{}() {{\n    }}\n", hook.trim()));
    }
    methods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases_case_insensitive() {
        assert_eq!(LifecycleHook::parse("Init"), Some(LifecycleHook::OnInit));
        assert_eq!(LifecycleHook::parse(" ONINIT "), Some(LifecycleHook::OnInit));
        assert_eq!(LifecycleHook::parse("changes"), Some(LifecycleHook::OnChanges));
        assert_eq!(LifecycleHook::parse("doCheck"), Some(LifecycleHook::DoCheck));
        assert_eq!(LifecycleHook::parse("destroy"), Some(LifecycleHook::OnDestroy));
        assert_eq!(LifecycleHook::parse("afterViewInit"), None);
    }

    #[test]
    fn test_unknown_hooks_dropped() {
        assert_eq!(parse_hooks("bogus, init"), vec![LifecycleHook::OnInit]);
        assert!(parse_hooks("").is_empty());
        assert!(parse_hooks(" , ,nope").is_empty());
    }

    #[test]
    fn test_hooks_fragment_keeps_leading_separator() {
        assert_eq!(hooks_fragment(&[]), "");
        assert_eq!(
            hooks_fragment(&parse_hooks("init, destroy")),
            ", OnInit, OnDestroy"
        );
    }

    #[test]
    fn test_implements_clause() {
        assert_eq!(implements_clause(""), "");
        assert_eq!(implements_clause(", OnInit"), " implements OnInit");
        assert_eq!(
            implements_clause(", OnInit, OnDestroy"),
            " implements OnInit, OnDestroy"
        );
    }

    #[test]
    fn test_method_stubs() {
        assert_eq!(method_stubs(""), "\n");
        assert_eq!(
            method_stubs(", OnInit, OnDestroy"),
            "\n\n    ngOnInit() {\n    }\n\n    ngOnDestroy() {\n    }\n"
        );
    }

    #[test]
    fn test_duplicate_hooks_produce_duplicate_stubs() {
        let fragment = hooks_fragment(&parse_hooks("init, oninit"));
        assert_eq!(fragment, ", OnInit, OnInit");
        assert_eq!(method_stubs(&fragment).matches("ngOnInit()").count(), 2);
    }
}
