//! Selector name checks and conversions

/// Check that `value` is lowercase alphanumeric segments joined by single hyphens
///
/// `my-widget` and `widget2` pass; `My-widget`, `my_widget`, `-widget`,
/// `widget-` and `my--widget` do not.
pub fn is_dash_format(value: &str) -> bool {
    !value.is_empty()
        && value.split('-').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Convert `foo-bar-baz` into `FooBarBaz`
///
/// Input is not validated; run [`is_dash_format`] first.
pub fn dash_to_pascal(value: &str) -> String {
    value
        .split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
