//! `{variable}` substitution for prompt templates.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name` (surrounding
//!   whitespace inside the braces is ignored)
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! Substituted values are inserted as-is; braces inside a value are never
//! re-parsed. Referencing a variable that was not supplied is an error rather
//! than an empty substitution.

use std::collections::HashMap;
use thiserror::Error;

/// Error type for template parsing and rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("undefined variable '{name}' at position {position} in template")]
    UndefinedVariable { name: String, position: usize },

    #[error("unmatched '{{' at position {position} in template")]
    UnmatchedBrace { position: usize },

    #[error("empty variable name '{{}}' at position {position} in template")]
    EmptyVariableName { position: usize },
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Brace(char),
    Variable { name: &'a str, position: usize },
}

/// Split a template into literal text, escaped braces, and placeholders.
fn scan(template: &str) -> Result<Vec<Segment<'_>>, TemplateError> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(idx) = rest.find(['{', '}']) {
        if idx > 0 {
            segments.push(Segment::Text(&rest[..idx]));
        }
        let position = offset + idx;
        let brace = rest.as_bytes()[idx] as char;
        let after = &rest[idx + 1..];

        let consumed = if after.starts_with(brace) {
            // `{{` or `}}`
            segments.push(Segment::Brace(brace));
            idx + 2
        } else if brace == '}' {
            // Lone `}` is literal.
            segments.push(Segment::Brace('}'));
            idx + 1
        } else {
            let close = after
                .find('}')
                .ok_or(TemplateError::UnmatchedBrace { position })?;
            let raw = &after[..close];
            if raw.is_empty() {
                return Err(TemplateError::EmptyVariableName { position });
            }
            segments.push(Segment::Variable {
                name: raw.trim(),
                position,
            });
            idx + 1 + close + 1
        };

        rest = &rest[consumed..];
        offset += consumed;
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }
    Ok(segments)
}

/// Render a template string by substituting variables.
///
/// ```ignore
/// let vars = vars([("tone", "playful")]);
/// assert_eq!(render_template("Tone: {tone}", &vars)?, "Tone: playful");
/// ```
pub fn render_template(
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());

    for segment in scan(template)? {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Brace(c) => out.push(c),
            Segment::Variable { name, position } => match variables.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    return Err(TemplateError::UndefinedVariable {
                        name: name.to_string(),
                        position,
                    });
                }
            },
        }
    }

    Ok(out)
}

/// Names of all placeholders in a template, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<String>, TemplateError> {
    Ok(scan(template)?
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Variable { name, .. } => Some(name.to_string()),
            _ => None,
        })
        .collect())
}

/// Build a variables map from key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_variables() {
        let vars = vars([("name", "Acme"), ("goal", "sell bread")]);
        let result = render_template("{name} wants to {goal}.", &vars).unwrap();
        assert_eq!(result, "Acme wants to sell bread.");
    }

    #[test]
    fn escaped_braces_render_literally() {
        let vars = vars([("x", "value")]);
        let result = render_template("{{escaped}} and {x} and a }} b", &vars).unwrap();
        assert_eq!(result, "{escaped} and value and a } b");
    }

    #[test]
    fn lone_closing_brace_is_literal() {
        let result = render_template("a } b", &HashMap::new()).unwrap();
        assert_eq!(result, "a } b");
    }

    #[test]
    fn values_are_not_reparsed() {
        let vars = vars([("audience", "people who like {braces}")]);
        let result = render_template("Target: {audience}", &vars).unwrap();
        assert_eq!(result, "Target: people who like {braces}");
    }

    #[test]
    fn whitespace_inside_braces_is_ignored() {
        let vars = vars([("tone", "warm")]);
        assert_eq!(render_template("{ tone }", &vars).unwrap(), "warm");
    }

    #[test]
    fn undefined_variable_reports_position() {
        let err = render_template("Hello {name}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "name".to_string(),
                position: 6
            }
        );
    }

    #[test]
    fn unmatched_and_empty_braces_are_errors() {
        assert_eq!(
            render_template("Hello {name", &HashMap::new()).unwrap_err(),
            TemplateError::UnmatchedBrace { position: 6 }
        );
        assert_eq!(
            render_template("Hello {}", &HashMap::new()).unwrap_err(),
            TemplateError::EmptyVariableName { position: 6 }
        );
    }

    #[test]
    fn positions_are_byte_offsets_after_multibyte_text() {
        let err = render_template("日本 {x}", &HashMap::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::UndefinedVariable {
                name: "x".to_string(),
                position: 7
            }
        );
    }

    #[test]
    fn placeholders_lists_names_in_order() {
        let names = placeholders("{a} {{not}} {b} {a}").unwrap();
        assert_eq!(names, vec!["a", "b", "a"]);
    }

    #[test]
    fn error_display() {
        let err = TemplateError::UnmatchedBrace { position: 5 };
        assert_eq!(err.to_string(), "unmatched '{' at position 5 in template");

        let err = TemplateError::EmptyVariableName { position: 3 };
        assert_eq!(
            err.to_string(),
            "empty variable name '{}' at position 3 in template"
        );
    }
}
