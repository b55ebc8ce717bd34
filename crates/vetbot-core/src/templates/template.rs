use std::collections::HashMap;

use thiserror::Error;

use super::validation::{TemplateValidationKind, TemplateValidationResult};

/// A declared placeholder name with a human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateParam {
    pub name: &'static str,
    pub description: &'static str,
}

/// Expansion error. Callers are expected to [`Template::validate`] first;
/// these only surface when expanding text that never went through validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("No parameter name between curly braces.")]
    NoParameter,

    #[error("Can't have a nested curly brace.")]
    NestedCurlyBrace,

    #[error("Invalid parameter name between curly braces.")]
    InvalidParameter,

    #[error("Can't have an unmatched {{")]
    UnmatchedLeftCurlyBrace,

    #[error("Can't have an unmatched }}.")]
    UnmatchedRightCurlyBrace,
}

/// A template definition: the fixed set of placeholders a text may use.
#[derive(Debug, Clone)]
pub struct Template {
    params: Vec<TemplateParam>,
}

/// Position in the scanned text, in both character and byte offsets.
/// Validation spans are character offsets; slicing needs bytes.
#[derive(Debug, Clone, Copy)]
struct Offsets {
    chars: usize,
    bytes: usize,
}

enum ScanState {
    ReadingText { start: Offsets },
    ReadStartCurlyBrace { text_start: Offsets, brace: Offsets },
    ReadingVariable { start: Offsets },
    ReadEndCurlyBraceInText { text_start: Offsets },
}

impl Template {
    pub fn new(params: Vec<TemplateParam>) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &[TemplateParam] {
        &self.params
    }

    fn has_param(&self, name: &str) -> bool {
        self.params.iter().any(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Check a text against the declared parameter set, returning the first
    /// error found. Spans are character offsets into the original text,
    /// half-open, bounding exactly the offending braces or name. Unmatched
    /// `}` spans extend back to the start of the current text segment.
    pub fn validate(&self, text: &str) -> Option<TemplateValidationResult> {
        use ScanState::*;

        let mut state = ReadingText {
            start: Offsets { chars: 0, bytes: 0 },
        };
        let mut chars = 0;

        for (bytes, c) in text.char_indices() {
            let at = Offsets { chars, bytes };
            let next = Offsets {
                chars: chars + 1,
                bytes: bytes + c.len_utf8(),
            };
            state = match state {
                ReadingText { start } => match c {
                    '{' => ReadStartCurlyBrace {
                        text_start: start,
                        brace: at,
                    },
                    '}' => ReadEndCurlyBraceInText { text_start: start },
                    _ => ReadingText { start },
                },
                ReadStartCurlyBrace { text_start, .. } => match c {
                    '{' => ReadingText { start: next },
                    '}' => {
                        return Some(TemplateValidationResult {
                            start: text_start.chars,
                            end: at.chars + 1,
                            kind: TemplateValidationKind::NoParameter,
                        })
                    }
                    _ => ReadingVariable { start: at },
                },
                ReadingVariable { start } => match c {
                    '{' => {
                        return Some(TemplateValidationResult {
                            start: at.chars,
                            end: at.chars + 1,
                            kind: TemplateValidationKind::NestedCurlyBrace,
                        })
                    }
                    '}' => {
                        let name = text[start.bytes..bytes].trim().to_lowercase();
                        if name.is_empty() {
                            return Some(TemplateValidationResult {
                                start: start.chars - 1,
                                end: at.chars + 1,
                                kind: TemplateValidationKind::NoParameter,
                            });
                        }
                        if !self.has_param(&name) {
                            return Some(TemplateValidationResult {
                                start: start.chars - 1,
                                end: at.chars + 1,
                                kind: TemplateValidationKind::InvalidParameter,
                            });
                        }
                        ReadingText { start: next }
                    }
                    _ => ReadingVariable { start },
                },
                ReadEndCurlyBraceInText { text_start } => match c {
                    '}' => ReadingText { start: next },
                    _ => {
                        return Some(TemplateValidationResult {
                            start: text_start.chars,
                            end: at.chars,
                            kind: TemplateValidationKind::UnmatchedRightCurlyBrace,
                        })
                    }
                },
            };
            chars += 1;
        }

        match state {
            ReadingText { .. } => None,
            ReadStartCurlyBrace { .. } => Some(TemplateValidationResult {
                start: chars - 1,
                end: chars,
                kind: TemplateValidationKind::UnmatchedLeftCurlyBrace,
            }),
            ReadingVariable { start } => Some(TemplateValidationResult {
                start: start.chars - 1,
                end: chars,
                kind: TemplateValidationKind::UnmatchedLeftCurlyBrace,
            }),
            ReadEndCurlyBraceInText { text_start } => Some(TemplateValidationResult {
                start: text_start.chars,
                end: chars,
                kind: TemplateValidationKind::UnmatchedRightCurlyBrace,
            }),
        }
    }

    /// Substitute each placeholder with its bound value. Assumes the text
    /// already passed [`Self::validate`]; invalid input raises the matching
    /// [`TemplateError`].
    pub fn expand(
        &self,
        text: &str,
        values: &HashMap<&str, String>,
    ) -> Result<String, TemplateError> {
        use ScanState::*;

        let mut state = ReadingText {
            start: Offsets { chars: 0, bytes: 0 },
        };
        let mut out = String::with_capacity(text.len());
        let mut chars = 0;

        for (bytes, c) in text.char_indices() {
            let at = Offsets { chars, bytes };
            let next = Offsets {
                chars: chars + 1,
                bytes: bytes + c.len_utf8(),
            };
            state = match state {
                ReadingText { start } => match c {
                    '{' => ReadStartCurlyBrace {
                        text_start: start,
                        brace: at,
                    },
                    '}' => ReadEndCurlyBraceInText { text_start: start },
                    _ => ReadingText { start },
                },
                ReadStartCurlyBrace { text_start, brace } => match c {
                    '{' => {
                        out.push_str(&text[text_start.bytes..bytes]);
                        ReadingText { start: next }
                    }
                    '}' => return Err(TemplateError::NoParameter),
                    _ => {
                        out.push_str(&text[text_start.bytes..brace.bytes]);
                        ReadingVariable { start: at }
                    }
                },
                ReadingVariable { start } => match c {
                    '{' => return Err(TemplateError::NestedCurlyBrace),
                    '}' => {
                        let name = text[start.bytes..bytes].trim().to_lowercase();
                        if name.is_empty() {
                            return Err(TemplateError::NoParameter);
                        }
                        match values.get(name.as_str()) {
                            Some(value) => out.push_str(value),
                            None => return Err(TemplateError::InvalidParameter),
                        }
                        ReadingText { start: next }
                    }
                    _ => ReadingVariable { start },
                },
                ReadEndCurlyBraceInText { text_start } => match c {
                    '}' => {
                        out.push_str(&text[text_start.bytes..bytes]);
                        ReadingText { start: next }
                    }
                    _ => return Err(TemplateError::UnmatchedRightCurlyBrace),
                },
            };
            chars += 1;
        }

        match state {
            ReadingText { start } => out.push_str(&text[start.bytes..]),
            ReadStartCurlyBrace { .. } | ReadingVariable { .. } => {
                return Err(TemplateError::UnmatchedLeftCurlyBrace)
            }
            ReadEndCurlyBraceInText { .. } => return Err(TemplateError::UnmatchedRightCurlyBrace),
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashmap;

    use super::*;

    fn sample_template() -> Template {
        Template::new(vec![TemplateParam {
            name: "t",
            description: "The t variable",
        }])
    }

    fn validation(
        start: usize,
        end: usize,
        kind: TemplateValidationKind,
    ) -> Option<TemplateValidationResult> {
        Some(TemplateValidationResult { start, end, kind })
    }

    #[test]
    fn expand_simple() {
        let values = hashmap! { "t" => "Hello".to_string() };
        assert_eq!(
            sample_template().expand("{ t  } World", &values),
            Ok("Hello World".into())
        );
    }

    #[test]
    fn expand_escaped_left_brace() {
        assert_eq!(
            sample_template().expand("{{ World", &HashMap::new()),
            Ok("{ World".into())
        );
    }

    #[test]
    fn expand_escaped_right_brace() {
        assert_eq!(
            sample_template().expand("{{ Wo}}rld", &HashMap::new()),
            Ok("{ Wo}rld".into())
        );
    }

    #[test]
    fn expand_escapes_only() {
        assert_eq!(
            sample_template().expand("{{ hi }}", &HashMap::new()),
            Ok("{ hi }".into())
        );
    }

    #[test]
    fn expand_invalid_parameter() {
        assert_eq!(
            sample_template().expand("Hello {world}", &HashMap::new()),
            Err(TemplateError::InvalidParameter)
        );
    }

    #[test]
    fn expand_unmatched_left_brace() {
        assert_eq!(
            sample_template().expand("Hello { world", &HashMap::new()),
            Err(TemplateError::UnmatchedLeftCurlyBrace)
        );
    }

    #[test]
    fn validate_accepts_valid_text() {
        let template = sample_template();
        assert_eq!(template.validate("Hello { t } World"), None);
        assert_eq!(template.validate("{{ escaped }}"), None);
        assert_eq!(template.validate("plain text"), None);
    }

    #[test]
    fn validate_detects_no_parameter() {
        assert_eq!(
            sample_template().validate("Hello {  } World"),
            validation(6, 10, TemplateValidationKind::NoParameter)
        );
    }

    #[test]
    fn validate_detects_empty_braces() {
        assert_eq!(
            sample_template().validate("Hello {} World"),
            validation(0, 8, TemplateValidationKind::NoParameter)
        );
    }

    #[test]
    fn validate_detects_nested_curly_brace() {
        assert_eq!(
            sample_template().validate("Hello { {} } World"),
            validation(8, 9, TemplateValidationKind::NestedCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_invalid_parameter() {
        assert_eq!(
            sample_template().validate("Hello {world}"),
            validation(6, 13, TemplateValidationKind::InvalidParameter)
        );
    }

    #[test]
    fn validate_detects_unmatched_left_brace() {
        assert_eq!(
            sample_template().validate("Hello { world"),
            validation(6, 13, TemplateValidationKind::UnmatchedLeftCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_unmatched_right_brace() {
        assert_eq!(
            sample_template().validate("Hello } world"),
            validation(0, 7, TemplateValidationKind::UnmatchedRightCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_unmatched_left_brace_at_start() {
        assert_eq!(
            sample_template().validate("{Hello world"),
            validation(0, 12, TemplateValidationKind::UnmatchedLeftCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_unmatched_right_brace_at_start() {
        assert_eq!(
            sample_template().validate("}Hello world"),
            validation(0, 1, TemplateValidationKind::UnmatchedRightCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_unmatched_left_brace_at_end() {
        assert_eq!(
            sample_template().validate("Hello world{"),
            validation(11, 12, TemplateValidationKind::UnmatchedLeftCurlyBrace)
        );
    }

    #[test]
    fn validate_detects_unmatched_right_brace_at_end() {
        assert_eq!(
            sample_template().validate("Hello world}"),
            validation(0, 12, TemplateValidationKind::UnmatchedRightCurlyBrace)
        );
    }

    #[test]
    fn validate_unmatched_right_brace_span_excludes_placeholder() {
        assert_eq!(
            sample_template().validate("Hello {t}world}"),
            validation(9, 15, TemplateValidationKind::UnmatchedRightCurlyBrace)
        );
    }
}
