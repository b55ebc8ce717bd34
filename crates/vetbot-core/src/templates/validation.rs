use std::fmt;

/// Template validation failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateValidationKind {
    NoParameter,
    NestedCurlyBrace,
    InvalidParameter,
    UnmatchedLeftCurlyBrace,
    UnmatchedRightCurlyBrace,
}

impl fmt::Display for TemplateValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::NoParameter => "Missing template parameter name between curly braces.",
            Self::NestedCurlyBrace => "Nested template parameter.",
            Self::InvalidParameter => "Invalid parameter.",
            Self::UnmatchedLeftCurlyBrace => "Unmatched {",
            Self::UnmatchedRightCurlyBrace => "Unmatched }",
        };
        f.write_str(message)
    }
}

/// First validation failure in a template, with a half-open `[start, end)`
/// character span into the validated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateValidationResult {
    pub start: usize,
    pub end: usize,
    pub kind: TemplateValidationKind,
}

/// Render the validated text with the offending span wrapped in backticks.
pub fn highlight(text: &str, result: &TemplateValidationResult) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    let mut idx = 0;
    for c in text.chars() {
        if idx == result.start {
            out.push('`');
        }
        if idx == result.end {
            out.push('`');
        }
        out.push(c);
        idx += 1;
    }
    if result.end == idx {
        out.push('`');
    }
    out
}
