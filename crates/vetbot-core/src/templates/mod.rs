//! Placeholder template engine.
//!
//! Templates are user-authored strings with `{name}` substitution points,
//! validated against a fixed parameter set before they are ever stored.
//! `{{` and `}}` escape literal braces.

mod ping;
mod template;
mod validation;

pub use ping::ping_template;
pub use template::{Template, TemplateError, TemplateParam};
pub use validation::{highlight, TemplateValidationKind, TemplateValidationResult};
