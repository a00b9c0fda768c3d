//! Field constraint checks and user-facing messages.
//!
//! Mirrors the browser's constraint validation for the attributes the contact
//! form uses (`required`, `minlength`, `maxlength`, `pattern`,
//! `type="email"`), with lengths counted in UTF-16 code units like the DOM
//! does. Value-missing and too-short failures get field-specific wording;
//! everything else falls back to a generic message.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::error_log::ErrorLog;

/// The three contact form fields, in error-surfacing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    pub const ORDER: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A constraint a field value failed, in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    ValueMissing,
    TooShort,
    TooLong,
    TypeMismatch,
    PatternMismatch,
}

/// Declared constraints of one field.
#[derive(Clone, Debug, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    pub email: bool,
    pub pattern: Option<Regex>,
}

impl FieldRules {
    /// Compile an HTML `pattern` attribute. The pattern must match the whole
    /// value, so it is anchored on both ends. `\w`, `\d` and `\b` keep their
    /// browser meaning and match ASCII only; literal non-ASCII ranges such as
    /// `À-ÿ` are unaffected.
    ///
    /// # Errors
    ///
    /// Returns the regex error for patterns the `regex` crate cannot parse.
    pub fn compile_pattern(raw: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^(?:{})$", ascii_shorthands(raw)))
    }
}

/// Rewrite word, digit and word-boundary escapes to their ASCII forms.
/// A `[` inside a class is a literal in the browser, so it is escaped.
fn ascii_shorthands(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_class = false;
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => match ascii_shorthand(escaped, in_class) {
                    Some(ascii) => out.push_str(ascii),
                    None => {
                        out.push('\\');
                        out.push(escaped);
                    }
                },
                None => out.push('\\'),
            },
            '[' if in_class => out.push_str("\\["),
            '[' => {
                in_class = true;
                out.push(c);
            }
            ']' if in_class => {
                in_class = false;
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

fn ascii_shorthand(escaped: char, in_class: bool) -> Option<&'static str> {
    match (escaped, in_class) {
        ('w', false) => Some("[[:word:]]"),
        ('W', false) => Some("[^[:word:]]"),
        ('d', false) => Some("[[:digit:]]"),
        ('D', false) => Some("[^[:digit:]]"),
        ('b', false) => Some(r"(?-u:\b)"),
        ('B', false) => Some(r"(?-u:\B)"),
        ('w', true) => Some("[:word:]"),
        ('W', true) => Some("[:^word:]"),
        ('d', true) => Some("[:digit:]"),
        ('D', true) => Some("[:^digit:]"),
        _ => None,
    }
}

/// Length as the DOM counts it.
#[must_use]
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// First violated constraint, or `None` when the value is valid.
///
/// An empty optional field is valid regardless of its other constraints.
#[must_use]
pub fn check(rules: &FieldRules, value: &str) -> Option<Violation> {
    if value.is_empty() {
        return rules.required.then_some(Violation::ValueMissing);
    }
    let len = utf16_len(value);
    if rules.min_len.is_some_and(|min| len < min) {
        return Some(Violation::TooShort);
    }
    if rules.max_len.is_some_and(|max| len > max) {
        return Some(Violation::TooLong);
    }
    if rules.email && !is_valid_email(value) {
        return Some(Violation::TypeMismatch);
    }
    if rules.pattern.as_ref().is_some_and(|p| !p.is_match(value)) {
        return Some(Violation::PatternMismatch);
    }
    None
}

/// Field-specific wording for value-missing and too-short failures.
#[must_use]
pub fn custom_message(kind: FieldKind, violation: Violation) -> Option<&'static str> {
    match (kind, violation) {
        (FieldKind::Name, Violation::ValueMissing) => Some("Please enter your name."),
        (FieldKind::Name, Violation::TooShort) => Some("Name must be at least 2 characters long."),
        (FieldKind::Email, Violation::ValueMissing) => Some("Email is required."),
        (FieldKind::Email, Violation::TooShort) => Some("Please enter a valid email address."),
        (FieldKind::Message, Violation::ValueMissing) => Some("Please enter a message."),
        (FieldKind::Message, Violation::TooShort) => Some("Message is too short. Please write a bit more."),
        _ => None,
    }
}

/// Message for `violation` on a field of `kind` when the browser supplies
/// none.
#[must_use]
pub fn message(kind: FieldKind, rules: &FieldRules, violation: Violation) -> String {
    if let Some(custom) = custom_message(kind, violation) {
        return custom.to_owned();
    }
    match violation {
        Violation::TooLong => match rules.max_len {
            Some(max) => format!("Please shorten this text to {max} characters or fewer."),
            None => "Please shorten this text.".to_owned(),
        },
        Violation::TypeMismatch => "Please enter an email address.".to_owned(),
        Violation::PatternMismatch => "Please match the requested format.".to_owned(),
        Violation::ValueMissing => "Please fill out this field.".to_owned(),
        Violation::TooShort => "Please lengthen this text.".to_owned(),
    }
}

/// The "valid email address" grammar of HTML `type="email"` inputs.
static HTML_EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
});

/// Syntactic email check against the HTML `type="email"` grammar.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    HTML_EMAIL.as_ref().is_ok_and(|re| re.is_match(value))
}

/// One field's current state as read from the form.
#[derive(Clone, Copy, Debug)]
pub struct FieldState<'a> {
    pub kind: FieldKind,
    /// Name recorded in the error log (the element's `name`, else its id).
    pub name: &'a str,
    pub value: &'a str,
    pub rules: &'a FieldRules,
    /// The browser's localized `validationMessage`, empty when none is known.
    pub native_message: &'a str,
}

impl FieldState<'_> {
    /// Validation message, or `None` when the field is valid.
    ///
    /// Failures without field-specific wording show the browser's own
    /// message when there is one.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        let violation = check(self.rules, self.value)?;
        let message = match custom_message(self.kind, violation) {
            Some(custom) => custom.to_owned(),
            None if !self.native_message.is_empty() => self.native_message.to_owned(),
            None => message(self.kind, self.rules, violation),
        };
        Some(message)
    }

    /// Text for `setCustomValidity`: the field-specific message, or empty so
    /// the browser's native validity applies.
    #[must_use]
    pub fn custom_validity(&self) -> &'static str {
        check(self.rules, self.value)
            .and_then(|violation| custom_message(self.kind, violation))
            .unwrap_or("")
    }

    fn log_error(&self, errors: &ErrorLog, message: &str, time: String) {
        errors.record(self.name, self.value, message, time);
    }
}

/// Message of the first invalid field in `fields` order, or `None` when all
/// are valid and the error area should be cleared.
#[must_use]
pub fn first_error(fields: &[FieldState<'_>]) -> Option<String> {
    fields.iter().find_map(FieldState::error)
}

/// Validate a field losing focus, logging the failure if any.
pub fn validate_on_blur(field: &FieldState<'_>, errors: &ErrorLog, now: impl FnOnce() -> String) -> Option<String> {
    let message = field.error()?;
    field.log_error(errors, &message, now());
    Some(message)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission must be cancelled; `message` is the first failure.
    Blocked { message: String },
    /// Submission proceeds carrying the serialized error history.
    Allowed { errors_json: String },
}

/// Decide whether the form may be submitted.
///
/// Every failing field is logged. On success the full session history is
/// serialized for the hidden field.
///
/// # Errors
///
/// Returns the serializer error if the log cannot be encoded.
pub fn gate_submit(
    fields: &[FieldState<'_>],
    errors: &ErrorLog,
    now: impl Fn() -> String,
) -> Result<SubmitOutcome, serde_json::Error> {
    let mut first = None;
    for field in fields {
        if let Some(message) = field.error() {
            field.log_error(errors, &message, now());
            first.get_or_insert(message);
        }
    }
    match first {
        Some(message) => Ok(SubmitOutcome::Blocked { message }),
        None => Ok(SubmitOutcome::Allowed { errors_json: errors.to_json()? }),
    }
}
