//! String validators
//!
//! Lengths are counted in characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::builder::{named_allow, named_transform};
use crate::error::{Reasons, ValidationError};
use crate::predicate::{
    is_string, matches, not_empty, str_equals, str_len_between, str_len_max, str_len_min,
};
use crate::validator::{reject, text_or, Validator};
use crate::value::Value;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("static regex must compile")
});

const NOT_STRING: &str = "value is not string";

/// Accept strings, the empty string included.
pub fn is() -> Validator {
    named_allow("str.is", is_string(), NOT_STRING)
}

/// Accept non-empty strings.
pub fn nonempty() -> Validator {
    named_allow("str.nonempty", not_empty(), "value is a empty string")
}

/// Accept strings of at least `m` characters.
pub fn min(m: usize) -> Validator {
    named_allow(
        "str.min",
        str_len_min(m),
        format!("value.length is lower than {m}"),
    )
}

/// Accept strings of at most `m` characters.
pub fn max(m: usize) -> Validator {
    named_allow(
        "str.max",
        str_len_max(m),
        format!("value.length is greater than {m}"),
    )
}

/// Accept strings whose length is in `[start, end]`.
pub fn length(start: usize, end: usize) -> Validator {
    named_allow(
        "str.length",
        str_len_between(start, end),
        format!("value.length is out of bounds [{start}, {end}]"),
    )
}

/// Accept strings matching `pattern` anywhere.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use toi::validators::str;
/// use toi::Value;
///
/// let digits = str::regex(Regex::new("^[0-9]+$").unwrap());
/// assert!(digits.validate(Value::from("123")).is_ok());
///
/// let err = digits.validate(Value::from("12a")).unwrap_err();
/// assert_eq!(err.to_string(), "value does not match /^[0-9]+$/");
/// ```
pub fn regex(pattern: Regex) -> Validator {
    named_transform("str.regex", move |v| {
        let s = match v {
            Value::String(s) => s,
            other => return Err(ValidationError::new(NOT_STRING, other).into()),
        };
        if pattern.is_match(&s) {
            Ok(Value::String(s))
        } else {
            Err(mismatch(&pattern, s))
        }
    })
}

/// Accept strings matching `pattern` and replace the first match with
/// `replacement`.
///
/// The replacement uses `String#replace` references: `$1` to `$99` (a
/// following letter is kept literal, so `$1c` is group 1 then `c`), `$&` for
/// the whole match, `$<name>` or `${name}` for named groups and `$$` for a
/// dollar sign. Anything else after `$` is copied as written.
///
/// Strings that do not match are rejected, not passed through.
///
/// ```
/// use regex::Regex;
/// use toi::validators::str;
/// use toi::Value;
///
/// let area = str::regex_replace(Regex::new(r"^\((\d{3})\) ").unwrap(), "$1-");
/// assert_eq!(area.validate(Value::from("(555) 0100")).unwrap(), Value::from("555-0100"));
/// ```
pub fn regex_replace(pattern: Regex, replacement: impl Into<String>) -> Validator {
    let replacement = expand_references(&pattern, &replacement.into());
    named_transform("str.regex", move |v| {
        let s = match v {
            Value::String(s) => s,
            other => return Err(ValidationError::new(NOT_STRING, other).into()),
        };
        if !pattern.is_match(&s) {
            return Err(mismatch(&pattern, s));
        }
        Ok(Value::from(
            pattern.replace(&s, replacement.as_str()).into_owned(),
        ))
    })
}

// Rewrites `String#replace` references into the `${group}` form the regex
// crate expects, which never reads trailing word characters as a group name.
fn expand_references(pattern: &Regex, replacement: &str) -> String {
    let groups = pattern.captures_len();
    let mut out = String::with_capacity(replacement.len());
    let mut rest = replacement;
    while let Some(at) = rest.find('$') {
        out.push_str(&rest[..at]);
        let tail = &rest[at + 1..];
        let (expanded, used) = expand_reference(tail, groups);
        out.push_str(&expanded);
        rest = &tail[used..];
    }
    out.push_str(rest);
    out
}

// Expands the reference at the start of `tail` (the text after a `$`) and
// returns it with the number of bytes consumed.
fn expand_reference(tail: &str, groups: usize) -> (String, usize) {
    let bytes = tail.as_bytes();
    match bytes.first() {
        Some(b'$') => ("$$".to_owned(), 1),
        Some(b'&') => ("${0}".to_owned(), 1),
        Some(&(open @ (b'{' | b'<'))) => {
            let close = if open == b'{' { '}' } else { '>' };
            match tail.find(close) {
                Some(end) if end > 1 => (format!("${{{}}}", &tail[1..end]), end + 1),
                _ => ("$$".to_owned(), 0),
            }
        }
        Some(d) if d.is_ascii_digit() => {
            let group = |len: usize| {
                tail.get(..len)
                    .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|digits| digits.parse::<usize>().ok())
                    .filter(|&n| n >= 1 && n < groups)
            };
            match group(2).map(|n| (n, 2)).or_else(|| group(1).map(|n| (n, 1))) {
                Some((n, used)) => (format!("${{{n}}}"), used),
                None => ("$$".to_owned(), 0),
            }
        }
        _ => ("$$".to_owned(), 0),
    }
}

fn mismatch(pattern: &Regex, s: String) -> crate::Error {
    ValidationError::new(format!("value does not match /{}/", pattern.as_str()), s).into()
}

/// Upper-case strings.
pub fn upper() -> Validator {
    named_transform("str.upper", |v| match v {
        Value::String(s) => Ok(Value::String(s.to_uppercase())),
        other => Err(ValidationError::new(NOT_STRING, other).into()),
    })
}

/// Accept only the string `test`.
pub fn equals(test: impl Into<String>) -> Validator {
    named_allow("str.equals", str_equals(test), "value is not equal")
}

/// Accept email-shaped strings.
pub fn email() -> Validator {
    named_allow(
        "str.email",
        matches(EMAIL.clone()),
        "value is not a valid email",
    )
}

/// Rules for [`password_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordOptions {
    min_length: usize,
    must_have_number: bool,
    must_have_letter: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            min_length: 8,
            must_have_number: true,
            must_have_letter: true,
        }
    }
}

impl PasswordOptions {
    /// At least 8 characters, one digit and one ASCII letter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum length in characters.
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Require at least one ASCII digit.
    pub fn must_have_number(mut self, required: bool) -> Self {
        self.must_have_number = required;
        self
    }

    /// Require at least one ASCII letter.
    pub fn must_have_letter(mut self, required: bool) -> Self {
        self.must_have_letter = required;
        self
    }
}

/// Accept passwords meeting the default [`PasswordOptions`].
///
/// Every broken rule is reported as a separate reason.
///
/// ```
/// use toi::validators::str;
/// use toi::Value;
///
/// assert!(str::password().validate(Value::from("abc12345")).is_ok());
///
/// let err = str::password().validate(Value::from("short")).unwrap_err();
/// let err = err.as_invalid().unwrap();
/// assert_eq!(err.text(), "value is an invalid password");
/// assert_eq!(err.reasons().map(|r| r.len()), Some(2));
/// ```
pub fn password() -> Validator {
    password_with(PasswordOptions::default())
}

/// Accept passwords meeting `options`.
pub fn password_with(options: PasswordOptions) -> Validator {
    Validator::wrap("str.password", move |value, message| {
        if value.is_nullish() {
            return Ok(value);
        }
        if !matches!(value, Value::String(_)) {
            return Err(reject(message, NOT_STRING, value));
        }
        let s = value.as_str().unwrap_or_default();

        let mut reasons = Vec::new();
        if s.chars().count() < options.min_length {
            reasons.push(ValidationError::new(
                format!("password length is less than {}", options.min_length),
                s,
            ));
        }
        if options.must_have_number && !s.chars().any(|c| c.is_ascii_digit()) {
            reasons.push(ValidationError::new(
                "password must include at least one number",
                s,
            ));
        }
        if options.must_have_letter && !s.chars().any(|c| c.is_ascii_alphabetic()) {
            reasons.push(ValidationError::new(
                "password must include at least one letter",
                s,
            ));
        }

        if reasons.is_empty() {
            Ok(value)
        } else {
            Err(
                ValidationError::new(text_or(message, "value is an invalid password"), value)
                    .with_reasons(Reasons::Items(reasons))
                    .into(),
            )
        }
    })
}
