//! Positional first/middle/last name splitting.
//!
//! The same rule applies to display names (split on spaces) and to email
//! local-parts (split on dots):
//!
//! | tokens | first | middle                 | last     |
//! |--------|-------|------------------------|----------|
//! | 0      | input | -                      | -        |
//! | 1      | t0    | -                      | -        |
//! | 2      | t0    | -                      | t1       |
//! | 3      | t0    | t1                     | t2       |
//! | n > 3  | t0    | t1 + t(n-2), no joiner | t(n-1)   |
//!
//! For more than three tokens every token strictly between the second and the
//! second-to-last is dropped. This lossy collapse matches the established
//! address convention and must not be changed without stakeholder sign-off.

use serde::Serialize;

use super::NameShape;

/// Delimiter between the parts of a display name.
pub const FULL_NAME_DELIMITER: char = ' ';

/// Delimiter between the parts of an email local-part.
pub const LOCAL_PART_DELIMITER: char = '.';

/// A name broken into positional parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameParts {
    pub first: String,
    pub middle: Option<String>,
    pub last: Option<String>,
}

impl NameParts {
    /// Presence pattern of the optional parts.
    pub fn shape(&self) -> NameShape {
        NameShape {
            middle_present: self.middle.is_some(),
            last_present: self.last.is_some(),
        }
    }

    /// Joins the present parts with `separator`.
    pub fn join(&self, separator: char) -> String {
        let mut joined = self.first.clone();
        for part in [&self.middle, &self.last].into_iter().flatten() {
            joined.push(separator);
            joined.push_str(part);
        }
        joined
    }
}

/// Splits `input` into first/middle/last parts on `delimiter`.
///
/// Surrounding whitespace is trimmed. Repeated delimiters yield empty tokens
/// that take part in the positional rule, so `john..smith` has an empty
/// (present) middle name. Input that is empty after trimming is kept
/// verbatim as the first name.
pub fn split_name(input: &str, delimiter: char) -> NameParts {
    let trimmed = input.trim();
    let tokens: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(delimiter).collect()
    };

    match tokens.as_slice() {
        [] => NameParts {
            first: input.to_string(),
            middle: None,
            last: None,
        },
        [first] => NameParts {
            first: first.to_string(),
            middle: None,
            last: None,
        },
        [first, last] => NameParts {
            first: first.to_string(),
            middle: None,
            last: Some(last.to_string()),
        },
        [first, middle, last] => NameParts {
            first: first.to_string(),
            middle: Some(middle.to_string()),
            last: Some(last.to_string()),
        },
        [first, second, .., second_to_last, last] => NameParts {
            first: first.to_string(),
            middle: Some(format!("{}{}", second, second_to_last)),
            last: Some(last.to_string()),
        },
    }
}
