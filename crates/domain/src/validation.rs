//! Character class rules shared by value objects.

use std::sync::LazyLock;

use regex_lite::Regex;

static ALPHANUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static LETTERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Zа-яА-ЯёЁ]+$").unwrap());

/// Non-empty and made of ASCII letters and digits only.
pub(crate) fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_RE.is_match(value)
}

/// Non-empty and made of Latin or Cyrillic letters only.
pub(crate) fn is_letters(value: &str) -> bool {
    LETTERS_RE.is_match(value)
}
