use std::sync::LazyLock;

use regex::Regex;

pub static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// `local@domain.tld` where the last label has at least two letters.
pub fn validate_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Ten digits once spaces and hyphens are removed.
pub fn validate_phone(phone: &str) -> bool {
    let digits = phone.replace([' ', '-'], "");

    RE_PHONE.is_match(&digits)
}
