//! Syntax rules for domains and email addresses accepted at the boundary.

use once_cell::sync::Lazy;
use regex::Regex;

// A leading label of at least two characters followed by one or more
// alphabetic labels. The dot is literal.
static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,61}[A-Za-z0-9](\.[A-Za-z]{2,})+$")
        .expect("valid domain regex")
});

static EMAIL_LOCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("valid email local-part regex")
});

static EMAIL_HOST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
        .expect("valid email host regex")
});

const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_HOST_LEN: usize = 253;

/// Whether `domain` is acceptable as an email-guessing domain.
pub fn is_valid_domain(domain: &str) -> bool {
    DOMAIN_RE.is_match(domain)
}

/// Whether `email` is a syntactically valid address.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local_part, host)) = email.rsplit_once('@') else {
        return false;
    };

    local_part.len() <= MAX_LOCAL_PART_LEN
        && host.len() <= MAX_HOST_LEN
        && EMAIL_LOCAL_RE.is_match(local_part)
        && EMAIL_HOST_RE.is_match(host)
}
