use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9\-_]*$").unwrap());

#[inline(always)]
fn validate_name(input: &str) -> bool {
    NAME_REGEX.is_match(input)
}

pub(crate) mod name;
