//! Intake validation helpers shared by the store and the test suite.

/// Syntactic email check: one `@` with non-empty local part, and a domain
/// containing at least one dot with non-empty labels around it. No
/// whitespace anywhere. Deliverability is the mail provider's problem.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Canonical form used for uniqueness comparison: addresses differing only
/// in case are the same inbox for our purposes.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Trims a free-text note, mapping blank input to `None`.
pub fn normalize_note(note: Option<&str>) -> Option<String> {
    note.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_owned)
}
