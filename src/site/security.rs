use crate::gateway::HeaderList;

/// Headers attached to every response the site produces.
pub const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("X-Content-Type-Options", "nosniff"),
    ("X-Frame-Options", "SAMEORIGIN"),
    ("X-XSS-Protection", "1; mode=block"),
    (
        "Strict-Transport-Security",
        "max-age=31536000; includeSubDomains",
    ),
    ("Content-Security-Policy", "default-src 'self'"),
];

/// Sets the security headers on `headers`, replacing any existing header
/// of the same name regardless of case.
pub fn apply_security_headers(headers: &mut HeaderList) {
    for (name, value) in SECURITY_HEADERS {
        headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        headers.push((name.to_string(), value.to_string()));
    }
}
