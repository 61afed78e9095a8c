use crate::errors::GatewayError;

/// Parses the numeric code from a status line such as `"404 NOT FOUND"`.
pub fn parse_status_code(line: &str) -> Result<u16, GatewayError> {
    let invalid = || GatewayError::InvalidStatus(line.to_string());

    let token = line.split_whitespace().next().ok_or_else(invalid)?;
    let code: u16 = token.parse().map_err(|_| invalid())?;
    if (100..=999).contains(&code) {
        Ok(code)
    } else {
        Err(invalid())
    }
}

/// Builds the status line for the codes the site emits.
#[must_use]
pub fn status_line(code: u16) -> String {
    let reason = match code {
        200 => "OK",
        404 => "NOT FOUND",
        405 => "METHOD NOT ALLOWED",
        500 => "INTERNAL SERVER ERROR",
        _ => "UNKNOWN",
    };
    format!("{code} {reason}")
}
