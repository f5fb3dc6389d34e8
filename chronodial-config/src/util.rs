use std::time::Duration;

/// Return the trimmed value, treating blank strings as unset.
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Parse a human readable duration ("250ms", "1s 500ms").
///
/// Bare integers are read as milliseconds, matching the `*_ms` keys of the
/// timeline document.
pub fn parse_duration(raw: &str) -> Result<Duration, humantime::DurationError> {
    let trimmed = raw.trim();
    if let Ok(millis) = trimmed.parse::<u64>() {
        return Ok(Duration::from_millis(millis));
    }
    humantime::parse_duration(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_numbers_are_milliseconds() {
        assert_eq!(parse_duration("450").unwrap(), Duration::from_millis(450));
        assert_eq!(parse_duration(" 2s ").unwrap(), Duration::from_secs(2));
        assert!(parse_duration("later").is_err());
    }

    #[test]
    fn blank_values_are_unset() {
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" x ")), Some("x"));
        assert_eq!(non_blank(None), None);
    }
}
