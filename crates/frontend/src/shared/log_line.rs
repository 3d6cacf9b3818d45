//! Best-effort splitting of raw syslog lines for display.

/// Structured view of a line like
/// `Jun 14 15:16:01 combo sshd(pam_unix)[19939]: authentication failure`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedLogLine {
    pub timestamp: String,
    pub component: String,
    pub message: String,
}

/// Splits a raw line into timestamp, reporting component and message.
/// Anything that does not look like syslog falls through with the whole
/// text in `message` and the other fields empty.
pub fn parse_log_line(raw: &str) -> ParsedLogLine {
    let mut tokens = raw.split_whitespace();
    let (Some(month), Some(day), Some(time)) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return fallback(raw);
    };

    if !is_word(month) || !is_number(day) || !is_clock(time) {
        return fallback(raw);
    }

    // Everything after the time token, e.g. "combo sshd(pam_unix)[19939]: msg".
    let rest = match raw.split_once(time) {
        Some((_, rest)) => rest.trim_start(),
        None => return fallback(raw),
    };

    // The component runs up to the first colon; the message follows it.
    let Some((component, message)) = rest.split_once(':') else {
        return fallback(raw);
    };
    let component = component.trim();
    let message = message.trim_start();
    if component.is_empty() || message.is_empty() {
        return fallback(raw);
    }

    ParsedLogLine {
        timestamp: format!("{} {} {}", month, day, time),
        component: component.to_string(),
        message: message.to_string(),
    }
}

fn fallback(raw: &str) -> ParsedLogLine {
    ParsedLogLine {
        timestamp: String::new(),
        component: String::new(),
        message: raw.to_string(),
    }
}

fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

fn is_clock(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 8
        && bytes[2] == b':'
        && bytes[5] == b':'
        && [0, 1, 3, 4, 6, 7]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sshd_line() {
        let parsed = parse_log_line(
            "Jun 14 15:16:01 combo sshd(pam_unix)[19939]: authentication failure; logname= uid=0",
        );
        assert_eq!(parsed.timestamp, "Jun 14 15:16:01");
        assert_eq!(parsed.component, "combo sshd(pam_unix)[19939]");
        assert_eq!(parsed.message, "authentication failure; logname= uid=0");
    }

    #[test]
    fn test_parse_splits_on_first_colon_after_time() {
        let parsed =
            parse_log_line("Jun 15 02:04:59 combo su(pam_unix)[21416]: session opened for user cyrus by (uid=0)");
        assert_eq!(parsed.component, "combo su(pam_unix)[21416]");
        assert_eq!(parsed.message, "session opened for user cyrus by (uid=0)");
    }

    #[test]
    fn test_parse_rejects_plain_text() {
        let parsed = parse_log_line("not a syslog line at all");
        assert_eq!(parsed.timestamp, "");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.message, "not a syslog line at all");
    }

    #[test]
    fn test_parse_rejects_missing_colon() {
        let parsed = parse_log_line("Jun 14 15:16:01 combo kernel panic");
        assert_eq!(parsed.component, "");
        assert_eq!(parsed.message, "Jun 14 15:16:01 combo kernel panic");
    }

    #[test]
    fn test_parse_rejects_short_time_token() {
        let parsed = parse_log_line("Jun 14 15:16 combo sshd: failure");
        assert_eq!(parsed.timestamp, "");
        assert_eq!(parsed.message, "Jun 14 15:16 combo sshd: failure");
    }
}
