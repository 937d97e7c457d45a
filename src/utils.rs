// src/utils.rs

/// Escape text for interpolation into HTML markup or attribute values
pub fn escape_html(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '<' => "&lt;".into(),
            '>' => "&gt;".into(),
            '&' => "&amp;".into(),
            '"' => "&quot;".into(),
            '\'' => "&#39;".into(),
            _ => ch.to_string(),
        })
        .collect::<String>()
}

/// "1 Year", "2 Years", "0 Months"
pub fn pluralize(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Whether a profile source points at an http(s) endpoint rather than a local path
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.trim().to_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain ▹ text"), "plain ▹ text");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "Year"), "1 Year");
        assert_eq!(pluralize(2, "Year"), "2 Years");
        assert_eq!(pluralize(0, "Month"), "0 Months");
    }

    #[test]
    fn test_is_remote_source() {
        assert!(is_remote_source("https://example.com/data/profile.json"));
        assert!(is_remote_source("HTTP://localhost:3000/data/profile.json"));
        assert!(!is_remote_source("public/data/profile.json"));
    }
}
