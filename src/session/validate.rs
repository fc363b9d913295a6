// Pre-flight validation of user-submitted URLs

use regex::Regex;

use super::errors::UrlRejection;

lazy_static::lazy_static! {
    // Anchored host test: optional scheme, optional www., then a recognized
    // platform host. The rest of the string is not parsed.
    static ref HOST_RE: Regex = Regex::new(
        r"(?i)^(https?://)?(www\.)?(youtube\.com|youtu\.be|instagram\.com|tiktok\.com|facebook\.com|fb\.watch|twitter\.com|x\.com)"
    ).unwrap();
}

/// Classify a free-text string as an acceptable video URL.
///
/// Returns the trimmed input unchanged on success; scheme, case, and
/// trailing slashes are left as the user typed them.
pub fn validate(raw_url: &str) -> Result<&str, UrlRejection> {
    let trimmed = raw_url.trim();
    if trimmed.is_empty() {
        return Err(UrlRejection::EmptyInput);
    }
    if !HOST_RE.is_match(trimmed) {
        return Err(UrlRejection::UnsupportedHost);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(validate(""), Err(UrlRejection::EmptyInput));
        assert_eq!(validate("   "), Err(UrlRejection::EmptyInput));
        assert_eq!(validate("\t\n"), Err(UrlRejection::EmptyInput));
    }

    #[test]
    fn test_unsupported_hosts_rejected() {
        assert_eq!(
            validate("https://vimeo.com/12345"),
            Err(UrlRejection::UnsupportedHost)
        );
        assert_eq!(
            validate("not a url at all"),
            Err(UrlRejection::UnsupportedHost)
        );
        assert_eq!(
            validate("https://example.com/youtube.com"),
            Err(UrlRejection::UnsupportedHost)
        );
    }

    #[test]
    fn test_case_insensitive_match_without_normalization() {
        // Accepted input comes back byte-for-byte
        assert_eq!(
            validate("https://www.YouTube.com/watch?v=x"),
            Ok("https://www.YouTube.com/watch?v=x")
        );
    }

    #[test]
    fn test_optional_scheme_and_www() {
        assert!(validate("youtube.com/watch?v=abc").is_ok());
        assert!(validate("www.tiktok.com/@user/video/1").is_ok());
        assert!(validate("http://instagram.com/reel/xyz").is_ok());
        assert!(validate("https://youtu.be/abc123").is_ok());
        assert!(validate("fb.watch/xyz").is_ok());
        assert!(validate("https://x.com/user/status/1").is_ok());
    }

    #[test]
    fn test_host_must_lead_the_string() {
        // A recognized host buried later in the string does not count
        assert_eq!(
            validate("see https://youtube.com/watch?v=x"),
            Err(UrlRejection::UnsupportedHost)
        );
        // x.com must match literally, not as a fragment of another host
        assert_eq!(
            validate("xcom.example.com/video"),
            Err(UrlRejection::UnsupportedHost)
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            validate("  https://youtube.com/watch?v=x \n"),
            Ok("https://youtube.com/watch?v=x")
        );
    }
}
