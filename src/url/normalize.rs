/// Normalizes one trimmed line from the URL list
///
/// Lines starting with the literal prefix `www.` gain an explicit `http://`
/// scheme. Every other line is returned unchanged, including empty lines
/// and scheme-less hosts like `example.com`, which are passed through and
/// fail naturally at fetch time rather than being rejected here. This
/// pass-through is documented legacy behavior; do not tighten it without a
/// strictness setting.
///
/// Idempotent: normalizing an already-normalized URL returns it unchanged.
///
/// # Examples
///
/// ```
/// use websift::url::normalize_url;
///
/// assert_eq!(normalize_url("www.example.com"), "http://www.example.com");
/// assert_eq!(normalize_url("https://example.com"), "https://example.com");
/// ```
pub fn normalize_url(line: &str) -> String {
    if line.starts_with("www.") {
        format!("http://{}", line)
    } else {
        line.to_string()
    }
}

/// Returns true if the line already carries an `http://` or `https://` scheme
pub fn has_explicit_scheme(line: &str) -> bool {
    line.starts_with("http://") || line.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_www_prefix_gains_scheme() {
        assert_eq!(
            normalize_url("www.horseracing.com"),
            "http://www.horseracing.com"
        );
    }

    #[test]
    fn test_full_urls_pass_through() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(
            normalize_url("https://www.example.com/page"),
            "https://www.example.com/page"
        );
    }

    #[test]
    fn test_empty_line_passes_through() {
        assert_eq!(normalize_url(""), "");
    }

    #[test]
    fn test_schemeless_host_passes_through() {
        // Legacy behavior: no scheme is added for non-www hosts
        assert_eq!(normalize_url("example.com"), "example.com");
    }

    #[test]
    fn test_www_requires_trailing_dot() {
        assert_eq!(normalize_url("wwwx.com"), "wwwx.com");
        assert_eq!(normalize_url("www"), "www");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "www.example.com",
            "http://example.com",
            "https://example.com",
            "example.com",
            "",
            "not a url",
        ];

        for sample in samples {
            let once = normalize_url(sample);
            let twice = normalize_url(&once);
            assert_eq!(once, twice, "normalization of {:?} is not idempotent", sample);
        }
    }

    #[test]
    fn test_has_explicit_scheme() {
        assert!(has_explicit_scheme("http://example.com"));
        assert!(has_explicit_scheme("https://example.com"));
        assert!(!has_explicit_scheme("www.example.com"));
        assert!(!has_explicit_scheme("example.com"));
        assert!(!has_explicit_scheme(""));
    }
}
