// src/core/html.rs

/// Escape text for use inside HTML element content or a quoted attribute.
pub fn escape<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `true` if `url` is safe to put in an `href`: http(s), relative, or the
/// `#` placeholder. Anything carrying another scheme (`javascript:`, `data:`)
/// is rejected.
pub fn is_safe_href(url: &str) -> bool {
    let lc = url.trim_start().to_ascii_lowercase();
    if lc.starts_with("http://") || lc.starts_with("https://") {
        return true;
    }
    match lc.find(':') {
        None => true,
        // A colon after the first path/query/fragment char is not a scheme.
        Some(colon) => lc[..colon].contains(['/', '?', '#']),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn href_schemes() {
        assert!(is_safe_href("https://brainporteindhoven.com/job/1"));
        assert!(is_safe_href("#"));
        assert!(is_safe_href("/en/job?id=1:2"));
        assert!(!is_safe_href("javascript:alert(1)"));
        assert!(!is_safe_href("  JavaScript:alert(1)"));
        assert!(!is_safe_href("data:text/html,hi"));
    }
}
