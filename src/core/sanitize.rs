// src/core/sanitize.rs

/// Collapse every whitespace run to a single space and trim the ends.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Date part of a `"YYYY-MM-DD hh:mm:ss"` style stamp (everything before the
/// first space).
pub fn date_part(s: &str) -> &str {
    s.split(' ').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses() {
        assert_eq!(normalize_ws("  Build\n\n the   future\t "), "Build the future");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn date_part_splits_on_space() {
        assert_eq!(date_part("2024-05-01 00:00:00.000000"), "2024-05-01");
        assert_eq!(date_part("2024-05-01"), "2024-05-01");
        assert_eq!(date_part(""), "");
    }
}
