//! Note body formatting.
//!
//! A note file starts with a `# title` line and a `Tags:` line, followed by
//! a blank line and free-form content. Content is otherwise opaque text.

/// Prefix of the tags line in a note header.
pub const TAGS_PREFIX: &str = "Tags:";

/// Render the standard note body.
pub fn format_note(title: &str, tags: &[String], content: &str) -> String {
    format!("# {title}\n{TAGS_PREFIX} {}\n\n{content}", tags.join(", "))
}

/// Strip the standard header from a note body, returning the free-form
/// content.
///
/// Drops the first line, the second line if it starts with [`TAGS_PREFIX`],
/// and one following blank line if present. Used when re-splicing the
/// header on tag mutation or move.
pub fn strip_header(body: &str) -> &str {
    let rest = match body.split_once('\n') {
        Some((_, rest)) => rest,
        None => return "",
    };

    let rest = if rest.starts_with(TAGS_PREFIX) {
        match rest.split_once('\n') {
            Some((_, rest)) => rest,
            None => "",
        }
    } else {
        rest
    };

    rest.strip_prefix('\n').unwrap_or(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_joins_tags_with_comma_space() {
        let body = format_note("My Note", &["a".into(), "b c".into()], "content");
        assert_eq!(body, "# My Note\nTags: a, b c\n\ncontent");
    }

    #[test]
    fn format_with_empty_tags_keeps_tags_line() {
        let body = format_note("My Note", &[], "content");
        assert_eq!(body, "# My Note\nTags: \n\ncontent");
    }

    #[test]
    fn strip_header_roundtrips_content() {
        let body = format_note("T", &["x".into()], "line one\n\nline two");
        assert_eq!(strip_header(&body), "line one\n\nline two");
    }

    #[test]
    fn strip_header_without_tags_line() {
        assert_eq!(strip_header("# Title\n\nbody"), "body");
        assert_eq!(strip_header("# Title\nbody"), "body");
    }

    #[test]
    fn strip_header_degenerate_bodies() {
        assert_eq!(strip_header("# Title"), "");
        assert_eq!(strip_header("# Title\nTags: a"), "");
        assert_eq!(strip_header(""), "");
    }
}
