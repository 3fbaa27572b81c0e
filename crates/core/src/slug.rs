//! Filename and path utilities.
//!
//! Titles are turned into filesystem-safe slugs; collisions within a
//! directory are resolved with a numeric suffix.

use std::path::Path;

/// Stem used when a title contains no usable characters at all
/// (e.g. an all-punctuation title).
const FALLBACK_STEM: &str = "untitled";

/// Derive a markdown filename from a note title.
///
/// Lowercases the title, maps every character outside `[a-z0-9]` to `_`,
/// collapses runs of `_`, strips leading/trailing `_`, and appends `.md`.
///
/// # Examples
/// ```
/// use notekeep_core::slug::slugify;
///
/// assert_eq!(slugify("My First Note"), "my_first_note.md");
/// assert_eq!(slugify("Note with $pecial Ch@rs & Numb3rs!"), "note_with_pecial_ch_rs_numb3rs.md");
/// ```
pub fn slugify(title: &str) -> String {
    let mut stem = String::with_capacity(title.len());
    let mut prev_underscore = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            stem.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            stem.push('_');
            prev_underscore = true;
        }
    }

    let stem = stem.trim_matches('_');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    format!("{stem}.md")
}

/// Find a basename that is free within `dir`.
///
/// If `base` is taken, probes `stem_1.md`, `stem_2.md`, ... re-checking
/// existence on every candidate, since the counter may need to skip
/// multiple collisions.
pub fn unique_in(dir: &Path, base: &str) -> String {
    if !dir.join(base).exists() {
        return base.to_string();
    }

    let stem = base.strip_suffix(".md").unwrap_or(base);
    let mut n = 1;
    loop {
        let candidate = format!("{stem}_{n}.md");
        if !dir.join(&candidate).exists() {
            return candidate;
        }
        n += 1;
    }
}

/// Normalize a parent/target-folder spec into a root-relative directory path.
///
/// A parent may be given with or without a trailing `.md`; both resolve to
/// the same child directory. An empty result means the store root.
pub fn normalize_parent(spec: &str) -> &str {
    spec.strip_suffix(".md").unwrap_or(spec)
}
