//! Shared output formatting for listing commands.

use notekeep_core::NoteInfo;

/// Print notes as an aligned table.
pub fn print_notes_table(notes: &[NoteInfo]) {
    if notes.is_empty() {
        println!("(no notes found)");
        return;
    }

    let filename_width = notes
        .iter()
        .map(|n| n.filename.len())
        .chain(std::iter::once("FILENAME".len()))
        .max()
        .unwrap_or(0);
    let title_width = notes
        .iter()
        .map(|n| n.title.len())
        .chain(std::iter::once("TITLE".len()))
        .max()
        .unwrap_or(0);

    println!("{:filename_width$}  {:title_width$}  NOTES  TAGS", "FILENAME", "TITLE");
    for note in notes {
        let counts = match (note.children_count, note.descendant_count) {
            (Some(c), Some(d)) => format!("{c}/{d}"),
            _ => "-".to_string(),
        };
        println!(
            "{:filename_width$}  {:title_width$}  {counts:5}  {}",
            note.filename,
            note.title,
            note.tags.join(", ")
        );
    }
}

/// Print notes as a JSON array of listing projections.
pub fn print_notes_json(notes: &[NoteInfo]) {
    match serde_json::to_string_pretty(notes) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            println!("FAIL nk list");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
