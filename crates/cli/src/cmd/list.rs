use std::path::Path;

use crate::cmd::output;
use crate::ListArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: ListArgs) {
    let (_cfg, store) = super::open_store(config, profile, "list");

    let notes = match store.list_notes(args.parent.as_deref()) {
        Ok(notes) => notes,
        Err(e) => {
            println!("FAIL nk list");
            println!("{e}");
            std::process::exit(1);
        }
    };

    if args.json {
        output::print_notes_json(&notes);
    } else {
        output::print_notes_table(&notes);
    }
}
