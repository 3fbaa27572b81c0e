use std::path::Path;

use crate::TagAction;

pub fn run(config: Option<&Path>, profile: Option<&str>, action: TagAction) {
    let (_cfg, store) = super::open_store(config, profile, "tag");

    let (filename, result) = match &action {
        TagAction::Add { filename, tags } => (filename, store.add_tags(filename, tags)),
        TagAction::Rm { filename, tags } => (filename, store.remove_tags(filename, tags)),
    };

    match result {
        Ok(true) => println!("Tags updated on '{filename}'"),
        Ok(false) => {
            eprintln!("note '{filename}' not found");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL nk tag");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
