use std::path::Path;

use crate::UpdateArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: UpdateArgs) {
    let (_cfg, store) = super::open_store(config, profile, "update");

    match store.update_note(&args.filename, &args.content, &args.tags) {
        Ok(true) => println!("Note '{}' updated", args.filename),
        Ok(false) => {
            eprintln!("note '{}' not found", args.filename);
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL nk update");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
