use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, filename: &str) {
    let (_cfg, store) = super::open_store(config, profile, "delete");

    match store.delete_note(filename) {
        Ok(true) => println!("Note '{filename}' deleted"),
        Ok(false) => {
            eprintln!("note '{filename}' not found");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL nk delete");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
