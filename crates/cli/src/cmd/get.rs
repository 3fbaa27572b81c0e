use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>, filename: &str) {
    let (_cfg, store) = super::open_store(config, profile, "get");

    match store.get_note(filename) {
        Ok(Some(body)) => println!("{body}"),
        Ok(None) => {
            eprintln!("note '{filename}' not found");
            std::process::exit(1);
        }
        Err(e) => {
            println!("FAIL nk get");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
