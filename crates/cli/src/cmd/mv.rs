use std::path::Path;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    filename: &str,
    target: Option<&str>,
) {
    let (_cfg, store) = super::open_store(config, profile, "mv");

    match store.move_note(filename, target) {
        Ok(new_rel) => println!("Note moved to {new_rel}"),
        Err(e) => {
            println!("FAIL nk mv");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
