use std::path::Path;

use crate::NewArgs;
use tracing::debug;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: NewArgs) {
    let (_cfg, store) = super::open_store(config, profile, "new");
    debug!(title = %args.title, "creating note");

    match store.add_note(&args.title, &args.content, &args.tags, args.parent.as_deref())
    {
        Ok(rel) => println!("Note '{}' created at {rel}", args.title),
        Err(e) => {
            println!("FAIL nk new");
            println!("{e}");
            std::process::exit(1);
        }
    }
}
