pub mod delete;
pub mod doctor;
pub mod get;
pub mod list;
pub mod mv;
pub mod new;
pub mod output;
pub mod tag;
pub mod update;

use std::path::Path;

use notekeep_core::config::{default_config_path, ConfigLoader, ResolvedConfig};
use notekeep_core::Store;

/// Load config, initialize logging and open the store, exiting with a
/// failure message if any step fails.
pub(crate) fn open_store(
    config: Option<&Path>,
    profile: Option<&str>,
    command: &str,
) -> (ResolvedConfig, Store) {
    let cfg = load_config(config, profile, command);
    crate::logging::init(&cfg);

    let store = match Store::open(cfg.store_root.clone()) {
        Ok(s) => s,
        Err(e) => {
            println!("FAIL nk {command}");
            println!("{e}");
            std::process::exit(1);
        }
    };
    (cfg, store)
}

pub(crate) fn load_config(
    config: Option<&Path>,
    profile: Option<&str>,
    command: &str,
) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL nk {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
