use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = super::load_config(config, profile, "doctor");

    println!("OK nk doctor");
    println!("profile     : {}", cfg.active_profile);
    println!("store_root  : {}", cfg.store_root.display());
    println!("log level   : {}", cfg.logging.level);
    if let Some(ref file) = cfg.logging.file {
        println!("log file    : {}", file.display());
    }
    if !cfg.store_root.exists() {
        println!("note: store root does not exist yet (created on first write)");
    }
}
