use std::{fs::File, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    let path = Path::new("config.toml");

    // The frontend embeds the config with include_str, so the file has to exist.
    // An empty file parses into the default config.
    if !path.exists() {
        if let Err(e) = File::create(path) {
            println!("cargo:warning=failed to create config.toml: {}", e);
        }
    }
}
