use std::{fs::File, path::Path};

fn main() {
    let path = Path::new("config.toml");

    if !path.exists() {
        if let Err(e) = File::create(path) {
            println!("cargo:warning=could not create config.toml: {e}");
        }
    }

    println!("cargo:rerun-if-changed=config.toml");
}
