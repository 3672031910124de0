use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // Place config.toml beside the built binary so Config::load finds it
    let config_path = Path::new("config.toml");
    if !config_path.exists() {
        return;
    }

    let out_dir = env::var("OUT_DIR").unwrap();
    let Some(target_dir) = Path::new(&out_dir).ancestors().nth(3) else {
        return;
    };

    fs::copy(config_path, target_dir.join("config.toml")).unwrap();
}
