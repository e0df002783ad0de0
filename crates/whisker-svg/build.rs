//! Build script for whisker-svg
//!
//! Bakes every `assets/*.svg` file into the binary.
//!
//! Pipeline:
//! 1. Read each asset file
//! 2. Sanitize it with the same code the runtime loader uses
//! 3. Write a sorted `(name, content, viewBox)` table to OUT_DIR
//!
//! Output: OUT_DIR/embedded_assets.rs, pulled in by `src/assets.rs`

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

#[allow(dead_code)]
#[path = "src/sanitize.rs"]
mod sanitize;

fn main() {
    println!("cargo:rerun-if-changed=assets");
    println!("cargo:rerun-if-changed=src/sanitize.rs");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let output = Path::new(&out_dir).join("embedded_assets.rs");
    let sanitizer = sanitize::Sanitizer::new().expect("Sanitizer patterns must compile");

    let mut entries = Vec::new();
    match fs::read_dir("assets") {
        Ok(dir) => {
            for entry in dir.flatten() {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some("svg") {
                    continue;
                }
                let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };

                let source = match fs::read_to_string(&path) {
                    Ok(source) => source,
                    Err(e) => {
                        println!("cargo:warning=Could not read {}: {}", path.display(), e);
                        continue;
                    }
                };

                match sanitizer.sanitize(&source) {
                    Some(asset) => entries.push((name.to_string(), asset)),
                    None => {
                        println!(
                            "cargo:warning=Could not parse SVG content from {}",
                            path.display()
                        );
                    }
                }
            }
        }
        Err(e) => println!("cargo:warning=No assets directory: {}", e),
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));

    let mut table = String::from("// Generated by build.rs from assets/*.svg\n");
    table.push_str("pub static EMBEDDED_ASSETS: &[(&str, &str, &str)] = &[\n");
    for (name, asset) in &entries {
        writeln!(
            table,
            "    ({:?}, {:?}, {:?}),",
            name, asset.content, asset.view_box
        )
        .expect("Writing to a String cannot fail");
    }
    table.push_str("];\n");

    fs::write(&output, table).expect("Failed to write embedded asset table");
}
