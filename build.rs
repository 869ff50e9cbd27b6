//! Build script for spotmeta.
//!
//! Copies the `.env.example` template next to the `.env` file the binary
//! reads at startup, so a fresh install shows which variables to set.
//!
//! Destination is the platform's local data directory:
//! - Linux: `~/.local/share/spotmeta/.env.example`
//! - macOS: `~/Library/Application Support/spotmeta/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotmeta/.env.example`
//!
//! Nothing here may fail the build. Sandboxed builds often cannot write to
//! the home directory, so every problem is reported as a cargo warning.

use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=.env.example");

    let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR is not set");
        return;
    };
    let template = PathBuf::from(manifest_dir).join(".env.example");

    if !template.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
        return;
    }

    let Some(mut out_dir) = dirs::data_local_dir() else {
        println!("cargo:warning=no local data directory, skipping .env.example copy");
        return;
    };
    out_dir.push("spotmeta");

    let copied = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&template, out_dir.join(".env.example")));

    if let Err(e) = copied {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }
}
