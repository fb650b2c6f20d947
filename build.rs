//! Build script for the Quadbeat client.
//!
//! Copies the `.env.example` configuration template into the user's local
//! data directory so it sits next to the `.env` the client reads.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to `<data_local_dir>/quadbeat/.env.example`.
///
/// A missing template only produces a cargo warning.
///
/// # Destination Location
/// - Linux: `~/.local/share/quadbeat/.env.example`
/// - macOS: `~/Library/Application Support/quadbeat/.env.example`
/// - Windows: `%LOCALAPPDATA%/quadbeat/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("quadbeat");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
