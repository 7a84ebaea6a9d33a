//! Compile `PMB_API_URL` from `.env` into the WASM bundle.
//!
//! The browser has no process environment, so the API base is baked in at
//! build time. Variables already set in the build environment win.

use std::env;
use std::path::Path;

const FORWARDED: &[&str] = &["PMB_API_URL"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in FORWARDED {
        println!("cargo:rerun-if-env-changed={key}");
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(entries) = dotenvy::from_path_iter(env_file) else {
        println!("cargo:warning=could not read .env; using defaults");
        return;
    };
    for (key, value) in entries.flatten() {
        if FORWARDED.contains(&key.as_str()) && env::var(&key).is_err() {
            println!("cargo:rustc-env={key}={value}");
        }
    }
}
