//! Build script for swe-sys
//!
//! This script locates the Swiss Ephemeris shared library (libswe) so the
//! final binary can link against it.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SWE_LIB_DIR");

    // Strategy 1: Check for a pre-built library via environment variable
    if let Ok(lib_dir) = env::var("SWE_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=dylib=swe");
        return;
    }

    // Strategy 2: Try pkg-config
    if try_pkg_config() {
        return;
    }

    // Strategy 3: Look for the library in common locations
    let search_paths = [
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/opt/swisseph/lib",
    ];

    for path in &search_paths {
        for name in &["libswe.so", "libswe.dylib"] {
            let lib_path = PathBuf::from(path).join(name);
            if lib_path.exists() {
                println!("cargo:rustc-link-search=native={}", path);
                println!("cargo:rustc-link-lib=dylib=swe");
                return;
            }
        }
    }

    // Not found. The rlib still compiles (declarations only); linking is only
    // attempted when a binary actually enables the Swiss backend, so emit a
    // warning instead of failing the whole workspace build.
    println!(
        "cargo:warning=libswe not found; set SWE_LIB_DIR or install the \
         Swiss Ephemeris library before linking a swiss-ephe binary"
    );
}

fn try_pkg_config() -> bool {
    match pkg_config::Config::new().probe("swe") {
        Ok(_) => {
            println!("cargo:info=Found libswe via pkg-config");
            true
        }
        Err(_) => false,
    }
}
