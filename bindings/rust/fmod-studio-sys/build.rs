// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Build script for fmod-studio-sys
//!
//! The default build resolves every entry point at runtime (see
//! `StudioApi::load`), so nothing is linked. With the `link` feature this
//! script:
//! 1. Locates the fmodstudio library (via pkg-config or environment variables)
//! 2. Emits the link directives for the extern block in `linked`

fn main() {
    println!("cargo:rerun-if-env-changed=FMOD_STUDIO_LIB_DIR");
    println!("cargo:rerun-if-env-changed=FMOD_STUDIO_LIB_NAME");

    #[cfg(feature = "link")]
    link();
}

#[cfg(feature = "link")]
fn link() {
    use std::env;
    use std::path::PathBuf;

    let lib_name = env::var("FMOD_STUDIO_LIB_NAME").unwrap_or_else(|_| "fmodstudio".to_string());

    // Explicit directory wins over pkg-config
    if let Ok(lib_dir) = env::var("FMOD_STUDIO_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:rustc-link-lib=dylib={}", lib_name);
        return;
    }

    // pkg-config emits both the search path and the link-lib line
    if pkg_config::probe_library(&lib_name).is_ok() {
        return;
    }

    // Default: an SDK unpacked next to the workspace under fmod/api/studio/lib
    if let Ok(manifest_dir) = env::var("CARGO_MANIFEST_DIR") {
        let lib_path = PathBuf::from(&manifest_dir).join("../../../fmod/api/studio/lib");
        if lib_path.exists() {
            let lib_path = lib_path.canonicalize().unwrap_or(lib_path);
            println!("cargo:rustc-link-search=native={}", lib_path.display());
        }
    }
    println!("cargo:rustc-link-lib=dylib={}", lib_name);
}
