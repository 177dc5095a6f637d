// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Locating the native library
//!
//! A loaded library stays resident for the rest of the process, so the
//! function tables handed out here are `'static` and every facade can carry
//! a plain reference to one.

use std::env;
use std::ffi::OsStr;
use std::sync::OnceLock;

use fmod_studio_sys::StudioApi;

use crate::error::Result;

/// Environment variable overriding the library searched by [`load_default`]
pub const LIBRARY_ENV: &str = "FMOD_STUDIO_LIBRARY";

/// Platform file name of the native library
#[cfg(target_os = "windows")]
pub const DEFAULT_LIBRARY: &str = "fmodstudio.dll";
#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY: &str = "libfmodstudio.dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const DEFAULT_LIBRARY: &str = "libfmodstudio.so";

/// Load the library at `path` and resolve its entry points
///
/// Each call loads the library again and leaks one table; prefer
/// [`load_default`] unless several builds of the library are in play.
///
/// # Safety
///
/// Loading a library runs its initialisers, and the library must export
/// the FMOD Studio ABI.
pub unsafe fn load<P: AsRef<OsStr>>(path: P) -> Result<&'static StudioApi> {
    let path = path.as_ref();
    let (library, api) = unsafe { StudioApi::load(path) }?;

    let missing = api.missing();
    if !missing.is_empty() {
        log::debug!(
            "{} of {} entry points missing from {:?}: {}",
            missing.len(),
            StudioApi::SYMBOLS.len(),
            path,
            missing.join(", ")
        );
    }
    log::info!("loaded FMOD Studio from {:?}", path);

    // The table's pointers must outlive every facade built from it.
    std::mem::forget(library);
    Ok(Box::leak(Box::new(api)))
}

/// Load the library named by `FMOD_STUDIO_LIBRARY`, or the platform default
///
/// The first successful load is cached; later calls return the same table.
pub fn load_default() -> Result<&'static StudioApi> {
    static API: OnceLock<&'static StudioApi> = OnceLock::new();

    if let Some(api) = API.get() {
        return Ok(api);
    }
    let path = library_path();
    let api = unsafe { load(&path) }.map_err(|e| {
        log::warn!("could not load {}: {}", path, e);
        e
    })?;
    Ok(API.get_or_init(|| api))
}

/// Table backed by symbols resolved at link time
#[cfg(feature = "link")]
pub fn linked() -> &'static StudioApi {
    &fmod_studio_sys::linked::API
}

fn library_path() -> String {
    match env::var(LIBRARY_ENV) {
        Ok(path) if !path.is_empty() => path,
        _ => DEFAULT_LIBRARY.to_string(),
    }
}
