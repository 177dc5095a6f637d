// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! String and buffer marshalling between Rust and native memory

use std::ffi::{c_char, c_int, CStr, CString};

use crate::error::{Error, Result};
use crate::status::Status;

/// First buffer size tried when reading a native string of unknown length
pub(crate) const INITIAL_CAPACITY: usize = 256;

/// Encode a Rust string for a native call
///
/// Fails with `InvalidString` on an interior NUL, before anything native
/// is touched.
pub(crate) fn to_cstring(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

/// Decode a NUL-terminated native string
///
/// A null pointer decodes to the empty string. The native memory is only
/// read, never freed.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays alive
/// for the duration of the call.
pub(crate) unsafe fn from_ptr(ptr: *const c_char) -> Result<String> {
    if ptr.is_null() {
        return Ok(String::new());
    }
    let s = unsafe { CStr::from_ptr(ptr) }.to_str()?;
    Ok(s.to_owned())
}

/// Read a string through a native `(buffer, size, retrieved)` entry point
///
/// Tries [`INITIAL_CAPACITY`] bytes first. If native reports `Truncated`,
/// retries exactly once with a buffer of the size native reported in
/// `retrieved` (which counts the terminating NUL). Any other failure is
/// returned as-is.
pub(crate) fn read_truncating<F>(mut fetch: F) -> Result<String>
where
    F: FnMut(*mut c_char, c_int, *mut c_int) -> Result<()>,
{
    let mut buf = vec![0u8; INITIAL_CAPACITY];
    let mut retrieved: c_int = 0;

    match fetch(buf.as_mut_ptr().cast(), buf.len() as c_int, &mut retrieved) {
        Ok(()) => {}
        Err(Error::Status(Status::Truncated)) => {
            let size = usize::try_from(retrieved).unwrap_or(0).max(1);
            buf = vec![0u8; size];
            retrieved = 0;
            fetch(buf.as_mut_ptr().cast(), buf.len() as c_int, &mut retrieved)?;
        }
        Err(e) => return Err(e),
    }

    decode(&buf, retrieved)
}

/// Decode the first `retrieved - 1` bytes of a filled buffer
fn decode(buf: &[u8], retrieved: c_int) -> Result<String> {
    let len = usize::try_from(retrieved)
        .unwrap_or(0)
        .saturating_sub(1)
        .min(buf.len());
    let bytes = &buf[..len];
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(len);
    Ok(String::from_utf8(bytes[..end].to_vec())?)
}
