// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Count-then-fill protocol for native object lists

use std::ffi::c_int;
use std::ptr;

use crate::error::Result;

/// Fetch a native list of handles
///
/// `count` reports how many items native holds. `fill` is then given a
/// buffer of exactly that capacity and writes the number of items it
/// actually stored. Native may report more than the capacity if the list
/// grew between the two calls; the result is clamped to the capacity.
pub(crate) fn fetch<T, C, F>(count: C, fill: F) -> Result<Vec<*mut T>>
where
    C: FnOnce() -> Result<c_int>,
    F: FnOnce(*mut *mut T, c_int, *mut c_int) -> Result<()>,
{
    let reported = count()?;
    let capacity = usize::try_from(reported).unwrap_or(0);
    if capacity == 0 {
        return Ok(Vec::new());
    }

    let mut items: Vec<*mut T> = vec![ptr::null_mut(); capacity];
    let mut actual: c_int = 0;
    fill(items.as_mut_ptr(), reported, &mut actual)?;

    let actual = usize::try_from(actual).unwrap_or(0);
    if actual > capacity {
        log::warn!(
            "native list grew from {} to {} entries between count and fill; keeping {}",
            capacity,
            actual,
            capacity
        );
    }
    items.truncate(actual.min(capacity));
    Ok(items)
}
