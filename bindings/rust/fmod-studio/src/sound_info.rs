// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Sound table entries

use std::ffi::{c_char, c_int, CStr};
use std::fmt;
use std::slice;

use fmod_studio_sys as sys;

use crate::types::Mode;

/// Everything needed to create a low-level sound for a sound table key
///
/// Retrieved via `System::sound_info()`. The sound data or file name is
/// copied out of native memory, so this value stays valid after the bank
/// that produced it is unloaded. `exinfo()` points into this value and
/// must not outlive it.
pub struct SoundInfo {
    name_or_data: Option<Vec<u8>>,
    mode: Mode,
    exinfo: sys::FMOD_CREATESOUNDEXINFO,
    subsound_index: i32,
    inclusion_list: Box<c_int>,
}

impl SoundInfo {
    /// Copy a native sound info record
    ///
    /// # Safety
    ///
    /// `raw.name_or_data` must be null, a valid NUL-terminated file name, or
    /// (in memory mode) point to at least `fileoffset + length` readable
    /// bytes.
    pub(crate) unsafe fn from_c(raw: &sys::FMOD_STUDIO_SOUND_INFO) -> Self {
        let mut exinfo = raw.exinfo;
        let mut mode = Mode::from_bits_retain(raw.mode);

        let name_or_data = if raw.name_or_data.is_null() {
            None
        } else if mode.is_memory() {
            let start = unsafe { raw.name_or_data.cast::<u8>().add(exinfo.fileoffset as usize) };
            let data = unsafe { slice::from_raw_parts(start, exinfo.length as usize) }.to_vec();
            // The copy is owned here, so native must not read it in place.
            mode = Mode::from_bits_retain(
                (mode.bits() & !sys::FMOD_OPENMEMORY_POINT) | sys::FMOD_OPENMEMORY,
            );
            exinfo.fileoffset = 0;
            Some(data)
        } else {
            Some(unsafe { CStr::from_ptr(raw.name_or_data) }.to_bytes_with_nul().to_vec())
        };

        let mut inclusion_list = Box::new(raw.subsoundIndex);
        exinfo.inclusionlist = &mut *inclusion_list;
        exinfo.inclusionlistnum = 1;

        Self {
            name_or_data,
            mode,
            exinfo,
            subsound_index: raw.subsoundIndex,
            inclusion_list,
        }
    }

    /// File name, when the sound is not loaded from memory
    pub fn name(&self) -> Option<&str> {
        if self.mode.is_memory() {
            return None;
        }
        let bytes = self.name_or_data.as_deref()?;
        let bytes = bytes.strip_suffix(&[0]).unwrap_or(bytes);
        std::str::from_utf8(bytes).ok()
    }

    /// Sound data, when the sound is loaded from memory
    pub fn data(&self) -> Option<&[u8]> {
        if self.mode.is_memory() {
            self.name_or_data.as_deref()
        } else {
            None
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Subsound to play within the sound file
    pub fn subsound_index(&self) -> i32 {
        self.subsound_index
    }

    /// Pointer to pass as `name_or_data` when creating the sound
    pub fn name_or_data_ptr(&self) -> *const c_char {
        self.name_or_data
            .as_ref()
            .map_or(std::ptr::null(), |v| v.as_ptr().cast())
    }

    /// Extra info to pass when creating the sound
    ///
    /// Its inclusion list points at memory owned by this value.
    pub fn exinfo(&self) -> &sys::FMOD_CREATESOUNDEXINFO {
        &self.exinfo
    }

    #[cfg(test)]
    fn inclusion_list_ptr(&self) -> *const c_int {
        &*self.inclusion_list
    }
}

impl fmt::Debug for SoundInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoundInfo")
            .field("name", &self.name())
            .field("data_len", &self.data().map(<[u8]>::len))
            .field("mode", &self.mode)
            .field("subsound_index", &self.subsound_index)
            .finish()
    }
}
