// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Banks: the unit of loading for events, buses and sample data

use std::ffi::{c_int, c_void};
use std::mem::size_of;
use std::ptr;

use fmod_studio_sys as sys;

use crate::callback;
use crate::error::Result;
use crate::event_description::EventDescription;
use crate::guid::Guid;
use crate::list;
use crate::marshal::read_truncating;
use crate::mixer_strip::MixerStrip;
use crate::types::LoadingState;

facade! {
    /// Loaded bank
    ///
    /// Produced by the `System::load_bank_*` family. After a successful
    /// [`Bank::unload`] this value holds a null token and every further call
    /// fails with `InvalidHandle`.
    ///
    /// `Bank` is `Clone` but not `Copy`:
    ///
    /// ```compile_fail
    /// fn copied<T: Copy>() {}
    /// copied::<fmod_studio::Bank>();
    /// ```
    unique Bank => sys::FMOD_STUDIO_BANK
}

impl Bank {
    pub fn id(&self) -> Result<Guid> {
        let mut raw = sys::FMOD_GUID::default();
        call!(self.handle, FMOD_Studio_Bank_GetID, &mut raw)?;
        Ok(Guid::from(raw))
    }

    pub fn path(&self) -> Result<String> {
        read_truncating(|buf, size, retrieved| {
            call!(self.handle, FMOD_Studio_Bank_GetPath, buf, size, retrieved)
        })
    }

    /// Unload the bank and forget its token
    ///
    /// Explicit clones keep the old token, which native rejects with
    /// `InvalidHandle`. Callbacks registered on the bank's events are
    /// dropped.
    pub fn unload(&mut self) -> Result<()> {
        call!(self.handle, FMOD_Studio_Bank_Unload)?;
        log::debug!("unloaded bank {:p}", self.handle.as_ptr());
        self.handle.clear();
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    pub fn load_sample_data(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_Bank_LoadSampleData)
    }

    pub fn unload_sample_data(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_Bank_UnloadSampleData)
    }

    /// Progress of a nonblocking load
    pub fn loading_state(&self) -> Result<LoadingState> {
        let mut state: c_int = 0;
        call!(self.handle, FMOD_Studio_Bank_GetLoadingState, &mut state)?;
        LoadingState::from_c(state)
    }

    pub fn sample_loading_state(&self) -> Result<LoadingState> {
        let mut state: c_int = 0;
        call!(self.handle, FMOD_Studio_Bank_GetSampleLoadingState, &mut state)?;
        LoadingState::from_c(state)
    }

    pub fn event_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_Bank_GetEventCount, &mut count)?;
        Ok(count)
    }

    pub fn event_list(&self) -> Result<Vec<EventDescription>> {
        let api = self.handle.api();
        let raw = list::fetch(
            || self.event_count(),
            |buf, capacity, count| {
                call!(self.handle, FMOD_Studio_Bank_GetEventList, buf, capacity, count)
            },
        )?;
        Ok(raw
            .into_iter()
            .map(|e| EventDescription::from_raw(e, api))
            .collect())
    }

    pub fn mixer_strip_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_Bank_GetMixerStripCount, &mut count)?;
        Ok(count)
    }

    pub fn mixer_strip_list(&self) -> Result<Vec<MixerStrip>> {
        let api = self.handle.api();
        let raw = list::fetch(
            || self.mixer_strip_count(),
            |buf, capacity, count| {
                call!(self.handle, FMOD_Studio_Bank_GetMixerStripList, buf, capacity, count)
            },
        )?;
        Ok(raw.into_iter().map(|s| MixerStrip::from_raw(s, api)).collect())
    }
}

/// File callbacks and user data for `System::load_bank_custom`
///
/// Everything here is handed to the native library unchanged.
#[derive(Debug, Clone, Copy)]
pub struct BankInfo {
    inner: sys::FMOD_STUDIO_BANK_INFO,
}

impl Default for BankInfo {
    fn default() -> Self {
        Self::new()
    }
}

impl BankInfo {
    pub fn new() -> Self {
        Self {
            inner: sys::FMOD_STUDIO_BANK_INFO {
                size: 0,
                userData: ptr::null_mut(),
                userDataLength: 0,
                openCallback: None,
                closeCallback: None,
                readCallback: None,
                seekCallback: None,
            },
        }
    }

    /// Data passed to every file callback
    ///
    /// With a non-zero `length` the native library copies `length` bytes
    /// from `data` and passes its own copy instead.
    pub fn user_data(mut self, data: *mut c_void, length: i32) -> Self {
        self.inner.userData = data;
        self.inner.userDataLength = length;
        self
    }

    pub fn open_callback(mut self, callback: sys::FMOD_FILE_OPENCALLBACK) -> Self {
        self.inner.openCallback = callback;
        self
    }

    pub fn close_callback(mut self, callback: sys::FMOD_FILE_CLOSECALLBACK) -> Self {
        self.inner.closeCallback = callback;
        self
    }

    pub fn read_callback(mut self, callback: sys::FMOD_FILE_READCALLBACK) -> Self {
        self.inner.readCallback = callback;
        self
    }

    pub fn seek_callback(mut self, callback: sys::FMOD_FILE_SEEKCALLBACK) -> Self {
        self.inner.seekCallback = callback;
        self
    }

    /// Native record with its size field stamped
    pub(crate) fn to_c(self) -> sys::FMOD_STUDIO_BANK_INFO {
        let mut inner = self.inner;
        inner.size = size_of::<sys::FMOD_STUDIO_BANK_INFO>() as c_int;
        inner
    }
}
