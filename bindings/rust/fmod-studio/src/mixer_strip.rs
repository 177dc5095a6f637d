// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Mixer strips: buses and VCAs

use std::ffi::c_int;
use std::ptr;

use fmod_studio_sys as sys;

use crate::error::Result;
use crate::guid::Guid;
use crate::handle::ChannelGroup;
use crate::marshal::read_truncating;
use crate::types::{LoadingState, StopMode};

facade! {
    /// Bus, return or VCA in the mixer
    MixerStrip => sys::FMOD_STUDIO_MIXERSTRIP
}

impl MixerStrip {
    pub fn id(&self) -> Result<Guid> {
        let mut raw = sys::FMOD_GUID::default();
        call!(self.handle, FMOD_Studio_MixerStrip_GetID, &mut raw)?;
        Ok(Guid::from(raw))
    }

    pub fn path(&self) -> Result<String> {
        read_truncating(|buf, size, retrieved| {
            call!(self.handle, FMOD_Studio_MixerStrip_GetPath, buf, size, retrieved)
        })
    }

    pub fn fader_level(&self) -> Result<f32> {
        let mut level: f32 = 0.0;
        call!(self.handle, FMOD_Studio_MixerStrip_GetFaderLevel, &mut level)?;
        Ok(level)
    }

    pub fn set_fader_level(&self, level: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_MixerStrip_SetFaderLevel, level)
    }

    pub fn paused(&self) -> Result<bool> {
        let mut paused: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_MixerStrip_GetPaused, &mut paused)?;
        Ok(paused != sys::FMOD_FALSE)
    }

    pub fn set_paused(&self, paused: bool) -> Result<()> {
        call!(self.handle, FMOD_Studio_MixerStrip_SetPaused, paused as sys::FMOD_BOOL)
    }

    pub fn mute(&self) -> Result<bool> {
        let mut mute: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_MixerStrip_GetMute, &mut mute)?;
        Ok(mute != sys::FMOD_FALSE)
    }

    pub fn set_mute(&self, mute: bool) -> Result<()> {
        call!(self.handle, FMOD_Studio_MixerStrip_SetMute, mute as sys::FMOD_BOOL)
    }

    /// Stop every event routed into this strip
    pub fn stop_all_events(&self, mode: StopMode) -> Result<()> {
        call!(self.handle, FMOD_Studio_MixerStrip_StopAllEvents, mode.to_c())
    }

    pub fn channel_group(&self) -> Result<ChannelGroup> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_MixerStrip_GetChannelGroup, &mut raw)?;
        Ok(ChannelGroup::from_raw(raw, self.handle.api()))
    }

    pub fn loading_state(&self) -> Result<LoadingState> {
        let mut state: c_int = 0;
        call!(self.handle, FMOD_Studio_MixerStrip_GetLoadingState, &mut state)?;
        LoadingState::from_c(state)
    }

    /// Drop the reference taken by `System::mixer_strip()`
    pub fn release(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_MixerStrip_Release)
    }
}
