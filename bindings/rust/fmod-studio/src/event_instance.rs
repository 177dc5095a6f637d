// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Event instances: one playing (or playable) copy of an event

use std::ffi::{c_int, c_void};
use std::ptr;
use std::sync::Arc;

use fmod_studio_sys as sys;

use crate::callback::{self, Callback, EventCallback, Owner};
use crate::cue::CueInstance;
use crate::error::Result;
use crate::event_description::EventDescription;
use crate::handle::ChannelGroup;
use crate::marshal::to_cstring;
use crate::parameter::ParameterInstance;
use crate::structs::Attributes3D;
use crate::types::{EventProperty, PlaybackState, StopMode};

facade! {
    /// Playable copy of an event
    ///
    /// Created with `EventDescription::create_instance()`. Release it with
    /// [`EventInstance::release`] once it is no longer needed; the native
    /// object is destroyed when it stops.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fmod_studio::StopMode;
    /// # fn demo(system: &fmod_studio::System) -> fmod_studio::Result<()> {
    /// let footstep = system.event_by_path("event:/Character/Footstep")?;
    /// let instance = footstep.create_instance()?;
    /// instance.set_parameter_value("surface", 2.0)?;
    /// instance.start()?;
    /// instance.stop(StopMode::AllowFadeout)?;
    /// instance.release()?;
    /// # Ok(())
    /// # }
    /// ```
    EventInstance => sys::FMOD_STUDIO_EVENTINSTANCE
}

impl EventInstance {
    pub fn description(&self) -> Result<EventDescription> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetDescription, &mut raw)?;
        Ok(EventDescription::from_raw(raw, self.handle.api()))
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn start(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_Start)
    }

    pub fn stop(&self, mode: StopMode) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_Stop, mode.to_c())
    }

    pub fn playback_state(&self) -> Result<PlaybackState> {
        let mut state: c_int = 0;
        call!(self.handle, FMOD_Studio_EventInstance_GetPlaybackState, &mut state)?;
        PlaybackState::from_c(state)
    }

    /// Timeline position in milliseconds
    pub fn timeline_position(&self) -> Result<i32> {
        let mut position: c_int = 0;
        call!(self.handle, FMOD_Studio_EventInstance_GetTimelinePosition, &mut position)?;
        Ok(position)
    }

    pub fn set_timeline_position(&self, position: i32) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetTimelinePosition, position)
    }

    pub fn paused(&self) -> Result<bool> {
        let mut paused: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_EventInstance_GetPaused, &mut paused)?;
        Ok(paused != sys::FMOD_FALSE)
    }

    pub fn set_paused(&self, paused: bool) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetPaused, paused as sys::FMOD_BOOL)
    }

    /// Whether the instance was virtualized by the voice limiter
    pub fn is_virtual(&self) -> Result<bool> {
        let mut state: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_EventInstance_IsVirtual, &mut state)?;
        Ok(state != sys::FMOD_FALSE)
    }

    /// Mark the instance for destruction once it stops
    ///
    /// The token stays usable until then, so a playing instance may still be
    /// stopped or queried. A callback registered on the instance is dropped
    /// once native has destroyed it.
    pub fn release(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_Release)?;
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    pub fn channel_group(&self) -> Result<ChannelGroup> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetChannelGroup, &mut raw)?;
        Ok(ChannelGroup::from_raw(raw, self.handle.api()))
    }

    // =========================================================================
    // Mix properties
    // =========================================================================

    pub fn volume(&self) -> Result<f32> {
        let mut volume: f32 = 0.0;
        call!(self.handle, FMOD_Studio_EventInstance_GetVolume, &mut volume)?;
        Ok(volume)
    }

    pub fn set_volume(&self, volume: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetVolume, volume)
    }

    pub fn pitch(&self) -> Result<f32> {
        let mut pitch: f32 = 0.0;
        call!(self.handle, FMOD_Studio_EventInstance_GetPitch, &mut pitch)?;
        Ok(pitch)
    }

    pub fn set_pitch(&self, pitch: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetPitch, pitch)
    }

    pub fn attributes_3d(&self) -> Result<Attributes3D> {
        let mut raw = sys::FMOD_3D_ATTRIBUTES::default();
        call!(self.handle, FMOD_Studio_EventInstance_Get3DAttributes, &mut raw)?;
        Ok(Attributes3D::from(raw))
    }

    pub fn set_attributes_3d(&self, attributes: &Attributes3D) -> Result<()> {
        let raw = attributes.to_c();
        call!(self.handle, FMOD_Studio_EventInstance_Set3DAttributes, &raw)
    }

    pub fn property(&self, property: EventProperty) -> Result<f32> {
        let mut value: f32 = 0.0;
        call!(self.handle, FMOD_Studio_EventInstance_GetProperty, property.to_c(), &mut value)?;
        Ok(value)
    }

    pub fn set_property(&self, property: EventProperty, value: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetProperty, property.to_c(), value)
    }

    // =========================================================================
    // Parameters
    // =========================================================================

    pub fn parameter(&self, name: &str) -> Result<ParameterInstance> {
        let name = to_cstring(name)?;
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetParameter, name.as_ptr(), &mut raw)?;
        Ok(ParameterInstance::from_raw(raw, self.handle.api()))
    }

    pub fn parameter_by_index(&self, index: i32) -> Result<ParameterInstance> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetParameterByIndex, index, &mut raw)?;
        Ok(ParameterInstance::from_raw(raw, self.handle.api()))
    }

    pub fn parameter_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_EventInstance_GetParameterCount, &mut count)?;
        Ok(count)
    }

    /// Set a parameter by name
    ///
    /// The value is passed through unchanged; the native library clamps it
    /// to the parameter's range.
    pub fn set_parameter_value(&self, name: &str, value: f32) -> Result<()> {
        let name = to_cstring(name)?;
        call!(self.handle, FMOD_Studio_EventInstance_SetParameterValue, name.as_ptr(), value)
    }

    pub fn set_parameter_value_by_index(&self, index: i32, value: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetParameterValueByIndex, index, value)
    }

    // =========================================================================
    // Cues and sub-events
    // =========================================================================

    pub fn cue(&self, name: &str) -> Result<CueInstance> {
        let name = to_cstring(name)?;
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetCue, name.as_ptr(), &mut raw)?;
        Ok(CueInstance::from_raw(raw, self.handle.api()))
    }

    pub fn cue_by_index(&self, index: i32) -> Result<CueInstance> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetCueByIndex, index, &mut raw)?;
        Ok(CueInstance::from_raw(raw, self.handle.api()))
    }

    pub fn cue_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_EventInstance_GetCueCount, &mut count)?;
        Ok(count)
    }

    /// Create an instance of a nested event by name
    pub fn create_sub_event(&self, name: &str) -> Result<EventInstance> {
        let name = to_cstring(name)?;
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_CreateSubEvent, name.as_ptr(), &mut raw)?;
        callback::discard(Owner::Instance(raw as usize));
        Ok(EventInstance::from_raw(raw, self.handle.api()))
    }

    // =========================================================================
    // Callbacks and user data
    // =========================================================================

    /// Register a closure for this instance only
    ///
    /// Takes precedence over a closure registered on the description.
    pub fn set_callback<F>(&self, f: F) -> Result<()>
    where
        F: Fn(EventCallback<'_>, &EventInstance) -> Result<()> + Send + Sync + 'static,
    {
        let raw = self.handle.checked()?;
        callback::register(
            Owner::Instance(raw as usize),
            self.handle.api(),
            Callback::Event(Arc::new(f)),
            || {
                call!(
                    self.handle,
                    FMOD_Studio_EventInstance_SetCallback,
                    Some(callback::event_trampoline),
                )
            },
        )
    }

    pub fn clear_callback(&self) -> Result<()> {
        let raw = self.handle.checked()?;
        callback::unregister(Owner::Instance(raw as usize), || {
            call!(self.handle, FMOD_Studio_EventInstance_SetCallback, None)
        })
    }

    pub fn user_data(&self) -> Result<*mut c_void> {
        let mut data = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventInstance_GetUserData, &mut data)?;
        Ok(data)
    }

    pub fn set_user_data(&self, data: *mut c_void) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventInstance_SetUserData, data)
    }
}
