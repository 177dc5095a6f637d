// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Event descriptions: the static definition of an event

use std::ffi::{c_int, c_void};
use std::ptr;
use std::sync::Arc;

use fmod_studio_sys as sys;

use crate::callback::{self, Callback, EventCallback, Owner};
use crate::error::Result;
use crate::event_instance::EventInstance;
use crate::guid::Guid;
use crate::list;
use crate::marshal::{read_truncating, to_cstring};
use crate::parameter::ParameterDescription;
use crate::types::LoadingState;
use crate::user_property::UserProperty;

facade! {
    /// Static definition of an event, shared by all its instances
    ///
    /// Obtained from `System::event()` or `Bank::event_list()`. Valid while
    /// the bank that defines it is loaded.
    EventDescription => sys::FMOD_STUDIO_EVENTDESCRIPTION
}

impl EventDescription {
    pub fn id(&self) -> Result<Guid> {
        let mut raw = sys::FMOD_GUID::default();
        call!(self.handle, FMOD_Studio_EventDescription_GetID, &mut raw)?;
        Ok(Guid::from(raw))
    }

    /// Path of the event, e.g. `"event:/UI/Click"`
    pub fn path(&self) -> Result<String> {
        read_truncating(|buf, size, retrieved| {
            call!(self.handle, FMOD_Studio_EventDescription_GetPath, buf, size, retrieved)
        })
    }

    // =========================================================================
    // Parameters and user properties
    // =========================================================================

    pub fn parameter_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_EventDescription_GetParameterCount, &mut count)?;
        Ok(count)
    }

    pub fn parameter_by_index(&self, index: i32) -> Result<ParameterDescription> {
        let mut raw = ParameterDescription::blank_c();
        call!(self.handle, FMOD_Studio_EventDescription_GetParameterByIndex, index, &mut raw)?;
        unsafe { ParameterDescription::from_c(&raw) }
    }

    pub fn parameter(&self, name: &str) -> Result<ParameterDescription> {
        let name = to_cstring(name)?;
        let mut raw = ParameterDescription::blank_c();
        call!(
            self.handle,
            FMOD_Studio_EventDescription_GetParameter,
            name.as_ptr(),
            &mut raw,
        )?;
        unsafe { ParameterDescription::from_c(&raw) }
    }

    pub fn user_property_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_EventDescription_GetUserPropertyCount, &mut count)?;
        Ok(count)
    }

    pub fn user_property_by_index(&self, index: i32) -> Result<UserProperty> {
        let mut raw = UserProperty::blank_c();
        call!(
            self.handle,
            FMOD_Studio_EventDescription_GetUserPropertyByIndex,
            index,
            &mut raw,
        )?;
        unsafe { UserProperty::from_c(&raw) }
    }

    pub fn user_property(&self, name: &str) -> Result<UserProperty> {
        let name = to_cstring(name)?;
        let mut raw = UserProperty::blank_c();
        call!(
            self.handle,
            FMOD_Studio_EventDescription_GetUserProperty,
            name.as_ptr(),
            &mut raw,
        )?;
        unsafe { UserProperty::from_c(&raw) }
    }

    /// Every user property, in native order
    pub fn user_properties(&self) -> Result<Vec<UserProperty>> {
        let count = self.user_property_count()?;
        (0..count).map(|i| self.user_property_by_index(i)).collect()
    }

    // =========================================================================
    // Static properties
    // =========================================================================

    /// Length of the timeline in milliseconds
    pub fn length(&self) -> Result<i32> {
        let mut length: c_int = 0;
        call!(self.handle, FMOD_Studio_EventDescription_GetLength, &mut length)?;
        Ok(length)
    }

    pub fn minimum_distance(&self) -> Result<f32> {
        let mut distance: f32 = 0.0;
        call!(self.handle, FMOD_Studio_EventDescription_GetMinimumDistance, &mut distance)?;
        Ok(distance)
    }

    pub fn maximum_distance(&self) -> Result<f32> {
        let mut distance: f32 = 0.0;
        call!(self.handle, FMOD_Studio_EventDescription_GetMaximumDistance, &mut distance)?;
        Ok(distance)
    }

    pub fn is_oneshot(&self) -> Result<bool> {
        let mut value: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_EventDescription_IsOneshot, &mut value)?;
        Ok(value != sys::FMOD_FALSE)
    }

    pub fn is_stream(&self) -> Result<bool> {
        let mut value: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_EventDescription_IsStream, &mut value)?;
        Ok(value != sys::FMOD_FALSE)
    }

    pub fn is_3d(&self) -> Result<bool> {
        let mut value: sys::FMOD_BOOL = 0;
        call!(self.handle, FMOD_Studio_EventDescription_Is3D, &mut value)?;
        Ok(value != sys::FMOD_FALSE)
    }

    // =========================================================================
    // Instances
    // =========================================================================

    pub fn create_instance(&self) -> Result<EventInstance> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventDescription_CreateInstance, &mut raw)?;
        callback::discard(Owner::Instance(raw as usize));
        Ok(EventInstance::from_raw(raw, self.handle.api()))
    }

    pub fn instance_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_EventDescription_GetInstanceCount, &mut count)?;
        Ok(count)
    }

    pub fn instance_list(&self) -> Result<Vec<EventInstance>> {
        let api = self.handle.api();
        let raw = list::fetch(
            || self.instance_count(),
            |buf, capacity, count| {
                call!(
                    self.handle,
                    FMOD_Studio_EventDescription_GetInstanceList,
                    buf,
                    capacity,
                    count,
                )
            },
        )?;
        Ok(raw
            .into_iter()
            .map(|i| EventInstance::from_raw(i, api))
            .collect())
    }

    pub fn release_all_instances(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventDescription_ReleaseAllInstances)?;
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    // =========================================================================
    // Sample data
    // =========================================================================

    pub fn load_sample_data(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventDescription_LoadSampleData)
    }

    pub fn unload_sample_data(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventDescription_UnloadSampleData)
    }

    pub fn sample_loading_state(&self) -> Result<LoadingState> {
        let mut state: c_int = 0;
        call!(self.handle, FMOD_Studio_EventDescription_GetSampleLoadingState, &mut state)?;
        LoadingState::from_c(state)
    }

    // =========================================================================
    // Callbacks and user data
    // =========================================================================

    /// Register a closure for every instance of this event
    ///
    /// An instance with its own callback (see `EventInstance::set_callback`)
    /// uses that one instead.
    pub fn set_callback<F>(&self, f: F) -> Result<()>
    where
        F: Fn(EventCallback<'_>, &EventInstance) -> Result<()> + Send + Sync + 'static,
    {
        let raw = self.handle.checked()?;
        callback::register(
            Owner::Description(raw as usize),
            self.handle.api(),
            Callback::Event(Arc::new(f)),
            || {
                call!(
                    self.handle,
                    FMOD_Studio_EventDescription_SetCallback,
                    Some(callback::event_trampoline),
                )
            },
        )
    }

    pub fn clear_callback(&self) -> Result<()> {
        let raw = self.handle.checked()?;
        callback::unregister(Owner::Description(raw as usize), || {
            call!(self.handle, FMOD_Studio_EventDescription_SetCallback, None)
        })
    }

    pub fn user_data(&self) -> Result<*mut c_void> {
        let mut data = ptr::null_mut();
        call!(self.handle, FMOD_Studio_EventDescription_GetUserData, &mut data)?;
        Ok(data)
    }

    pub fn set_user_data(&self, data: *mut c_void) -> Result<()> {
        call!(self.handle, FMOD_Studio_EventDescription_SetUserData, data)
    }
}
