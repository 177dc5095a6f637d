// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Event parameters

use std::ptr;

use fmod_studio_sys as sys;

use crate::error::Result;
use crate::marshal;
use crate::types::ParameterType;

/// Static description of an event parameter
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescription {
    pub name: String,
    pub minimum: f32,
    pub maximum: f32,
    pub kind: ParameterType,
}

impl ParameterDescription {
    pub(crate) fn blank_c() -> sys::FMOD_STUDIO_PARAMETER_DESCRIPTION {
        sys::FMOD_STUDIO_PARAMETER_DESCRIPTION {
            name: ptr::null(),
            minimum: 0.0,
            maximum: 0.0,
            type_: 0,
        }
    }

    /// Copy a native description out of native memory
    ///
    /// # Safety
    ///
    /// `raw.name` must be null or a valid NUL-terminated string.
    pub(crate) unsafe fn from_c(raw: &sys::FMOD_STUDIO_PARAMETER_DESCRIPTION) -> Result<Self> {
        Ok(Self {
            name: unsafe { marshal::from_ptr(raw.name) }?,
            minimum: raw.minimum,
            maximum: raw.maximum,
            kind: ParameterType::from_c(raw.type_)?,
        })
    }
}

facade! {
    /// Live parameter of an event instance
    ///
    /// Obtained from `EventInstance::parameter()`; valid for as long as its
    /// instance is.
    ParameterInstance => sys::FMOD_STUDIO_PARAMETERINSTANCE
}

impl ParameterInstance {
    pub fn description(&self) -> Result<ParameterDescription> {
        let mut raw = ParameterDescription::blank_c();
        call!(self.handle, FMOD_Studio_ParameterInstance_GetDescription, &mut raw)?;
        unsafe { ParameterDescription::from_c(&raw) }
    }

    pub fn value(&self) -> Result<f32> {
        let mut value: f32 = 0.0;
        call!(self.handle, FMOD_Studio_ParameterInstance_GetValue, &mut value)?;
        Ok(value)
    }

    /// Set the value
    ///
    /// The value is passed through as-is; any range enforcement is up to
    /// the native library.
    pub fn set_value(&self, value: f32) -> Result<()> {
        call!(self.handle, FMOD_Studio_ParameterInstance_SetValue, value)
    }
}
