// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! User properties attached to events in the authoring tool

use fmod_studio_sys as sys;

use crate::error::{Error, Result};
use crate::marshal;

/// Typed value of a user property
#[derive(Debug, Clone, PartialEq)]
pub enum UserPropertyValue {
    Integer(i32),
    Boolean(bool),
    Float(f32),
    String(String),
}

/// Named property authored on an event
#[derive(Debug, Clone, PartialEq)]
pub struct UserProperty {
    pub name: String,
    pub value: UserPropertyValue,
}

impl UserProperty {
    /// Decode a native tagged union
    ///
    /// # Safety
    ///
    /// `raw.name` and, for string properties, `raw.value.stringValue` must be
    /// null or valid NUL-terminated strings.
    pub(crate) unsafe fn from_c(raw: &sys::FMOD_STUDIO_USER_PROPERTY) -> Result<Self> {
        let value = match raw.type_ {
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_INTEGER => {
                UserPropertyValue::Integer(unsafe { raw.value.intValue })
            }
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_BOOLEAN => {
                UserPropertyValue::Boolean(unsafe { raw.value.boolValue } != sys::FMOD_FALSE)
            }
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_FLOAT => {
                UserPropertyValue::Float(unsafe { raw.value.floatValue })
            }
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_STRING => {
                UserPropertyValue::String(unsafe { marshal::from_ptr(raw.value.stringValue) }?)
            }
            value => {
                return Err(Error::UnknownDiscriminant {
                    kind: "user property type",
                    value,
                })
            }
        };
        Ok(Self {
            name: unsafe { marshal::from_ptr(raw.name) }?,
            value,
        })
    }

    pub(crate) fn blank_c() -> sys::FMOD_STUDIO_USER_PROPERTY {
        sys::FMOD_STUDIO_USER_PROPERTY {
            name: std::ptr::null(),
            type_: sys::FMOD_STUDIO_USER_PROPERTY_TYPE_INTEGER,
            value: sys::FMOD_STUDIO_USER_PROPERTY_VALUE { intValue: 0 },
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self.value {
            UserPropertyValue::Integer(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.value {
            UserPropertyValue::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.value {
            UserPropertyValue::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            UserPropertyValue::String(v) => Some(v),
            _ => None,
        }
    }
}
