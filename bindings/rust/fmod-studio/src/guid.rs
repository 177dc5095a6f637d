// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! 128-bit identifiers for events, buses and banks

use std::fmt;

use fmod_studio_sys::{self as sys, StudioApi};

use crate::error::{check, Error, Result};
use crate::marshal::to_cstring;

/// Globally unique identifier of a Studio object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guid {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

impl Guid {
    /// Parse the `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}` form through the
    /// native parser
    pub fn parse(api: &StudioApi, text: &str) -> Result<Guid> {
        let text = to_cstring(text)?;
        let parse = api
            .FMOD_Studio_ParseID
            .ok_or(Error::MissingSymbol("FMOD_Studio_ParseID"))?;
        let mut raw = sys::FMOD_GUID::default();
        check(unsafe { parse(text.as_ptr(), &mut raw) })?;
        Ok(Guid::from(raw))
    }

    pub(crate) fn to_c(self) -> sys::FMOD_GUID {
        sys::FMOD_GUID {
            Data1: self.data1,
            Data2: self.data2,
            Data3: self.data3,
            Data4: self.data4,
        }
    }
}

impl From<sys::FMOD_GUID> for Guid {
    fn from(raw: sys::FMOD_GUID) -> Self {
        Self {
            data1: raw.Data1,
            data2: raw.Data2,
            data3: raw.Data3,
            data4: raw.Data4,
        }
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.data4;
        write!(
            f,
            "{{{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}}}",
            self.data1, self.data2, self.data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}
