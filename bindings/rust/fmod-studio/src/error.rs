// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Error types for FMOD Studio

use std::ffi::NulError;
use std::str::Utf8Error;
use std::string::FromUtf8Error;

use fmod_studio_sys as sys;
use thiserror::Error;

use crate::status::Status;

/// Error type for FMOD Studio operations
#[derive(Debug, Error)]
pub enum Error {
    /// The native call returned a non-OK result
    #[error("FMOD error: {0}")]
    Status(Status),

    /// The native call returned a result code outside the known set
    #[error("FMOD returned unknown result code {0}")]
    UnknownStatus(i32),

    /// An input string contains an interior NUL byte
    #[error("Invalid string argument: {0}")]
    InvalidString(#[from] NulError),

    /// A native string is not valid UTF-8
    #[error("Native string is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// A native enum or union tag outside the known set
    #[error("Unknown {kind} value {value}")]
    UnknownDiscriminant {
        /// Which native enumeration was being decoded
        kind: &'static str,
        /// The raw value reported
        value: i32,
    },

    /// The function table has no entry for this symbol
    #[error("Entry point {0} is not available")]
    MissingSymbol(&'static str),

    /// The native library could not be loaded
    #[error("Failed to load FMOD Studio library: {0}")]
    Library(#[from] libloading::Error),

    /// The system still has a callback registered
    #[error("Cannot release system while a callback is registered")]
    CallbackRegistered,
}

/// Result type alias for FMOD Studio operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The native status carried by this error, if any
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::Status(status) => Some(*status),
            _ => None,
        }
    }

    /// Convert back into a raw result code for returning across the boundary
    pub(crate) fn to_raw(&self) -> sys::FMOD_RESULT {
        match self {
            Error::Status(status) => status.raw(),
            Error::UnknownStatus(raw) => *raw,
            _ => sys::FMOD_ERR_INTERNAL,
        }
    }
}

impl From<Status> for Error {
    fn from(status: Status) -> Self {
        Error::Status(status)
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Error::Utf8(err.utf8_error())
    }
}

/// Turn a native result code into a `Result`
pub(crate) fn check(raw: sys::FMOD_RESULT) -> Result<()> {
    if raw == sys::FMOD_OK {
        return Ok(());
    }
    match Status::from_raw(raw) {
        Some(status) => Err(Error::Status(status)),
        None => Err(Error::UnknownStatus(raw)),
    }
}
