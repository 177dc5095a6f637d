// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Opaque native handles
//!
//! Every facade in this crate is a thin wrapper over a [`Handle`]: a native
//! token plus the function table it came from. Equality and hashing use the
//! token only, and nothing here ever dereferences native memory.

use std::fmt;
use std::hash::{Hash, Hasher};

use fmod_studio_sys::StudioApi;

use crate::error::{Error, Result};
use crate::status::Status;

/// Resolve an entry point from a function table or bail out
macro_rules! symbol {
    ($api:expr, $func:ident) => {
        $api.$func
            .ok_or($crate::error::Error::MissingSymbol(stringify!($func)))?
    };
}

/// Call a native entry point on a handle, checking the token first
macro_rules! call {
    ($handle:expr, $func:ident $(, $arg:expr)* $(,)?) => {{
        let raw = $handle.checked()?;
        let f = symbol!($handle.api(), $func);
        $crate::error::check(unsafe { f(raw $(, $arg)*) })
    }};
}

/// Declare a facade type over a native handle
///
/// Facades are `Copy` unless declared `unique`, which leaves them `Clone`
/// only so that duplicates of the token are always spelled out.
macro_rules! facade {
    (@define [$($derive:ident),*] $(#[$meta:meta])* $name:ident => $raw:ty) => {
        $(#[$meta])*
        #[derive($($derive,)* PartialEq, Eq, Hash)]
        pub struct $name {
            pub(crate) handle: $crate::handle::Handle<$raw>,
        }

        impl $name {
            pub(crate) fn from_raw(
                raw: *mut $raw,
                api: &'static fmod_studio_sys::StudioApi,
            ) -> Self {
                Self {
                    handle: $crate::handle::Handle::new(raw, api),
                }
            }

            /// Whether the native token is non-null
            ///
            /// A valid token may still be rejected by the native library if the
            /// object it refers to has been released.
            pub fn is_valid(&self) -> bool {
                self.handle.is_valid()
            }

            /// Get the raw native token (for advanced use)
            pub fn as_ptr(&self) -> *mut $raw {
                self.handle.as_ptr()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&self.handle.as_ptr())
                    .finish()
            }
        }
    };
    ($(#[$meta:meta])* unique $name:ident => $raw:ty) => {
        facade!(@define [Clone] $(#[$meta])* $name => $raw);
    };
    ($(#[$meta:meta])* $name:ident => $raw:ty) => {
        facade!(@define [Clone, Copy] $(#[$meta])* $name => $raw);
    };
}

/// Native token paired with the function table that produced it
pub(crate) struct Handle<T> {
    raw: *mut T,
    api: &'static StudioApi,
}

impl<T> Handle<T> {
    pub(crate) fn new(raw: *mut T, api: &'static StudioApi) -> Self {
        Self { raw, api }
    }

    #[inline]
    pub(crate) fn is_valid(&self) -> bool {
        !self.raw.is_null()
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.raw
    }

    #[inline]
    pub(crate) fn api(&self) -> &'static StudioApi {
        self.api
    }

    /// The token, or `InvalidHandle` without touching native code if null
    #[inline]
    pub(crate) fn checked(&self) -> Result<*mut T> {
        if self.raw.is_null() {
            Err(Error::Status(Status::InvalidHandle))
        } else {
            Ok(self.raw)
        }
    }

    /// Forget the token
    pub(crate) fn clear(&mut self) {
        self.raw = std::ptr::null_mut();
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p})", self.raw)
    }
}

facade! {
    /// Low-level FMOD system owned by a Studio system
    ///
    /// Only the token is exposed; the low-level API is not wrapped here.
    CoreSystem => fmod_studio_sys::FMOD_SYSTEM
}

facade! {
    /// Low-level channel group backing an event instance or mixer strip
    ///
    /// Only the token is exposed; the low-level API is not wrapped here.
    ChannelGroup => fmod_studio_sys::FMOD_CHANNELGROUP
}
