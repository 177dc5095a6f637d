// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Safe Rust bindings for FMOD Studio
//!
//! FMOD Studio is a proprietary, closed-source audio runtime. This crate
//! wraps its C API: every native object is exposed as a small facade
//! holding an opaque token, and every call returns a [`Result`]. Facades are
//! `Copy`, except [`Bank`], whose `unload` forgets the token.
//!
//! # Quick Start
//!
//! ```no_run
//! use fmod_studio::{loader, LoadBankFlags, Options, StopMode, System};
//!
//! fn main() -> fmod_studio::Result<()> {
//!     let api = loader::load_default()?;
//!     let system = System::create_with(api, &Options::new())?;
//!
//!     system.load_bank_file("Master Bank.bank", LoadBankFlags::NORMAL)?;
//!     system.load_bank_file("Master Bank.strings.bank", LoadBankFlags::NORMAL)?;
//!
//!     let event = system.event_by_path("event:/UI/Click")?;
//!     let instance = event.create_instance()?;
//!     instance.start()?;
//!     instance.release()?;
//!
//!     for _ in 0..60 {
//!         system.update()?;
//!         std::thread::sleep(std::time::Duration::from_millis(16));
//!     }
//!
//!     instance.stop(StopMode::Immediate)?;
//!     system.release()?;
//!     Ok(())
//! }
//! ```
//!
//! # API Overview
//!
//! - [`System`] - Root object: banks, lookup, update and callbacks
//! - [`Bank`] - Loaded bank and its contents
//! - [`EventDescription`] - Static event data and instance factory
//! - [`EventInstance`] - Playable copy of an event
//! - [`MixerStrip`] - Bus or VCA
//! - [`ParameterInstance`] / [`CueInstance`] - Parts of an instance
//! - [`loader`] - Locating the native library at runtime
//!
//! # Handles
//!
//! Facades compare and hash by token and are never dereferenced on this
//! side. A null token is rejected with [`Status::InvalidHandle`] before any
//! native call; a stale token is rejected by the native library with the
//! same status.
//!
//! Facades are not `Send` or `Sync`. Call into a system and its objects
//! from the thread that created it.
//!
//! # Callbacks
//!
//! Closures registered with `set_callback` are kept in a process-wide
//! registry keyed by the token of the object they were registered on, and
//! run on whichever thread the native library fires them from. Panics are
//! caught before they reach native code and reported to it as
//! [`Status::Internal`]. A system cannot be released while its callback is
//! registered. Event closures are dropped once their instance or
//! description has been destroyed by native.

#[macro_use]
mod handle;

mod bank;
mod callback;
mod cue;
mod error;
mod event_description;
mod event_instance;
mod guid;
mod list;
mod marshal;
mod mixer_strip;
mod options;
mod parameter;
mod sound_info;
mod status;
mod structs;
mod system;
mod types;
mod user_property;

pub mod loader;

#[cfg(test)]
mod mock;

pub use bank::{Bank, BankInfo};
pub use callback::{EventCallback, ProgrammerSound};
pub use cue::CueInstance;
pub use error::{Error, Result};
pub use event_description::EventDescription;
pub use event_instance::EventInstance;
pub use guid::Guid;
pub use handle::{ChannelGroup, CoreSystem};
pub use mixer_strip::MixerStrip;
pub use options::Options;
pub use parameter::{ParameterDescription, ParameterInstance};
pub use sound_info::SoundInfo;
pub use status::Status;
pub use structs::{AdvancedSettings, Attributes3D, BufferInfo, BufferUsage, CpuUsage, Vector};
pub use system::System;
pub use types::{
    CoreInitFlags, EventCallbackType, EventProperty, InitFlags, LoadBankFlags, LoadingMode,
    LoadingState, Mode, ParameterType, PlaybackState, RecordCommandsFlags, StopMode,
    SystemCallbackMask, SystemCallbackType,
};
pub use user_property::{UserProperty, UserPropertyValue};

/// Raw declarations, for interop with other FMOD bindings
pub use fmod_studio_sys as sys;
