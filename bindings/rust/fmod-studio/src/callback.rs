// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Callback registry and trampolines
//!
//! Closures live in a process-wide registry keyed by the token of the object
//! they were registered on. Trampolines look the closure up by the token
//! native hands back, leaving the native user data slots to callers.
//!
//! Event closures are dropped once native rejects their object as a dead
//! handle. Operations that can destroy events (update, instance release,
//! bank unload, system release) sweep the registry afterwards, and a token
//! handed out for a new instance replaces whatever was stored under it.

use std::collections::BTreeMap;
use std::ffi::{c_int, c_void};
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use fmod_studio_sys::{self as sys, StudioApi};

use crate::error::{Error, Result};
use crate::event_instance::EventInstance;
use crate::marshal;
use crate::status::Status;
use crate::system::System;
use crate::types::{EventCallbackType, SystemCallbackType};

pub(crate) type SystemCallbackFn = dyn Fn(&System, SystemCallbackType) -> Result<()> + Send + Sync;
pub(crate) type EventCallbackFn = dyn Fn(EventCallback<'_>, &EventInstance) -> Result<()> + Send + Sync;

/// Event callback payload
#[derive(Debug)]
pub enum EventCallback<'a> {
    Started,
    Stopped,
    Idle,
    /// A programmer instrument needs a sound; set it with `set_sound`
    CreateProgrammerSound(&'a mut ProgrammerSound),
    /// A programmer instrument is done with its sound
    DestroyProgrammerSound(&'a mut ProgrammerSound),
    Restarted,
}

impl EventCallback<'_> {
    pub fn kind(&self) -> EventCallbackType {
        match self {
            EventCallback::Started => EventCallbackType::Started,
            EventCallback::Stopped => EventCallbackType::Stopped,
            EventCallback::Idle => EventCallbackType::Idle,
            EventCallback::CreateProgrammerSound(_) => EventCallbackType::CreateProgrammerSound,
            EventCallback::DestroyProgrammerSound(_) => EventCallbackType::DestroyProgrammerSound,
            EventCallback::Restarted => EventCallbackType::Restarted,
        }
    }
}

/// Programmer instrument properties, borrowed from native for one callback
#[repr(transparent)]
pub struct ProgrammerSound(sys::FMOD_STUDIO_PROGRAMMER_SOUND_PROPERTIES);

impl ProgrammerSound {
    /// Name of the programmer instrument
    pub fn name(&self) -> Result<String> {
        unsafe { marshal::from_ptr(self.0.name) }
    }

    /// Low-level sound currently assigned
    pub fn sound(&self) -> *mut sys::FMOD_SOUND {
        self.0.sound
    }

    /// Assign the low-level sound the instrument should play
    pub fn set_sound(&mut self, sound: *mut sys::FMOD_SOUND) {
        self.0.sound = sound;
    }
}

impl fmt::Debug for ProgrammerSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgrammerSound")
            .field("name", &self.name().ok())
            .field("sound", &self.0.sound)
            .finish()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Object a callback is registered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Owner {
    System(usize),
    Description(usize),
    Instance(usize),
}

#[derive(Clone)]
pub(crate) enum Callback {
    System(Arc<SystemCallbackFn>),
    Event(Arc<EventCallbackFn>),
}

struct Registration {
    api: &'static StudioApi,
    callback: Callback,
    serial: u64,
}

static NEXT_SERIAL: AtomicU64 = AtomicU64::new(1);

/// Process-wide closure storage
static REGISTRY: Mutex<BTreeMap<Owner, Registration>> = Mutex::new(BTreeMap::new());

fn registry() -> MutexGuard<'static, BTreeMap<Owner, Registration>> {
    REGISTRY.lock().unwrap_or_else(|e| e.into_inner())
}

/// Store `callback` for `owner`, then let native start calling it
///
/// The closure is in place before native can invoke the trampoline. If the
/// native call fails the previous registration (if any) is restored.
pub(crate) fn register<F>(
    owner: Owner,
    api: &'static StudioApi,
    callback: Callback,
    native: F,
) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    let serial = NEXT_SERIAL.fetch_add(1, Ordering::Relaxed);
    let previous = registry().insert(owner, Registration { api, callback, serial });
    match native() {
        Ok(()) => {
            log::trace!("registered callback for {:?}", owner);
            Ok(())
        }
        Err(e) => {
            let mut reg = registry();
            match previous {
                Some(prev) => {
                    reg.insert(owner, prev);
                }
                None => {
                    reg.remove(&owner);
                }
            }
            Err(e)
        }
    }
}

/// Tell native to stop calling back for `owner`, then drop the closure
pub(crate) fn unregister<F>(owner: Owner, native: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    native()?;
    let removed = registry().remove(&owner);
    if removed.is_some() {
        log::trace!("unregistered callback for {:?}", owner);
    }
    Ok(())
}

pub(crate) fn is_registered(owner: Owner) -> bool {
    registry().contains_key(&owner)
}

/// Drop whatever is stored for `owner` without telling native
///
/// Used when native has just handed out `owner` as a new object, so any
/// entry under that token belongs to a destroyed one.
pub(crate) fn discard(owner: Owner) {
    if registry().remove(&owner).is_some() {
        log::trace!("discarded stale callback for {:?}", owner);
    }
}

/// Drop event closures whose objects native no longer knows
///
/// Only registrations made through `api` are probed, one native call each,
/// with the registry unlocked. An entry replaced while probing is kept.
pub(crate) fn purge_destroyed(api: &'static StudioApi) {
    let candidates: Vec<(Owner, u64)> = registry()
        .iter()
        .filter(|(owner, reg)| !matches!(owner, Owner::System(_)) && ptr::eq(reg.api, api))
        .map(|(owner, reg)| (*owner, reg.serial))
        .collect();

    let gone: Vec<(Owner, u64)> = candidates
        .into_iter()
        .filter(|(owner, _)| is_destroyed(api, *owner))
        .collect();
    if gone.is_empty() {
        return;
    }

    let mut reg = registry();
    for (owner, serial) in gone {
        if reg.get(&owner).is_some_and(|r| r.serial == serial) {
            reg.remove(&owner);
            log::trace!("dropped callback for destroyed {:?}", owner);
        }
    }
}

/// Whether native rejects the owner's token as a dead handle
fn is_destroyed(api: &StudioApi, owner: Owner) -> bool {
    let rc = match owner {
        Owner::Instance(token) => {
            let Some(get_state) = api.FMOD_Studio_EventInstance_GetPlaybackState else {
                return false;
            };
            let mut state: c_int = 0;
            unsafe { get_state(token as *mut sys::FMOD_STUDIO_EVENTINSTANCE, &mut state) }
        }
        Owner::Description(token) => {
            let Some(get_id) = api.FMOD_Studio_EventDescription_GetID else {
                return false;
            };
            let mut id = sys::FMOD_GUID::default();
            unsafe { get_id(token as *mut sys::FMOD_STUDIO_EVENTDESCRIPTION, &mut id) }
        }
        Owner::System(_) => return false,
    };
    rc == sys::FMOD_ERR_INVALID_HANDLE
}

/// Clone the closure out so it runs without the registry lock held
fn lookup(owner: Owner) -> Option<(&'static StudioApi, Callback)> {
    registry()
        .get(&owner)
        .map(|reg| (reg.api, reg.callback.clone()))
}

/// Function table of any registered event description
fn any_description_api() -> Option<&'static StudioApi> {
    registry()
        .iter()
        .find(|(owner, _)| matches!(owner, Owner::Description(_)))
        .map(|(_, reg)| reg.api)
}

// =============================================================================
// Trampolines
// =============================================================================

/// Run a callback, keeping panics and errors on this side of the boundary
fn invoke<F>(what: &str, f: F) -> sys::FMOD_RESULT
where
    F: FnOnce() -> Result<()>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(())) => sys::FMOD_OK,
        Ok(Err(e)) => e.to_raw(),
        Err(_) => {
            log::error!("panic in {} callback (caught at FFI boundary)", what);
            sys::FMOD_ERR_INTERNAL
        }
    }
}

/// Native entry for system callbacks
pub(crate) extern "C" fn system_trampoline(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    kind: sys::FMOD_STUDIO_SYSTEM_CALLBACK_TYPE,
    _commanddata: *mut c_void,
    _userdata: *mut c_void,
) -> sys::FMOD_RESULT {
    let Some((api, Callback::System(callback))) = lookup(Owner::System(system as usize)) else {
        return sys::FMOD_OK;
    };
    let kind = match SystemCallbackType::from_c(kind) {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("ignoring system callback: {}", e);
            return sys::FMOD_ERR_INVALID_PARAM;
        }
    };
    let system = System::from_raw(system, api);
    invoke("system", || callback(&system, kind))
}

/// Native entry for event callbacks, registered on instances or descriptions
pub(crate) extern "C" fn event_trampoline(
    kind: c_int,
    event: *mut sys::FMOD_STUDIO_EVENTINSTANCE,
    parameters: *mut c_void,
) -> sys::FMOD_RESULT {
    let Some((api, callback)) = lookup_event(event) else {
        return sys::FMOD_OK;
    };
    let kind = match EventCallbackType::from_c(kind) {
        Ok(kind) => kind,
        Err(e) => {
            log::warn!("ignoring event callback: {}", e);
            return sys::FMOD_ERR_INVALID_PARAM;
        }
    };
    let instance = EventInstance::from_raw(event, api);

    invoke("event", || {
        let payload = match kind {
            EventCallbackType::Started => EventCallback::Started,
            EventCallbackType::Stopped => EventCallback::Stopped,
            EventCallbackType::Idle => EventCallback::Idle,
            EventCallbackType::Restarted => EventCallback::Restarted,
            EventCallbackType::CreateProgrammerSound | EventCallbackType::DestroyProgrammerSound => {
                if parameters.is_null() {
                    return Err(Error::Status(Status::InvalidParam));
                }
                // SAFETY: native passes a PROGRAMMER_SOUND_PROPERTIES for these
                // kinds, valid until the callback returns.
                let props = unsafe { &mut *parameters.cast::<ProgrammerSound>() };
                if kind == EventCallbackType::CreateProgrammerSound {
                    EventCallback::CreateProgrammerSound(props)
                } else {
                    EventCallback::DestroyProgrammerSound(props)
                }
            }
        };
        callback(payload, &instance)
    })
}

/// Instance closure first, then the closure of the instance's description
fn lookup_event(
    event: *mut sys::FMOD_STUDIO_EVENTINSTANCE,
) -> Option<(&'static StudioApi, Arc<EventCallbackFn>)> {
    if let Some((api, Callback::Event(callback))) = lookup(Owner::Instance(event as usize)) {
        return Some((api, callback));
    }

    let api = any_description_api()?;
    let get_description = api.FMOD_Studio_EventInstance_GetDescription?;
    let mut description = std::ptr::null_mut();
    if unsafe { get_description(event, &mut description) } != sys::FMOD_OK {
        return None;
    }
    match lookup(Owner::Description(description as usize)) {
        Some((api, Callback::Event(callback))) => Some((api, callback)),
        _ => None,
    }
}
