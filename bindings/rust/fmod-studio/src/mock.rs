// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! In-process stand-in for the native library, used by the unit tests
//!
//! Tokens are object ids in one process-wide table. Ids are never reused,
//! so tests running in parallel only ever see their own objects.
//!
//! A bank is a text file: the line `BANK` followed by one path per line.
//! `bank:/` names the bank, `event:/` declares an event, and `bus:/` or
//! `vca:/` declares a mixer strip. Event paths steer behaviour:
//! - `/UI/` events are one-shot and 2D, `/Music/` events stream
//! - `programmer` events request a programmer sound when they start
//! - `corrupt` events carry a user property of an unknown type
//!
//! `update` advances loading states and instance playback, then fires the
//! queued callbacks with the table lock released, as the native update
//! pass would.

use std::collections::BTreeMap;
use std::ffi::{c_char, c_float, c_int, c_uint, c_void, CStr, CString};
use std::mem::size_of;
use std::ptr;
use std::sync::{Mutex, MutexGuard};

use fmod_studio_sys::{self as sys, StudioApi};

type Native<T = ()> = std::result::Result<T, sys::FMOD_RESULT>;

type EventFn = unsafe extern "C" fn(
    sys::FMOD_STUDIO_EVENT_CALLBACK_TYPE,
    *mut sys::FMOD_STUDIO_EVENTINSTANCE,
    *mut c_void,
) -> sys::FMOD_RESULT;

const BANK_MAGIC: &[u8] = b"BANK\n";
const RECORD_MAGIC: &[u8] = b"RECORD\n";
const FIRST_ID: usize = 0x1000;

const EMBEDDED_SOUND: &[u8] = b"RIFFpcm-samplesTAIL";
const DIALOGUE_FILE: &[u8] = b"audio/dialogue.fsb\0";

struct ParameterDef {
    name: &'static [u8],
    kind: sys::FMOD_STUDIO_PARAMETER_TYPE,
    minimum: f32,
    maximum: f32,
}

const PARAMETERS: [ParameterDef; 2] = [
    ParameterDef {
        name: b"distance\0",
        kind: sys::FMOD_STUDIO_PARAMETER_AUTOMATIC_DISTANCE,
        minimum: 0.0,
        maximum: 20.0,
    },
    ParameterDef {
        name: b"intensity\0",
        kind: sys::FMOD_STUDIO_PARAMETER_GAME_CONTROLLED,
        minimum: 0.0,
        maximum: 1.0,
    },
];

enum PropertyDef {
    Integer(c_int),
    Boolean(bool),
    Float(f32),
    Text(&'static [u8]),
    Corrupt,
}

const USER_PROPERTIES: [(&[u8], PropertyDef); 4] = [
    (b"priority\0", PropertyDef::Integer(3)),
    (b"looping\0", PropertyDef::Boolean(true)),
    (b"gain\0", PropertyDef::Float(0.5)),
    (b"category\0", PropertyDef::Text(b"ambience\0")),
];

const CORRUPT_PROPERTY: (&[u8], PropertyDef) = (b"broken\0", PropertyDef::Corrupt);

const CUE_NAME: &str = "KeyOff";

// =============================================================================
// Object table
// =============================================================================

struct SystemObj {
    initialized: bool,
    settings: sys::FMOD_STUDIO_ADVANCEDSETTINGS,
    listener: sys::FMOD_3D_ATTRIBUTES,
    callback: sys::FMOD_STUDIO_SYSTEM_CALLBACK,
    mask: c_uint,
    callback_results: Vec<sys::FMOD_RESULT>,
    user_data: usize,
    core: usize,
    banks: Vec<usize>,
    recording: bool,
    peaks_reset: bool,
}

struct BankObj {
    system: usize,
    path: String,
    state: c_int,
    samples: c_int,
    events: Vec<usize>,
    strips: Vec<usize>,
}

struct EventObj {
    system: usize,
    bank: usize,
    path: String,
    samples: c_int,
    callback: sys::FMOD_STUDIO_EVENT_CALLBACK,
    user_data: usize,
    instances: Vec<usize>,
}

struct InstanceObj {
    system: usize,
    event: usize,
    volume: f32,
    pitch: f32,
    paused: bool,
    state: c_int,
    position: c_int,
    attributes: sys::FMOD_3D_ATTRIBUTES,
    priority: f32,
    parameters: Vec<usize>,
    cue: usize,
    group: usize,
    callback: sys::FMOD_STUDIO_EVENT_CALLBACK,
    callback_results: Vec<sys::FMOD_RESULT>,
    user_data: usize,
    released: bool,
    queued: Vec<c_int>,
    programmer_sound: usize,
}

struct StripObj {
    system: usize,
    bank: usize,
    path: String,
    fader: f32,
    paused: bool,
    mute: bool,
    group: usize,
    stops: u32,
}

struct ParameterObj {
    index: usize,
    value: f32,
    /// Last value a caller asked for, before clamping
    requested: f32,
}

impl ParameterObj {
    fn set(&mut self, value: f32) {
        let def = &PARAMETERS[self.index];
        self.requested = value;
        self.value = value.clamp(def.minimum, def.maximum);
    }
}

struct CueObj {
    triggers: u32,
}

enum Object {
    System(SystemObj),
    Bank(BankObj),
    Event(EventObj),
    Instance(InstanceObj),
    Strip(StripObj),
    Parameter(ParameterObj),
    Cue(CueObj),
}

struct Entry {
    object: Object,
    /// Buffer sizes passed to path reads, in call order
    path_reads: Vec<c_int>,
    /// Items a list fill reports beyond what the count call reported
    extra_items: c_int,
}

struct State {
    next_id: usize,
    objects: BTreeMap<usize, Entry>,
}

static STATE: Mutex<State> = Mutex::new(State {
    next_id: FIRST_ID,
    objects: BTreeMap::new(),
});

fn state() -> MutexGuard<'static, State> {
    STATE.lock().unwrap_or_else(|e| e.into_inner())
}

macro_rules! accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        fn $name(&mut self, id: usize) -> Native<&mut $ty> {
            match self.objects.get_mut(&id).map(|e| &mut e.object) {
                Some(Object::$variant(obj)) => Ok(obj),
                _ => Err(sys::FMOD_ERR_INVALID_HANDLE),
            }
        }
    };
}

impl State {
    accessor!(system, System, SystemObj);
    accessor!(bank, Bank, BankObj);
    accessor!(event, Event, EventObj);
    accessor!(instance, Instance, InstanceObj);
    accessor!(strip, Strip, StripObj);
    accessor!(parameter, Parameter, ParameterObj);
    accessor!(cue, Cue, CueObj);

    /// Id for a token that has no object behind it
    fn reserve(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn insert(&mut self, object: Object) -> usize {
        let id = self.reserve();
        self.objects.insert(
            id,
            Entry {
                object,
                path_reads: Vec::new(),
                extra_items: 0,
            },
        );
        id
    }

    fn entry(&mut self, id: usize) -> Native<&mut Entry> {
        self.objects.get_mut(&id).ok_or(sys::FMOD_ERR_INVALID_HANDLE)
    }

    fn ready(&mut self, id: usize) -> Native<&mut SystemObj> {
        let system = self.system(id)?;
        if system.initialized {
            Ok(system)
        } else {
            Err(sys::FMOD_ERR_STUDIO_UNINITIALIZED)
        }
    }

    fn extra_items(&self, id: usize) -> c_int {
        self.objects.get(&id).map_or(0, |e| e.extra_items)
    }

    /// Owning system and path of a bank, event or mixer strip
    fn path_of(&self, id: usize) -> Option<(usize, &str)> {
        match &self.objects.get(&id)?.object {
            Object::Bank(b) => Some((b.system, &b.path)),
            Object::Event(e) => Some((e.system, &e.path)),
            Object::Strip(s) => Some((s.system, &s.path)),
            _ => None,
        }
    }

    fn find_path(&self, system: usize, path: &str) -> Option<usize> {
        self.objects
            .keys()
            .copied()
            .find(|id| self.path_of(*id) == Some((system, path)))
    }

    fn create_instance(&mut self, event: usize) -> Native<usize> {
        let system = self.event(event)?.system;
        let parameters = (0..PARAMETERS.len())
            .map(|index| {
                self.insert(Object::Parameter(ParameterObj {
                    index,
                    value: 0.0,
                    requested: 0.0,
                }))
            })
            .collect();
        let cue = self.insert(Object::Cue(CueObj { triggers: 0 }));
        let group = self.reserve();
        let instance = self.insert(Object::Instance(InstanceObj {
            system,
            event,
            volume: 1.0,
            pitch: 1.0,
            paused: false,
            state: sys::FMOD_STUDIO_PLAYBACK_STOPPED,
            position: 0,
            attributes: default_attributes(),
            priority: -1.0,
            parameters,
            cue,
            group,
            callback: None,
            callback_results: Vec::new(),
            user_data: 0,
            released: false,
            queued: Vec::new(),
            programmer_sound: 0,
        }));
        self.event(event)?.instances.push(instance);
        Ok(instance)
    }

    fn remove_instance(&mut self, id: usize) {
        let Some(Entry {
            object: Object::Instance(instance),
            ..
        }) = self.objects.remove(&id)
        else {
            return;
        };
        for parameter in instance.parameters {
            self.objects.remove(&parameter);
        }
        self.objects.remove(&instance.cue);
        if let Ok(event) = self.event(instance.event) {
            event.instances.retain(|i| *i != id);
        }
    }

    fn remove_event(&mut self, id: usize) {
        if let Some(Entry {
            object: Object::Event(event),
            ..
        }) = self.objects.remove(&id)
        {
            for instance in event.instances {
                self.remove_instance(instance);
            }
        }
    }

    fn unload_bank(&mut self, id: usize) -> Native {
        let system = self.bank(id)?.system;
        let Some(Entry {
            object: Object::Bank(bank),
            ..
        }) = self.objects.remove(&id)
        else {
            return Err(sys::FMOD_ERR_INVALID_HANDLE);
        };
        for event in bank.events {
            self.remove_event(event);
        }
        for strip in bank.strips {
            self.objects.remove(&strip);
        }
        if let Ok(system) = self.system(system) {
            system.banks.retain(|b| *b != id);
        }
        Ok(())
    }

    fn load_bank(&mut self, system: usize, data: &[u8], flags: c_uint) -> Native<usize> {
        let layout = parse_bank(data)?;
        let loaded = self.ready(system)?.banks.clone();
        for bank in loaded {
            if self.bank(bank)?.path == layout.path {
                return Err(sys::FMOD_ERR_EVENT_ALREADY_LOADED);
            }
        }

        let state = if flags & sys::FMOD_STUDIO_LOAD_BANK_NONBLOCKING != 0 {
            sys::FMOD_STUDIO_LOADING_STATE_LOADING
        } else {
            sys::FMOD_STUDIO_LOADING_STATE_LOADED
        };
        let bank = self.insert(Object::Bank(BankObj {
            system,
            path: layout.path,
            state,
            samples: sys::FMOD_STUDIO_LOADING_STATE_UNLOADED,
            events: Vec::new(),
            strips: Vec::new(),
        }));

        let events = layout
            .events
            .into_iter()
            .map(|path| {
                self.insert(Object::Event(EventObj {
                    system,
                    bank,
                    path,
                    samples: sys::FMOD_STUDIO_LOADING_STATE_UNLOADED,
                    callback: None,
                    user_data: 0,
                    instances: Vec::new(),
                }))
            })
            .collect();
        let strips = layout
            .strips
            .into_iter()
            .map(|path| {
                let group = self.reserve();
                self.insert(Object::Strip(StripObj {
                    system,
                    bank,
                    path,
                    fader: 1.0,
                    paused: false,
                    mute: false,
                    group,
                    stops: 0,
                }))
            })
            .collect();

        let b = self.bank(bank)?;
        b.events = events;
        b.strips = strips;
        self.system(system)?.banks.push(bank);
        Ok(bank)
    }
}

struct BankLayout {
    path: String,
    events: Vec<String>,
    strips: Vec<String>,
}

fn parse_bank(data: &[u8]) -> Native<BankLayout> {
    let body = data.strip_prefix(BANK_MAGIC).ok_or(sys::FMOD_ERR_FORMAT)?;
    let text = std::str::from_utf8(body).map_err(|_| sys::FMOD_ERR_FORMAT)?;

    let mut path = None;
    let mut events = Vec::new();
    let mut strips = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with("bank:/") {
            path = Some(line.to_string());
        } else if line.starts_with("event:/") {
            events.push(line.to_string());
        } else if line.starts_with("bus:/") || line.starts_with("vca:/") {
            strips.push(line.to_string());
        } else {
            return Err(sys::FMOD_ERR_FORMAT);
        }
    }
    Ok(BankLayout {
        path: path.ok_or(sys::FMOD_ERR_FORMAT)?,
        events,
        strips,
    })
}

fn default_attributes() -> sys::FMOD_3D_ATTRIBUTES {
    sys::FMOD_3D_ATTRIBUTES {
        forward: sys::FMOD_VECTOR { x: 0.0, y: 0.0, z: 1.0 },
        up: sys::FMOD_VECTOR { x: 0.0, y: 1.0, z: 0.0 },
        ..Default::default()
    }
}

fn guid_of(id: usize) -> sys::FMOD_GUID {
    sys::FMOD_GUID {
        Data1: id as c_uint,
        ..Default::default()
    }
}

fn parse_guid(text: &str) -> Option<sys::FMOD_GUID> {
    let inner = text.strip_prefix('{')?.strip_suffix('}')?;
    let parts: Vec<&str> = inner.split('-').collect();
    let lengths: Vec<usize> = parts.iter().map(|p| p.len()).collect();
    if lengths != [8, 4, 4, 4, 12] || !inner.chars().all(|c| c == '-' || c.is_ascii_hexdigit()) {
        return None;
    }
    let tail = format!("{}{}", parts[3], parts[4]);
    let mut data4 = [0u8; 8];
    for (i, byte) in data4.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&tail[i * 2..i * 2 + 2], 16).ok()?;
    }
    Some(sys::FMOD_GUID {
        Data1: u32::from_str_radix(parts[0], 16).ok()?,
        Data2: u16::from_str_radix(parts[1], 16).ok()?,
        Data3: u16::from_str_radix(parts[2], 16).ok()?,
        Data4: data4,
    })
}

// =============================================================================
// Marshalling helpers
// =============================================================================

fn run<F>(f: F) -> sys::FMOD_RESULT
where
    F: FnOnce(&mut State) -> Native,
{
    match f(&mut state()) {
        Ok(()) => sys::FMOD_OK,
        Err(rc) => rc,
    }
}

fn id<T>(token: *mut T) -> usize {
    token as usize
}

fn token<T>(id: usize) -> *mut T {
    id as *mut T
}

unsafe fn put<T>(out: *mut T, value: T) -> Native {
    if out.is_null() {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    }
    unsafe { out.write(value) };
    Ok(())
}

unsafe fn text(ptr: *const c_char) -> Native<String> {
    if ptr.is_null() {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    s.to_str().map(str::to_owned).map_err(|_| sys::FMOD_ERR_INVALID_STRING)
}

unsafe fn put_bool(out: *mut sys::FMOD_BOOL, value: bool) -> Native {
    unsafe { put(out, if value { sys::FMOD_TRUE } else { sys::FMOD_FALSE }) }
}

/// Copy `path` into a caller buffer, truncating as the native library does
unsafe fn put_path(path: &str, buf: *mut c_char, size: c_int, retrieved: *mut c_int) -> Native {
    let bytes = path.as_bytes();
    if !retrieved.is_null() {
        unsafe { *retrieved = bytes.len() as c_int + 1 };
    }
    if buf.is_null() || size <= 0 {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    }
    let n = bytes.len().min(size as usize - 1);
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), buf.cast::<u8>(), n);
        *buf.add(n) = 0;
    }
    if n < bytes.len() {
        Err(sys::FMOD_ERR_TRUNCATED)
    } else {
        Ok(())
    }
}

fn read_path(id: usize, buf: *mut c_char, size: c_int, retrieved: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        s.entry(id)?.path_reads.push(size);
        let path = s.path_of(id).ok_or(sys::FMOD_ERR_INVALID_HANDLE)?.1.to_owned();
        unsafe { put_path(&path, buf, size, retrieved) }
    })
}

unsafe fn put_list<T>(
    items: &[usize],
    extra: c_int,
    array: *mut *mut T,
    capacity: c_int,
    count: *mut c_int,
) -> Native {
    if array.is_null() || capacity < 0 {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    }
    for (i, item) in items.iter().take(capacity as usize).enumerate() {
        unsafe { *array.add(i) = token(*item) };
    }
    unsafe { put(count, items.len() as c_int + extra) }
}

fn parameter_description(index: usize) -> sys::FMOD_STUDIO_PARAMETER_DESCRIPTION {
    let def = &PARAMETERS[index];
    sys::FMOD_STUDIO_PARAMETER_DESCRIPTION {
        name: def.name.as_ptr().cast(),
        minimum: def.minimum,
        maximum: def.maximum,
        type_: def.kind,
    }
}

fn user_property((name, def): &(&'static [u8], PropertyDef)) -> sys::FMOD_STUDIO_USER_PROPERTY {
    let (type_, value) = match def {
        PropertyDef::Integer(v) => (
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_INTEGER,
            sys::FMOD_STUDIO_USER_PROPERTY_VALUE { intValue: *v },
        ),
        PropertyDef::Boolean(v) => (
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_BOOLEAN,
            sys::FMOD_STUDIO_USER_PROPERTY_VALUE { boolValue: *v as sys::FMOD_BOOL },
        ),
        PropertyDef::Float(v) => (
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_FLOAT,
            sys::FMOD_STUDIO_USER_PROPERTY_VALUE { floatValue: *v },
        ),
        PropertyDef::Text(v) => (
            sys::FMOD_STUDIO_USER_PROPERTY_TYPE_STRING,
            sys::FMOD_STUDIO_USER_PROPERTY_VALUE { stringValue: v.as_ptr().cast() },
        ),
        PropertyDef::Corrupt => (7, sys::FMOD_STUDIO_USER_PROPERTY_VALUE { intValue: 0 }),
    };
    sys::FMOD_STUDIO_USER_PROPERTY {
        name: name.as_ptr().cast(),
        type_,
        value,
    }
}

fn user_properties(path: &str) -> Vec<sys::FMOD_STUDIO_USER_PROPERTY> {
    let mut props: Vec<_> = USER_PROPERTIES.iter().map(user_property).collect();
    if path.contains("corrupt") {
        props.push(user_property(&CORRUPT_PROPERTY));
    }
    props
}

fn property_name(prop: &sys::FMOD_STUDIO_USER_PROPERTY) -> &'static str {
    unsafe { CStr::from_ptr(prop.name) }.to_str().unwrap_or("")
}

// =============================================================================
// Update pass
// =============================================================================

struct Pending {
    callback: EventFn,
    kind: c_int,
    instance: usize,
    programmer: Option<CString>,
}

fn advance(state: &mut c_int) {
    if *state == sys::FMOD_STUDIO_LOADING_STATE_LOADING {
        *state = sys::FMOD_STUDIO_LOADING_STATE_LOADED;
    }
}

/// Advance loading and playback for one system, collecting event callbacks
fn progress(s: &mut State, system: usize) -> Native<Vec<Pending>> {
    let mut pending = Vec::new();
    for bank in s.system(system)?.banks.clone() {
        let events = {
            let b = s.bank(bank)?;
            advance(&mut b.state);
            advance(&mut b.samples);
            b.events.clone()
        };
        for event in events {
            let (path, described, instances) = {
                let e = s.event(event)?;
                advance(&mut e.samples);
                (e.path.clone(), e.callback, e.instances.clone())
            };
            for instance in instances {
                let inst = s.instance(instance)?;
                match inst.state {
                    sys::FMOD_STUDIO_PLAYBACK_STARTING => {
                        inst.state = sys::FMOD_STUDIO_PLAYBACK_PLAYING;
                        inst.queued.push(sys::FMOD_STUDIO_EVENT_CALLBACK_STARTED);
                        if path.contains("programmer") {
                            inst.queued
                                .push(sys::FMOD_STUDIO_EVENT_CALLBACK_CREATE_PROGRAMMER_SOUND);
                        }
                    }
                    sys::FMOD_STUDIO_PLAYBACK_STOPPING => {
                        inst.state = sys::FMOD_STUDIO_PLAYBACK_STOPPED;
                        inst.queued.push(sys::FMOD_STUDIO_EVENT_CALLBACK_STOPPED);
                    }
                    _ => {}
                }
                let callback = inst.callback.or(described);
                for kind in inst.queued.drain(..) {
                    let Some(callback) = callback else { continue };
                    let programmer = if kind == sys::FMOD_STUDIO_EVENT_CALLBACK_CREATE_PROGRAMMER_SOUND {
                        CString::new("dialogue").ok()
                    } else {
                        None
                    };
                    pending.push(Pending {
                        callback,
                        kind,
                        instance,
                        programmer,
                    });
                }
            }
        }
    }
    Ok(pending)
}

fn fire(pending: Vec<Pending>) {
    for p in pending {
        let mut props = sys::FMOD_STUDIO_PROGRAMMER_SOUND_PROPERTIES {
            name: ptr::null(),
            sound: ptr::null_mut(),
        };
        let parameters: *mut c_void = match &p.programmer {
            Some(name) => {
                props.name = name.as_ptr();
                (&mut props as *mut sys::FMOD_STUDIO_PROGRAMMER_SOUND_PROPERTIES).cast()
            }
            None => ptr::null_mut(),
        };
        let rc = unsafe { (p.callback)(p.kind, token(p.instance), parameters) };

        if let Ok(instance) = state().instance(p.instance) {
            instance.callback_results.push(rc);
            if p.programmer.is_some() {
                instance.programmer_sound = props.sound as usize;
            }
        }
    }
}

/// Destroy released instances of `system` that have stopped
fn reap(s: &mut State, system: usize) {
    let done: Vec<usize> = s
        .objects
        .iter()
        .filter_map(|(id, e)| match &e.object {
            Object::Instance(i)
                if i.system == system
                    && i.released
                    && i.state == sys::FMOD_STUDIO_PLAYBACK_STOPPED =>
            {
                Some(*id)
            }
            _ => None,
        })
        .collect();
    for id in done {
        s.remove_instance(id);
    }
}

// =============================================================================
// Entry points: top level and system
// =============================================================================

unsafe extern "C" fn parse_id(idstring: *const c_char, out: *mut sys::FMOD_GUID) -> sys::FMOD_RESULT {
    let Ok(text) = (unsafe { text(idstring) }) else {
        return sys::FMOD_ERR_INVALID_PARAM;
    };
    match parse_guid(&text) {
        Some(guid) => match unsafe { put(out, guid) } {
            Ok(()) => sys::FMOD_OK,
            Err(rc) => rc,
        },
        None => sys::FMOD_ERR_INVALID_PARAM,
    }
}

unsafe extern "C" fn system_create(
    out: *mut *mut sys::FMOD_STUDIO_SYSTEM,
    header_version: c_uint,
) -> sys::FMOD_RESULT {
    if header_version != sys::FMOD_VERSION {
        return sys::FMOD_ERR_HEADER_MISMATCH;
    }
    run(|s| {
        let core = s.reserve();
        let system = s.insert(Object::System(SystemObj {
            initialized: false,
            settings: sys::FMOD_STUDIO_ADVANCEDSETTINGS {
                cbSize: size_of::<sys::FMOD_STUDIO_ADVANCEDSETTINGS>() as c_int,
                commandQueueSize: 32768,
                handleInitialSize: 8192,
            },
            listener: default_attributes(),
            callback: None,
            mask: 0,
            callback_results: Vec::new(),
            user_data: 0,
            core,
            banks: Vec::new(),
            recording: false,
            peaks_reset: false,
        }));
        unsafe { put(out, token(system)) }
    })
}

unsafe extern "C" fn system_set_advanced_settings(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    settings: *mut sys::FMOD_STUDIO_ADVANCEDSETTINGS,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.system(id(system))?;
        if settings.is_null() {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        let settings = unsafe { *settings };
        if settings.cbSize as usize != size_of::<sys::FMOD_STUDIO_ADVANCEDSETTINGS>() {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        if system.initialized {
            return Err(sys::FMOD_ERR_INITIALIZED);
        }
        system.settings = settings;
        Ok(())
    })
}

unsafe extern "C" fn system_get_advanced_settings(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    settings: *mut sys::FMOD_STUDIO_ADVANCEDSETTINGS,
) -> sys::FMOD_RESULT {
    run(|s| {
        let current = s.system(id(system))?.settings;
        if settings.is_null() {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        if unsafe { (*settings).cbSize } as usize != size_of::<sys::FMOD_STUDIO_ADVANCEDSETTINGS>() {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        unsafe { put(settings, current) }
    })
}

unsafe extern "C" fn system_initialize(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    max_channels: c_int,
    _studio_flags: sys::FMOD_STUDIO_INITFLAGS,
    _flags: sys::FMOD_INITFLAGS,
    _extra: *mut c_void,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.system(id(system))?;
        if system.initialized {
            return Err(sys::FMOD_ERR_INITIALIZED);
        }
        if max_channels <= 0 {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        system.initialized = true;
        Ok(())
    })
}

unsafe extern "C" fn system_release(system: *mut sys::FMOD_STUDIO_SYSTEM) -> sys::FMOD_RESULT {
    run(|s| {
        let id = id(system);
        for bank in s.system(id)?.banks.clone() {
            s.unload_bank(bank)?;
        }
        s.objects.remove(&id);
        Ok(())
    })
}

unsafe extern "C" fn system_update(system: *mut sys::FMOD_STUDIO_SYSTEM) -> sys::FMOD_RESULT {
    let id = id(system);
    let (callback, mask, pending) = {
        let mut s = state();
        let (callback, mask) = match s.ready(id) {
            Ok(obj) => (obj.callback, obj.mask),
            Err(rc) => return rc,
        };
        match progress(&mut s, id) {
            Ok(pending) => (callback, mask, pending),
            Err(rc) => return rc,
        }
    };

    let mut results = Vec::new();
    let mut notify = |kind: sys::FMOD_STUDIO_SYSTEM_CALLBACK_TYPE| {
        if let Some(cb) = callback {
            if mask & kind != 0 {
                results.push(unsafe { cb(system, kind, ptr::null_mut(), ptr::null_mut()) });
            }
        }
    };
    notify(sys::FMOD_STUDIO_SYSTEM_CALLBACK_PREUPDATE);
    fire(pending);
    notify(sys::FMOD_STUDIO_SYSTEM_CALLBACK_POSTUPDATE);

    let mut s = state();
    if let Ok(obj) = s.system(id) {
        obj.callback_results.extend(results);
    }
    reap(&mut s, id);
    sys::FMOD_OK
}

unsafe extern "C" fn system_get_low_level_system(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    out: *mut *mut sys::FMOD_SYSTEM,
) -> sys::FMOD_RESULT {
    run(|s| {
        let core = s.system(id(system))?.core;
        unsafe { put(out, token(core)) }
    })
}

unsafe extern "C" fn system_get_event(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    guid: *const sys::FMOD_GUID,
    _mode: sys::FMOD_STUDIO_LOADING_MODE,
    out: *mut *mut sys::FMOD_STUDIO_EVENTDESCRIPTION,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let target = unsafe { guid.as_ref() }.ok_or(sys::FMOD_ERR_INVALID_PARAM)?.Data1 as usize;
        s.event(target).map_err(|_| sys::FMOD_ERR_EVENT_NOTFOUND)?;
        unsafe { put(out, token(target)) }
    })
}

unsafe extern "C" fn system_get_mixer_strip(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    guid: *const sys::FMOD_GUID,
    _mode: sys::FMOD_STUDIO_LOADING_MODE,
    out: *mut *mut sys::FMOD_STUDIO_MIXERSTRIP,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let target = unsafe { guid.as_ref() }.ok_or(sys::FMOD_ERR_INVALID_PARAM)?.Data1 as usize;
        s.strip(target).map_err(|_| sys::FMOD_ERR_EVENT_NOTFOUND)?;
        unsafe { put(out, token(target)) }
    })
}

unsafe extern "C" fn system_get_bank(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    guid: *const sys::FMOD_GUID,
    out: *mut *mut sys::FMOD_STUDIO_BANK,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let target = unsafe { guid.as_ref() }.ok_or(sys::FMOD_ERR_INVALID_PARAM)?.Data1 as usize;
        s.bank(target).map_err(|_| sys::FMOD_ERR_EVENT_NOTFOUND)?;
        unsafe { put(out, token(target)) }
    })
}

unsafe extern "C" fn system_get_sound_info(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    key: *const c_char,
    info: *mut sys::FMOD_STUDIO_SOUND_INFO,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let key = unsafe { text(key) }?;
        let mut raw: sys::FMOD_STUDIO_SOUND_INFO = unsafe { std::mem::zeroed() };
        raw.exinfo.cbsize = size_of::<sys::FMOD_CREATESOUNDEXINFO>() as c_int;
        match key.as_str() {
            "dialogue" => {
                raw.name_or_data = DIALOGUE_FILE.as_ptr().cast();
                raw.mode = sys::FMOD_CREATESTREAM;
                raw.subsoundIndex = 2;
            }
            "embedded" => {
                raw.name_or_data = EMBEDDED_SOUND.as_ptr().cast();
                raw.mode = sys::FMOD_OPENMEMORY_POINT | sys::FMOD_CREATESAMPLE;
                raw.exinfo.fileoffset = 4;
                raw.exinfo.length = 11;
                raw.subsoundIndex = 1;
            }
            _ => return Err(sys::FMOD_ERR_EVENT_NOTFOUND),
        }
        unsafe { put(info, raw) }
    })
}

unsafe extern "C" fn system_lookup_id(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    path: *const c_char,
    out: *mut sys::FMOD_GUID,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = id(system);
        s.ready(system)?;
        let path = unsafe { text(path) }?;
        let found = s.find_path(system, &path).ok_or(sys::FMOD_ERR_EVENT_NOTFOUND)?;
        unsafe { put(out, guid_of(found)) }
    })
}

unsafe extern "C" fn system_lookup_path(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    guid: *const sys::FMOD_GUID,
    buf: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> sys::FMOD_RESULT {
    let target = {
        let mut s = state();
        if let Err(rc) = s.ready(id(system)) {
            return rc;
        }
        match unsafe { guid.as_ref() } {
            Some(guid) => guid.Data1 as usize,
            None => return sys::FMOD_ERR_INVALID_PARAM,
        }
    };
    if state().path_of(target).is_none() {
        return sys::FMOD_ERR_EVENT_NOTFOUND;
    }
    read_path(target, buf, size, retrieved)
}

unsafe extern "C" fn system_get_listener_attributes(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    out: *mut sys::FMOD_3D_ATTRIBUTES,
) -> sys::FMOD_RESULT {
    run(|s| {
        let listener = s.system(id(system))?.listener;
        unsafe { put(out, listener) }
    })
}

unsafe extern "C" fn system_set_listener_attributes(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    attributes: *const sys::FMOD_3D_ATTRIBUTES,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.system(id(system))?;
        system.listener = *unsafe { attributes.as_ref() }.ok_or(sys::FMOD_ERR_INVALID_PARAM)?;
        Ok(())
    })
}

unsafe extern "C" fn system_load_bank_file(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    filename: *const c_char,
    flags: sys::FMOD_STUDIO_LOAD_BANK_FLAGS,
    out: *mut *mut sys::FMOD_STUDIO_BANK,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let filename = unsafe { text(filename) }?;
        let data = std::fs::read(&filename).map_err(|_| sys::FMOD_ERR_FILE_NOTFOUND)?;
        let bank = s.load_bank(id(system), &data, flags)?;
        unsafe { put(out, token(bank)) }
    })
}

unsafe extern "C" fn system_load_bank_memory(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    buffer: *const c_char,
    length: c_int,
    mode: sys::FMOD_STUDIO_LOAD_MEMORY_MODE,
    flags: sys::FMOD_STUDIO_LOAD_BANK_FLAGS,
    out: *mut *mut sys::FMOD_STUDIO_BANK,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        if buffer.is_null()
            || length < 0
            || (mode != sys::FMOD_STUDIO_LOAD_MEMORY && mode != sys::FMOD_STUDIO_LOAD_MEMORY_POINT)
        {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        let data = unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) };
        let bank = s.load_bank(id(system), data, flags)?;
        unsafe { put(out, token(bank)) }
    })
}

/// Read a whole bank through the caller's file callbacks
unsafe fn read_custom(info: &sys::FMOD_STUDIO_BANK_INFO) -> Native<Vec<u8>> {
    if info.size as usize != size_of::<sys::FMOD_STUDIO_BANK_INFO>() {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    }
    let (Some(open), Some(read)) = (info.openCallback, info.readCallback) else {
        return Err(sys::FMOD_ERR_INVALID_PARAM);
    };

    let mut file_size: c_uint = 0;
    let mut handle: *mut c_void = ptr::null_mut();
    let rc = unsafe { open(ptr::null(), &mut file_size, &mut handle, info.userData) };
    if rc != sys::FMOD_OK {
        return Err(rc);
    }

    let mut data = Vec::new();
    let mut chunk = [0u8; 16];
    let result = loop {
        let mut got: c_uint = 0;
        let rc = unsafe {
            read(
                handle,
                chunk.as_mut_ptr().cast(),
                chunk.len() as c_uint,
                &mut got,
                info.userData,
            )
        };
        data.extend_from_slice(&chunk[..(got as usize).min(chunk.len())]);
        match rc {
            sys::FMOD_OK if got > 0 => continue,
            sys::FMOD_OK | sys::FMOD_ERR_FILE_EOF => break Ok(data),
            rc => break Err(rc),
        }
    };

    if let Some(close) = info.closeCallback {
        unsafe { close(handle, info.userData) };
    }
    result
}

unsafe extern "C" fn system_load_bank_custom(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    info: *const sys::FMOD_STUDIO_BANK_INFO,
    flags: sys::FMOD_STUDIO_LOAD_BANK_FLAGS,
    out: *mut *mut sys::FMOD_STUDIO_BANK,
) -> sys::FMOD_RESULT {
    if let Err(rc) = state().ready(id(system)) {
        return rc;
    }
    let Some(info) = (unsafe { info.as_ref() }) else {
        return sys::FMOD_ERR_INVALID_PARAM;
    };
    // Caller callbacks run without the table locked.
    let data = match unsafe { read_custom(info) } {
        Ok(data) => data,
        Err(rc) => return rc,
    };
    run(|s| {
        let bank = s.load_bank(id(system), &data, flags)?;
        unsafe { put(out, token(bank)) }
    })
}

unsafe extern "C" fn system_unload_all(system: *mut sys::FMOD_STUDIO_SYSTEM) -> sys::FMOD_RESULT {
    run(|s| {
        for bank in s.ready(id(system))?.banks.clone() {
            s.unload_bank(bank)?;
        }
        Ok(())
    })
}

unsafe extern "C" fn system_flush_commands(system: *mut sys::FMOD_STUDIO_SYSTEM) -> sys::FMOD_RESULT {
    run(|s| s.ready(id(system)).map(|_| ()))
}

unsafe extern "C" fn system_start_record_commands(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    path: *const c_char,
    _flags: sys::FMOD_STUDIO_RECORD_COMMANDS_FLAGS,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.ready(id(system))?;
        if system.recording {
            return Err(sys::FMOD_ERR_BADCOMMAND);
        }
        let path = unsafe { text(path) }?;
        std::fs::write(&path, RECORD_MAGIC).map_err(|_| sys::FMOD_ERR_FILE_NOTFOUND)?;
        system.recording = true;
        Ok(())
    })
}

unsafe extern "C" fn system_stop_record_commands(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.ready(id(system))?;
        if !system.recording {
            return Err(sys::FMOD_ERR_BADCOMMAND);
        }
        system.recording = false;
        Ok(())
    })
}

unsafe extern "C" fn system_playback_commands(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    path: *const c_char,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let path = unsafe { text(path) }?;
        let data = std::fs::read(&path).map_err(|_| sys::FMOD_ERR_FILE_NOTFOUND)?;
        if data.starts_with(RECORD_MAGIC) {
            Ok(())
        } else {
            Err(sys::FMOD_ERR_FORMAT)
        }
    })
}

unsafe extern "C" fn system_get_bank_count(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let n = s.ready(id(system))?.banks.len();
        unsafe { put(count, n as c_int) }
    })
}

unsafe extern "C" fn system_get_bank_list(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    array: *mut *mut sys::FMOD_STUDIO_BANK,
    capacity: c_int,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = id(system);
        let banks = s.ready(system)?.banks.clone();
        unsafe { put_list(&banks, s.extra_items(system), array, capacity, count) }
    })
}

unsafe extern "C" fn system_get_cpu_usage(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    usage: *mut sys::FMOD_STUDIO_CPU_USAGE,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?;
        let value = sys::FMOD_STUDIO_CPU_USAGE {
            dspUsage: 1.5,
            streamUsage: 0.25,
            geometryUsage: 0.0,
            updateUsage: 0.75,
            studioUsage: 2.0,
        };
        unsafe { put(usage, value) }
    })
}

unsafe extern "C" fn system_get_buffer_usage(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    usage: *mut sys::FMOD_STUDIO_BUFFER_USAGE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let reset = s.ready(id(system))?.peaks_reset;
        let info = |current, peak, capacity| sys::FMOD_STUDIO_BUFFER_INFO {
            currentUsage: current,
            peakUsage: if reset { current } else { peak },
            capacity,
            stallCount: 0,
            stallTime: 0.0,
        };
        let value = sys::FMOD_STUDIO_BUFFER_USAGE {
            studioCommandQueue: info(512, 4096, 32768),
            studioHandle: info(64, 256, 8192),
        };
        unsafe { put(usage, value) }
    })
}

unsafe extern "C" fn system_reset_buffer_usage(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.ready(id(system))?.peaks_reset = true;
        Ok(())
    })
}

unsafe extern "C" fn system_set_callback(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    callback: sys::FMOD_STUDIO_SYSTEM_CALLBACK,
    mask: sys::FMOD_STUDIO_SYSTEM_CALLBACK_TYPE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let system = s.system(id(system))?;
        system.callback = callback;
        system.mask = mask;
        Ok(())
    })
}

unsafe extern "C" fn system_get_user_data(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    out: *mut *mut c_void,
) -> sys::FMOD_RESULT {
    run(|s| {
        let data = s.system(id(system))?.user_data;
        unsafe { put(out, token(data)) }
    })
}

unsafe extern "C" fn system_set_user_data(
    system: *mut sys::FMOD_STUDIO_SYSTEM,
    data: *mut c_void,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.system(id(system))?.user_data = data as usize;
        Ok(())
    })
}

// =============================================================================
// Entry points: event descriptions
// =============================================================================

type Desc = sys::FMOD_STUDIO_EVENTDESCRIPTION;

unsafe extern "C" fn desc_get_id(desc: *mut Desc, out: *mut sys::FMOD_GUID) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        unsafe { put(out, guid_of(id(desc))) }
    })
}

unsafe extern "C" fn desc_get_path(
    desc: *mut Desc,
    buf: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> sys::FMOD_RESULT {
    if let Err(rc) = state().event(id(desc)) {
        return rc;
    }
    read_path(id(desc), buf, size, retrieved)
}

unsafe extern "C" fn desc_get_parameter_count(desc: *mut Desc, count: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        unsafe { put(count, PARAMETERS.len() as c_int) }
    })
}

unsafe extern "C" fn desc_get_parameter_by_index(
    desc: *mut Desc,
    index: c_int,
    out: *mut sys::FMOD_STUDIO_PARAMETER_DESCRIPTION,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        let index = usize::try_from(index)
            .ok()
            .filter(|i| *i < PARAMETERS.len())
            .ok_or(sys::FMOD_ERR_INVALID_PARAM)?;
        unsafe { put(out, parameter_description(index)) }
    })
}

fn parameter_index(name: &str) -> Native<usize> {
    PARAMETERS
        .iter()
        .position(|p| &p.name[..p.name.len() - 1] == name.as_bytes())
        .ok_or(sys::FMOD_ERR_EVENT_NOTFOUND)
}

unsafe extern "C" fn desc_get_parameter(
    desc: *mut Desc,
    name: *const c_char,
    out: *mut sys::FMOD_STUDIO_PARAMETER_DESCRIPTION,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        let index = parameter_index(&unsafe { text(name) }?)?;
        unsafe { put(out, parameter_description(index)) }
    })
}

unsafe extern "C" fn desc_get_user_property_count(
    desc: *mut Desc,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let n = user_properties(&s.event(id(desc))?.path).len();
        unsafe { put(count, n as c_int) }
    })
}

unsafe extern "C" fn desc_get_user_property_by_index(
    desc: *mut Desc,
    index: c_int,
    out: *mut sys::FMOD_STUDIO_USER_PROPERTY,
) -> sys::FMOD_RESULT {
    run(|s| {
        let props = user_properties(&s.event(id(desc))?.path);
        let prop = usize::try_from(index)
            .ok()
            .and_then(|i| props.get(i))
            .ok_or(sys::FMOD_ERR_INVALID_PARAM)?;
        unsafe { put(out, *prop) }
    })
}

unsafe extern "C" fn desc_get_user_property(
    desc: *mut Desc,
    name: *const c_char,
    out: *mut sys::FMOD_STUDIO_USER_PROPERTY,
) -> sys::FMOD_RESULT {
    run(|s| {
        let props = user_properties(&s.event(id(desc))?.path);
        let name = unsafe { text(name) }?;
        let prop = props
            .iter()
            .find(|p| property_name(p) == name)
            .ok_or(sys::FMOD_ERR_EVENT_NOTFOUND)?;
        unsafe { put(out, *prop) }
    })
}

unsafe extern "C" fn desc_get_length(desc: *mut Desc, out: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        unsafe { put(out, 2500) }
    })
}

unsafe extern "C" fn desc_get_minimum_distance(desc: *mut Desc, out: *mut c_float) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        unsafe { put(out, 1.0) }
    })
}

unsafe extern "C" fn desc_get_maximum_distance(desc: *mut Desc, out: *mut c_float) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?;
        unsafe { put(out, PARAMETERS[0].maximum) }
    })
}

unsafe extern "C" fn desc_is_oneshot(desc: *mut Desc, out: *mut sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        let oneshot = s.event(id(desc))?.path.contains("/UI/");
        unsafe { put_bool(out, oneshot) }
    })
}

unsafe extern "C" fn desc_is_stream(desc: *mut Desc, out: *mut sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        let stream = s.event(id(desc))?.path.contains("/Music/");
        unsafe { put_bool(out, stream) }
    })
}

unsafe extern "C" fn desc_is_3d(desc: *mut Desc, out: *mut sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        let is_3d = !s.event(id(desc))?.path.contains("/UI/");
        unsafe { put_bool(out, is_3d) }
    })
}

unsafe extern "C" fn desc_create_instance(
    desc: *mut Desc,
    out: *mut *mut sys::FMOD_STUDIO_EVENTINSTANCE,
) -> sys::FMOD_RESULT {
    run(|s| {
        if out.is_null() {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        let instance = s.create_instance(id(desc))?;
        unsafe { put(out, token(instance)) }
    })
}

unsafe extern "C" fn desc_get_instance_count(desc: *mut Desc, count: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        let n = s.event(id(desc))?.instances.len();
        unsafe { put(count, n as c_int) }
    })
}

unsafe extern "C" fn desc_get_instance_list(
    desc: *mut Desc,
    array: *mut *mut sys::FMOD_STUDIO_EVENTINSTANCE,
    capacity: c_int,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instances = s.event(id(desc))?.instances.clone();
        unsafe { put_list(&instances, s.extra_items(id(desc)), array, capacity, count) }
    })
}

unsafe extern "C" fn desc_load_sample_data(desc: *mut Desc) -> sys::FMOD_RESULT {
    run(|s| {
        let event = s.event(id(desc))?;
        if event.samples != sys::FMOD_STUDIO_LOADING_STATE_LOADED {
            event.samples = sys::FMOD_STUDIO_LOADING_STATE_LOADING;
        }
        Ok(())
    })
}

unsafe extern "C" fn desc_unload_sample_data(desc: *mut Desc) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?.samples = sys::FMOD_STUDIO_LOADING_STATE_UNLOADED;
        Ok(())
    })
}

unsafe extern "C" fn desc_get_sample_loading_state(
    desc: *mut Desc,
    out: *mut sys::FMOD_STUDIO_LOADING_STATE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let samples = s.event(id(desc))?.samples;
        unsafe { put(out, samples) }
    })
}

unsafe extern "C" fn desc_release_all_instances(desc: *mut Desc) -> sys::FMOD_RESULT {
    run(|s| {
        for instance in s.event(id(desc))?.instances.clone() {
            s.remove_instance(instance);
        }
        Ok(())
    })
}

unsafe extern "C" fn desc_set_callback(
    desc: *mut Desc,
    callback: sys::FMOD_STUDIO_EVENT_CALLBACK,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?.callback = callback;
        Ok(())
    })
}

unsafe extern "C" fn desc_get_user_data(desc: *mut Desc, out: *mut *mut c_void) -> sys::FMOD_RESULT {
    run(|s| {
        let data = s.event(id(desc))?.user_data;
        unsafe { put(out, token(data)) }
    })
}

unsafe extern "C" fn desc_set_user_data(desc: *mut Desc, data: *mut c_void) -> sys::FMOD_RESULT {
    run(|s| {
        s.event(id(desc))?.user_data = data as usize;
        Ok(())
    })
}

// =============================================================================
// Entry points: event instances, parameters and cues
// =============================================================================

type Inst = sys::FMOD_STUDIO_EVENTINSTANCE;

/// Read one field of an instance into an out pointer
macro_rules! instance_getter {
    ($name:ident, $ty:ty, |$inst:ident| $value:expr) => {
        unsafe extern "C" fn $name(event: *mut Inst, out: *mut $ty) -> sys::FMOD_RESULT {
            run(|s| {
                let $inst = s.instance(id(event))?;
                let value = $value;
                unsafe { put(out, value) }
            })
        }
    };
}

/// Store a by-value argument on an instance
macro_rules! instance_setter {
    ($name:ident, $ty:ty, |$inst:ident, $arg:ident| $body:expr) => {
        unsafe extern "C" fn $name(event: *mut Inst, $arg: $ty) -> sys::FMOD_RESULT {
            run(|s| {
                let $inst = s.instance(id(event))?;
                $body;
                Ok(())
            })
        }
    };
}

instance_getter!(inst_get_volume, c_float, |i| i.volume);
instance_setter!(inst_set_volume, c_float, |i, v| i.volume = v);
instance_getter!(inst_get_pitch, c_float, |i| i.pitch);
instance_setter!(inst_set_pitch, c_float, |i, v| i.pitch = v);
instance_getter!(inst_get_paused, sys::FMOD_BOOL, |i| i.paused as sys::FMOD_BOOL);
instance_setter!(inst_set_paused, sys::FMOD_BOOL, |i, v| i.paused = v != 0);
instance_getter!(inst_get_timeline_position, c_int, |i| i.position);
instance_setter!(inst_set_timeline_position, c_int, |i, v| i.position = v);
instance_getter!(inst_get_playback_state, sys::FMOD_STUDIO_PLAYBACK_STATE, |i| i.state);
instance_getter!(inst_is_virtual, sys::FMOD_BOOL, |i| {
    let _ = i;
    sys::FMOD_FALSE
});
instance_getter!(inst_get_parameter_count, c_int, |i| i.parameters.len() as c_int);
instance_getter!(inst_get_cue_count, c_int, |i| {
    let _ = i;
    1
});
instance_getter!(inst_get_3d_attributes, sys::FMOD_3D_ATTRIBUTES, |i| i.attributes);

unsafe extern "C" fn inst_get_description(event: *mut Inst, out: *mut *mut Desc) -> sys::FMOD_RESULT {
    run(|s| {
        let description = s.instance(id(event))?.event;
        unsafe { put(out, token(description)) }
    })
}

unsafe extern "C" fn inst_set_3d_attributes(
    event: *mut Inst,
    attributes: *const sys::FMOD_3D_ATTRIBUTES,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        instance.attributes = *unsafe { attributes.as_ref() }.ok_or(sys::FMOD_ERR_INVALID_PARAM)?;
        Ok(())
    })
}

unsafe extern "C" fn inst_get_property(
    event: *mut Inst,
    index: sys::FMOD_STUDIO_EVENT_PROPERTY,
    out: *mut c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        if index != sys::FMOD_STUDIO_EVENT_PROPERTY_CHANNELPRIORITY {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        let priority = instance.priority;
        unsafe { put(out, priority) }
    })
}

unsafe extern "C" fn inst_set_property(
    event: *mut Inst,
    index: sys::FMOD_STUDIO_EVENT_PROPERTY,
    value: c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        if index != sys::FMOD_STUDIO_EVENT_PROPERTY_CHANNELPRIORITY {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        instance.priority = value;
        Ok(())
    })
}

unsafe extern "C" fn inst_start(event: *mut Inst) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        instance.position = 0;
        if instance.state == sys::FMOD_STUDIO_PLAYBACK_PLAYING {
            instance.queued.push(sys::FMOD_STUDIO_EVENT_CALLBACK_RESTARTED);
        } else {
            instance.state = sys::FMOD_STUDIO_PLAYBACK_STARTING;
        }
        Ok(())
    })
}

unsafe extern "C" fn inst_stop(event: *mut Inst, mode: sys::FMOD_STUDIO_STOP_MODE) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        if instance.state == sys::FMOD_STUDIO_PLAYBACK_STOPPED {
            return Ok(());
        }
        match mode {
            sys::FMOD_STUDIO_STOP_IMMEDIATE => {
                instance.state = sys::FMOD_STUDIO_PLAYBACK_STOPPED;
                instance.queued.push(sys::FMOD_STUDIO_EVENT_CALLBACK_STOPPED);
            }
            sys::FMOD_STUDIO_STOP_ALLOWFADEOUT => {
                instance.state = sys::FMOD_STUDIO_PLAYBACK_STOPPING;
            }
            _ => return Err(sys::FMOD_ERR_INVALID_PARAM),
        }
        Ok(())
    })
}

unsafe extern "C" fn inst_get_channel_group(
    event: *mut Inst,
    out: *mut *mut sys::FMOD_CHANNELGROUP,
) -> sys::FMOD_RESULT {
    run(|s| {
        let group = s.instance(id(event))?.group;
        unsafe { put(out, token(group)) }
    })
}

unsafe extern "C" fn inst_release(event: *mut Inst) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        instance.released = true;
        if instance.state == sys::FMOD_STUDIO_PLAYBACK_STOPPED && instance.queued.is_empty() {
            s.remove_instance(id(event));
        }
        Ok(())
    })
}

unsafe extern "C" fn inst_get_parameter(
    event: *mut Inst,
    name: *const c_char,
    out: *mut *mut sys::FMOD_STUDIO_PARAMETERINSTANCE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        let index = parameter_index(&unsafe { text(name) }?)?;
        let parameter = instance.parameters[index];
        unsafe { put(out, token(parameter)) }
    })
}

unsafe extern "C" fn inst_get_parameter_by_index(
    event: *mut Inst,
    index: c_int,
    out: *mut *mut sys::FMOD_STUDIO_PARAMETERINSTANCE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let instance = s.instance(id(event))?;
        let parameter = usize::try_from(index)
            .ok()
            .and_then(|i| instance.parameters.get(i).copied())
            .ok_or(sys::FMOD_ERR_INVALID_PARAM)?;
        unsafe { put(out, token(parameter)) }
    })
}

unsafe extern "C" fn inst_set_parameter_value(
    event: *mut Inst,
    name: *const c_char,
    value: c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        let index = parameter_index(&unsafe { text(name) }?)?;
        let parameter = s.instance(id(event))?.parameters[index];
        s.parameter(parameter)?.set(value);
        Ok(())
    })
}

unsafe extern "C" fn inst_set_parameter_value_by_index(
    event: *mut Inst,
    index: c_int,
    value: c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        let parameter = usize::try_from(index)
            .ok()
            .and_then(|i| s.instance(id(event)).ok()?.parameters.get(i).copied());
        let Some(parameter) = parameter else {
            s.instance(id(event))?;
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        };
        s.parameter(parameter)?.set(value);
        Ok(())
    })
}

unsafe extern "C" fn inst_get_cue(
    event: *mut Inst,
    name: *const c_char,
    out: *mut *mut sys::FMOD_STUDIO_CUEINSTANCE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let cue = s.instance(id(event))?.cue;
        if unsafe { text(name) }? != CUE_NAME {
            return Err(sys::FMOD_ERR_EVENT_NOTFOUND);
        }
        unsafe { put(out, token(cue)) }
    })
}

unsafe extern "C" fn inst_get_cue_by_index(
    event: *mut Inst,
    index: c_int,
    out: *mut *mut sys::FMOD_STUDIO_CUEINSTANCE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let cue = s.instance(id(event))?.cue;
        if index != 0 {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        unsafe { put(out, token(cue)) }
    })
}

unsafe extern "C" fn inst_create_sub_event(
    event: *mut Inst,
    name: *const c_char,
    out: *mut *mut Inst,
) -> sys::FMOD_RESULT {
    run(|s| {
        let parent = s.instance(id(event))?.event;
        let (system, bank, path) = {
            let e = s.event(parent)?;
            (e.system, e.bank, e.path.clone())
        };
        let nested = format!("{}/{}", path, unsafe { text(name) }?);
        let sub = s
            .find_path(system, &nested)
            .filter(|found| s.objects.get(found).is_some_and(|e| matches!(&e.object, Object::Event(ev) if ev.bank == bank)))
            .ok_or(sys::FMOD_ERR_EVENT_NOTFOUND)?;
        let instance = s.create_instance(sub)?;
        unsafe { put(out, token(instance)) }
    })
}

unsafe extern "C" fn inst_set_callback(
    event: *mut Inst,
    callback: sys::FMOD_STUDIO_EVENT_CALLBACK,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.instance(id(event))?.callback = callback;
        Ok(())
    })
}

unsafe extern "C" fn inst_get_user_data(event: *mut Inst, out: *mut *mut c_void) -> sys::FMOD_RESULT {
    run(|s| {
        let data = s.instance(id(event))?.user_data;
        unsafe { put(out, token(data)) }
    })
}

unsafe extern "C" fn inst_set_user_data(event: *mut Inst, data: *mut c_void) -> sys::FMOD_RESULT {
    run(|s| {
        s.instance(id(event))?.user_data = data as usize;
        Ok(())
    })
}

unsafe extern "C" fn cue_trigger(cue: *mut sys::FMOD_STUDIO_CUEINSTANCE) -> sys::FMOD_RESULT {
    run(|s| {
        s.cue(id(cue))?.triggers += 1;
        Ok(())
    })
}

unsafe extern "C" fn param_get_description(
    parameter: *mut sys::FMOD_STUDIO_PARAMETERINSTANCE,
    out: *mut sys::FMOD_STUDIO_PARAMETER_DESCRIPTION,
) -> sys::FMOD_RESULT {
    run(|s| {
        let index = s.parameter(id(parameter))?.index;
        unsafe { put(out, parameter_description(index)) }
    })
}

unsafe extern "C" fn param_get_value(
    parameter: *mut sys::FMOD_STUDIO_PARAMETERINSTANCE,
    out: *mut c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        let value = s.parameter(id(parameter))?.value;
        unsafe { put(out, value) }
    })
}

unsafe extern "C" fn param_set_value(
    parameter: *mut sys::FMOD_STUDIO_PARAMETERINSTANCE,
    value: c_float,
) -> sys::FMOD_RESULT {
    run(|s| {
        s.parameter(id(parameter))?.set(value);
        Ok(())
    })
}

// =============================================================================
// Entry points: mixer strips and banks
// =============================================================================

type Strip = sys::FMOD_STUDIO_MIXERSTRIP;
type Bank = sys::FMOD_STUDIO_BANK;

unsafe extern "C" fn strip_get_id(strip: *mut Strip, out: *mut sys::FMOD_GUID) -> sys::FMOD_RESULT {
    run(|s| {
        s.strip(id(strip))?;
        unsafe { put(out, guid_of(id(strip))) }
    })
}

unsafe extern "C" fn strip_get_path(
    strip: *mut Strip,
    buf: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> sys::FMOD_RESULT {
    if let Err(rc) = state().strip(id(strip)) {
        return rc;
    }
    read_path(id(strip), buf, size, retrieved)
}

unsafe extern "C" fn strip_get_fader_level(strip: *mut Strip, out: *mut c_float) -> sys::FMOD_RESULT {
    run(|s| {
        let level = s.strip(id(strip))?.fader;
        unsafe { put(out, level) }
    })
}

unsafe extern "C" fn strip_set_fader_level(strip: *mut Strip, value: c_float) -> sys::FMOD_RESULT {
    run(|s| {
        s.strip(id(strip))?.fader = value;
        Ok(())
    })
}

unsafe extern "C" fn strip_get_paused(strip: *mut Strip, out: *mut sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        let paused = s.strip(id(strip))?.paused;
        unsafe { put_bool(out, paused) }
    })
}

unsafe extern "C" fn strip_set_paused(strip: *mut Strip, paused: sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        s.strip(id(strip))?.paused = paused != 0;
        Ok(())
    })
}

unsafe extern "C" fn strip_get_mute(strip: *mut Strip, out: *mut sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        let mute = s.strip(id(strip))?.mute;
        unsafe { put_bool(out, mute) }
    })
}

unsafe extern "C" fn strip_set_mute(strip: *mut Strip, mute: sys::FMOD_BOOL) -> sys::FMOD_RESULT {
    run(|s| {
        s.strip(id(strip))?.mute = mute != 0;
        Ok(())
    })
}

unsafe extern "C" fn strip_stop_all_events(
    strip: *mut Strip,
    mode: sys::FMOD_STUDIO_STOP_MODE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let strip = s.strip(id(strip))?;
        if mode != sys::FMOD_STUDIO_STOP_IMMEDIATE && mode != sys::FMOD_STUDIO_STOP_ALLOWFADEOUT {
            return Err(sys::FMOD_ERR_INVALID_PARAM);
        }
        strip.stops += 1;
        Ok(())
    })
}

unsafe extern "C" fn strip_get_channel_group(
    strip: *mut Strip,
    out: *mut *mut sys::FMOD_CHANNELGROUP,
) -> sys::FMOD_RESULT {
    run(|s| {
        let group = s.strip(id(strip))?.group;
        unsafe { put(out, token(group)) }
    })
}

unsafe extern "C" fn strip_get_loading_state(
    strip: *mut Strip,
    out: *mut sys::FMOD_STUDIO_LOADING_STATE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let bank = s.strip(id(strip))?.bank;
        let loading = s.bank(bank)?.state;
        unsafe { put(out, loading) }
    })
}

unsafe extern "C" fn strip_release(strip: *mut Strip) -> sys::FMOD_RESULT {
    run(|s| s.strip(id(strip)).map(|_| ()))
}

unsafe extern "C" fn bank_get_id(bank: *mut Bank, out: *mut sys::FMOD_GUID) -> sys::FMOD_RESULT {
    run(|s| {
        s.bank(id(bank))?;
        unsafe { put(out, guid_of(id(bank))) }
    })
}

unsafe extern "C" fn bank_get_path(
    bank: *mut Bank,
    buf: *mut c_char,
    size: c_int,
    retrieved: *mut c_int,
) -> sys::FMOD_RESULT {
    if let Err(rc) = state().bank(id(bank)) {
        return rc;
    }
    read_path(id(bank), buf, size, retrieved)
}

unsafe extern "C" fn bank_unload(bank: *mut Bank) -> sys::FMOD_RESULT {
    run(|s| s.unload_bank(id(bank)))
}

unsafe extern "C" fn bank_load_sample_data(bank: *mut Bank) -> sys::FMOD_RESULT {
    run(|s| {
        let bank = s.bank(id(bank))?;
        if bank.samples != sys::FMOD_STUDIO_LOADING_STATE_LOADED {
            bank.samples = sys::FMOD_STUDIO_LOADING_STATE_LOADING;
        }
        Ok(())
    })
}

unsafe extern "C" fn bank_unload_sample_data(bank: *mut Bank) -> sys::FMOD_RESULT {
    run(|s| {
        s.bank(id(bank))?.samples = sys::FMOD_STUDIO_LOADING_STATE_UNLOADED;
        Ok(())
    })
}

unsafe extern "C" fn bank_get_loading_state(
    bank: *mut Bank,
    out: *mut sys::FMOD_STUDIO_LOADING_STATE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let loading = s.bank(id(bank))?.state;
        unsafe { put(out, loading) }
    })
}

unsafe extern "C" fn bank_get_sample_loading_state(
    bank: *mut Bank,
    out: *mut sys::FMOD_STUDIO_LOADING_STATE,
) -> sys::FMOD_RESULT {
    run(|s| {
        let samples = s.bank(id(bank))?.samples;
        unsafe { put(out, samples) }
    })
}

unsafe extern "C" fn bank_get_event_count(bank: *mut Bank, count: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        let n = s.bank(id(bank))?.events.len();
        unsafe { put(count, n as c_int) }
    })
}

unsafe extern "C" fn bank_get_event_list(
    bank: *mut Bank,
    array: *mut *mut Desc,
    capacity: c_int,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let events = s.bank(id(bank))?.events.clone();
        unsafe { put_list(&events, s.extra_items(id(bank)), array, capacity, count) }
    })
}

unsafe extern "C" fn bank_get_mixer_strip_count(bank: *mut Bank, count: *mut c_int) -> sys::FMOD_RESULT {
    run(|s| {
        let n = s.bank(id(bank))?.strips.len();
        unsafe { put(count, n as c_int) }
    })
}

unsafe extern "C" fn bank_get_mixer_strip_list(
    bank: *mut Bank,
    array: *mut *mut Strip,
    capacity: c_int,
    count: *mut c_int,
) -> sys::FMOD_RESULT {
    run(|s| {
        let strips = s.bank(id(bank))?.strips.clone();
        unsafe { put_list(&strips, s.extra_items(id(bank)), array, capacity, count) }
    })
}

// =============================================================================
// Function table and test hooks
// =============================================================================

static API: StudioApi = StudioApi {
    FMOD_Studio_ParseID: Some(parse_id),

    FMOD_Studio_System_Create: Some(system_create),
    FMOD_Studio_System_SetAdvancedSettings: Some(system_set_advanced_settings),
    FMOD_Studio_System_GetAdvancedSettings: Some(system_get_advanced_settings),
    FMOD_Studio_System_Initialize: Some(system_initialize),
    FMOD_Studio_System_Release: Some(system_release),
    FMOD_Studio_System_Update: Some(system_update),
    FMOD_Studio_System_GetLowLevelSystem: Some(system_get_low_level_system),
    FMOD_Studio_System_GetEvent: Some(system_get_event),
    FMOD_Studio_System_GetMixerStrip: Some(system_get_mixer_strip),
    FMOD_Studio_System_GetBank: Some(system_get_bank),
    FMOD_Studio_System_GetSoundInfo: Some(system_get_sound_info),
    FMOD_Studio_System_LookupID: Some(system_lookup_id),
    FMOD_Studio_System_LookupPath: Some(system_lookup_path),
    FMOD_Studio_System_GetListenerAttributes: Some(system_get_listener_attributes),
    FMOD_Studio_System_SetListenerAttributes: Some(system_set_listener_attributes),
    FMOD_Studio_System_LoadBankFile: Some(system_load_bank_file),
    FMOD_Studio_System_LoadBankMemory: Some(system_load_bank_memory),
    FMOD_Studio_System_LoadBankCustom: Some(system_load_bank_custom),
    FMOD_Studio_System_UnloadAll: Some(system_unload_all),
    FMOD_Studio_System_FlushCommands: Some(system_flush_commands),
    FMOD_Studio_System_StartRecordCommands: Some(system_start_record_commands),
    FMOD_Studio_System_StopRecordCommands: Some(system_stop_record_commands),
    FMOD_Studio_System_PlaybackCommands: Some(system_playback_commands),
    FMOD_Studio_System_GetBankCount: Some(system_get_bank_count),
    FMOD_Studio_System_GetBankList: Some(system_get_bank_list),
    FMOD_Studio_System_GetCPUUsage: Some(system_get_cpu_usage),
    FMOD_Studio_System_GetBufferUsage: Some(system_get_buffer_usage),
    FMOD_Studio_System_ResetBufferUsage: Some(system_reset_buffer_usage),
    FMOD_Studio_System_SetCallback: Some(system_set_callback),
    FMOD_Studio_System_GetUserData: Some(system_get_user_data),
    FMOD_Studio_System_SetUserData: Some(system_set_user_data),

    FMOD_Studio_EventDescription_GetID: Some(desc_get_id),
    FMOD_Studio_EventDescription_GetPath: Some(desc_get_path),
    FMOD_Studio_EventDescription_GetParameterCount: Some(desc_get_parameter_count),
    FMOD_Studio_EventDescription_GetParameterByIndex: Some(desc_get_parameter_by_index),
    FMOD_Studio_EventDescription_GetParameter: Some(desc_get_parameter),
    FMOD_Studio_EventDescription_GetUserPropertyCount: Some(desc_get_user_property_count),
    FMOD_Studio_EventDescription_GetUserPropertyByIndex: Some(desc_get_user_property_by_index),
    FMOD_Studio_EventDescription_GetUserProperty: Some(desc_get_user_property),
    FMOD_Studio_EventDescription_GetLength: Some(desc_get_length),
    FMOD_Studio_EventDescription_GetMinimumDistance: Some(desc_get_minimum_distance),
    FMOD_Studio_EventDescription_GetMaximumDistance: Some(desc_get_maximum_distance),
    FMOD_Studio_EventDescription_IsOneshot: Some(desc_is_oneshot),
    FMOD_Studio_EventDescription_IsStream: Some(desc_is_stream),
    FMOD_Studio_EventDescription_Is3D: Some(desc_is_3d),
    FMOD_Studio_EventDescription_CreateInstance: Some(desc_create_instance),
    FMOD_Studio_EventDescription_GetInstanceCount: Some(desc_get_instance_count),
    FMOD_Studio_EventDescription_GetInstanceList: Some(desc_get_instance_list),
    FMOD_Studio_EventDescription_LoadSampleData: Some(desc_load_sample_data),
    FMOD_Studio_EventDescription_UnloadSampleData: Some(desc_unload_sample_data),
    FMOD_Studio_EventDescription_GetSampleLoadingState: Some(desc_get_sample_loading_state),
    FMOD_Studio_EventDescription_ReleaseAllInstances: Some(desc_release_all_instances),
    FMOD_Studio_EventDescription_SetCallback: Some(desc_set_callback),
    FMOD_Studio_EventDescription_GetUserData: Some(desc_get_user_data),
    FMOD_Studio_EventDescription_SetUserData: Some(desc_set_user_data),

    FMOD_Studio_EventInstance_GetDescription: Some(inst_get_description),
    FMOD_Studio_EventInstance_GetVolume: Some(inst_get_volume),
    FMOD_Studio_EventInstance_SetVolume: Some(inst_set_volume),
    FMOD_Studio_EventInstance_GetPitch: Some(inst_get_pitch),
    FMOD_Studio_EventInstance_SetPitch: Some(inst_set_pitch),
    FMOD_Studio_EventInstance_Get3DAttributes: Some(inst_get_3d_attributes),
    FMOD_Studio_EventInstance_Set3DAttributes: Some(inst_set_3d_attributes),
    FMOD_Studio_EventInstance_GetProperty: Some(inst_get_property),
    FMOD_Studio_EventInstance_SetProperty: Some(inst_set_property),
    FMOD_Studio_EventInstance_GetPaused: Some(inst_get_paused),
    FMOD_Studio_EventInstance_SetPaused: Some(inst_set_paused),
    FMOD_Studio_EventInstance_Start: Some(inst_start),
    FMOD_Studio_EventInstance_Stop: Some(inst_stop),
    FMOD_Studio_EventInstance_GetTimelinePosition: Some(inst_get_timeline_position),
    FMOD_Studio_EventInstance_SetTimelinePosition: Some(inst_set_timeline_position),
    FMOD_Studio_EventInstance_GetPlaybackState: Some(inst_get_playback_state),
    FMOD_Studio_EventInstance_GetChannelGroup: Some(inst_get_channel_group),
    FMOD_Studio_EventInstance_Release: Some(inst_release),
    FMOD_Studio_EventInstance_IsVirtual: Some(inst_is_virtual),
    FMOD_Studio_EventInstance_GetParameter: Some(inst_get_parameter),
    FMOD_Studio_EventInstance_GetParameterByIndex: Some(inst_get_parameter_by_index),
    FMOD_Studio_EventInstance_GetParameterCount: Some(inst_get_parameter_count),
    FMOD_Studio_EventInstance_SetParameterValue: Some(inst_set_parameter_value),
    FMOD_Studio_EventInstance_SetParameterValueByIndex: Some(inst_set_parameter_value_by_index),
    FMOD_Studio_EventInstance_GetCue: Some(inst_get_cue),
    FMOD_Studio_EventInstance_GetCueByIndex: Some(inst_get_cue_by_index),
    FMOD_Studio_EventInstance_GetCueCount: Some(inst_get_cue_count),
    FMOD_Studio_EventInstance_CreateSubEvent: Some(inst_create_sub_event),
    FMOD_Studio_EventInstance_SetCallback: Some(inst_set_callback),
    FMOD_Studio_EventInstance_GetUserData: Some(inst_get_user_data),
    FMOD_Studio_EventInstance_SetUserData: Some(inst_set_user_data),

    FMOD_Studio_CueInstance_Trigger: Some(cue_trigger),

    FMOD_Studio_ParameterInstance_GetDescription: Some(param_get_description),
    FMOD_Studio_ParameterInstance_GetValue: Some(param_get_value),
    FMOD_Studio_ParameterInstance_SetValue: Some(param_set_value),

    FMOD_Studio_MixerStrip_GetID: Some(strip_get_id),
    FMOD_Studio_MixerStrip_GetPath: Some(strip_get_path),
    FMOD_Studio_MixerStrip_GetFaderLevel: Some(strip_get_fader_level),
    FMOD_Studio_MixerStrip_SetFaderLevel: Some(strip_set_fader_level),
    FMOD_Studio_MixerStrip_GetPaused: Some(strip_get_paused),
    FMOD_Studio_MixerStrip_SetPaused: Some(strip_set_paused),
    FMOD_Studio_MixerStrip_GetMute: Some(strip_get_mute),
    FMOD_Studio_MixerStrip_SetMute: Some(strip_set_mute),
    FMOD_Studio_MixerStrip_StopAllEvents: Some(strip_stop_all_events),
    FMOD_Studio_MixerStrip_GetChannelGroup: Some(strip_get_channel_group),
    FMOD_Studio_MixerStrip_GetLoadingState: Some(strip_get_loading_state),
    FMOD_Studio_MixerStrip_Release: Some(strip_release),

    FMOD_Studio_Bank_GetID: Some(bank_get_id),
    FMOD_Studio_Bank_GetPath: Some(bank_get_path),
    FMOD_Studio_Bank_Unload: Some(bank_unload),
    FMOD_Studio_Bank_LoadSampleData: Some(bank_load_sample_data),
    FMOD_Studio_Bank_UnloadSampleData: Some(bank_unload_sample_data),
    FMOD_Studio_Bank_GetLoadingState: Some(bank_get_loading_state),
    FMOD_Studio_Bank_GetSampleLoadingState: Some(bank_get_sample_loading_state),
    FMOD_Studio_Bank_GetEventCount: Some(bank_get_event_count),
    FMOD_Studio_Bank_GetEventList: Some(bank_get_event_list),
    FMOD_Studio_Bank_GetMixerStripCount: Some(bank_get_mixer_strip_count),
    FMOD_Studio_Bank_GetMixerStripList: Some(bank_get_mixer_strip_list),
};

/// Function table backed by this module
pub(crate) fn api() -> &'static StudioApi {
    &API
}

/// Bank file contents declaring `bank` with the given events and strips
pub(crate) fn bank_file(bank: &str, events: &[&str], strips: &[&str]) -> Vec<u8> {
    let mut data = BANK_MAGIC.to_vec();
    for line in std::iter::once(&bank).chain(events).chain(strips) {
        data.extend_from_slice(line.as_bytes());
        data.push(b'\n');
    }
    data
}

/// Whether a token still names a live object
pub(crate) fn exists(token: usize) -> bool {
    state().objects.contains_key(&token)
}

/// Buffer sizes of every path read made through `token`
pub(crate) fn path_reads(token: usize) -> Vec<c_int> {
    state()
        .objects
        .get(&token)
        .map(|e| e.path_reads.clone())
        .unwrap_or_default()
}

/// Make list fills through `token` report `extra` more items than counted
pub(crate) fn grow_lists(token: usize, extra: c_int) {
    if let Some(entry) = state().objects.get_mut(&token) {
        entry.extra_items = extra;
    }
}

pub(crate) fn cue_triggers(token: usize) -> u32 {
    state().cue(token).map_or(0, |c| c.triggers)
}

pub(crate) fn strip_stops(token: usize) -> u32 {
    state().strip(token).map_or(0, |s| s.stops)
}

/// Sound assigned by the last programmer sound callback of an instance
pub(crate) fn programmer_sound(token: usize) -> usize {
    state().instance(token).map_or(0, |i| i.programmer_sound)
}

/// Value last passed in for a parameter instance, before clamping
pub(crate) fn requested_value(token: usize) -> Option<f32> {
    state().parameter(token).ok().map(|p| p.requested)
}

/// Results returned to native by event callbacks of an instance
pub(crate) fn event_callback_results(token: usize) -> Vec<sys::FMOD_RESULT> {
    state()
        .instance(token)
        .map(|i| i.callback_results.clone())
        .unwrap_or_default()
}

/// Results returned to native by system callbacks
pub(crate) fn system_callback_results(token: usize) -> Vec<sys::FMOD_RESULT> {
    state()
        .system(token)
        .map(|s| s.callback_results.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bank_layout() {
        let data = bank_file("bank:/Master", &["event:/UI/Click"], &["bus:/SFX"]);
        let layout = parse_bank(&data).unwrap();
        assert_eq!(layout.path, "bank:/Master");
        assert_eq!(layout.events, ["event:/UI/Click"]);
        assert_eq!(layout.strips, ["bus:/SFX"]);
    }

    #[test]
    fn test_parse_bank_rejects_garbage() {
        assert_eq!(parse_bank(b"RIFF").err(), Some(sys::FMOD_ERR_FORMAT));
        assert_eq!(parse_bank(b"BANK\nevent:/A\n").err(), Some(sys::FMOD_ERR_FORMAT));
        assert_eq!(parse_bank(b"BANK\nbank:/A\nsnapshot:/B\n").err(), Some(sys::FMOD_ERR_FORMAT));
    }

    #[test]
    fn test_parse_guid() {
        let guid = parse_guid("{0000002a-0001-0002-0304-050607080900}").unwrap();
        assert_eq!(guid.Data1, 0x2a);
        assert_eq!(guid.Data2, 1);
        assert_eq!(guid.Data4, [3, 4, 5, 6, 7, 8, 9, 0]);
        assert!(parse_guid("{0000002a-0001-0002-0304-05060708090}").is_none());
        assert!(parse_guid("0000002a-0001-0002-0304-050607080900").is_none());
        assert!(parse_guid("{0000002g-0001-0002-0304-050607080900}").is_none());
    }

    #[test]
    fn test_put_path_truncates() {
        let mut buf = [0 as c_char; 4];
        let mut retrieved = 0;
        let rc = unsafe { put_path("bus:/SFX", buf.as_mut_ptr(), 4, &mut retrieved) };
        assert_eq!(rc, Err(sys::FMOD_ERR_TRUNCATED));
        assert_eq!(retrieved, 9);
        assert_eq!(buf[3], 0);
    }
}
