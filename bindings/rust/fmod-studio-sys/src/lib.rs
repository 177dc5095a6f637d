// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Raw FFI bindings for the FMOD Studio C API
//!
//! This crate provides unsafe, low-level bindings to the FMOD Studio runtime.
//! For a safe, idiomatic Rust API, use the `fmod-studio` crate instead.
//!
//! Every entry point is exposed through [`StudioApi`], a flat table with one
//! function pointer per native symbol. The table is filled either at runtime
//! from a loaded shared library ([`StudioApi::load`]) or, with the `link`
//! feature, from symbols resolved by the linker ([`linked::API`]).
//!
//! # Safety
//!
//! All functions in this crate are unsafe and follow C calling conventions.
//! The caller is responsible for:
//! - Passing handles that were produced by the same native system
//! - Keeping the library loaded while any function pointer from it is in use
//! - Null-terminating every string argument
//! - Not releasing a system from within one of its own callbacks
//!
//! # Example
//!
//! ```no_run
//! use fmod_studio_sys::*;
//!
//! unsafe {
//!     let (lib, api) = StudioApi::load("libfmodstudio.so").unwrap();
//!     let create = api.FMOD_Studio_System_Create.unwrap();
//!     let mut system = std::ptr::null_mut();
//!     if create(&mut system, FMOD_VERSION) != FMOD_OK {
//!         panic!("Failed to create system");
//!     }
//!
//!     // ... use the system ...
//!
//!     api.FMOD_Studio_System_Release.unwrap()(system);
//!     drop(lib);
//! }
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

use std::ffi::{c_char, c_float, c_int, c_uint, c_void};

/// Header version passed to `FMOD_Studio_System_Create` for ABI checking
pub const FMOD_VERSION: c_uint = 0x0001_0508;

// =============================================================================
// Scalar types
// =============================================================================

pub type FMOD_RESULT = c_int;
pub type FMOD_BOOL = c_int;
pub type FMOD_MODE = c_uint;
pub type FMOD_INITFLAGS = c_uint;
pub type FMOD_STUDIO_INITFLAGS = c_uint;
pub type FMOD_STUDIO_LOAD_BANK_FLAGS = c_uint;
pub type FMOD_STUDIO_RECORD_COMMANDS_FLAGS = c_uint;
pub type FMOD_STUDIO_SYSTEM_CALLBACK_TYPE = c_uint;
pub type FMOD_STUDIO_LOADING_MODE = c_int;
pub type FMOD_STUDIO_LOAD_MEMORY_MODE = c_int;
pub type FMOD_STUDIO_LOADING_STATE = c_int;
pub type FMOD_STUDIO_STOP_MODE = c_int;
pub type FMOD_STUDIO_PLAYBACK_STATE = c_int;
pub type FMOD_STUDIO_PARAMETER_TYPE = c_int;
pub type FMOD_STUDIO_USER_PROPERTY_TYPE = c_int;
pub type FMOD_STUDIO_EVENT_PROPERTY = c_int;
pub type FMOD_STUDIO_EVENT_CALLBACK_TYPE = c_int;

// =============================================================================
// Opaque handles
// =============================================================================

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    FMOD_STUDIO_SYSTEM,
    FMOD_STUDIO_BANK,
    FMOD_STUDIO_EVENTDESCRIPTION,
    FMOD_STUDIO_EVENTINSTANCE,
    FMOD_STUDIO_MIXERSTRIP,
    FMOD_STUDIO_PARAMETERINSTANCE,
    FMOD_STUDIO_CUEINSTANCE,
    FMOD_SYSTEM,
    FMOD_CHANNELGROUP,
    FMOD_SOUND,
);

// =============================================================================
// Result codes
// =============================================================================

pub const FMOD_OK: FMOD_RESULT = 0;
pub const FMOD_ERR_BADCOMMAND: FMOD_RESULT = 1;
pub const FMOD_ERR_CHANNEL_ALLOC: FMOD_RESULT = 2;
pub const FMOD_ERR_CHANNEL_STOLEN: FMOD_RESULT = 3;
pub const FMOD_ERR_DMA: FMOD_RESULT = 4;
pub const FMOD_ERR_DSP_CONNECTION: FMOD_RESULT = 5;
pub const FMOD_ERR_DSP_DONTPROCESS: FMOD_RESULT = 6;
pub const FMOD_ERR_DSP_FORMAT: FMOD_RESULT = 7;
pub const FMOD_ERR_DSP_INUSE: FMOD_RESULT = 8;
pub const FMOD_ERR_DSP_NOTFOUND: FMOD_RESULT = 9;
pub const FMOD_ERR_DSP_RESERVED: FMOD_RESULT = 10;
pub const FMOD_ERR_DSP_SILENCE: FMOD_RESULT = 11;
pub const FMOD_ERR_DSP_TYPE: FMOD_RESULT = 12;
pub const FMOD_ERR_FILE_BAD: FMOD_RESULT = 13;
pub const FMOD_ERR_FILE_COULDNOTSEEK: FMOD_RESULT = 14;
pub const FMOD_ERR_FILE_DISKEJECTED: FMOD_RESULT = 15;
pub const FMOD_ERR_FILE_EOF: FMOD_RESULT = 16;
pub const FMOD_ERR_FILE_ENDOFDATA: FMOD_RESULT = 17;
pub const FMOD_ERR_FILE_NOTFOUND: FMOD_RESULT = 18;
pub const FMOD_ERR_FORMAT: FMOD_RESULT = 19;
pub const FMOD_ERR_HEADER_MISMATCH: FMOD_RESULT = 20;
pub const FMOD_ERR_HTTP: FMOD_RESULT = 21;
pub const FMOD_ERR_HTTP_ACCESS: FMOD_RESULT = 22;
pub const FMOD_ERR_HTTP_PROXY_AUTH: FMOD_RESULT = 23;
pub const FMOD_ERR_HTTP_SERVER_ERROR: FMOD_RESULT = 24;
pub const FMOD_ERR_HTTP_TIMEOUT: FMOD_RESULT = 25;
pub const FMOD_ERR_INITIALIZATION: FMOD_RESULT = 26;
pub const FMOD_ERR_INITIALIZED: FMOD_RESULT = 27;
pub const FMOD_ERR_INTERNAL: FMOD_RESULT = 28;
pub const FMOD_ERR_INVALID_FLOAT: FMOD_RESULT = 29;
pub const FMOD_ERR_INVALID_HANDLE: FMOD_RESULT = 30;
pub const FMOD_ERR_INVALID_PARAM: FMOD_RESULT = 31;
pub const FMOD_ERR_INVALID_POSITION: FMOD_RESULT = 32;
pub const FMOD_ERR_INVALID_SPEAKER: FMOD_RESULT = 33;
pub const FMOD_ERR_INVALID_SYNCPOINT: FMOD_RESULT = 34;
pub const FMOD_ERR_INVALID_THREAD: FMOD_RESULT = 35;
pub const FMOD_ERR_INVALID_VECTOR: FMOD_RESULT = 36;
pub const FMOD_ERR_MAXAUDIBLE: FMOD_RESULT = 37;
pub const FMOD_ERR_MEMORY: FMOD_RESULT = 38;
pub const FMOD_ERR_MEMORY_CANTPOINT: FMOD_RESULT = 39;
pub const FMOD_ERR_NEEDS3D: FMOD_RESULT = 40;
pub const FMOD_ERR_NEEDSHARDWARE: FMOD_RESULT = 41;
pub const FMOD_ERR_NET_CONNECT: FMOD_RESULT = 42;
pub const FMOD_ERR_NET_SOCKET_ERROR: FMOD_RESULT = 43;
pub const FMOD_ERR_NET_URL: FMOD_RESULT = 44;
pub const FMOD_ERR_NET_WOULD_BLOCK: FMOD_RESULT = 45;
pub const FMOD_ERR_NOTREADY: FMOD_RESULT = 46;
pub const FMOD_ERR_OUTPUT_ALLOCATED: FMOD_RESULT = 47;
pub const FMOD_ERR_OUTPUT_CREATEBUFFER: FMOD_RESULT = 48;
pub const FMOD_ERR_OUTPUT_DRIVERCALL: FMOD_RESULT = 49;
pub const FMOD_ERR_OUTPUT_FORMAT: FMOD_RESULT = 50;
pub const FMOD_ERR_OUTPUT_INIT: FMOD_RESULT = 51;
pub const FMOD_ERR_OUTPUT_NODRIVERS: FMOD_RESULT = 52;
pub const FMOD_ERR_PLUGIN: FMOD_RESULT = 53;
pub const FMOD_ERR_PLUGIN_MISSING: FMOD_RESULT = 54;
pub const FMOD_ERR_PLUGIN_RESOURCE: FMOD_RESULT = 55;
pub const FMOD_ERR_PLUGIN_VERSION: FMOD_RESULT = 56;
pub const FMOD_ERR_RECORD: FMOD_RESULT = 57;
pub const FMOD_ERR_REVERB_CHANNELGROUP: FMOD_RESULT = 58;
pub const FMOD_ERR_REVERB_INSTANCE: FMOD_RESULT = 59;
pub const FMOD_ERR_SUBSOUNDS: FMOD_RESULT = 60;
pub const FMOD_ERR_SUBSOUND_ALLOCATED: FMOD_RESULT = 61;
pub const FMOD_ERR_SUBSOUND_CANTMOVE: FMOD_RESULT = 62;
pub const FMOD_ERR_TAGNOTFOUND: FMOD_RESULT = 63;
pub const FMOD_ERR_TOOMANYCHANNELS: FMOD_RESULT = 64;
pub const FMOD_ERR_TRUNCATED: FMOD_RESULT = 65;
pub const FMOD_ERR_UNIMPLEMENTED: FMOD_RESULT = 66;
pub const FMOD_ERR_UNINITIALIZED: FMOD_RESULT = 67;
pub const FMOD_ERR_UNSUPPORTED: FMOD_RESULT = 68;
pub const FMOD_ERR_VERSION: FMOD_RESULT = 69;
pub const FMOD_ERR_EVENT_ALREADY_LOADED: FMOD_RESULT = 70;
pub const FMOD_ERR_EVENT_LIVEUPDATE_BUSY: FMOD_RESULT = 71;
pub const FMOD_ERR_EVENT_LIVEUPDATE_MISMATCH: FMOD_RESULT = 72;
pub const FMOD_ERR_EVENT_LIVEUPDATE_TIMEOUT: FMOD_RESULT = 73;
pub const FMOD_ERR_EVENT_NOTFOUND: FMOD_RESULT = 74;
pub const FMOD_ERR_STUDIO_UNINITIALIZED: FMOD_RESULT = 75;
pub const FMOD_ERR_STUDIO_NOT_LOADED: FMOD_RESULT = 76;
pub const FMOD_ERR_INVALID_STRING: FMOD_RESULT = 77;
pub const FMOD_ERR_ALREADY_LOCKED: FMOD_RESULT = 78;
pub const FMOD_ERR_NOT_LOCKED: FMOD_RESULT = 79;

// =============================================================================
// Enumerations and flags
// =============================================================================

pub const FMOD_TRUE: FMOD_BOOL = 1;
pub const FMOD_FALSE: FMOD_BOOL = 0;

pub const FMOD_STUDIO_LOADING_MODE_BEGIN_NOW: FMOD_STUDIO_LOADING_MODE = 0;
pub const FMOD_STUDIO_LOADING_MODE_PROHIBITED: FMOD_STUDIO_LOADING_MODE = 1;

pub const FMOD_STUDIO_LOAD_MEMORY: FMOD_STUDIO_LOAD_MEMORY_MODE = 0;
pub const FMOD_STUDIO_LOAD_MEMORY_POINT: FMOD_STUDIO_LOAD_MEMORY_MODE = 1;

pub const FMOD_STUDIO_STOP_ALLOWFADEOUT: FMOD_STUDIO_STOP_MODE = 0;
pub const FMOD_STUDIO_STOP_IMMEDIATE: FMOD_STUDIO_STOP_MODE = 1;

pub const FMOD_STUDIO_LOADING_STATE_UNLOADING: FMOD_STUDIO_LOADING_STATE = 0;
pub const FMOD_STUDIO_LOADING_STATE_UNLOADED: FMOD_STUDIO_LOADING_STATE = 1;
pub const FMOD_STUDIO_LOADING_STATE_LOADING: FMOD_STUDIO_LOADING_STATE = 2;
pub const FMOD_STUDIO_LOADING_STATE_LOADED: FMOD_STUDIO_LOADING_STATE = 3;

pub const FMOD_STUDIO_PLAYBACK_PLAYING: FMOD_STUDIO_PLAYBACK_STATE = 0;
pub const FMOD_STUDIO_PLAYBACK_IDLE: FMOD_STUDIO_PLAYBACK_STATE = 1;
pub const FMOD_STUDIO_PLAYBACK_SUSTAINING: FMOD_STUDIO_PLAYBACK_STATE = 2;
pub const FMOD_STUDIO_PLAYBACK_STOPPED: FMOD_STUDIO_PLAYBACK_STATE = 3;
pub const FMOD_STUDIO_PLAYBACK_STARTING: FMOD_STUDIO_PLAYBACK_STATE = 4;
pub const FMOD_STUDIO_PLAYBACK_STOPPING: FMOD_STUDIO_PLAYBACK_STATE = 5;

pub const FMOD_STUDIO_PARAMETER_GAME_CONTROLLED: FMOD_STUDIO_PARAMETER_TYPE = 0;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_DISTANCE: FMOD_STUDIO_PARAMETER_TYPE = 1;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_EVENT_CONE_ANGLE: FMOD_STUDIO_PARAMETER_TYPE = 2;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_EVENT_ORIENTATION: FMOD_STUDIO_PARAMETER_TYPE = 3;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_DIRECTION: FMOD_STUDIO_PARAMETER_TYPE = 4;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_ELEVATION: FMOD_STUDIO_PARAMETER_TYPE = 5;
pub const FMOD_STUDIO_PARAMETER_AUTOMATIC_LISTENER_ORIENTATION: FMOD_STUDIO_PARAMETER_TYPE = 6;

pub const FMOD_STUDIO_USER_PROPERTY_TYPE_INTEGER: FMOD_STUDIO_USER_PROPERTY_TYPE = 0;
pub const FMOD_STUDIO_USER_PROPERTY_TYPE_BOOLEAN: FMOD_STUDIO_USER_PROPERTY_TYPE = 1;
pub const FMOD_STUDIO_USER_PROPERTY_TYPE_FLOAT: FMOD_STUDIO_USER_PROPERTY_TYPE = 2;
pub const FMOD_STUDIO_USER_PROPERTY_TYPE_STRING: FMOD_STUDIO_USER_PROPERTY_TYPE = 3;

pub const FMOD_STUDIO_EVENT_PROPERTY_CHANNELPRIORITY: FMOD_STUDIO_EVENT_PROPERTY = 0;

pub const FMOD_STUDIO_EVENT_CALLBACK_STARTED: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 0;
pub const FMOD_STUDIO_EVENT_CALLBACK_STOPPED: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 1;
pub const FMOD_STUDIO_EVENT_CALLBACK_IDLE: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 2;
pub const FMOD_STUDIO_EVENT_CALLBACK_CREATE_PROGRAMMER_SOUND: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 3;
pub const FMOD_STUDIO_EVENT_CALLBACK_DESTROY_PROGRAMMER_SOUND: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 4;
pub const FMOD_STUDIO_EVENT_CALLBACK_RESTARTED: FMOD_STUDIO_EVENT_CALLBACK_TYPE = 5;

pub const FMOD_STUDIO_SYSTEM_CALLBACK_PREUPDATE: FMOD_STUDIO_SYSTEM_CALLBACK_TYPE = 0x0000_0001;
pub const FMOD_STUDIO_SYSTEM_CALLBACK_POSTUPDATE: FMOD_STUDIO_SYSTEM_CALLBACK_TYPE = 0x0000_0002;

pub const FMOD_STUDIO_INIT_NORMAL: FMOD_STUDIO_INITFLAGS = 0x0000_0000;
pub const FMOD_STUDIO_INIT_LIVEUPDATE: FMOD_STUDIO_INITFLAGS = 0x0000_0001;
pub const FMOD_STUDIO_INIT_ALLOW_MISSING_PLUGINS: FMOD_STUDIO_INITFLAGS = 0x0000_0002;
pub const FMOD_STUDIO_INIT_SYNCHRONOUS_UPDATE: FMOD_STUDIO_INITFLAGS = 0x0000_0004;

pub const FMOD_STUDIO_LOAD_BANK_NORMAL: FMOD_STUDIO_LOAD_BANK_FLAGS = 0x0000_0000;
pub const FMOD_STUDIO_LOAD_BANK_NONBLOCKING: FMOD_STUDIO_LOAD_BANK_FLAGS = 0x0000_0001;

pub const FMOD_STUDIO_RECORD_COMMANDS_NORMAL: FMOD_STUDIO_RECORD_COMMANDS_FLAGS = 0x0000_0000;
pub const FMOD_STUDIO_RECORD_COMMANDS_FILEFLUSH: FMOD_STUDIO_RECORD_COMMANDS_FLAGS = 0x0000_0001;

pub const FMOD_INIT_NORMAL: FMOD_INITFLAGS = 0x0000_0000;
pub const FMOD_INIT_STREAM_FROM_UPDATE: FMOD_INITFLAGS = 0x0000_0001;
pub const FMOD_INIT_3D_RIGHTHANDED: FMOD_INITFLAGS = 0x0000_0004;
pub const FMOD_INIT_CHANNEL_LOWPASS: FMOD_INITFLAGS = 0x0000_0100;
pub const FMOD_INIT_PROFILE_ENABLE: FMOD_INITFLAGS = 0x0001_0000;

pub const FMOD_DEFAULT: FMOD_MODE = 0x0000_0000;
pub const FMOD_LOOP_OFF: FMOD_MODE = 0x0000_0001;
pub const FMOD_LOOP_NORMAL: FMOD_MODE = 0x0000_0002;
pub const FMOD_2D: FMOD_MODE = 0x0000_0008;
pub const FMOD_3D: FMOD_MODE = 0x0000_0010;
pub const FMOD_CREATESTREAM: FMOD_MODE = 0x0000_0080;
pub const FMOD_CREATESAMPLE: FMOD_MODE = 0x0000_0100;
pub const FMOD_CREATECOMPRESSEDSAMPLE: FMOD_MODE = 0x0000_0200;
pub const FMOD_OPENUSER: FMOD_MODE = 0x0000_0400;
pub const FMOD_OPENMEMORY: FMOD_MODE = 0x0000_0800;
pub const FMOD_OPENRAW: FMOD_MODE = 0x0000_1000;
pub const FMOD_NONBLOCKING: FMOD_MODE = 0x0001_0000;
pub const FMOD_OPENMEMORY_POINT: FMOD_MODE = 0x1000_0000;

// =============================================================================
// Callback typedefs
// =============================================================================

pub type FMOD_FILE_OPENCALLBACK = Option<
    unsafe extern "C" fn(
        name: *const c_char,
        filesize: *mut c_uint,
        handle: *mut *mut c_void,
        userdata: *mut c_void,
    ) -> FMOD_RESULT,
>;

pub type FMOD_FILE_CLOSECALLBACK =
    Option<unsafe extern "C" fn(handle: *mut c_void, userdata: *mut c_void) -> FMOD_RESULT>;

pub type FMOD_FILE_READCALLBACK = Option<
    unsafe extern "C" fn(
        handle: *mut c_void,
        buffer: *mut c_void,
        sizebytes: c_uint,
        bytesread: *mut c_uint,
        userdata: *mut c_void,
    ) -> FMOD_RESULT,
>;

pub type FMOD_FILE_SEEKCALLBACK = Option<
    unsafe extern "C" fn(handle: *mut c_void, pos: c_uint, userdata: *mut c_void) -> FMOD_RESULT,
>;

pub type FMOD_STUDIO_SYSTEM_CALLBACK = Option<
    unsafe extern "C" fn(
        system: *mut FMOD_STUDIO_SYSTEM,
        type_: FMOD_STUDIO_SYSTEM_CALLBACK_TYPE,
        commanddata: *mut c_void,
        userdata: *mut c_void,
    ) -> FMOD_RESULT,
>;

pub type FMOD_STUDIO_EVENT_CALLBACK = Option<
    unsafe extern "C" fn(
        type_: FMOD_STUDIO_EVENT_CALLBACK_TYPE,
        event: *mut FMOD_STUDIO_EVENTINSTANCE,
        parameters: *mut c_void,
    ) -> FMOD_RESULT,
>;

// =============================================================================
// Fixed-layout records
// =============================================================================

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FMOD_GUID {
    pub Data1: c_uint,
    pub Data2: u16,
    pub Data3: u16,
    pub Data4: [u8; 8],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FMOD_VECTOR {
    pub x: c_float,
    pub y: c_float,
    pub z: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FMOD_3D_ATTRIBUTES {
    pub position: FMOD_VECTOR,
    pub velocity: FMOD_VECTOR,
    pub forward: FMOD_VECTOR,
    pub up: FMOD_VECTOR,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FMOD_STUDIO_ADVANCEDSETTINGS {
    /// Size of this structure, written by the caller
    pub cbSize: c_int,
    pub commandQueueSize: c_int,
    pub handleInitialSize: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FMOD_STUDIO_CPU_USAGE {
    pub dspUsage: c_float,
    pub streamUsage: c_float,
    pub geometryUsage: c_float,
    pub updateUsage: c_float,
    pub studioUsage: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FMOD_STUDIO_BUFFER_INFO {
    pub currentUsage: c_int,
    pub peakUsage: c_int,
    pub capacity: c_int,
    pub stallCount: c_int,
    pub stallTime: c_float,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FMOD_STUDIO_BUFFER_USAGE {
    pub studioCommandQueue: FMOD_STUDIO_BUFFER_INFO,
    pub studioHandle: FMOD_STUDIO_BUFFER_INFO,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FMOD_STUDIO_BANK_INFO {
    /// Size of this structure, written by the caller
    pub size: c_int,
    pub userData: *mut c_void,
    /// If non-zero, `userData` is copied internally
    pub userDataLength: c_int,
    pub openCallback: FMOD_FILE_OPENCALLBACK,
    pub closeCallback: FMOD_FILE_CLOSECALLBACK,
    pub readCallback: FMOD_FILE_READCALLBACK,
    pub seekCallback: FMOD_FILE_SEEKCALLBACK,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FMOD_STUDIO_PARAMETER_DESCRIPTION {
    pub name: *const c_char,
    pub minimum: c_float,
    pub maximum: c_float,
    pub type_: FMOD_STUDIO_PARAMETER_TYPE,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union FMOD_STUDIO_USER_PROPERTY_VALUE {
    pub intValue: c_int,
    pub boolValue: FMOD_BOOL,
    pub floatValue: c_float,
    pub stringValue: *const c_char,
}

#[repr(C)]
#[derive(Clone, Copy)]
pub struct FMOD_STUDIO_USER_PROPERTY {
    pub name: *const c_char,
    pub type_: FMOD_STUDIO_USER_PROPERTY_TYPE,
    pub value: FMOD_STUDIO_USER_PROPERTY_VALUE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FMOD_STUDIO_PROGRAMMER_SOUND_PROPERTIES {
    pub name: *const c_char,
    pub sound: *mut FMOD_SOUND,
}

/// Low-level sound creation info (only passed through by the Studio layer)
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FMOD_CREATESOUNDEXINFO {
    pub cbsize: c_int,
    pub length: c_uint,
    pub fileoffset: c_uint,
    pub numchannels: c_int,
    pub defaultfrequency: c_int,
    pub format: c_int,
    pub decodebuffersize: c_uint,
    pub initialsubsound: c_int,
    pub numsubsounds: c_int,
    pub inclusionlist: *mut c_int,
    pub inclusionlistnum: c_int,
    pub pcmreadcallback: *mut c_void,
    pub pcmsetposcallback: *mut c_void,
    pub nonblockcallback: *mut c_void,
    pub dlsname: *const c_char,
    pub encryptionkey: *const c_char,
    pub maxpolyphony: c_int,
    pub userdata: *mut c_void,
    pub suggestedsoundtype: c_int,
    pub fileuseropen: FMOD_FILE_OPENCALLBACK,
    pub fileuserclose: FMOD_FILE_CLOSECALLBACK,
    pub fileuserread: FMOD_FILE_READCALLBACK,
    pub fileuserseek: FMOD_FILE_SEEKCALLBACK,
    pub fileuserasyncread: *mut c_void,
    pub fileuserasynccancel: *mut c_void,
    pub fileuserdata: *mut c_void,
    pub channelorder: c_int,
    pub channelmask: c_uint,
    pub initialsoundgroup: *mut c_void,
    pub initialseekposition: c_uint,
    pub initialseekpostype: c_int,
    pub ignoresetfilesystem: c_int,
    pub audioqueuepolicy: c_uint,
    pub minmidigranularity: c_uint,
    pub nonblockthreadid: c_int,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct FMOD_STUDIO_SOUND_INFO {
    pub name_or_data: *const c_char,
    pub mode: FMOD_MODE,
    pub exinfo: FMOD_CREATESOUNDEXINFO,
    pub subsoundIndex: c_int,
}

// =============================================================================
// Function table
// =============================================================================

macro_rules! studio_api {
    ($( fn $name:ident ( $($arg:ident : $ty:ty),* $(,)? ); )*) => {
        /// Flat table of every FMOD Studio entry point.
        ///
        /// Each field is `None` when the symbol could not be resolved, so a
        /// library missing a few entry points still loads and only the calls
        /// that need them fail.
        #[derive(Clone, Copy)]
        pub struct StudioApi {
            $( pub $name: Option<unsafe extern "C" fn($($ty),*) -> FMOD_RESULT>, )*
        }

        impl StudioApi {
            /// A table with no entry points resolved
            pub const EMPTY: StudioApi = StudioApi {
                $( $name: None, )*
            };

            /// Names of every symbol the table knows about
            pub const SYMBOLS: &'static [&'static str] = &[ $( stringify!($name), )* ];

            /// Resolve every entry point from an already loaded library.
            ///
            /// # Safety
            ///
            /// The returned function pointers are only valid while `lib`
            /// stays loaded, and the library must export them with the
            /// signatures declared here.
            pub unsafe fn from_library(lib: &libloading::Library) -> Self {
                Self {
                    $(
                        $name: {
                            let sym: Result<
                                libloading::Symbol<unsafe extern "C" fn($($ty),*) -> FMOD_RESULT>,
                                libloading::Error,
                            > = unsafe { lib.get(concat!(stringify!($name), "\0").as_bytes()) };
                            sym.ok().map(|s| *s)
                        },
                    )*
                }
            }

            /// Names of the entry points that are not resolved in this table
            pub fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$name.is_none() {
                        missing.push(stringify!($name));
                    }
                )*
                missing
            }
        }

        /// Entry points resolved by the linker (requires the `link` feature)
        #[cfg(feature = "link")]
        pub mod linked {
            use super::*;

            extern "C" {
                $( pub fn $name($($arg: $ty),*) -> FMOD_RESULT; )*
            }

            /// Table backed by the linked symbols
            pub static API: StudioApi = StudioApi {
                $( $name: Some($name), )*
            };
        }
    };
}

studio_api! {
    fn FMOD_Studio_ParseID(idstring: *const c_char, id: *mut FMOD_GUID);

    // System
    fn FMOD_Studio_System_Create(system: *mut *mut FMOD_STUDIO_SYSTEM, headerversion: c_uint);
    fn FMOD_Studio_System_SetAdvancedSettings(system: *mut FMOD_STUDIO_SYSTEM, settings: *mut FMOD_STUDIO_ADVANCEDSETTINGS);
    fn FMOD_Studio_System_GetAdvancedSettings(system: *mut FMOD_STUDIO_SYSTEM, settings: *mut FMOD_STUDIO_ADVANCEDSETTINGS);
    fn FMOD_Studio_System_Initialize(system: *mut FMOD_STUDIO_SYSTEM, maxchannels: c_int, studioflags: FMOD_STUDIO_INITFLAGS, flags: FMOD_INITFLAGS, extradriverdata: *mut c_void);
    fn FMOD_Studio_System_Release(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_Update(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_GetLowLevelSystem(system: *mut FMOD_STUDIO_SYSTEM, lowlevelsystem: *mut *mut FMOD_SYSTEM);
    fn FMOD_Studio_System_GetEvent(system: *mut FMOD_STUDIO_SYSTEM, id: *const FMOD_GUID, mode: FMOD_STUDIO_LOADING_MODE, event: *mut *mut FMOD_STUDIO_EVENTDESCRIPTION);
    fn FMOD_Studio_System_GetMixerStrip(system: *mut FMOD_STUDIO_SYSTEM, id: *const FMOD_GUID, mode: FMOD_STUDIO_LOADING_MODE, strip: *mut *mut FMOD_STUDIO_MIXERSTRIP);
    fn FMOD_Studio_System_GetBank(system: *mut FMOD_STUDIO_SYSTEM, id: *const FMOD_GUID, bank: *mut *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_System_GetSoundInfo(system: *mut FMOD_STUDIO_SYSTEM, key: *const c_char, info: *mut FMOD_STUDIO_SOUND_INFO);
    fn FMOD_Studio_System_LookupID(system: *mut FMOD_STUDIO_SYSTEM, path: *const c_char, id: *mut FMOD_GUID);
    fn FMOD_Studio_System_LookupPath(system: *mut FMOD_STUDIO_SYSTEM, id: *const FMOD_GUID, path: *mut c_char, size: c_int, retrieved: *mut c_int);
    fn FMOD_Studio_System_GetListenerAttributes(system: *mut FMOD_STUDIO_SYSTEM, attributes: *mut FMOD_3D_ATTRIBUTES);
    fn FMOD_Studio_System_SetListenerAttributes(system: *mut FMOD_STUDIO_SYSTEM, attributes: *const FMOD_3D_ATTRIBUTES);
    fn FMOD_Studio_System_LoadBankFile(system: *mut FMOD_STUDIO_SYSTEM, filename: *const c_char, flags: FMOD_STUDIO_LOAD_BANK_FLAGS, bank: *mut *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_System_LoadBankMemory(system: *mut FMOD_STUDIO_SYSTEM, buffer: *const c_char, length: c_int, mode: FMOD_STUDIO_LOAD_MEMORY_MODE, flags: FMOD_STUDIO_LOAD_BANK_FLAGS, bank: *mut *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_System_LoadBankCustom(system: *mut FMOD_STUDIO_SYSTEM, info: *const FMOD_STUDIO_BANK_INFO, flags: FMOD_STUDIO_LOAD_BANK_FLAGS, bank: *mut *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_System_UnloadAll(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_FlushCommands(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_StartRecordCommands(system: *mut FMOD_STUDIO_SYSTEM, path: *const c_char, flags: FMOD_STUDIO_RECORD_COMMANDS_FLAGS);
    fn FMOD_Studio_System_StopRecordCommands(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_PlaybackCommands(system: *mut FMOD_STUDIO_SYSTEM, path: *const c_char);
    fn FMOD_Studio_System_GetBankCount(system: *mut FMOD_STUDIO_SYSTEM, count: *mut c_int);
    fn FMOD_Studio_System_GetBankList(system: *mut FMOD_STUDIO_SYSTEM, array: *mut *mut FMOD_STUDIO_BANK, capacity: c_int, count: *mut c_int);
    fn FMOD_Studio_System_GetCPUUsage(system: *mut FMOD_STUDIO_SYSTEM, usage: *mut FMOD_STUDIO_CPU_USAGE);
    fn FMOD_Studio_System_GetBufferUsage(system: *mut FMOD_STUDIO_SYSTEM, usage: *mut FMOD_STUDIO_BUFFER_USAGE);
    fn FMOD_Studio_System_ResetBufferUsage(system: *mut FMOD_STUDIO_SYSTEM);
    fn FMOD_Studio_System_SetCallback(system: *mut FMOD_STUDIO_SYSTEM, callback: FMOD_STUDIO_SYSTEM_CALLBACK, callbackmask: FMOD_STUDIO_SYSTEM_CALLBACK_TYPE);
    fn FMOD_Studio_System_GetUserData(system: *mut FMOD_STUDIO_SYSTEM, userdata: *mut *mut c_void);
    fn FMOD_Studio_System_SetUserData(system: *mut FMOD_STUDIO_SYSTEM, userdata: *mut c_void);

    // EventDescription
    fn FMOD_Studio_EventDescription_GetID(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, id: *mut FMOD_GUID);
    fn FMOD_Studio_EventDescription_GetPath(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, path: *mut c_char, size: c_int, retrieved: *mut c_int);
    fn FMOD_Studio_EventDescription_GetParameterCount(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, count: *mut c_int);
    fn FMOD_Studio_EventDescription_GetParameterByIndex(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, index: c_int, parameter: *mut FMOD_STUDIO_PARAMETER_DESCRIPTION);
    fn FMOD_Studio_EventDescription_GetParameter(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, name: *const c_char, parameter: *mut FMOD_STUDIO_PARAMETER_DESCRIPTION);
    fn FMOD_Studio_EventDescription_GetUserPropertyCount(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, count: *mut c_int);
    fn FMOD_Studio_EventDescription_GetUserPropertyByIndex(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, index: c_int, property: *mut FMOD_STUDIO_USER_PROPERTY);
    fn FMOD_Studio_EventDescription_GetUserProperty(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, name: *const c_char, property: *mut FMOD_STUDIO_USER_PROPERTY);
    fn FMOD_Studio_EventDescription_GetLength(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, length: *mut c_int);
    fn FMOD_Studio_EventDescription_GetMinimumDistance(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, distance: *mut c_float);
    fn FMOD_Studio_EventDescription_GetMaximumDistance(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, distance: *mut c_float);
    fn FMOD_Studio_EventDescription_IsOneshot(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, oneshot: *mut FMOD_BOOL);
    fn FMOD_Studio_EventDescription_IsStream(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, is_stream: *mut FMOD_BOOL);
    fn FMOD_Studio_EventDescription_Is3D(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, is_3d: *mut FMOD_BOOL);
    fn FMOD_Studio_EventDescription_CreateInstance(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, instance: *mut *mut FMOD_STUDIO_EVENTINSTANCE);
    fn FMOD_Studio_EventDescription_GetInstanceCount(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, count: *mut c_int);
    fn FMOD_Studio_EventDescription_GetInstanceList(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, array: *mut *mut FMOD_STUDIO_EVENTINSTANCE, capacity: c_int, count: *mut c_int);
    fn FMOD_Studio_EventDescription_LoadSampleData(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION);
    fn FMOD_Studio_EventDescription_UnloadSampleData(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION);
    fn FMOD_Studio_EventDescription_GetSampleLoadingState(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, state: *mut FMOD_STUDIO_LOADING_STATE);
    fn FMOD_Studio_EventDescription_ReleaseAllInstances(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION);
    fn FMOD_Studio_EventDescription_SetCallback(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, callback: FMOD_STUDIO_EVENT_CALLBACK);
    fn FMOD_Studio_EventDescription_GetUserData(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, userdata: *mut *mut c_void);
    fn FMOD_Studio_EventDescription_SetUserData(eventdescription: *mut FMOD_STUDIO_EVENTDESCRIPTION, userdata: *mut c_void);

    // EventInstance
    fn FMOD_Studio_EventInstance_GetDescription(event: *mut FMOD_STUDIO_EVENTINSTANCE, description: *mut *mut FMOD_STUDIO_EVENTDESCRIPTION);
    fn FMOD_Studio_EventInstance_GetVolume(event: *mut FMOD_STUDIO_EVENTINSTANCE, volume: *mut c_float);
    fn FMOD_Studio_EventInstance_SetVolume(event: *mut FMOD_STUDIO_EVENTINSTANCE, volume: c_float);
    fn FMOD_Studio_EventInstance_GetPitch(event: *mut FMOD_STUDIO_EVENTINSTANCE, pitch: *mut c_float);
    fn FMOD_Studio_EventInstance_SetPitch(event: *mut FMOD_STUDIO_EVENTINSTANCE, pitch: c_float);
    fn FMOD_Studio_EventInstance_Get3DAttributes(event: *mut FMOD_STUDIO_EVENTINSTANCE, attributes: *mut FMOD_3D_ATTRIBUTES);
    fn FMOD_Studio_EventInstance_Set3DAttributes(event: *mut FMOD_STUDIO_EVENTINSTANCE, attributes: *const FMOD_3D_ATTRIBUTES);
    fn FMOD_Studio_EventInstance_GetProperty(event: *mut FMOD_STUDIO_EVENTINSTANCE, index: FMOD_STUDIO_EVENT_PROPERTY, value: *mut c_float);
    fn FMOD_Studio_EventInstance_SetProperty(event: *mut FMOD_STUDIO_EVENTINSTANCE, index: FMOD_STUDIO_EVENT_PROPERTY, value: c_float);
    fn FMOD_Studio_EventInstance_GetPaused(event: *mut FMOD_STUDIO_EVENTINSTANCE, paused: *mut FMOD_BOOL);
    fn FMOD_Studio_EventInstance_SetPaused(event: *mut FMOD_STUDIO_EVENTINSTANCE, paused: FMOD_BOOL);
    fn FMOD_Studio_EventInstance_Start(event: *mut FMOD_STUDIO_EVENTINSTANCE);
    fn FMOD_Studio_EventInstance_Stop(event: *mut FMOD_STUDIO_EVENTINSTANCE, mode: FMOD_STUDIO_STOP_MODE);
    fn FMOD_Studio_EventInstance_GetTimelinePosition(event: *mut FMOD_STUDIO_EVENTINSTANCE, position: *mut c_int);
    fn FMOD_Studio_EventInstance_SetTimelinePosition(event: *mut FMOD_STUDIO_EVENTINSTANCE, position: c_int);
    fn FMOD_Studio_EventInstance_GetPlaybackState(event: *mut FMOD_STUDIO_EVENTINSTANCE, state: *mut FMOD_STUDIO_PLAYBACK_STATE);
    fn FMOD_Studio_EventInstance_GetChannelGroup(event: *mut FMOD_STUDIO_EVENTINSTANCE, group: *mut *mut FMOD_CHANNELGROUP);
    fn FMOD_Studio_EventInstance_Release(event: *mut FMOD_STUDIO_EVENTINSTANCE);
    fn FMOD_Studio_EventInstance_IsVirtual(event: *mut FMOD_STUDIO_EVENTINSTANCE, virtualstate: *mut FMOD_BOOL);
    fn FMOD_Studio_EventInstance_GetParameter(event: *mut FMOD_STUDIO_EVENTINSTANCE, name: *const c_char, parameter: *mut *mut FMOD_STUDIO_PARAMETERINSTANCE);
    fn FMOD_Studio_EventInstance_GetParameterByIndex(event: *mut FMOD_STUDIO_EVENTINSTANCE, index: c_int, parameter: *mut *mut FMOD_STUDIO_PARAMETERINSTANCE);
    fn FMOD_Studio_EventInstance_GetParameterCount(event: *mut FMOD_STUDIO_EVENTINSTANCE, count: *mut c_int);
    fn FMOD_Studio_EventInstance_SetParameterValue(event: *mut FMOD_STUDIO_EVENTINSTANCE, name: *const c_char, value: c_float);
    fn FMOD_Studio_EventInstance_SetParameterValueByIndex(event: *mut FMOD_STUDIO_EVENTINSTANCE, index: c_int, value: c_float);
    fn FMOD_Studio_EventInstance_GetCue(event: *mut FMOD_STUDIO_EVENTINSTANCE, name: *const c_char, cue: *mut *mut FMOD_STUDIO_CUEINSTANCE);
    fn FMOD_Studio_EventInstance_GetCueByIndex(event: *mut FMOD_STUDIO_EVENTINSTANCE, index: c_int, cue: *mut *mut FMOD_STUDIO_CUEINSTANCE);
    fn FMOD_Studio_EventInstance_GetCueCount(event: *mut FMOD_STUDIO_EVENTINSTANCE, count: *mut c_int);
    fn FMOD_Studio_EventInstance_CreateSubEvent(event: *mut FMOD_STUDIO_EVENTINSTANCE, name: *const c_char, instance: *mut *mut FMOD_STUDIO_EVENTINSTANCE);
    fn FMOD_Studio_EventInstance_SetCallback(event: *mut FMOD_STUDIO_EVENTINSTANCE, callback: FMOD_STUDIO_EVENT_CALLBACK);
    fn FMOD_Studio_EventInstance_GetUserData(event: *mut FMOD_STUDIO_EVENTINSTANCE, userdata: *mut *mut c_void);
    fn FMOD_Studio_EventInstance_SetUserData(event: *mut FMOD_STUDIO_EVENTINSTANCE, userdata: *mut c_void);

    // CueInstance
    fn FMOD_Studio_CueInstance_Trigger(cue: *mut FMOD_STUDIO_CUEINSTANCE);

    // ParameterInstance
    fn FMOD_Studio_ParameterInstance_GetDescription(parameter: *mut FMOD_STUDIO_PARAMETERINSTANCE, description: *mut FMOD_STUDIO_PARAMETER_DESCRIPTION);
    fn FMOD_Studio_ParameterInstance_GetValue(parameter: *mut FMOD_STUDIO_PARAMETERINSTANCE, value: *mut c_float);
    fn FMOD_Studio_ParameterInstance_SetValue(parameter: *mut FMOD_STUDIO_PARAMETERINSTANCE, value: c_float);

    // MixerStrip
    fn FMOD_Studio_MixerStrip_GetID(strip: *mut FMOD_STUDIO_MIXERSTRIP, id: *mut FMOD_GUID);
    fn FMOD_Studio_MixerStrip_GetPath(strip: *mut FMOD_STUDIO_MIXERSTRIP, path: *mut c_char, size: c_int, retrieved: *mut c_int);
    fn FMOD_Studio_MixerStrip_GetFaderLevel(strip: *mut FMOD_STUDIO_MIXERSTRIP, value: *mut c_float);
    fn FMOD_Studio_MixerStrip_SetFaderLevel(strip: *mut FMOD_STUDIO_MIXERSTRIP, value: c_float);
    fn FMOD_Studio_MixerStrip_GetPaused(strip: *mut FMOD_STUDIO_MIXERSTRIP, paused: *mut FMOD_BOOL);
    fn FMOD_Studio_MixerStrip_SetPaused(strip: *mut FMOD_STUDIO_MIXERSTRIP, paused: FMOD_BOOL);
    fn FMOD_Studio_MixerStrip_GetMute(strip: *mut FMOD_STUDIO_MIXERSTRIP, mute: *mut FMOD_BOOL);
    fn FMOD_Studio_MixerStrip_SetMute(strip: *mut FMOD_STUDIO_MIXERSTRIP, mute: FMOD_BOOL);
    fn FMOD_Studio_MixerStrip_StopAllEvents(strip: *mut FMOD_STUDIO_MIXERSTRIP, mode: FMOD_STUDIO_STOP_MODE);
    fn FMOD_Studio_MixerStrip_GetChannelGroup(strip: *mut FMOD_STUDIO_MIXERSTRIP, group: *mut *mut FMOD_CHANNELGROUP);
    fn FMOD_Studio_MixerStrip_GetLoadingState(strip: *mut FMOD_STUDIO_MIXERSTRIP, state: *mut FMOD_STUDIO_LOADING_STATE);
    fn FMOD_Studio_MixerStrip_Release(strip: *mut FMOD_STUDIO_MIXERSTRIP);

    // Bank
    fn FMOD_Studio_Bank_GetID(bank: *mut FMOD_STUDIO_BANK, id: *mut FMOD_GUID);
    fn FMOD_Studio_Bank_GetPath(bank: *mut FMOD_STUDIO_BANK, path: *mut c_char, size: c_int, retrieved: *mut c_int);
    fn FMOD_Studio_Bank_Unload(bank: *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_Bank_LoadSampleData(bank: *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_Bank_UnloadSampleData(bank: *mut FMOD_STUDIO_BANK);
    fn FMOD_Studio_Bank_GetLoadingState(bank: *mut FMOD_STUDIO_BANK, state: *mut FMOD_STUDIO_LOADING_STATE);
    fn FMOD_Studio_Bank_GetSampleLoadingState(bank: *mut FMOD_STUDIO_BANK, state: *mut FMOD_STUDIO_LOADING_STATE);
    fn FMOD_Studio_Bank_GetEventCount(bank: *mut FMOD_STUDIO_BANK, count: *mut c_int);
    fn FMOD_Studio_Bank_GetEventList(bank: *mut FMOD_STUDIO_BANK, array: *mut *mut FMOD_STUDIO_EVENTDESCRIPTION, capacity: c_int, count: *mut c_int);
    fn FMOD_Studio_Bank_GetMixerStripCount(bank: *mut FMOD_STUDIO_BANK, count: *mut c_int);
    fn FMOD_Studio_Bank_GetMixerStripList(bank: *mut FMOD_STUDIO_BANK, array: *mut *mut FMOD_STUDIO_MIXERSTRIP, capacity: c_int, count: *mut c_int);
}

impl StudioApi {
    /// Load a shared library and resolve every entry point from it.
    ///
    /// The library is returned alongside the table; dropping it invalidates
    /// every function pointer in the table.
    ///
    /// # Safety
    ///
    /// Loading a library runs its initialisers, and the library must export
    /// the FMOD Studio ABI declared in this crate.
    pub unsafe fn load<P: AsRef<std::ffi::OsStr>>(
        path: P,
    ) -> Result<(libloading::Library, StudioApi), libloading::Error> {
        let lib = unsafe { libloading::Library::new(path) }?;
        let api = unsafe { StudioApi::from_library(&lib) };
        Ok((lib, api))
    }
}

impl Default for StudioApi {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for StudioApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudioApi")
            .field("resolved", &(Self::SYMBOLS.len() - self.missing().len()))
            .field("total", &Self::SYMBOLS.len())
            .finish()
    }
}
