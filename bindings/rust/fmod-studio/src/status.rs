// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Native result codes

use fmod_studio_sys as sys;

macro_rules! statuses {
    ($( $variant:ident => $raw:ident, $desc:literal; )*) => {
        /// Result code reported by the native library
        ///
        /// Mirrors the closed set of `FMOD_RESULT` values, in native order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Status {
            $(
                #[doc = $desc]
                $variant,
            )*
        }

        impl Status {
            /// Every status, in native order
            pub const ALL: &'static [Status] = &[ $( Status::$variant, )* ];

            /// Decode a raw result code, `None` if outside the known set
            pub fn from_raw(raw: sys::FMOD_RESULT) -> Option<Status> {
                match raw {
                    $( sys::$raw => Some(Status::$variant), )*
                    _ => None,
                }
            }

            /// The raw native value
            pub fn raw(self) -> sys::FMOD_RESULT {
                match self {
                    $( Status::$variant => sys::$raw, )*
                }
            }

            /// Native symbolic name, e.g. `"FMOD_ERR_TRUNCATED"`
            pub fn name(self) -> &'static str {
                match self {
                    $( Status::$variant => stringify!($raw), )*
                }
            }

            /// Human readable description
            pub fn description(self) -> &'static str {
                match self {
                    $( Status::$variant => $desc, )*
                }
            }
        }
    };
}

statuses! {
    Ok => FMOD_OK, "No errors";
    BadCommand => FMOD_ERR_BADCOMMAND, "Tried to call a function on a data type that does not allow this type of functionality";
    ChannelAlloc => FMOD_ERR_CHANNEL_ALLOC, "Error trying to allocate a channel";
    ChannelStolen => FMOD_ERR_CHANNEL_STOLEN, "The specified channel has been reused to play another sound";
    Dma => FMOD_ERR_DMA, "DMA failure";
    DspConnection => FMOD_ERR_DSP_CONNECTION, "DSP connection error";
    DspDontProcess => FMOD_ERR_DSP_DONTPROCESS, "DSP return code from a DSP process query callback";
    DspFormat => FMOD_ERR_DSP_FORMAT, "DSP format error";
    DspInUse => FMOD_ERR_DSP_INUSE, "DSP is already in the mixer's DSP network";
    DspNotFound => FMOD_ERR_DSP_NOTFOUND, "DSP connection error, could not find the DSP unit specified";
    DspReserved => FMOD_ERR_DSP_RESERVED, "DSP operation error on a reserved unit";
    DspSilence => FMOD_ERR_DSP_SILENCE, "DSP return code from a DSP process query callback";
    DspType => FMOD_ERR_DSP_TYPE, "DSP operation cannot be performed on a DSP of this type";
    FileBad => FMOD_ERR_FILE_BAD, "Error loading file";
    FileCouldNotSeek => FMOD_ERR_FILE_COULDNOTSEEK, "Couldn't perform seek operation";
    FileDiskEjected => FMOD_ERR_FILE_DISKEJECTED, "Media was ejected while reading";
    FileEof => FMOD_ERR_FILE_EOF, "End of file unexpectedly reached while trying to read essential data";
    FileEndOfData => FMOD_ERR_FILE_ENDOFDATA, "End of current chunk reached while trying to read data";
    FileNotFound => FMOD_ERR_FILE_NOTFOUND, "File not found";
    Format => FMOD_ERR_FORMAT, "Unsupported file or audio format";
    HeaderMismatch => FMOD_ERR_HEADER_MISMATCH, "Version mismatch between the header and the runtime library";
    Http => FMOD_ERR_HTTP, "An HTTP error occurred";
    HttpAccess => FMOD_ERR_HTTP_ACCESS, "The specified resource requires authentication or is forbidden";
    HttpProxyAuth => FMOD_ERR_HTTP_PROXY_AUTH, "Proxy authentication is required to access the specified resource";
    HttpServerError => FMOD_ERR_HTTP_SERVER_ERROR, "An HTTP server error occurred";
    HttpTimeout => FMOD_ERR_HTTP_TIMEOUT, "The HTTP request timed out";
    Initialization => FMOD_ERR_INITIALIZATION, "The system was not initialized correctly";
    Initialized => FMOD_ERR_INITIALIZED, "Cannot call this command after initialization";
    Internal => FMOD_ERR_INTERNAL, "An error occurred that wasn't supposed to";
    InvalidFloat => FMOD_ERR_INVALID_FLOAT, "Value passed in was a NaN, Inf or denormalized float";
    InvalidHandle => FMOD_ERR_INVALID_HANDLE, "An invalid object handle was used";
    InvalidParam => FMOD_ERR_INVALID_PARAM, "An invalid parameter was passed to this function";
    InvalidPosition => FMOD_ERR_INVALID_POSITION, "An invalid seek position was passed to this function";
    InvalidSpeaker => FMOD_ERR_INVALID_SPEAKER, "An invalid speaker was passed to this function";
    InvalidSyncPoint => FMOD_ERR_INVALID_SYNCPOINT, "The syncpoint did not come from this sound handle";
    InvalidThread => FMOD_ERR_INVALID_THREAD, "Tried to call a function on a thread that is not supported";
    InvalidVector => FMOD_ERR_INVALID_VECTOR, "The vectors passed in are not unit length, or perpendicular";
    MaxAudible => FMOD_ERR_MAXAUDIBLE, "Reached maximum audible playback count for this sound's soundgroup";
    Memory => FMOD_ERR_MEMORY, "Not enough memory or resources";
    MemoryCantPoint => FMOD_ERR_MEMORY_CANTPOINT, "Can't use FMOD_OPENMEMORY_POINT on non PCM source data";
    Needs3d => FMOD_ERR_NEEDS3D, "Tried to call a command on a 2d sound when the command was meant for 3d sound";
    NeedsHardware => FMOD_ERR_NEEDSHARDWARE, "Tried to use a feature that requires hardware support";
    NetConnect => FMOD_ERR_NET_CONNECT, "Couldn't connect to the specified host";
    NetSocketError => FMOD_ERR_NET_SOCKET_ERROR, "A socket error occurred";
    NetUrl => FMOD_ERR_NET_URL, "The specified URL couldn't be resolved";
    NetWouldBlock => FMOD_ERR_NET_WOULD_BLOCK, "Operation on a non-blocking socket could not complete immediately";
    NotReady => FMOD_ERR_NOTREADY, "Operation could not be performed because the specified sound or DSP connection is not ready";
    OutputAllocated => FMOD_ERR_OUTPUT_ALLOCATED, "Error initializing output device, it is already in use";
    OutputCreateBuffer => FMOD_ERR_OUTPUT_CREATEBUFFER, "Error creating hardware sound buffer";
    OutputDriverCall => FMOD_ERR_OUTPUT_DRIVERCALL, "A call to a standard soundcard driver failed";
    OutputFormat => FMOD_ERR_OUTPUT_FORMAT, "Soundcard does not support the specified format";
    OutputInit => FMOD_ERR_OUTPUT_INIT, "Error initializing output device";
    OutputNoDrivers => FMOD_ERR_OUTPUT_NODRIVERS, "The output device has no drivers installed";
    Plugin => FMOD_ERR_PLUGIN, "An unspecified error has been returned from a plugin";
    PluginMissing => FMOD_ERR_PLUGIN_MISSING, "A requested output, dsp unit type or codec was not available";
    PluginResource => FMOD_ERR_PLUGIN_RESOURCE, "A resource that the plugin requires cannot be found";
    PluginVersion => FMOD_ERR_PLUGIN_VERSION, "A plugin was built with an unsupported SDK version";
    Record => FMOD_ERR_RECORD, "An error occurred trying to initialize the recording device";
    ReverbChannelGroup => FMOD_ERR_REVERB_CHANNELGROUP, "Reverb properties cannot be set on this channel because a parent channelgroup owns the reverb connection";
    ReverbInstance => FMOD_ERR_REVERB_INSTANCE, "Specified instance in FMOD_REVERB_PROPERTIES couldn't be set";
    Subsounds => FMOD_ERR_SUBSOUNDS, "The error occurred because the sound referenced contains subsounds when it shouldn't";
    SubsoundAllocated => FMOD_ERR_SUBSOUND_ALLOCATED, "This subsound is already being used by another sound";
    SubsoundCantMove => FMOD_ERR_SUBSOUND_CANTMOVE, "Shared subsounds cannot be replaced or moved from their parent stream";
    TagNotFound => FMOD_ERR_TAGNOTFOUND, "The specified tag could not be found or there are no tags";
    TooManyChannels => FMOD_ERR_TOOMANYCHANNELS, "The sound created exceeds the allowable input channel count";
    Truncated => FMOD_ERR_TRUNCATED, "The retrieved string is too long to fit in the supplied buffer and has been truncated";
    Unimplemented => FMOD_ERR_UNIMPLEMENTED, "Something in FMOD hasn't been implemented when it should be";
    Uninitialized => FMOD_ERR_UNINITIALIZED, "This command failed because System::init or System::setDriver was not called";
    Unsupported => FMOD_ERR_UNSUPPORTED, "A command issued was not supported by this object";
    Version => FMOD_ERR_VERSION, "The version number of this file format is not supported";
    EventAlreadyLoaded => FMOD_ERR_EVENT_ALREADY_LOADED, "The specified bank has already been loaded";
    EventLiveUpdateBusy => FMOD_ERR_EVENT_LIVEUPDATE_BUSY, "The live update connection failed due to the game already being connected";
    EventLiveUpdateMismatch => FMOD_ERR_EVENT_LIVEUPDATE_MISMATCH, "The live update connection failed due to the game data being out of sync with the tool";
    EventLiveUpdateTimeout => FMOD_ERR_EVENT_LIVEUPDATE_TIMEOUT, "The live update connection timed out";
    EventNotFound => FMOD_ERR_EVENT_NOTFOUND, "The requested event, bus or vca could not be found";
    StudioUninitialized => FMOD_ERR_STUDIO_UNINITIALIZED, "The Studio::System object is not yet initialized";
    StudioNotLoaded => FMOD_ERR_STUDIO_NOT_LOADED, "The specified resource is not loaded, so it can't be unloaded";
    InvalidString => FMOD_ERR_INVALID_STRING, "An invalid string was passed to this function";
    AlreadyLocked => FMOD_ERR_ALREADY_LOCKED, "The specified resource is already locked";
    NotLocked => FMOD_ERR_NOT_LOCKED, "The specified resource is not locked, so it can't be unlocked";
}

impl Status {
    /// Whether this is the success code
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.name())
    }
}
