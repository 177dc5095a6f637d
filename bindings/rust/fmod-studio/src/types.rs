// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Native enumerations and flag sets

use std::ops::{BitAnd, BitOr, BitOrAssign};

use fmod_studio_sys as sys;

use crate::error::{Error, Result};

macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty, $kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $raw:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            #[allow(dead_code)]
            pub(crate) fn to_c(self) -> $repr {
                match self {
                    $( $name::$variant => sys::$raw, )*
                }
            }

            #[allow(dead_code)]
            pub(crate) fn from_c(raw: $repr) -> Result<Self> {
                match raw {
                    $( sys::$raw => Ok($name::$variant), )*
                    value => Err(Error::UnknownDiscriminant {
                        kind: $kind,
                        value: value as i32,
                    }),
                }
            }
        }
    };
}

macro_rules! native_flags {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$cmeta:meta])* const $flag:ident = $raw:ident; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            $( $(#[$cmeta])* pub const $flag: $name = $name(sys::$raw); )*

            /// No bits set
            pub const fn empty() -> Self {
                $name(0)
            }

            /// Raw native bits
            pub const fn bits(self) -> u32 {
                self.0
            }

            /// Wrap raw bits, keeping any the crate has no name for
            pub const fn from_bits_retain(bits: u32) -> Self {
                $name(bits)
            }

            /// Whether every bit of `other` is set in `self`
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl BitOr for $name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                $name(self.0 | rhs.0)
            }
        }

        impl BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl BitAnd for $name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                $name(self.0 & rhs.0)
            }
        }
    };
}

// =============================================================================
// Enumerations
// =============================================================================

native_enum! {
    /// Whether a lookup may start loading the object's data
    LoadingMode(sys::FMOD_STUDIO_LOADING_MODE, "loading mode") {
        /// Begin loading immediately
        BeginNow = FMOD_STUDIO_LOADING_MODE_BEGIN_NOW,
        /// Fail instead of loading
        Prohibited = FMOD_STUDIO_LOADING_MODE_PROHIBITED,
    }
}

native_enum! {
    /// How playback stops
    StopMode(sys::FMOD_STUDIO_STOP_MODE, "stop mode") {
        /// Let AHDSR modulators run their release
        AllowFadeout = FMOD_STUDIO_STOP_ALLOWFADEOUT,
        /// Stop at once
        Immediate = FMOD_STUDIO_STOP_IMMEDIATE,
    }
}

native_enum! {
    /// Loading progress of a bank, sample set or mixer strip
    LoadingState(sys::FMOD_STUDIO_LOADING_STATE, "loading state") {
        Unloading = FMOD_STUDIO_LOADING_STATE_UNLOADING,
        Unloaded = FMOD_STUDIO_LOADING_STATE_UNLOADED,
        Loading = FMOD_STUDIO_LOADING_STATE_LOADING,
        Loaded = FMOD_STUDIO_LOADING_STATE_LOADED,
    }
}

native_enum! {
    /// Playback state of an event instance
    PlaybackState(sys::FMOD_STUDIO_PLAYBACK_STATE, "playback state") {
        Playing = FMOD_STUDIO_PLAYBACK_PLAYING,
        Idle = FMOD_STUDIO_PLAYBACK_IDLE,
        /// Paused on a sustain point
        Sustaining = FMOD_STUDIO_PLAYBACK_SUSTAINING,
        Stopped = FMOD_STUDIO_PLAYBACK_STOPPED,
        Starting = FMOD_STUDIO_PLAYBACK_STARTING,
        Stopping = FMOD_STUDIO_PLAYBACK_STOPPING,
    }
}

native_enum! {
    /// Source of a parameter's value
    ParameterType(sys::FMOD_STUDIO_PARAMETER_TYPE, "parameter type") {
        /// Set by the game
        GameControlled = FMOD_STUDIO_PARAMETER_GAME_CONTROLLED,
        /// Distance between event and listener
        AutomaticDistance = FMOD_STUDIO_PARAMETER_AUTOMATIC_DISTANCE,
        AutomaticEventConeAngle = FMOD_STUDIO_PARAMETER_AUTOMATIC_EVENT_CONE_ANGLE,
        AutomaticEventOrientation = FMOD_STUDIO_PARAMETER_AUTOMATIC_EVENT_ORIENTATION,
        AutomaticDirection = FMOD_STUDIO_PARAMETER_AUTOMATIC_DIRECTION,
        AutomaticElevation = FMOD_STUDIO_PARAMETER_AUTOMATIC_ELEVATION,
        AutomaticListenerOrientation = FMOD_STUDIO_PARAMETER_AUTOMATIC_LISTENER_ORIENTATION,
    }
}

native_enum! {
    /// Per-instance property addressed by index
    EventProperty(sys::FMOD_STUDIO_EVENT_PROPERTY, "event property") {
        ChannelPriority = FMOD_STUDIO_EVENT_PROPERTY_CHANNELPRIORITY,
    }
}

native_enum! {
    /// Point in the update cycle a system callback fires at
    SystemCallbackType(sys::FMOD_STUDIO_SYSTEM_CALLBACK_TYPE, "system callback type") {
        PreUpdate = FMOD_STUDIO_SYSTEM_CALLBACK_PREUPDATE,
        PostUpdate = FMOD_STUDIO_SYSTEM_CALLBACK_POSTUPDATE,
    }
}

native_enum! {
    /// Kind of event callback, without its payload
    EventCallbackType(sys::FMOD_STUDIO_EVENT_CALLBACK_TYPE, "event callback type") {
        Started = FMOD_STUDIO_EVENT_CALLBACK_STARTED,
        Stopped = FMOD_STUDIO_EVENT_CALLBACK_STOPPED,
        Idle = FMOD_STUDIO_EVENT_CALLBACK_IDLE,
        CreateProgrammerSound = FMOD_STUDIO_EVENT_CALLBACK_CREATE_PROGRAMMER_SOUND,
        DestroyProgrammerSound = FMOD_STUDIO_EVENT_CALLBACK_DESTROY_PROGRAMMER_SOUND,
        Restarted = FMOD_STUDIO_EVENT_CALLBACK_RESTARTED,
    }
}

// =============================================================================
// Flag sets
// =============================================================================

native_flags! {
    /// Studio initialization flags
    InitFlags {
        const NORMAL = FMOD_STUDIO_INIT_NORMAL;
        /// Allow the Studio tool to connect
        const LIVEUPDATE = FMOD_STUDIO_INIT_LIVEUPDATE;
        /// Load banks even if they reference missing plugins
        const ALLOW_MISSING_PLUGINS = FMOD_STUDIO_INIT_ALLOW_MISSING_PLUGINS;
        /// Run the Studio update on the calling thread
        const SYNCHRONOUS_UPDATE = FMOD_STUDIO_INIT_SYNCHRONOUS_UPDATE;
    }
}

native_flags! {
    /// Low-level initialization flags
    CoreInitFlags {
        const NORMAL = FMOD_INIT_NORMAL;
        const STREAM_FROM_UPDATE = FMOD_INIT_STREAM_FROM_UPDATE;
        /// Use a right-handed coordinate system
        const RIGHTHANDED_3D = FMOD_INIT_3D_RIGHTHANDED;
        const CHANNEL_LOWPASS = FMOD_INIT_CHANNEL_LOWPASS;
        const PROFILE_ENABLE = FMOD_INIT_PROFILE_ENABLE;
    }
}

native_flags! {
    /// Bank loading flags
    LoadBankFlags {
        const NORMAL = FMOD_STUDIO_LOAD_BANK_NORMAL;
        /// Return immediately and load in the background
        const NONBLOCKING = FMOD_STUDIO_LOAD_BANK_NONBLOCKING;
    }
}

native_flags! {
    /// Command capture flags
    RecordCommandsFlags {
        const NORMAL = FMOD_STUDIO_RECORD_COMMANDS_NORMAL;
        /// Flush the file after every command
        const FILEFLUSH = FMOD_STUDIO_RECORD_COMMANDS_FILEFLUSH;
    }
}

native_flags! {
    /// Which system callback types to receive
    SystemCallbackMask {
        const PREUPDATE = FMOD_STUDIO_SYSTEM_CALLBACK_PREUPDATE;
        const POSTUPDATE = FMOD_STUDIO_SYSTEM_CALLBACK_POSTUPDATE;
    }
}

impl SystemCallbackMask {
    pub const ALL: SystemCallbackMask = SystemCallbackMask(
        sys::FMOD_STUDIO_SYSTEM_CALLBACK_PREUPDATE | sys::FMOD_STUDIO_SYSTEM_CALLBACK_POSTUPDATE,
    );
}

native_flags! {
    /// Sound creation mode bits
    Mode {
        const DEFAULT = FMOD_DEFAULT;
        const LOOP_OFF = FMOD_LOOP_OFF;
        const LOOP_NORMAL = FMOD_LOOP_NORMAL;
        const MODE_2D = FMOD_2D;
        const MODE_3D = FMOD_3D;
        const CREATESTREAM = FMOD_CREATESTREAM;
        const CREATESAMPLE = FMOD_CREATESAMPLE;
        const CREATECOMPRESSEDSAMPLE = FMOD_CREATECOMPRESSEDSAMPLE;
        const OPENUSER = FMOD_OPENUSER;
        /// Sound data is a copied memory block
        const OPENMEMORY = FMOD_OPENMEMORY;
        const OPENRAW = FMOD_OPENRAW;
        const NONBLOCKING = FMOD_NONBLOCKING;
        /// Sound data is read in place from caller memory
        const OPENMEMORY_POINT = FMOD_OPENMEMORY_POINT;
    }
}

impl Mode {
    /// Whether the sound data comes from memory rather than a file
    pub fn is_memory(self) -> bool {
        self.0 & (sys::FMOD_OPENMEMORY | sys::FMOD_OPENMEMORY_POINT) != 0
    }
}
