// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! System configuration options

use crate::structs::AdvancedSettings;
use crate::types::{CoreInitFlags, InitFlags};

/// Default number of virtual channels
pub const DEFAULT_MAX_CHANNELS: i32 = 512;

/// Studio system configuration
///
/// Used by `System::create_with` to create, tune and initialize a system
/// in one step:
///
/// ```no_run
/// use fmod_studio::{loader, InitFlags, Options, System};
///
/// # fn main() -> fmod_studio::Result<()> {
/// let api = loader::load_default()?;
/// let opts = Options::new()
///     .max_channels(256)
///     .studio_flags(InitFlags::LIVEUPDATE);
/// let system = System::create_with(api, &opts)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    max_channels: i32,
    studio_flags: InitFlags,
    core_flags: CoreInitFlags,
    header_version: u32,
    advanced_settings: Option<AdvancedSettings>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Create new options with default values
    pub fn new() -> Self {
        Self {
            max_channels: DEFAULT_MAX_CHANNELS,
            studio_flags: InitFlags::NORMAL,
            core_flags: CoreInitFlags::RIGHTHANDED_3D,
            header_version: fmod_studio_sys::FMOD_VERSION,
            advanced_settings: None,
        }
    }

    /// Set the number of virtual channels (default: 512)
    pub fn max_channels(mut self, count: i32) -> Self {
        self.max_channels = count;
        self
    }

    /// Set the Studio initialization flags (default: NORMAL)
    pub fn studio_flags(mut self, flags: InitFlags) -> Self {
        self.studio_flags = flags;
        self
    }

    /// Set the low-level initialization flags (default: RIGHTHANDED_3D)
    pub fn core_flags(mut self, flags: CoreInitFlags) -> Self {
        self.core_flags = flags;
        self
    }

    /// Override the header version sent to the library on create
    pub fn header_version(mut self, version: u32) -> Self {
        self.header_version = version;
        self
    }

    /// Apply advanced settings between create and initialize
    pub fn advanced_settings(mut self, settings: AdvancedSettings) -> Self {
        self.advanced_settings = Some(settings);
        self
    }

    pub fn get_max_channels(&self) -> i32 {
        self.max_channels
    }

    pub fn get_studio_flags(&self) -> InitFlags {
        self.studio_flags
    }

    pub fn get_core_flags(&self) -> CoreInitFlags {
        self.core_flags
    }

    pub fn get_header_version(&self) -> u32 {
        self.header_version
    }

    pub fn get_advanced_settings(&self) -> Option<&AdvancedSettings> {
        self.advanced_settings.as_ref()
    }
}
