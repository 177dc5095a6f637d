// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


use fmod_studio_sys as sys;

use crate::error::Result;

facade! {
    /// Sustain-point cue of an event instance
    CueInstance => sys::FMOD_STUDIO_CUEINSTANCE
}

impl CueInstance {
    /// Release the timeline from the next sustain point
    pub fn trigger(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_CueInstance_Trigger)
    }
}
