// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Fixed-layout records shared with the native library

use std::mem::size_of;

use fmod_studio_sys as sys;

/// 3D vector in world units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub(crate) fn to_c(self) -> sys::FMOD_VECTOR {
        sys::FMOD_VECTOR {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }
}

impl From<sys::FMOD_VECTOR> for Vector {
    fn from(v: sys::FMOD_VECTOR) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Position, velocity and orientation of a listener or event instance
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attributes3D {
    pub position: Vector,
    pub velocity: Vector,
    /// Unit forward vector, perpendicular to `up`
    pub forward: Vector,
    /// Unit up vector, perpendicular to `forward`
    pub up: Vector,
}

impl Attributes3D {
    /// Attributes at `position` facing +Z with +Y up and no velocity
    pub fn at(position: Vector) -> Self {
        Self {
            position,
            velocity: Vector::default(),
            forward: Vector::new(0.0, 0.0, 1.0),
            up: Vector::new(0.0, 1.0, 0.0),
        }
    }

    pub(crate) fn to_c(self) -> sys::FMOD_3D_ATTRIBUTES {
        sys::FMOD_3D_ATTRIBUTES {
            position: self.position.to_c(),
            velocity: self.velocity.to_c(),
            forward: self.forward.to_c(),
            up: self.up.to_c(),
        }
    }
}

impl From<sys::FMOD_3D_ATTRIBUTES> for Attributes3D {
    fn from(a: sys::FMOD_3D_ATTRIBUTES) -> Self {
        Self {
            position: a.position.into(),
            velocity: a.velocity.into(),
            forward: a.forward.into(),
            up: a.up.into(),
        }
    }
}

/// Studio system tuning, applied before initialization
///
/// ```
/// use fmod_studio::AdvancedSettings;
///
/// let settings = AdvancedSettings::new()
///     .command_queue_size(64 * 1024)
///     .handle_initial_size(4096);
/// assert_eq!(settings.get_command_queue_size(), 64 * 1024);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AdvancedSettings {
    inner: sys::FMOD_STUDIO_ADVANCEDSETTINGS,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self::new()
    }
}

impl AdvancedSettings {
    /// All fields zero, meaning "use the native default"
    pub fn new() -> Self {
        Self {
            inner: sys::FMOD_STUDIO_ADVANCEDSETTINGS::default(),
        }
    }

    pub(crate) fn from_c(inner: sys::FMOD_STUDIO_ADVANCEDSETTINGS) -> Self {
        Self { inner }
    }

    /// Set the command queue size in bytes (0 = native default)
    pub fn command_queue_size(mut self, bytes: i32) -> Self {
        self.inner.commandQueueSize = bytes;
        self
    }

    /// Set the initial handle table size (0 = native default)
    pub fn handle_initial_size(mut self, handles: i32) -> Self {
        self.inner.handleInitialSize = handles;
        self
    }

    pub fn get_command_queue_size(&self) -> i32 {
        self.inner.commandQueueSize
    }

    pub fn get_handle_initial_size(&self) -> i32 {
        self.inner.handleInitialSize
    }

    /// Native record with its size field stamped
    pub(crate) fn to_c(self) -> sys::FMOD_STUDIO_ADVANCEDSETTINGS {
        let mut inner = self.inner;
        inner.cbSize = size_of::<sys::FMOD_STUDIO_ADVANCEDSETTINGS>() as i32;
        inner
    }

    /// Empty native record with only its size field stamped, for getters
    pub(crate) fn blank_c() -> sys::FMOD_STUDIO_ADVANCEDSETTINGS {
        Self::new().to_c()
    }
}

/// CPU usage snapshot, in percent
///
/// Retrieved via `System::cpu_usage()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuUsage {
    inner: sys::FMOD_STUDIO_CPU_USAGE,
}

impl CpuUsage {
    pub(crate) fn new(inner: sys::FMOD_STUDIO_CPU_USAGE) -> Self {
        Self { inner }
    }

    /// DSP mixing engine
    pub fn dsp(&self) -> f32 {
        self.inner.dspUsage
    }

    /// Streaming engine
    pub fn stream(&self) -> f32 {
        self.inner.streamUsage
    }

    /// Geometry engine
    pub fn geometry(&self) -> f32 {
        self.inner.geometryUsage
    }

    /// Low-level update
    pub fn update(&self) -> f32 {
        self.inner.updateUsage
    }

    /// Studio update
    pub fn studio(&self) -> f32 {
        self.inner.studioUsage
    }
}

/// Usage of one internal buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferInfo {
    inner: sys::FMOD_STUDIO_BUFFER_INFO,
}

impl BufferInfo {
    pub fn current_usage(&self) -> i32 {
        self.inner.currentUsage
    }

    /// High-water mark since the last reset
    pub fn peak_usage(&self) -> i32 {
        self.inner.peakUsage
    }

    pub fn capacity(&self) -> i32 {
        self.inner.capacity
    }

    /// Number of times the buffer filled and the caller had to wait
    pub fn stall_count(&self) -> i32 {
        self.inner.stallCount
    }

    /// Total time spent stalled, in seconds
    pub fn stall_time(&self) -> f32 {
        self.inner.stallTime
    }
}

/// Buffer usage snapshot
///
/// Retrieved via `System::buffer_usage()`; peaks are cleared by
/// `System::reset_buffer_usage()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferUsage {
    inner: sys::FMOD_STUDIO_BUFFER_USAGE,
}

impl BufferUsage {
    pub(crate) fn new(inner: sys::FMOD_STUDIO_BUFFER_USAGE) -> Self {
        Self { inner }
    }

    pub fn command_queue(&self) -> BufferInfo {
        BufferInfo {
            inner: self.inner.studioCommandQueue,
        }
    }

    pub fn handle(&self) -> BufferInfo {
        BufferInfo {
            inner: self.inner.studioHandle,
        }
    }
}
