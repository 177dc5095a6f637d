// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Studio system: the root object of the native runtime

use std::ffi::{c_int, c_void};
use std::ptr;
use std::sync::Arc;

use fmod_studio_sys::{self as sys, StudioApi};

use crate::bank::{Bank, BankInfo};
use crate::callback::{self, Callback, Owner};
use crate::error::{check, Error, Result};
use crate::event_description::EventDescription;
use crate::guid::Guid;
use crate::handle::CoreSystem;
use crate::list;
use crate::marshal::{read_truncating, to_cstring};
use crate::mixer_strip::MixerStrip;
use crate::options::Options;
use crate::sound_info::SoundInfo;
use crate::status::Status;
use crate::structs::{AdvancedSettings, Attributes3D, BufferUsage, CpuUsage};
use crate::types::{
    CoreInitFlags, InitFlags, LoadBankFlags, LoadingMode, RecordCommandsFlags,
    SystemCallbackMask, SystemCallbackType,
};

facade! {
    /// FMOD Studio system
    ///
    /// Entry point to the runtime: loads banks, resolves events and mixer
    /// strips, and drives processing through [`System::update`], which must
    /// be called once per frame.
    ///
    /// # Thread Safety
    ///
    /// `System` is neither `Send` nor `Sync`. All calls on a system and the
    /// objects it produced should come from the thread that created it.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fmod_studio::{loader, LoadBankFlags, Options, System};
    ///
    /// # fn main() -> fmod_studio::Result<()> {
    /// let api = loader::load_default()?;
    /// let system = System::create_with(api, &Options::new())?;
    /// let bank = system.load_bank_file("Master Bank.bank", LoadBankFlags::NORMAL)?;
    /// for event in bank.event_list()? {
    ///     println!("{}", event.path()?);
    /// }
    /// system.release()?;
    /// # Ok(())
    /// # }
    /// ```
    System => sys::FMOD_STUDIO_SYSTEM
}

impl System {
    /// Create a system using the compiled-in header version
    pub fn create(api: &'static StudioApi) -> Result<Self> {
        Self::create_versioned(api, sys::FMOD_VERSION)
    }

    /// Create, configure and initialize a system in one step
    ///
    /// If configuration or initialization fails the native system is
    /// released before the error is returned.
    pub fn create_with(api: &'static StudioApi, options: &Options) -> Result<Self> {
        let system = Self::create_versioned(api, options.get_header_version())?;

        let setup = || -> Result<()> {
            if let Some(settings) = options.get_advanced_settings() {
                system.set_advanced_settings(settings)?;
            }
            system.initialize(
                options.get_max_channels(),
                options.get_studio_flags(),
                options.get_core_flags(),
                ptr::null_mut(),
            )
        };

        if let Err(e) = setup() {
            if let Err(release_err) = system.release() {
                log::warn!("failed to release system after setup error: {}", release_err);
            }
            return Err(e);
        }
        Ok(system)
    }

    fn create_versioned(api: &'static StudioApi, header_version: u32) -> Result<Self> {
        let create = symbol!(api, FMOD_Studio_System_Create);
        let mut raw = ptr::null_mut();
        check(unsafe { create(&mut raw, header_version) })?;
        log::debug!("created studio system {:p} (header {:#x})", raw, header_version);
        Ok(Self::from_raw(raw, api))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    pub fn set_advanced_settings(&self, settings: &AdvancedSettings) -> Result<()> {
        let mut raw = settings.to_c();
        call!(self.handle, FMOD_Studio_System_SetAdvancedSettings, &mut raw)
    }

    pub fn advanced_settings(&self) -> Result<AdvancedSettings> {
        let mut raw = AdvancedSettings::blank_c();
        call!(self.handle, FMOD_Studio_System_GetAdvancedSettings, &mut raw)?;
        Ok(AdvancedSettings::from_c(raw))
    }

    /// Initialize the system
    ///
    /// `extra_driver_data` is passed to the output plugin unchanged and is
    /// usually null.
    pub fn initialize(
        &self,
        max_channels: i32,
        studio_flags: InitFlags,
        core_flags: CoreInitFlags,
        extra_driver_data: *mut c_void,
    ) -> Result<()> {
        call!(
            self.handle,
            FMOD_Studio_System_Initialize,
            max_channels,
            studio_flags.bits(),
            core_flags.bits(),
            extra_driver_data,
        )?;
        log::debug!(
            "initialized studio system {:p} with {} channels",
            self.as_ptr(),
            max_channels
        );
        Ok(())
    }

    /// Release the system and everything it owns
    ///
    /// Fails with [`Error::CallbackRegistered`] while a system callback is
    /// registered; call [`System::clear_callback`] first.
    pub fn release(&self) -> Result<()> {
        let raw = self.handle.checked()?;
        if callback::is_registered(Owner::System(raw as usize)) {
            return Err(Error::CallbackRegistered);
        }
        call!(self.handle, FMOD_Studio_System_Release)?;
        log::debug!("released studio system {:p}", raw);
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    /// Process pending commands and fire callbacks; call once per frame
    ///
    /// Event callbacks of instances destroyed by the update are dropped.
    pub fn update(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_Update)?;
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    pub fn core_system(&self) -> Result<CoreSystem> {
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_System_GetLowLevelSystem, &mut raw)?;
        Ok(CoreSystem::from_raw(raw, self.handle.api()))
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn event(&self, id: &Guid, mode: LoadingMode) -> Result<EventDescription> {
        let id = id.to_c();
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_System_GetEvent, &id, mode.to_c(), &mut raw)?;
        Ok(EventDescription::from_raw(raw, self.handle.api()))
    }

    /// Resolve an event by path, e.g. `"event:/UI/Click"`
    pub fn event_by_path(&self, path: &str) -> Result<EventDescription> {
        let id = self.lookup_id(path)?;
        self.event(&id, LoadingMode::BeginNow)
    }

    pub fn mixer_strip(&self, id: &Guid, mode: LoadingMode) -> Result<MixerStrip> {
        let id = id.to_c();
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_System_GetMixerStrip, &id, mode.to_c(), &mut raw)?;
        Ok(MixerStrip::from_raw(raw, self.handle.api()))
    }

    pub fn bank(&self, id: &Guid) -> Result<Bank> {
        let id = id.to_c();
        let mut raw = ptr::null_mut();
        call!(self.handle, FMOD_Studio_System_GetBank, &id, &mut raw)?;
        Ok(Bank::from_raw(raw, self.handle.api()))
    }

    /// Look up a sound table entry by key
    pub fn sound_info(&self, key: &str) -> Result<SoundInfo> {
        let key = to_cstring(key)?;
        let mut raw: sys::FMOD_STUDIO_SOUND_INFO = unsafe { std::mem::zeroed() };
        call!(self.handle, FMOD_Studio_System_GetSoundInfo, key.as_ptr(), &mut raw)?;
        Ok(unsafe { SoundInfo::from_c(&raw) })
    }

    pub fn lookup_id(&self, path: &str) -> Result<Guid> {
        let path = to_cstring(path)?;
        let mut raw = sys::FMOD_GUID::default();
        call!(self.handle, FMOD_Studio_System_LookupID, path.as_ptr(), &mut raw)?;
        Ok(Guid::from(raw))
    }

    pub fn lookup_path(&self, id: &Guid) -> Result<String> {
        let id = id.to_c();
        read_truncating(|buf, size, retrieved| {
            call!(self.handle, FMOD_Studio_System_LookupPath, &id, buf, size, retrieved)
        })
    }

    // =========================================================================
    // Listener
    // =========================================================================

    pub fn listener_attributes(&self) -> Result<Attributes3D> {
        let mut raw = sys::FMOD_3D_ATTRIBUTES::default();
        call!(self.handle, FMOD_Studio_System_GetListenerAttributes, &mut raw)?;
        Ok(Attributes3D::from(raw))
    }

    pub fn set_listener_attributes(&self, attributes: &Attributes3D) -> Result<()> {
        let raw = attributes.to_c();
        call!(self.handle, FMOD_Studio_System_SetListenerAttributes, &raw)
    }

    // =========================================================================
    // Banks
    // =========================================================================

    pub fn load_bank_file(&self, path: &str, flags: LoadBankFlags) -> Result<Bank> {
        let c_path = to_cstring(path)?;
        let mut raw = ptr::null_mut();
        call!(
            self.handle,
            FMOD_Studio_System_LoadBankFile,
            c_path.as_ptr(),
            flags.bits(),
            &mut raw,
        )?;
        log::debug!("loaded bank {:p} from {}", raw, path);
        Ok(Bank::from_raw(raw, self.handle.api()))
    }

    /// Load a bank from a memory block
    ///
    /// The block is copied by the native library, so `data` may be dropped as
    /// soon as this returns.
    pub fn load_bank_memory(&self, data: &[u8], flags: LoadBankFlags) -> Result<Bank> {
        let length =
            c_int::try_from(data.len()).map_err(|_| Error::Status(Status::InvalidParam))?;
        let mut raw = ptr::null_mut();
        call!(
            self.handle,
            FMOD_Studio_System_LoadBankMemory,
            data.as_ptr().cast(),
            length,
            sys::FMOD_STUDIO_LOAD_MEMORY,
            flags.bits(),
            &mut raw,
        )?;
        log::debug!("loaded bank {:p} from {} bytes of memory", raw, data.len());
        Ok(Bank::from_raw(raw, self.handle.api()))
    }

    /// Load a bank through caller-supplied file callbacks
    ///
    /// # Safety
    ///
    /// The callbacks and user data in `info` must stay valid for as long as
    /// the native library may read the bank, and must behave as the native
    /// file callback contract requires.
    pub unsafe fn load_bank_custom(&self, info: &BankInfo, flags: LoadBankFlags) -> Result<Bank> {
        let raw_info = info.to_c();
        let mut raw = ptr::null_mut();
        call!(
            self.handle,
            FMOD_Studio_System_LoadBankCustom,
            &raw_info,
            flags.bits(),
            &mut raw,
        )?;
        log::debug!("loaded bank {:p} through custom callbacks", raw);
        Ok(Bank::from_raw(raw, self.handle.api()))
    }

    pub fn unload_all(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_UnloadAll)?;
        log::debug!("unloaded all banks of system {:p}", self.as_ptr());
        callback::purge_destroyed(self.handle.api());
        Ok(())
    }

    /// Block until every queued command has been executed
    pub fn flush_commands(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_FlushCommands)
    }

    pub fn bank_count(&self) -> Result<i32> {
        let mut count: c_int = 0;
        call!(self.handle, FMOD_Studio_System_GetBankCount, &mut count)?;
        Ok(count)
    }

    pub fn bank_list(&self) -> Result<Vec<Bank>> {
        let api = self.handle.api();
        let raw = list::fetch(
            || self.bank_count(),
            |buf, capacity, count| {
                call!(self.handle, FMOD_Studio_System_GetBankList, buf, capacity, count)
            },
        )?;
        Ok(raw.into_iter().map(|b| Bank::from_raw(b, api)).collect())
    }

    // =========================================================================
    // Command capture
    // =========================================================================

    pub fn start_record_commands(&self, path: &str, flags: RecordCommandsFlags) -> Result<()> {
        let path = to_cstring(path)?;
        call!(
            self.handle,
            FMOD_Studio_System_StartRecordCommands,
            path.as_ptr(),
            flags.bits(),
        )
    }

    pub fn stop_record_commands(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_StopRecordCommands)
    }

    pub fn playback_commands(&self, path: &str) -> Result<()> {
        let path = to_cstring(path)?;
        call!(self.handle, FMOD_Studio_System_PlaybackCommands, path.as_ptr())
    }

    // =========================================================================
    // Profiling
    // =========================================================================

    pub fn cpu_usage(&self) -> Result<CpuUsage> {
        let mut raw = sys::FMOD_STUDIO_CPU_USAGE::default();
        call!(self.handle, FMOD_Studio_System_GetCPUUsage, &mut raw)?;
        Ok(CpuUsage::new(raw))
    }

    pub fn buffer_usage(&self) -> Result<BufferUsage> {
        let mut raw = sys::FMOD_STUDIO_BUFFER_USAGE::default();
        call!(self.handle, FMOD_Studio_System_GetBufferUsage, &mut raw)?;
        Ok(BufferUsage::new(raw))
    }

    pub fn reset_buffer_usage(&self) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_ResetBufferUsage)
    }

    // =========================================================================
    // Callbacks and user data
    // =========================================================================

    /// Register a closure for the update-cycle callbacks selected by `mask`
    ///
    /// Replaces any closure previously registered on this system. The
    /// closure runs on the native update thread.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fmod_studio::{SystemCallbackMask, SystemCallbackType};
    /// # fn demo(system: &fmod_studio::System) -> fmod_studio::Result<()> {
    /// system.set_callback(SystemCallbackMask::PREUPDATE, |_system, kind| {
    ///     assert_eq!(kind, SystemCallbackType::PreUpdate);
    ///     Ok(())
    /// })?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn set_callback<F>(&self, mask: SystemCallbackMask, f: F) -> Result<()>
    where
        F: Fn(&System, SystemCallbackType) -> Result<()> + Send + Sync + 'static,
    {
        let raw = self.handle.checked()?;
        callback::register(
            Owner::System(raw as usize),
            self.handle.api(),
            Callback::System(Arc::new(f)),
            || {
                call!(
                    self.handle,
                    FMOD_Studio_System_SetCallback,
                    Some(callback::system_trampoline),
                    mask.bits(),
                )
            },
        )
    }

    /// Stop receiving system callbacks and drop the registered closure
    pub fn clear_callback(&self) -> Result<()> {
        let raw = self.handle.checked()?;
        callback::unregister(Owner::System(raw as usize), || {
            call!(self.handle, FMOD_Studio_System_SetCallback, None, 0)
        })
    }

    pub fn user_data(&self) -> Result<*mut c_void> {
        let mut data = ptr::null_mut();
        call!(self.handle, FMOD_Studio_System_GetUserData, &mut data)?;
        Ok(data)
    }

    pub fn set_user_data(&self, data: *mut c_void) -> Result<()> {
        call!(self.handle, FMOD_Studio_System_SetUserData, data)
    }
}
