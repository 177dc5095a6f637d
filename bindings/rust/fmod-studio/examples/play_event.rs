// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 fmod-studio-rs Contributors


//! Play one event from a bank until it stops (Rust)
//!
//! Loads the native library from `FMOD_STUDIO_LIBRARY` (or the platform
//! default), loads the given banks, starts the event and pumps
//! `System::update()` until the instance reports Stopped.
//!
//! Run: cargo run --example play_event -- <event path> <bank>...

use fmod_studio::{
    loader, EventCallback, LoadBankFlags, Options, PlaybackState, StopMode, System,
    SystemCallbackMask,
};
use std::env;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const TIMEOUT: Duration = Duration::from_secs(30);

fn main() -> fmod_studio::Result<()> {
    let mut args = env::args().skip(1);
    let (event_path, banks): (String, Vec<String>) = match args.next() {
        Some(event) => (event, args.collect()),
        None => {
            eprintln!("usage: play_event <event path> <bank>...");
            std::process::exit(2);
        }
    };

    println!("FMOD Studio Play Event Example (Rust)");
    println!("=====================================\n");

    let api = loader::load_default()?;
    let system = System::create_with(api, &Options::new().max_channels(128))?;

    for path in &banks {
        let bank = system.load_bank_file(path, LoadBankFlags::NORMAL)?;
        println!("loaded {} ({} events)", bank.path()?, bank.event_count()?);
    }

    // Count frames through the system callback
    let frames = Arc::new(AtomicU32::new(0));
    let counter = frames.clone();
    system.set_callback(SystemCallbackMask::POSTUPDATE, move |_, _| {
        counter.fetch_add(1, Ordering::Relaxed);
        Ok(())
    })?;

    let description = system.event_by_path(&event_path)?;
    println!(
        "{}: length {} ms, oneshot {}, 3d {}",
        description.path()?,
        description.length()?,
        description.is_oneshot()?,
        description.is_3d()?
    );
    for prop in description.user_properties()? {
        println!("  property {} = {:?}", prop.name, prop.value);
    }

    let instance = description.create_instance()?;
    instance.set_callback(|event, _| {
        match event {
            EventCallback::CreateProgrammerSound(props) => {
                println!("  programmer sound requested: {}", props.name()?);
            }
            other => println!("  event: {:?}", other.kind()),
        }
        Ok(())
    })?;
    instance.start()?;

    let started = Instant::now();
    loop {
        system.update()?;
        if instance.playback_state()? == PlaybackState::Stopped {
            break;
        }
        if started.elapsed() > TIMEOUT {
            println!("timed out, stopping");
            instance.stop(StopMode::AllowFadeout)?;
        }
        thread::sleep(FRAME);
    }

    println!("\nstopped after {} frames", frames.load(Ordering::Relaxed));
    instance.clear_callback()?;
    instance.release()?;
    system.clear_callback()?;
    system.release()?;
    Ok(())
}
