//! Plays one interval melodically, then harmonically.
//!
//! Uses the `interval!` macro so the interval name is validated at compile
//! time, prints both play plans, and renders them through the speakers.

mod common;

use anyhow::Result;
use common::{PlanPlayer, create_audio_stream};
use cpal::SampleFormat;
use cpal::traits::{DeviceTrait, HostTrait};
use eartrain::{PlaybackMode, interval, playback};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn main() -> Result<()> {
    println!("Eartrain Interval Playback Demo\n");

    let fifth = interval!("Perfect 5th");
    let root = 261.63; // C4
    let target = fifth.frequency_from(root);

    println!("Interval: {} ({} semitones)", fifth, fifth.semitones);
    println!("Root: {:.2} Hz, target: {:.2} Hz", root, target);

    let melodic = playback::schedule(root, target, PlaybackMode::Melodic, 0.75);
    let harmonic = playback::schedule(root, target, PlaybackMode::Harmonic, 0.75);

    for (label, plan) in [("Melodic", &melodic), ("Harmonic", &harmonic)] {
        println!("\n{} plan, {:.2}s total:", label, plan.total_duration());
        for request in plan.requests() {
            println!(
                "  {:>7.2} Hz at +{:.2}s for {:.2}s",
                request.frequency, request.start_offset, request.duration
            );
        }
    }

    // Setup audio output
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| anyhow::anyhow!("No output device available"))?;
    let config = device.default_output_config()?;

    let player = Arc::new(Mutex::new(PlanPlayer::new()));
    let _stream = match config.sample_format() {
        SampleFormat::F32 => {
            create_audio_stream::<f32, _>(&device, &config.into(), player.clone())?
        }
        SampleFormat::I16 => {
            create_audio_stream::<i16, _>(&device, &config.into(), player.clone())?
        }
        SampleFormat::U16 => {
            create_audio_stream::<u16, _>(&device, &config.into(), player.clone())?
        }
        sample_format => {
            return Err(anyhow::anyhow!(
                "Unsupported sample format: {}",
                sample_format
            ));
        }
    };

    println!("\nPlaying melodically...");
    player.lock().unwrap().play(&melodic);
    std::thread::sleep(Duration::from_secs_f64(melodic.busy_duration()));

    println!("Playing harmonically...");
    player.lock().unwrap().play(&harmonic);
    std::thread::sleep(Duration::from_secs_f64(harmonic.busy_duration()));

    // Let any release tail ring out before tearing the stream down
    while !player.lock().unwrap().is_silent() {
        std::thread::sleep(Duration::from_millis(10));
    }

    println!("\n✓ Playback complete");
    Ok(())
}
