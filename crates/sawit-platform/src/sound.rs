//! Two-tone notification cue.
//!
//! The cue is synthesized as a 16-bit mono WAV file and handed to the
//! platform's command-line player. Playback is detached: the call returns
//! once the player has been spawned.

use std::f32::consts::TAU;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use sawit_common::PlatformError;
use tracing::debug;

const SAMPLE_RATE: u32 = 22_050;
const FLOOR_GAIN: f32 = 0.01;

/// One sine tone with an exponential gain decay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    /// Offset from the start of the cue, in seconds.
    pub start_secs: f32,
    /// Time at which the tone stops, in seconds from the start of the cue.
    pub end_secs: f32,
    /// Gain at `start_secs`; decays exponentially to 0.01 at `end_secs`.
    pub peak_gain: f32,
}

/// 830 Hz followed by a higher 1200 Hz tone that overlaps its tail.
pub const NOTIFICATION_CUE: [Tone; 2] = [
    Tone {
        frequency_hz: 830.0,
        start_secs: 0.0,
        end_secs: 0.15,
        peak_gain: 0.15,
    },
    Tone {
        frequency_hz: 1200.0,
        start_secs: 0.12,
        end_secs: 0.30,
        peak_gain: 0.15,
    },
];

/// Render tones into signed 16-bit PCM samples, mixing overlaps.
pub fn render_pcm(tones: &[Tone], sample_rate: u32) -> Vec<i16> {
    let total_secs = tones.iter().map(|t| t.end_secs).fold(0.0_f32, f32::max);
    let total_samples = (total_secs * sample_rate as f32).ceil() as usize;
    let mut mix = vec![0.0_f32; total_samples];

    for tone in tones {
        let span = tone.end_secs - tone.start_secs;
        if span <= 0.0 {
            continue;
        }
        let first = (tone.start_secs * sample_rate as f32) as usize;
        let last = ((tone.end_secs * sample_rate as f32) as usize).min(total_samples);
        for (i, sample) in mix.iter_mut().enumerate().take(last).skip(first) {
            let t = i as f32 / sample_rate as f32;
            let progress = (t - tone.start_secs) / span;
            let gain = tone.peak_gain * (FLOOR_GAIN / tone.peak_gain).powf(progress);
            *sample += gain * (TAU * tone.frequency_hz * (t - tone.start_secs)).sin();
        }
    }

    mix.into_iter()
        .map(|s| (s.clamp(-1.0, 1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Wrap PCM samples in a canonical 44-byte RIFF/WAVE header.
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut out = Vec::with_capacity(44 + data_len as usize);

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes());
    out.extend_from_slice(&16u16.to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    for s in samples {
        out.extend_from_slice(&s.to_le_bytes());
    }
    out
}

const CUE_FILE_NAME: &str = "sawit-notification.wav";

/// Path of the cue WAV in `dir`, (re)written unless it already holds
/// exactly the expected bytes.
///
/// The file is written under a unique temporary name and renamed into
/// place, so a player never sees a partial file.
fn cue_file_in(dir: &Path) -> Result<PathBuf, PlatformError> {
    let path = dir.join(CUE_FILE_NAME);
    let wav = encode_wav(&render_pcm(&NOTIFICATION_CUE, SAMPLE_RATE), SAMPLE_RATE);
    if fs::read(&path).is_ok_and(|existing| existing == wav) {
        return Ok(path);
    }

    let tmp = dir.join(format!(".{CUE_FILE_NAME}.{}.tmp", uuid::Uuid::new_v4().simple()));
    let written = fs::write(&tmp, &wav).and_then(|()| fs::rename(&tmp, &path));
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(PlatformError::AudioError(format!(
            "failed to write cue to {}: {e}",
            path.display()
        )));
    }
    debug!(path = %path.display(), "notification cue written");
    Ok(path)
}

/// Play the notification cue without blocking the caller.
pub fn play_notification_cue() -> Result<(), PlatformError> {
    let path = cue_file_in(&std::env::temp_dir())?;
    let mut last_err = None;

    for (program, args) in player_commands() {
        let spawned = Command::new(program)
            .args(*args)
            .arg(&path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(mut child) => {
                debug!(player = program, "notification cue started");
                std::thread::spawn(move || {
                    let _ = child.wait();
                });
                return Ok(());
            }
            Err(e) => last_err = Some(format!("{program}: {e}")),
        }
    }

    Err(match last_err {
        Some(msg) => PlatformError::AudioError(msg),
        None => PlatformError::NotSupported("no audio player for this platform".into()),
    })
}

#[cfg(target_os = "macos")]
fn player_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[("afplay", &[])]
}

#[cfg(target_os = "linux")]
fn player_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[("paplay", &[]), ("aplay", &["-q"])]
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn player_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[]
}
