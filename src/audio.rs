//! Sound effects
//!
//! The game only fires notifications; whether a sound actually plays is
//! up to the implementation and never reported back.

use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

pub trait SoundEffects {
    fn on_eat(&self);

    fn on_game_over(&self);

    fn set_muted(&mut self, muted: bool);

    fn is_muted(&self) -> bool;
}

/// No audio at all
#[derive(Debug, Default)]
pub struct Silent {
    muted: bool,
}

impl SoundEffects for Silent {
    fn on_eat(&self) {}

    fn on_game_over(&self) {}

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Short generated beeps played through macroquad
pub struct ToneSounds {
    eat: Sound,
    game_over: Sound,
    volume: f32,
    muted: bool,
}

impl ToneSounds {
    pub async fn load(volume: f32) -> Result<Self, macroquad::Error> {
        let eat = load_sound_from_bytes(&generate_wav_sine(880.0, 0.08, 0.6)).await?;
        let game_over = load_sound_from_bytes(&generate_wav_sine(110.0, 0.25, 0.7)).await?;
        Ok(Self { eat, game_over, volume: volume.clamp(0.0, 1.0), muted: false })
    }

    fn play(&self, sound: &Sound, gain: f32) {
        if self.muted {
            return;
        }
        audio::play_sound(sound, PlaySoundParams { looped: false, volume: gain * self.volume });
    }
}

impl SoundEffects for ToneSounds {
    fn on_eat(&self) {
        self.play(&self.eat, 0.35);
    }

    fn on_game_over(&self) {
        self.play(&self.game_over, 0.6);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn is_muted(&self) -> bool {
        self.muted
    }
}

/// PCM16 mono WAV holding a single sine tone
pub fn generate_wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    const SAMPLE_RATE: u32 = 44_100;
    const BLOCK_ALIGN: u16 = 2;

    let num_samples = (duration_seconds * SAMPLE_RATE as f32) as u32;
    let data_size = num_samples * BLOCK_ALIGN as u32;
    let mut data: Vec<u8> = Vec::with_capacity(data_size as usize + 44);

    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");

    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&(SAMPLE_RATE * BLOCK_ALIGN as u32).to_le_bytes());
    data.extend_from_slice(&BLOCK_ALIGN.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());

    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let wave = (std::f32::consts::TAU * frequency_hz * t).sin();
        let sample = (amplitude * wave * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_header() {
        let wav = generate_wav_sine(440.0, 0.5, 1.0);
        let samples = 22_050;

        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + samples * 2);
        let declared = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(declared as usize, samples * 2);
    }

    #[test]
    fn test_silent_tracks_mute() {
        let mut sounds = Silent::default();
        assert!(!sounds.is_muted());
        sounds.set_muted(true);
        assert!(sounds.is_muted());
    }
}
