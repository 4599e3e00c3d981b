use super::Probe;
use crate::error::{Result, StatusError};
use crate::platform::{AudioMixerProvider, MixerReading};
use crate::utils::icons::Glyphs;

/// Playback volume of one mixer control.
pub struct VolumeProbe<M> {
    control: String,
    glyphs: Glyphs,
    mixer: M,
}

impl<M: AudioMixerProvider> VolumeProbe<M> {
    pub fn new(control: String, glyphs: Glyphs, mixer: M) -> Self {
        Self {
            control,
            glyphs,
            mixer,
        }
    }
}

impl<M: AudioMixerProvider> Probe for VolumeProbe<M> {
    fn label(&self) -> &str {
        "volume"
    }

    fn sample(&mut self) -> Result<String> {
        match self.mixer.playback(&self.control)? {
            Some(reading) => volume_text(&reading, &self.glyphs),
            None => {
                log::debug!("Mixer control {} not found", self.control);
                Ok(String::new())
            }
        }
    }
}

/// Muted controls show the muted glyph alone; otherwise the speaker glyph
/// and the volume as a rounded share of the control's maximum.
pub fn volume_text(reading: &MixerReading, glyphs: &Glyphs) -> Result<String> {
    if reading.muted {
        return Ok(glyphs.volume_muted.clone());
    }

    if reading.max <= 0 {
        return Err(StatusError::malformed(format!(
            "mixer maximum is {}",
            reading.max
        )));
    }

    let percent = (100.0 * reading.volume as f64 / reading.max as f64).round() as i64;
    Ok(format!("{}{}%", glyphs.volume_glyph(percent), percent))
}
