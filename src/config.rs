//! # Playback Settings
//!
//! Settings that control how a built scale is rendered: tempo, note length, the octave the
//! scale starts in, and the MIDI voice.
//!
//! Settings come from a small YAML document. Every key is optional:
//!
//! ```yaml
//! title: C Major
//! tempo: 90
//! note-length: eighth
//! octave: 4
//! velocity: 100
//! channel: 0
//! program: 0
//! ```
//!
//! ## Example
//! ```rust
//! use scales::{NoteLength, PlaybackSettings};
//!
//! let settings = PlaybackSettings::from_yaml("tempo: 90\nnote-length: eighth")?;
//! assert_eq!(settings.tempo, 90);
//! assert_eq!(settings.note_length, NoteLength::Eighth);
//! assert_eq!(settings.octave, 4);
//! # Ok::<(), scales::ScaleError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::ScaleError;

/// Length of every note in the rendered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteLength {
    Whole,
    Half,
    #[default]
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteLength {
    /// Duration in quarter-note beats
    pub fn as_beats(&self) -> f64 {
        match self {
            NoteLength::Whole => 4.0,
            NoteLength::Half => 2.0,
            NoteLength::Quarter => 1.0,
            NoteLength::Eighth => 0.5,
            NoteLength::Sixteenth => 0.25,
        }
    }

    /// MusicXML type name
    pub fn musicxml_type(&self) -> &'static str {
        match self {
            NoteLength::Whole => "whole",
            NoteLength::Half => "half",
            NoteLength::Quarter => "quarter",
            NoteLength::Eighth => "eighth",
            NoteLength::Sixteenth => "16th",
        }
    }
}

/// Raw settings for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawSettings {
    title: Option<String>,
    tempo: Option<u16>,
    note_length: Option<NoteLength>,
    octave: Option<i8>,
    velocity: Option<u8>,
    channel: Option<u8>,
    program: Option<u8>,
}

/// Validated playback settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSettings {
    pub title: Option<String>,
    /// Beats per minute, where a beat is a quarter note
    pub tempo: u16,
    pub note_length: NoteLength,
    /// Octave of the starting note (4 puts C at MIDI 60)
    pub octave: i8,
    pub velocity: u8,
    pub channel: u8,
    pub program: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            title: None,
            tempo: 120,
            note_length: NoteLength::Quarter,
            octave: 4,
            velocity: 100,
            channel: 0,
            program: 0,
        }
    }
}

impl PlaybackSettings {
    /// Parse settings from a YAML document. An empty document gives the defaults.
    pub fn from_yaml(content: &str) -> Result<Self, ScaleError> {
        let raw: RawSettings = if content.trim().is_empty() {
            RawSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| ScaleError::ConfigError(e.to_string()))?
        };
        let settings = Self::resolve(raw)?;
        debug!(?settings, "loaded playback settings");
        Ok(settings)
    }

    /// Read and parse a YAML settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScaleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScaleError::ConfigError(format!("Can't read '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    fn resolve(raw: RawSettings) -> Result<Self, ScaleError> {
        let defaults = Self::default();
        let settings = Self {
            title: raw.title,
            tempo: raw.tempo.unwrap_or(defaults.tempo),
            note_length: raw.note_length.unwrap_or(defaults.note_length),
            octave: raw.octave.unwrap_or(defaults.octave),
            velocity: raw.velocity.unwrap_or(defaults.velocity),
            channel: raw.channel.unwrap_or(defaults.channel),
            program: raw.program.unwrap_or(defaults.program),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Check every field against its allowed range.
    ///
    /// Settings built by hand skip the checks done while loading, so every renderer
    /// calls this before using them.
    pub fn validate(&self) -> Result<(), ScaleError> {
        // Below 4 BPM a beat no longer fits the 24-bit MIDI tempo field
        if !(4..=400).contains(&self.tempo) {
            return Err(ScaleError::ConfigError(format!(
                "tempo must be between 4 and 400 BPM, got {}",
                self.tempo
            )));
        }
        if !(-1..=9).contains(&self.octave) {
            return Err(ScaleError::ConfigError(format!(
                "octave must be between -1 and 9, got {}",
                self.octave
            )));
        }
        if !(1..=127).contains(&self.velocity) {
            return Err(ScaleError::ConfigError(format!(
                "velocity must be between 1 and 127, got {}",
                self.velocity
            )));
        }
        if self.channel > 15 {
            return Err(ScaleError::ConfigError(format!(
                "channel must be between 0 and 15, got {}",
                self.channel
            )));
        }
        if self.program > 127 {
            return Err(ScaleError::ConfigError(format!(
                "program must be between 0 and 127, got {}",
                self.program
            )));
        }
        Ok(())
    }

    /// Microseconds per quarter note, as stored in a MIDI tempo event.
    ///
    /// A zero tempo is treated as 1 BPM; `validate` rejects it before rendering.
    pub fn micros_per_beat(&self) -> u32 {
        60_000_000 / u32::from(self.tempo.max(1))
    }
}
