//! # Error Types
//!
//! This module defines all error types for the scales library.
//!
//! Building a scale from a resolved [`PitchClass`](crate::PitchClass) never fails. Errors only
//! come from the edges: resolving user-supplied names, validating custom interval patterns,
//! loading settings, and rendering a scale into MIDI.
//!
//! ## Error Types
//! - `UnknownPitch` - A pitch name that doesn't resolve to a pitch class
//! - `InvalidStep` - A custom interval pattern step wider than one octave
//! - `ConfigError` - Invalid YAML settings
//! - `MidiRange` - A note that falls outside the MIDI key range
//! - `MidiWrite` - Failure while encoding a MIDI file
//!
//! ## Usage
//! ```rust
//! use scales::{ScaleError, PitchClass};
//!
//! match "H".parse::<PitchClass>() {
//!     Ok(pitch) => println!("Starting on {}", pitch),
//!     Err(ScaleError::UnknownPitch(name)) => eprintln!("No such pitch: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaleError {
    /// A pitch name that doesn't match any known spelling.
    ///
    /// # Example
    /// ```
    /// # use scales::ScaleError;
    /// let err = ScaleError::UnknownPitch("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown pitch name: H");
    /// ```
    #[error("Unknown pitch name: {0}")]
    UnknownPitch(String),

    /// A custom interval step that would jump more than one octave.
    ///
    /// The octave wrap only shifts by a single octave, so every step must stay within
    /// -12..=12 semitones.
    ///
    /// # Example
    /// ```
    /// # use scales::ScaleError;
    /// let err = ScaleError::InvalidStep { index: 2, step: 13 };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Interval step 2 is 13 semitones (steps must be within -12..=12)"
    /// );
    /// ```
    #[error("Interval step {index} is {step} semitones (steps must be within -12..=12)")]
    InvalidStep { index: usize, step: i8 },

    /// Invalid settings.
    ///
    /// Occurs when the YAML settings file can't be parsed or holds an out-of-range value.
    #[error("Invalid settings: {0}")]
    ConfigError(String),

    /// A note that can't be expressed as a MIDI key number (0-127).
    #[error("Note {note} lands outside the MIDI range (key {key})")]
    MidiRange { note: String, key: i64 },

    /// Failure while encoding a Standard MIDI File.
    #[error("Failed to write MIDI: {0}")]
    MidiWrite(String),
}
