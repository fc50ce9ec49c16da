//! # Playback Module
//!
//! Turn a built scale into timed MIDI notes.
//!
//! ## Purpose
//! A scale is a list of pitch classes with octave offsets. To hear it, each note needs an
//! absolute MIDI key and a place on a timeline. This module assigns both:
//! 1. **Pitch** - the starting note sits in the octave from [`PlaybackSettings`](crate::PlaybackSettings), every
//!    other note is offset by its relative octave
//! 2. **Timing** - notes play back to back, each lasting the configured note length
//!
//! ## Sub-modules
//! - `types` - PlaybackData and PlaybackNote definitions
//! - `engine` - MIDI key calculation and timeline generation
//!
//! ## Example
//! ```rust
//! use scales::playback::generate_playback_data;
//! use scales::{build_scale, PitchClass, PlaybackSettings};
//!
//! let scale = build_scale(PitchClass::C, Some("major"));
//! let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();
//!
//! assert_eq!(data.tempo, 120);
//! assert_eq!(data.notes.len(), 8);
//! assert_eq!(data.notes[0].midi_note, 60); // C4
//! assert_eq!(data.notes[7].midi_note, 72); // C5
//! ```
//!
//! ## MIDI Note System
//! - `midi = 12 * (octave + 1) + distance_from_c + 12 * relative_octave`
//! - With the default octave 4: C = 60, Ab = 56, G# = 68
//! - `Ab` and `A` sit below the C of their octave, so `Ab` with octave 4 is Ab3
//!
//! ## Related Modules
//! - `scale` - Produces the RelativeNote sequence
//! - `midi` - Writes PlaybackData as a Standard MIDI File
//! - `musicxml` - Parallel output format (notation instead of audio)

mod engine;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{generate_playback_data, midi_key};
pub use types::{PlaybackData, PlaybackNote};
