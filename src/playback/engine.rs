//! Playback data generation engine
//!
//! Places each note of a scale on a beat timeline and resolves its MIDI key.

use tracing::debug;

use super::types::{PlaybackData, PlaybackNote};
use crate::config::PlaybackSettings;
use crate::error::ScaleError;
use crate::scale::RelativeNote;

/// MIDI key for a relative note when the starting note sits in `base_octave`.
///
/// Fails if the key falls outside 0-127.
///
/// ```
/// use scales::playback::midi_key;
/// use scales::{PitchClass, RelativeNote};
///
/// assert_eq!(midi_key(&RelativeNote::new(PitchClass::C, 0), 4).unwrap(), 60);
/// assert_eq!(midi_key(&RelativeNote::new(PitchClass::A, 1), 4).unwrap(), 69);
/// assert!(midi_key(&RelativeNote::new(PitchClass::G, 1), 9).is_err());
/// ```
pub fn midi_key(note: &RelativeNote, base_octave: i8) -> Result<u8, ScaleError> {
    let key = 12 * (i64::from(base_octave) + 1)
        + i64::from(note.pitch.distance_from_c())
        + 12 * i64::from(note.octave);
    u8::try_from(key)
        .ok()
        .filter(|key| *key <= 127)
        .ok_or_else(|| ScaleError::MidiRange {
            note: format!("{} octave {:+}", note.pitch, note.octave),
            key,
        })
}

/// Generate playback data for a built scale
///
/// Every note gets the same length and follows the previous one without a gap.
///
/// # Errors
/// - `ScaleError::ConfigError` if the settings are out of range
/// - `ScaleError::MidiRange` if any note lands outside the MIDI key range for the configured
///   octave
pub fn generate_playback_data(
    notes: &[RelativeNote],
    settings: &PlaybackSettings,
) -> Result<PlaybackData, ScaleError> {
    settings.validate()?;
    let duration = settings.note_length.as_beats();
    let mut current_time = 0.0;
    let mut playback_notes = Vec::with_capacity(notes.len());

    for (note_index, note) in notes.iter().enumerate() {
        let midi_note = midi_key(note, settings.octave)?;
        playback_notes.push(PlaybackNote {
            midi_note,
            start_time: current_time,
            duration,
            note_index,
            octave: note.octave,
        });
        current_time += duration;
    }

    debug!(
        notes = playback_notes.len(),
        beats = current_time,
        tempo = settings.tempo,
        "generated playback data"
    );

    Ok(PlaybackData {
        tempo: settings.tempo,
        notes: playback_notes,
    })
}
