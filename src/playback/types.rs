//! Playback data type definitions

use serde::Serialize;

/// Playback data for a single note
///
/// # Fields
/// - `midi_note`: MIDI key number (60 = middle C)
/// - `start_time`: Start time in beats from the beginning of the sequence
/// - `duration`: Duration in beats
/// - `note_index`: Position in the scale (0 is the starting note)
/// - `octave`: Octave offset relative to the starting note
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackNote {
    pub midi_note: u8,
    pub start_time: f64,
    pub duration: f64,
    pub note_index: usize,
    pub octave: i32,
}

impl PlaybackNote {
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

/// Playback data for a whole scale
///
/// # Fields
/// - `tempo`: Tempo in BPM (beat = quarter note)
/// - `notes`: One entry per scale note, in order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackData {
    pub tempo: u16,
    pub notes: Vec<PlaybackNote>,
}

impl PlaybackData {
    /// Total length in beats
    pub fn total_beats(&self) -> f64 {
        self.notes.last().map(PlaybackNote::end_time).unwrap_or(0.0)
    }
}
