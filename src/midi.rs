//! # Standard MIDI File Export
//!
//! Writes [`PlaybackData`] as a single-track Standard MIDI File.
//!
//! The track holds, in order:
//! - an optional track name (the settings title)
//! - a tempo event
//! - a program change on the configured channel
//! - a note on / note off pair per note
//! - end of track
//!
//! Time is metrical, 480 ticks per quarter note.

use midly::num::{u15, u24, u28, u4, u7};
use midly::{Format, Header, MetaMessage, MidiMessage, Smf, Timing, TrackEvent, TrackEventKind};
use tracing::debug;

use crate::config::PlaybackSettings;
use crate::error::ScaleError;
use crate::playback::PlaybackData;

/// Ticks per quarter note
pub const TICKS_PER_BEAT: u16 = 480;

fn beats_to_ticks(beats: f64) -> u32 {
    (beats * f64::from(TICKS_PER_BEAT)).round() as u32
}

/// Encode playback data as Standard MIDI File bytes
///
/// Fails with `ScaleError::ConfigError` for out-of-range settings and with
/// `ScaleError::MidiRange` for a note key above 127.
pub fn to_midi_file(data: &PlaybackData, settings: &PlaybackSettings) -> Result<Vec<u8>, ScaleError> {
    settings.validate()?;
    let channel = u4::new(settings.channel);
    let velocity = u7::new(settings.velocity);

    // (tick, order, event); note offs sort before note ons on the same tick
    let mut timed: Vec<(u32, u8, TrackEventKind)> = Vec::with_capacity(data.notes.len() * 2);
    for note in &data.notes {
        if note.midi_note > 127 {
            return Err(ScaleError::MidiRange {
                note: format!("note {}", note.note_index),
                key: i64::from(note.midi_note),
            });
        }
        let key = u7::new(note.midi_note);
        timed.push((
            beats_to_ticks(note.start_time),
            1,
            TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOn { key, vel: velocity },
            },
        ));
        timed.push((
            beats_to_ticks(note.end_time()),
            0,
            TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOff { key, vel: u7::new(0) },
            },
        ));
    }
    timed.sort_by_key(|(tick, order, _)| (*tick, *order));

    let mut track = Vec::with_capacity(timed.len() + 4);
    if let Some(title) = &settings.title {
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Meta(MetaMessage::TrackName(title.as_bytes())),
        });
    }
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(settings.micros_per_beat()))),
    });
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Midi {
            channel,
            message: MidiMessage::ProgramChange {
                program: u7::new(settings.program),
            },
        },
    });

    let mut last_tick = 0;
    for (tick, _, kind) in timed {
        track.push(TrackEvent {
            delta: u28::new(tick - last_tick),
            kind,
        });
        last_tick = tick;
    }
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });

    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(TICKS_PER_BEAT)),
    ));
    smf.tracks.push(track);

    let mut bytes = Vec::new();
    smf.write_std(&mut bytes)
        .map_err(|e| ScaleError::MidiWrite(e.to_string()))?;

    debug!(
        notes = data.notes.len(),
        bytes = bytes.len(),
        "encoded MIDI file"
    );
    Ok(bytes)
}
