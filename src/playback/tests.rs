use super::*;
use crate::config::{NoteLength, PlaybackSettings};
use crate::pitch::PitchClass;
use crate::scale::{build_scale, RelativeNote};

#[test]
fn test_playback_c_major_midi_notes() {
    let scale = build_scale(PitchClass::C, Some("major"));
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();

    // C4=60, D4=62, E4=64, F4=65, G4=67, A4=69, B4=71, C5=72
    let keys: Vec<u8> = data.notes.iter().map(|n| n.midi_note).collect();
    assert_eq!(keys, vec![60, 62, 64, 65, 67, 69, 71, 72]);
}

#[test]
fn test_playback_basic_timing() {
    let scale = build_scale(PitchClass::D, Some("minor"));
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();

    assert_eq!(data.tempo, 120);
    assert_eq!(data.notes.len(), 8);
    assert_eq!(data.notes[0].start_time, 0.0);
    assert_eq!(data.notes[0].duration, 1.0);
    assert_eq!(data.notes[1].start_time, 1.0);
    assert_eq!(data.notes[7].start_time, 7.0);
    assert_eq!(data.total_beats(), 8.0);
}

#[test]
fn test_playback_note_length_and_tempo() {
    let settings = PlaybackSettings {
        tempo: 80,
        note_length: NoteLength::Eighth,
        ..Default::default()
    };
    let scale = build_scale(PitchClass::E, None);
    let data = generate_playback_data(&scale, &settings).unwrap();

    assert_eq!(data.tempo, 80);
    assert_eq!(data.notes[1].start_time, 0.5);
    assert_eq!(data.notes[1].duration, 0.5);
    assert_eq!(data.total_beats(), 4.0);
}

#[test]
fn test_playback_note_index_and_octave() {
    let scale = build_scale(PitchClass::GSharp, Some("major"));
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();

    for (i, note) in data.notes.iter().enumerate() {
        assert_eq!(note.note_index, i);
        assert_eq!(note.octave, scale[i].octave);
    }
    // G#4 = 68, then A#4 = 70 after the wrap
    assert_eq!(data.notes[0].midi_note, 68);
    assert_eq!(data.notes[1].midi_note, 70);
}

#[test]
fn test_playback_a_flat_sits_below_c() {
    let scale = build_scale(PitchClass::AFlat, Some("minor"));
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();

    assert_eq!(data.notes[0].midi_note, 56); // Ab3
    assert_eq!(data.notes[1].midi_note, 58); // A#3
}

#[test]
fn test_playback_twinkle_melody() {
    let scale = build_scale(PitchClass::C, Some("twinkle"));
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();

    let keys: Vec<u8> = data.notes.iter().map(|n| n.midi_note).collect();
    assert_eq!(
        keys,
        vec![60, 60, 67, 67, 69, 69, 67, 67, 65, 65, 64, 64, 62, 62, 60]
    );
}

#[test]
fn test_playback_keys_ascend_through_major_scales() {
    for start in PitchClass::ALL {
        let scale = build_scale(start, Some("major"));
        let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();
        let first = data.notes[0].midi_note;
        let last = data.notes[7].midi_note;
        assert_eq!(last, first + 12, "{} major should span one octave", start);
        assert!(data.notes.windows(2).all(|w| w[0].midi_note < w[1].midi_note));
    }
}

#[test]
fn test_playback_out_of_midi_range() {
    let settings = PlaybackSettings {
        octave: 9,
        ..Default::default()
    };
    let scale = build_scale(PitchClass::G, Some("major"));
    let err = generate_playback_data(&scale, &settings).unwrap_err();
    assert!(matches!(err, crate::ScaleError::MidiRange { key: 129, .. }));
}

#[test]
fn test_playback_rejects_zero_tempo() {
    let settings = PlaybackSettings {
        tempo: 0,
        ..Default::default()
    };
    let scale = build_scale(PitchClass::C, None);
    let err = generate_playback_data(&scale, &settings).unwrap_err();
    assert!(matches!(err, crate::ScaleError::ConfigError(_)));
}

#[test]
fn test_midi_key_low_octave() {
    assert_eq!(midi_key(&RelativeNote::new(PitchClass::C, 0), -1).unwrap(), 0);
    assert!(midi_key(&RelativeNote::new(PitchClass::B, 0), -1).is_err());
}

#[test]
fn test_midi_key_extreme_octaves_are_out_of_range() {
    assert!(midi_key(&RelativeNote::new(PitchClass::C, i32::MAX), 4).is_err());
    assert!(midi_key(&RelativeNote::new(PitchClass::C, i32::MIN), 4).is_err());
}

#[test]
fn test_playback_serializes_camel_case() {
    let scale = build_scale(PitchClass::C, None);
    let data = generate_playback_data(&scale, &PlaybackSettings::default()).unwrap();
    let json = serde_json::to_string(&data).unwrap();
    assert!(json.contains("\"midiNote\":60"));
    assert!(json.contains("\"startTime\":0.0"));
    assert!(json.contains("\"noteIndex\":7"));
}
