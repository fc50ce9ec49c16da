use crate::config::{NoteLength, PlaybackSettings};
use crate::error::ScaleError;
use crate::playback::midi_key;
use crate::scale::RelativeNote;

/// Divisions per quarter note
const DIVISIONS: u32 = 4;

/// Divisions in a 4/4 measure
const MEASURE_DIVISIONS: u32 = 4 * DIVISIONS;

/// Convert a built scale to MusicXML
///
/// Notes are written in 4/4, one measure after another, each with the configured note
/// length. The last measure is padded with a rest.
pub fn to_musicxml(notes: &[RelativeNote], settings: &PlaybackSettings) -> Result<String, ScaleError> {
    settings.validate()?;
    let mut xml = String::new();

    // XML declaration and doctype
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">"#);
    xml.push('\n');

    xml.push_str(r#"<score-partwise version="4.0">"#);
    xml.push('\n');

    if let Some(title) = &settings.title {
        xml.push_str("  <work>\n");
        xml.push_str(&format!("    <work-title>{}</work-title>\n", escape_xml(title)));
        xml.push_str("  </work>\n");
    }

    // Part list
    xml.push_str("  <part-list>\n");
    xml.push_str("    <score-part id=\"P1\">\n");
    xml.push_str("      <part-name>Scale</part-name>\n");
    xml.push_str("    </score-part>\n");
    xml.push_str("  </part-list>\n");

    xml.push_str("  <part id=\"P1\">\n");

    let length = settings.note_length;
    let note_divisions = divisions(length);
    let mut measure_number = 1;
    let mut filled = 0;

    xml.push_str(&measure_open(measure_number, settings.tempo));
    for note in notes {
        if filled == MEASURE_DIVISIONS {
            xml.push_str("    </measure>\n");
            measure_number += 1;
            filled = 0;
            xml.push_str(&measure_open(measure_number, settings.tempo));
        }
        xml.push_str(&note_to_xml(note, settings.octave, length)?);
        filled += note_divisions;
    }
    if filled < MEASURE_DIVISIONS {
        xml.push_str(&rest_to_xml(MEASURE_DIVISIONS - filled));
    }
    xml.push_str("    </measure>\n");

    xml.push_str("  </part>\n");
    xml.push_str("</score-partwise>\n");

    Ok(xml)
}

fn measure_open(number: u32, tempo: u16) -> String {
    let mut xml = format!("    <measure number=\"{}\">\n", number);

    // Attributes and tempo on first measure
    if number == 1 {
        xml.push_str("      <attributes>\n");
        xml.push_str(&format!("        <divisions>{}</divisions>\n", DIVISIONS));
        xml.push_str("        <time>\n");
        xml.push_str("          <beats>4</beats>\n");
        xml.push_str("          <beat-type>4</beat-type>\n");
        xml.push_str("        </time>\n");
        xml.push_str("        <clef>\n");
        xml.push_str("          <sign>G</sign>\n");
        xml.push_str("          <line>2</line>\n");
        xml.push_str("        </clef>\n");
        xml.push_str("      </attributes>\n");
        xml.push_str(&format!("      <sound tempo=\"{}\"/>\n", tempo));
    }
    xml
}

fn note_to_xml(note: &RelativeNote, base_octave: i8, length: NoteLength) -> Result<String, ScaleError> {
    // Octave numbers follow the MIDI key, so Ab and A under C land one octave lower
    let key = midi_key(note, base_octave)?;
    let octave = i32::from(key) / 12 - 1;
    let (step, alter) = note.pitch.step_alter();

    let mut xml = String::new();
    xml.push_str("      <note>\n");

    xml.push_str("        <pitch>\n");
    xml.push_str(&format!("          <step>{}</step>\n", step));
    if alter != 0 {
        xml.push_str(&format!("          <alter>{}</alter>\n", alter));
    }
    xml.push_str(&format!("          <octave>{}</octave>\n", octave));
    xml.push_str("        </pitch>\n");

    xml.push_str(&format!("        <duration>{}</duration>\n", divisions(length)));
    xml.push_str(&format!("        <type>{}</type>\n", length.musicxml_type()));

    match alter {
        1 => xml.push_str("        <accidental>sharp</accidental>\n"),
        -1 => xml.push_str("        <accidental>flat</accidental>\n"),
        _ => {}
    }

    xml.push_str("      </note>\n");
    Ok(xml)
}

fn rest_to_xml(duration: u32) -> String {
    let mut xml = String::new();

    xml.push_str("      <note>\n");
    xml.push_str("        <rest/>\n");
    xml.push_str(&format!("        <duration>{}</duration>\n", duration));
    xml.push_str("      </note>\n");
    xml
}

/// Convert note length to MusicXML divisions (4 per quarter note)
fn divisions(length: NoteLength) -> u32 {
    match length {
        NoteLength::Whole => 16,
        NoteLength::Half => 8,
        NoteLength::Quarter => 4,
        NoteLength::Eighth => 2,
        NoteLength::Sixteenth => 1,
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch::PitchClass;
    use crate::scale::build_scale;

    #[test]
    fn test_basic_musicxml_output() {
        let scale = build_scale(PitchClass::C, Some("major"));
        let xml = to_musicxml(&scale, &PlaybackSettings::default()).unwrap();
        assert!(xml.contains("<score-partwise"));
        assert!(xml.contains("<step>C</step>"));
        assert!(xml.contains("<step>D</step>"));
        assert!(xml.contains("<sound tempo=\"120\"/>"));
        // 8 quarter notes fill exactly two measures
        assert!(xml.contains("<measure number=\"2\">"));
        assert!(!xml.contains("<measure number=\"3\">"));
        assert!(!xml.contains("<rest/>"));
    }

    #[test]
    fn test_musicxml_octaves_follow_wrap() {
        let scale = build_scale(PitchClass::C, Some("major"));
        let xml = to_musicxml(&scale, &PlaybackSettings::default()).unwrap();
        assert_eq!(xml.matches("<octave>4</octave>").count(), 7);
        assert_eq!(xml.matches("<octave>5</octave>").count(), 1);
    }

    #[test]
    fn test_musicxml_accidentals() {
        let scale = build_scale(PitchClass::AFlat, Some("minor"));
        let xml = to_musicxml(&scale, &PlaybackSettings::default()).unwrap();
        assert!(xml.contains("<alter>-1</alter>"));
        assert!(xml.contains("<accidental>flat</accidental>"));
        assert!(xml.contains("<alter>1</alter>"));
        assert!(xml.contains("<accidental>sharp</accidental>"));
        // Ab4 setting puts the starting Ab below middle C
        assert!(xml.contains("<step>A</step>\n          <alter>-1</alter>\n          <octave>3</octave>"));
    }

    #[test]
    fn test_musicxml_pads_last_measure() {
        let scale = build_scale(PitchClass::C, Some("twinkle"));
        let xml = to_musicxml(&scale, &PlaybackSettings::default()).unwrap();
        // 15 quarter notes: three full measures and one with a quarter rest
        assert!(xml.contains("<measure number=\"4\">"));
        assert!(xml.contains("<rest/>\n        <duration>4</duration>"));
    }

    #[test]
    fn test_musicxml_with_title_and_length() {
        let settings = PlaybackSettings {
            title: Some("Scales & Arpeggios".to_string()),
            note_length: NoteLength::Eighth,
            ..Default::default()
        };
        let scale = build_scale(PitchClass::G, None);
        let xml = to_musicxml(&scale, &settings).unwrap();
        assert!(xml.contains("<work-title>Scales &amp; Arpeggios</work-title>"));
        assert!(xml.contains("<type>eighth</type>"));
        assert!(!xml.contains("<measure number=\"2\">"));
    }

    #[test]
    fn test_musicxml_rejects_invalid_settings() {
        let settings = PlaybackSettings {
            tempo: 0,
            ..Default::default()
        };
        let scale = build_scale(PitchClass::C, None);
        let err = to_musicxml(&scale, &settings).unwrap_err();
        assert!(matches!(err, ScaleError::ConfigError(_)));
    }

    #[test]
    fn test_musicxml_out_of_range() {
        let settings = PlaybackSettings {
            octave: 9,
            ..Default::default()
        };
        let scale = build_scale(PitchClass::G, None);
        assert!(to_musicxml(&scale, &settings).is_err());
    }
}
