pub mod config;
pub mod error;
pub mod midi;
pub mod musicxml;
pub mod pitch;
pub mod playback;
pub mod scale;

pub use config::*;
pub use error::*;
pub use midi::to_midi_file;
pub use musicxml::to_musicxml;
pub use pitch::PitchClass;
pub use playback::{generate_playback_data, PlaybackData, PlaybackNote};
pub use scale::{
    build_scale, build_scale_of_kind, build_scale_with_pattern, format_scale, IntervalPattern,
    RelativeNote, ScaleKind,
};

use serde::Serialize;

/// A built scale together with everything needed to play it back
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleReport {
    pub start: PitchClass,
    pub scale: ScaleKind,
    pub notes: Vec<RelativeNote>,
    pub settings: PlaybackSettings,
    pub playback: PlaybackData,
}

impl ScaleReport {
    /// Build a scale by name and its playback data.
    ///
    /// ```
    /// use scales::{PitchClass, PlaybackSettings, ScaleKind, ScaleReport};
    ///
    /// let report = ScaleReport::new(PitchClass::D, Some("bogus"), &PlaybackSettings::default())?;
    /// assert_eq!(report.scale, ScaleKind::Major);
    /// assert_eq!(report.notes.len(), report.playback.notes.len());
    /// # Ok::<(), scales::ScaleError>(())
    /// ```
    pub fn new(
        start: PitchClass,
        scale: Option<&str>,
        settings: &PlaybackSettings,
    ) -> Result<Self, ScaleError> {
        let kind = ScaleKind::from_name(scale);
        let notes = build_scale_of_kind(start, kind);
        let playback = generate_playback_data(&notes, settings)?;
        Ok(Self {
            start,
            scale: kind,
            notes,
            settings: settings.clone(),
            playback,
        })
    }
}

/// Resolve a pitch name and build its scale.
/// This is the main entry point for the library.
///
/// ```
/// let scale = scales::scale_for("G", Some("minor"))?;
/// assert_eq!(scales::format_scale(&scale), "G, A^, A#^, C^, D^, D#^, F^, G^");
/// # Ok::<(), scales::ScaleError>(())
/// ```
pub fn scale_for(pitch: &str, scale: Option<&str>) -> Result<Vec<RelativeNote>, ScaleError> {
    let start: PitchClass = pitch.parse()?;
    Ok(build_scale(start, scale))
}

/// Build a scale and render it as Standard MIDI File bytes
pub fn scale_to_midi(
    pitch: &str,
    scale: Option<&str>,
    settings: &PlaybackSettings,
) -> Result<Vec<u8>, ScaleError> {
    let notes = scale_for(pitch, scale)?;
    let data = generate_playback_data(&notes, settings)?;
    to_midi_file(&data, settings)
}
