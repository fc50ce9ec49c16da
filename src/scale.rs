//! # Scale Builder
//!
//! Walks an interval pattern from a starting pitch and emits one [`RelativeNote`] per step.
//!
//! ## Algorithm
//! A running position starts at the starting pitch's distance from C. Each step is added
//! to it, and when the result leaves the `-4..=8` window it is shifted back in by one
//! octave while the octave counter moves the same way:
//!
//! - Above 8: `octave += 1`, `position = -4 + (position - 8)`
//! - Below -4: `octave -= 1`, `position = 8 - (-4 - position)`
//!
//! The shift is linear and anchored at the window edge, so a single step can only wrap
//! once. Patterns must keep every step within one octave (`-12..=12`); the presets do,
//! and [`IntervalPattern::new`] enforces it for custom patterns.
//!
//! ## Example
//! ```rust
//! use scales::{build_scale, format_scale, PitchClass};
//!
//! let scale = build_scale(PitchClass::C, Some("major"));
//! assert_eq!(format_scale(&scale), "C, D, E, F, G, A^, B^, C^");
//! ```

use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

use crate::error::ScaleError;
use crate::pitch::{PitchClass, MAX_DISTANCE, MIN_DISTANCE};

const WHOLE_STEP: i8 = 2;
const HALF_STEP: i8 = 1;
const NO_STEP: i8 = 0;

/// Widest step a pattern may take without skipping past the octave wrap
pub const MAX_STEP: i8 = 12;

const MAJOR_STEPS: [i8; 7] = [
    WHOLE_STEP, WHOLE_STEP, HALF_STEP, WHOLE_STEP, WHOLE_STEP, WHOLE_STEP, HALF_STEP,
];

const MINOR_STEPS: [i8; 7] = [
    WHOLE_STEP, HALF_STEP, WHOLE_STEP, WHOLE_STEP, HALF_STEP, WHOLE_STEP, WHOLE_STEP,
];

// Twinkle Twinkle Little Star, first phrase: each repeated note is a zero step
const TWINKLE_STEPS: [i8; 14] = [
    NO_STEP,
    3 * WHOLE_STEP + HALF_STEP,
    NO_STEP,
    WHOLE_STEP,
    NO_STEP,
    -WHOLE_STEP,
    NO_STEP,
    -WHOLE_STEP,
    NO_STEP,
    -HALF_STEP,
    NO_STEP,
    -WHOLE_STEP,
    NO_STEP,
    -WHOLE_STEP,
];

/// The built-in interval patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    #[default]
    Major,
    Minor,
    Twinkle,
}

impl ScaleKind {
    /// Resolve a scale name. Absent, empty and unrecognized names all mean `Major`.
    ///
    /// Names are matched exactly: `"Minor"` is not `"minor"`.
    pub fn from_name(name: Option<&str>) -> ScaleKind {
        match name {
            None => ScaleKind::Major,
            Some("major") => ScaleKind::Major,
            Some("minor") => ScaleKind::Minor,
            Some("twinkle") => ScaleKind::Twinkle,
            Some(other) => {
                warn!(scale = other, "unknown scale name, using major");
                ScaleKind::Major
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScaleKind::Major => "major",
            ScaleKind::Minor => "minor",
            ScaleKind::Twinkle => "twinkle",
        }
    }

    pub fn steps(self) -> &'static [i8] {
        match self {
            ScaleKind::Major => &MAJOR_STEPS,
            ScaleKind::Minor => &MINOR_STEPS,
            ScaleKind::Twinkle => &TWINKLE_STEPS,
        }
    }
}

/// An ordered list of signed semitone steps, each within one octave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalPattern {
    steps: Vec<i8>,
}

impl IntervalPattern {
    /// Build a custom pattern. Fails on the first step outside `-12..=12`.
    ///
    /// ```
    /// use scales::IntervalPattern;
    ///
    /// assert!(IntervalPattern::new(vec![3, 4, -7]).is_ok());
    /// assert!(IntervalPattern::new(vec![2, 13]).is_err());
    /// ```
    pub fn new(steps: Vec<i8>) -> Result<Self, ScaleError> {
        if let Some((index, &step)) = steps
            .iter()
            .enumerate()
            .find(|(_, step)| !(-MAX_STEP..=MAX_STEP).contains(*step))
        {
            return Err(ScaleError::InvalidStep { index, step });
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[i8] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<ScaleKind> for IntervalPattern {
    fn from(kind: ScaleKind) -> Self {
        Self {
            steps: kind.steps().to_vec(),
        }
    }
}

/// One note of a built scale
///
/// `octave` counts octaves away from the starting note: 0 for the start, +1 after wrapping
/// past `G#`, -1 after wrapping below `Ab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RelativeNote {
    pub pitch: PitchClass,
    pub octave: i32,
}

impl RelativeNote {
    pub fn new(pitch: PitchClass, octave: i32) -> Self {
        Self { pitch, octave }
    }
}

impl From<PitchClass> for RelativeNote {
    fn from(pitch: PitchClass) -> Self {
        Self::new(pitch, 0)
    }
}

impl fmt::Display for RelativeNote {
    /// Pitch followed by octave marks: `^` per octave up, `_` per octave down
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pitch.symbol())?;
        let mark = if self.octave > 0 { "^" } else { "_" };
        for _ in 0..self.octave.unsigned_abs() {
            f.write_str(mark)?;
        }
        Ok(())
    }
}

/// Apply one step to a running position.
///
/// Returns the new position, shifted back into `-4..=8` if needed, and the octave change
/// (-1, 0 or 1). A step wider than one octave can leave the result outside the window.
pub fn wrap_step(position: i8, step: i8) -> (i8, i8) {
    let candidate = position.saturating_add(step);
    if candidate > MAX_DISTANCE {
        (MIN_DISTANCE + (candidate - MAX_DISTANCE), 1)
    } else if candidate < MIN_DISTANCE {
        (MAX_DISTANCE - (MIN_DISTANCE - candidate), -1)
    } else {
        (candidate, 0)
    }
}

/// Build a scale from a starting pitch and a scale name.
///
/// Unknown or missing names fall back to the major scale; this never fails.
pub fn build_scale(start: PitchClass, scale: Option<&str>) -> Vec<RelativeNote> {
    build_scale_of_kind(start, ScaleKind::from_name(scale))
}

/// Build one of the preset scales from a starting pitch.
pub fn build_scale_of_kind(start: PitchClass, kind: ScaleKind) -> Vec<RelativeNote> {
    debug!(start = %start, scale = kind.name(), "building scale");
    walk(start, kind.steps())
}

/// Build a scale from a starting pitch and a custom pattern.
pub fn build_scale_with_pattern(start: PitchClass, pattern: &IntervalPattern) -> Vec<RelativeNote> {
    walk(start, pattern.steps())
}

fn walk(start: PitchClass, steps: &[i8]) -> Vec<RelativeNote> {
    let mut notes = Vec::with_capacity(steps.len() + 1);
    notes.push(RelativeNote::from(start));

    let mut position = start.distance_from_c();
    let mut octave = 0i32;
    for &step in steps {
        let (next, octave_delta) = wrap_step(position, step);
        if octave_delta != 0 {
            debug!(from = position, step, to = next, octave_delta, "octave wrap");
        }
        octave += i32::from(octave_delta);
        // Steps are bounded by MAX_STEP, so one wrap always lands back in the window
        let pitch = PitchClass::from_distance(next)
            .unwrap_or_else(|| unreachable!("position {} outside the pitch window", next));
        notes.push(RelativeNote::new(pitch, octave));
        position = next;
    }
    notes
}

/// Join a scale into a single line: `"C, D, E"`
pub fn format_scale(notes: &[RelativeNote]) -> String {
    notes
        .iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
