//! # Pitch Model
//!
//! Pitch classes and their signed distance from C.
//!
//! ## Numeric Window
//! Every pitch class is encoded as a semitone distance from C inside a fixed window:
//!
//! ```text
//!  Ab   A   A#   B   C   C#   D   D#   E   F   F#   G   G#
//!  -4  -3   -2  -1   0    1   2    3   4   5    6   7    8
//! ```
//!
//! The window is 13 wide, one more than an octave, so both ends name the same key:
//! `Ab` sits just below the A under C, and `G#` sits just below the A above it. The
//! scale builder relies on this when it wraps a running position at the window edges.
//!
//! ## Spelling
//! Each distance has exactly one spelling. Names typed by a user resolve to that spelling:
//! `Db` becomes `C#`, `Cb` becomes `B`. Only `Ab` keeps a flat, because it owns -4.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::ScaleError;

/// Lowest distance from C in the window (`Ab`)
pub const MIN_DISTANCE: i8 = -4;

/// Highest distance from C in the window (`G#`)
pub const MAX_DISTANCE: i8 = 8;

/// A pitch class with its canonical spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PitchClass {
    AFlat,
    A,
    ASharp,
    B,
    #[default]
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
}

impl PitchClass {
    /// All pitch classes, ordered by distance from C
    pub const ALL: [PitchClass; 13] = [
        PitchClass::AFlat,
        PitchClass::A,
        PitchClass::ASharp,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CSharp,
        PitchClass::D,
        PitchClass::DSharp,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FSharp,
        PitchClass::G,
        PitchClass::GSharp,
    ];

    /// Signed semitone distance from C, always within `MIN_DISTANCE..=MAX_DISTANCE`
    pub fn distance_from_c(self) -> i8 {
        match self {
            PitchClass::AFlat => -4,
            PitchClass::A => -3,
            PitchClass::ASharp => -2,
            PitchClass::B => -1,
            PitchClass::C => 0,
            PitchClass::CSharp => 1,
            PitchClass::D => 2,
            PitchClass::DSharp => 3,
            PitchClass::E => 4,
            PitchClass::F => 5,
            PitchClass::FSharp => 6,
            PitchClass::G => 7,
            PitchClass::GSharp => 8,
        }
    }

    /// Look up the pitch class at a distance from C.
    ///
    /// Returns `None` for anything outside `MIN_DISTANCE..=MAX_DISTANCE`. Callers must
    /// normalize into the window first; there is no fallback pitch.
    ///
    /// ```
    /// use scales::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_distance(-2), Some(PitchClass::ASharp));
    /// assert_eq!(PitchClass::from_distance(9), None);
    /// ```
    pub fn from_distance(distance: i8) -> Option<PitchClass> {
        match distance {
            -4 => Some(PitchClass::AFlat),
            -3 => Some(PitchClass::A),
            -2 => Some(PitchClass::ASharp),
            -1 => Some(PitchClass::B),
            0 => Some(PitchClass::C),
            1 => Some(PitchClass::CSharp),
            2 => Some(PitchClass::D),
            3 => Some(PitchClass::DSharp),
            4 => Some(PitchClass::E),
            5 => Some(PitchClass::F),
            6 => Some(PitchClass::FSharp),
            7 => Some(PitchClass::G),
            8 => Some(PitchClass::GSharp),
            _ => None,
        }
    }

    /// Canonical symbol spelling (`C#`, `Ab`)
    pub fn symbol(self) -> &'static str {
        match self {
            PitchClass::AFlat => "Ab",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
        }
    }

    /// Letter name and alteration, as written on a staff (`A#` = `('A', 1)`)
    pub fn step_alter(self) -> (char, i8) {
        match self {
            PitchClass::AFlat => ('A', -1),
            PitchClass::A => ('A', 0),
            PitchClass::ASharp => ('A', 1),
            PitchClass::B => ('B', 0),
            PitchClass::C => ('C', 0),
            PitchClass::CSharp => ('C', 1),
            PitchClass::D => ('D', 0),
            PitchClass::DSharp => ('D', 1),
            PitchClass::E => ('E', 0),
            PitchClass::F => ('F', 0),
            PitchClass::FSharp => ('F', 1),
            PitchClass::G => ('G', 0),
            PitchClass::GSharp => ('G', 1),
        }
    }
}

impl FromStr for PitchClass {
    type Err = ScaleError;

    /// Resolve a user-supplied pitch name.
    ///
    /// Accepts enum-style names (`C_SHARP`, `A_FLAT`), symbols (`C#`, `Ab`) and
    /// letter suffixes (`Cs`, `Af`). Enharmonic flats resolve to their canonical spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pitch = match s.trim() {
            "A_FLAT" | "Ab" | "Af" => PitchClass::AFlat,
            "A" => PitchClass::A,
            "A_SHARP" | "A#" | "As" | "B_FLAT" | "Bb" | "Bf" => PitchClass::ASharp,
            "B" | "C_FLAT" | "Cb" | "Cf" => PitchClass::B,
            "C" | "B_SHARP" | "B#" | "Bs" => PitchClass::C,
            "C_SHARP" | "C#" | "Cs" | "D_FLAT" | "Db" | "Df" => PitchClass::CSharp,
            "D" => PitchClass::D,
            "D_SHARP" | "D#" | "Ds" | "E_FLAT" | "Eb" | "Ef" => PitchClass::DSharp,
            "E" | "F_FLAT" | "Fb" | "Ff" => PitchClass::E,
            "F" | "E_SHARP" | "E#" | "Es" => PitchClass::F,
            "F_SHARP" | "F#" | "Fs" | "G_FLAT" | "Gb" | "Gf" => PitchClass::FSharp,
            "G" => PitchClass::G,
            "G_SHARP" | "G#" | "Gs" => PitchClass::GSharp,
            other => return Err(ScaleError::UnknownPitch(other.to_string())),
        };
        Ok(pitch)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_round_trip() {
        for pitch in PitchClass::ALL {
            assert_eq!(PitchClass::from_distance(pitch.distance_from_c()), Some(pitch));
        }
    }

    #[test]
    fn test_all_is_ordered_by_distance() {
        let distances: Vec<i8> = PitchClass::ALL.iter().map(|p| p.distance_from_c()).collect();
        let expected: Vec<i8> = (MIN_DISTANCE..=MAX_DISTANCE).collect();
        assert_eq!(distances, expected);
    }

    #[test]
    fn test_from_distance_out_of_range_is_none() {
        assert_eq!(PitchClass::from_distance(MIN_DISTANCE - 1), None);
        assert_eq!(PitchClass::from_distance(MAX_DISTANCE + 1), None);
        assert_eq!(PitchClass::from_distance(12), None);
        assert_eq!(PitchClass::from_distance(i8::MIN), None);
        assert_eq!(PitchClass::from_distance(i8::MAX), None);
    }

    #[test]
    fn test_parse_enum_style_names() {
        assert_eq!("C".parse::<PitchClass>().unwrap(), PitchClass::C);
        assert_eq!("C_SHARP".parse::<PitchClass>().unwrap(), PitchClass::CSharp);
        assert_eq!("A_FLAT".parse::<PitchClass>().unwrap(), PitchClass::AFlat);
        assert_eq!("G_SHARP".parse::<PitchClass>().unwrap(), PitchClass::GSharp);
    }

    #[test]
    fn test_parse_symbols_and_letter_suffixes() {
        assert_eq!("F#".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
        assert_eq!("Fs".parse::<PitchClass>().unwrap(), PitchClass::FSharp);
        assert_eq!("Ab".parse::<PitchClass>().unwrap(), PitchClass::AFlat);
        assert_eq!(" D ".parse::<PitchClass>().unwrap(), PitchClass::D);
    }

    #[test]
    fn test_parse_flats_resolve_to_canonical_spelling() {
        assert_eq!("Db".parse::<PitchClass>().unwrap(), PitchClass::CSharp);
        assert_eq!("Bb".parse::<PitchClass>().unwrap(), PitchClass::ASharp);
        assert_eq!("C_FLAT".parse::<PitchClass>().unwrap(), PitchClass::B);
        assert_eq!("E#".parse::<PitchClass>().unwrap(), PitchClass::F);
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "H".parse::<PitchClass>().unwrap_err();
        assert!(matches!(err, ScaleError::UnknownPitch(ref name) if name == "H"));
        assert!("".parse::<PitchClass>().is_err());
        assert!("c".parse::<PitchClass>().is_err());
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(PitchClass::CSharp.to_string(), "C#");
        assert_eq!(PitchClass::AFlat.to_string(), "Ab");
        assert_eq!(PitchClass::B.to_string(), "B");
    }

    #[test]
    fn test_step_alter() {
        assert_eq!(PitchClass::AFlat.step_alter(), ('A', -1));
        assert_eq!(PitchClass::GSharp.step_alter(), ('G', 1));
        assert_eq!(PitchClass::E.step_alter(), ('E', 0));
    }
}
