use std::env;
use std::fs;
use std::process;

use scales::{format_scale, to_midi_file, to_musicxml, PitchClass, PlaybackSettings, ScaleReport};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: scales <pitch> [major|minor|twinkle] [--config settings.yaml] [--midi out.mid] [--musicxml out.xml] [--json]
       Enter a starting pitch. For example: C_FLAT, C, C_SHARP, Ab, F#";

struct Args {
    pitch: String,
    scale: Option<String>,
    config: Option<String>,
    midi: Option<String>,
    musicxml: Option<String>,
    json: bool,
}

fn usage() -> ! {
    eprintln!("{}", USAGE);
    process::exit(1);
}

fn parse_args(args: &[String]) -> Args {
    let mut positional = Vec::new();
    let mut config = None;
    let mut midi = None;
    let mut musicxml = None;
    let mut json = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => config = Some(iter.next().cloned().unwrap_or_else(|| usage())),
            "--midi" => midi = Some(iter.next().cloned().unwrap_or_else(|| usage())),
            "--musicxml" => musicxml = Some(iter.next().cloned().unwrap_or_else(|| usage())),
            "--json" => json = true,
            "-h" | "--help" => usage(),
            flag if flag.starts_with("--") => {
                eprintln!("Unknown option '{}'", flag);
                usage();
            }
            _ => positional.push(arg.clone()),
        }
    }

    if positional.is_empty() || positional.len() > 2 {
        usage();
    }
    let mut positional = positional.into_iter();
    Args {
        pitch: positional.next().unwrap_or_else(|| usage()),
        scale: positional.next(),
        config,
        midi,
        musicxml,
        json,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = parse_args(&args);

    let start: PitchClass = match args.pitch.parse() {
        Ok(pitch) => pitch,
        Err(_) => usage(),
    };

    let settings = match &args.config {
        Some(path) => match PlaybackSettings::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        None => PlaybackSettings::default(),
    };

    let report = match ScaleReport::new(start, args.scale.as_deref(), &settings) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    if let Some(path) = &args.midi {
        let bytes = match to_midi_file(&report.playback, &settings) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        if let Err(e) = fs::write(path, bytes) {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        }
        eprintln!("Wrote MIDI to {}", path);
    }

    if let Some(path) = &args.musicxml {
        let xml = match to_musicxml(&report.notes, &settings) {
            Ok(xml) => xml,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        };
        if let Err(e) = fs::write(path, &xml) {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        }
        eprintln!("Wrote MusicXML to {}", path);
    }

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error encoding JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("{}", format_scale(&report.notes));
    }
}
