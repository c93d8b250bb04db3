//! Replays recorded hand landmarks through the classifier.
//!
//! Usage: `handsign [--flip] [--normalized <W>x<H>] [<file>]`
//!
//! Each input line is one frame with 42 numbers: `x0 y0 x1 y1 ... x20 y20`, separated by spaces
//! and/or commas. A blank line or a line containing only `-` is a frame without a hand. Lines
//! starting with `#` are ignored. Without a file argument, frames are read from stdin.

use std::{
    env,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use anyhow::{anyhow, bail, Context, Result};
use handsign::{landmark::LandmarkSet, HandClassifier, HandError};
use itertools::Itertools;

struct Options {
    flip: bool,
    normalized: Option<(u32, u32)>,
    input: Option<PathBuf>,
}

const USAGE: &str = "usage: handsign [--flip] [--normalized <W>x<H>] [<file>]";

fn parse_args() -> Result<Options> {
    let mut opts = Options {
        flip: false,
        normalized: None,
        input: None,
    };

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--flip" => opts.flip = true,
            "--normalized" => {
                let res = args
                    .next()
                    .ok_or_else(|| anyhow!("--normalized requires an image size\n{}", USAGE))?;
                opts.normalized = Some(parse_resolution(&res)?);
            }
            "-h" | "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => {
                if opts.input.is_some() {
                    bail!("{}", USAGE);
                }
                opts.input = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(opts)
}

fn parse_resolution(s: &str) -> Result<(u32, u32)> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| anyhow!("invalid image size '{}', expected <W>x<H>", s))?;
    let w = w.parse().with_context(|| format!("invalid width in '{}'", s))?;
    let h = h.parse().with_context(|| format!("invalid height in '{}'", s))?;
    Ok((w, h))
}

fn parse_frame(line: &str, normalized: Option<(u32, u32)>) -> Result<LandmarkSet> {
    let line = line.trim();
    if line.is_empty() || line == "-" {
        return Ok(LandmarkSet::empty());
    }

    let values = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f32>()
                .with_context(|| format!("invalid coordinate '{}'", s))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.len() % 2 != 0 {
        bail!("odd number of coordinates ({})", values.len());
    }

    let positions = values.into_iter().tuples().map(|(x, y)| [x, y]);
    let landmarks = match normalized {
        Some((w, h)) => LandmarkSet::from_normalized(positions, w, h)?,
        None => LandmarkSet::from_positions(positions)?,
    };
    Ok(landmarks)
}

fn main() -> Result<()> {
    handsign::init_logger!();

    let opts = parse_args()?;
    let classifier = if opts.flip {
        HandClassifier::new().flipped(true)
    } else {
        HandClassifier::from_env()
    };

    let reader: Box<dyn BufRead> = match &opts.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut frame = 0;
    let mut hands = 0;
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }

        let landmarks = parse_frame(&line, opts.normalized)
            .with_context(|| format!("failed to parse frame on line {}", line_no + 1))?;
        match classifier.classify(&landmarks) {
            Ok(state) => {
                println!(
                    "frame {}: {} {} {}",
                    frame, state.side, state.orientation, state.fingers
                );
                hands += 1;
            }
            Err(HandError::EmptyLandmarkSet) => {
                log::debug!("frame {}: no hand", frame);
            }
            Err(e) => return Err(e.into()),
        }
        frame += 1;
    }

    log::info!("classified {} hands in {} frames", hands, frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution() {
        assert_eq!(parse_resolution("640x480").unwrap(), (640, 480));
        assert!(parse_resolution("640").is_err());
        assert!(parse_resolution("ax480").is_err());
    }

    #[test]
    fn frames() {
        assert!(parse_frame("", None).unwrap().is_empty());
        assert!(parse_frame(" - ", None).unwrap().is_empty());

        let line = (0..21).map(|i| format!("{},{}", i * 10, i)).join(", ");
        let set = parse_frame(&line, None).unwrap();
        assert_eq!(set.len(), 21);
        assert_eq!(
            set[handsign::hand::skeleton::LandmarkIdx::PinkyTip].position(),
            [200.0, 20.0]
        );

        let line = (0..21).map(|_| "0.5 0.25").join(" ");
        let set = parse_frame(&line, Some((640, 480))).unwrap();
        assert_eq!(
            set[handsign::hand::skeleton::LandmarkIdx::Wrist].position(),
            [320.0, 120.0]
        );
    }

    #[test]
    fn bad_frames() {
        assert!(parse_frame("1 2 3", None).is_err());
        assert!(parse_frame("1 2 x 4", None).is_err());
        let err = parse_frame("1 2 3 4", None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<HandError>(),
            Some(&HandError::MalformedLandmarkSet { len: 2 })
        );
    }
}
