use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use noise_rng::config::Params;
use noise_rng::{SequentialNoiseGenerator, telemetry};

const USAGE: &str = "usage:
  noise-rng value [seed] [position]
  noise-rng range-int <min> <max> [seed] [position]
  noise-rng range-float <min> <max> [seed] [position]
  noise-rng field [seed] [width] [height] [out_dir]";

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn arg<T: FromStr>(args: &[String], i: usize) -> Option<T> {
    args.get(i).and_then(|s| s.parse().ok())
}

/// Numeric seeds are used as-is, anything else is hashed as text, no seed means the clock.
/// A present but malformed position, or an all-digit seed above `u32::MAX`, is an error.
fn generator(args: &[String], seed_at: usize) -> Result<SequentialNoiseGenerator, String> {
    let position = match args.get(seed_at + 1) {
        Some(s) => s
            .parse()
            .map_err(|_| format!("invalid [position] {s:?}\n{USAGE}"))?,
        None => 0,
    };
    let rng = match args.get(seed_at) {
        Some(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            let seed = s
                .parse::<u32>()
                .map_err(|_| format!("[seed] {s} does not fit in u32\n{USAGE}"))?;
            SequentialNoiseGenerator::new(seed, position)
        }
        Some(s) => SequentialNoiseGenerator::from_text(s, position),
        None => {
            let mut rng = SequentialNoiseGenerator::from_clock();
            rng.set_cursor(position);
            rng
        }
    };
    Ok(rng)
}

fn run(args: &[String]) -> CliResult {
    match args.get(1).map(String::as_str) {
        Some("value") => {
            let mut rng = generator(args, 2)?;
            tracing::info!(seed = rng.seed(), position = rng.cursor(), "drawing value");
            println!("{}", rng.next_value());
        }
        Some("range-int") => {
            let min: i32 = arg(args, 2).ok_or("missing or invalid <min>")?;
            let max: i32 = arg(args, 3).ok_or("missing or invalid <max>")?;
            let mut rng = generator(args, 4)?;
            tracing::info!(seed = rng.seed(), position = rng.cursor(), min, max, "drawing int");
            println!("{}", rng.range_int(min, max)?);
        }
        Some("range-float") => {
            let min: f32 = arg(args, 2).ok_or("missing or invalid <min>")?;
            let max: f32 = arg(args, 3).ok_or("missing or invalid <max>")?;
            let mut rng = generator(args, 4)?;
            tracing::info!(seed = rng.seed(), position = rng.cursor(), min, max, "drawing float");
            println!("{}", rng.range_float(min, max)?);
        }
        Some("field") => {
            let defaults = Params::default();
            let params = Params {
                seed: arg(args, 2).unwrap_or(42),
                width: arg(args, 3).unwrap_or(defaults.width),
                height: arg(args, 4).unwrap_or(defaults.height),
                ..defaults
            };
            let out_dir: PathBuf = args
                .get(5)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("artifacts"));
            std::fs::create_dir_all(&out_dir)?;

            tracing::info!(
                "Sampling {}x{} field with seed={}",
                params.width,
                params.height,
                params.seed
            );
            let (field, timings) = noise_rng::generate(&params)?;
            for t in &timings {
                tracing::info!("  {:20} {:8.1} ms", t.name, t.ms);
            }
            tracing::info!(
                min = field.stats.min,
                max = field.stats.max,
                mean = field.stats.mean,
                "stats"
            );

            let path = out_dir.join("field.png");
            image::save_buffer(
                &path,
                &field.rgba,
                field.w as u32,
                field.h as u32,
                image::ColorType::Rgba8,
            )?;
            tracing::info!("Saved {}", path.display());
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}

fn main() -> ExitCode {
    telemetry::install();
    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn numeric_seed_and_position() {
        let rng = generator(&args(&["noise-rng", "value", "200", "7"]), 2).unwrap();
        assert_eq!(rng.seed(), 200);
        assert_eq!(rng.cursor(), 7);
    }

    #[test]
    fn text_seed_is_hashed() {
        let rng = generator(&args(&["noise-rng", "value", "village"]), 2).unwrap();
        assert_eq!(rng.seed(), noise_rng::seed_from_str("village"));
        assert_eq!(rng.cursor(), 0);
    }

    #[test]
    fn malformed_position_is_rejected() {
        assert!(generator(&args(&["noise-rng", "value", "200", "abc"]), 2).is_err());
        assert!(generator(&args(&["noise-rng", "range-int", "0", "9", "1", "3.5"]), 4).is_err());
    }

    #[test]
    fn oversized_numeric_seed_is_rejected() {
        assert!(generator(&args(&["noise-rng", "value", "4294967296"]), 2).is_err());
        assert!(run(&args(&["noise-rng", "value", "99999999999"])).is_err());
    }
}
