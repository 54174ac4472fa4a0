pub mod config;
pub mod error;
pub mod field;
pub mod generator;
pub mod grid;
pub mod noise;
pub mod render;
pub mod rng;
pub mod telemetry;

use std::time::Instant;

pub use config::Params;
pub use error::{Error, Result};
pub use generator::SequentialNoiseGenerator;
pub use noise::*;
pub use rng::{mix_hash, seed_from_str};

use field::Stats;
use grid::Grid;

pub struct Field {
    pub w: usize,
    pub h: usize,
    pub words: Grid<u32>,
    pub values: Grid<f32>,
    pub stats: Stats,
    pub rgba: Vec<u8>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Sample, rescale, summarize and render one window of the noise field.
pub fn generate(params: &Params) -> Result<(Field, Vec<Timing>)> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let words = field::sample(params)?;
    timings.push(Timing {
        name: "sample",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    let values = field::rescale(&words, params.scale);
    let stats = field::stats(&values);
    timings.push(Timing {
        name: "rescale",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let t = Instant::now();
    let rgba = render::render_field(&values, params.scale);
    timings.push(Timing {
        name: "render",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
    timings.push(Timing {
        name: "TOTAL",
        ms: total_ms,
    });
    tracing::debug!(
        width = params.width,
        height = params.height,
        seed = params.seed,
        total_ms,
        "field generated"
    );

    let field = Field {
        w: params.width,
        h: params.height,
        words,
        values,
        stats,
        rgba,
    };

    Ok((field, timings))
}
