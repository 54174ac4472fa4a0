//! Windows onto the noise field. Each cell is independent of every other, so any
//! two overlapping windows agree on the cells they share: chunks tile seamlessly.

use rayon::prelude::*;
use serde::Serialize;

use crate::config::Params;
use crate::error::Result;
use crate::grid::Grid;
use crate::noise::{Scale, noise_2d_unit, noise_3d_unit, noise_4d_unit};

/// Raw words for the window described by `params`. Rows are sampled in parallel.
pub fn sample(params: &Params) -> Result<Grid<u32>> {
    params.validate()?;
    let w = params.width;
    let seed = params.seed;
    let mut words = Grid::new(w, params.height);

    words.data.par_chunks_mut(w).enumerate().for_each(|(py, row)| {
        let y = params.origin_y.wrapping_add(py as i32);
        for (px, cell) in row.iter_mut().enumerate() {
            let x = params.origin_x.wrapping_add(px as i32);
            *cell = match (params.z, params.t) {
                (z, Some(t)) => noise_4d_unit(x, y, z.unwrap_or(0), t, seed),
                (Some(z), None) => noise_3d_unit(x, y, z, seed),
                (None, None) => noise_2d_unit(x, y, seed),
            };
        }
    });

    Ok(words)
}

pub fn rescale(words: &Grid<u32>, scale: Scale) -> Grid<f32> {
    words.map(|word| scale.apply(word))
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

pub fn stats(values: &Grid<f32>) -> Stats {
    let min = values.data.iter().cloned().fold(f32::INFINITY, f32::min);
    let max = values.data.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let sum: f64 = values.data.iter().map(|&v| v as f64).sum();
    let mean = if values.data.is_empty() {
        0.0
    } else {
        (sum / values.data.len() as f64) as f32
    };
    Stats { min, max, mean }
}
