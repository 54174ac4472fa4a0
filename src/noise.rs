//! Coordinate noise: 1D to 4D integer coordinates folded into a single index and mixed
//! with [`mix_hash`]. Every function here is pure and safe to call from any thread.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::rng::mix_hash;

/// Large primes with non-boring, mutually distinct bit patterns.
pub const PRIME_Y: i32 = 198_491_317;
pub const PRIME_Z: i32 = 6_542_989;
pub const PRIME_T: i32 = 357_239;

pub const ONE_OVER_MAX_UINT: f32 = 1.0 / u32::MAX as f32;
pub const ONE_OVER_MAX_INT: f32 = 1.0 / i32::MAX as f32;

#[inline]
pub fn fold_2d(x: i32, y: i32) -> i32 {
    x.wrapping_add(PRIME_Y.wrapping_mul(y))
}

#[inline]
pub fn fold_3d(x: i32, y: i32, z: i32) -> i32 {
    fold_2d(x, y).wrapping_add(PRIME_Z.wrapping_mul(z))
}

#[inline]
pub fn fold_4d(x: i32, y: i32, z: i32, t: i32) -> i32 {
    fold_3d(x, y, z).wrapping_add(PRIME_T.wrapping_mul(t))
}

/// Raw word to [0, 1].
#[inline]
pub fn zero_to_one(word: u32) -> f32 {
    word as f32 * ONE_OVER_MAX_UINT
}

/// Raw word to [-1, 1]. The word's bits are reinterpreted as `i32`, not remapped,
/// so words with the top bit set land below zero.
#[inline]
pub fn neg_one_to_one(word: u32) -> f32 {
    (word as i32) as f32 * ONE_OVER_MAX_INT
}

#[inline]
pub fn noise_1d_unit(x: i32, seed: u32) -> u32 {
    mix_hash(x, seed)
}

#[inline]
pub fn noise_2d_unit(x: i32, y: i32, seed: u32) -> u32 {
    mix_hash(fold_2d(x, y), seed)
}

#[inline]
pub fn noise_3d_unit(x: i32, y: i32, z: i32, seed: u32) -> u32 {
    mix_hash(fold_3d(x, y, z), seed)
}

#[inline]
pub fn noise_4d_unit(x: i32, y: i32, z: i32, t: i32, seed: u32) -> u32 {
    mix_hash(fold_4d(x, y, z, t), seed)
}

#[inline]
pub fn noise_1d_zero_to_one(x: i32, seed: u32) -> f32 {
    zero_to_one(noise_1d_unit(x, seed))
}

#[inline]
pub fn noise_2d_zero_to_one(x: i32, y: i32, seed: u32) -> f32 {
    zero_to_one(noise_2d_unit(x, y, seed))
}

#[inline]
pub fn noise_3d_zero_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    zero_to_one(noise_3d_unit(x, y, z, seed))
}

#[inline]
pub fn noise_4d_zero_to_one(x: i32, y: i32, z: i32, t: i32, seed: u32) -> f32 {
    zero_to_one(noise_4d_unit(x, y, z, t, seed))
}

#[inline]
pub fn noise_1d_neg_one_to_one(x: i32, seed: u32) -> f32 {
    neg_one_to_one(noise_1d_unit(x, seed))
}

#[inline]
pub fn noise_2d_neg_one_to_one(x: i32, y: i32, seed: u32) -> f32 {
    neg_one_to_one(noise_2d_unit(x, y, seed))
}

#[inline]
pub fn noise_3d_neg_one_to_one(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    neg_one_to_one(noise_3d_unit(x, y, z, seed))
}

#[inline]
pub fn noise_4d_neg_one_to_one(x: i32, y: i32, z: i32, t: i32, seed: u32) -> f32 {
    neg_one_to_one(noise_4d_unit(x, y, z, t, seed))
}

/// Output form of a noise sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Full `u32` range. `apply` carries it as `f32`, which keeps only 24 bits of
    /// precision; use the raw word when exact values matter.
    Unit,
    #[default]
    ZeroToOne,
    NegOneToOne,
}

impl Scale {
    #[inline]
    pub fn apply(self, word: u32) -> f32 {
        match self {
            Scale::Unit => word as f32,
            Scale::ZeroToOne => zero_to_one(word),
            Scale::NegOneToOne => neg_one_to_one(word),
        }
    }

    /// Nominal (low, high) bounds of `apply`.
    pub fn bounds(self) -> (f32, f32) {
        match self {
            Scale::Unit => (0.0, u32::MAX as f32),
            Scale::ZeroToOne => (0.0, 1.0),
            Scale::NegOneToOne => (-1.0, 1.0),
        }
    }
}

/// Unit word for a coordinate of runtime dimensionality (1 to 4).
pub fn noise_unit(coords: &[i32], seed: u32) -> Result<u32> {
    match *coords {
        [x] => Ok(noise_1d_unit(x, seed)),
        [x, y] => Ok(noise_2d_unit(x, y, seed)),
        [x, y, z] => Ok(noise_3d_unit(x, y, z, seed)),
        [x, y, z, t] => Ok(noise_4d_unit(x, y, z, t, seed)),
        _ => Err(Error::InvalidDimensions(coords.len())),
    }
}
