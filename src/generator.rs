use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result};
use crate::noise::{noise_1d_unit, zero_to_one};
use crate::rng::seed_from_str;

/// Sequential generator layered on the positional hash: a seed plus a cursor that
/// moves forward by one on every draw. Two generators with the same seed and cursor
/// produce the same draws from then on.
///
/// Not meant to be shared between threads without a lock; clone it instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequentialNoiseGenerator {
    seed: u32,
    position: i32,
}

impl SequentialNoiseGenerator {
    pub fn new(seed: u32, position: i32) -> Self {
        Self { seed, position }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::new(seed, 0)
    }

    /// Seed derived from text, see [`seed_from_str`].
    pub fn from_text(text: &str, position: i32) -> Self {
        Self::new(seed_from_str(text), position)
    }

    /// Seed sampled once from the wall clock: 100 ns ticks since the Unix epoch,
    /// low 16 bits only.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| (d.as_nanos() / 100) as u32 & 0xFFFF)
            .unwrap_or_default();
        tracing::debug!(seed, "generator seeded from clock");
        Self::with_seed(seed)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn cursor(&self) -> i32 {
        self.position
    }

    pub fn set_cursor(&mut self, position: i32) {
        self.position = position;
    }

    #[inline]
    fn advance(&mut self) -> i32 {
        let p = self.position;
        self.position = p.wrapping_add(1);
        p
    }

    /// Raw word at the cursor.
    pub fn next_u32(&mut self) -> u32 {
        let p = self.advance();
        noise_1d_unit(p, self.seed)
    }

    /// Value in [0, 1]. 1.0 itself only comes out of the very top of the word range.
    pub fn next_value(&mut self) -> f32 {
        zero_to_one(self.next_u32())
    }

    pub fn next_bool(&mut self) -> bool {
        self.next_u32() & 1 == 1
    }

    /// Full `i32` range; the word's sign bit is flipped so 0 maps to `i32::MIN`.
    pub fn next_i32(&mut self) -> i32 {
        self.next_u32() as i32 ^ i32::MIN
    }

    /// Integer in `[min, max)`. Fails without moving the cursor when `max <= min`.
    pub fn range_int(&mut self, min: i32, max: i32) -> Result<i32> {
        if max <= min {
            return Err(Error::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        let span = max as i64 - min as i64;
        let offset = self.next_u32() as i64 % span;
        Ok((min as i64 + offset) as i32)
    }

    /// Float in `[min, max)`. Results that round up to `max` are pulled down to the
    /// largest float below it.
    /// Fails without moving the cursor when `max <= min` or the bounds or span are not finite.
    pub fn range_float(&mut self, min: f32, max: f32) -> Result<f32> {
        let span = max - min;
        if max.partial_cmp(&min) != Some(Ordering::Greater)
            || !min.is_finite()
            || !max.is_finite()
            || !span.is_finite()
        {
            return Err(Error::InvalidRange {
                min: min as f64,
                max: max as f64,
            });
        }
        let v = min + self.next_value() * span;
        if v >= max {
            Ok(max.next_down().max(min))
        } else {
            Ok(v)
        }
    }
}

impl Default for SequentialNoiseGenerator {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl Iterator for SequentialNoiseGenerator {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        Some(self.next_value())
    }
}
