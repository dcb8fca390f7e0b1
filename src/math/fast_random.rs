use rand::{RngCore, SeedableRng};

use super::EmptyRange;
use crate::util::result::ResultExtension;

/// A fast, non-cryptographic xorshift generator with 64 bits of state.
///
/// Each step applies `x ^= x << 21; x ^= x >> 35; x ^= x << 4` to the state and returns it, so
/// a given seed always produces the same sequence. A seed of zero is a fixed point and produces
/// only zeros.
///
/// FastRandom implements [`RngCore`] and [`SeedableRng`], so it works anywhere in the `rand`
/// ecosystem, alongside the convenience methods here.
///
/// # Examples
/// ```
/// # use dzlib::math::FastRandom;
/// let mut a = FastRandom::new(1234);
/// let mut b = FastRandom::new(1234);
/// assert_eq!(a.next_long(), b.next_long());
///
/// let roll = a.next_int_between(1, 7);
/// assert!((1..7).contains(&roll));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FastRandom {
    pub(crate) state: u64,
}

impl FastRandom {
    pub const fn new(seed: i64) -> FastRandom {
        FastRandom {
            state: seed as u64,
        }
    }

    /// Creates a generator with a random, non-zero seed taken from the thread-local generator.
    pub fn from_thread_rng() -> FastRandom {
        FastRandom::new(rand::random::<i64>() | 1)
    }

    pub const fn set_seed(&mut self, seed: i64) {
        self.state = seed as u64;
    }

    /// Advances the state, returning all 64 bits of it.
    pub const fn next_long(&mut self) -> i64 {
        let mut x = self.state;
        x ^= x << 21;
        x ^= x >> 35;
        x ^= x << 4;
        self.state = x;
        x as i64
    }

    /// Returns the magnitude of the next long.
    pub const fn next_abs_long(&mut self) -> u64 {
        self.next_long().unsigned_abs()
    }

    /// Returns a long in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound <= 0`.
    pub fn next_long_below(&mut self, bound: i64) -> i64 {
        self.next_long_between(0, bound)
    }

    /// Returns a long in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `max <= min`.
    pub fn next_long_between(&mut self, min: i64, max: i64) -> i64 {
        let span = checked_span(min, max).throw();
        min.wrapping_add((self.next_abs_long() % span) as i64)
    }

    /// Returns the low 32 bits of the next long.
    pub const fn next_int(&mut self) -> i32 {
        self.next_long() as i32
    }

    pub const fn next_abs_int(&mut self) -> u32 {
        self.next_int().unsigned_abs()
    }

    /// Returns an int in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound <= 0`.
    pub fn next_int_below(&mut self, bound: i32) -> i32 {
        self.next_int_between(0, bound)
    }

    /// Returns an int in `[min, max)`.
    ///
    /// # Panics
    /// Panics if `max <= min`.
    pub fn next_int_between(&mut self, min: i32, max: i32) -> i32 {
        let span = checked_span(i64::from(min), i64::from(max)).throw();
        min.wrapping_add((u64::from(self.next_abs_int()) % span) as i32)
    }

    /// Returns a double in `[-1, 1]`.
    pub fn next_double(&mut self) -> f64 {
        (self.next_long() as f64 / i64::MAX as f64).clamp(-1.0, 1.0)
    }

    /// Returns a double in `[0, 1]`.
    pub fn next_abs_double(&mut self) -> f64 {
        (self.next_double() + 1.0) / 2.0
    }

    /// Returns a double scaled into `[min, max]`.
    pub fn next_double_between(&mut self, min: f64, max: f64) -> f64 {
        self.next_abs_double() * (max - min) + min
    }

    /// Returns a float in `[-1, 1]`.
    pub fn next_float(&mut self) -> f32 {
        self.next_double() as f32
    }

    /// Returns a float in `[0, 1]`.
    pub fn next_abs_float(&mut self) -> f32 {
        (self.next_float() + 1.0) / 2.0
    }

    /// Returns a float scaled into `[min, max]`.
    pub fn next_float_between(&mut self, min: f32, max: f32) -> f32 {
        self.next_abs_float() * (max - min) + min
    }

    /// Returns true if the next long is positive.
    pub const fn next_bool(&mut self) -> bool {
        self.next_long() > 0
    }
}

fn checked_span(min: i64, max: i64) -> Result<u64, EmptyRange> {
    if max > min {
        Ok(max.abs_diff(min))
    } else {
        Err(EmptyRange)
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        FastRandom::from_thread_rng()
    }
}

impl RngCore for FastRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_long() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_long() as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for FastRandom {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        FastRandom::new(i64::from_le_bytes(seed))
    }
}
