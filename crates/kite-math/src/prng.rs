// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::Vec3;

/// Seedable `xoroshiro128+` generator for reproducible point clouds.
///
/// * Not cryptographically secure; it exists so tests and benchmarks can
///   regenerate the exact same vertex data from a seed.
/// * Sequences depend only on the seed and the order of calls, never on the
///   platform.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: [u64; 2],
}

/// Fallback state used when a seed would leave the generator all-zero.
const NONZERO_STATE: u64 = 0x9e37_79b9_7f4a_7c15;

impl Prng {
    /// Builds a generator from two raw 64-bit state words.
    pub const fn from_seed(seed0: u64, seed1: u64) -> Self {
        if seed0 == 0 && seed1 == 0 {
            return Self {
                state: [NONZERO_STATE, 0],
            };
        }
        Self {
            state: [seed0, seed1],
        }
    }

    /// Builds a generator from a single seed, spreading it over both state
    /// words with SplitMix64.
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut sm = seed;
        let mut splitmix = || {
            sm = sm.wrapping_add(NONZERO_STATE);
            let mut z = sm;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        };
        let s0 = splitmix();
        let s1 = splitmix();
        Self::from_seed(s0, s1)
    }

    /// Advances the state and returns the next raw 64-bit output.
    pub fn next_u64(&mut self) -> u64 {
        let [s0, mut s1] = self.state;
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state = [s0.rotate_left(55) ^ s1 ^ (s1 << 14), s1.rotate_left(36)];

        result
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// The top 23 output bits become the mantissa of a float in `[1, 2)`.
    pub fn next_f32(&mut self) -> f32 {
        let bits = ((self.next_u64() >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next float in `[min, max)`; `min` when the bounds match.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        assert!(min <= max, "invalid range: {min}..{max}");
        if min == max {
            return min;
        }
        self.next_f32().mul_add(max - min, min)
    }

    /// Returns a point drawn uniformly from the box `[min, max)`.
    ///
    /// # Panics
    /// Panics if any lane has `min > max`.
    pub fn next_vec3(&mut self, min: &Vec3, max: &Vec3) -> Vec3 {
        let x = self.next_range(min.x(), max.x());
        let y = self.next_range(min.y(), max.y());
        let z = self.next_range(min.z(), max.z());
        Vec3::new(x, y, z)
    }

    /// Returns the next integer in the inclusive range `[min, max]`.
    ///
    /// Rejection sampling keeps the distribution free of modulo bias.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn next_int(&mut self, min: i32, max: i32) -> i32 {
        assert!(min <= max, "invalid range: {min}..={max}");
        let span = (i64::from(max) - i64::from(min)) as u64 + 1;
        let value = self.next_below(span);
        (value as i64 + i64::from(min)) as i32
    }

    /// Returns an index in `[0, len)`, or `None` for an empty range.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.next_below(len as u64) as usize)
    }

    /// Picks a random element of `items`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.next_index(items.len()).and_then(|i| items.get(i))
    }

    fn next_below(&mut self, span: u64) -> u64 {
        if span <= 1 {
            return 0;
        }
        if span.is_power_of_two() {
            return self.next_u64() & (span - 1);
        }
        let bound = u64::MAX - u64::MAX % span;
        loop {
            let candidate = self.next_u64();
            if candidate < bound {
                return candidate % span;
            }
        }
    }
}
