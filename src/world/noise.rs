//! Value noise
//!
//! Each integer lattice point gets a pseudo-random value from a hash of
//! `(x, y, seed)`; points in between are blended from the four surrounding
//! lattice values with quintic smoothstep weights. Output lies in `[0, 1)`.

use ::noise::NoiseFn;

/// Deterministic 2D value-noise field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueNoise {
    seed: u64,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pseudo-random value of a lattice point, in `[0, 1)`
    pub fn lattice(&self, x: i64, y: i64) -> f64 {
        let mut h = self.seed ^ 0x9E37_79B9_7F4A_7C15;
        h ^= (x as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h = h.rotate_left(31);
        h ^= (y as u64).wrapping_mul(0x94D0_49BB_1331_11EB);

        // splitmix64 finalizer
        h ^= h >> 30;
        h = h.wrapping_mul(0xBF58_476D_1CE4_E5B9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94D0_49BB_1331_11EB);
        h ^= h >> 31;

        // Top 53 bits give an exact f64 in [0, 1)
        (h >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Sample the field at a continuous point
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let u = fade(x - x0);
        let v = fade(y - y0);
        let (i, j) = (x0 as i64, y0 as i64);

        let top = lerp(self.lattice(i, j), self.lattice(i + 1, j), u);
        let bottom = lerp(self.lattice(i, j + 1), self.lattice(i + 1, j + 1), u);
        lerp(top, bottom, v)
    }
}

impl NoiseFn<f64, 2> for ValueNoise {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

/// Quintic smoothstep: zero first and second derivative at both ends
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
