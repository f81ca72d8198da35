//! Seeded scalar random stream.

const MODULUS: i64 = 2_147_483_647;
const MULTIPLIER: i64 = 16_807;

/// Park–Miller multiplicative congruential generator over the prime 2³¹ − 1.
///
/// Every stochastic decision in a generation run draws from one of these, so
/// identical seeds give identical maps on every platform.
#[derive(Debug, Clone)]
pub struct LcgRng {
    state: i64,
}

impl LcgRng {
    /// Creates a stream from any integer seed.
    ///
    /// Negative or oversized seeds are folded into `[0, 2³¹ − 1)`; the
    /// absorbing zero state is replaced by 1.
    pub fn new(seed: i64) -> Self {
        let folded = ((seed % MODULUS) + MODULUS) % MODULUS;
        Self {
            state: if folded == 0 { 1 } else { folded },
        }
    }

    /// Next value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        (self.state - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Next value in [0, 1) as `f32`.
    pub fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }
}
