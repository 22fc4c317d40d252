/// Small deterministic generator (SplitMix64). The same seed always replays the same battle.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Seed a new generator.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0);
        // Multiply-shift keeps the high bits, which are the well mixed ones.
        ((u128::from(self.next_u64()) * n as u128) >> 64) as usize
    }

    /// Pick one element uniformly, `None` for an empty iterator.
    pub fn choose<I: IntoIterator>(&mut self, items: I) -> Option<I::Item> {
        let mut items: Vec<I::Item> = items.into_iter().collect();
        if items.is_empty() {
            return None;
        }
        let i = self.below(items.len());
        Some(items.swap_remove(i))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/simulate/rng.rs"]
mod tests;
