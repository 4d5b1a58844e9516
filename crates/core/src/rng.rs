//! RNG module - piece kind selection
//!
//! The game draws every kind uniformly and independently (no 7-bag). The draw is
//! behind the [`KindSource`] trait so tests can script exact sequences; the
//! default source is a small seeded LCG so whole games replay from one seed.

use std::collections::VecDeque;

use crate::types::PieceKind;

/// Supplies the kind of each newly queued piece
pub trait KindSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of kinds, cycling back to the start when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedKinds {
    kinds: VecDeque<PieceKind>,
}

impl ScriptedKinds {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: VecDeque<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "scripted kind sequence must not be empty");
        Self { kinds }
    }

    /// Always yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new([kind])
    }
}

impl KindSource for ScriptedKinds {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[0];
        self.kinds.rotate_left(1);
        kind
    }
}

impl<S: KindSource + ?Sized> KindSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}
