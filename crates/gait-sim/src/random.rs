//! Random source seam for the wobble walk.
//!
//! The controller never reaches for a global generator. Anything that
//! implements `rand::RngCore` works directly; plain closures go through
//! [`FnSource`].

use rand::{Rng, RngCore};

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Adapts a `FnMut() -> f64` callable into a [`RandomSource`].
pub struct FnSource<F>(pub F);

impl<F: FnMut() -> f64> RandomSource for FnSource<F> {
    fn next_unit(&mut self) -> f64 {
        (self.0)()
    }
}
