use core::time::Duration;
use rand::{Rng, rng};

/// Source of the artificial delay injected by the `block` variant.
///
/// Implementations are shared by every in-flight request and must be safe to
/// call concurrently.
pub trait DelaySource: Send + Sync + 'static {
    /// Returns a delay in `[0, max)`. Never called with a zero `max`.
    fn draw(&self, max: Duration) -> Duration;
}

/// A `DelaySource` that samples uniformly with the thread-local RNG
/// (`rand::rng()`).
///
/// Each OS thread has its own generator, seeded from the OS and reseeded
/// periodically, so concurrent draws never contend. The type itself is a
/// zero-sized handle and is freely shared across threads.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl DelaySource for ThreadRandom {
    fn draw(&self, max: Duration) -> Duration {
        rng().random_range(Duration::ZERO..max)
    }
}
