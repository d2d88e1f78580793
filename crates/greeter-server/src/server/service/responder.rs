//! Reply strategies for the greeter service.
//!
//! A [`Responder`] is picked once from the [`ServerConfig`] and then answers
//! every request the same way. The `Delayed` strategy suspends only the task
//! serving the current request (`tokio::time::sleep`), so other requests keep
//! being accepted and served while it waits.

use crate::server::{
    config::ServerConfig,
    service::delay::{DelaySource, ThreadRandom},
};
use core::{fmt, time::Duration};
use greeter_core::{
    proto::{HelloReply, HelloRequest},
    types::Variant,
};
use std::sync::Arc;

/// How a server variant turns a [`HelloRequest`] into a [`HelloReply`].
#[derive(Clone)]
pub enum Responder {
    /// Replies as soon as the request arrives.
    Immediate,
    /// Sleeps for `source.draw(max)` before replying. A zero `max` disables
    /// the sleep.
    Delayed {
        max: Duration,
        source: Arc<dyn DelaySource>,
    },
}

impl Responder {
    pub fn from_config(config: &ServerConfig) -> Self {
        match config.variant {
            Variant::Default => Self::Immediate,
            Variant::Block => Self::delayed(config.max_block_duration, ThreadRandom),
        }
    }

    pub fn delayed<S: DelaySource>(max: Duration, source: S) -> Self {
        Self::Delayed {
            max,
            source: Arc::new(source),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Immediate => Variant::Default,
            Self::Delayed { .. } => Variant::Block,
        }
    }

    pub async fn respond(&self, request: HelloRequest) -> HelloReply {
        if let Self::Delayed { max, source } = self {
            if !max.is_zero() {
                let delay = source.draw(*max);
                tracing::debug!("Blocking for {:?} (max {:?})", delay, max);
                tokio::time::sleep(delay).await;
            }
        }

        HelloReply::greeting(&request.name, self.variant())
    }
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate => f.write_str("Immediate"),
            Self::Delayed { max, .. } => f.debug_struct("Delayed").field("max", max).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::sync::atomic::{AtomicU64, Ordering};
    use tokio::time::Instant;

    struct FixedDelay(Duration);

    impl DelaySource for FixedDelay {
        fn draw(&self, _max: Duration) -> Duration {
            self.0
        }
    }

    /// Hands out 100ms, 200ms, 300ms, ... to successive callers.
    #[derive(Default)]
    struct SteppedDelay(AtomicU64);

    impl DelaySource for SteppedDelay {
        fn draw(&self, _max: Duration) -> Duration {
            let step = self.0.fetch_add(1, Ordering::Relaxed) + 1;
            Duration::from_millis(step * 100)
        }
    }

    struct Unreachable;

    impl DelaySource for Unreachable {
        fn draw(&self, _max: Duration) -> Duration {
            panic!("delay drawn for a zero bound");
        }
    }

    fn request(name: &str) -> HelloRequest {
        HelloRequest {
            name: name.to_string(),
        }
    }

    #[test]
    fn config_selects_strategy() {
        let default = Responder::from_config(&ServerConfig::default());
        assert!(matches!(default, Responder::Immediate));

        let block = Responder::from_config(&ServerConfig {
            variant: Variant::Block,
            max_block_duration: Duration::from_millis(100),
            ..ServerConfig::default()
        });
        match block {
            Responder::Delayed { max, .. } => assert_eq!(max, Duration::from_millis(100)),
            other => panic!("expected a delayed responder, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_replies_without_waiting() {
        let start = Instant::now();
        let reply = Responder::Immediate.respond(request("Ada")).await;
        assert_eq!(reply.message, "Hello Ada, from default server");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_waits_for_drawn_delay() {
        let responder = Responder::delayed(
            Duration::from_secs(3),
            FixedDelay(Duration::from_millis(1_200)),
        );

        let start = Instant::now();
        let reply = responder.respond(request("Ada")).await;
        let elapsed = start.elapsed();

        assert_eq!(reply.message, "Hello Ada, from block server");
        assert!(elapsed >= Duration::from_millis(1_200), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1_300), "{elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn zero_bound_never_draws() {
        let responder = Responder::delayed(Duration::ZERO, Unreachable);
        let start = Instant::now();
        let reply = responder.respond(request("")).await;
        assert_eq!(reply.message, "Hello , from block server");
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_delays_overlap() {
        let responder = Responder::delayed(Duration::from_secs(3), SteppedDelay::default());

        let start = Instant::now();
        let tasks = (0..16).map(|i| {
            let responder = responder.clone();
            tokio::spawn(async move { responder.respond(request(&format!("n{i}"))).await })
        });
        let replies = join_all(tasks).await;
        let elapsed = start.elapsed();

        for reply in replies {
            assert!(reply.unwrap().message.ends_with(", from block server"));
        }
        // The longest draw is 1.6s; run back to back they would take 13.6s.
        assert!(elapsed >= Duration::from_millis(1_600), "{elapsed:?}");
        assert!(elapsed < Duration::from_millis(1_700), "{elapsed:?}");
    }

    #[tokio::test]
    async fn thread_random_delay_is_below_bound() {
        let max = Duration::from_millis(50);
        let responder = Responder::delayed(max, ThreadRandom);

        for _ in 0..5 {
            let start = std::time::Instant::now();
            let reply = responder.respond(request("Ada")).await;
            assert_eq!(reply.message, "Hello Ada, from block server");
            // Timer granularity can round the sleep up to the next millisecond.
            assert!(start.elapsed() < max + Duration::from_millis(25));
        }
    }
}
