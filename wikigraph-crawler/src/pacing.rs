use std::time::Duration;
use tracing::debug;

/// Fixed-window rate limiter shared by every fetch in a run, including
/// link-verification fetches. After every `every` requests the whole
/// crawl suspends for `pause`.
#[derive(Debug)]
pub struct RateLimiter {
    every: usize,
    pause: Duration,
    count: usize,
}

impl RateLimiter {
    /// The production pacing: pause 3 seconds after every 25 requests.
    pub const DEFAULT_WINDOW: usize = 25;
    pub const DEFAULT_PAUSE: Duration = Duration::from_secs(3);

    pub fn new(every: usize, pause: Duration) -> Self {
        Self {
            every,
            pause,
            count: 0,
        }
    }

    pub fn request_count(&self) -> usize {
        self.count
    }

    /// Record one request, suspending the caller when the window fills.
    pub async fn tick(&mut self) {
        self.count += 1;
        if self.every > 0 && self.count % self.every == 0 {
            debug!(
                requests = self.count,
                pause_ms = self.pause.as_millis() as u64,
                "pacing window reached, pausing"
            );
            tokio::time::sleep(self.pause).await;
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW, Self::DEFAULT_PAUSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pauses_once_per_window() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(3));

        let before = tokio::time::Instant::now();
        limiter.tick().await;
        limiter.tick().await;
        assert_eq!(before.elapsed(), Duration::ZERO);

        limiter.tick().await;
        assert_eq!(before.elapsed(), Duration::from_secs(3));

        limiter.tick().await;
        assert_eq!(before.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_counts_every_request() {
        let mut limiter = RateLimiter::new(2, Duration::from_millis(10));
        for _ in 0..5 {
            limiter.tick().await;
        }
        assert_eq!(limiter.request_count(), 5);
    }

    #[tokio::test]
    async fn test_zero_window_never_pauses() {
        let mut limiter = RateLimiter::new(0, Duration::from_secs(3600));
        limiter.tick().await;
        limiter.tick().await;
        assert_eq!(limiter.request_count(), 2);
    }
}
