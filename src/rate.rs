use std::time::{Duration, Instant};

/// Fixed-cadence tick source. Ticks missed while the caller was busy are
/// dropped rather than replayed.
pub struct Ticker {
    interval: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(rate_hz: u32) -> Ticker {
        let interval = Duration::from_secs(1) / rate_hz.max(1);
        Ticker {
            interval,
            next: Instant::now() + interval,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn wait(&mut self) {
        let now = Instant::now();

        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.interval;
        } else if now - self.next >= self.interval {
            // fell behind by at least one whole tick
            self.next = now + self.interval;
        } else {
            self.next += self.interval;
        }
    }
}

pub struct FpsCounter {
    window: u32,
    count: u32,
    start: Instant,
}

impl FpsCounter {
    pub fn new(window: u32) -> FpsCounter {
        FpsCounter {
            window: window.max(1),
            count: 0,
            start: Instant::now(),
        }
    }

    pub fn tick(&mut self) -> Option<f64> {
        self.count += 1;
        if self.count < self.window {
            return None;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(self.start).as_secs_f64();
        let fps = self.count as f64 / elapsed.max(f64::EPSILON);

        self.start = now;
        self.count = 0;

        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_from_rate() {
        assert_eq!(Ticker::new(50).interval(), Duration::from_millis(20));
        assert_eq!(Ticker::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn waits_for_the_tick() {
        let mut ticker = Ticker::new(100);
        let start = Instant::now();

        ticker.wait();
        ticker.wait();

        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn missed_ticks_are_dropped() {
        let mut ticker = Ticker::new(200);
        std::thread::sleep(Duration::from_millis(60));

        let before = Instant::now();
        ticker.wait();

        // a replaying schedule would still point into the past
        assert!(ticker.next > before);
    }

    #[test]
    fn reports_once_per_window() {
        let mut counter = FpsCounter::new(3);

        assert_eq!(counter.tick(), None);
        assert_eq!(counter.tick(), None);
        let fps = counter.tick().unwrap();
        assert!(fps > 0.0);

        assert_eq!(counter.tick(), None);
    }
}
