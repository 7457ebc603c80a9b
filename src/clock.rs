/// Fixed-rate pacing for game frames on top of a variable render rate.
#[derive(Clone, Debug)]
pub struct FrameClock {
    interval: f64,
    accumulated: f64,
}

impl FrameClock {
    /// Frames owed after a long stall are capped so the snake does not jump.
    const MAX_CATCH_UP: u32 = 3;

    pub fn new(interval: f64) -> Self {
        Self { interval, accumulated: 0.0 }
    }

    /// Adds `dt` seconds of render time and returns how many game frames are due.
    pub fn tick(&mut self, dt: f64) -> u32 {
        self.accumulated += dt.max(0.0);
        let mut due = 0;
        while self.accumulated >= self.interval && due < Self::MAX_CATCH_UP {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due == Self::MAX_CATCH_UP {
            self.accumulated = self.accumulated.min(self.interval);
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(0.06), 0);
        assert_eq!(clock.tick(0.06), 1);
        assert_eq!(clock.tick(0.02), 0);
    }

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(5.0), 3);
        assert!(clock.tick(0.0) <= 1);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut clock = FrameClock::new(0.1);
        assert_eq!(clock.tick(-1.0), 0);
        assert_eq!(clock.tick(0.1), 1);
    }
}
