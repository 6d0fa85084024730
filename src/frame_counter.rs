/// Counts frames and averages their duration over the whole run.
#[derive(Debug, Default)]
pub struct FrameCounter {
    average_frame_time: f64,
    frame_count: u64,
}

impl FrameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of the frame being produced: 0 for the first, then +1 per frame.
    pub fn current(&self) -> u64 {
        self.frame_count
    }

    pub fn end_frame(&mut self, elapsed: f32) {
        self.frame_count += 1;
        self.average_frame_time = elapsed as f64 / self.frame_count as f64;
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn secs_per_frame(&self) -> f64 {
        self.average_frame_time
    }

    pub fn framerate(&self) -> f64 {
        if self.average_frame_time > 0.0 {
            1.0 / self.average_frame_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_counts_from_zero() {
        let mut counter = FrameCounter::new();
        assert_eq!(counter.current(), 0);
        counter.end_frame(0.0);
        assert_eq!(counter.current(), 1);
        assert_eq!(counter.framerate(), 0.0);
    }

    #[test]
    fn test_average() {
        let mut counter = FrameCounter::new();
        for i in 1..=4 {
            counter.end_frame(i as f32 * 0.5);
        }
        assert_eq!(counter.frame_count(), 4);
        assert_eq!(counter.secs_per_frame(), 0.5);
        assert_eq!(counter.framerate(), 2.0);
    }
}
