use std::time::Duration;

#[derive(Clone, Copy, Debug, Default)]
pub struct Time {
    /// Time since the previous frame.
    pub elapsed: Duration,
    /// Time since the session began.
    pub total: Duration,
}

impl Time {
    pub fn advance(&self, elapsed: Duration) -> Time {
        Time {
            elapsed,
            total: self.total + elapsed,
        }
    }

    pub fn delta_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}
