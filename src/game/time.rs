//! Day/night clock
//!
//! Time of day runs from 0.0 (midnight) through 0.5 (noon) back to 1.0.

/// Darkest the night overlay ever gets
const MAX_DARKNESS: f32 = 0.9;

/// Slope of the dawn and dusk ramps
const TWILIGHT_RATE: f32 = 3.6;

/// Tracks the time of day
#[derive(Debug, Clone, PartialEq)]
pub struct DayCycle {
    /// Fraction of the current day in `[0, 1)`
    time: f32,
    /// Real seconds per full day
    day_duration: f32,
    /// Completed days
    days: u32,
}

impl DayCycle {
    /// Start a clock at midnight
    pub fn new(day_duration: f32) -> Self {
        Self {
            time: 0.0,
            day_duration: day_duration.max(f32::EPSILON),
            days: 0,
        }
    }

    /// Advance by `dt` seconds, wrapping at the end of the day
    pub fn update(&mut self, dt: f32) {
        self.time += dt / self.day_duration;
        if self.time >= 1.0 {
            self.days += self.time.floor() as u32;
            self.time = self.time.fract();
        }
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn set_time(&mut self, time: f32) {
        self.time = time.rem_euclid(1.0);
    }

    /// Opacity of the night overlay in `[0, 0.9]`
    pub fn darkness(&self) -> f32 {
        let darkness = if self.time < 0.25 {
            MAX_DARKNESS - self.time * TWILIGHT_RATE
        } else if self.time > 0.75 {
            (self.time - 0.75) * TWILIGHT_RATE
        } else {
            0.0
        };
        darkness.clamp(0.0, MAX_DARKNESS)
    }

    /// Dark enough that a light overlay is worth drawing
    pub fn is_dark(&self) -> bool {
        self.darkness() >= 0.05
    }
}

impl Default for DayCycle {
    fn default() -> Self {
        Self::new(60.0) // One minute per day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_at_end_of_day() {
        let mut clock = DayCycle::new(10.0);
        clock.update(12.5);
        assert!((clock.time() - 0.25).abs() < 1e-5);
        assert_eq!(clock.days(), 1);
    }

    #[test]
    fn test_darkness_curve() {
        let mut clock = DayCycle::default();
        assert!((clock.darkness() - 0.9).abs() < 1e-6);
        assert!(clock.is_dark());

        clock.set_time(0.5);
        assert_eq!(clock.darkness(), 0.0);
        assert!(!clock.is_dark());

        clock.set_time(0.1);
        assert!((clock.darkness() - 0.54).abs() < 1e-5);

        clock.set_time(0.9);
        assert!((clock.darkness() - 0.54).abs() < 1e-5);
    }
}
