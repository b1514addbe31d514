//! Rocket launch animation
//!
//! Purely decorative: three text frames cycled every [`ROCKET_FRAME_MS`]
//! until the player leaves.

use crate::types::ROCKET_FRAME_MS;

/// Animation frames, one text row per entry
pub const ROCKET_FRAMES: [&[&str]; 3] = [
    &["   🚀   ", "   |   ", "  / \\ "],
    &["   🚀   ", "   |   ", " /   \\ "],
    &["   🚀   ", "   |   ", "/     \\ "],
];

#[derive(Debug, Clone, Default)]
pub struct RocketAnimation {
    frame: usize,
    frame_timer_ms: u32,
}

impl RocketAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn frame(&self) -> &'static [&'static str] {
        ROCKET_FRAMES[self.frame]
    }

    /// Show the next frame, wrapping to the first after the last.
    pub fn advance(&mut self) -> usize {
        self.frame = (self.frame + 1) % ROCKET_FRAMES.len();
        self.frame
    }

    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.frame_timer_ms += elapsed_ms;
        if self.frame_timer_ms < ROCKET_FRAME_MS {
            return false;
        }
        self.frame_timer_ms -= ROCKET_FRAME_MS;
        self.advance();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_back_to_first_frame() {
        let mut rocket = RocketAnimation::new();
        assert_eq!(rocket.frame_index(), 0);
        assert_eq!(rocket.advance(), 1);
        assert_eq!(rocket.advance(), 2);
        assert_eq!(rocket.advance(), 0);
    }

    #[test]
    fn test_tick_respects_interval() {
        let mut rocket = RocketAnimation::new();
        assert!(!rocket.tick(ROCKET_FRAME_MS - 1));
        assert!(rocket.tick(1));
        assert_eq!(rocket.frame_index(), 1);
    }

    #[test]
    fn test_frame_time_carries_over() {
        use crate::types::TICK_MS;

        let mut rocket = RocketAnimation::new();
        // 25 frames of 16 ms is 400 ms: exactly two animation steps.
        for _ in 0..25 {
            rocket.tick(TICK_MS);
        }
        assert_eq!(rocket.frame_index(), 2);
    }
}
