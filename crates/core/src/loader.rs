//! Loading screen shown once when the session starts.

use crate::types::LOADER_MS;

pub const LOADER_MESSAGE: &str = "Calm… I’m not collecting your data. This is just my portfolio.";

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
const SPINNER_FRAME_MS: u32 = 120;

#[derive(Debug, Clone)]
pub struct Loader {
    elapsed_ms: u32,
    duration_ms: u32,
}

impl Loader {
    pub fn new() -> Self {
        Self::with_duration(LOADER_MS)
    }

    pub fn with_duration(duration_ms: u32) -> Self {
        Self {
            elapsed_ms: 0,
            duration_ms,
        }
    }

    pub fn message(&self) -> &'static str {
        LOADER_MESSAGE
    }

    pub fn spinner(&self) -> char {
        SPINNER[(self.elapsed_ms / SPINNER_FRAME_MS) as usize % SPINNER.len()]
    }

    pub fn is_done(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Returns true once the loader has run its course.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        self.is_done()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finishes_after_duration() {
        let mut loader = Loader::new();
        assert!(!loader.tick(LOADER_MS - 1));
        assert!(loader.tick(1));
    }

    #[test]
    fn test_spinner_advances() {
        let mut loader = Loader::new();
        let first = loader.spinner();
        loader.tick(SPINNER_FRAME_MS);
        assert_ne!(loader.spinner(), first);
    }
}
