//! Scroll-proximity trigger
//!
//! Decides when the viewport is close enough to the end of the feed that the
//! next page should be requested. The signal is advisory: the feed's own
//! guards absorb redundant or rapid-fire requests, so no debouncing happens
//! here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTrigger {
    threshold: usize,
}

impl ScrollTrigger {
    /// `threshold` is the number of items that may remain below the
    /// selection before loading starts
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Whether the position lies within the threshold band at the end
    ///
    /// An empty list is always "at the bottom".
    pub fn is_near_bottom(&self, position: Option<usize>, len: usize) -> bool {
        if len == 0 {
            return true;
        }
        let position = position.unwrap_or(0).min(len - 1);
        let remaining = len - 1 - position;
        remaining <= self.threshold
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(crate::infrastructure::config::DEFAULT_SCROLL_THRESHOLD)
    }
}
