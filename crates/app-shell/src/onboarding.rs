//! First-run carousel.

/// One onboarding slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
}

pub const SLIDES: [Slide; 4] = [
    Slide {
        id: "welcome",
        title: "Welcome to Roamly",
    },
    Slide {
        id: "ai-recommendations",
        title: "Smart AI Recommendations",
    },
    Slide {
        id: "routes",
        title: "Explore Different Routes",
    },
    Slide {
        id: "ready",
        title: "Ready to Explore?",
    },
];

#[derive(Debug, Clone, Default)]
pub struct Onboarding {
    index: usize,
}

impl Onboarding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Slide {
        SLIDES[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next slide. Stops on the last one.
    pub fn next(&mut self) -> Slide {
        if self.index + 1 < SLIDES.len() {
            self.index += 1;
        }
        self.current()
    }

    /// Jump to the last slide.
    pub fn skip(&mut self) -> Slide {
        self.index = SLIDES.len() - 1;
        self.current()
    }

    /// Skip is only offered before the last slide.
    pub fn can_skip(&self) -> bool {
        !self.is_complete()
    }

    pub fn is_complete(&self) -> bool {
        self.index == SLIDES.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last() {
        let mut onboarding = Onboarding::new();
        assert_eq!(onboarding.current().id, "welcome");
        for _ in 0..10 {
            onboarding.next();
        }
        assert_eq!(onboarding.current().id, "ready");
        assert!(onboarding.is_complete());
    }

    #[test]
    fn test_skip() {
        let mut onboarding = Onboarding::new();
        assert!(onboarding.can_skip());
        onboarding.next();
        assert_eq!(onboarding.skip().id, "ready");
        assert!(!onboarding.can_skip());
    }
}
