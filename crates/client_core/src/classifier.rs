//! Maps a returned score to a display tier.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Green,
    Yellow,
    Red,
}

/// Lower bounds are inclusive. Out-of-range scores are classified as-is and
/// NaN lands in [`Tier::Low`].
pub fn classify(score: f64) -> Tier {
    if score >= 80.0 {
        Tier::High
    } else if score >= 60.0 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

impl Tier {
    pub fn accent(self) -> Accent {
        match self {
            Self::High => Accent::Green,
            Self::Medium => Accent::Yellow,
            Self::Low => Accent::Red,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}
