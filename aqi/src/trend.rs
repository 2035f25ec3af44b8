//! Short-term vs. long-term comparison of a sensor's readings.

/// Direction the readings are heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
}

impl Trend {
    /// Suffix for the widget header; Stable has none.
    pub fn suffix(self) -> &'static str {
        match self {
            Trend::Improving => " Improving",
            Trend::Worsening => " Worsening",
            Trend::Stable => "",
        }
    }
}

/// Compare the recent average against the longer-window average.
/// A recent value more than 5 below the long-term one is Improving,
/// more than 5 above is Worsening.
pub fn trend(short_term: i64, long_term: i64) -> Trend {
    let delta = long_term.saturating_sub(short_term);
    if delta > 5 {
        Trend::Improving
    } else if delta < -5 {
        Trend::Worsening
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions() {
        assert_eq!(trend(10, 20), Trend::Improving);
        assert_eq!(trend(20, 10), Trend::Worsening);
        assert_eq!(trend(10, 12), Trend::Stable);
        assert_eq!(trend(8, 20), Trend::Improving);
    }

    #[test]
    fn five_is_still_stable() {
        assert_eq!(trend(10, 15), Trend::Stable);
        assert_eq!(trend(15, 10), Trend::Stable);
        assert_eq!(trend(10, 16), Trend::Improving);
        assert_eq!(trend(16, 10), Trend::Worsening);
    }

    #[test]
    fn extreme_averages_saturate() {
        assert_eq!(trend(i64::MIN, i64::MAX), Trend::Improving);
        assert_eq!(trend(i64::MAX, i64::MIN), Trend::Worsening);
    }

    #[test]
    fn suffixes() {
        assert_eq!(Trend::Improving.suffix(), " Improving");
        assert_eq!(Trend::Worsening.suffix(), " Worsening");
        assert_eq!(Trend::Stable.suffix(), "");
    }
}
