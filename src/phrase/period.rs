use std::fmt;

/// Coarse time-of-day label, derived from the 24-hour clock hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl Period {
    /// Classifies an hour in 0-23. Boundaries: [5,12) morning, [12,17)
    /// afternoon, [17,21) evening, everything else night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Period::Morning,
            12..=16 => Period::Afternoon,
            17..=20 => Period::Evening,
            _ => Period::Night,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Morning => write!(f, "morning"),
            Period::Afternoon => write!(f, "afternoon"),
            Period::Evening => write!(f, "evening"),
            Period::Night => write!(f, "night"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_hours_classify_correctly() {
        assert_eq!(Period::from_hour(4), Period::Night);
        assert_eq!(Period::from_hour(5), Period::Morning);
        assert_eq!(Period::from_hour(11), Period::Morning);
        assert_eq!(Period::from_hour(12), Period::Afternoon);
        assert_eq!(Period::from_hour(16), Period::Afternoon);
        assert_eq!(Period::from_hour(17), Period::Evening);
        assert_eq!(Period::from_hour(20), Period::Evening);
        assert_eq!(Period::from_hour(21), Period::Night);
    }

    #[test]
    fn midnight_is_night() {
        assert_eq!(Period::from_hour(0), Period::Night);
        assert_eq!(Period::from_hour(23), Period::Night);
    }

    #[test]
    fn every_hour_gets_a_label() {
        for hour in 0..24 {
            // from_hour is total; just exercise every input.
            let _ = Period::from_hour(hour);
        }
    }

    #[test]
    fn period_display() {
        assert_eq!(Period::Morning.to_string(), "morning");
        assert_eq!(Period::Afternoon.to_string(), "afternoon");
        assert_eq!(Period::Evening.to_string(), "evening");
        assert_eq!(Period::Night.to_string(), "night");
    }
}
