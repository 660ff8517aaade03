use super::VotRange;
use crate::{config::VotConfig, model::roster::RosterError};
use skimroster_core::model::{constants::EPSILON, VotGroup};

/// outer bound of the highest group unless a threshold reaches past it
const UPPER_BOUND: f64 = 10000.0;

/// maps a value of time to its vot group using five contiguous ranges
/// built from the four configured thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct VotGroupResolver {
    ranges: [VotRange; 5],
}

impl VotGroupResolver {
    pub fn new(config: &VotConfig) -> VotGroupResolver {
        let [t0, t1, t2, t3] = config.thresholds();
        let lower = if t0 <= 0.0 { t0 - 1.0 } else { 0.0 };
        let upper = if t3 >= UPPER_BOUND { t3 + 1.0 } else { UPPER_BOUND };
        let breakpoints = [lower, t0, t1, t2, t3, upper];
        let ranges = VotGroup::ALL.map(|vot_group| {
            let i = vot_group.id() - 1;
            VotRange {
                vot_group,
                min: breakpoints[i],
                max: breakpoints[i + 1],
            }
        });
        VotGroupResolver { ranges }
    }

    pub fn ranges(&self) -> &[VotRange] {
        &self.ranges
    }

    /// the first group whose range contains the value of time. values at or
    /// below zero are raised to a small positive number first, so they fall
    /// in the lowest group.
    pub fn vot_group(&self, vot: f64) -> Result<VotGroup, RosterError> {
        if vot.is_nan() {
            return Err(RosterError::VotGroupNotFound(vot));
        }
        let v = vot.max(EPSILON);
        self.ranges
            .iter()
            .find(|r| r.contains(v))
            .map(|r| r.vot_group)
            .ok_or(RosterError::VotGroupNotFound(vot))
    }
}

#[cfg(test)]
mod test {
    use super::VotGroupResolver;
    use crate::{config::VotConfig, model::roster::RosterError};
    use skimroster_core::model::VotGroup;

    #[test]
    fn test_default_thresholds() {
        let resolver = VotGroupResolver::new(&VotConfig::default());
        let group = |v| resolver.vot_group(v).expect("in range");
        assert_eq!(group(-20.0), VotGroup::VeryLow);
        assert_eq!(group(0.0), VotGroup::VeryLow);
        assert_eq!(group(3.75), VotGroup::VeryLow);
        assert_eq!(group(3.76), VotGroup::Low);
        assert_eq!(group(15.0), VotGroup::Low);
        assert_eq!(group(22.0), VotGroup::Medium);
        assert_eq!(group(29.99), VotGroup::High);
        assert_eq!(group(30.01), VotGroup::VeryHigh);
        assert_eq!(group(10000.0), VotGroup::VeryHigh);
        assert!(matches!(
            resolver.vot_group(10000.5),
            Err(RosterError::VotGroupNotFound(_))
        ));
        assert!(resolver.vot_group(f64::NAN).is_err());
    }

    #[test]
    fn test_ranges_are_contiguous() {
        let resolver = VotGroupResolver::new(&VotConfig::default());
        let ranges = resolver.ranges();
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0].min, 0.0);
        assert_eq!(ranges[4].max, 10000.0);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].max, pair[1].min);
            assert!(pair[0].vot_group < pair[1].vot_group);
        }
    }

    #[test]
    fn test_synthetic_bounds_extend_past_thresholds() {
        let config = VotConfig {
            very_low_low: -5.0,
            low_medium: 1.0,
            medium_high: 100.0,
            high_very_high: 20000.0,
        };
        let resolver = VotGroupResolver::new(&config);
        assert_eq!(resolver.ranges()[0].min, -6.0);
        assert_eq!(resolver.ranges()[4].max, 20001.0);
        // floored at epsilon, so negative values of time land above -5
        assert_eq!(resolver.vot_group(-100.0).ok(), Some(VotGroup::Low));
        assert_eq!(resolver.vot_group(20000.5).ok(), Some(VotGroup::VeryHigh));
    }
}
