//! conversion between wall-clock times written in roster files and the
//! roster minute clock, which counts 1..=1440 starting at 03:00.
use crate::model::{
    constants::{DAY_START_MINUTES, MINUTES_IN_DAY},
    VocabularyError,
};

/// parses a clock time as either minutes after midnight (0..=1440) or H:MM.
pub fn parse_clock_minutes(token: &str) -> Result<usize, VocabularyError> {
    let trimmed = token.trim();
    let invalid = |msg: &str| VocabularyError::InvalidClockTime(token.to_string(), msg.to_string());
    let minutes = match trimmed.split_once(':') {
        Some((h, m)) => {
            let hours: usize = h.parse().map_err(|_| invalid("hour is not a number"))?;
            let mins: usize = m.parse().map_err(|_| invalid("minute is not a number"))?;
            if mins >= 60 {
                return Err(invalid("minute must be less than 60"));
            }
            hours * 60 + mins
        }
        None => trimmed
            .parse()
            .map_err(|_| invalid("expected minutes after midnight or H:MM"))?,
    };
    if minutes > MINUTES_IN_DAY {
        return Err(invalid("clock time exceeds 24:00"));
    }
    Ok(minutes)
}

/// maps minutes after midnight onto the roster minute clock.
/// 03:00 becomes minute 1 and 02:59 becomes minute 1440.
pub fn to_minutes_after_day_start(clock_minutes: usize) -> usize {
    let shifted = (clock_minutes % MINUTES_IN_DAY + MINUTES_IN_DAY - DAY_START_MINUTES)
        % MINUTES_IN_DAY;
    shifted + 1
}

#[cfg(test)]
mod test {
    use super::{parse_clock_minutes, to_minutes_after_day_start};

    #[test]
    fn test_parse_clock_formats() {
        assert_eq!(parse_clock_minutes("180"), Ok(180));
        assert_eq!(parse_clock_minutes("3:00"), Ok(180));
        assert_eq!(parse_clock_minutes("23:59"), Ok(1439));
        assert_eq!(parse_clock_minutes("24:00"), Ok(1440));
        assert!(parse_clock_minutes("24:01").is_err());
        assert!(parse_clock_minutes("7:75").is_err());
        assert!(parse_clock_minutes("noon").is_err());
    }

    #[test]
    fn test_day_start_offset() {
        assert_eq!(to_minutes_after_day_start(180), 1);
        assert_eq!(to_minutes_after_day_start(179), 1440);
        assert_eq!(to_minutes_after_day_start(0), 1261);
        assert_eq!(to_minutes_after_day_start(1440), 1261);
        assert_eq!(to_minutes_after_day_start(360), 181);
    }
}
