use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// An nmap timing template, `-T0` (paranoid) through `-T5` (insane).
///
/// Only constructible for levels in `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingTemplate(u8);

impl TimingTemplate {
    pub const MAX_LEVEL: u8 = 5;

    pub const fn level(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TimingTemplate {
    type Error = ValidationError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        if level > Self::MAX_LEVEL {
            return Err(ValidationError::BadTiming(level.to_string()));
        }
        Ok(TimingTemplate(level))
    }
}

impl FromStr for TimingTemplate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level: u8 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::BadTiming(s.to_string()))?;
        Self::try_from(level)
    }
}

impl fmt::Display for TimingTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_zero_through_five_accepted() {
        for level in 0..=5u8 {
            assert_eq!(TimingTemplate::try_from(level).map(TimingTemplate::level), Ok(level));
        }
    }

    #[test]
    fn test_level_six_rejected() {
        assert_eq!(
            TimingTemplate::try_from(6),
            Err(ValidationError::BadTiming("6".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<TimingTemplate>().map(|t| t.level()), Ok(4));
        assert_eq!(
            "insane".parse::<TimingTemplate>(),
            Err(ValidationError::BadTiming("insane".to_string()))
        );
        assert_eq!(
            "-1".parse::<TimingTemplate>(),
            Err(ValidationError::BadTiming("-1".to_string()))
        );
    }
}
