use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// An nmap `-p` argument: a single port or an inclusive `start-end` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    pub start: u16,
    pub end: Option<u16>,
}

impl FromStr for PortRange {
    type Err = ValidationError;

    /// Parses the `start[-end]` grammar.
    ///
    /// Both ends must be ports in `1..=65535`, and `start <= end` when an
    /// end is given. Anything else is a [`ValidationError::BadPortRange`]
    /// carrying the original input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ValidationError::BadPortRange(s.to_string());

        let (start_str, end_str) = match s.split_once('-') {
            Some((start, end)) => (start, Some(end)),
            None => (s, None),
        };

        let start = parse_port(start_str).ok_or_else(bad)?;
        let end = match end_str {
            Some(end) => Some(parse_port(end).ok_or_else(bad)?),
            None => None,
        };

        if end.is_some_and(|end| start > end) {
            return Err(bad());
        }

        Ok(PortRange { start, end })
    }
}

/// Port 0 parses as a `u16` but is not scannable.
fn parse_port(s: &str) -> Option<u16> {
    match s.trim().parse::<u16>() {
        Ok(0) | Err(_) => None,
        Ok(port) => Some(port),
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{}", self.start, end),
            None => write!(f, "{}", self.start),
        }
    }
}
