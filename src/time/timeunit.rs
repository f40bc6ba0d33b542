use crate::time::error::Error;
use core::str::FromStr;
use lazy_static::*;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    static ref DURATION_REGEX: Regex =
        Regex::new(r"^\s*(?P<value>\d+)\s*(?P<unit>[a-z]+)\s*$").expect("Regex compilation error");
}

/// A duration as written in settings files, e.g. `250ms` or `2m`.
#[derive(Debug, PartialEq)]
pub struct DurationUnit {
    value: u64,
    unit: TimeUnit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    fn millis(self) -> u64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
            TimeUnit::Hour => 3_600_000,
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ms" | "millis" | "millisecond" | "milliseconds" => Ok(TimeUnit::Millisecond),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Second),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minute),
            "h" | "hour" | "hours" => Ok(TimeUnit::Hour),
            other => Err(Error::UnitNotSupported(other.to_owned())),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = DURATION_REGEX
            .captures(s)
            .ok_or_else(|| Error::Syntax(s.to_owned()))?;
        let value = caps["value"]
            .parse::<u64>()
            .map_err(|_| Error::Overflow(s.to_owned()))?;
        let unit = caps["unit"].parse::<TimeUnit>()?;
        value
            .checked_mul(unit.millis())
            .ok_or_else(|| Error::Overflow(s.to_owned()))?;
        Ok(Self { value, unit })
    }
}

impl From<DurationUnit> for Duration {
    fn from(duration: DurationUnit) -> Self {
        // checked in from_str
        Duration::from_millis(duration.value * duration.unit.millis())
    }
}
