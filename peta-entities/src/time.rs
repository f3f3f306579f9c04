use std::fmt;

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Unix timestamp with millisecond precision.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn into_millis(self) -> i64 {
        self.0
    }

    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds * 1000)
    }

    pub const fn into_seconds(self) -> i64 {
        self.0.div_euclid(1000)
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / 1_000_000) as i64)
    }
}

impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;
    fn try_from(from: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * 1_000_000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let formatted = OffsetDateTime::try_from(*self)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok());
        match formatted {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{}", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_from_into_millis() {
        let t1 = Timestamp::now();
        let m1 = t1.into_millis();
        let t2 = Timestamp::from_millis(m1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn seconds_round_down() {
        assert_eq!(1, Timestamp::from_millis(1999).into_seconds());
        assert_eq!(-2, Timestamp::from_millis(-1001).into_seconds());
    }

    #[test]
    fn display_is_rfc3339() {
        let ts = Timestamp::from_seconds(0);
        assert_eq!("1970-01-01T00:00:00Z", ts.to_string());
    }
}
