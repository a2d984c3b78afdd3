use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Milliseconds between the Unix epoch and the Discord epoch (2015-01-01T00:00:00Z)
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// Stable identifier of a Discord user (snowflake)
///
/// Unlike serenity's id types this accepts zero, which the host may hand us
/// for synthetic or system invocations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Account creation time encoded in the snowflake
    pub fn created_at(self) -> DateTime<Utc> {
        let millis = (self.0 >> 22) + DISCORD_EPOCH_MS;
        // The timestamp bits top out well inside chrono's range
        DateTime::from_timestamp_millis(millis as i64).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|cause| AuthError::InvalidUserId {
                input: s.to_string(),
                cause,
            })
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<UserId> for u64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<serenity::model::id::UserId> for UserId {
    fn from(id: serenity::model::id::UserId) -> Self {
        Self(id.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_user_id() {
        let id: UserId = " 624299014388711455 ".parse().unwrap();
        assert_eq!(id.get(), 624299014388711455);

        let error = "amr".parse::<UserId>().unwrap_err();
        assert!(matches!(error, AuthError::InvalidUserId { ref input, .. } if input == "amr"));

        assert!("-1".parse::<UserId>().is_err());
    }

    #[test]
    fn test_zero_is_valid() {
        let id: UserId = "0".parse().unwrap();
        assert_eq!(id, UserId::new(0));
        assert_eq!(id.created_at().timestamp_millis() as u64, DISCORD_EPOCH_MS);
    }

    #[test]
    fn test_snowflake_timestamp() {
        // Example snowflake from Discord's API reference docs
        let id = UserId::new(175928847299117063);
        assert_eq!(
            id.created_at(),
            Utc.with_ymd_and_hms(2016, 4, 30, 11, 18, 25).unwrap()
                + chrono::Duration::milliseconds(796)
        );
    }

    #[test]
    fn test_from_serenity() {
        let id = UserId::from(serenity::model::id::UserId::new(299693897859465228));
        assert_eq!(id.to_string(), "299693897859465228");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
