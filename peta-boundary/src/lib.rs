//! Serializable, anemic data structures for the PetaPintar backend.
//!
//! The records in this crate carry the storage column names of the hosted
//! table service. Conversions from and to the domain entities perform the
//! field renaming in both directions without computing, defaulting or
//! validating any value.

use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
#[cfg(feature = "entity-conversions")]
pub use self::conv::ConversionError;

/// Storage row of the `locations` table.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
pub struct PinRecord {
    pub id              : String,
    pub name            : String,
    pub description     : String,
    pub category        : String,
    pub lat             : f64,
    pub lng             : f64,
    pub image_url       : Option<String>,
    pub address         : String,
    pub phone           : String,
    pub owner_name      : String,
    pub email           : String,
    pub whatsapp        : String,
    pub operating_hours : String,
    pub status          : String,
    pub created_at      : i64,
}

/// Storage row of the `reports` table.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
pub struct ReportRecord {
    pub report_id   : String,
    pub pin_id      : String,
    pub pin_name    : String,
    pub changes     : String,
    pub reported_at : i64,
}

/// Geographic point used by the map view.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, Copy, PartialEq)
)]
pub struct MapPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Login credentials for the auth service.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Default, Clone, PartialEq, Eq)
)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity subset of the auth service's user object.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Opaque session issued by the auth service.
///
/// The application never interprets the tokens; it only stores and
/// forwards them.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_token: String,
    pub user: AuthUser,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct RequestPasswordReset {
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
pub struct UpdatePassword {
    pub password: String,
}

/// Structured error payload returned by the backend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    any(test, feature = "extra-derive"),
    derive(Debug, Clone, PartialEq, Eq)
)]
#[cfg_attr(
    feature = "extra-derive",
    derive(thiserror::Error),
    error("{message}")
)]
pub struct Error {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_error_payload_without_code() {
        let err: Error = serde_json::from_str(r#"{"message":"permission denied"}"#).unwrap();
        assert_eq!(None, err.code);
        assert_eq!("permission denied", err.message);
    }

    #[test]
    fn pin_record_uses_storage_column_names() {
        let record = PinRecord {
            id: "p1".into(),
            name: "Warung Kopi".into(),
            description: String::new(),
            category: "cafe".into(),
            lat: -6.2,
            lng: 106.8,
            image_url: None,
            address: String::new(),
            phone: String::new(),
            owner_name: "Ibu Sari".into(),
            email: String::new(),
            whatsapp: String::new(),
            operating_hours: "08:00-17:00".into(),
            status: "active".into(),
            created_at: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!("Ibu Sari", json["owner_name"]);
        assert_eq!("08:00-17:00", json["operating_hours"]);
        assert_eq!(1_700_000_000_000_i64, json["created_at"]);
    }
}
