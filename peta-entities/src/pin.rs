use strum::{Display, EnumString};

use crate::{category::PinCategory, id::Id, time::Timestamp};

/// Publication status of a pin.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PinStatus {
    Pending,
    Active,
}

impl PinStatus {
    pub const fn default() -> Self {
        Self::Pending
    }
}

/// A point of interest on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PinLocation {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub category: PinCategory,
    pub lat: f64,
    pub lng: f64,
    pub image_url: Option<String>,
    pub address: String,
    pub phone: String,
    pub owner_name: String,
    pub email: String,
    pub whatsapp: String,
    pub operating_hours: String,
    pub status: PinStatus,
    pub created_at: Timestamp,
}

impl PinLocation {
    pub fn is_active(&self) -> bool {
        self.status == PinStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_tags() {
        assert_eq!(Ok(PinStatus::Active), "active".parse());
        assert_eq!(Ok(PinStatus::Pending), "Pending".parse());
        assert!("published".parse::<PinStatus>().is_err());
    }
}
