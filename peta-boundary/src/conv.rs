use peta_entities as e;
use thiserror::Error;

use super::*;

/// A record that cannot be expressed in the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("invalid status tag: {0}")]
    Status(String),
}

impl From<e::pin::PinLocation> for PinRecord {
    fn from(from: e::pin::PinLocation) -> Self {
        let e::pin::PinLocation {
            id,
            name,
            description,
            category,
            lat,
            lng,
            image_url,
            address,
            phone,
            owner_name,
            email,
            whatsapp,
            operating_hours,
            status,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            category: category.into(),
            lat,
            lng,
            image_url,
            address,
            phone,
            owner_name,
            email,
            whatsapp,
            operating_hours,
            status: status.to_string(),
            created_at: created_at.into_millis(),
        }
    }
}

impl TryFrom<PinRecord> for e::pin::PinLocation {
    type Error = ConversionError;

    fn try_from(from: PinRecord) -> Result<Self, Self::Error> {
        let PinRecord {
            id,
            name,
            description,
            category,
            lat,
            lng,
            image_url,
            address,
            phone,
            owner_name,
            email,
            whatsapp,
            operating_hours,
            status,
            created_at,
        } = from;
        let status = status
            .parse()
            .map_err(|_| ConversionError::Status(status))?;
        Ok(Self {
            id: id.into(),
            name,
            description,
            category: category.into(),
            lat,
            lng,
            image_url,
            address,
            phone,
            owner_name,
            email,
            whatsapp,
            operating_hours,
            status,
            created_at: e::time::Timestamp::from_millis(created_at),
        })
    }
}

impl From<e::report::LocationReport> for ReportRecord {
    fn from(from: e::report::LocationReport) -> Self {
        let e::report::LocationReport {
            report_id,
            pin_id,
            pin_name,
            changes,
            reported_at,
        } = from;
        Self {
            report_id: report_id.into(),
            pin_id: pin_id.into(),
            pin_name,
            changes,
            reported_at: reported_at.into_millis(),
        }
    }
}

impl From<ReportRecord> for e::report::LocationReport {
    fn from(from: ReportRecord) -> Self {
        let ReportRecord {
            report_id,
            pin_id,
            pin_name,
            changes,
            reported_at,
        } = from;
        Self {
            report_id: report_id.into(),
            pin_id: pin_id.into(),
            pin_name,
            changes,
            reported_at: e::time::Timestamp::from_millis(reported_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::builders::Builder;

    fn sample_record() -> PinRecord {
        PinRecord {
            id: "p1".into(),
            name: "Warung Kopi".into(),
            description: "Kopi tubruk dan gorengan".into(),
            category: "cafe".into(),
            lat: -6.2,
            lng: 106.8,
            image_url: Some("https://img.example/p1.jpg".into()),
            address: "Jl. Melati 5".into(),
            phone: "021-555123".into(),
            owner_name: "Ibu Sari".into(),
            email: "sari@example.com".into(),
            whatsapp: "+62811111".into(),
            operating_hours: "08:00-17:00".into(),
            status: "active".into(),
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn pin_record_round_trip() {
        let record = sample_record();
        let pin = e::pin::PinLocation::try_from(record.clone()).unwrap();
        assert_eq!(record, PinRecord::from(pin));
    }

    #[test]
    fn pin_entity_round_trip() {
        let pin = e::pin::PinLocation::build()
            .id("p1")
            .name("Warung Kopi")
            .category(e::category::PinCategory::Cafe)
            .pos(-6.2, 106.8)
            .image_url(Some("https://img.example/p1.jpg"))
            .status(e::pin::PinStatus::Active)
            .created_at(e::time::Timestamp::from_millis(1_700_000_000_000))
            .finish();
        let record = PinRecord::from(pin.clone());
        assert_eq!(pin, record.try_into().unwrap());
    }

    #[test]
    fn unknown_category_tag_round_trips_unchanged() {
        let record = PinRecord {
            category: "laundromat".into(),
            ..sample_record()
        };
        let pin = e::pin::PinLocation::try_from(record.clone()).unwrap();
        assert_eq!(
            e::category::PinCategory::Other("laundromat".into()),
            pin.category
        );
        assert_eq!(record, PinRecord::from(pin));
    }

    #[test]
    fn invalid_status_tag_is_rejected() {
        let record = PinRecord {
            status: "published".into(),
            ..sample_record()
        };
        assert_eq!(
            Err(ConversionError::Status("published".into())),
            e::pin::PinLocation::try_from(record)
        );
    }

    #[test]
    fn report_record_round_trip() {
        let record = ReportRecord {
            report_id: "r1".into(),
            pin_id: "p1".into(),
            pin_name: "Warung Kopi".into(),
            changes: "wrong phone number".into(),
            reported_at: 1_700_000_100_000,
        };
        let report = e::report::LocationReport::from(record.clone());
        assert_eq!(record, ReportRecord::from(report));
    }
}
