use std::rc::Rc;

use web_sys::File;

use peta_boundary::{PinRecord, ReportRecord};
use peta_entities::{id::Id, pin::PinLocation, report::LocationReport};

use crate::{backend::Backend, Result};

/// Field-renaming façade between the view layer and the hosted backend.
///
/// Every operation is a single request/response round trip: no retries, no
/// batching, no client-side caches. All mutating operations report success
/// or failure to the caller; reads degrade to an empty result and a log
/// entry.
#[derive(Clone)]
pub struct DataApi {
    backend: Rc<dyn Backend>,
}

impl DataApi {
    pub fn new(backend: Rc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// All pins, newest first.
    pub async fn list_pins(&self) -> Vec<PinLocation> {
        match self.fetch_pins().await {
            Ok(pins) => pins,
            Err(err) => {
                log::error!("Unable to load pins: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch_pins(&self) -> Result<Vec<PinLocation>> {
        let records = self.backend.select_pins().await?;
        let mut pins = records
            .into_iter()
            .map(PinLocation::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        pins.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(pins)
    }

    pub async fn create_pin(&self, pin: &PinLocation) -> Result<()> {
        let record = PinRecord::from(pin.clone());
        self.backend.insert_pins(std::slice::from_ref(&record)).await
    }

    /// Bulk import in a single call.
    pub async fn import_pins(&self, pins: &[PinLocation]) -> Result<()> {
        let records: Vec<PinRecord> = pins.iter().cloned().map(Into::into).collect();
        self.backend.insert_pins(&records).await
    }

    /// Last write wins; there is no optimistic-concurrency check.
    pub async fn update_pin(&self, pin: &PinLocation) -> Result<()> {
        let record = PinRecord::from(pin.clone());
        self.backend.update_pin(pin.id.as_str(), &record).await
    }

    pub async fn delete_pin(&self, id: &Id) -> Result<()> {
        self.backend.delete_pin(id.as_str()).await
    }

    /// All reports, newest first.
    pub async fn list_reports(&self) -> Vec<LocationReport> {
        match self.fetch_reports().await {
            Ok(reports) => reports,
            Err(err) => {
                log::error!("Unable to load reports: {err}");
                Vec::new()
            }
        }
    }

    async fn fetch_reports(&self) -> Result<Vec<LocationReport>> {
        let records = self.backend.select_reports().await?;
        let mut reports: Vec<LocationReport> =
            records.into_iter().map(Into::into).collect();
        reports.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(reports)
    }

    /// The referenced pin is not validated to exist; the reference is a
    /// plain identifier snapshot, like the pin name.
    pub async fn create_report(&self, report: &LocationReport) -> Result<()> {
        let record = ReportRecord::from(report.clone());
        self.backend.insert_report(&record).await
    }

    pub async fn delete_report(&self, report_id: &Id) -> Result<()> {
        self.backend.delete_report(report_id.as_str()).await
    }

    /// Uploads an image and returns its public URL.
    pub async fn upload_image(&self, file: &File) -> Result<String> {
        let object_path = image_object_path(&file.name());
        self.backend.upload_object(&object_path, file).await
    }
}

/// Derives a collision-resistant object path for an uploaded image,
/// keeping the extension of the original file name.
pub fn image_object_path(file_name: &str) -> String {
    let token = Id::new();
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => format!("public/{token}.{ext}"),
        _ => format!("public/{token}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use peta_entities::{
        builders::Builder,
        category::PinCategory,
        pin::PinStatus,
        time::Timestamp,
    };

    use super::*;
    use crate::Error;

    #[derive(Default)]
    struct MemoryBackend {
        pins: RefCell<Vec<PinRecord>>,
        reports: RefCell<Vec<ReportRecord>>,
    }

    #[async_trait(?Send)]
    impl Backend for MemoryBackend {
        async fn select_pins(&self) -> Result<Vec<PinRecord>> {
            Ok(self.pins.borrow().clone())
        }
        async fn insert_pins(&self, records: &[PinRecord]) -> Result<()> {
            self.pins.borrow_mut().extend_from_slice(records);
            Ok(())
        }
        async fn update_pin(&self, id: &str, record: &PinRecord) -> Result<()> {
            for pin in self.pins.borrow_mut().iter_mut() {
                if pin.id == id {
                    *pin = record.clone();
                }
            }
            Ok(())
        }
        async fn delete_pin(&self, id: &str) -> Result<()> {
            self.pins.borrow_mut().retain(|pin| pin.id != id);
            Ok(())
        }
        async fn select_reports(&self) -> Result<Vec<ReportRecord>> {
            Ok(self.reports.borrow().clone())
        }
        async fn insert_report(&self, record: &ReportRecord) -> Result<()> {
            self.reports.borrow_mut().push(record.clone());
            Ok(())
        }
        async fn delete_report(&self, report_id: &str) -> Result<()> {
            self.reports
                .borrow_mut()
                .retain(|report| report.report_id != report_id);
            Ok(())
        }
        async fn upload_object(&self, object_path: &str, _file: &File) -> Result<String> {
            Ok(format!("memory:///{object_path}"))
        }
    }

    fn memory_api() -> DataApi {
        DataApi::new(Rc::new(MemoryBackend::default()))
    }

    fn sample_pin() -> PinLocation {
        PinLocation::build()
            .id("p1")
            .name("Warung Kopi")
            .category(PinCategory::Cafe)
            .pos(-6.2, 106.8)
            .status(PinStatus::Active)
            .created_at(Timestamp::from_millis(1_700_000_000_000))
            .finish()
    }

    #[test]
    fn create_pin_then_list_round_trips_all_fields() {
        let api = memory_api();
        let pin = sample_pin();
        block_on(api.create_pin(&pin)).unwrap();
        assert_eq!(vec![pin], block_on(api.list_pins()));
    }

    #[test]
    fn list_pins_is_sorted_newest_first() {
        let api = memory_api();
        for (id, millis) in [("a", 300), ("b", 100), ("c", 400), ("d", 200)] {
            let pin = PinLocation::build()
                .id(id)
                .created_at(Timestamp::from_millis(millis))
                .finish();
            block_on(api.create_pin(&pin)).unwrap();
        }
        let ids: Vec<_> = block_on(api.list_pins())
            .into_iter()
            .map(|pin| pin.id.to_string())
            .collect();
        assert_eq!(vec!["c", "a", "d", "b"], ids);
    }

    #[test]
    fn update_pin_replaces_the_matching_record() {
        let api = memory_api();
        block_on(api.create_pin(&sample_pin())).unwrap();
        let updated = PinLocation {
            phone: "021-555999".into(),
            ..sample_pin()
        };
        block_on(api.update_pin(&updated)).unwrap();
        assert_eq!(vec![updated], block_on(api.list_pins()));
    }

    #[test]
    fn delete_pin_removes_the_matching_record() {
        let api = memory_api();
        block_on(api.create_pin(&sample_pin())).unwrap();
        block_on(api.delete_pin(&"p1".into())).unwrap();
        assert!(block_on(api.list_pins()).is_empty());
    }

    #[test]
    fn import_pins_inserts_all_records_in_one_call() {
        let api = memory_api();
        let pins: Vec<_> = (0..3)
            .map(|nr| {
                PinLocation::build()
                    .id(&format!("p{nr}"))
                    .created_at(Timestamp::from_millis(nr))
                    .finish()
            })
            .collect();
        block_on(api.import_pins(&pins)).unwrap();
        assert_eq!(3, block_on(api.list_pins()).len());
    }

    #[test]
    fn report_lifecycle() {
        let api = memory_api();
        let report = LocationReport::build()
            .report_id("r1")
            .pin_id("p1")
            .pin_name("Warung Kopi")
            .changes("wrong phone number")
            .reported_at(Timestamp::from_millis(1_700_000_100_000))
            .finish();
        block_on(api.create_report(&report)).unwrap();
        assert_eq!(vec![report], block_on(api.list_reports()));

        block_on(api.delete_report(&"r1".into())).unwrap();
        assert!(block_on(api.list_reports()).is_empty());
    }

    #[test]
    fn list_reports_is_sorted_newest_first() {
        let api = memory_api();
        for (id, millis) in [("x", 100), ("y", 300), ("z", 200)] {
            let report = LocationReport::build()
                .report_id(id)
                .reported_at(Timestamp::from_millis(millis))
                .finish();
            block_on(api.create_report(&report)).unwrap();
        }
        let ids: Vec<_> = block_on(api.list_reports())
            .into_iter()
            .map(|report| report.report_id.to_string())
            .collect();
        assert_eq!(vec!["y", "z", "x"], ids);
    }

    #[test]
    fn reads_degrade_to_empty_on_backend_failure() {
        struct FailingBackend;

        #[async_trait(?Send)]
        impl Backend for FailingBackend {
            async fn select_pins(&self) -> Result<Vec<PinRecord>> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn insert_pins(&self, _records: &[PinRecord]) -> Result<()> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn update_pin(&self, _id: &str, _record: &PinRecord) -> Result<()> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn delete_pin(&self, _id: &str) -> Result<()> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn select_reports(&self) -> Result<Vec<ReportRecord>> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn insert_report(&self, _record: &ReportRecord) -> Result<()> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn delete_report(&self, _report_id: &str) -> Result<()> {
                Err(Error::Fetch("connection refused".into()))
            }
            async fn upload_object(&self, _object_path: &str, _file: &File) -> Result<String> {
                Err(Error::Fetch("connection refused".into()))
            }
        }

        let api = DataApi::new(Rc::new(FailingBackend));
        assert!(block_on(api.list_pins()).is_empty());
        assert!(block_on(api.list_reports()).is_empty());
        assert!(block_on(api.create_pin(&sample_pin())).is_err());
    }

    #[test]
    fn image_object_paths_do_not_collide() {
        let a = image_object_path("photo.jpg");
        let b = image_object_path("photo.jpg");
        assert_ne!(a, b);
        assert!(a.starts_with("public/"));
        assert!(a.ends_with(".jpg"));
    }

    #[test]
    fn image_object_path_without_extension() {
        let path = image_object_path("photo");
        assert!(path.starts_with("public/"));
        assert!(!path.contains('.'));
    }
}
