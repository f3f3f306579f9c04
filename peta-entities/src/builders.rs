pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{pin_builder::*, report_builder::*};

pub mod pin_builder {

    use super::*;
    use crate::{category::*, id::*, pin::*, time::*};

    #[derive(Debug)]
    pub struct PinBuild {
        pin: PinLocation,
    }

    impl PinBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.pin.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.pin.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.pin.description = desc.into();
            self
        }
        pub fn category(mut self, category: PinCategory) -> Self {
            self.pin.category = category;
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.pin.lat = lat;
            self.pin.lng = lng;
            self
        }
        pub fn image_url(mut self, image_url: Option<&str>) -> Self {
            self.pin.image_url = image_url.map(Into::into);
            self
        }
        pub fn status(mut self, status: PinStatus) -> Self {
            self.pin.status = status;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.pin.created_at = created_at;
            self
        }
        pub fn finish(self) -> PinLocation {
            self.pin
        }
    }

    impl Builder for PinLocation {
        type Build = PinBuild;
        fn build() -> Self::Build {
            PinBuild {
                pin: PinLocation {
                    id: Id::new(),
                    name: String::new(),
                    description: String::new(),
                    category: PinCategory::Other(String::new()),
                    lat: 0.0,
                    lng: 0.0,
                    image_url: None,
                    address: String::new(),
                    phone: String::new(),
                    owner_name: String::new(),
                    email: String::new(),
                    whatsapp: String::new(),
                    operating_hours: String::new(),
                    status: PinStatus::default(),
                    created_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}

pub mod report_builder {

    use super::*;
    use crate::{id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: LocationReport,
    }

    impl ReportBuild {
        pub fn report_id(mut self, id: &str) -> Self {
            self.report.report_id = id.into();
            self
        }
        pub fn pin_id(mut self, id: &str) -> Self {
            self.report.pin_id = id.into();
            self
        }
        pub fn pin_name(mut self, name: &str) -> Self {
            self.report.pin_name = name.into();
            self
        }
        pub fn changes(mut self, changes: &str) -> Self {
            self.report.changes = changes.into();
            self
        }
        pub fn reported_at(mut self, reported_at: Timestamp) -> Self {
            self.report.reported_at = reported_at;
            self
        }
        pub fn finish(self) -> LocationReport {
            self.report
        }
    }

    impl Builder for LocationReport {
        type Build = ReportBuild;
        fn build() -> Self::Build {
            ReportBuild {
                report: LocationReport {
                    report_id: Id::new(),
                    pin_id: Id::new(),
                    pin_name: String::new(),
                    changes: String::new(),
                    reported_at: Timestamp::from_millis(0),
                },
            }
        }
    }
}
