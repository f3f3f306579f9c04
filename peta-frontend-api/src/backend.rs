use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use url::Url;
use web_sys::File;

use peta_boundary::{PinRecord, ReportRecord};

use crate::{into_json, into_unit, Error, Result};

pub const LOCATIONS_TABLE: &str = "locations";
pub const REPORTS_TABLE: &str = "reports";
pub const IMAGES_BUCKET: &str = "location-images";

/// Storage backend of the dashboard.
///
/// Selected once at startup: either the live hosted service or an inert
/// stand-in when the startup configuration is unusable (see
/// [`connect`](crate::connect)).
#[async_trait(?Send)]
pub trait Backend {
    async fn select_pins(&self) -> Result<Vec<PinRecord>>;
    async fn insert_pins(&self, records: &[PinRecord]) -> Result<()>;
    async fn update_pin(&self, id: &str, record: &PinRecord) -> Result<()>;
    async fn delete_pin(&self, id: &str) -> Result<()>;
    async fn select_reports(&self) -> Result<Vec<ReportRecord>>;
    async fn insert_report(&self, record: &ReportRecord) -> Result<()>;
    async fn delete_report(&self, report_id: &str) -> Result<()>;
    /// Uploads a binary object and returns its public URL.
    async fn upload_object(&self, object_path: &str, file: &File) -> Result<String>;
}

/// Client for the hosted table and object-storage services.
#[derive(Debug, Clone)]
pub struct LiveBackend {
    url: String,
    anon_key: String,
}

impl LiveBackend {
    pub(crate) fn new(url: &Url, anon_key: String) -> Self {
        Self {
            url: url.as_str().trim_end_matches('/').to_owned(),
            anon_key,
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.url)
    }

    fn row_url(&self, table: &str, column: &str, value: &str) -> String {
        let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC);
        format!("{}?{column}=eq.{encoded}", self.table_url(table))
    }

    fn object_url(&self, object_path: &str) -> String {
        format!("{}/storage/v1/object/{IMAGES_BUCKET}/{object_path}", self.url)
    }

    fn public_object_url(&self, object_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{IMAGES_BUCKET}/{object_path}",
            self.url
        )
    }

    fn auth_headers(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
    }
}

#[async_trait(?Send)]
impl Backend for LiveBackend {
    async fn select_pins(&self) -> Result<Vec<PinRecord>> {
        let url = format!("{}?select=*", self.table_url(LOCATIONS_TABLE));
        let response = self.auth_headers(Request::get(&url)).send().await?;
        into_json(response).await
    }

    async fn insert_pins(&self, records: &[PinRecord]) -> Result<()> {
        let url = self.table_url(LOCATIONS_TABLE);
        let response = self
            .auth_headers(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(&records)?
            .send()
            .await?;
        into_unit(response).await
    }

    async fn update_pin(&self, id: &str, record: &PinRecord) -> Result<()> {
        let url = self.row_url(LOCATIONS_TABLE, "id", id);
        let response = self
            .auth_headers(Request::patch(&url))
            .header("Prefer", "return=minimal")
            .json(record)?
            .send()
            .await?;
        into_unit(response).await
    }

    async fn delete_pin(&self, id: &str) -> Result<()> {
        let url = self.row_url(LOCATIONS_TABLE, "id", id);
        let response = self.auth_headers(Request::delete(&url)).send().await?;
        into_unit(response).await
    }

    async fn select_reports(&self) -> Result<Vec<ReportRecord>> {
        let url = format!("{}?select=*", self.table_url(REPORTS_TABLE));
        let response = self.auth_headers(Request::get(&url)).send().await?;
        into_json(response).await
    }

    async fn insert_report(&self, record: &ReportRecord) -> Result<()> {
        let url = self.table_url(REPORTS_TABLE);
        let response = self
            .auth_headers(Request::post(&url))
            .header("Prefer", "return=minimal")
            .json(&[record])?
            .send()
            .await?;
        into_unit(response).await
    }

    async fn delete_report(&self, report_id: &str) -> Result<()> {
        let url = self.row_url(REPORTS_TABLE, "report_id", report_id);
        let response = self.auth_headers(Request::delete(&url)).send().await?;
        into_unit(response).await
    }

    async fn upload_object(&self, object_path: &str, file: &File) -> Result<String> {
        let url = self.object_url(object_path);
        let response = self
            .auth_headers(Request::post(&url))
            .header("Cache-Control", "max-age=3600")
            .body(file.clone())?
            .send()
            .await?;
        into_unit(response).await?;
        Ok(self.public_object_url(object_path))
    }
}

/// Stand-in backend used when the application is not configured.
///
/// Reads yield empty collections, every mutation fails with the fixed
/// [`Error::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct InertBackend;

#[async_trait(?Send)]
impl Backend for InertBackend {
    async fn select_pins(&self) -> Result<Vec<PinRecord>> {
        Ok(Vec::new())
    }

    async fn insert_pins(&self, _records: &[PinRecord]) -> Result<()> {
        Err(Error::NotConfigured)
    }

    async fn update_pin(&self, _id: &str, _record: &PinRecord) -> Result<()> {
        Err(Error::NotConfigured)
    }

    async fn delete_pin(&self, _id: &str) -> Result<()> {
        Err(Error::NotConfigured)
    }

    async fn select_reports(&self) -> Result<Vec<ReportRecord>> {
        Ok(Vec::new())
    }

    async fn insert_report(&self, _record: &ReportRecord) -> Result<()> {
        Err(Error::NotConfigured)
    }

    async fn delete_report(&self, _report_id: &str) -> Result<()> {
        Err(Error::NotConfigured)
    }

    async fn upload_object(&self, _object_path: &str, _file: &File) -> Result<String> {
        Err(Error::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn inert_backend_reads_are_empty() {
        let backend = InertBackend;
        assert_eq!(Ok(Vec::new()), block_on(backend.select_pins()));
        assert_eq!(Ok(Vec::new()), block_on(backend.select_reports()));
    }

    #[test]
    fn inert_backend_mutations_fail_with_not_configured() {
        let backend = InertBackend;
        assert_eq!(Err(Error::NotConfigured), block_on(backend.insert_pins(&[])));
        assert_eq!(Err(Error::NotConfigured), block_on(backend.delete_pin("p1")));
        assert_eq!(
            Err(Error::NotConfigured),
            block_on(backend.delete_report("r1"))
        );
    }

    #[test]
    fn live_backend_builds_filtered_row_urls() {
        let url = Url::parse("https://db.example.com").unwrap();
        let backend = LiveBackend::new(&url, "anon".into());
        assert_eq!(
            "https://db.example.com/rest/v1/locations?id=eq.p1",
            backend.row_url(LOCATIONS_TABLE, "id", "p1")
        );
        assert_eq!(
            "https://db.example.com/rest/v1/reports?report_id=eq.r%201",
            backend.row_url(REPORTS_TABLE, "report_id", "r 1")
        );
    }

    #[test]
    fn live_backend_public_object_urls() {
        let url = Url::parse("https://db.example.com/").unwrap();
        let backend = LiveBackend::new(&url, "anon".into());
        assert_eq!(
            "https://db.example.com/storage/v1/object/public/location-images/public/abc.jpg",
            backend.public_object_url("public/abc.jpg")
        );
    }
}
