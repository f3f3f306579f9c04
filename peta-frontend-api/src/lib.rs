//! HTTP façade between the PetaPintar views and the hosted backend.
//!
//! One network round trip per operation, a uniform error contract for all
//! mutating calls, and an inert stand-in backend when the application is
//! started without a usable configuration.

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod auth;
mod backend;
mod config;
mod data;
mod session;

pub use self::{auth::*, backend::*, config::*, data::*, session::*};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] peta_boundary::Error),

    #[error("{0}")]
    Convert(#[from] peta_boundary::ConversionError),

    #[error("the backend is not configured")]
    NotConfigured,
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(error_from_response(response).await)
    }
}

/// Discards the body of a 2xx response; mutating calls to the table service
/// are issued with `Prefer: return=minimal` and answer with an empty body.
pub async fn into_unit(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> Error {
    match response.json::<peta_boundary::Error>().await {
        Ok(err) => err.into(),
        Err(_) => Error::Fetch(format!(
            "HTTP {} {}",
            response.status(),
            response.status_text()
        )),
    }
}
