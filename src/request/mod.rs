use ::reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{Error, Result};

mod reqwest;
pub use self::reqwest::ReqwestApi as DefaultApi;

#[cfg(test)]
pub mod dummy;

/// A subset of a Response, derived from [`reqwest::blocking::Response`].
#[derive(Debug)]
pub struct Response<'url> {
    pub url: &'url str,
    pub status: StatusCode,
    pub body: String,
}

/// Generalized API endpoint.
///
/// This abstracts away from the real thing to allow for deterministic local
/// tests with a DummyApi.
pub trait Api
where
    Self: Sized,
{
    /// Create the Api.
    fn create() -> Result<Self>;

    /// Send a get request.
    fn get<'url>(&self, url: &'url Url) -> Result<Response<'url>>;
}

/// Send a get request and decode the json body.
///
/// Any status outside of `2xx` is treated as a failed request.
pub fn fetch_json<A, T>(api: &A, url: &Url) -> Result<T>
where
    A: Api,
    T: DeserializeOwned,
{
    info!("Fetching {:?}", url.as_str());
    let resp = api.get(url)?;
    info!("Request to {:?} returned {}", resp.url, resp.status);
    if !resp.status.is_success() {
        return Err(Error::NonSuccessStatusCode(resp.url.to_owned(), resp.status));
    }
    serde_json::from_str(&resp.body).map_err(|why| Error::Deserializing(why, "decoding response"))
}

/// Join `path` onto the api base and attach the query parameters.
pub fn endpoint(base: &str, path: &str, params: &[(&str, &str)]) -> Result<Url> {
    let raw = format!("{}/{}", base.trim_end_matches('/'), path);
    Url::parse_with_params(&raw, params).map_err(|why| Error::MalformedUrl(raw, why.to_string()))
}
