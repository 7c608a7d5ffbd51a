//! This contains the [`DummyApi`] used for testing purposes.
use std::{collections::HashMap, sync::RwLock};

use reqwest::{StatusCode, Url};

use crate::error::Result;

use super::{Api, Response};

/// A dummy API, serving local, deterministic Responses.
///
/// Unknown urls are answered with `404 Not Found`.
#[derive(Debug, Default)]
pub struct DummyApi {
    pages: RwLock<HashMap<String, (StatusCode, String)>>,
    requested: RwLock<Vec<String>>,
}

impl DummyApi {
    /// Serve `body` with status `200 OK` for `url`.
    pub fn register(&self, url: &Url, body: &str) {
        self.register_status(url, StatusCode::OK, body);
    }

    pub fn register_status(&self, url: &Url, status: StatusCode, body: &str) {
        self.pages
            .write()
            .expect("Writing dummy pages failed")
            .insert(url.as_str().to_owned(), (status, body.to_owned()));
    }

    /// All urls requested so far, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.requested
            .read()
            .expect("Reading dummy requests failed")
            .clone()
    }
}

impl Api for DummyApi {
    fn create() -> Result<Self> {
        Ok(DummyApi::default())
    }

    fn get<'url>(&self, url: &'url Url) -> Result<Response<'url>> {
        self.requested
            .write()
            .expect("Writing dummy requests failed")
            .push(url.as_str().to_owned());
        let read = self.pages.read().expect("Reading dummy pages failed");
        let (status, body) = read
            .get(url.as_str())
            .cloned()
            .unwrap_or((StatusCode::NOT_FOUND, String::new()));
        Ok(Response {
            url: url.as_str(),
            status,
            body,
        })
    }
}
