use reqwest::{blocking::Client, Url};

use crate::{
    config::CONF,
    error::{Error, Result},
};

use super::{Api, Response};

/// Real api accessing the inter-webs.
#[derive(Debug)]
pub struct ReqwestApi {
    client: Client,
}

impl Api for ReqwestApi {
    fn create() -> Result<Self> {
        let client = Client::builder()
            .timeout(CONF.request_timeout())
            .build()
            .map_err(Error::Reqwest)?;
        Ok(ReqwestApi { client })
    }

    fn get<'url>(&self, url: &'url Url) -> Result<Response<'url>> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(Error::Reqwest)?;
        Ok(Response {
            url: url.as_str(),
            status: resp.status(),
            body: resp.text().map_err(Error::Reqwest)?,
        })
    }
}
