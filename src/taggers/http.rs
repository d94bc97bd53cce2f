/*! Morphology analysis service client

Queries a morphological analyzer exposed over HTTP:
`GET {endpoint}?word={token}` answers with a JSON array of `{"tag": .., "score": ..}`.
!*/
use std::str::FromStr;

use log::debug;
use reqwest::blocking::Client;
use url::Url;

use super::{MorphParse, MorphTagger};
use crate::error::Error;

pub struct HttpMorphology {
    client: Client,
    endpoint: Url,
}

impl HttpMorphology {
    pub fn new(endpoint: &str) -> Result<Self, Error> {
        let endpoint = Url::from_str(endpoint)?;
        match endpoint.scheme() {
            "http" | "https" => Ok(Self {
                client: Client::new(),
                endpoint,
            }),
            scheme => Err(Error::Custom(format!(
                "unsupported scheme for morphology service: {}",
                scheme
            ))),
        }
    }

    /// Get a reference to the service endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl MorphTagger for HttpMorphology {
    fn parse(&self, token: &str) -> Result<Vec<MorphParse>, Error> {
        debug!("querying {} for {:?}", self.endpoint, token);
        let parses = self
            .client
            .get(self.endpoint.clone())
            .query(&[("word", token)])
            .send()?
            .error_for_status()?
            .json::<Vec<MorphParse>>()?;
        Ok(parses)
    }
}
