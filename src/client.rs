use log::info;

use crate::config::Config;
use crate::error::{Error, ErrorKind};
use crate::util::request;

/// A handle on the Revere API.
///
/// Construction validates credentials and, when a sync key is present,
/// performs the one-time bearer-token exchange. The token is kept for the
/// lifetime of the client; there is no refresh.
#[derive(Debug)]
pub struct Client {
    pub(crate) config: Config,
    bearer_token: Option<String>,
}

impl Client {
    /// Builds a client from the given configuration.
    ///
    /// Fails with [`ErrorKind::Configuration`] when neither an API key nor
    /// a sync key is supplied. A sync key triggers exactly one
    /// authentication POST against `{sync_url}/api/authenticate` before the
    /// client is returned.
    pub fn new(config: Config) -> Result<Self, Error> {
        if config.api_key.is_none() && config.sync_key.is_none() {
            return Err(ErrorKind::Configuration(
                "no API key or sync key supplied; one is required to call the Revere API"
                    .to_string(),
            )
            .into());
        }

        let mut bearer_token = config.bearer_token.clone();
        if let Some(sync_key) = &config.sync_key {
            bearer_token = Some(request::authenticate(&config.sync_url, sync_key)?);
            info!("sync authentication succeeded");
        }

        Ok(Client {
            config,
            bearer_token,
        })
    }

    /// The bearer token held by this client, when one exists.
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    pub(crate) fn api_key(&self) -> Option<&str> {
        self.config.api_key.as_deref()
    }
}
