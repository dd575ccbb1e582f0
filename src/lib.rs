//! Revere
//!
//! A client for the Revere messaging platform REST API: subscriber lists on
//! the mobile API, people on the sync API, and the sync bearer-token
//! exchange that ties them together.
//!
//! ## Usage
//! ```no_run
//! # fn main() -> Result<(), revere::Error> {
//! let cfg = revere::Config::with_api_key("secret_api_key");
//! let client = revere::Client::new(cfg)?;
//! let lists = client.get_list(None)?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoint;
mod error;
pub(crate) mod util;

pub use client::Client;
pub use config::Config;
pub use endpoint::{List, Person};
pub use error::{Error, ErrorKind};
