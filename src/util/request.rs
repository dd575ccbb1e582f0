use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::error::{Error, ErrorKind};

/// Response keys the platform uses to report failures inside a 200 body.
const ERROR_KEYS: [&str; 2] = ["errorMsg", "error"];

/// Returns a blocking HTTP client. The configured timeout is not applied
/// here; requests run with reqwest's defaults.
pub fn get_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Appends a single scalar parameter as a path segment. Most endpoints
/// return every record without a parameter and a single record with one.
pub fn build_url(base: &str, param: Option<&str>) -> String {
    match param {
        Some(p) => format!("{}/{}/", base, p),
        None => base.to_string(),
    }
}

/// Performs a GET with the platform's JSON headers. `auth` is placed in
/// `Authorization` as-is (no `Bearer ` prefix); when absent the header is
/// omitted entirely.
pub fn get(url: &str, auth: Option<&str>) -> Result<Value, Error> {
    debug!("GET {}", url);

    let client = get_client()?;
    let mut builder = client
        .get(url)
        .header("Accept", "application/json")
        .header("Content-Type", "application/json");
    if let Some(token) = auth {
        builder = builder.header("Authorization", token);
    }

    let body = builder.send()?.text()?;
    parse(&body)
}

/// Performs a POST against the sync API family. The payload travels as
/// request query parameters; repeated keys carry list-valued fields.
pub fn post(url: &str, auth: Option<&str>, params: &[(&str, String)]) -> Result<Value, Error> {
    debug!("POST {}", url);

    let client = get_client()?;
    let mut builder = client
        .post(url)
        .header("Accept", "application/vnd.sync.v2+hal+json")
        .header("Content-Type", "application/json")
        .query(params);
    if let Some(token) = auth {
        builder = builder.header("Authorization", token);
    }

    let body = builder.send()?.text()?;
    parse(&body)
}

/// Exchanges a long-lived sync key for a short-lived bearer token.
///
/// The sync API authenticates differently from the rest of the platform:
/// POSTing the key in an `osdi-api-token` header yields a bearer token that
/// is valid for 24 hours. Expiry is not tracked here; callers reconstruct
/// the client to refresh.
pub fn authenticate(sync_url: &str, sync_key: &str) -> Result<String, Error> {
    let url = format!("{}/api/authenticate", sync_url);
    debug!("POST {}", url);

    let client = get_client()?;
    let body = client
        .post(&url)
        .header("osdi-api-token", sync_key)
        .header("cache-control", "no-cache")
        .header("accept", "application/vnd.sync.v2+json")
        .send()?
        .text()?;

    let content = parse(&body)?;
    match content.get("token").and_then(Value::as_str) {
        Some(token) => Ok(token.to_string()),
        None => Err(ErrorKind::Api(
            "authenticate response did not contain a token".to_string(),
        )
        .into()),
    }
}

/// Decodes a response body, checking for the platform's error convention
/// before handing the parsed JSON back.
pub fn parse(body: &str) -> Result<Value, Error> {
    error_check(body)?;
    let content = serde_json::from_str(body)?;
    Ok(content)
}

/// The platform reports failures as a 200 response whose top-level object
/// carries an `errorMsg` or `error` string. The body text is scanned for
/// the indicator before the full JSON parse is attempted.
fn error_check(body: &str) -> Result<(), Error> {
    for key in &ERROR_KEYS {
        if !body.contains(key) {
            continue;
        }
        if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
            if let Some(Value::String(message)) = map.get(*key) {
                return Err(ErrorKind::Api(message.clone()).into());
            }
        }
    }

    Ok(())
}
