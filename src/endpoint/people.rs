use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::util::request;

// The people endpoints live on a fixed sync host; `Config::sync_url` is not
// consulted here.
const PEOPLE_URL: &str = "https://sync.revmsg.net/v2/api/people";
const PEOPLE_POST_URL: &str = "https://sync.revmsg.net/v2/api/people/post";

/// An OSDI person record from the sync API.
///
/// Nested OSDI structures (addresses, profiles, triggers) are kept as raw
/// JSON values. Keys missing from the response stay `None` and unrecognized
/// keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Person {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub identifiers: Option<Vec<String>>,
    pub party_identification: Option<Value>,
    pub custom_fields: Option<Value>,
    pub birthdate: Option<String>,
    pub email_addresses: Option<Value>,
    pub phone_numbers: Option<Value>,
    pub postal_addresses: Option<Value>,
    pub profiles: Option<Value>,
    pub triggers: Option<Value>,
    #[serde(skip)]
    json: Value,
}

impl Person {
    /// Builds a record from a decoded JSON object, keeping the source
    /// object alongside the typed fields.
    pub fn from_json(content: &Value) -> Result<Self, Error> {
        let mut person: Person = serde_json::from_value(content.clone())?;
        person.json = content.clone();
        Ok(person)
    }

    /// The JSON object this record was built from.
    pub fn source(&self) -> &Value {
        &self.json
    }
}

impl Client {
    /// Returns a page of people from the sync API.
    ///
    /// Surfaces the raw decoded JSON rather than [`Person`] records; use
    /// [`Person::from_json`] on the payload's entries when typed access is
    /// needed.
    pub fn list_people(&self, page_num: Option<u64>) -> Result<Value, Error> {
        let page = page_num.map(|p| p.to_string());
        let url = request::build_url(PEOPLE_URL, page.as_deref());

        let content = request::get(&url, self.bearer_token())?;
        debug!("people payload: {}", content);
        Ok(content)
    }

    /// Looks up a single person by their Revere id.
    pub fn get_person(&self, revere_id: u64) -> Result<Value, Error> {
        let id = revere_id.to_string();
        let url = request::build_url(PEOPLE_URL, Some(&id));

        let content = request::get(&url, self.bearer_token())?;
        debug!("person payload: {}", content);
        Ok(content)
    }

    /// Creates a person from the supplied OSDI fields and reports the
    /// decoded response back unmodified. List-valued fields travel as
    /// repeated payload keys.
    pub fn create_person(
        &self,
        given_name: &str,
        family_name: &str,
        email_addresses: &[String],
        phone_numbers: &[String],
        postal_addresses: &[String],
    ) -> Result<Value, Error> {
        let mut payload: Vec<(&str, String)> = vec![
            ("given_name", given_name.to_string()),
            ("family_name", family_name.to_string()),
        ];
        for address in email_addresses {
            payload.push(("email_addresses", address.clone()));
        }
        for number in phone_numbers {
            payload.push(("phone_numbers", number.clone()));
        }
        for address in postal_addresses {
            payload.push(("postal_addresses", address.clone()));
        }

        let content = request::post(PEOPLE_POST_URL, self.bearer_token(), &payload)?;
        debug!("create person response: {}", content);
        Ok(content)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_populates_recognized_fields() {
        let content = json!({
            "given_name": "Ada",
            "family_name": "Lovelace",
            "identifiers": ["revere:12345"],
            "email_addresses": [{"address": "ada@example.org", "primary": true}],
            "custom_fields": {"precinct": "12-B"},
            "not_an_osdi_field": "ignored"
        });

        let person = Person::from_json(&content).unwrap();
        assert_eq!(person.given_name.as_deref(), Some("Ada"));
        assert_eq!(person.family_name.as_deref(), Some("Lovelace"));
        assert_eq!(
            person.identifiers,
            Some(vec!["revere:12345".to_string()])
        );
        assert_eq!(
            person.email_addresses,
            Some(json!([{"address": "ada@example.org", "primary": true}]))
        );
        // Missing keys default to absent.
        assert!(person.birthdate.is_none());
        assert!(person.profiles.is_none());
        assert!(person.triggers.is_none());
    }

    #[test]
    fn test_from_json_retains_the_source_object() {
        let content = json!({"given_name": "Ada", "unknown_key": 3});
        let person = Person::from_json(&content).unwrap();
        assert_eq!(person.source(), &content);
    }
}
