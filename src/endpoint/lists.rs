use serde::Deserialize;
use serde_json::Value;

use crate::client::Client;
use crate::error::{Error, ErrorKind};
use crate::util::request;

/// A subscriber list as returned by the mobile API.
///
/// Every field is optional; keys missing from the response stay `None` and
/// unrecognized keys are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub account: Option<u64>,
    pub created_by: Option<String>,
    pub group: Option<u64>,
    pub id: Option<u64>,
    pub name: Option<String>,
    pub no_of_subscribers: Option<u64>,
    pub short_code: Option<String>,
    pub status: Option<String>,
    #[serde(skip)]
    json: Value,
}

impl List {
    /// Builds a record from a decoded JSON object, keeping the source
    /// object alongside the typed fields.
    pub fn from_json(content: &Value) -> Result<Self, Error> {
        let mut list: List = serde_json::from_value(content.clone())?;
        list.json = content.clone();
        Ok(list)
    }

    /// The JSON object this record was built from.
    pub fn source(&self) -> &Value {
        &self.json
    }
}

impl Client {
    /// Returns all lists available to the group when no id is given, or the
    /// single list matching `list_id`, in the order the server returned
    /// them.
    pub fn get_list(&self, list_id: Option<u64>) -> Result<Vec<List>, Error> {
        let base = format!(
            "{}/api/{}/list",
            self.config.mobile_url, self.config.api_version
        );
        let id = list_id.map(|id| id.to_string());
        let url = request::build_url(&base, id.as_deref());

        let content = request::get(&url, self.api_key())?;
        match content.as_array() {
            Some(items) => items.iter().map(List::from_json).collect(),
            None => Err(ErrorKind::Serde("expected a JSON array of lists".to_string()).into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Config;
    use serde_json::json;

    #[test]
    fn test_from_json_populates_recognized_fields() {
        let content = json!({
            "id": 42,
            "name": "volunteers",
            "createdBy": "organizer@example.org",
            "noOfSubscribers": 1200,
            "shortCode": "46262",
            "status": "ACTIVE",
            "somethingTheApiAddedLater": "ignored"
        });

        let list = List::from_json(&content).unwrap();
        assert_eq!(list.id, Some(42));
        assert_eq!(list.name.as_deref(), Some("volunteers"));
        assert_eq!(list.created_by.as_deref(), Some("organizer@example.org"));
        assert_eq!(list.no_of_subscribers, Some(1200));
        assert_eq!(list.short_code.as_deref(), Some("46262"));
        assert_eq!(list.status.as_deref(), Some("ACTIVE"));
        // Missing keys default to absent.
        assert!(list.account.is_none());
        assert!(list.group.is_none());
    }

    #[test]
    fn test_from_json_retains_the_source_object() {
        let content = json!({"id": 7, "unknownKey": true});
        let list = List::from_json(&content).unwrap();
        assert_eq!(list.source(), &content);
    }

    fn client_against(server: &mockito::ServerGuard) -> Client {
        Client::new(Config {
            mobile_url: server.url(),
            ..Config::with_api_key("mobile-key")
        })
        .unwrap()
    }

    #[test]
    fn test_get_list_returns_one_record_per_element() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/api/v1/list")
            .match_header("Authorization", "mobile-key")
            .with_body(r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#)
            .create();

        let lists = client_against(&server).get_list(None).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].id, Some(1));
        assert_eq!(lists[0].name.as_deref(), Some("a"));
        assert_eq!(lists[1].id, Some(2));
        m.assert();
    }

    #[test]
    fn test_get_list_scopes_to_a_single_id() {
        let mut server = mockito::Server::new();
        let m = server
            .mock("GET", "/api/v1/list/7/")
            .with_body(r#"[{"id": 7}]"#)
            .create();

        let lists = client_against(&server).get_list(Some(7)).unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].id, Some(7));
        m.assert();
    }

    #[test]
    fn test_get_list_surfaces_server_errors() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/api/v1/list")
            .with_body(r#"{"error": "X"}"#)
            .create();

        let err = client_against(&server).get_list(None).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::Api("X".to_string()));
    }
}
