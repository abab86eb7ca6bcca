use std::fmt::Display;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::fetch::error::FetchError;
use crate::fetch::error::Result;

const SESSION_QUERY_PARAM: &str = "context_session_id";

/// A blocking client of the analytics backend.
pub(crate) struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|error| FetchError::InvalidBaseUrl(format!("`{base_url}`: {error}")))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(format!(
                "`{base_url}` is not an HTTP URL"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn list_contexts(&self) -> Result<Vec<Context>> {
        let url = self.endpoint(&["contexts"])?;
        debug!(%url, "listing contexts");

        let response = self.client.get(url).send()?;
        read_json(response)
    }

    pub fn open_session(&self, context_id: &str) -> Result<Session> {
        let url = self.endpoint(&["context-sessions", context_id, "open"])?;
        debug!(%url, "opening a context session");

        let response = self.client.post(url).send()?;
        read_json(response)
    }

    /// Fetches the dashboard of a session as the JSON text the backend sent.
    pub fn dashboard_json(&self, session_id: &str) -> Result<String> {
        let mut url = self.endpoint(&["dashboard"])?;
        url.query_pairs_mut()
            .append_pair(SESSION_QUERY_PARAM, session_id);
        debug!(%url, "fetching the dashboard");

        let response = self.client.get(url).send()?;
        read_text(response)
    }

    pub fn chat(&self, session_id: &str, message: &str) -> Result<Value> {
        let mut url = self.endpoint(&["chat"])?;
        url.query_pairs_mut()
            .append_pair(SESSION_QUERY_PARAM, session_id);
        debug!(%url, "sending a chat message");

        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()?;
        read_json(response)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }
}

fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = read_text(response)?;
    let value = serde_json::from_str(&body)?;
    Ok(value)
}

fn read_text(response: Response) -> Result<String> {
    match response.status() {
        status_code if status_code.is_success() => {
            let body = response.text()?;
            Ok(body)
        }
        status_code => {
            let message = response.text()?;
            let error = FetchError::Response {
                status_code,
                message,
            };
            Err(error)
        }
    }
}

/// A workspace of the analytics backend.
#[derive(Debug, Deserialize)]
pub(crate) struct Context {
    pub id: Identifier,
    #[serde(default)]
    pub name: String,
}

/// An open session on a workspace.
#[derive(Debug, Deserialize)]
pub(crate) struct Session {
    pub session_id: Identifier,
}

/// An id the backend sends either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(id) => Ok(Identifier(id)),
            Value::Number(id) => Ok(Identifier(id.to_string())),
            other => Err(serde::de::Error::custom(format!(
                "expected a string or a number as id, found `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_extend_the_base_path() -> Result<()> {
        let client = ApiClient::new("http://localhost:8000/api/", 5)?;

        assert_eq!(
            client.endpoint(&["contexts"])?.as_str(),
            "http://localhost:8000/api/contexts"
        );
        assert_eq!(
            client.endpoint(&["context-sessions", "plant 1/a", "open"])?.as_str(),
            "http://localhost:8000/api/context-sessions/plant%201%2Fa/open"
        );

        let client = ApiClient::new("https://ops.example.com", 5)?;
        assert_eq!(
            client.endpoint(&["dashboard"])?.as_str(),
            "https://ops.example.com/dashboard"
        );

        Ok(())
    }

    #[test]
    fn base_url_must_be_http() {
        for base_url in ["localhost:8000", "ftp://ops.example.com", "not a url"] {
            assert!(
                matches!(
                    ApiClient::new(base_url, 5),
                    Err(FetchError::InvalidBaseUrl(_))
                ),
                "{base_url} should be rejected"
            );
        }
    }

    #[test]
    fn deserialize_contexts() -> std::result::Result<(), serde_json::Error> {
        let contexts: Vec<Context> =
            serde_json::from_str(r#"[{ "id": 7, "name": "Plant 1" }, { "id": "ctx-2" }]"#)?;

        assert_eq!(contexts[0].id.as_str(), "7");
        assert_eq!(contexts[0].name, "Plant 1");
        assert_eq!(contexts[1].id.to_string(), "ctx-2");
        assert_eq!(contexts[1].name, "");

        let session: Session = serde_json::from_str(r#"{ "session_id": "s-42" }"#)?;
        assert_eq!(session.session_id.as_str(), "s-42");

        assert!(serde_json::from_str::<Session>(r#"{ "session_id": null }"#).is_err());

        Ok(())
    }

    #[test]
    fn serialize_chat_request() -> std::result::Result<(), serde_json::Error> {
        let body = serde_json::to_string(&ChatRequest { message: "hi" })?;

        assert_eq!(body, r#"{"message":"hi"}"#);

        Ok(())
    }
}
