use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::Result;

const RANDOM_URL: &str = "http://api.urbandictionary.com/v0/random";
const DEFINE_URL: &str = "http://api.urbandictionary.com/v0/define";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Entry {
    pub author: String,
    pub current_vote: String,
    #[serde(rename = "defid")]
    pub definition_id: i64,
    #[serde(rename = "definition")]
    pub definition_text: String,
    pub example: String,
    pub permalink: String,
    pub thumbs_up: u64,
    pub thumbs_down: u64,
    pub word: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryList {
    #[serde(default)]
    pub list: Vec<Entry>,
}

impl EntryList {
    pub fn from_json(body: &str) -> Result<EntryList> {
        Ok(serde_json::from_str(body)?)
    }
}

// fetches a url and hands back the whole response body
pub trait Transport {
    fn get(&self, url: &Url) -> Result<String>;
}

pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("urbano/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<String> {
        let resp = self.client.get(url.clone()).send()?;
        debug!(status = %resp.status(), %url, "urban dictionary responded");
        // `text` consumes the response, so the connection goes back to the pool here
        Ok(resp.text()?)
    }
}

pub fn random_url() -> Result<Url> {
    Ok(Url::parse(RANDOM_URL)?)
}

// build the lookup url
pub fn define_url(term: &str) -> Result<Url> {
    let mut parsed = Url::parse(DEFINE_URL)?;
    parsed
        .query_pairs_mut()
        .append_pair("term", &normalize_term(term));
    Ok(parsed)
}

/// Drops every whitespace character, so `hot dog` is looked up as `hotdog`.
pub fn normalize_term(term: &str) -> String {
    term.split_whitespace().collect()
}

pub fn fetch_random(transport: &dyn Transport) -> Result<EntryList> {
    fetch(transport, &random_url()?)
}

pub fn fetch_by_term(transport: &dyn Transport, term: &str) -> Result<EntryList> {
    fetch(transport, &define_url(term)?)
}

fn fetch(transport: &dyn Transport, url: &Url) -> Result<EntryList> {
    debug!(%url, "fetching");
    let body = transport.get(url)?;
    EntryList::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::RefCell;

    struct Recording {
        body: String,
        seen: RefCell<Vec<String>>,
    }

    impl Transport for Recording {
        fn get(&self, url: &Url) -> Result<String> {
            self.seen.borrow_mut().push(url.to_string());
            Ok(self.body.clone())
        }
    }

    #[test]
    fn define_url_strips_interior_whitespace() {
        let url = define_url("hot dog").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.urbandictionary.com/v0/define?term=hotdog"
        );
        assert_eq!(normalize_term(" a\tb \n c "), "abc");
    }

    #[test]
    fn define_url_escapes_the_term() {
        let url = define_url("r&b").unwrap();
        assert_eq!(url.query(), Some("term=r%26b"));
    }

    #[test]
    fn decodes_wire_field_names() {
        let body = r#"{"list":[{"author":"someone","current_vote":"","defid":42,
            "definition":"a thing","example":"use it","permalink":"http://x/42",
            "thumbs_up":7,"thumbs_down":2,"word":"thing","written_on":"2020-01-01"}]}"#;
        let entries = EntryList::from_json(body).unwrap();
        assert_eq!(
            entries.list,
            vec![Entry {
                author: "someone".into(),
                current_vote: "".into(),
                definition_id: 42,
                definition_text: "a thing".into(),
                example: "use it".into(),
                permalink: "http://x/42".into(),
                thumbs_up: 7,
                thumbs_down: 2,
                word: "thing".into(),
            }]
        );
    }

    #[test]
    fn missing_list_is_empty() {
        assert!(EntryList::from_json("{}").unwrap().list.is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = EntryList::from_json("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        let err = EntryList::from_json(r#"{"list":{"word":"x"}}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn unreachable_host_is_a_network_error() {
        let transport = HttpTransport::new().unwrap();
        let err = transport
            .get(&Url::parse("http://127.0.0.1:1/v0/random").unwrap())
            .unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[test]
    fn fetch_by_term_hits_define_endpoint() {
        let transport = Recording {
            body: r#"{"list":[]}"#.into(),
            seen: RefCell::new(vec![]),
        };
        let entries = fetch_by_term(&transport, "hot dog").unwrap();
        assert!(entries.list.is_empty());
        fetch_random(&transport).unwrap();
        assert_eq!(
            *transport.seen.borrow(),
            vec![
                "http://api.urbandictionary.com/v0/define?term=hotdog".to_string(),
                "http://api.urbandictionary.com/v0/random".to_string(),
            ]
        );
    }
}
