//! Joke and insult service
//!
//! Maps each route onto one upstream, fetches it and decodes the payload

use crate::config::UrlsConfig;
use crate::models::upstream::{BadJoke, ChuckNorrisJoke, EvilInsult};
use crate::services::fetcher::Fetch;
use crate::utils::error::{helpers, GatewayError, GatewayResult};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Insult languages the upstream supports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    Ru,
    #[default]
    En,
}

impl Language {
    pub const SUPPORTED: [Language; 2] = [Language::Ru, Language::En];

    /// Parse a caller-supplied language, case-insensitively
    pub fn parse(raw: &str) -> GatewayResult<Self> {
        let lang = raw.to_lowercase();
        Self::SUPPORTED
            .into_iter()
            .find(|l| l.as_str() == lang)
            .ok_or_else(|| {
                let supported: Vec<&str> = Self::SUPPORTED.iter().map(|l| l.as_str()).collect();
                helpers::validation_error(format!(
                    "'{}' language is not supported. Use [{}]",
                    lang,
                    supported.join(", ")
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream selected by route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeSource {
    BadJoke,
    ChuckNorris,
    EvilInsult(Language),
}

impl JokeSource {
    pub fn name(&self) -> &'static str {
        match self {
            JokeSource::BadJoke => "bad_joke",
            JokeSource::ChuckNorris => "chuck_norris",
            JokeSource::EvilInsult(_) => "evil_insult",
        }
    }

    /// Full URL for this upstream, query parameters included
    pub fn request_url(&self, urls: &UrlsConfig) -> String {
        match self {
            JokeSource::BadJoke => urls.bad_joke.clone(),
            JokeSource::ChuckNorris => urls.chack_noris.clone(),
            JokeSource::EvilInsult(lang) => format!("{}?lang={}&type=json", urls.insult, lang),
        }
    }

    /// Decode a raw upstream body into the joke text
    pub fn decode(&self, raw: &[u8]) -> GatewayResult<String> {
        match self {
            JokeSource::BadJoke => {
                let record: BadJoke = serde_json::from_slice(raw)?;
                if !record.is_success() {
                    return Err(helpers::rejected_error(format!(
                        "Status != {}: body = {:?}",
                        BadJoke::SUCCESS_STATUS,
                        record
                    )));
                }
                Ok(record.joke)
            }
            JokeSource::ChuckNorris => {
                let record: ChuckNorrisJoke = serde_json::from_slice(raw)?;
                if !record.is_success() {
                    return Err(helpers::rejected_error(format!("{:?}", record)));
                }
                Ok(record.value.joke)
            }
            // No status check, an empty insult is passed through
            JokeSource::EvilInsult(_) => {
                let record: EvilInsult = serde_json::from_slice(raw)?;
                Ok(record.insult)
            }
        }
    }
}

/// Fetch-then-decode for every joke route
#[derive(Clone)]
pub struct JokeService {
    fetcher: Arc<dyn Fetch>,
    urls: UrlsConfig,
}

impl JokeService {
    pub fn new(fetcher: Arc<dyn Fetch>, urls: UrlsConfig) -> Self {
        Self { fetcher, urls }
    }

    /// Fetch one joke from the given upstream
    pub async fn joke(&self, source: JokeSource) -> GatewayResult<String> {
        let url = source.request_url(&self.urls);
        debug!("Requesting {} joke from {}", source.name(), url);

        let body = self.fetcher.fetch(&url).await?;

        source.decode(&body).map_err(|e| {
            if let GatewayError::Malformed(_) = &e {
                warn!("{} returned a body that is not the expected JSON", source.name());
            }
            e
        })
    }
}

impl fmt::Debug for JokeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JokeService")
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls() -> UrlsConfig {
        UrlsConfig {
            chack_noris: "http://chuck.example/random".to_string(),
            insult: "http://insult.example/generate".to_string(),
            bad_joke: "http://dad.example/".to_string(),
        }
    }

    #[test]
    fn test_language_parse_any_case() {
        assert_eq!(Language::parse("ru").unwrap(), Language::Ru);
        assert_eq!(Language::parse("EN").unwrap(), Language::En);
        assert_eq!(Language::parse("Ru").unwrap(), Language::Ru);
    }

    #[test]
    fn test_language_parse_unsupported() {
        let err = Language::parse("DE").unwrap_err();
        assert!(matches!(err, GatewayError::Validation(_)));
        assert_eq!(err.to_string(), "'de' language is not supported. Use [ru, en]");

        assert!(Language::parse("").is_err());
    }

    #[test]
    fn test_request_urls() {
        let urls = urls();
        assert_eq!(JokeSource::BadJoke.request_url(&urls), "http://dad.example/");
        assert_eq!(JokeSource::ChuckNorris.request_url(&urls), "http://chuck.example/random");
        assert_eq!(
            JokeSource::EvilInsult(Language::Ru).request_url(&urls),
            "http://insult.example/generate?lang=ru&type=json"
        );
    }

    #[test]
    fn test_bad_joke_status_200() {
        let joke = JokeSource::BadJoke
            .decode(br#"{"id": "abc", "joke": "I'm reading a book on anti-gravity.", "status": 200}"#)
            .unwrap();
        assert_eq!(joke, "I'm reading a book on anti-gravity.");
    }

    #[test]
    fn test_bad_joke_other_status_rejected() {
        let err = JokeSource::BadJoke
            .decode(br#"{"id": "abc", "joke": "nope", "status": 404}"#)
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(_)));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_chuck_norris_type_check() {
        let ok = JokeSource::ChuckNorris
            .decode(br#"{"type": "success", "value": {"id": 1, "joke": "Chuck counted to infinity."}}"#)
            .unwrap();
        assert_eq!(ok, "Chuck counted to infinity.");

        let err = JokeSource::ChuckNorris
            .decode(br#"{"type": "NoSuchQuoteException", "value": "No quote"}"#)
            .unwrap_err();
        // value of the wrong shape is a decode failure, not a rejection
        assert!(matches!(err, GatewayError::Malformed(_)));

        let err = JokeSource::ChuckNorris
            .decode(br#"{"type": "failure", "value": {"id": 0, "joke": ""}}"#)
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected(_)));
    }

    #[test]
    fn test_insult_empty_passes_through() {
        let insult = JokeSource::EvilInsult(Language::En)
            .decode(br#"{"insult": ""}"#)
            .unwrap();
        assert_eq!(insult, "");
    }

    #[test]
    fn test_invalid_json_is_malformed_for_every_source() {
        let sources = [
            JokeSource::BadJoke,
            JokeSource::ChuckNorris,
            JokeSource::EvilInsult(Language::En),
        ];
        for source in sources {
            let raws: [&[u8]; 4] = [b"", b"<html>", b"{\"joke\":", &[0xff, 0x00]];
            for raw in raws {
                let err = source.decode(raw).unwrap_err();
                assert!(matches!(err, GatewayError::Malformed(_)), "{:?} {:?}", source, raw);
            }
        }
    }
}
