use crate::loader;
use crate::{Error, Identifier, Pokemon};

use bytes::Bytes;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base: reqwest::Url,
    retries: usize,
}

impl Session {
    pub fn new(base: Option<String>) -> Self {
        let base = base
            .and_then(|base| match reqwest::Url::parse(&base) {
                Ok(url) if !url.cannot_be_a_base() => Some(url),
                _ => {
                    log::warn!("Ignoring invalid API url: {base}");
                    None
                }
            })
            .unwrap_or_else(|| DEFAULT.clone());

        log::info!("PokéAPI session started ({base})");

        Self {
            client: CLIENT.clone(),
            base,
            retries: 0,
        }
    }

    /// Retries record fetches that fail before a response arrives.
    pub fn with_retries(self, retries: usize) -> Self {
        Self { retries, ..self }
    }

    pub fn endpoint(&self, identifier: &Identifier) -> Result<reqwest::Url, Error> {
        let mut url = self.base.clone();

        let _ = url
            .path_segments_mut()
            .map_err(|()| Error::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .push("pokemon")
            .push(&identifier.to_string());

        Ok(url)
    }

    pub async fn fetch_pokemon(&self, identifier: &Identifier) -> Result<Pokemon, Error> {
        let url = self.endpoint(identifier)?;

        log::info!("Fetching pokemon: {url}");
        let response = retry(self.retries, || self.client.get(url.clone()).send()).await?;
        let bytes = response.error_for_status()?.bytes().await?;

        Ok(Pokemon::from_slice(&bytes)?)
    }

    pub async fn download_image(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading image: {url}");
        let response = retry(2, || self.client.get(url).send()).await?;

        Ok(response.error_for_status()?.bytes().await?)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(None)
    }
}

impl loader::Source for Session {
    fn fetch(
        &self,
        identifier: &Identifier,
    ) -> impl Future<Output = Result<Pokemon, Error>> + Send {
        self.fetch_pokemon(identifier)
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Build reqwest client")
});

static DEFAULT: LazyLock<reqwest::Url> =
    LazyLock::new(|| reqwest::Url::parse(DEFAULT_URL).expect("Parse default API url"));

async fn retry<T, E, F>(mut retries: usize, f: impl Fn() -> F) -> Result<T, E>
where
    E: fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    loop {
        match f().await {
            Ok(response) => {
                break Ok(response);
            }
            Err(error) => {
                if retries > 0 {
                    log::warn!(
                        "{error} ({retries} {} left)",
                        if retries == 1 { "retry" } else { "retries" }
                    );
                    retries -= 1;
                } else {
                    break Err(error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::pokemon;

    #[test]
    fn endpoint_appends_identifier() {
        let session = Session::new(None);

        let url = session
            .endpoint(&Identifier::from(pokemon::Id::new(6)))
            .expect("valid endpoint");

        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/6");
    }

    #[test]
    fn endpoint_escapes_names() {
        let session = Session::new(Some("http://localhost:8080/api/v2/".to_owned()));

        let url = session
            .endpoint(&Identifier::Name("mr mime/../x".to_owned()))
            .expect("valid endpoint");

        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/v2/pokemon/mr%20mime%2F..%2Fx"
        );
    }

    #[test]
    fn invalid_base_falls_back_to_default() {
        let session = Session::new(Some("not a url".to_owned()));

        let url = session
            .endpoint(&Identifier::Name("eevee".to_owned()))
            .expect("valid endpoint");

        assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/eevee");
    }

    #[tokio::test]
    async fn retry_stops_after_budget() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let attempts = AtomicUsize::new(0);

        let result: Result<(), String> = retry(2, || {
            let _ = attempts.fetch_add(1, Ordering::SeqCst);

            async { Err("unreachable host".to_owned()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }
}
