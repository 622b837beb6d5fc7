//! Fetching species pages and pulling the description out of them.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::{debug, instrument};

use crate::harvest::config::HarvestConfig;
use crate::model::{SpeciesId, SpeciesRecord};
use crate::traits::{FetchError, PageSource};

const DESCRIPTION_SELECTOR: &str = r#"meta[name="description"]"#;

/// [`PageSource`] backed by a `reqwest` client.
///
/// No timeout, retry or rate limit is configured: a request runs until the
/// server answers or the connection fails.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("species-harvester/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    fn source_id(&self) -> &str {
        "http"
    }

    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        response.text().await.map_err(transport)
    }
}

/// Returns the `content` of the first `<meta name="description">` element,
/// or `None` when there is no such element or it has no `content`.
pub fn extract_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(DESCRIPTION_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    element.value().attr("content").map(str::to_string)
}

/// Fetches the species page for `id` and extracts its description.
///
/// Every failure is returned as a [`FetchError`]; an `Ok` record always
/// carries non-empty text.
#[instrument(skip(source, config), fields(page_source = source.source_id()))]
pub async fn fetch_description<S>(
    source: &S,
    config: &HarvestConfig,
    id: &SpeciesId,
) -> Result<SpeciesRecord, FetchError>
where
    S: PageSource + ?Sized,
{
    let url = config.species_url(id.as_str());
    let body = source.get(&url).await?;
    debug!(bytes = body.len(), "Page received");

    let description =
        extract_description(&body).ok_or_else(|| FetchError::MissingDescription { url: url.clone() })?;
    if description.trim().is_empty() {
        return Err(FetchError::EmptyDescription { url });
    }
    Ok(SpeciesRecord::new(id.clone(), description))
}
