//! Fetch a same-origin page and pull out its `<main>` region and title.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as a [`NavError`]; the caller decides how to
//! recover (soft navigation falls back to a full page load).

#[cfg(test)]
#[path = "page_fetch_test.rs"]
mod page_fetch_test;

#[cfg(feature = "csr")]
use crate::config::SiteConfig;

/// Errors produced while soft-navigating to another page.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The request could not be sent or its body could not be read.
    #[error("page request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("page request returned status {0}")]
    Status(u16),

    /// The fetched page has no `<main>` element.
    #[error("fetched page has no <main> region")]
    MissingMain,

    /// The current document has no `<main>` element to replace.
    #[error("current page has no <main> region")]
    NoCurrentMain,

    /// No window or document is available.
    #[error("no document available")]
    NoDocument,

    /// A browser API threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl NavError {
    /// Wrap a thrown JS value.
    #[cfg(feature = "csr")]
    pub fn js(value: &wasm_bindgen::JsValue) -> Self {
        Self::Js(crate::util::dom::describe_js(value))
    }
}

/// Normalised `<title>` text: surrounding whitespace trimmed, `None` when
/// empty.
#[must_use]
pub fn clean_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    (!title.is_empty()).then(|| title.to_owned())
}

/// The parts of a fetched page that soft navigation swaps in.
#[cfg(feature = "csr")]
pub struct FetchedPage {
    pub main: web_sys::Element,
    pub title: Option<String>,
}

/// GET `url` with the soft-navigation marker header and parse the body.
///
/// # Errors
///
/// Returns [`NavError::Request`] for transport failures,
/// [`NavError::Status`] for non-2xx responses and the errors of
/// [`parse_page`].
#[cfg(feature = "csr")]
pub async fn fetch_page(url: &str, config: &SiteConfig) -> Result<FetchedPage, NavError> {
    let resp = gloo_net::http::Request::get(url)
        .header(&config.soft_nav_header_name, &config.soft_nav_header_value)
        .send()
        .await
        .map_err(|e| NavError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(NavError::Status(resp.status()));
    }
    let html = resp.text().await.map_err(|e| NavError::Request(e.to_string()))?;
    parse_page(&html)
}

/// Parse an HTML document and extract its `<main>` and `<title>`.
///
/// # Errors
///
/// Returns [`NavError::MissingMain`] when the document has no `<main>` and
/// [`NavError::Js`] if the parser itself fails.
#[cfg(feature = "csr")]
pub fn parse_page(html: &str) -> Result<FetchedPage, NavError> {
    let parser = web_sys::DomParser::new().map_err(|e| NavError::js(&e))?;
    let doc = parser
        .parse_from_string(html, web_sys::SupportedType::TextHtml)
        .map_err(|e| NavError::js(&e))?;
    let main = doc
        .query_selector("main")
        .map_err(|e| NavError::js(&e))?
        .ok_or(NavError::MissingMain)?;
    let title = doc
        .query_selector("title")
        .map_err(|e| NavError::js(&e))?
        .and_then(|el| el.text_content())
        .and_then(|raw| clean_title(&raw));
    Ok(FetchedPage { main, title })
}
