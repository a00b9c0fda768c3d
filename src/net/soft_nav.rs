//! Soft navigation: swap `<main>` in place inside a view transition.
//!
//! ARCHITECTURE
//! ============
//! A document-level click listener picks out primary clicks on
//! `a[data-view-transition]` links that stay on this origin. For those it
//! cancels the browser navigation and runs the swap inside
//! `document.startViewTransition`:
//!
//! 1. fetch the target page and parse it,
//! 2. replace `<main>` and the document title,
//! 3. push the new path onto the history stack,
//! 4. move the active marker to the matching nav link,
//! 5. re-run the content controllers against the new `<main>`.
//!
//! Browsers without view transitions never get the listener, so every link
//! behaves as a normal navigation. Back/forward triggers a full reload.
//!
//! ERROR HANDLING
//! ==============
//! Any failure during the swap abandons it and navigates to the same URL the
//! normal way, so a broken fetch never leaves the page half-updated.

#[cfg(test)]
#[path = "soft_nav_test.rs"]
mod soft_nav_test;

use crate::app::Site;

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "csr")]
use web_sys::{Document, HtmlAnchorElement, MouseEvent, Url};

#[cfg(feature = "csr")]
use super::page_fetch::{NavError, fetch_page};
#[cfg(feature = "csr")]
use crate::util::dom;

/// Page name assumed for a path ending in `/`.
pub const INDEX_PAGE: &str = "index.html";

/// Last path segment of `path_or_href`, ignoring any query or fragment.
/// An empty segment (the site root or a directory) means [`INDEX_PAGE`].
#[must_use]
pub fn page_segment(path_or_href: &str) -> &str {
    let end = path_or_href.find(['?', '#']).unwrap_or(path_or_href.len());
    let path = &path_or_href[..end];
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => INDEX_PAGE,
    }
}

/// New active state for each nav link given the current `path`.
///
/// `None` marks a link without an `href`, whose state is left as is.
#[must_use]
pub fn active_link_flags(hrefs: &[Option<String>], path: &str) -> Vec<Option<bool>> {
    let page = page_segment(path);
    hrefs
        .iter()
        .map(|href| href.as_deref().map(|href| page_segment(href) == page))
        .collect()
}

/// What a click on a soft-navigation link looked like.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickIntent {
    /// `MouseEvent.button`; 0 is the primary button.
    pub button: i16,
    /// Any of ctrl, meta, shift or alt held.
    pub modified: bool,
    pub default_prevented: bool,
    /// The link's `target` attribute.
    pub target: Option<String>,
    /// The link carries a `download` attribute.
    pub download: bool,
    /// Link and page share an origin.
    pub same_origin: bool,
}

impl ClickIntent {
    /// Whether the click should become a soft navigation. Anything else is
    /// left to the browser.
    #[must_use]
    pub fn should_intercept(&self) -> bool {
        let opens_here = self
            .target
            .as_deref()
            .map_or(true, |t| t.is_empty() || t.eq_ignore_ascii_case("_self"));
        self.same_origin
            && self.button == 0
            && !self.modified
            && !self.default_prevented
            && !self.download
            && opens_here
    }
}

/// Path pushed to history for the new page.
#[must_use]
pub fn history_path(pathname: &str, search: &str, hash: &str) -> String {
    format!("{pathname}{search}{hash}")
}

/// Install the soft-navigation listeners. Returns `true` if the browser
/// supports view transitions and the controller is active.
pub fn install(site: &Site) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(document) = window.document() else {
            return false;
        };
        if !supports_view_transitions(&document) {
            log::debug!("view transitions unsupported; soft navigation disabled");
            return false;
        }

        let click_site = site.clone();
        dom::listen(&document, "click", move |event| on_click(&click_site, &event));

        let reload_window = window.clone();
        dom::listen(&window, "popstate", move |_| {
            if let Err(e) = reload_window.location().reload() {
                log::warn!("reload after popstate failed: {}", dom::describe_js(&e));
            }
        });
        log::debug!("soft navigation enabled");
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = site;
        false
    }
}

#[cfg(feature = "csr")]
fn supports_view_transitions(document: &Document) -> bool {
    js_sys::Reflect::get(document, &JsValue::from_str("startViewTransition")).is_ok_and(|f| f.is_function())
}

#[cfg(feature = "csr")]
fn on_click(site: &Site, event: &web_sys::Event) {
    let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
        return;
    };
    let Some(link) = event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .and_then(|el| el.closest(&site.config.soft_nav_link_selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };
    let Ok(url) = Url::new(&link.href()) else {
        return;
    };
    let page_origin = web_sys::window().and_then(|w| w.location().origin().ok());

    let intent = ClickIntent {
        button: mouse.button(),
        modified: mouse.ctrl_key() || mouse.meta_key() || mouse.shift_key() || mouse.alt_key(),
        default_prevented: event.default_prevented(),
        target: link.get_attribute("target"),
        download: link.has_attribute("download"),
        same_origin: page_origin.is_some_and(|origin| origin == url.origin()),
    };
    if !intent.should_intercept() {
        return;
    }

    event.prevent_default();
    if let Err(e) = start_transition(site.clone(), url.clone()) {
        log::warn!("soft navigation to {} failed: {e}", url.href());
        full_navigation(&url.href());
    }
}

/// Call `document.startViewTransition` with an update callback that performs
/// the swap. The callback's promise settles once the new content is in.
#[cfg(feature = "csr")]
fn start_transition(site: Site, url: Url) -> Result<(), NavError> {
    let document = dom::document().ok_or(NavError::NoDocument)?;
    let start = js_sys::Reflect::get(&document, &JsValue::from_str("startViewTransition"))
        .map_err(|e| NavError::js(&e))?
        .dyn_into::<js_sys::Function>()
        .map_err(|e| NavError::js(&e))?;

    let update = Closure::once_into_js(move || -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            if let Err(e) = swap_to(&site, &url).await {
                log::warn!("soft navigation to {} failed: {e}", url.href());
                full_navigation(&url.href());
            }
            Ok(JsValue::UNDEFINED)
        })
    });
    start.call1(&document, &update).map_err(|e| NavError::js(&e))?;
    Ok(())
}

#[cfg(feature = "csr")]
async fn swap_to(site: &Site, url: &Url) -> Result<(), NavError> {
    let page = fetch_page(&url.href(), &site.config).await?;

    let window = web_sys::window().ok_or(NavError::NoDocument)?;
    let document = window.document().ok_or(NavError::NoDocument)?;
    let current = document
        .query_selector("main")
        .map_err(|e| NavError::js(&e))?
        .ok_or(NavError::NoCurrentMain)?;
    current.replace_with_with_node_1(&page.main).map_err(|e| NavError::js(&e))?;
    if let Some(title) = &page.title {
        document.set_title(title);
    }

    let path = history_path(&url.pathname(), &url.search(), &url.hash());
    window
        .history()
        .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&path)))
        .map_err(|e| NavError::js(&e))?;

    update_active_nav(&document, site, &url.pathname());
    crate::app::init_content(site);
    log::debug!("soft navigated to {path}");
    Ok(())
}

#[cfg(feature = "csr")]
fn update_active_nav(document: &Document, site: &Site, pathname: &str) {
    let links = dom::query_all(document, &site.config.nav_link_selector);
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let class = &site.config.active_class;
    for (link, active) in links.iter().zip(active_link_flags(&hrefs, pathname)) {
        let classes = link.class_list();
        let result = match active {
            Some(true) => classes.add_1(class),
            Some(false) => classes.remove_1(class),
            None => Ok(()),
        };
        if result.is_err() {
            log::debug!("could not update nav link class");
        }
    }
}

#[cfg(feature = "csr")]
fn full_navigation(href: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().assign(href) {
        log::warn!("fallback navigation to {href} failed: {}", dom::describe_js(&e));
    }
}
