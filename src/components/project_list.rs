//! Project card orchestration for the projects page.
//!
//! Fills `#project-cards` with one `<project-card>` host per static record,
//! in list order, and upgrades stand-alone `<project-card title=...>` hosts
//! written directly in the page markup.

#[cfg(test)]
#[path = "project_list_test.rs"]
mod project_list_test;

use crate::config::SiteConfig;
use crate::state::projects::ProjectRecord;

#[cfg(feature = "csr")]
use crate::components::project_card::{ProjectCard, card_model};
#[cfg(feature = "csr")]
use crate::state::projects::project_cards;
#[cfg(feature = "csr")]
use crate::util::dom;

/// Marks hosts that already received their card.
pub const RENDERED_ATTR: &str = "data-card-rendered";

/// Hosts written in markup that still need a card, paired with the record
/// built from their attributes. Hosts already rendered, or without a title,
/// are skipped.
pub fn pending_markup_cards<H>(
    hosts: impl IntoIterator<Item = H>,
    attr: impl Fn(&H, &str) -> Option<String>,
    text: impl Fn(&H) -> String,
) -> Vec<(H, ProjectRecord)> {
    hosts
        .into_iter()
        .filter(|host| attr(host, RENDERED_ATTR).is_none())
        .filter_map(|host| {
            let record = ProjectRecord::from_attributes(|name| attr(&host, name), &text(&host))?;
            Some((host, record))
        })
        .collect()
}

/// Render every project card on the page. Returns the number of cards
/// rendered.
pub fn install(config: &SiteConfig) -> usize {
    #[cfg(feature = "csr")]
    {
        let Some(document) = dom::document() else {
            return 0;
        };
        let mut rendered = 0;

        if let Some(container) = document.get_element_by_id(&config.project_cards_id) {
            container.set_text_content(Some(""));
            for record in project_cards() {
                let Ok(host) = document.create_element(&config.project_card_tag) else {
                    continue;
                };
                if container.append_child(&host).is_ok() {
                    render_into(&host, record);
                    rendered += 1;
                }
            }
        } else {
            log::debug!("no #{} on this page; project list skipped", config.project_cards_id);
        }

        let hosts = dom::query_all(&document, &config.project_card_tag);
        let pending = pending_markup_cards(hosts, |h, name| h.get_attribute(name), |h| h.text_content().unwrap_or_default());
        for (host, record) in pending {
            render_into(&host, &record);
            rendered += 1;
        }
        rendered
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        0
    }
}

/// Replace everything inside `host` with the card for `record`.
#[cfg(feature = "csr")]
pub fn render_into(host: &web_sys::Element, record: &ProjectRecord) {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    host.set_text_content(Some(""));
    if host.set_attribute(RENDERED_ATTR, "").is_err() {
        log::debug!("could not mark project card host");
    }
    let Ok(host) = host.clone().dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    let card = card_model(record);
    leptos::mount::mount_to(host, move || view! { <ProjectCard card=card/> }).forget();
}
