//! Presentational card for one project.
//!
//! DESIGN
//! ======
//! Rendering is split in two: [`card_model`] decides what the card contains
//! from a [`ProjectRecord`], and [`ProjectCard`] turns that model into markup.
//! The model holds no state of its own, so rendering the same record twice
//! yields the same card.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::state::projects::ProjectRecord;

/// `srcset` width descriptor of the small image variant.
pub const SMALL_IMAGE_WIDTH: &str = "480w";
/// `srcset` width descriptor of the large image variant.
pub const LARGE_IMAGE_WIDTH: &str = "800w";
/// Wide viewports show the image at 90% width, narrow ones at a fixed 200px.
pub const IMAGE_SIZES: &str = "(min-width: 700px) 90vw, 200px";
pub const IMAGE_TYPE: &str = "image/jpeg";

pub const LEARN_MORE_LABEL: &str = "Learn more";
pub const LEARN_MORE_HREF: &str = "#";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    pub picture: Option<PictureModel>,
    pub heading: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PictureModel {
    pub source: Option<SourceModel>,
    pub img_src: String,
    pub img_alt: String,
}

/// Responsive `<source>` offering every available resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceModel {
    pub srcset: String,
    pub sizes: &'static str,
    pub media_type: &'static str,
}

/// Decide the contents of the card for `record`.
///
/// Without any image the picture is omitted; with a single size the
/// `srcset` offers just that one and the `<img>` falls back to it.
#[must_use]
pub fn card_model(record: &ProjectRecord) -> CardModel {
    CardModel {
        picture: picture_model(record),
        heading: record.title.clone(),
        description: Some(record.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_owned),
        tags: record.tags.clone(),
    }
}

fn picture_model(record: &ProjectRecord) -> Option<PictureModel> {
    let variants: Vec<String> = [
        (record.image_small.as_str(), SMALL_IMAGE_WIDTH),
        (record.image_large.as_str(), LARGE_IMAGE_WIDTH),
    ]
    .into_iter()
    .filter(|(url, _)| !url.is_empty())
    .map(|(url, width)| format!("{url} {width}"))
    .collect();
    if variants.is_empty() {
        return None;
    }

    let img_src = if record.image_small.is_empty() { &record.image_large } else { &record.image_small };
    Some(PictureModel {
        source: Some(SourceModel { srcset: variants.join(", "), sizes: IMAGE_SIZES, media_type: IMAGE_TYPE }),
        img_src: img_src.clone(),
        img_alt: record.image_alt.clone(),
    })
}

/// A project card: optional responsive picture, then a body with the title,
/// description, a placeholder link and the tag list.
#[component]
pub fn ProjectCard(card: CardModel) -> impl IntoView {
    let CardModel { picture, heading, description, tags } = card;

    view! {
        <article class="project-card">
            {picture.map(|picture| view! { <CardPicture picture=picture/> })}
            <section class="card-body">
                <h2>{heading}</h2>
                {description.map(|text| view! { <p>{text}</p> })}
                <a href=LEARN_MORE_HREF target="_blank" rel="noopener">
                    {LEARN_MORE_LABEL}
                </a>
                {(!tags.is_empty())
                    .then(|| {
                        view! {
                            <ul class="tags">
                                {tags.into_iter().map(|tag| view! { <li>{tag}</li> }).collect_view()}
                            </ul>
                        }
                    })}
            </section>
        </article>
    }
}

#[component]
fn CardPicture(picture: PictureModel) -> impl IntoView {
    let PictureModel { source, img_src, img_alt } = picture;

    view! {
        <picture>
            {source
                .map(|source| {
                    view! { <source srcset=source.srcset sizes=source.sizes type=source.media_type/> }
                })}
            <img src=img_src alt=img_alt loading="lazy" decoding="async"/>
        </picture>
    }
}
