//! Project records shown on the projects page.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// One portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub image_small: String,
    pub image_large: String,
    pub image_alt: String,
    pub description: String,
    pub tags: Vec<String>,
}

impl ProjectRecord {
    /// Build a record from a host element's attributes.
    ///
    /// Reads `id`, `title`, `image-small`, `image-large` and `image-alt`;
    /// the trimmed text content becomes the description. Tags cannot be
    /// expressed this way. Returns `None` without a non-empty `title`.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>, text_content: &str) -> Option<Self> {
        let title = attr("title").filter(|t| !t.is_empty())?;
        Some(Self {
            id: attr("id").unwrap_or_default(),
            title,
            image_small: attr("image-small").unwrap_or_default(),
            image_large: attr("image-large").unwrap_or_default(),
            image_alt: attr("image-alt").unwrap_or_default(),
            description: text_content.trim().to_owned(),
            tags: Vec::new(),
        })
    }
}

static PROJECT_CARDS: LazyLock<Vec<ProjectRecord>> = LazyLock::new(|| {
    vec![
        project(
            "example-1",
            "Example Project 1",
            1,
            "A responsive website built with HTML, CSS, and JavaScript that showcases my résumé and personal projects.",
            &["HTML", "CSS", "JavaScript"],
        ),
        project(
            "example-2",
            "Example Project 2",
            2,
            "A sample project with a short description to demonstrate reusable cards.",
            &["Tag 1", "Tag 2", "Tag 3"],
        ),
        project(
            "example-3",
            "Example Project 3",
            3,
            "Another example project that highlights my work on layouts and design.",
            &["Layout", "Design", "Practice"],
        ),
    ]
});

fn project(id: &str, title: &str, n: u8, description: &str, tags: &[&str]) -> ProjectRecord {
    ProjectRecord {
        id: id.into(),
        title: title.into(),
        image_small: format!("images/project{n}-small.jpg"),
        image_large: format!("images/project{n}.jpg"),
        image_alt: format!("A photo of project {n}"),
        description: description.into(),
        tags: tags.iter().map(|&t| t.to_owned()).collect(),
    }
}

/// The static project list, in display order.
pub fn project_cards() -> &'static [ProjectRecord] {
    &PROJECT_CARDS
}
