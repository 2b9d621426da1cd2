use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use rust_embed::Embed;

pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, ShowcaseItem>> =
    LazyLock::new(DashMap::new);
pub static GLOBAL_SHOWCASE_CACHE: LazyLock<DashMap<(), Vec<ShowcaseItem>>> =
    LazyLock::new(DashMap::new);

#[cfg(feature = "ssr")]
#[derive(Embed)]
#[folder = "content/projects"]
pub struct ProjectAssets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    channel: u32,
    title: String,
    subtitle: String,
    category: String,
    accent_color: String,
    url: String,
    tags: Vec<String>,
    thumbnail: String,
}

/// One project on the Work section's TV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseItem {
    pub slug: String,
    pub channel: u32,
    pub title: String,
    pub subtitle: String,
    pub category: String,
    pub accent_color: String,
    pub url: String,
    pub tags: Vec<String>,
    pub thumbnail: String,
    /// Rendered HTML.
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Project file {0} is not valid UTF-8")]
    InvalidUtf8(String),
    #[error("Couldn't parse front matter of {0}")]
    FrontMatter(String),
    #[error("Project {name} has invalid accent color {color}")]
    InvalidAccent { name: String, color: String },
}

/// Accepts `#rrggbb` only, since alpha suffixes get appended to it.
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(feature = "ssr")]
fn parse_project(name: &str, content: &str) -> Result<ShowcaseItem, ProjectError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::FrontMatter(name.to_string()))?;
    if !is_hex_color(&fm.data.accent_color) {
        return Err(ProjectError::InvalidAccent {
            name: name.to_string(),
            color: fm.data.accent_color,
        });
    }

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut description = String::new();
    pulldown_cmark::html::push_html(&mut description, parser);

    Ok(ShowcaseItem {
        slug: name.trim_end_matches(".md").to_string(),
        channel: fm.data.channel,
        title: fm.data.title,
        subtitle: fm.data.subtitle,
        category: fm.data.category,
        accent_color: fm.data.accent_color,
        url: fm.data.url,
        tags: fm.data.tags,
        thumbnail: fm.data.thumbnail,
        description,
    })
}

#[cfg(feature = "ssr")]
pub fn get_project(name: &str) -> Result<ShowcaseItem, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(item) = cache.get(name) {
        return Ok(item.clone());
    }
    let file = ProjectAssets::get(name).ok_or(ProjectError::NotFound)?;
    let content = String::from_utf8(file.data.into())
        .map_err(|_| ProjectError::InvalidUtf8(name.to_string()))?;
    let item = parse_project(name, &content)?;
    cache.insert(name.to_string(), item.clone());
    Ok(item)
}

/// Every embedded project, ordered by channel number.
#[cfg(feature = "ssr")]
pub fn get_projects() -> Result<Vec<ShowcaseItem>, ProjectError> {
    let cache = &*GLOBAL_SHOWCASE_CACHE;
    if let Some(items) = cache.get(&()) {
        return Ok(items.clone());
    }
    let mut items = ProjectAssets::iter()
        .filter(|s| s.ends_with(".md"))
        .map(|s| get_project(&s))
        .collect::<Result<Vec<_>, _>>()?;
    items.sort_by(|a, b| a.channel.cmp(&b.channel).then_with(|| a.slug.cmp(&b.slug)));
    tracing::debug!(count = items.len(), "loaded showcase projects");
    cache.insert((), items.clone());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#818cf8"));
        assert!(is_hex_color("#F59E0B"));
        assert!(!is_hex_color("818cf8"));
        assert!(!is_hex_color("#818cf"));
        assert!(!is_hex_color("#818cf830"));
        assert!(!is_hex_color("#818cgz"));
    }

    #[cfg(feature = "ssr")]
    const SAMPLE: &str = r##"---
channel: 2
title: "Sample"
subtitle: "A test project"
category: "Testing"
accent_color: "#14b8a6"
url: "https://example.com/"
tags: ["Rust", "Leptos"]
thumbnail: "/images/sample.png"
---
A *small* project.
"##;

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project() {
        let item = parse_project("sample.md", SAMPLE).expect("sample should parse");
        assert_eq!(item.slug, "sample");
        assert_eq!(item.channel, 2);
        assert_eq!(item.title, "Sample");
        assert_eq!(item.accent_color, "#14b8a6");
        assert_eq!(item.tags, vec!["Rust".to_string(), "Leptos".to_string()]);
        assert!(item.description.contains("<em>small</em>"));
        assert!(!item.description.contains("accent_color"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_rejects_bad_accent() {
        let content = SAMPLE.replace("#14b8a6", "teal");
        assert_eq!(
            parse_project("sample.md", &content),
            Err(ProjectError::InvalidAccent {
                name: "sample.md".to_string(),
                color: "teal".to_string(),
            })
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_rejects_missing_front_matter() {
        assert_eq!(
            parse_project("plain.md", "just text"),
            Err(ProjectError::FrontMatter("plain.md".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_projects_are_ordered() {
        let items = get_projects().expect("embedded projects should load");
        assert_eq!(items.len(), 4);
        assert!(items.windows(2).all(|w| w[0].channel <= w[1].channel));
        assert_eq!(items[0].title, "ZenFrame");
        assert!(items.iter().all(|i| is_hex_color(&i.accent_color)));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_missing_project() {
        assert_eq!(get_project("nope.md"), Err(ProjectError::NotFound));
    }
}
