//! Site content
//!
//! Everything the pages show comes from one JSON document:
//!
//! ```json
//! {
//!   "profile": { "name": "...", "tagline": "..." },
//!   "achievements": [{ "title": "...", "provider": "...", "year": "2024", "certificate": "/certs/x.png" }],
//!   "panels": [{ "title": "...", "body": "..." }],
//!   "posts": [{ "slug": "...", "title": "...", "date": "2024-05-01", "summary": "...", "body": "# markdown" }],
//!   "carousel": { "step_px": 300, "smooth": true }
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::CarouselConfig;
use crate::error::{FolioError, FolioResult};

/// One achievement in the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    /// Issuing organisation, shown as the subtitle
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// URL of the certificate image or document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            provider: provider.into(),
            year: None,
            certificate: None,
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_certificate(mut self, url: impl Into<String>) -> Self {
        self.certificate = Some(url.into());
        self
    }
}

/// Ordered, immutable list of slides.
///
/// Backed by an `Arc<[Slide]>`, so clones share storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Slide>", into = "Vec<Slide>")]
pub struct SlideCollection(Arc<[Slide]>);

impl SlideCollection {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.0.iter()
    }
}

impl From<Vec<Slide>> for SlideCollection {
    fn from(slides: Vec<Slide>) -> Self {
        Self(slides.into())
    }
}

impl From<SlideCollection> for Vec<Slide> {
    fn from(collection: SlideCollection) -> Self {
        collection.0.to_vec()
    }
}

impl FromIterator<Slide> for SlideCollection {
    fn from_iter<I: IntoIterator<Item = Slide>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SlideCollection {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accordion panel on the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub body: String,
}

/// A markdown blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL segment under `/blog/`
    pub slug: String,
    pub title: String,
    /// ISO date, sorted lexicographically
    pub date: String,
    #[serde(default)]
    pub summary: String,
    /// Markdown source
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub achievements: SlideCollection,
    #[serde(default)]
    pub panels: Vec<Panel>,
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl SiteContent {
    /// Parse and validate a content document.
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let content: SiteContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let content = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            achievements = content.achievements.len(),
            posts = content.posts.len(),
            "loaded site content"
        );
        Ok(content)
    }

    pub fn validate(&self) -> FolioResult<()> {
        self.carousel.validate()?;

        if let Some(i) = self
            .achievements
            .iter()
            .position(|s| s.title.trim().is_empty())
        {
            return Err(FolioError::InvalidContent(format!(
                "achievement {i} has an empty title"
            )));
        }

        let mut slugs = HashSet::new();
        for post in &self.posts {
            if post.slug.trim().is_empty() {
                return Err(FolioError::InvalidContent(format!(
                    "post '{}' has an empty slug",
                    post.title
                )));
            }
            if !slugs.insert(post.slug.as_str()) {
                return Err(FolioError::InvalidContent(format!(
                    "duplicate post slug: {}",
                    post.slug
                )));
            }
        }
        Ok(())
    }

    pub fn post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Posts ordered newest first.
    pub fn posts_newest_first(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }
}
