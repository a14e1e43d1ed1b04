//! Read-only content sections and title lookup.

use crate::error::FolioError;
use crate::item::{Category, Item};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub title: String,
    pub page_count: u32,
    pub category: Category,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIndex {
    sections: Vec<ContentSection>,
}

fn normalise(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn words(s: &str) -> SmallVec<[String; 8]> {
    s.split_whitespace().map(str::to_lowercase).collect()
}

impl ContentIndex {
    pub fn new(sections: Vec<ContentSection>) -> Self {
        Self { sections }
    }

    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sections(&self) -> &[ContentSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Carousel items, one per section, weighted by page count.
    pub fn items(&self) -> Vec<Item> {
        self.sections
            .iter()
            .map(|s| Item::new(s.title.clone(), s.category, s.page_count))
            .collect()
    }

    /// Exact title, then case/space-insensitive containment, then any shared
    /// word. The first section matching at the first successful stage wins.
    pub fn find(&self, query: &str) -> Result<&ContentSection, FolioError> {
        let miss = || FolioError::LookupMiss(query.to_string());

        if let Some(s) = self.sections.iter().find(|s| s.title == query) {
            return Ok(s);
        }

        let q = normalise(query);
        if q.is_empty() {
            return Err(miss());
        }
        if let Some(s) = self.sections.iter().find(|s| {
            let t = normalise(&s.title);
            t.contains(&q) || q.contains(&t)
        }) {
            return Ok(s);
        }

        let query_words = words(query);
        self.sections
            .iter()
            .find(|s| words(&s.title).iter().any(|w| query_words.contains(w)))
            .ok_or_else(miss)
    }
}
