//! Tag filter over a static, immutable collection.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;

pub const ALL_KEY: &str = "all";

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    Tag(String),
}

impl FilterKey {
    /// Same normalisation as [`FilterKey::parse`], so `tag("all")` is [`FilterKey::All`].
    pub fn tag(value: impl AsRef<str>) -> Self {
        Self::parse(value.as_ref())
    }

    /// `"all"` (any case, surrounding whitespace ignored) maps to [`FilterKey::All`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ALL_KEY) {
            FilterKey::All
        } else {
            FilterKey::Tag(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterKey::All => ALL_KEY,
            FilterKey::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterKey::All)
    }

    fn normalized(self) -> Self {
        match self {
            FilterKey::Tag(tag) if tag.trim().eq_ignore_ascii_case(ALL_KEY) => FilterKey::All,
            key => key,
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKey {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterableRecord<T> {
    tags: Vec<String>,
    payload: T,
}

impl<T> FilterableRecord<T> {
    /// Tags are trimmed and deduplicated. Blank tags and the reserved `all`
    /// key (any case) are rejected.
    pub fn new<I, S>(tags: I, payload: T) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || tag.eq_ignore_ascii_case(ALL_KEY) {
                return Err(FilterError::InvalidTag {
                    tag: tag.to_string(),
                });
            }
            let tag = tag.to_string();
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        if unique.is_empty() {
            return Err(FilterError::EmptyTagSet);
        }
        Ok(Self {
            tags: unique,
            payload,
        })
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    fn matches(&self, key: &FilterKey) -> bool {
        match key {
            FilterKey::All => true,
            FilterKey::Tag(tag) => self.has_tag(tag),
        }
    }
}

/// Derives the ordered subsequence of `records` matching the active key.
#[derive(Clone, Debug)]
pub struct CollectionFilter<T> {
    records: Vec<FilterableRecord<T>>,
    vocabulary: Vec<String>,
    active: FilterKey,
    view: Vec<usize>,
}

impl<T> CollectionFilter<T> {
    pub fn new(records: Vec<FilterableRecord<T>>) -> Self {
        let mut vocabulary: Vec<String> = Vec::new();
        for record in &records {
            for tag in &record.tags {
                if !vocabulary.contains(tag) {
                    vocabulary.push(tag.clone());
                }
            }
        }
        let view = (0..records.len()).collect();
        Self {
            records,
            vocabulary,
            active: FilterKey::All,
            view,
        }
    }

    /// Union of all record tags, in first-appearance order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Every selectable key: `all` first, then the vocabulary.
    pub fn keys(&self) -> impl Iterator<Item = FilterKey> + '_ {
        std::iter::once(FilterKey::All).chain(self.vocabulary.iter().cloned().map(FilterKey::Tag))
    }

    pub fn accepts(&self, key: &FilterKey) -> bool {
        match key {
            FilterKey::All => true,
            FilterKey::Tag(tag) => self.vocabulary.contains(tag),
        }
    }

    pub fn active_key(&self) -> &FilterKey {
        &self.active
    }

    /// Replaces the active key and recomputes the view. Unknown keys leave the
    /// filter untouched.
    pub fn set_filter(&mut self, key: FilterKey) -> Result<(), FilterError> {
        let key = key.normalized();
        if !self.accepts(&key) {
            return Err(FilterError::InvalidFilterKey {
                key: key.as_str().to_string(),
            });
        }
        self.view = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&key))
            .map(|(idx, _)| idx)
            .collect();
        self.active = key;
        Ok(())
    }

    pub fn current_view(&self) -> impl Iterator<Item = &FilterableRecord<T>> + '_ {
        self.view.iter().map(move |&idx| &self.records[idx])
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    pub fn records(&self) -> &[FilterableRecord<T>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
