use crate::error::FilterError;
use crate::filter::{CollectionFilter, FilterableRecord};

#[derive(Clone, Copy, Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub portrait: &'static str,
    pub resume_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectKind {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillItem {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub category: &'static str,
    pub icon: &'static str,
    pub items: &'static [SkillItem],
}

#[derive(Clone, Copy, Debug)]
pub struct EducationItem {
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub stack: &'static [&'static str],
    pub kinds: &'static [&'static str],
    pub live_url: &'static str,
    pub repo_url: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/portfolio_catalog.rs"));

pub fn kind_label(key: &str) -> Option<&'static str> {
    PROJECT_KINDS
        .iter()
        .find(|kind| kind.key == key)
        .map(|kind| kind.label)
}

/// Projects as filterable records, tagged by kind. The build script rejects
/// projects whose kinds would not form a valid tag set.
pub fn project_records() -> Result<Vec<FilterableRecord<&'static ProjectEntry>>, FilterError> {
    PROJECTS
        .iter()
        .map(|entry| FilterableRecord::new(entry.kinds.iter().copied(), entry))
        .collect()
}

pub fn project_filter() -> Result<CollectionFilter<&'static ProjectEntry>, FilterError> {
    project_records().map(CollectionFilter::new)
}
