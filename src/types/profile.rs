// src/types/profile.rs
//! Profile record driving every rendering of the portfolio

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ===== Root Record =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub personal: Personal,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub education: Vec<Degree>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Personal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    pub career_start_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Social {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct About {
    #[serde(default)]
    pub profile: String,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default)]
    pub responsibilities: Vec<ResponsibilityGroup>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponsibilityGroup {
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub categories: Option<Vec<SkillCategory>>,
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Degree {
    pub degree: String,
    pub institution: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issue_date: String,
    pub expiry_date: Option<String>,
    pub credential_url: Option<String>,
}

// ===== Skill Shapes =====

/// The layout a skill group renders as.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkillShape<'a> {
    Grouped(&'a [SkillCategory]),
    Flat(&'a [String]),
    Empty,
}

impl SkillGroup {
    /// Subcategories win over a flat list when both are present.
    pub fn shape(&self) -> SkillShape<'_> {
        match (&self.categories, &self.items) {
            (Some(categories), _) => SkillShape::Grouped(categories),
            (None, Some(items)) => SkillShape::Flat(items),
            (None, None) => SkillShape::Empty,
        }
    }
}

/// Skill groups keyed by category, kept in document order.
#[derive(Debug, Clone, Default)]
pub struct SkillSet(Vec<(String, SkillGroup)>);

impl SkillSet {
    pub fn new(entries: Vec<(String, SkillGroup)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SkillGroup)> {
        self.0.iter().map(|(key, group)| (key.as_str(), group))
    }

    pub fn get(&self, key: &str) -> Option<&SkillGroup> {
        self.iter().find(|(k, _)| *k == key).map(|(_, group)| group)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for SkillSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, group) in &self.0 {
            map.serialize_entry(key, group)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillSetVisitor;

        impl<'de> Visitor<'de> for SkillSetVisitor {
            type Value = SkillSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category keys to skill groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SkillSet, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, group)) = access.next_entry::<String, SkillGroup>()? {
                    entries.push((key, group));
                }
                Ok(SkillSet(entries))
            }
        }

        deserializer.deserialize_map(SkillSetVisitor)
    }
}

/// Treats an empty string the same as a missing value. Whitespace counts as text.
pub fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}
