// src/render/document.rs
//! Target document for the DOM projection: a closed set of named mount points

use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountPoint {
    ProfileText,
    HighlightsGrid,
    ExperienceList,
    SkillsGrid,
    EducationList,
    CertificationsList,
    ExperienceYears,
}

impl MountPoint {
    pub const ALL: [MountPoint; 7] = [
        MountPoint::ProfileText,
        MountPoint::HighlightsGrid,
        MountPoint::ExperienceList,
        MountPoint::SkillsGrid,
        MountPoint::EducationList,
        MountPoint::CertificationsList,
        MountPoint::ExperienceYears,
    ];

    /// Element id of the container in `index.html`
    pub fn id(&self) -> &'static str {
        match self {
            Self::ProfileText => "profile-text",
            Self::HighlightsGrid => "highlights-grid",
            Self::ExperienceList => "experience-list",
            Self::SkillsGrid => "skills-grid",
            Self::EducationList => "education-list",
            Self::CertificationsList => "certifications-list",
            Self::ExperienceYears => "experience-years",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mount| mount.id() == id)
    }
}

/// Mount points present on a page and the inner HTML written into each.
///
/// A mount point that exists but was never written holds `None`; writes to
/// mount points the page does not have are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    mounts: BTreeMap<MountPoint, Option<String>>,
}

impl Document {
    pub fn with_mounts(mounts: impl IntoIterator<Item = MountPoint>) -> Self {
        Self {
            mounts: mounts.into_iter().map(|mount| (mount, None)).collect(),
        }
    }

    /// A page carrying every known mount point
    pub fn full() -> Self {
        Self::with_mounts(MountPoint::ALL)
    }

    pub fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains_key(&mount)
    }

    pub fn mounts(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.mounts.keys().copied()
    }

    /// Replace the content of a mount point; returns false when the page lacks it.
    pub fn set_inner_html(&mut self, mount: MountPoint, html: String) -> bool {
        match self.mounts.get_mut(&mount) {
            Some(slot) => {
                *slot = Some(html);
                true
            }
            None => false,
        }
    }

    pub fn inner_html(&self, mount: MountPoint) -> Option<&str> {
        self.mounts.get(&mount).and_then(|slot| slot.as_deref())
    }

    /// Rendered regions in mount order
    pub fn rendered(&self) -> impl Iterator<Item = (MountPoint, &str)> {
        self.mounts
            .iter()
            .filter_map(|(mount, slot)| slot.as_deref().map(|html| (*mount, html)))
    }

    pub fn is_untouched(&self) -> bool {
        self.mounts.values().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_ids_round_trip() {
        for mount in MountPoint::ALL {
            assert_eq!(MountPoint::from_id(mount.id()), Some(mount));
        }
        assert_eq!(MountPoint::from_id("mobile-menu"), None);
    }

    #[test]
    fn test_writes_to_missing_mount_are_dropped() {
        let mut document = Document::with_mounts([MountPoint::SkillsGrid]);
        assert!(!document.set_inner_html(MountPoint::ExperienceList, "<p>x</p>".into()));
        assert!(document.is_untouched());

        assert!(document.set_inner_html(MountPoint::SkillsGrid, "<p>y</p>".into()));
        assert_eq!(document.inner_html(MountPoint::SkillsGrid), Some("<p>y</p>"));
        assert!(!document.is_untouched());
    }

    #[test]
    fn test_rendered_skips_unwritten_mounts() {
        let mut document = Document::full();
        document.set_inner_html(MountPoint::EducationList, "edu".into());
        let rendered: Vec<_> = document.rendered().collect();
        assert_eq!(rendered, vec![(MountPoint::EducationList, "edu")]);
    }
}
