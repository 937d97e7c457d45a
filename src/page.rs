// src/page.rs
//! Injects rendered regions into the mount points of the site's `index.html`

use anyhow::Result;
use scraper::{Html, Selector};
use std::ops::Range;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::FsOps;
use crate::render::{Document, MountPoint};

pub struct PageComposer {
    template: String,
}

impl PageComposer {
    pub fn new(template: String) -> Self {
        Self { template }
    }

    pub async fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(FsOps::read_file_safe(path).await?))
    }

    /// A document carrying exactly the mount points the template contains
    pub fn document(&self) -> Document {
        let html = Html::parse_document(&self.template);
        let mounts = MountPoint::ALL.into_iter().filter(|mount| {
            Selector::parse(&format!("#{}", mount.id()))
                .map(|selector| html.select(&selector).next().is_some())
                .unwrap_or(false)
        });
        Document::with_mounts(mounts)
    }

    /// Template with the children of every mount element replaced by its rendered region
    pub fn compose(&self, document: &Document) -> String {
        let mut replacements: Vec<(Range<usize>, &str)> = document
            .rendered()
            .filter_map(|(mount, html)| match self.content_range(mount) {
                Some(range) => Some((range, html)),
                None => {
                    warn!("Mount point '{}' not found in page template", mount.id());
                    None
                }
            })
            .collect();
        replacements.sort_by_key(|(range, _)| range.start);

        // a mount nested inside another rendered mount is overwritten by its parent
        let mut kept: Vec<(Range<usize>, &str)> = Vec::with_capacity(replacements.len());
        for (range, html) in replacements {
            if kept.last().is_some_and(|(outer, _)| range.start < outer.end) {
                continue;
            }
            kept.push((range, html));
        }

        let mut page = self.template.clone();
        for (range, html) in kept.iter().rev() {
            page.replace_range(range.clone(), html);
        }
        debug!("Composed page with {} regions", kept.len());
        page
    }

    /// Byte range between the mount element's opening tag and its matching close tag
    fn content_range(&self, mount: MountPoint) -> Option<Range<usize>> {
        let template = self.template.as_str();
        let attr = find_id_attribute(template, mount.id())?;

        let open = template[..attr].rfind('<')?;
        let tag: String = template[open + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        if tag.is_empty() {
            return None;
        }

        let start = attr + template[attr..].find('>')? + 1;
        if template[..start].ends_with("/>") {
            return None;
        }

        let end = matching_close(template, &tag, start)?;
        Some(start..end)
    }
}

/// Offset of an `id="..."` attribute; `data-id="..."` and friends don't count.
fn find_id_attribute(template: &str, id: &str) -> Option<usize> {
    let patterns = [format!("id=\"{}\"", id), format!("id='{}'", id)];
    patterns
        .iter()
        .flat_map(|pattern| template.match_indices(pattern.as_str()).map(|(at, _)| at))
        .filter(|&at| template[..at].ends_with(|c: char| c.is_ascii_whitespace()))
        .min()
}

/// Offset of the close tag balancing an element of `tag` whose children start at `from`
fn matching_close(template: &str, tag: &str, from: usize) -> Option<usize> {
    let open = format!("<{}", tag);
    let close = format!("</{}", tag);
    let mut depth = 0usize;
    let mut pos = from;

    loop {
        let close_at = find_tag(template, &close, pos)?;
        match find_tag(template, &open, pos) {
            Some(open_at) if open_at < close_at => {
                depth += 1;
                pos = open_at + open.len();
            }
            _ if depth == 0 => return Some(close_at),
            _ => {
                depth -= 1;
                pos = close_at + close.len();
            }
        }
    }
}

/// Next `<tag` or `</tag` at or after `from`, ignoring longer names such as `<pre` for `<p`
fn find_tag(template: &str, needle: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = pos + template[pos..].find(needle)?;
        let after = at + needle.len();
        match template[after..].chars().next() {
            Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/' => return Some(at),
            None => return None,
            _ => pos = after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_dom;
    use crate::types::profile::fixtures::sample_profile;
    use chrono::NaiveDate;

    const TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><title>Portfolio</title></head>
<body>
<span id="experience-years"></span>
<p id='profile-text'></p>
<div id="experience-list" class="space-y-6"></div>
<div id="skills-grid"></div>
</body></html>"#;

    #[test]
    fn test_document_discovers_present_mounts() {
        let composer = PageComposer::new(TEMPLATE.to_string());
        let mounts: Vec<MountPoint> = composer.document().mounts().collect();
        assert_eq!(
            mounts,
            vec![
                MountPoint::ProfileText,
                MountPoint::ExperienceList,
                MountPoint::SkillsGrid,
                MountPoint::ExperienceYears,
            ]
        );
    }

    #[test]
    fn test_compose_injects_regions() {
        let composer = PageComposer::new(TEMPLATE.to_string());
        let mut document = composer.document();
        render_dom(
            &sample_profile(),
            NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            &mut document,
        );

        let page = composer.compose(&document);
        assert!(page.contains(
            "<span id=\"experience-years\">&quot;6 Years 11 Months&quot;</span>"
        ));
        assert!(page.contains("<p id='profile-text'>Builds &lt;reliable&gt; ML systems.</p>"));

        let html = Html::parse_document(&page);
        let titles: Vec<String> = html
            .select(&Selector::parse("#experience-list h3").unwrap())
            .map(|el| el.text().collect())
            .collect();
        assert_eq!(titles, vec!["Senior Engineer", "Engineer"]);
        assert!(!page.contains("// Education"));
    }

    #[test]
    fn test_compose_untouched_document_returns_template() {
        let composer = PageComposer::new(TEMPLATE.to_string());
        assert_eq!(composer.compose(&composer.document()), TEMPLATE);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let composer = PageComposer::new(TEMPLATE.to_string());
        let profile = sample_profile();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();

        let mut first = composer.document();
        render_dom(&profile, today, &mut first);
        let mut second = composer.document();
        render_dom(&profile, today, &mut second);

        assert_eq!(composer.compose(&first), composer.compose(&second));
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_compose_replaces_placeholder_and_skips_data_id() {
        let template = r#"<a data-id="profile-text">x</a><p id="profile-text">Loading...</p>"#;
        let composer = PageComposer::new(template.to_string());
        let mut document = composer.document();
        render_dom(&sample_profile(), today(), &mut document);

        assert_eq!(
            composer.compose(&document),
            r#"<a data-id="profile-text">x</a><p id="profile-text">Builds &lt;reliable&gt; ML systems.</p>"#
        );
    }

    #[test]
    fn test_compose_balances_nested_tags() {
        let template = r#"<div id="education-list"><div><div>Loading</div></div></div><div id="certifications-list"><pre>old</pre></div><footer></footer>"#;
        let composer = PageComposer::new(template.to_string());
        let mut document = composer.document();
        render_dom(&sample_profile(), today(), &mut document);

        let page = composer.compose(&document);
        assert!(!page.contains("Loading"));
        assert!(!page.contains("old"));
        assert!(page.ends_with("</div><footer></footer>"));

        let html = Html::parse_document(&page);
        let education = html
            .select(&Selector::parse("#education-list").unwrap())
            .next()
            .unwrap();
        assert!(education.text().collect::<String>().contains("MSc Computer Science"));
        assert_eq!(
            html.select(&Selector::parse("#certifications-list").unwrap()).count(),
            1
        );
    }

    #[test]
    fn test_recompose_of_rendered_page_is_stable() {
        let composer = PageComposer::new(TEMPLATE.to_string());
        let mut document = composer.document();
        render_dom(&sample_profile(), today(), &mut document);
        let page = composer.compose(&document);

        let again = PageComposer::new(page.clone());
        let mut document = again.document();
        render_dom(&sample_profile(), today(), &mut document);
        assert_eq!(again.compose(&document), page);
    }
}
