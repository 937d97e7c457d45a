// src/render/dom.rs
//! DOM projection: profile sections rendered as HTML fragments for the page mount points

use chrono::NaiveDate;
use tracing::{debug, warn};

use super::document::{Document, MountPoint};
use super::duration::experience_text;
use super::icons::{highlight_color, HighlightIcon, SkillPalette};
use crate::types::profile::{
    present, Certification, Degree, Highlight, Job, Profile, SkillSet, SkillShape,
};
use crate::utils::escape_html;

/// Glyph preceding each responsibility item
pub const ITEM_MARKER: &str = "▹";

const LOCATION_ICON: &str = r#"<svg class="w-3.5 h-3.5" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"/><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"/></svg>"#;

const BADGE_ICON: &str = r#"<svg class="w-5 h-5" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M6.267 3.455a3.066 3.066 0 001.745-.723 3.066 3.066 0 013.976 0 3.066 3.066 0 001.745.723 3.066 3.066 0 012.812 2.812c.051.643.304 1.254.723 1.745a3.066 3.066 0 010 3.976 3.066 3.066 0 00-.723 1.745 3.066 3.066 0 01-2.812 2.812 3.066 3.066 0 00-1.745.723 3.066 3.066 0 01-3.976 0 3.066 3.066 0 00-1.745-.723 3.066 3.066 0 01-2.812-2.812 3.066 3.066 0 00-.723-1.745 3.066 3.066 0 010-3.976 3.066 3.066 0 00.723-1.745 3.066 3.066 0 012.812-2.812zm7.44 5.252a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z" clip-rule="evenodd"/></svg>"#;

const EXTERNAL_LINK_ICON: &str = r#"<svg class="w-3 h-3" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14"/></svg>"#;

/// Render every region the document has a mount point for.
///
/// Returns the number of regions written. Calling it again with the same
/// profile and date rewrites identical markup.
pub fn render_dom(profile: &Profile, today: NaiveDate, document: &mut Document) -> usize {
    let targets: Vec<MountPoint> = document.mounts().collect();
    let mut written = 0;

    for mount in targets {
        if let Some(html) = render_region(profile, mount, today) {
            if document.set_inner_html(mount, html) {
                written += 1;
            }
        }
    }

    debug!("Rendered {} profile regions", written);
    written
}

/// Markup for one mount point, or `None` when the profile has nothing to show there
pub fn render_region(profile: &Profile, mount: MountPoint, today: NaiveDate) -> Option<String> {
    match mount {
        MountPoint::ProfileText => render_profile_text(profile),
        MountPoint::HighlightsGrid => Some(render_highlights(&profile.about.highlights)),
        MountPoint::ExperienceList => Some(render_experience(&profile.experience)),
        MountPoint::SkillsGrid => Some(render_skills(&profile.skills)),
        MountPoint::EducationList => Some(render_education(&profile.education)),
        MountPoint::CertificationsList => Some(render_certifications(&profile.certifications)),
        MountPoint::ExperienceYears => render_experience_years(profile, today),
    }
}

pub fn render_profile_text(profile: &Profile) -> Option<String> {
    let text = &profile.about.profile;
    if text.is_empty() {
        return None;
    }
    Some(escape_html(text))
}

pub fn render_experience_years(profile: &Profile, today: NaiveDate) -> Option<String> {
    let start = profile.personal.career_start_date.as_deref()?;
    match experience_text(start, today) {
        Ok(text) => Some(escape_html(&format!("\"{}\"", text))),
        Err(e) => {
            warn!("Skipping experience counter: {}", e);
            None
        }
    }
}

pub fn render_highlights(highlights: &[Highlight]) -> String {
    let mut html = String::new();
    for (index, highlight) in highlights.iter().enumerate() {
        let icon = HighlightIcon::from_key(&highlight.icon);
        html.push_str("<div class=\"bg-neutral-900 rounded-lg border border-neutral-800 p-5 hover:border-neutral-700 transition-all hover:-translate-y-1\">");
        html.push_str(&format!(
            "<div class=\"{} mb-3\">{}</div>",
            highlight_color(index),
            icon.svg()
        ));
        html.push_str(&format!(
            "<h3 class=\"font-semibold text-white mb-2\">{}</h3>",
            escape_html(&highlight.title)
        ));
        html.push_str(&format!(
            "<p class=\"text-sm text-gray-400\">{}</p>",
            escape_html(&highlight.description)
        ));
        html.push_str("</div>");
    }
    html
}

pub fn render_experience(experience: &[Job]) -> String {
    let mut html = String::new();
    for job in experience {
        render_job(&mut html, job);
    }
    html
}

fn render_job(html: &mut String, job: &Job) {
    html.push_str("<div class=\"bg-neutral-900/50 rounded-xl border border-neutral-800 p-6 hover:border-neutral-700 transition-all\">");
    html.push_str("<div class=\"flex flex-col md:flex-row md:items-center md:justify-between mb-4\"><div>");
    html.push_str(&format!(
        "<h3 class=\"text-xl font-bold text-white\">{}</h3>",
        escape_html(&job.title)
    ));
    html.push_str(&format!(
        "<p class=\"text-cyan-400 font-mono\">{}</p>",
        escape_html(&job.company)
    ));
    if let Some(location) = present(job.location.as_ref()) {
        html.push_str(&format!(
            "<p class=\"text-gray-500 text-sm flex items-center gap-1 mt-1\">{}{}</p>",
            LOCATION_ICON,
            escape_html(location)
        ));
    }
    html.push_str("</div>");

    let date_color = if job.is_current {
        "text-green-400"
    } else {
        "text-gray-500"
    };
    html.push_str(&format!(
        "<span class=\"text-sm font-mono {} mt-2 md:mt-0\">{} — {}</span>",
        date_color,
        escape_html(&job.start_date),
        escape_html(&job.end_date)
    ));
    html.push_str("</div>");

    for group in &job.responsibilities {
        html.push_str("<div class=\"mt-4\">");
        html.push_str(&format!(
            "<h4 class=\"text-purple-400 font-mono text-sm mb-3\">// {}</h4>",
            escape_html(&group.category)
        ));
        html.push_str("<ul class=\"space-y-2\">");
        for item in &group.items {
            html.push_str(&format!(
                "<li class=\"flex items-start gap-3 text-gray-300 text-sm\"><span class=\"text-green-400 mt-1.5 flex-shrink-0\">{}</span><span>{}</span></li>",
                ITEM_MARKER,
                escape_html(item)
            ));
        }
        html.push_str("</ul></div>");
    }
    html.push_str("</div>");
}

pub fn render_skills(skills: &SkillSet) -> String {
    let mut html = String::new();

    for (key, group) in skills.iter() {
        let palette = SkillPalette::from_key(key);
        let heading = format!(
            "<h3 class=\"font-mono mb-4\" style=\"color: {}\">// {}</h3>",
            palette.color(),
            escape_html(&group.title)
        );
        let tag = |item: &String| {
            format!(
                "<span class=\"px-3 py-1 text-sm rounded-full\" style=\"{}\">{}</span>",
                palette.tag_style(),
                escape_html(item)
            )
        };

        match group.shape() {
            SkillShape::Grouped(categories) => {
                html.push_str("<div class=\"md:col-span-2 bg-neutral-900/50 rounded-xl border border-neutral-800 p-6 hover:border-neutral-700 transition-all\">");
                html.push_str(&heading);
                html.push_str("<div class=\"grid md:grid-cols-2 gap-4\">");
                for category in categories {
                    html.push_str(&format!(
                        "<div><p class=\"text-gray-500 text-sm mb-2\">{}</p><div class=\"flex flex-wrap gap-2\">",
                        escape_html(&category.name)
                    ));
                    for item in &category.items {
                        html.push_str(&tag(item));
                    }
                    html.push_str("</div></div>");
                }
                html.push_str("</div></div>");
            }
            SkillShape::Flat(items) => {
                html.push_str("<div class=\"bg-neutral-900/50 rounded-xl border border-neutral-800 p-6 hover:border-neutral-700 transition-all\">");
                html.push_str(&heading);
                html.push_str("<div class=\"flex flex-wrap gap-2\">");
                for item in items {
                    html.push_str(&tag(item));
                }
                html.push_str("</div></div>");
            }
            SkillShape::Empty => {
                debug!("Skill group '{}' has neither categories nor items", key);
            }
        }
    }

    html
}

pub fn render_education(education: &[Degree]) -> String {
    let mut html = String::from("<h3 class=\"font-mono text-blue-400 mb-4\">// Education</h3>");
    for degree in education {
        html.push_str("<div class=\"bg-neutral-900/50 rounded-xl border border-neutral-800 p-5 hover:border-neutral-700 transition-all mb-4\">");
        html.push_str(&format!(
            "<h4 class=\"font-semibold text-white mb-1\">{}</h4>",
            escape_html(&degree.degree)
        ));
        html.push_str(&format!(
            "<p class=\"text-cyan-400 text-sm\">{}</p>",
            escape_html(&degree.institution)
        ));
        html.push_str(&format!(
            "<p class=\"text-gray-500 text-sm font-mono mt-2\">{} — {}</p>",
            escape_html(&degree.start_date),
            escape_html(&degree.end_date)
        ));
        html.push_str("</div>");
    }
    html
}

pub fn render_certifications(certifications: &[Certification]) -> String {
    let mut html =
        String::from("<h3 class=\"font-mono text-yellow-400 mb-4\">// Certifications</h3>");
    for cert in certifications {
        html.push_str("<div class=\"bg-neutral-900/50 rounded-xl border border-neutral-800 p-5 hover:border-neutral-700 transition-all mb-4\">");
        html.push_str("<div class=\"flex items-start gap-3\">");
        html.push_str(&format!("<div class=\"text-yellow-400 mt-1\">{}</div>", BADGE_ICON));
        html.push_str("<div class=\"flex-1\">");
        html.push_str(&format!(
            "<h4 class=\"font-semibold text-white text-sm\">{}</h4>",
            escape_html(&cert.name)
        ));
        html.push_str(&format!(
            "<p class=\"text-gray-400 text-sm\">{}</p>",
            escape_html(&cert.issuer)
        ));

        let expiry = present(cert.expiry_date.as_ref())
            .map(|date| format!(" • Expires: {}", escape_html(date)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<p class=\"text-gray-500 text-xs font-mono mt-1\">Issued: {}{}</p>",
            escape_html(&cert.issue_date),
            expiry
        ));

        if let Some(url) = present(cert.credential_url.as_ref()) {
            html.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" class=\"inline-flex items-center gap-1 text-yellow-400 text-sm mt-2 hover:underline\"><span>View Credential</span>{}</a>",
                escape_html(url),
                EXTERNAL_LINK_ICON
            ));
        }
        html.push_str("</div></div></div>");
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::fixtures::sample_profile;
    use crate::types::profile::SkillGroup;
    use scraper::{Html, Selector};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    fn select_text(html: &str, selector: &str) -> Vec<String> {
        let fragment = Html::parse_fragment(html);
        let selector = Selector::parse(selector).unwrap();
        fragment
            .select(&selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect()
    }

    #[test]
    fn test_render_dom_fills_every_mount() {
        let profile = sample_profile();
        let mut document = Document::full();
        assert_eq!(render_dom(&profile, today(), &mut document), MountPoint::ALL.len());
        assert_eq!(
            document.inner_html(MountPoint::ExperienceYears),
            Some("&quot;6 Years 11 Months&quot;")
        );
    }

    #[test]
    fn test_render_dom_is_idempotent() {
        let profile = sample_profile();
        let mut document = Document::full();
        render_dom(&profile, today(), &mut document);
        let first = document.clone();
        render_dom(&profile, today(), &mut document);
        assert_eq!(first, document);
    }

    #[test]
    fn test_render_dom_only_touches_present_mounts() {
        let profile = sample_profile();
        let mut document = Document::with_mounts([MountPoint::EducationList]);
        assert_eq!(render_dom(&profile, today(), &mut document), 1);
        assert!(!document.has_mount(MountPoint::SkillsGrid));
    }

    #[test]
    fn test_highlights_use_icon_lookup_with_default() {
        let profile = sample_profile();
        let html = render_highlights(&profile.about.highlights);
        assert_eq!(
            select_text(&html, "h3"),
            vec!["Automation", "Platforms", "Mystery"]
        );
        // third card has an unknown key and gets the code icon
        assert!(html.contains(HighlightIcon::Code.svg()));
        assert!(html.contains("text-purple-400 mb-3"));
    }

    #[test]
    fn test_experience_preserves_order_and_markers() {
        let profile = sample_profile();
        let html = render_experience(&profile.experience);
        assert_eq!(select_text(&html, "h3"), vec!["Senior Engineer", "Engineer"]);
        assert_eq!(
            select_text(&html, "h4"),
            vec!["// General", "// Leadership", "// Delivery"]
        );
        assert_eq!(html.matches(ITEM_MARKER).count(), 4);
        assert_eq!(html.matches("Zurich").count(), 1);
        assert!(html.contains("text-green-400 mt-2"));
    }

    #[test]
    fn test_skills_grouped_flat_and_empty() {
        let profile = sample_profile();
        let html = render_skills(&profile.skills);
        assert_eq!(
            select_text(&html, "h3"),
            vec!["// Programming", "// AI / ML"]
        );
        assert_eq!(html.matches("md:grid-cols-2").count(), 1);
        assert_eq!(
            select_text(&html, "p.text-gray-500"),
            vec!["Frameworks", "Serving"]
        );
        assert_eq!(select_text(&html, "span.rounded-full").len(), 5);
    }

    #[test]
    fn test_skill_group_without_shape_renders_nothing() {
        let skills = SkillSet::new(vec![(
            "tools".to_string(),
            SkillGroup {
                title: "Tools".to_string(),
                categories: None,
                items: None,
            },
        )]);
        assert_eq!(render_skills(&skills), "");
    }

    #[test]
    fn test_certification_link_only_when_present() {
        let profile = sample_profile();
        let html = render_certifications(&profile.certifications);
        let fragment = Html::parse_fragment(&html);
        let links: Vec<_> = fragment
            .select(&Selector::parse("a").unwrap())
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(links, vec!["https://certs.example.com/ada"]);
        assert_eq!(html.matches("Expires: 2025").count(), 1);
        assert_eq!(html.matches("Expires:").count(), 1);
    }

    #[test]
    fn test_certification_without_url_has_no_link() {
        let profile = sample_profile();
        let html = render_certifications(&profile.certifications[1..]);
        assert!(!html.contains("<a "));
        assert!(!html.contains("View Credential"));
    }

    #[test]
    fn test_profile_text_is_escaped() {
        let profile = sample_profile();
        assert_eq!(
            render_profile_text(&profile).as_deref(),
            Some("Builds &lt;reliable&gt; ML systems.")
        );
    }

    #[test]
    fn test_profile_text_keeps_whitespace_only_summary() {
        let mut profile = sample_profile();
        profile.about.profile = "   ".to_string();
        assert_eq!(render_profile_text(&profile).as_deref(), Some("   "));

        profile.about.profile = String::new();
        assert_eq!(render_profile_text(&profile), None);
    }

    #[test]
    fn test_bad_start_date_skips_counter() {
        let mut profile = sample_profile();
        profile.personal.career_start_date = Some("someday".to_string());
        assert_eq!(render_experience_years(&profile, today()), None);
    }
}
