// src/render/markdown.rs
//! Markdown projection of the profile, used for clipboard export and downloads

use crate::types::profile::{present, Profile, SkillShape};

/// Responsibility category rendered without its own sub-heading
pub const GENERAL_CATEGORY: &str = "General";

/// Render the whole profile as one Markdown document.
pub fn render_markdown(profile: &Profile) -> String {
    let mut md = String::new();

    push_header(&mut md, profile);
    push_contact(&mut md, profile);
    push_summary(&mut md, profile);
    push_experience(&mut md, profile);
    push_skills(&mut md, profile);
    push_education(&mut md, profile);
    push_certifications(&mut md, profile);
    push_interests(&mut md, profile);

    md
}

fn push_header(md: &mut String, profile: &Profile) {
    md.push_str(&format!("# {}\n\n", profile.personal.name));
    md.push_str(&format!("**{}**\n\n", profile.personal.title));
}

fn push_contact(md: &mut String, profile: &Profile) {
    let personal = &profile.personal;
    let social = &profile.social;

    md.push_str("## Contact\n\n");
    md.push_str(&format!(
        "- 📧 Email: [{}](mailto:{})\n",
        personal.email, personal.email
    ));
    md.push_str(&format!("- 📱 Phone: {}\n", personal.phone));
    md.push_str(&format!("- 📍 Location: {}\n", personal.location));

    let links = [
        ("💼 LinkedIn", present(social.linkedin.as_ref())),
        ("🐦 Twitter", present(social.twitter.as_ref())),
        ("💻 GitHub", present(social.github.as_ref())),
    ];
    for (label, url) in links {
        if let Some(url) = url {
            md.push_str(&format!("- {}: [{}]({})\n", label, url, url));
        }
    }
    md.push('\n');
}

fn push_summary(md: &mut String, profile: &Profile) {
    md.push_str("## Profile\n\n");
    md.push_str(&format!("{}\n\n", profile.about.profile));
}

fn push_experience(md: &mut String, profile: &Profile) {
    md.push_str("## Work Experience\n\n");
    for job in &profile.experience {
        md.push_str(&format!("### {}\n", job.title));

        let location = present(job.location.as_ref())
            .map(|loc| format!(" | 📍 {}", loc))
            .unwrap_or_default();
        md.push_str(&format!(
            "**{}**{} | {} - {}\n\n",
            job.company, location, job.start_date, job.end_date
        ));

        for group in &job.responsibilities {
            if group.category != GENERAL_CATEGORY {
                md.push_str(&format!("#### {}\n\n", group.category));
            }
            for item in &group.items {
                md.push_str(&format!("- {}\n", item));
            }
            md.push('\n');
        }
    }
}

fn push_skills(md: &mut String, profile: &Profile) {
    md.push_str("## Technical Skills\n\n");
    for (_, group) in profile.skills.iter() {
        match group.shape() {
            SkillShape::Grouped(categories) => {
                md.push_str(&format!("### {}\n\n", group.title));
                for category in categories {
                    md.push_str(&format!(
                        "**{}:** {}\n\n",
                        category.name,
                        category.items.join(", ")
                    ));
                }
            }
            SkillShape::Flat(items) => {
                md.push_str(&format!("### {}\n\n", group.title));
                md.push_str(&format!("{}\n\n", items.join(", ")));
            }
            SkillShape::Empty => {}
        }
    }
}

fn push_education(md: &mut String, profile: &Profile) {
    md.push_str("## Education\n\n");
    for degree in &profile.education {
        md.push_str(&format!("### {}\n", degree.degree));
        md.push_str(&format!(
            "**{}** | {} - {}\n\n",
            degree.institution, degree.start_date, degree.end_date
        ));
    }
}

fn push_certifications(md: &mut String, profile: &Profile) {
    md.push_str("## Certifications\n\n");
    for cert in &profile.certifications {
        md.push_str(&format!(
            "- **{}** - {} ({})",
            cert.name, cert.issuer, cert.issue_date
        ));
        if let Some(url) = present(cert.credential_url.as_ref()) {
            md.push_str(&format!(" [View Credential]({})", url));
        }
        md.push('\n');
    }
    md.push('\n');
}

fn push_interests(md: &mut String, profile: &Profile) {
    if profile.interests.is_empty() {
        return;
    }
    md.push_str("## Interests\n\n");
    md.push_str(&profile.interests.join(" | "));
    md.push('\n');
}
