//! Content file generation.
//!
//! An issue becomes a file consisting solely of a frontmatter block. The body
//! supplies the lead (and optionally a leading image); when it supplies no
//! lead, the title is used as the lead instead and no separate title is
//! emitted.

mod frontmatter;
mod image;

pub use frontmatter::{Frontmatter, DELIMITER, LINE_ENDING};
pub use image::LeadingImage;

use crate::issue::Issue;

/// Generates the full text of the content file for `issue`.
#[must_use]
pub fn generate(issue: &Issue) -> String {
    build_frontmatter(issue).render()
}

/// Derives the frontmatter fields for `issue`.
#[must_use]
pub fn build_frontmatter(issue: &Issue) -> Frontmatter {
    let mut frontmatter = Frontmatter {
        date: issue.closed_at.clone(),
        tags: issue.label_names().map(str::to_string).collect(),
        ..Default::default()
    };

    let mut lead = "";
    if let Some(body) = issue.body.as_deref().filter(|b| !b.is_empty()) {
        match LeadingImage::extract(body) {
            Some(image) => {
                frontmatter.image_alt = Some(image.alt.to_string());
                frontmatter.image = Some(image.url.to_string());
                lead = trim(image.rest);
            }
            None => lead = trim(body),
        }
    }

    if lead.is_empty() {
        frontmatter.lead = issue.title.clone();
    } else {
        frontmatter.lead = lead.to_string();
        frontmatter.title = Some(issue.title.clone());
    }

    frontmatter
}

/// Strips leading and trailing whitespace and byte order marks.
///
/// NEL (U+0085) is not treated as whitespace here.
fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}
