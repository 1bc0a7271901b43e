//! Leading image extraction from issue bodies.

use regex::Regex;
use std::sync::LazyLock;

/// `![alt](url)` at the very start of the body, then anything (newlines included).
static LEADING_IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^!\[(.+)\]\((.+)\)(.*)").expect("leading image pattern is valid")
});

/// An image reference found at the start of an issue body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingImage<'a> {
    /// Alt text between the brackets.
    pub alt: &'a str,

    /// Image URL between the parentheses.
    pub url: &'a str,

    /// Everything after the closing parenthesis, untrimmed.
    pub rest: &'a str,
}

impl<'a> LeadingImage<'a> {
    /// Matches the whole body against the leading image pattern.
    ///
    /// Captures are greedy: the alt text extends to the last `](` and the URL
    /// to the last `)` that still allow a match.
    #[must_use]
    pub fn extract(body: &'a str) -> Option<Self> {
        let captures = LEADING_IMAGE.captures(body)?;
        Some(Self {
            alt: captures.get(1)?.as_str(),
            url: captures.get(2)?.as_str(),
            rest: captures.get(3).map_or("", |m| m.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_image_and_multiline_rest() {
        let image =
            LeadingImage::extract("![hw-wix](https://example.com/a.png)\r\n\r\nLine one\nLine two")
                .unwrap();

        assert_eq!(image.alt, "hw-wix");
        assert_eq!(image.url, "https://example.com/a.png");
        assert_eq!(image.rest, "\r\n\r\nLine one\nLine two");
    }

    #[test]
    fn image_only_has_empty_rest() {
        let image = LeadingImage::extract("![alt](url)").unwrap();

        assert_eq!(image.rest, "");
    }

    #[test]
    fn image_must_be_at_start() {
        assert!(LeadingImage::extract("Intro\n![alt](url)").is_none());
        assert!(LeadingImage::extract(" ![alt](url)").is_none());
    }

    #[test]
    fn empty_alt_or_url_does_not_match() {
        assert!(LeadingImage::extract("![](url) text").is_none());
        assert!(LeadingImage::extract("![alt]() text").is_none());
    }

    #[test]
    fn url_capture_is_greedy() {
        let image = LeadingImage::extract("![alt](url) see (note) here").unwrap();

        assert_eq!(image.url, "url) see (note");
        assert_eq!(image.rest, " here");
    }
}
