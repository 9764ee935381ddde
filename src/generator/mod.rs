//! Generated artifacts.
//!
//! - **Sitemap**: `sitemap.xml` for search engine indexing, rebuilt from the
//!   question source and the wiki registry on every run.

pub mod sitemap;

use std::borrow::Cow;

/// Strip indentation and line breaks from generated XML.
pub fn minify_xml(xml: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(xml);
    }
    Cow::Owned(
        xml.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = "<?xml version=\"1.0\"?>\n<urlset>\n  <url>\n    <loc>https://easyloops.app</loc>\n  </url>\n</urlset>\n";
        assert_eq!(
            minify_xml(xml, true),
            "<?xml version=\"1.0\"?><urlset><url><loc>https://easyloops.app</loc></url></urlset>"
        );
    }

    #[test]
    fn test_minify_xml_keeps_inner_spaces() {
        assert_eq!(minify_xml("  <tag>  a  b  </tag>  ", true), "<tag>  a  b  </tag>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = "<root>\n  <item/>\n</root>";
        assert!(matches!(minify_xml(xml, false), Cow::Borrowed(s) if s == xml));
    }
}
