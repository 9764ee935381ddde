//! `sitemaps.org` XML rendering.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://easyloops.app</loc>
//!     <lastmod>2026-10-19T08:00:00Z</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use super::entry::SiteEntry;
use quick_xml::escape::escape;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render entries as an indented sitemap document.
pub fn render(entries: &[SiteEntry]) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape(entry.url.as_str()));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.last_modified.to_rfc3339());
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.change_frequency.as_str());
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(&entry.priority.to_string());
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}
