//! Configuration section definitions.
//!
//! Each module corresponds to a section in `easyloops.toml`:
//!
//! | Module      | TOML Section    | Purpose                                |
//! |-------------|-----------------|----------------------------------------|
//! | `site`      | `[site]`        | Site name, home page text, base URL    |
//! | `sitemap`   | `[sitemap]`     | Sitemap output and strictness          |
//! | `questions` | `[questions]`   | Question identifier source             |
//! | `wiki`      | `[wiki]`        | Wiki slug registry                     |
//! | `meta`      | `[meta]`        | Page metadata wording                  |
//! | `serve`     | `[serve]`       | Preview server                         |
//! | `e2e`       | `[e2e]`         | Browser test harness                   |

mod e2e;
mod meta;
mod questions;
mod serve;
mod site;
mod sitemap;
mod wiki;

pub use e2e::{E2eConfig, RetriesConfig, WebServerConfig, WorkersConfig};
pub use meta::MetaConfig;
pub use questions::{QuestionSourceKind, QuestionsConfig};
pub use serve::ServeConfig;
pub use site::SiteInfoConfig;
pub use sitemap::SitemapConfig;
pub use wiki::{DEFAULT_WIKI_SLUGS, WikiConfig};
