//! Preview server for the sitemap and page metadata.
//!
//! Every sitemap request queries the question source again, so the output
//! always reflects the current data.

mod lifecycle;
mod response;
mod route;

use std::sync::Arc;

use anyhow::Result;
use tiny_http::{Request, Server};
use tokio::runtime::Runtime;

use crate::config::SiteConfig;
use crate::generator::{
    minify_xml,
    sitemap::{self, SiteEntry, xml},
};
use crate::seo::{listing_metadata, question_metadata, root_metadata, wiki_metadata};
use crate::source::AnySource;
use crate::{debug, log};
use response::{Reply, is_readable_method};
use route::{Route, route};

/// Request handler threads.
const WORKERS: usize = 4;

/// Bind and serve until Ctrl+C.
pub fn serve(config: &SiteConfig) -> Result<()> {
    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    lifecycle::register_for_shutdown(&server);

    log!("serve"; "http://{}/sitemap.xml", addr);
    debug!("serve"; "also /sitemap.json, /meta, /meta/questions/<id>, /meta/wiki/<slug>, /health");

    run_request_loop(&server, config)
}

thread_local! {
    /// Per-worker runtime for question source queries.
    static RUNTIME: std::io::Result<Runtime> = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build();
}

/// Hand requests to a fixed thread pool until the server is unblocked.
fn run_request_loop(server: &Server, config: &SiteConfig) -> Result<()> {
    // a slow question source must not block other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .thread_name(|i| format!("serve-{i}"))
        .build()?;

    // accept on this thread so every pool thread is free for requests
    pool.in_place_scope(|scope| {
        for request in server.incoming_requests() {
            scope.spawn(move |_| {
                let result = RUNTIME.with(|runtime| match runtime {
                    Ok(runtime) => handle_request(request, config, runtime),
                    Err(e) => Err(anyhow::anyhow!("worker runtime unavailable: {e}")),
                });
                if let Err(e) = result {
                    log!("serve"; "request error: {e}");
                }
            });
        }
    });
    Ok(())
}

fn handle_request(request: Request, config: &SiteConfig, runtime: &Runtime) -> Result<()> {
    let reply = if crate::core::is_shutdown() {
        Reply::unavailable()
    } else if !is_readable_method(request.method()) {
        Reply::method_not_allowed()
    } else {
        debug!("serve"; "{} {}", request.method(), request.url());
        dispatch(request.url(), config, runtime)
    };
    response::send(request, reply)
}

/// Build the reply for a `GET` of `url`.
fn dispatch(url: &str, config: &SiteConfig, runtime: &Runtime) -> Reply {
    match route(url) {
        Route::SitemapXml => match fresh_entries(config, runtime) {
            Ok(entries) => {
                let xml = xml::render(&entries);
                Reply::xml(minify_xml(&xml, config.sitemap.minify).into_owned())
            }
            Err(e) => Reply::error(&e),
        },
        Route::SitemapJson => match fresh_entries(config, runtime) {
            Ok(entries) => Reply::json(200, &entries),
            Err(e) => Reply::error(&e),
        },
        Route::RootMeta => Reply::json(200, &root_metadata(config)),
        Route::ListingMeta => Reply::json(200, &listing_metadata(config)),
        Route::QuestionMeta(id) => Reply::json(200, &question_metadata(config, &id)),
        Route::WikiMeta(slug) => {
            let meta = wiki_metadata(config, &slug);
            let status = if meta.is_not_found() { 404 } else { 200 };
            Reply::json(status, &meta)
        }
        Route::Health => Reply::text(200, "ok"),
        Route::NotFound => Reply::not_found(),
    }
}

fn fresh_entries(config: &SiteConfig, runtime: &Runtime) -> Result<Vec<SiteEntry>> {
    let source = AnySource::from_config(&config.questions);
    runtime.block_on(sitemap::generate(config, &source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config_at;
    use tempfile::TempDir;

    fn runtime() -> Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    fn body(reply: &Reply) -> String {
        String::from_utf8(reply.body.clone()).unwrap()
    }

    #[test]
    fn test_dispatch_sitemap_xml() {
        let config = test_config_at(
            std::path::Path::new("/srv"),
            "[questions]\nsource = \"list\"\nlist = [\"two-sum\"]\n[wiki]\nslugs = [\"arrays\"]",
        );
        let reply = dispatch("/sitemap.xml", &config, &runtime());

        assert_eq!(reply.status, 200);
        let xml = body(&reply);
        assert!(xml.contains("<loc>https://easyloops.app/questions/two-sum</loc>"));
        assert!(xml.contains("<loc>https://easyloops.app/wiki/arrays</loc>"));
    }

    #[test]
    fn test_dispatch_sitemap_json() {
        let config = test_config_at(
            std::path::Path::new("/srv"),
            "[questions]\nsource = \"list\"\n[wiki]\nslugs = []",
        );
        let reply = dispatch("/sitemap.json", &config, &runtime());

        let json: serde_json::Value = serde_json::from_slice(&reply.body).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[1]["changeFrequency"], "daily");
    }

    #[test]
    fn test_dispatch_source_failure_is_500() {
        let dir = TempDir::new().unwrap();
        let config = test_config_at(dir.path(), "[questions]\ndir = \"missing\"");

        let reply = dispatch("/sitemap.xml", &config, &runtime());
        assert_eq!(reply.status, 500);
        assert!(body(&reply).contains("question identifiers"));
    }

    #[test]
    fn test_dispatch_meta() {
        let config = test_config_at(std::path::Path::new("/srv"), "");
        let rt = runtime();

        let reply = dispatch("/meta/wiki/recursion", &config, &rt);
        assert_eq!(reply.status, 200);
        assert!(body(&reply).contains("EasyLoops Wiki - Recursion"));

        let reply = dispatch("/meta/wiki/quantum-computing", &config, &rt);
        assert_eq!(reply.status, 404);
        assert_eq!(body(&reply), r#"{"title":"Page Not Found"}"#);

        let reply = dispatch("/meta/questions/two-sum", &config, &rt);
        assert!(body(&reply).contains("/questions/two-sum"));
    }

    #[test]
    fn test_request_loop_answers_and_stops() {
        let config = test_config_at(std::path::Path::new("/srv"), "");
        let server = Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();

        std::thread::scope(|scope| {
            let handle = scope.spawn(|| run_request_loop(&server, &config));

            let mut stream = std::net::TcpStream::connect(("127.0.0.1", port)).unwrap();
            std::io::Write::write_all(
                &mut stream,
                b"GET /health HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n",
            )
            .unwrap();
            let mut reply = String::new();
            std::io::Read::read_to_string(&mut stream, &mut reply).unwrap();
            assert!(reply.starts_with("HTTP/1.1 200"));
            assert!(reply.ends_with("ok"));

            server.unblock();
            assert!(handle.join().unwrap().is_ok());
        });
    }

    #[test]
    fn test_dispatch_health_and_unknown() {
        let config = test_config_at(std::path::Path::new("/srv"), "");
        let rt = runtime();

        assert_eq!(body(&dispatch("/health", &config, &rt)), "ok");
        assert_eq!(dispatch("/index.html", &config, &rt).status, 404);
    }
}
