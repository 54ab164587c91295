//! Local preview server for published blobs.
//!
//! Serves one blob the way the edge worker would: the page at the root,
//! the collected stylesheet at `/style.css`. The blob is re-read per
//! request, so a republish shows up on the next refresh.

use crate::config::AppConfig;
use crate::log;
use crate::publish::{EdgeStore, FsEdgeStore};
use crate::section::Visibility;
use anyhow::Result;
use std::net::{IpAddr, SocketAddr};
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

const HTML: &str = "text/html; charset=utf-8";
const CSS: &str = "text/css; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";

/// Serve one published blob until interrupted.
pub fn run_preview(
    key: &str,
    interface: Option<IpAddr>,
    port: Option<u16>,
    config: &AppConfig,
) -> Result<()> {
    let edge = FsEdgeStore::from_config(config);
    let Some(blob) = edge.read(key)? else {
        anyhow::bail!("no published blob for `{key}`, run `lands publish {key}` first");
    };
    if blob.visibility != Visibility::Public {
        log!("preview"; "`{key}` is {}, the gate is not enforced locally", blob.visibility.as_str());
    }

    let interface = interface.unwrap_or(config.preview.interface);
    let base_port = port.unwrap_or(config.preview.port);
    let (server, addr) = bind_with_retry(interface, base_port)?;

    log!("preview"; "http://{addr}/ -> `{key}`");
    for request in server.incoming_requests() {
        if let Err(e) = handle_request(request, &edge, key) {
            log!("preview"; "request error: {e}");
        }
    }
    Ok(())
}

/// Bind to the requested interface and port, with automatic port retry.
fn bind_with_retry(interface: IpAddr, base_port: u16) -> Result<(Server, SocketAddr)> {
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("preview"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(_) if offset + 1 < MAX_PORT_RETRIES => continue,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Failed to bind after {} attempts (ports {}-{}): {}",
                    MAX_PORT_RETRIES,
                    base_port,
                    port,
                    e
                ));
            }
        }
    }
    unreachable!()
}

/// Handle a single HTTP request
fn handle_request(request: Request, edge: &FsEdgeStore, key: &str) -> Result<()> {
    let Some(blob) = edge.read(key)? else {
        return send_body(request, 404, PLAIN, b"404 Not Found".to_vec());
    };

    match request.url() {
        "/" | "/index.html" => send_body(request, 200, HTML, blob.html.into_bytes()),
        "/style.css" => send_body(request, 200, CSS, blob.css.into_bytes()),
        _ => send_body(request, 404, PLAIN, b"404 Not Found".to_vec()),
    }
}

fn send_body(request: Request, status: u16, content_type: &'static str, body: Vec<u8>) -> Result<()> {
    if request.method() == &Method::Head {
        let response =
            Response::empty(StatusCode(status)).with_header(make_header("Content-Type", content_type));
        request.respond(response)?;
        return Ok(());
    }

    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type));
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Header {
    Header::from_bytes(key, value).unwrap()
}
