use route_trie::hyper_service::{not_found, BoxHandler, Response};
use route_trie::{HttpRouter, Params};

use std::convert::Infallible as Never;

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::Request;
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn hello(_: Request<Incoming>, params: Params) -> Result<Response, Never> {
    let name = params.get("name").unwrap_or("stranger");
    Ok(Response::new(format!("hello, {}!", name).into()))
}

async fn file(_: Request<Incoming>, params: Params) -> Result<Response, Never> {
    let dir = params.get("dir").unwrap_or_default();
    let name = params.get("name").unwrap_or_default();
    Ok(Response::new(format!("access file: {}/{}", dir, name).into()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let router: HttpRouter<BoxHandler<Incoming>> = HttpRouter::with_fallback(not_found);
    router
        .get("/hello/:name", hello)
        .get("/api/v1/files/{dir}/{name}", file);
    let service = router.into_service();

    let addr = "127.0.0.1:3000";
    let listener = TcpListener::bind(addr).await?;

    info!("Server is listening on: http://{}", addr);
    info!("hello: http://{}/hello/world", addr);
    info!("api: http://{}/api/v1/files/public/readme", addr);
    info!("404: http://{}/other/path", addr);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let service = service.clone();
        tokio::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!(%err, "connection failed");
            }
        });
    }
}
