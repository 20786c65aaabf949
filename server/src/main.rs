// main.rs

use std::{net::SocketAddr, sync::Arc};

use hyper::{server::conn::Http, service::service_fn};
use log::{error, info};
use tokio::net::TcpListener;

use portfolio_server::{service_handler, Store};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Bind a TCP listener (port from env or default to 5000).
    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");

    let store = Arc::new(Store::seeded());

    loop {
        let (stream, _peer_addr) = listener.accept().await?;
        stream.set_nodelay(true).ok();

        let store = store.clone();
        // Spawn a task per connection.
        tokio::spawn(async move {
            let service = service_fn(move |req| service_handler(req, store.clone()));
            if let Err(e) = Http::new().serve_connection(stream, service).await {
                error!("error serving connection: {e:?}");
            }
        });
    }
}
