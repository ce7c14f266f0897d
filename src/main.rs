use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use brumby::engine::Engine;
use brumby::server::serve;
use brumby::store::FileRepository;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let routes_file = env::var("ROUTES_FILE").unwrap_or_else(|_| "data/routes.json".into());
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".into())
        .parse()
        .unwrap();

    let engine = Engine::new(Arc::new(FileRepository::new(routes_file)));

    serve(engine, addr).await;
}
