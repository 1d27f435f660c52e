#[tokio::main]
async fn main() {
    if let Err(e) = welcome_cover::server::run().await {
        eprintln!("welcome-cover server stopped: {}", e);
        std::process::exit(1);
    }
}
