#[tokio::main]
async fn main() {
    if let Err(e) = deutsch_lern::start_server().await {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
