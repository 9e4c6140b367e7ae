#[tokio::main]
async fn main() {
    parkeasy_backend::run().await;
}
