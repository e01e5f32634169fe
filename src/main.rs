#[tokio::main]
async fn main() {
    improfestivals_backend::run().await;
}
