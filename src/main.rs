#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    seminars_frontend::run().await
}
