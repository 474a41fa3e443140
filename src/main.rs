#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    csv_normalizer_lib::run().await?;
    Ok(())
}
