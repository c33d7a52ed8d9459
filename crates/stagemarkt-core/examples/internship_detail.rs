//! Fetch one internship by id and save it as JSON

use stagemarkt_core::StagemarktClient;
use stagemarkt_core::export::JsonExporter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stagemarkt_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8e1bf027-f865-4bea-b0a2-c5c00572f21a-25998".to_string());

    let client = StagemarktClient::new()?;
    let detail = client.internship_detail(&id).await?;

    println!("Details for: {}", detail.internship.title);
    println!(
        "   Organisation: {}",
        detail.internship.organisation_name().unwrap_or("unknown")
    );
    if let Some(address) = &detail.internship.address {
        println!("   Address: {}", address.one_line());
    }
    if let Some(ends_at) = detail.ends_at() {
        println!("   Ends: {}", ends_at.date());
    }

    let output = format!("stage_{}.json", id);
    JsonExporter::new().export(&output, std::slice::from_ref(&detail), &[])?;
    println!("Saved to {}", output);

    Ok(())
}
