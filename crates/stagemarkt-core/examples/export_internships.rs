//! Search internships with details and export them to Excel
//!
//! Set `RUST_LOG=stagemarkt_core=info` to hide the per-request logging.

use serde_json::json;
use stagemarkt_core::export::{Column, XlsxExporter};
use stagemarkt_core::{InternshipDetail, InternshipQuery, Level, Radius, StagemarktClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stagemarkt_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = StagemarktClient::new()?;
    let query = InternshipQuery::new(Level::Mbo4, "Amsterdam", 25998)
        .radius(Radius::Km25)
        .limit(Some(40));

    println!(
        "Searching internships (level {}, {} within {} km)...",
        query.level.value(),
        query.place,
        query.radius.km()
    );
    let internships = client.search_internships_detailed(&query).await?;
    println!("Fetched {} internships", internships.len());

    let link_query = query.clone();
    let columns: Vec<Column<InternshipDetail>> = vec![
        Column::new("Bedrijfsnaam", "organisation.name"),
        Column::new("Straat", "address.street"),
        Column::new("Huisnummer", "address.house_number"),
        Column::new("Postcode", "address.postcode"),
        Column::new("Plaats", "address.city"),
        Column::new("Telefoonnummer", "phone"),
        Column::new("Email", "email").fallback("organisation.email"),
        Column::new("Website", "website").fallback("organisation.website"),
        Column::new("Contactpersoon", "contact_person"),
        Column::computed("Stagemarkt link", move |detail: &InternshipDetail| {
            json!(detail.internship.link(&link_query))
        }),
    ];

    let written = XlsxExporter::new()
        .sheet_name("Stages")
        .export("stages_export.xlsx", &internships, &columns)?;
    println!("Exported {} rows to stages_export.xlsx", written);

    Ok(())
}
