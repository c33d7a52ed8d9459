//! Search training companies and export their details

use stagemarkt_core::export::{Column, XlsxExporter};
use stagemarkt_core::{OrganisationDetail, OrganisationQuery, Radius, StagemarktClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stagemarkt_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = StagemarktClient::new()?;
    let query = OrganisationQuery::new("Amsterdam", 25998).radius(Radius::Km15);

    println!(
        "Searching organisations for crebo {} in '{}'...",
        query.crebo_code, query.place
    );
    let organisations = client.search_organisations_detailed(&query).await?;
    println!("Found {} organisations", organisations.len());

    if organisations.is_empty() {
        return Ok(());
    }

    let columns: Vec<Column<OrganisationDetail>> = vec![
        Column::new("Naam", "name"),
        Column::new("Plaats", "address.city"),
        Column::new("Straat", "address.street"),
        Column::new("Website", "website"),
        Column::new("Email", "email"),
        Column::new("Telefoon", "phone"),
        Column::new("Aantal leerplaatsen", "internship_count"),
        Column::new("Leerbedrijf ID", "company_id"),
    ];
    XlsxExporter::new()
        .title(format!("Leerbedrijven crebo {}", query.crebo_code))
        .export("organisaties_export.xlsx", &organisations, &columns)?;
    println!("Exported to organisaties_export.xlsx");

    Ok(())
}
