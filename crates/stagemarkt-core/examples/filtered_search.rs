//! Search with learning path and keyword filters

use stagemarkt_core::export::{Column, to_csv};
use stagemarkt_core::{
    InternshipDetail, InternshipQuery, LearningPath, Level, Radius, SearchFilters,
    StagemarktClient,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stagemarkt_core=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let client = StagemarktClient::new()?;
    let filters = SearchFilters::new()
        .learning_path(LearningPath::Bol)
        .keyword("software");
    let query = InternshipQuery::new(Level::Mbo4, "Amsterdam", 25998)
        .radius(Radius::Km15)
        .filters(filters);

    println!("Searching with filters {:?}", query.filters);
    let internships = client.search_internships_detailed(&query).await?;
    println!("Fetched {} filtered internships", internships.len());

    if internships.is_empty() {
        println!("No internships match these filters.");
        return Ok(());
    }

    let columns: Vec<Column<InternshipDetail>> = vec![
        Column::new("Bedrijfsnaam", "organisation.name"),
        Column::new("Titel", "title"),
        Column::new("Leerweg", "learning_path"),
        Column::new("Plaats", "address.city"),
        Column::new("Email", "organisation.email"),
        Column::new("Website", "organisation.website"),
    ];
    to_csv("stages_filtered_export.csv", &internships, &columns)?;
    println!("Exported to stages_filtered_export.csv");

    Ok(())
}
