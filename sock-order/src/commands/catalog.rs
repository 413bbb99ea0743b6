use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shared::order::{case_pack, is_orderable};
use sock_client::FormData;

#[derive(Args, Debug)]
#[command(about = "Show parks, styles and what can be ordered")]
pub struct CatalogArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct SizeRow {
    style_id: String,
    style_name: String,
    size: String,
    label: String,
    available: bool,
    pairs_per_case: u32,
    orderable: bool,
}

pub async fn execute(args: CatalogArgs) -> Result<()> {
    let (_, _, data) = super::load_form().await?;
    let rows = size_rows(&data);

    match args.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "parks": data.catalog.parks,
                "sizes": rows,
                "availabilityUpdatedAt": data.availability.updated_at,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(&data, &rows),
    }
    Ok(())
}

fn size_rows(data: &FormData) -> Vec<SizeRow> {
    let catalog = &data.catalog;
    let availability = &data.availability;
    catalog
        .styles
        .iter()
        .flat_map(|style| {
            style.sizes.iter().map(move |size| SizeRow {
                style_id: style.id.clone(),
                style_name: style.name.clone(),
                size: size.code().to_string(),
                label: size.label().to_string(),
                available: availability.is_available(&style.id, size),
                pairs_per_case: case_pack::resolve(style, size, catalog),
                orderable: is_orderable(catalog, availability, style, size),
            })
        })
        .collect()
}

fn print_human(data: &FormData, rows: &[SizeRow]) {
    println!("Parks:");
    for (idx, park) in data.catalog.parks.iter().enumerate() {
        let marker = if idx == 0 { " (default)" } else { "" };
        println!("  {:<12} {}{}", park.id, park.display_name(), marker);
    }

    if let Some(updated) = &data.availability.updated_at {
        println!("\nAvailability as of {updated}");
    }

    let mut current_style = None;
    for row in rows {
        if current_style != Some(&row.style_id) {
            println!("\n{} ({})", row.style_name, row.style_id);
            current_style = Some(&row.style_id);
        }
        let status = match (row.available, row.orderable) {
            (true, true) => format!("{} pairs/case", row.pairs_per_case),
            (true, false) => "no case pack".to_string(),
            (false, _) => "unavailable".to_string(),
        };
        println!("  {:<8} {:<10} {}", row.size, row.label, status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{AvailabilityMap, Catalog};

    #[test]
    fn test_size_rows() {
        let data = FormData {
            catalog: Catalog::from_json(
                r#"{
                    "styles": [{"id": "skyblue", "name": "Sky Blue", "sizes": ["T", "S"]}],
                    "casePacks": {"defaultMain": {"T": 6}, "byStyle": {"skyblue": {"S": 4}}}
                }"#,
            )
            .unwrap(),
            availability: AvailabilityMap::from_json(
                r#"{"styles": {"skyblue": {"T": true, "S": true}}}"#,
            )
            .unwrap(),
        };
        let rows = size_rows(&data);
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].size.as_str(), rows[0].pairs_per_case, rows[0].orderable), ("T", 0, false));
        assert_eq!((rows[1].size.as_str(), rows[1].pairs_per_case, rows[1].orderable), ("S", 4, true));
        assert_eq!(rows[0].label, "Toddler");
    }
}
