//! `harvest scan` — run the full pipeline against a local image file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use harvest_core::{DocKind, ScanError, ScanRecord};
use harvest_gateway::GatewayConfig;
use harvest_media::{detect_mime_type, is_image};

pub async fn run(image: &Path, kind: DocKind, config: &GatewayConfig) -> Result<()> {
    let mime_type = detect_mime_type(image);
    if !is_image(mime_type) {
        bail!("{} does not look like an image file", image.display());
    }
    let bytes = std::fs::read(image)
        .with_context(|| format!("failed to read {}", image.display()))?;

    let provider = config.vision_provider()?;
    let raw = harvest_vision::scan_image(
        &provider,
        &bytes,
        mime_type,
        kind,
        config.request_timeout(),
    )
    .await?;

    let doc = harvest_extract::extract(&raw)?;
    let record = harvest_extract::validate(&doc, kind).map_err(ScanError::Invalid)?;

    print_record(&record)?;
    Ok(())
}

fn print_record(record: &ScanRecord) -> Result<()> {
    match record {
        ScanRecord::Recipe(recipe) => {
            let title = if recipe.title.is_empty() { "(untitled)" } else { &recipe.title };
            println!("Recipe: {title}\n");
            println!("Ingredients:");
            for ingredient in &recipe.ingredients {
                let mut line = format!("- {}", ingredient.item);
                if !ingredient.amount.is_empty() {
                    line.push_str(&format!(" ({})", ingredient.amount));
                }
                if !ingredient.notes.is_empty() {
                    line.push_str(&format!(", {}", ingredient.notes));
                }
                println!("{line}");
            }
            println!("\nInstructions:");
            for (i, step) in recipe.instructions.iter().enumerate() {
                println!("{}. {}", i + 1, step);
            }
        }
        ScanRecord::Invoice(_) => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
    }
    Ok(())
}
