use anyhow::{Context, Result};

use ipl26_data::{merge, store};

fn main() -> Result<()> {
    let dataset_path = store::dataset_path();
    let teams = store::load_dataset(&dataset_path).context("dataset missing; run seed first")?;

    let missing = merge::missing_roster_details(&teams);
    println!("Found {} players with missing data.", missing.len());
    for (name, code) in &missing {
        println!("{name} ({code})");
    }
    Ok(())
}
