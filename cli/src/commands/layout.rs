//! Layout command: print the layout in effect as JSON

use crate::config::LoadedLayout;
use anyhow::{Context, Result};
use tracing::info;

/// Print the loaded layout, ready to be saved as `tieba.json`
pub async fn layout_command(loaded: LoadedLayout) -> Result<()> {
    info!(source = %loaded.source, "printing layout");
    let json =
        serde_json::to_string_pretty(&loaded.layout).context("Failed to serialize layout")?;
    println!("{}", json);
    Ok(())
}
