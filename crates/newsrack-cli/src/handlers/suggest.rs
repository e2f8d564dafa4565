use crate::args::OutputFormat;
use anyhow::Result;
use newsrack_runtime::{BrowseSession, PaginationStatus};
use std::time::Instant;

pub async fn handle(
    session: &mut BrowseSession,
    prefix: &str,
    format: OutputFormat,
) -> Result<()> {
    loop {
        session.on_load_more_requested().await?;
        if session.status() != PaginationStatus::Idle {
            break;
        }
    }

    // Suggestions track the raw query; no debounce to wait out.
    session.on_search_input(prefix, Instant::now());
    let view = session.view_model();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view.suggestions)?);
        return Ok(());
    }

    if view.suggestions.is_empty() {
        println!("No suggestions for \"{}\"", prefix);
        return Ok(());
    }

    for suggestion in &view.suggestions {
        println!("{}", suggestion);
    }

    Ok(())
}
