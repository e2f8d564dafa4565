use crate::args::OutputFormat;
use anyhow::Result;
use newsrack_engine::highlight;
use newsrack_runtime::{BrowseSession, PaginationStatus};
use owo_colors::OwoColorize;
use std::time::{Duration, Instant};

pub async fn handle(
    session: &mut BrowseSession,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    // Pull the whole feed so the search sees everything, the way a user who
    // kept scrolling would.
    loop {
        session.on_load_more_requested().await?;
        if session.status() != PaginationStatus::Idle {
            break;
        }
    }

    let now = Instant::now();
    session.on_search_input(query, now);
    // Flush the debounce rather than sleeping through it.
    session.poll_timers(now + Duration::from_secs(1));

    let view = session.view_model();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let results = view.filtered.unwrap_or_default();
    if results.is_empty() {
        println!("No items matching \"{}\"", query);
        return Ok(());
    }

    let color = super::use_color();
    for item in &results {
        let title = item.title.as_deref().unwrap_or("(untitled)");
        let rendered: String = highlight(title, query)
            .into_iter()
            .map(|span| {
                if !span.matched {
                    span.text
                } else if color {
                    span.text.bold().to_string()
                } else {
                    format!("[{}]", span.text)
                }
            })
            .collect();
        println!("- {} · {}", rendered, item.category_or_other());
    }
    println!();
    println!("{} of {} items matched", results.len(), session.store().len());

    Ok(())
}
