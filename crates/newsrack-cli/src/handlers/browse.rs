use crate::args::OutputFormat;
use anyhow::Result;
use newsrack_runtime::{BrowseSession, PaginationStatus};
use owo_colors::OwoColorize;

pub async fn handle(
    session: &mut BrowseSession,
    expand: &[String],
    format: OutputFormat,
) -> Result<()> {
    // First page, then let the coordinator top up the visible window.
    session.on_load_more_requested().await?;
    for name in expand {
        session.on_expand_category(name);
    }
    session.ensure_coverage().await?;

    let view = session.view_model();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let color = super::use_color();

    if view.buckets.is_empty() {
        println!("No content available");
        return Ok(());
    }

    for bucket in &view.buckets {
        let header = format!(
            "{} ({}/{}{})",
            bucket.name,
            bucket.visible_items.len(),
            bucket.total_items,
            if bucket.is_expanded { ", expanded" } else { "" }
        );
        if color {
            println!("{}", header.bold());
        } else {
            println!("{}", header);
        }

        for item in &bucket.visible_items {
            let title = item.title.as_deref().unwrap_or("(untitled)");
            match &item.last_modified {
                Some(ts) => println!("  - {} ({})", title, ts.format("%Y-%m-%d")),
                None => println!("  - {}", title),
            }
        }
        println!();
    }

    let status = match view.pagination {
        PaginationStatus::Idle => "more available",
        PaginationStatus::Loading => "loading",
        PaginationStatus::Exhausted => "all loaded",
        PaginationStatus::Error => "load failed",
    };
    println!(
        "{} of {} items loaded · {}",
        session.store().len(),
        session.store().total(),
        status
    );

    Ok(())
}
