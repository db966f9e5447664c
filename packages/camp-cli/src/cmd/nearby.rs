//! Browse camps around a place

use anyhow::{Context, Result};
use camp_core::CampCard;
use camp_directory::{ListCampsQuery, DEFAULT_PAGE_SIZE};
use chrono::Local;
use clap::Args;
use tracing::info;

use super::{resolve_place, LocationArgs};
use crate::context::AppContext;
use crate::render;

#[derive(Args, Debug)]
pub struct NearbyArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Search radius in kilometers (defaults to BHANDARA_RADIUS_KM)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Results page, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Camps per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub limit: u32,
}

pub async fn run(ctx: &AppContext, args: NearbyArgs) -> Result<()> {
    let place = resolve_place(ctx.geocoder.as_ref(), &args.location).await?;
    let radius_km = args.radius.unwrap_or(ctx.config.radius_km);

    let query = ListCampsQuery::around(&place)
        .with_radius_km(radius_km)
        .with_page(args.page)
        .with_limit(args.limit);
    info!(place = %place.name, radius_km, page = query.page, "Listing camps");

    let page = ctx
        .directory
        .list_camps(&query)
        .await
        .context("Could not load camps. Please try again.")?;

    if page.camps.is_empty() {
        ctx.print_warning(&format!("No camps found near {}", place.name));
        return Ok(());
    }

    ctx.print_header(&format!(
        "{} camp{} near {}",
        page.total,
        if page.total == 1 { "" } else { "s" },
        place.name
    ));

    // One clock reading for the whole list
    let now = Local::now().naive_local();
    for camp in &page.camps {
        println!();
        render::print_card(&CampCard::build(camp, Some(place.coordinates), now));
    }

    let pages = page.total_pages(query.limit);
    if pages > 1 {
        println!();
        ctx.print_info(&format!("Page {} of {}", query.page, pages));
    }

    Ok(())
}
