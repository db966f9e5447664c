//! Show one camp

use anyhow::{Context, Result};
use camp_core::CampCard;
use chrono::Local;
use clap::Args;

use super::{resolve_optional_place, LocationArgs};
use crate::context::AppContext;
use crate::render;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Camp id
    pub id: String,

    #[command(flatten)]
    pub location: LocationArgs,
}

pub async fn run(ctx: &AppContext, args: ShowArgs) -> Result<()> {
    let camp = ctx
        .directory
        .get_camp(&args.id)
        .await
        .with_context(|| format!("Could not load camp {}", args.id))?;

    let observer = if args.location.is_empty() {
        None
    } else {
        resolve_optional_place(ctx.geocoder.as_ref(), &args.location).await?
    };

    let card = CampCard::build(
        &camp,
        observer.as_ref().map(|p| p.coordinates),
        Local::now().naive_local(),
    );

    println!();
    render::print_camp_details(&camp, &card);
    Ok(())
}
