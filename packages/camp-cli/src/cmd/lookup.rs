//! Geocoder lookups: forward search, reverse, and live autocomplete

use anyhow::{Context, Result};
use camp_core::Coordinates;
use geocoder::{Autocomplete, AutocompleteConfig, Geocoder};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::context::AppContext;
use crate::render;

pub async fn geocode(ctx: &AppContext, query: &str) -> Result<()> {
    let suggestions = ctx
        .geocoder
        .search(query)
        .await
        .context("Address search failed")?;

    if suggestions.is_empty() {
        ctx.print_warning(&format!("No places found for \"{}\"", query.trim()));
        return Ok(());
    }

    for s in &suggestions {
        println!(
            "{}\n  {:.6}, {:.6}",
            s.display_name, s.coordinates.latitude(), s.coordinates.longitude()
        );
    }
    Ok(())
}

pub async fn reverse(ctx: &AppContext, lat: f64, lng: f64) -> Result<()> {
    let coordinates = Coordinates::new(lat, lng)?;
    let name = ctx
        .geocoder
        .reverse(coordinates)
        .await
        .context("Reverse lookup failed")?;

    match name {
        Some(name) => println!("{}", name),
        None => ctx.print_warning("No place found at that position"),
    }
    Ok(())
}

/// Treat each stdin line as the current contents of a search box and print
/// suggestions as they settle.
pub async fn suggest(ctx: &AppContext, address_form: bool) -> Result<()> {
    let config = if address_form {
        AutocompleteConfig::address_form()
    } else {
        AutocompleteConfig::default()
    };
    let autocomplete = Autocomplete::new(ctx.geocoder.clone(), config);
    let mut updates = autocomplete.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("Failed to read stdin")? {
                    Some(query) => {
                        autocomplete.input(query);
                    }
                    None => {
                        input_open = false;
                        if !autocomplete.current().searching {
                            break;
                        }
                    }
                }
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                if !state.searching {
                    render::print_suggestions(&state);
                    if !input_open {
                        break;
                    }
                }
            }
        }
    }
    Ok(())
}
