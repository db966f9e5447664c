//! Application context with shared clients and output helpers

use anyhow::{Context, Result};
use camp_directory::DirectoryClient;
use colored::Colorize;
use geocoder::NominatimClient;
use std::sync::Arc;

use crate::config::Config;

/// Application context passed to all commands
pub struct AppContext {
    pub config: Config,
    pub directory: DirectoryClient,
    pub geocoder: Arc<NominatimClient>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let directory = DirectoryClient::new(config.api_url.clone())
            .context("Invalid BHANDARA_API_URL")?;
        let geocoder = NominatimClient::new()
            .with_base_url(config.nominatim_url.clone())
            .with_user_agent(config.geocoder_user_agent.clone())
            .with_country_codes(config.country_codes.clone());

        Ok(Self {
            config,
            directory,
            geocoder: Arc::new(geocoder),
        })
    }

    pub fn print_header(&self, msg: &str) {
        println!();
        println!("{}", msg.bold());
    }

    pub fn print_success(&self, msg: &str) {
        println!("{}", msg.green());
    }

    pub fn print_warning(&self, msg: &str) {
        println!("{}", msg.yellow());
    }

    pub fn print_info(&self, msg: &str) {
        println!("{}", msg.cyan());
    }
}
