//! Serve a company's public survey at the terminal.
//! Run with: cargo run -p opina-kiosk-dialoguer --example kiosk -- <company-id>

use anyhow::Context;
use opina_client::{ApiConfig, PublicClient};
use opina_kiosk_dialoguer::Kiosk;

fn main() -> anyhow::Result<()> {
    let company_id = std::env::args()
        .nth(1)
        .context("usage: kiosk <company-id>")?;
    let gateway = PublicClient::new(ApiConfig::from_env())?;
    Kiosk::looping().run(&gateway, &company_id)?;
    Ok(())
}
