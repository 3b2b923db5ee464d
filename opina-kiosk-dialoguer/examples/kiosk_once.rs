//! Take a company's public survey once and exit.
//! Run with: cargo run -p opina-kiosk-dialoguer --example kiosk_once -- <company-id>

use anyhow::Context;
use opina_client::{ApiConfig, PublicClient};
use opina_kiosk_dialoguer::Kiosk;

fn main() -> anyhow::Result<()> {
    let company_id = std::env::args()
        .nth(1)
        .context("usage: kiosk_once <company-id>")?;
    let gateway = PublicClient::new(ApiConfig::from_env())?;
    Kiosk::once().run(&gateway, &company_id)?;
    Ok(())
}
