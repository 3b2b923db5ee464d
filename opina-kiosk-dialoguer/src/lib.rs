//! # opina-kiosk-dialoguer
//!
//! Terminal kiosk frontend for the opina public survey flow.
//!
//! Drives [`opina_runner::SurveyRunner`] through `dialoguer` prompts: a
//! welcome screen, one question at a time (scale questions as a 0..=max
//! selection, opinions as free-text input), a submit confirmation, and the
//! thank-you dwell, then loops for the next respondent, the way a shared
//! tablet at a reception desk would.
//!
//! ```rust,no_run
//! use opina_client::{ApiConfig, PublicClient};
//! use opina_kiosk_dialoguer::Kiosk;
//!
//! # fn main() -> anyhow::Result<()> {
//! let gateway = PublicClient::new(ApiConfig::from_env())?;
//! Kiosk::looping().run(&gateway, "some-company-id")?;
//! # Ok(())
//! # }
//! ```

mod frontend;
pub use frontend::{Kiosk, KioskError};
