pub mod actions;
pub mod config;
pub mod service;

pub(crate) mod i18n;
pub(crate) mod utils;

mod controller;
mod error;

#[cfg(test)]
mod tests;

pub use controller::DashboardSearchController;
pub use error::{Error, Result};
pub use i18n::Translator;

pub use dashpal_types::*;
