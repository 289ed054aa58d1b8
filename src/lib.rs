pub mod cli;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;

pub use anyhow::{Error, Result};
