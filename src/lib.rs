pub mod config;
pub mod driver;

pub use acctdemo_core as core;
