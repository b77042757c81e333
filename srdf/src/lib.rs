// src/lib.rs
pub mod error;

pub mod data {
    pub mod config;
    pub mod experimental;
    pub mod nuclides;
}

pub mod sim {
    pub mod simulation;
}

pub use error::{Error, Result};
