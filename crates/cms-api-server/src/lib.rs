pub mod config;
pub mod database;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod repositories;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test;
