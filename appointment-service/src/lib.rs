pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod services;
pub mod startup;
