pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod payload;
pub mod pool;
pub mod resolver;
pub mod selection;
pub mod source;
pub mod wheel;
