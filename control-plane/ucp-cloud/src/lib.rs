pub mod backend;
pub mod client;
pub mod config;
pub mod convert;
pub mod errors;
pub mod kubeconfig;
pub mod rest;

pub use backend::*;
pub use client::{Client, MAX_ITEMS};
pub use config::*;
pub use convert::{convert, convert_at};
pub use errors::*;
pub use kubeconfig::*;
pub use rest::CloudHttpClient;
