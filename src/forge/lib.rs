pub(crate) mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod profile;
pub mod repository;
pub mod service;
pub mod view;

pub use client::Codeforces;
pub use error::{Error, Result};
pub use repository::{Catalog, ProblemRepository};
pub use service::ProblemService;
