//! arXiv Explorer
//!
//! Client-side search engine for the arXiv catalog: compiles free-text
//! queries plus structured filters into arXiv's boolean query syntax,
//! normalizes the Atom responses into canonical paper records, re-ranks
//! results by query relevance, and computes related papers by content
//! similarity.
//!
//! # Features
//!
//! - **Query compiler**: field scoping, category and date-range filters,
//!   wildcard fallback - never emits an empty query
//! - **Defensive normalizer**: malformed entries degrade the result set,
//!   never the whole request
//! - **Local ranking**: the catalog has no query-aware relevance sort, so
//!   relevance ordering is computed client-side
//!
//! # Example
//!
//! ```no_run
//! use arxiv_explorer::{ArxivClient, Config, models::SearchFilters, ranking};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ArxivClient::new(Config::default())?;
//!     let papers = client.search("neural networks", &SearchFilters::default(), 0).await?;
//!     let ranked = ranking::rank_papers("neural networks", papers);
//!
//!     for result in &ranked {
//!         println!("{:>3}  {}", result.relevance, result.paper.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod models;
pub mod query;
pub mod ranking;
pub mod text;

pub use client::ArxivClient;
pub use config::Config;
pub use error::{ClientError, FeedError};
