//! Movies API: REST backend for movies, directors and genres on SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, SeedError};
pub use routes::{build_router, common_routes, entity_routes};
pub use seed::{apply_seed, load_seed, Seed, SeedSummary};
pub use service::{DirectorService, GenreService, MovieService};
pub use state::AppState;
pub use store::{connect, ensure_tables, memory_pool};
