//! Data access per entity, plus request validation.

mod catalog;
mod movie;
mod validation;
pub use catalog::{DirectorService, GenreService};
pub use movie::MovieService;
pub use validation::{RequestValidator, MAX_TEXT_LEN};
