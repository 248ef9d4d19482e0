//! Entity rows and the JSON shapes they are exchanged in.

pub mod director;
pub mod genre;
pub mod movie;

pub use director::Director;
pub use genre::Genre;
pub use movie::{Movie, MovieFilter, MovieInput, MoviePatch, MovieRow};
