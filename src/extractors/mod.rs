//! Request extractors that report failures as `AppError`.

mod json;
pub use json::JsonBody;
