pub mod dto;
pub mod handler;
pub mod service;
pub mod store;
pub mod view;

pub use dto::PatternRecord;
pub use service::{CatalogService, DetailPage};
pub use store::PatternStore;
pub use view::CatalogViews;
