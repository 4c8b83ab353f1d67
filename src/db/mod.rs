pub mod dao;
pub mod document;
pub mod entities;
pub mod store;

pub use document::Document;
pub use store::{DocumentStore, StoreError};
