// file: src/storage/mod.rs
// description: object storage module exports
// reference: internal module structure

pub mod content_type;
pub mod s3;
pub mod store;

pub use s3::S3ObjectStore;
pub use store::ObjectStore;
