//! Common types shared by all storefront entities

pub mod remote_id;

// Re-exports
pub use remote_id::deserialize_remote_id;
