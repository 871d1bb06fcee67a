//! Asset snapshot module - the normalized input shared by both engines.

mod snapshot_model;

#[cfg(test)]
mod snapshot_model_tests;

pub use snapshot_model::{AssetSnapshot, AssetType};
