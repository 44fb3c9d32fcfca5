//! Domain logic for the frame annotation service.
//!
//! Everything here is plain synchronous filesystem code with no HTTP
//! knowledge: frame directory scanning, per-video annotation documents and
//! the catalog listing that combines the two.

pub mod annotation;
pub mod catalog;
pub mod config;
pub mod error;
pub mod frames;
pub mod paths;
pub mod store;
