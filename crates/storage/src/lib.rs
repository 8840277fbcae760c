//! Storage layer for Belajar
//!
//! This crate provides the local key-value store used to persist session
//! credentials and cached data between app launches.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kv;

pub use kv::{KeyValue, KvConfig, KvError, KvStore};
