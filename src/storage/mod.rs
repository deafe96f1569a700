//! Storage module - sled-backed block store

mod db;

pub use db::*;
