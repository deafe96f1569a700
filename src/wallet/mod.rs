//! Wallet module - Base58Check codec and addresses

mod address;
mod base58;

pub use address::*;
pub use base58::{
    decode as base58check_decode, encode as base58check_encode, Base58Error, Base58Value,
};
