//! Addresses
//!
//! A Base58Check value whose version byte names the destination kind and
//! network, carrying a 20-byte hash.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::config::Network;
use crate::crypto::Hash160;
use super::{Base58Error, Base58Value};

/// Where an address pays to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Hash160 of a public key
    PubKeyHash(Hash160),
    /// Hash160 of a redeem script
    ScriptHash(Hash160),
    None,
}

/// A Base58Check encoded address
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(Base58Value);

impl Address {
    pub fn from_pubkey_hash(hash: Hash160, network: Network) -> Self {
        Address(Base58Value::new(network.pubkey_hash_version(), hash.0.to_vec()))
    }

    pub fn from_script_hash(hash: Hash160, network: Network) -> Self {
        Address(Base58Value::new(network.script_hash_version(), hash.0.to_vec()))
    }

    /// `None` only for `Destination::None`
    pub fn from_destination(destination: &Destination, network: Network) -> Option<Self> {
        match destination {
            Destination::PubKeyHash(hash) => Some(Self::from_pubkey_hash(*hash, network)),
            Destination::ScriptHash(hash) => Some(Self::from_script_hash(*hash, network)),
            Destination::None => None,
        }
    }

    /// Wrap an already decoded value without checking it
    pub fn from_value(value: Base58Value) -> Self {
        Address(value)
    }

    pub fn as_value(&self) -> &Base58Value {
        &self.0
    }

    /// Network and script flag implied by the version byte
    fn kind(&self) -> Option<(Network, bool)> {
        let version = self.0.version();
        [Network::Main, Network::Test].into_iter().find_map(|network| {
            if version == network.pubkey_hash_version() {
                Some((network, false))
            } else if version == network.script_hash_version() {
                Some((network, true))
            } else {
                None
            }
        })
    }

    /// Known version byte and a 20-byte payload
    pub fn is_valid(&self) -> bool {
        self.kind().is_some() && self.0.payload().len() == 20
    }

    pub fn network(&self) -> Option<Network> {
        self.kind().map(|(network, _)| network)
    }

    pub fn is_script(&self) -> bool {
        matches!(self.kind(), Some((_, true)))
    }

    pub fn destination(&self) -> Destination {
        if !self.is_valid() {
            return Destination::None;
        }
        let Some(hash) = Hash160::from_slice(self.0.payload()) else {
            return Destination::None;
        };

        if self.is_script() {
            Destination::ScriptHash(hash)
        } else {
            Destination::PubKeyHash(hash)
        }
    }

    /// Parse the textual form; any decodable value is accepted, see `is_valid`
    pub fn parse(s: &str) -> Result<Self, Base58Error> {
        s.parse()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Address {
    type Err = Base58Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Address(s.parse()?))
    }
}
