//! Pila Core Library
//!
//! Consensus primitives every node must compute bit-for-bit identically:
//! digests, version-gated header hashing, merkle roots, block structure
//! checks, Base58Check addresses and peer-adjusted network time.

pub mod config;
pub mod consensus;
pub mod crypto;
pub mod p2p;
pub mod storage;
pub mod util;
pub mod validation;
pub mod wallet;

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Client name, also the data directory name
    pub const CLIENT_NAME: &str = "Pila";

    /// `1000000 * major + 10000 * minor + 100 * revision + build`
    pub const CLIENT_VERSION: u32 = 60004;

    pub const VERSION_STRING: &str = "0.6.0.4";

    /// Smallest units per coin (6 decimal places)
    pub const COIN: i64 = 1_000_000;

    pub const CENT: i64 = 10_000;

    /// Smallest fee accepted for a transaction (0.05 cent)
    pub const MIN_TX_FEE: i64 = CENT / 20;

    pub const MIN_RELAY_TX_FEE: i64 = MIN_TX_FEE;

    /// Outputs below this are dust
    pub const MIN_TX_OUT_AMOUNT: i64 = MIN_TX_FEE;

    /// Upper bound of any amount
    pub const MAX_MONEY_SUPPLY: i64 = 30_735_360 * COIN;

    /// First block timestamp (2014-12-23)
    pub const CHAIN_START_TIME: i64 = 1419310800;

    /// Maximum a block timestamp may run ahead of adjusted time
    pub const MAX_CLOCK_DRIFT: i64 = 2 * 60 * 60;

    /// Blocks before a coinbase output can be spent
    pub const COINBASE_MATURITY: u32 = 200;

    pub const COINBASE_MATURITY_TEST_NETWORK: u32 = 1;

    /// Largest proof-of-stake mint per block (0.007 coin)
    pub const MAX_MINT_PROOF_OF_STAKE: i64 = COIN * 7 / 1000;

    /// Seconds a coin must age before it can stake
    pub const MIN_STAKE_AGE: i64 = 8 * 60 * 60;

    /// Coin age stops counting after a year
    pub const MAX_STAKE_AGE: i64 = 365 * 24 * 60 * 60;

    /// Lock times below this are block heights, above are timestamps
    pub const LOCK_TIME_THRESHOLD: u32 = 500_000_000;

    /// Target seconds between blocks
    pub const TARGET_SPACING: i64 = 200;

    /// Last block that may be proof-of-work
    pub const POW_CUTOFF_BLOCK: i32 = i32::MAX - 1;

    /// Headers at or above this version hash with 8-round BLAKE-256
    pub const MODERN_HEADER_VERSION: u32 = 5;

    /// Peer clock samples kept by the time consensus
    pub const DEFAULT_MEDIAN_WINDOW: usize = 200;

    /// Samples needed before the offset is recomputed
    pub const MIN_TIME_SAMPLES: usize = 5;

    /// Largest median offset accepted from peers
    pub const MAX_ADJUSTMENT_SECS: i64 = 70 * 60;

    /// A peer this close to our clock means our clock is probably fine
    pub const PEER_AGREEMENT_SECS: i64 = 5 * 60;
}
