//! Block store tests against on-disk databases

use pila_core::consensus::{Block, BlockHeader};
use pila_core::crypto::Hash;
use pila_core::storage::{block_key, BlockStore, StorageError};
use pila_core::validation::{Transaction, TxOut};

fn block(prev_hash: Hash, value: i64) -> Block {
    let coinbase = Transaction::coinbase(value, b"test".to_vec(), vec![0x51]);
    let header = BlockHeader::new(5, prev_hash, Hash::zero(), 1419310800, 0x1e0fffff, 0);
    Block::with_merkle_root(header, vec![coinbase])
}

#[test]
fn test_blocks_survive_reopen() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("blocks");
    let genesis = block(Hash::zero(), 50);
    let next = block(genesis.hash(), 25);

    {
        let store = BlockStore::open(&path).unwrap();
        store.put_block(&genesis).unwrap();
        store.put_block(&next).unwrap();
    }

    let store = BlockStore::open(&path).unwrap();
    assert_eq!(store.get_block(&genesis.hash().to_hex()).unwrap(), genesis);
    assert_eq!(store.get_block(&next.hash().to_hex()).unwrap(), next);

    let mut listed = store.list_blocks().unwrap();
    listed.sort_by_key(|b| b.hash());
    let mut expected = vec![genesis, next];
    expected.sort_by_key(|b| b.hash());
    assert_eq!(listed, expected);
}

#[test]
fn test_list_blocks_in_key_order() {
    let store = BlockStore::temporary().unwrap();
    let mut hashes = Vec::new();
    let mut prev = Hash::zero();
    for value in 1..=5 {
        let b = block(prev, value);
        prev = store.put_block(&b).unwrap();
        hashes.push(prev);
    }

    // hex keys sort like the raw hash bytes
    hashes.sort();
    let listed: Vec<Hash> = store.list_blocks().unwrap().iter().map(Block::hash).collect();
    assert_eq!(listed, hashes);
}

#[test]
fn test_corrupt_entry_aborts_listing() {
    let store = BlockStore::temporary().unwrap();
    store.put_block(&block(Hash::zero(), 1)).unwrap();
    store.put(&block_key(&Hash([0x01; 32])), b"not a block").unwrap();

    assert!(matches!(store.list_blocks(), Err(StorageError::Decode(_))));
}

#[test]
fn test_tampered_entry_is_rejected_on_read() {
    let store = BlockStore::temporary().unwrap();
    let good = block(Hash::zero(), 1);
    let hash = store.put_block(&good).unwrap();

    let mut tampered = good.clone();
    tampered.transactions[0].outputs[0].value = 1_000;
    let bytes = bincode::serialize(&tampered).unwrap();
    store.put(&block_key(&hash), &bytes).unwrap();

    assert!(matches!(
        store.get_block(&hash.to_hex()),
        Err(StorageError::Invalid(_))
    ));
    assert!(matches!(store.list_blocks(), Err(StorageError::Invalid(_))));
}

#[test]
fn test_non_block_keys_are_not_listed() {
    let store = BlockStore::temporary().unwrap();
    store.put("meta:best", b"anything").unwrap();
    store.put_block(&block(Hash::zero(), 7)).unwrap();

    assert_eq!(store.list_blocks().unwrap().len(), 1);
}

#[test]
fn test_unknown_block() {
    let store = BlockStore::temporary().unwrap();
    let missing = Hash([0x42; 32]).to_hex();
    assert!(matches!(
        store.get_block(&missing),
        Err(StorageError::NotFound(key)) if key == format!("block:{}", missing)
    ));
}

#[test]
fn test_block_under_foreign_key_is_rejected() {
    let store = BlockStore::temporary().unwrap();
    let stored = block(Hash::zero(), 3);
    let foreign = Hash([0x42; 32]);
    let bytes = bincode::serialize(&stored).unwrap();
    store.put(&block_key(&foreign), &bytes).unwrap();

    match store.get_block(&foreign.to_hex()) {
        Err(StorageError::HashMismatch { key, actual }) => {
            assert_eq!(key, block_key(&foreign));
            assert_eq!(actual, stored.hash());
        }
        other => panic!("expected HashMismatch, got {:?}", other),
    }
    assert!(matches!(
        store.list_blocks(),
        Err(StorageError::HashMismatch { .. })
    ));
}
