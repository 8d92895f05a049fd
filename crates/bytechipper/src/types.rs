//! # Common Types

/// Index of a state within an automaton's state arena.
pub type StateId = usize;

/// Index of a token type; for pattern sets, the index of the accepting pattern.
pub type TokenTypeId = usize;

/// The number of distinct input symbols; every transition table is dense over bytes.
pub const ALPHABET_SIZE: usize = 256;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CommonHashMap<K, V> {
            CommonHashMap::new()
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type CommonHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> CommonHashMap<K, V> {
            CommonHashMap::new()
        }
    }
}
