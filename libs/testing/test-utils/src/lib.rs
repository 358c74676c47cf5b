//! Shared test utilities for the domain crates
//!
//! - [`TestDataBuilder`]: seeded, reproducible test identifiers and names
//! - [`assertions`]: small assertion helpers
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let record_id = builder.id();
//! let product_name = builder.name("product", "main");
//! ```

use uuid::Uuid;

/// Deterministic test data derived from a seed
///
/// Two builders with the same seed produce the same ids and names, so
/// failures reproduce exactly across runs.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed the builder from the test's name
    ///
    /// The usual entry point: each test hashes its own name, so data never
    /// collides across tests but stays stable within one.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A UUID fully determined by the seed
    pub fn id(&self) -> Uuid {
        let bytes = self.seed.to_le_bytes();
        let mut uuid_bytes = [0u8; 16];
        uuid_bytes[..8].copy_from_slice(&bytes);
        uuid_bytes[8..16].copy_from_slice(&bytes);
        Uuid::from_bytes(uuid_bytes)
    }

    /// A name of the form `test-<prefix>-<seed>-<suffix>`
    ///
    /// `prefix` names the kind of resource ("product"), `suffix`
    /// distinguishes instances within one test ("main", "other").
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}

/// Assertion helpers with more useful failure output
pub mod assertions {
    use uuid::Uuid;

    pub fn assert_uuid_eq(actual: Uuid, expected: Uuid, context: &str) {
        assert_eq!(
            actual, expected,
            "{}: expected UUID {}, got {}",
            context, expected, actual
        );
    }
}
