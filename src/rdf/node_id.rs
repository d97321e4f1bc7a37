//! Synthetic blank-node identifier generation.
//!
//! Blank nodes in the emitted documents carry `rdf:nodeID` labels of the
//! form `N` followed by 32 lowercase hex characters, matching the labels the
//! catalog generator produces. Labels carry no meaning beyond uniqueness
//! within a single document, so each encoding run uses its own generator and
//! two runs over the same record legitimately produce different labels.

use std::collections::HashSet;

use rand::Rng;

const ID_CHARS: &[u8] = b"abcdef0123456789";
const ID_LEN: usize = 32;

/// Issues blank-node identifiers that are unique within one generator
/// instance.
#[derive(Debug, Default)]
pub struct NodeIdGenerator {
    issued: HashSet<String>,
}

impl NodeIdGenerator {
    /// Creates a generator with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a fresh identifier, retrying on the (vanishingly unlikely)
    /// collision with one already issued by this generator.
    pub fn generate(&mut self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let mut id = String::with_capacity(ID_LEN + 1);
            id.push('N');
            for _ in 0..ID_LEN {
                let idx = rng.gen_range(0..ID_CHARS.len());
                id.push(char::from(ID_CHARS[idx]));
            }
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}
