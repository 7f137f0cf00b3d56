//! Process-wide registry of Amino type tags.
//!
//! The registry maps tag strings and prefix bytes back to [`TypeTag`]s.
//! It is built once, on first use, from [`TypeTag::ALL`] and is read-only
//! afterwards.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::model::{name_to_disfix, DisambBytes, PrefixBytes};
use crate::tags::TypeTag;

struct Registry {
    /// Indexed by `TypeTag as usize`.
    disfix: Vec<(DisambBytes, PrefixBytes)>,
    by_prefix: HashMap<PrefixBytes, TypeTag>,
}

impl Registry {
    fn build() -> Self {
        let mut disfix = Vec::with_capacity(TypeTag::COUNT);
        let mut by_prefix = HashMap::with_capacity(TypeTag::COUNT);

        for tag in TypeTag::ALL {
            let (disamb, prefix) = name_to_disfix(tag.as_str());
            disfix.push((disamb, prefix));
            if let Some(existing) = by_prefix.insert(prefix, tag) {
                // Keep the earlier registration.
                by_prefix.insert(prefix, existing);
                debug!(%tag, %existing, "prefix bytes collide, keeping first registration");
            }
        }

        trace!(count = disfix.len(), "built amino type registry");
        Self { disfix, by_prefix }
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

/// Returns the disambiguation and prefix bytes for a tag.
pub fn disfix_of(tag: TypeTag) -> (DisambBytes, PrefixBytes) {
    REGISTRY.disfix[tag as usize]
}

/// Looks up a tag by its wire string.
pub fn lookup(tag: &str) -> Option<TypeTag> {
    let found = tag.parse().ok();
    if found.is_none() {
        debug!(tag, "unknown amino type tag");
    }
    found
}

/// Looks up a tag by its 4 prefix bytes.
pub fn lookup_prefix(prefix: &PrefixBytes) -> Option<TypeTag> {
    let found = REGISTRY.by_prefix.get(prefix).copied();
    if found.is_none() {
        debug!(prefix = %hex::encode(prefix), "no amino type for prefix bytes");
    }
    found
}

/// Looks up a tag by disambiguation and prefix bytes. Both must match.
pub fn lookup_disfix(disamb: &DisambBytes, prefix: &PrefixBytes) -> Option<TypeTag> {
    lookup_prefix(prefix).filter(|tag| &tag.disamb_bytes() == disamb)
}

/// Iterates over every registered tag with its disambiguation and prefix bytes.
pub fn entries() -> impl Iterator<Item = (TypeTag, DisambBytes, PrefixBytes)> {
    TypeTag::ALL.into_iter().map(|tag| {
        let (disamb, prefix) = disfix_of(tag);
        (tag, disamb, prefix)
    })
}

/// Returns the number of registered tags.
pub fn len() -> usize {
    TypeTag::COUNT
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::model::format_disfix;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("auth/Account"), Some(TypeTag::AuthAccount));
        assert_eq!(lookup("staking/MsgDelegate"), Some(TypeTag::TerraMsgDelegate));
        assert_eq!(lookup("staking/MsgDelegatee"), None);
    }

    #[test]
    fn test_prefixes_unique() {
        let prefixes: HashSet<PrefixBytes> = entries().map(|(_, _, p)| p).collect();
        assert_eq!(prefixes.len(), len());
    }

    #[test]
    fn test_every_prefix_resolves() {
        for (tag, disamb, prefix) in entries() {
            assert_eq!(lookup_prefix(&prefix), Some(tag));
            assert_eq!(lookup_disfix(&disamb, &prefix), Some(tag));
            assert_eq!(tag.disfix(), (disamb, prefix));
            assert_eq!(name_to_disfix(tag.as_str()), (disamb, prefix));
        }
    }

    #[test]
    fn test_disfix_mismatch() {
        let (_, prefix) = TypeTag::AuthStdTx.disfix();
        let (other_disamb, _) = TypeTag::AuthAccount.disfix();
        assert_eq!(lookup_disfix(&other_disamb, &prefix), None);
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(lookup_prefix(&[0xDE, 0xAD, 0xBE, 0xEF]), None);
    }

    #[test]
    fn test_tag_accessors() {
        assert_eq!(format_disfix(&TypeTag::TendermintPubKeyEd25519.prefix_bytes()), "1624DE64");
        assert_eq!(format_disfix(&TypeTag::TendermintPubKeyEd25519.disamb_bytes()), "AC2679");
    }

    #[test]
    fn test_print_prefixes() {
        // Prints the prefix table for documentation
        for (tag, disamb, prefix) in entries() {
            println!("{:<48} {} {}", tag.as_str(), format_disfix(&disamb), format_disfix(&prefix));
        }
    }
}
