//! Disambiguation and prefix bytes for registered Amino types.
//!
//! Amino identifies a registered concrete type on the wire by bytes derived
//! from the SHA-256 of its name, not by the name itself.

use sha2::{Digest, Sha256};

use crate::limits::{DISAMB_LEN, PREFIX_LEN};

/// The 3 disambiguation bytes of a registered name.
pub type DisambBytes = [u8; DISAMB_LEN];

/// The 4 prefix bytes of a registered name.
pub type PrefixBytes = [u8; PREFIX_LEN];

/// Computes the disambiguation and prefix bytes for a registered name.
///
/// ```text
/// bz = SHA-256(name)
/// skip leading 0x00 bytes;  disamb = bz[0..3];  bz = bz[3..]
/// skip leading 0x00 bytes;  prefix = bz[0..4]
/// ```
///
/// Neither half ever starts with a zero byte, so a leading `0x00` on the
/// wire unambiguously announces a disambiguation header.
pub fn name_to_disfix(name: &str) -> (DisambBytes, PrefixBytes) {
    let hash = Sha256::digest(name.as_bytes());

    let mut bz = skip_zeros(&hash);
    let mut disamb = [0u8; DISAMB_LEN];
    copy_padded(&mut disamb, bz);
    bz = skip_zeros(bz.get(DISAMB_LEN..).unwrap_or_default());

    let mut prefix = [0u8; PREFIX_LEN];
    copy_padded(&mut prefix, bz);

    (disamb, prefix)
}

fn skip_zeros(bz: &[u8]) -> &[u8] {
    let start = bz.iter().position(|b| *b != 0x00).unwrap_or(bz.len());
    &bz[start..]
}

// Zero-pads when fewer than dst.len() bytes remain.
fn copy_padded(dst: &mut [u8], src: &[u8]) {
    let n = dst.len().min(src.len());
    dst[..n].copy_from_slice(&src[..n]);
}

/// Formats prefix or disambiguation bytes as uppercase hex, the way they
/// appear in Amino documentation (e.g. `1624DE64`).
pub fn format_disfix(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_prefixes() {
        let cases = [
            ("tendermint/PubKeyEd25519", "AC2679", "1624DE64"),
            ("tendermint/PrivKeyEd25519", "954568", "A3288910"),
            ("tendermint/PubKeySecp256k1", "F8CCEA", "EB5AE987"),
            ("auth/StdTx", "8EFE47", "F0625DEE"),
            ("auth/Account", "6C54F7", "3C9F2E0E"),
            ("staking/MsgDelegate", "BB9F0F", "37FF0395"),
            ("pay/MsgSend", "8D00D6", "6F888E96"),
        ];
        for (name, disamb, prefix) in cases {
            let (d, p) = name_to_disfix(name);
            assert_eq!(format_disfix(&d), disamb, "{name}");
            assert_eq!(format_disfix(&p), prefix, "{name}");
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(name_to_disfix("gov/MsgVote"), name_to_disfix("gov/MsgVote"));
        assert_ne!(name_to_disfix("gov/MsgVote"), name_to_disfix("gov/MsgDeposit"));
    }

    #[test]
    fn test_no_leading_zero() {
        for name in ["", "a", "tendermint/Vote", "some/Other"] {
            let (d, p) = name_to_disfix(name);
            assert_ne!(d[0], 0x00);
            assert_ne!(p[0], 0x00);
        }
    }

    #[test]
    fn test_skip_zeros() {
        assert_eq!(skip_zeros(&[0, 0, 1, 0, 2]), &[1, 0, 2]);
        assert_eq!(skip_zeros(&[0, 0]), &[] as &[u8]);
        assert_eq!(skip_zeros(&[]), &[] as &[u8]);
    }
}
