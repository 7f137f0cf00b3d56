//! Bech32 encoding of account and validator addresses.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::AddressError;

/// Human readable part for Terra account addresses.
pub const ACCOUNT_HRP: &str = "terra";

/// Human readable part for Terra account public keys.
pub const ACCOUNT_PUB_HRP: &str = "terrapub";

/// Human readable part for validator operator addresses.
pub const VALIDATOR_HRP: &str = "terravaloper";

/// Human readable part for validator operator public keys.
pub const VALIDATOR_PUB_HRP: &str = "terravaloperpub";

/// Human readable part for consensus node addresses.
pub const CONSENSUS_HRP: &str = "terravalcons";

/// Human readable part for consensus node public keys.
pub const CONSENSUS_PUB_HRP: &str = "terravalconspub";

/// Encodes `data` as Bech32 under the human readable part `hrp`.
pub fn encode_bech32(hrp: &str, data: &[u8]) -> Result<String, AddressError> {
    Ok(bech32::encode(hrp, data.to_base32(), Variant::Bech32)?)
}

/// Decodes a Bech32 string into its human readable part and data bytes.
pub fn decode_bech32(bech: &str) -> Result<(String, Vec<u8>), AddressError> {
    let (hrp, data, variant) = bech32::decode(bech)?;

    // Cosmos addresses predate Bech32m
    if variant != Variant::Bech32 {
        return Err(AddressError::InvalidVariant);
    }

    let data = Vec::<u8>::from_base32(&data)?;
    Ok((hrp, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(
            encode_bech32(ACCOUNT_HRP, &[0u8; 20]).unwrap(),
            "terra1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq486l9a"
        );

        let data: Vec<u8> = (0u8..20).collect();
        assert_eq!(
            encode_bech32(ACCOUNT_HRP, &data).unwrap(),
            "terra1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn9jt6ne"
        );
        assert_eq!(encode_bech32("cosmos", &[1, 2, 3]).unwrap(), "cosmos1qypqxw5atfh");
    }

    #[test]
    fn test_decode() {
        let (hrp, data) = decode_bech32("terra1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn9jt6ne").unwrap();
        assert_eq!(hrp, "terra");
        assert_eq!(data, (0u8..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_decode_bad_checksum() {
        assert!(matches!(
            decode_bech32("terra1qqqsyqcyq5rqwzqfpg9scrgwpugpzysn9jt6nf"),
            Err(AddressError::Bech32(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bech32m() {
        let bech32m = bech32::encode("terra", [1u8, 2, 3].to_base32(), Variant::Bech32m).unwrap();
        assert_eq!(decode_bech32(&bech32m), Err(AddressError::InvalidVariant));
    }

    #[test]
    fn test_invalid_hrp() {
        assert!(encode_bech32("", &[1, 2, 3]).is_err());
    }
}
