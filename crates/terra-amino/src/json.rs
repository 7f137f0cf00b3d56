//! Amino JSON envelopes for registered types.
//!
//! In JSON a registered concrete value is wrapped as
//! `{"type": "<tag>", "value": <body>}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::JsonError;
use crate::tags::TypeTag;

const TYPE_FIELD: &str = "type";
const VALUE_FIELD: &str = "value";

/// A registered value in Amino JSON form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedJson {
    #[serde(rename = "type")]
    pub tag: TypeTag,
    pub value: Value,
}

impl TaggedJson {
    pub fn new(tag: TypeTag, value: Value) -> Self {
        Self { tag, value }
    }

    /// Fails with [`JsonError::TagMismatch`] unless the tag is `expected`.
    pub fn expect_tag(self, expected: TypeTag) -> Result<Value, JsonError> {
        if self.tag != expected {
            return Err(JsonError::TagMismatch {
                expected,
                found: self.tag,
            });
        }
        Ok(self.value)
    }
}

/// Wraps a value in a `{"type", "value"}` envelope.
pub fn to_tagged_json(tag: TypeTag, value: Value) -> Value {
    let mut map = Map::with_capacity(2);
    map.insert(TYPE_FIELD.to_string(), Value::String(tag.as_str().to_string()));
    map.insert(VALUE_FIELD.to_string(), value);
    Value::Object(map)
}

/// Unwraps a `{"type", "value"}` envelope.
///
/// Unlike plain deserialization into [`TaggedJson`], this reports which
/// field is missing or malformed.
pub fn from_tagged_json(json: Value) -> Result<TaggedJson, JsonError> {
    let mut map = match json {
        Value::Object(map) => map,
        _ => return Err(JsonError::MissingField { field: TYPE_FIELD }),
    };

    let tag = match map.get(TYPE_FIELD) {
        Some(Value::String(s)) => s.parse::<TypeTag>()?,
        Some(_) => return Err(JsonError::NotAString { field: TYPE_FIELD }),
        None => return Err(JsonError::MissingField { field: TYPE_FIELD }),
    };
    let value = map
        .remove(VALUE_FIELD)
        .ok_or(JsonError::MissingField { field: VALUE_FIELD })?;

    Ok(TaggedJson { tag, value })
}

/// Unwraps an envelope and checks its tag.
pub fn expect_tagged_json(json: Value, expected: TypeTag) -> Result<Value, JsonError> {
    from_tagged_json(json)?.expect_tag(expected)
}

/// Serializes a value under `tag` to JSON bytes.
pub fn encode_json_bytes<T: Serialize>(tag: TypeTag, value: &T) -> Result<Vec<u8>, JsonError> {
    let value = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&to_tagged_json(tag, value))?)
}

/// Parses JSON bytes as an envelope tagged `expected` and deserializes the body.
pub fn decode_json_bytes<T>(bytes: &[u8], expected: TypeTag) -> Result<T, JsonError>
where
    T: for<'de> Deserialize<'de>,
{
    let json: Value = serde_json::from_slice(bytes)?;
    let value = expect_tagged_json(json, expected)?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Coin {
        denom: String,
        amount: String,
    }

    #[test]
    fn test_wrap() {
        let json = to_tagged_json(TypeTag::TendermintPubKeySecp256k1, json!("A0ZGrlBHMWtCMNAIbIrOxofwCxzZ0dxjT2yzWKwKmo//"));
        assert_eq!(
            json,
            json!({
                "type": "tendermint/PubKeySecp256k1",
                "value": "A0ZGrlBHMWtCMNAIbIrOxofwCxzZ0dxjT2yzWKwKmo//"
            })
        );
    }

    #[test]
    fn test_unwrap() {
        let json = json!({"type": "auth/Account", "value": {"address": "terra1..."}});
        let tagged = from_tagged_json(json).unwrap();
        assert_eq!(tagged.tag, TypeTag::AuthAccount);
        assert_eq!(tagged.value, json!({"address": "terra1..."}));
    }

    #[test]
    fn test_serde_matches_helpers() {
        let tagged = TaggedJson::new(TypeTag::TerraMsgVote, json!({"option": "Yes"}));
        let via_serde = serde_json::to_value(&tagged).unwrap();
        assert_eq!(via_serde, to_tagged_json(TypeTag::TerraMsgVote, json!({"option": "Yes"})));

        let back: TaggedJson = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, tagged);
    }

    #[test]
    fn test_unwrap_errors() {
        assert!(matches!(
            from_tagged_json(json!({"value": 1})),
            Err(JsonError::MissingField { field: "type" })
        ));
        assert!(matches!(
            from_tagged_json(json!({"type": 5, "value": 1})),
            Err(JsonError::NotAString { field: "type" })
        ));
        assert!(matches!(
            from_tagged_json(json!({"type": "auth/StdTx"})),
            Err(JsonError::MissingField { field: "value" })
        ));
        assert!(matches!(
            from_tagged_json(json!({"type": "auth/Nope", "value": {}})),
            Err(JsonError::UnknownTypeTag(_))
        ));
        assert!(matches!(from_tagged_json(json!([1, 2])), Err(JsonError::MissingField { .. })));
    }

    #[test]
    fn test_expect_tag() {
        let json = json!({"type": "gov/MsgDeposit", "value": {}});
        assert!(matches!(
            expect_tagged_json(json.clone(), TypeTag::TerraMsgVote),
            Err(JsonError::TagMismatch {
                expected: TypeTag::TerraMsgVote,
                found: TypeTag::TerraMsgDeposit
            })
        ));
        assert_eq!(expect_tagged_json(json, TypeTag::TerraMsgDeposit).unwrap(), json!({}));
    }

    #[test]
    fn test_json_bytes() {
        let coin = Coin {
            denom: "uluna".to_string(),
            amount: "1000".to_string(),
        };
        let bytes = encode_json_bytes(TypeTag::TerraMsgSend, &coin).unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains(r#""type":"pay/MsgSend""#));

        let back: Coin = decode_json_bytes(&bytes, TypeTag::TerraMsgSend).unwrap();
        assert_eq!(back, coin);

        assert!(decode_json_bytes::<Coin>(&bytes, TypeTag::TerraMsgMultiSend).is_err());
        assert!(matches!(decode_json_bytes::<Coin>(b"{", TypeTag::TerraMsgSend), Err(JsonError::Serde(_))));
    }
}
