//! Amino type tags for Terra, Cosmos SDK and Tendermint data structures.
//!
//! Every registered concrete type is identified on the wire by a route-like
//! tag string such as `auth/StdTx`. The set is closed: each tag is available
//! both as a `&str` constant and as a [`TypeTag`] variant, and an unknown
//! identifier is a compile error.
//!
//! ```
//! use terra_amino::tags::{self, TypeTag};
//!
//! assert_eq!(tags::AUTH_ACCOUNT, "auth/Account");
//! assert_eq!(TypeTag::TerraMsgDelegate.as_str(), "staking/MsgDelegate");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::UnknownTypeTag;
use crate::model::{DisambBytes, PrefixBytes};
use crate::registry;

macro_rules! type_tags {
    ($($variant:ident => $konst:ident = $value:literal,)*) => {
        $(
            #[doc = concat!("`", $value, "`")]
            pub const $konst: &str = $value;
        )*

        /// A registered Amino type tag.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TypeTag {
            $(
                #[doc = concat!("`", $value, "`")]
                $variant,
            )*
        }

        impl TypeTag {
            /// Number of registered tags.
            pub const COUNT: usize = [$(TypeTag::$variant),*].len();

            /// All tags in registration order.
            pub const ALL: [TypeTag; Self::COUNT] = [$(TypeTag::$variant),*];

            /// Returns the wire tag string.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TypeTag::$variant => $konst,)*
                }
            }

            /// Returns the symbolic identifier, e.g. `"AuthAccount"`.
            pub const fn ident(self) -> &'static str {
                match self {
                    $(TypeTag::$variant => stringify!($variant),)*
                }
            }

            fn parse(s: &str) -> Option<TypeTag> {
                match s {
                    $($value => Some(TypeTag::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

type_tags! {
    // =========================================================================
    // KEYBASE (crypto/keys)
    // =========================================================================

    TendermintPrivKeyLedgerSecp256k1 => TENDERMINT_PRIV_KEY_LEDGER_SECP256K1 = "tendermint/PrivKeyLedgerSecp256k1",
    CryptoKeysHdBIP44Params => CRYPTO_KEYS_HD_BIP44_PARAMS = "crypto/keys/hd/BIP44Params",
    CryptoKeysLocalInfo => CRYPTO_KEYS_LOCAL_INFO = "crypto/keys/localInfo",
    CryptoKeysLedgerInfo => CRYPTO_KEYS_LEDGER_INFO = "crypto/keys/ledgerInfo",
    CryptoKeysOfflineInfo => CRYPTO_KEYS_OFFLINE_INFO = "crypto/keys/offlineInfo",
    CryptoKeysMultiInfo => CRYPTO_KEYS_MULTI_INFO = "crypto/keys/multiInfo",

    // =========================================================================
    // ACCOUNTS (auth, cosmos-sdk)
    // =========================================================================

    AuthAccount => AUTH_ACCOUNT = "auth/Account",
    AuthBaseVestingAccount => AUTH_BASE_VESTING_ACCOUNT = "auth/BaseVestingAccount",
    AuthContinuousVestingAccount => AUTH_CONTINUOUS_VESTING_ACCOUNT = "auth/ContinuousVestingAccount",
    AuthDelayedVestingAccount => AUTH_DELAYED_VESTING_ACCOUNT = "auth/DelayedVestingAccount",
    AuthStdTx => AUTH_STD_TX = "auth/StdTx",
    CosmosSdkBaseAccount => COSMOS_SDK_BASE_ACCOUNT = "cosmos-sdk/BaseAccount",
    CosmosSdkBaseVestingAccount => COSMOS_SDK_BASE_VESTING_ACCOUNT = "cosmos-sdk/BaseVestingAccount",
    CosmosSdkContinuousVestingAccount => COSMOS_SDK_CONTINUOUS_VESTING_ACCOUNT = "cosmos-sdk/ContinuousVestingAccount",
    CosmosSdkDelayedVestingAccount => COSMOS_SDK_DELAYED_VESTING_ACCOUNT = "cosmos-sdk/DelayedVestingAccount",

    // =========================================================================
    // TERRA MESSAGES (pay, crisis, distribution, gov, ibc, staking)
    // =========================================================================

    TerraMsgSend => TERRA_MSG_SEND = "pay/MsgSend",
    TerraMsgMultiSend => TERRA_MSG_MULTI_SEND = "pay/MsgMultiSend",
    TerraMsgVerifyInvariant => TERRA_MSG_VERIFY_INVARIANT = "crisis/MsgVerifyInvariant",
    TerraMsgWithdrawDelegationReward => TERRA_MSG_WITHDRAW_DELEGATION_REWARD = "distribution/MsgWithdrawDelegationReward",
    TerraMsgWithdrawValidatorCommission => TERRA_MSG_WITHDRAW_VALIDATOR_COMMISSION = "distribution/MsgWithdrawValidatorCommission",
    TerraMsgModifyWithdrawAddress => TERRA_MSG_MODIFY_WITHDRAW_ADDRESS = "distribution/MsgModifyWithdrawAddress",
    TerraMsgSubmitProposal => TERRA_MSG_SUBMIT_PROPOSAL = "gov/MsgSubmitProposal",
    TerraMsgDeposit => TERRA_MSG_DEPOSIT = "gov/MsgDeposit",
    TerraMsgVote => TERRA_MSG_VOTE = "gov/MsgVote",
    TerraTextProposal => TERRA_TEXT_PROPOSAL = "gov/TextProposal",
    TerraSoftwareUpgradeProposal => TERRA_SOFTWARE_UPGRADE_PROPOSAL = "gov/SoftwareUpgradeProposal",
    TerraParameterChangeProposal => TERRA_PARAMETER_CHANGE_PROPOSAL = "gov/ParameterChangeProposal",
    TerraMsgIBCTransfer => TERRA_MSG_IBC_TRANSFER = "ibc/MsgIBCTransfer",
    TerraMsgIBCReceive => TERRA_MSG_IBC_RECEIVE = "ibc/MsgIBCReceive",
    TerraMsgUnjail => TERRA_MSG_UNJAIL = "staking/MsgUnjail",
    TerraMsgCreateValidator => TERRA_MSG_CREATE_VALIDATOR = "staking/MsgCreateValidator",
    TerraMsgEditValidator => TERRA_MSG_EDIT_VALIDATOR = "staking/MsgEditValidator",
    TerraMsgDelegate => TERRA_MSG_DELEGATE = "staking/MsgDelegate",
    TerraMsgUndelegate => TERRA_MSG_UNDELEGATE = "staking/MsgUndelegate",
    TerraMsgBeginRedelegate => TERRA_MSG_BEGIN_REDELEGATE = "staking/MsgBeginRedelegate",

    // =========================================================================
    // TENDERMINT BLOCKCHAIN REACTOR
    // =========================================================================

    TendermintBlockchainBlockRequest => TENDERMINT_BLOCKCHAIN_BLOCK_REQUEST = "tendermint/blockchain/BlockRequest",
    TendermintBlockchainBlockResponse => TENDERMINT_BLOCKCHAIN_BLOCK_RESPONSE = "tendermint/blockchain/BlockResponse",
    TendermintBlockchainNoBlockResponse => TENDERMINT_BLOCKCHAIN_NO_BLOCK_RESPONSE = "tendermint/blockchain/NoBlockResponse",
    TendermintBlockchainStatusResponse => TENDERMINT_BLOCKCHAIN_STATUS_RESPONSE = "tendermint/blockchain/StatusResponse",
    TendermintBlockchainStatusRequest => TENDERMINT_BLOCKCHAIN_STATUS_REQUEST = "tendermint/blockchain/StatusRequest",

    // =========================================================================
    // TENDERMINT CONSENSUS
    // =========================================================================

    TendermintNewRoundStepMessage => TENDERMINT_NEW_ROUND_STEP_MESSAGE = "tendermint/NewRoundStepMessage",
    TendermintNewValidBlockMessage => TENDERMINT_NEW_VALID_BLOCK_MESSAGE = "tendermint/NewValidBlockMessage",
    TendermintProposal => TENDERMINT_PROPOSAL = "tendermint/Proposal",
    TendermintProposalPOL => TENDERMINT_PROPOSAL_POL = "tendermint/ProposalPOL",
    TendermintBlockPart => TENDERMINT_BLOCK_PART = "tendermint/BlockPart",
    TendermintVote => TENDERMINT_VOTE = "tendermint/Vote",
    TendermintHasVote => TENDERMINT_HAS_VOTE = "tendermint/HasVote",
    TendermintVoteSetMaj23 => TENDERMINT_VOTE_SET_MAJ23 = "tendermint/VoteSetMaj23",
    TendermintVoteSetBits => TENDERMINT_VOTE_SET_BITS = "tendermint/VoteSetBits",

    // =========================================================================
    // TENDERMINT CONSENSUS WAL
    // =========================================================================

    TendermintWalEventDataRoundState => TENDERMINT_WAL_EVENT_DATA_ROUND_STATE = "tendermint/wal/EventDataRoundState",
    TendermintWalMsgInfo => TENDERMINT_WAL_MSG_INFO = "tendermint/wal/MsgInfo",
    TendermintWalTimeoutInfo => TENDERMINT_WAL_TIMEOUT_INFO = "tendermint/wal/TimeoutInfo",
    TendermintWalEndHeightMessage => TENDERMINT_WAL_END_HEIGHT_MESSAGE = "tendermint/wal/EndHeightMessage",

    // =========================================================================
    // TENDERMINT KEYS
    // =========================================================================

    TendermintPubKeyEd25519 => TENDERMINT_PUB_KEY_ED25519 = "tendermint/PubKeyEd25519",
    TendermintPrivKeyEd25519 => TENDERMINT_PRIV_KEY_ED25519 = "tendermint/PrivKeyEd25519",
    TendermintPubKeySecp256k1 => TENDERMINT_PUB_KEY_SECP256K1 = "tendermint/PubKeySecp256k1",
    TendermintPrivKeySecp256k1 => TENDERMINT_PRIV_KEY_SECP256K1 = "tendermint/PrivKeySecp256k1",
    TendermintPubKeyMultisigThreshold => TENDERMINT_PUB_KEY_MULTISIG_THRESHOLD = "tendermint/PubKeyMultisigThreshold",

    // =========================================================================
    // TENDERMINT EVIDENCE, MEMPOOL AND P2P
    // =========================================================================

    TendermintEvidenceEvidenceListMessage => TENDERMINT_EVIDENCE_EVIDENCE_LIST_MESSAGE = "tendermint/evidence/EvidenceListMessage",
    TendermintMempoolTxMessage => TENDERMINT_MEMPOOL_TX_MESSAGE = "tendermint/mempool/TxMessage",
    TendermintP2pPacketPing => TENDERMINT_P2P_PACKET_PING = "tendermint/p2p/PacketPing",
    TendermintP2pPacketPong => TENDERMINT_P2P_PACKET_PONG = "tendermint/p2p/PacketPong",
    TendermintP2pPacketMsg => TENDERMINT_P2P_PACKET_MSG = "tendermint/p2p/PacketMsg",
    TendermintP2pPexRequestMessage => TENDERMINT_P2P_PEX_REQUEST_MESSAGE = "tendermint/p2p/PexRequestMessage",
    TendermintP2pPexAddrsMessage => TENDERMINT_P2P_PEX_ADDRS_MESSAGE = "tendermint/p2p/PexAddrsMessage",

    // =========================================================================
    // TENDERMINT REMOTE SIGNER
    // =========================================================================

    TendermintRemotesignerPubKeyRequest => TENDERMINT_REMOTESIGNER_PUB_KEY_REQUEST = "tendermint/remotesigner/PubKeyRequest",
    TendermintRemotesignerPubKeyResponse => TENDERMINT_REMOTESIGNER_PUB_KEY_RESPONSE = "tendermint/remotesigner/PubKeyResponse",
    TendermintRemotesignerSignVoteRequest => TENDERMINT_REMOTESIGNER_SIGN_VOTE_REQUEST = "tendermint/remotesigner/SignVoteRequest",
    TendermintRemotesignerSignedVoteResponse => TENDERMINT_REMOTESIGNER_SIGNED_VOTE_RESPONSE = "tendermint/remotesigner/SignedVoteResponse",
    TendermintRemotesignerSignProposalRequest => TENDERMINT_REMOTESIGNER_SIGN_PROPOSAL_REQUEST = "tendermint/remotesigner/SignProposalRequest",
    TendermintRemotesignerSignedProposalResponse => TENDERMINT_REMOTESIGNER_SIGNED_PROPOSAL_RESPONSE = "tendermint/remotesigner/SignedProposalResponse",
    TendermintRemotesignerPingRequest => TENDERMINT_REMOTESIGNER_PING_REQUEST = "tendermint/remotesigner/PingRequest",
    TendermintRemotesignerPingResponse => TENDERMINT_REMOTESIGNER_PING_RESPONSE = "tendermint/remotesigner/PingResponse",

    // =========================================================================
    // TENDERMINT EVENTS
    // =========================================================================

    TendermintEventNewBlock => TENDERMINT_EVENT_NEW_BLOCK = "tendermint/event/NewBlock",
    TendermintEventNewBlockHeader => TENDERMINT_EVENT_NEW_BLOCK_HEADER = "tendermint/event/NewBlockHeader",
    TendermintEventTx => TENDERMINT_EVENT_TX = "tendermint/event/Tx",
    TendermintEventRoundState => TENDERMINT_EVENT_ROUND_STATE = "tendermint/event/RoundState",
    TendermintEventNewRound => TENDERMINT_EVENT_NEW_ROUND = "tendermint/event/NewRound",
    TendermintEventCompleteProposal => TENDERMINT_EVENT_COMPLETE_PROPOSAL = "tendermint/event/CompleteProposal",
    TendermintEventVote => TENDERMINT_EVENT_VOTE = "tendermint/event/Vote",
    TendermintEventValidatorSetUpdates => TENDERMINT_EVENT_VALIDATOR_SET_UPDATES = "tendermint/event/ValidatorSetUpdates",
    TendermintEventProposalString => TENDERMINT_EVENT_PROPOSAL_STRING = "tendermint/event/ProposalString",

    // =========================================================================
    // TENDERMINT EVIDENCE TYPES
    // =========================================================================

    TendermintDuplicateVoteEvidence => TENDERMINT_DUPLICATE_VOTE_EVIDENCE = "tendermint/DuplicateVoteEvidence",
    TendermintMockGoodEvidence => TENDERMINT_MOCK_GOOD_EVIDENCE = "tendermint/MockGoodEvidence",
    TendermintMockRandomGoodEvidence => TENDERMINT_MOCK_RANDOM_GOOD_EVIDENCE = "tendermint/MockRandomGoodEvidence",
    TendermintMockBadEvidence => TENDERMINT_MOCK_BAD_EVIDENCE = "tendermint/MockBadEvidence",
}

impl TypeTag {
    /// Returns the namespace prefix, the part of the tag before the first `/`.
    pub fn namespace(self) -> &'static str {
        let s = self.as_str();
        match s.find('/') {
            Some(i) => &s[..i],
            None => s,
        }
    }

    /// Returns the disambiguation and prefix bytes for this tag.
    pub fn disfix(self) -> (DisambBytes, PrefixBytes) {
        registry::disfix_of(self)
    }

    /// Returns the 4 prefix bytes written before a registered concrete value.
    pub fn prefix_bytes(self) -> PrefixBytes {
        self.disfix().1
    }

    /// Returns the 3 disambiguation bytes.
    pub fn disamb_bytes(self) -> DisambBytes {
        self.disfix().0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeTag {
    type Err = UnknownTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::parse(s).ok_or_else(|| UnknownTypeTag { tag: s.to_string() })
    }
}

impl TryFrom<&str> for TypeTag {
    type Error = UnknownTypeTag;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
