//! APDU framing for the Zilliqa Ledger app

/// Command class shared by every instruction of the Zilliqa app
pub const CLA: u8 = 0xE0;

/// Instruction codes understood by the device app
pub mod ins {
    pub const GET_VERSION: u8 = 0x01;
    pub const GET_PUBLIC_KEY: u8 = 0x02;
    /// Same code as GET_PUBLIC_KEY; the device dispatches on P2
    pub const GET_ADDRESS: u8 = 0x02;
    pub const SIGN_TXN: u8 = 0x04;
    pub const SIGN_HASH: u8 = 0x08;
}

/// Compressed secp256k1 public key length
pub const PUB_KEY_LEN: usize = 33;
/// Schnorr signature length
pub const SIG_LEN: usize = 64;
/// Longest hash the device will sign
pub const MAX_HASH_LEN: usize = 32;
/// Fixed length of the bech32 address string in the device response
pub const BECH32_ADDR_LEN: usize = 43;
/// Transactions are streamed to the device in batches of this many bytes
pub const STREAM_CHUNK_LEN: usize = 200;

/// A single APDU exchange request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApduCommand {
    pub cla: u8,
    pub ins: u8,
    pub p1: u8,
    pub p2: u8,
    pub data: Vec<u8>,
}

impl ApduCommand {
    /// Build a command under the Zilliqa app's command class
    pub fn new(ins: u8, p1: u8, p2: u8, data: Vec<u8>) -> Self {
        Self {
            cla: CLA,
            ins,
            p1,
            p2,
            data,
        }
    }
}
