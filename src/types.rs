//! Result types returned by the client

use std::fmt;

/// Version of the Zilliqa app running on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Public key and account address for a derivation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressInfo {
    /// Compressed secp256k1 public key, lowercase hex
    pub public_key: String,
    /// Bech32 account address ("zil1...")
    pub address: String,
}
