//! High-level Zilliqa Ledger client API

use log::debug;

use crate::apdu::{BECH32_ADDR_LEN, MAX_HASH_LEN, PUB_KEY_LEN, SIG_LEN, ins};
use crate::error::{Error, Result};
use crate::path::{PathPolicy, key_index};
use crate::protocol::ZilliqaProtocol;
use crate::transport::{SW_APP_NOT_SELECTED, Transport};
use crate::types::{AddressInfo, VersionInfo};

/// High-level client for the Zilliqa app on a Ledger device
pub struct ZilliqaClient<T> {
    protocol: ZilliqaProtocol<T>,
    path_policy: PathPolicy,
}

impl<T: Transport> ZilliqaClient<T> {
    /// Wrap a transport, enforcing the canonical `44'/313'/n'/0'/0'` path
    /// template.
    pub fn new(transport: T) -> Self {
        Self::with_path_policy(transport, PathPolicy::Strict)
    }

    /// Wrap a transport with an explicit path strictness policy
    pub fn with_path_policy(transport: T, path_policy: PathPolicy) -> Self {
        Self {
            protocol: ZilliqaProtocol::new(transport),
            path_policy,
        }
    }

    /// Get the version of the Zilliqa app running on the device
    pub async fn get_version(&self) -> Result<VersionInfo> {
        debug!("Getting app version");
        let response = self
            .protocol
            .exchange(ins::GET_VERSION, 0x00, 0x00, Vec::new())
            .await?;
        let bytes = response.get(..3).ok_or(Error::InvalidResponse)?;

        Ok(VersionInfo {
            major: version_component(bytes[0]),
            minor: version_component(bytes[1]),
            patch: version_component(bytes[2]),
        })
    }

    /// Get the compressed public key at a derivation path, hex-encoded
    pub async fn get_public_key(&self, path: &str) -> Result<String> {
        debug!("Getting public key for path: {path}");
        let payload = self.index_payload(path)?;
        let response = self
            .protocol
            .exchange(ins::GET_PUBLIC_KEY, 0x00, 0x00, payload)
            .await?;

        let key = response.get(..PUB_KEY_LEN).ok_or(Error::InvalidResponse)?;
        Ok(hex::encode(key))
    }

    /// Get the public key and bech32 account address at a derivation path
    pub async fn get_address(&self, path: &str) -> Result<AddressInfo> {
        debug!("Getting address for path: {path}");
        let payload = self.index_payload(path)?;
        let response = match self
            .protocol
            .exchange(ins::GET_ADDRESS, 0x00, 0x01, payload)
            .await
        {
            Err(Error::Transport(e)) if e.status == Some(SW_APP_NOT_SELECTED) => {
                return Err(Error::AppNotOpen);
            }
            other => other?,
        };

        let key = response.get(..PUB_KEY_LEN).ok_or(Error::InvalidResponse)?;
        let addr = response
            .get(PUB_KEY_LEN..PUB_KEY_LEN + BECH32_ADDR_LEN)
            .ok_or(Error::InvalidResponse)?;

        Ok(AddressInfo {
            public_key: hex::encode(key),
            address: std::str::from_utf8(addr)
                .map_err(|_| Error::InvalidResponse)?
                .to_string(),
        })
    }

    /// Sign a hash, returning the signature hex-encoded.
    ///
    /// Input longer than 32 bytes is truncated to its first 32 bytes
    /// before transmission.
    pub async fn sign_hash(&self, path: &str, hash: &[u8]) -> Result<String> {
        debug!("Signing {} byte hash for path: {path}", hash.len());
        if hash.is_empty() {
            return Err(Error::InvalidHashLength(0));
        }
        let hash = &hash[..hash.len().min(MAX_HASH_LEN)];

        let mut payload = self.index_payload(path)?;
        payload.extend_from_slice(hash);
        let response = self
            .protocol
            .exchange(ins::SIGN_HASH, 0x00, 0x00, payload)
            .await?;
        signature_hex(&response)
    }

    /// Sign a serialized transaction, streaming it to the device in
    /// 200-byte rounds, and return the signature hex-encoded.
    pub async fn sign_transaction(&self, path: &str, txn: &[u8]) -> Result<String> {
        debug!("Signing {} byte transaction for path: {path}", txn.len());
        let index = key_index(path, self.path_policy)?;
        let response = self.protocol.sign_transaction(index, txn, 0x00, 0x00).await?;
        signature_hex(&response)
    }

    fn index_payload(&self, path: &str) -> Result<Vec<u8>> {
        let index = key_index(path, self.path_policy)?;
        Ok(index.to_le_bytes().to_vec())
    }
}

/// The app reports each version component as its hex digits read back as
/// decimal (0x12 is version 12, not 18), so re-read the nibbles instead of
/// taking the raw byte.
fn version_component(byte: u8) -> u8 {
    (byte >> 4) * 10 + (byte & 0x0f)
}

fn signature_hex(response: &[u8]) -> Result<String> {
    let sig = response.get(..SIG_LEN).ok_or(Error::InvalidResponse)?;
    Ok(hex::encode(sig))
}
