//! Low-level APDU exchange plumbing for the Zilliqa app

use log::debug;
use tokio::sync::Mutex;

use crate::apdu::{ApduCommand, STREAM_CHUNK_LEN, ins};
use crate::error::Result;
use crate::transport::Transport;

/// Protocol handler serializing APDU exchanges on one connection.
///
/// The device processes one exchange at a time, so the transport sits
/// behind a mutex and every operation holds the guard until its last
/// round has completed.
pub struct ZilliqaProtocol<T> {
    transport: Mutex<T>,
}

impl<T: Transport> ZilliqaProtocol<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    /// Single-round exchange
    pub async fn exchange(&self, ins: u8, p1: u8, p2: u8, data: Vec<u8>) -> Result<Vec<u8>> {
        let command = ApduCommand::new(ins, p1, p2, data);
        let mut transport = self.transport.lock().await;
        Ok(transport.exchange(&command).await?)
    }

    /// Stream a serialized transaction to the device, returning the final
    /// round's response.
    ///
    /// Round 1 carries the key index, the byte count still queued host-side
    /// and the first chunk; every later round drops the index field. The
    /// device ignores P1/P2 after round 1; they are sent as the first
    /// round's P2 value, matching the deployed app. See signTxn.c in the
    /// device app for the payload sequence.
    pub async fn sign_transaction(
        &self,
        key_index: u32,
        txn: &[u8],
        p1: u8,
        p2: u8,
    ) -> Result<Vec<u8>> {
        let mut transport = self.transport.lock().await;

        let (chunk, mut remaining) = split_chunk(txn);
        let mut payload = Vec::with_capacity(12 + chunk.len());
        payload.extend_from_slice(&key_index.to_le_bytes());
        payload.extend_from_slice(&(remaining.len() as u32).to_le_bytes());
        payload.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
        payload.extend_from_slice(chunk);

        debug!(
            "sign_transaction round 1: {} bytes, {} remaining",
            chunk.len(),
            remaining.len()
        );
        let command = ApduCommand::new(ins::SIGN_TXN, p1, p2, payload);
        let mut response = transport.exchange(&command).await?;

        while !remaining.is_empty() {
            let (chunk, rest) = split_chunk(remaining);
            remaining = rest;

            let mut payload = Vec::with_capacity(8 + chunk.len());
            payload.extend_from_slice(&(remaining.len() as u32).to_le_bytes());
            payload.extend_from_slice(&(chunk.len() as u32).to_le_bytes());
            payload.extend_from_slice(chunk);

            debug!(
                "sign_transaction round: {} bytes, {} remaining",
                chunk.len(),
                remaining.len()
            );
            let command = ApduCommand::new(ins::SIGN_TXN, p2, p2, payload);
            response = transport.exchange(&command).await?;
        }

        Ok(response)
    }
}

fn split_chunk(bytes: &[u8]) -> (&[u8], &[u8]) {
    bytes.split_at(bytes.len().min(STREAM_CHUNK_LEN))
}
