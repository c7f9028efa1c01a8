//! Rust client for the Zilliqa app on Ledger hardware wallets
//!
//! This crate drives the Zilliqa signing app over any APDU transport. It
//! builds the command payload for each app instruction, streams oversized
//! transactions to the device in rounds, and decodes the fixed-layout
//! responses into public keys, bech32 addresses and signatures.
//!
//! The physical link (USB HID, BLE, a Speculos simulator socket) lives
//! behind the [`Transport`] trait and is supplied by the surrounding
//! application.
//!
//! # Examples
//!
//! ```no_run
//! use ledger_zilliqa::{Transport, ZilliqaClient};
//!
//! # async fn demo(transport: impl Transport) -> Result<(), Box<dyn std::error::Error>> {
//! let client = ZilliqaClient::new(transport);
//!
//! // Check the app is responsive
//! let version = client.get_version().await?;
//! println!("Zilliqa app {version}");
//!
//! // Get the account address
//! let info = client.get_address("44'/313'/0'/0'/0'").await?;
//! println!("Address: {}", info.address);
//!
//! // Sign a transaction
//! let signature = client.sign_transaction("44'/313'/0'/0'/0'", b"...").await?;
//! println!("Signature: {signature}");
//! # Ok(())
//! # }
//! ```

mod apdu;
mod client;
mod error;
mod path;
mod protocol;
mod transport;
mod types;

pub use apdu::ApduCommand;
pub use client::ZilliqaClient;
pub use error::{Error, Result};
pub use path::{HARDENED, PathPolicy, key_index, split_path};
pub use transport::{Transport, TransportError};
pub use types::{AddressInfo, VersionInfo};
