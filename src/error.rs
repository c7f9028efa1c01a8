//! Error types for ledger-zilliqa

use thiserror::Error;

use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Path {0} is invalid")]
    MalformedPath(String),

    #[error("Path format should be: 44'/313'/n'/0'/0'")]
    InvalidPath,

    #[error("Hash length {0} is invalid")]
    InvalidHashLength(usize),

    #[error("Please check if the Zilliqa app is open on the Ledger")]
    AppNotOpen,

    #[error("Invalid response from device")]
    InvalidResponse,

    #[error("{0}")]
    Transport(#[from] TransportError),
}

pub type Result<T> = std::result::Result<T, Error>;
