//! Transport seam between the client and the physical device link

use std::fmt;

use async_trait::async_trait;

use crate::apdu::ApduCommand;

/// Status word reported when no application is selected on the device
pub const SW_APP_NOT_SELECTED: u16 = 0x6700;

/// Error surfaced by a transport implementation
#[derive(Debug, Clone)]
pub struct TransportError {
    /// APDU status word, when the failure came from the device itself
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for TransportError {}

/// Abstraction over the link carrying APDUs to the device.
///
/// Implementations own the wire framing (USB HID reports, BLE, a TCP
/// socket to a Speculos simulator) and hand back the response data with
/// the trailing status word already stripped. A non-success status word
/// becomes a [`TransportError`] carrying that status.
#[async_trait]
pub trait Transport: Send {
    async fn exchange(&mut self, command: &ApduCommand) -> Result<Vec<u8>, TransportError>;
}
