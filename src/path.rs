//! BIP32 derivation path parsing for the Zilliqa app

use crate::error::{Error, Result};

/// High bit marking a hardened path component
pub const HARDENED: u32 = 0x8000_0000;

const PATH_DEPTH: usize = 5;
const PURPOSE: u32 = 44 | HARDENED;
/// Zilliqa's registered SLIP-44 coin type
const COIN_TYPE: u32 = 313 | HARDENED;

/// How strictly [`key_index`] checks a path against the app's derivation
/// template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PathPolicy {
    /// Require the `44'/313'/n'/0'/0'` template and extract the account
    /// index with the hardened bit cleared.
    #[default]
    Strict,
    /// Accept any 5-component path and take the last component verbatim.
    /// Matches what older wallet releases sent to the device; only use it
    /// to stay compatible with accounts created by those releases.
    Legacy,
}

/// Split a slash-separated derivation path into its u32 components.
///
/// A trailing apostrophe marks a component hardened. Depth and template
/// are not checked here.
pub fn split_path(path: &str) -> Result<Vec<u32>> {
    let mut components = Vec::new();
    for segment in path.split('/') {
        // parseInt-style: leading digits only, anything after them is
        // ignored apart from a trailing apostrophe.
        let digits = segment.bytes().take_while(|b| b.is_ascii_digit()).count();
        let mut value: u32 = segment[..digits]
            .parse()
            .map_err(|_| Error::MalformedPath(path.to_string()))?;
        if segment.len() > 1 && segment.ends_with('\'') {
            value |= HARDENED;
        }
        components.push(value);
    }
    Ok(components)
}

/// Extract the device-facing key index from a derivation path.
pub fn key_index(path: &str, policy: PathPolicy) -> Result<u32> {
    let components = split_path(path)?;
    if components.len() != PATH_DEPTH {
        return Err(Error::InvalidPath);
    }
    match policy {
        PathPolicy::Strict => {
            if components[0] != PURPOSE
                || components[1] != COIN_TYPE
                || components[2] & HARDENED != HARDENED
                || components[3] != HARDENED
                || components[4] != HARDENED
            {
                return Err(Error::InvalidPath);
            }
            Ok(components[2] & !HARDENED)
        }
        PathPolicy::Legacy => Ok(components[4]),
    }
}
