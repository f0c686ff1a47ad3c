//! Content digests of rendered outputs.

use std::fmt;

use crate::error::{DatagenError, DatagenResult};

/// BLAKE3 digest of one rendered output file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// Digest rendered bytes.
    pub fn of(bytes: &[u8]) -> Self {
        ContentDigest(*blake3::hash(bytes).as_bytes())
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(input: &str) -> DatagenResult<Self> {
        let bytes = hex::decode(input).map_err(|_| DatagenError::InvalidDigest {
            input: input.to_string(),
        })?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| DatagenError::InvalidDigest {
                input: input.to_string(),
            })?;
        Ok(ContentDigest(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentDigest({})", &self.to_hex()[..8])
    }
}
