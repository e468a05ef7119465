use crate::edid::{decode, parse_extension_count, EDID_BLOCK_LEN};
use crate::error::Error;
use crate::types::EdidInfo;
use ddc::Edid;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Raw EDID of one connected display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayEdid {
    /// Connector or display name reported by the platform
    pub name: String,
    /// Base block, possibly followed by extension blocks
    pub edid: Vec<u8>,
}

impl DisplayEdid {
    /// Decodes the base block.
    pub fn decode(&self) -> EdidInfo {
        decode(&self.edid)
    }
}

fn read_block<D>(device: &mut D, offset: u8) -> Result<Vec<u8>, Error>
where
    D: Edid,
    D::EdidError: std::error::Error + Send + Sync + 'static,
{
    let mut block = vec![0u8; EDID_BLOCK_LEN];
    let len = device.read_edid(offset, &mut block).map_err(Error::device)?;
    debug!(offset, len, "read EDID block");
    if len < EDID_BLOCK_LEN {
        return Err(Error::ShortRead {
            expected: EDID_BLOCK_LEN,
            actual: len,
        });
    }
    Ok(block)
}

/// Reads the 128-byte base EDID block from a DDC device.
pub fn read_edid<D>(device: &mut D) -> Result<Vec<u8>, Error>
where
    D: Edid,
    D::EdidError: std::error::Error + Send + Sync + 'static,
{
    read_block(device, 0)
}

/// Reads the base block and, when one is announced, the first extension
/// block.
///
/// Further extensions need E-DDC segment addressing, which `ddc::Edid` does
/// not expose; they are skipped.
pub fn read_edid_with_extensions<D>(device: &mut D) -> Result<Vec<u8>, Error>
where
    D: Edid,
    D::EdidError: std::error::Error + Send + Sync + 'static,
{
    let mut edid = read_block(device, 0)?;
    let extensions = parse_extension_count(&edid).unwrap_or(0);
    if extensions > 0 {
        if extensions > 1 {
            warn!(extensions, "only the first EDID extension block is addressable");
        }
        let extension = read_block(device, EDID_BLOCK_LEN as u8)?;
        edid.extend_from_slice(&extension);
    }
    Ok(edid)
}

/// Reads a raw EDID dump, such as `/sys/class/drm/<connector>/edid`.
pub fn read_edid_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let path = path.as_ref();
    let edid = fs::read(path)?;
    debug!(path = %path.display(), len = edid.len(), "read EDID file");
    if edid.is_empty() {
        return Err(Error::Empty);
    }
    Ok(edid)
}
