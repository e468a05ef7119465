//! EDIDs exposed by the Linux DRM subsystem.

use crate::error::Error;
use crate::source::{read_edid_file, DisplayEdid};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const DRM_CLASS_DIR: &str = "/sys/class/drm";

/// EDIDs of all connectors with a display attached.
pub fn connected_displays() -> Result<Vec<DisplayEdid>, Error> {
    connected_displays_in(DRM_CLASS_DIR)
}

/// Same as [`connected_displays`], for a DRM class directory elsewhere.
///
/// Every entry holding a non-empty `edid` file is returned, sorted by name.
pub fn connected_displays_in<P: AsRef<Path>>(drm_dir: P) -> Result<Vec<DisplayEdid>, Error> {
    let mut displays = Vec::new();
    for entry in fs::read_dir(drm_dir)? {
        let entry = entry?;
        let edid_path = entry.path().join("edid");
        if !edid_path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match read_edid_file(&edid_path) {
            Ok(edid) => displays.push(DisplayEdid { name, edid }),
            Err(Error::Empty) => debug!(connector = %name, "connector has no display"),
            Err(err) => warn!(connector = %name, "can't read EDID: {}", err),
        }
    }
    displays.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(displays)
}
