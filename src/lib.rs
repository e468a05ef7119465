//! EDID decoding for DDC/CI monitors.
//!
//! Decodes manufacturer, model and serial, manufacture date, version,
//! feature support and chromaticity from the base EDID block. Every field is
//! decoded on its own and is simply absent when the buffer is too short or
//! the value is out of range.
//!
//! # Example
//!
//! ```rust,no_run
//! extern crate ddc_edid;
//!
//! # fn main() {
//! let edid = ddc_edid::read_edid_file("/sys/class/drm/card0-DP-1/edid").unwrap();
//! let info = ddc_edid::decode(&edid);
//! println!("{}", info);
//! if let Some(chromaticity) = info.chromaticity {
//!     println!("White point: {:.4}, {:.4}", chromaticity.white.x, chromaticity.white.y);
//! }
//! # }
//! ```

mod descriptor;
mod edid;
mod error;
#[cfg(target_os = "macos")]
mod iokit;
#[cfg(target_os = "macos")]
pub mod macos;
mod pnp;
mod source;
#[cfg(target_os = "linux")]
pub mod sysfs;
mod types;

pub use edid::*;
pub use error::Error;
pub use source::*;
pub use types::*;
