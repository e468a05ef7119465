//! Field decoders for the 128-byte base EDID block (VESA EDID 1.x).
//!
//! Every decoder takes the whole buffer and checks only the bytes it needs:
//! a short buffer or an out-of-range value gives `None`, never a panic, and
//! one missing field never affects another.

use crate::descriptor::{self, TAG_ALPHANUMERIC_STRING, TAG_PRODUCT_NAME, TAG_SERIAL_NUMBER};
use crate::pnp;
use crate::types::*;
use nom::bytes::complete::{tag, take};
use nom::number::complete::{be_u16, le_u16, le_u32, le_u8};
use nom::IResult;

/// Size of the base block and of every extension block.
pub const EDID_BLOCK_LEN: usize = 128;

/// Fixed pattern at the start of every base block.
pub const EDID_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

const MANUFACTURER_ID_OFFSET: usize = 8;
const PRODUCT_CODE_OFFSET: usize = 10;
const SERIAL_NUMBER_OFFSET: usize = 12;
const MANUFACTURE_WEEK_OFFSET: usize = 16;
const MANUFACTURE_YEAR_OFFSET: usize = 17;
const VERSION_OFFSET: usize = 18;
const VIDEO_INPUT_OFFSET: usize = 20;
const SCREEN_SIZE_OFFSET: usize = 21;
const GAMMA_OFFSET: usize = 23;
const FEATURES_OFFSET: usize = 24;
const CHROMATICITY_OFFSET: usize = 25;
const CHROMATICITY_LEN: usize = 10;
const EXTENSION_COUNT_OFFSET: usize = 126;

const YEAR_BASE: u16 = 1990;
const LAST_YEAR: u16 = 2100;

/// Runs `parser` on the buffer starting at `offset`. `nom`'s complete
/// parsers fail on short input, which is all the length checking needed.
fn read_at<'a, O, P>(edid: &'a [u8], offset: usize, mut parser: P) -> Option<O>
where
    P: FnMut(&'a [u8]) -> IResult<&'a [u8], O>,
{
    let input = edid.get(offset..)?;
    parser(input).ok().map(|(_, value)| value)
}

/// Checks the fixed 8-byte header.
pub fn validate_header(edid: &[u8]) -> bool {
    read_at(edid, 0, tag(&EDID_HEADER[..])).is_some()
}

/// Checks that the base block bytes sum to zero (mod 256).
pub fn validate_checksum(edid: &[u8]) -> bool {
    match edid.get(..EDID_BLOCK_LEN) {
        Some(block) => block.iter().fold(0u8, |sum, &b| sum.wrapping_add(b)) == 0,
        None => false,
    }
}

/// Decodes a packed PNP ID: three 5-bit letters, `1` being `A`.
fn decode_pnp_id(packed: u16) -> String {
    [10u16, 5, 0]
        .iter()
        .map(|shift| char::from(((packed >> shift) & 0x1f) as u8 + b'@'))
        .collect()
}

/// Three-letter PNP manufacturer ID, e.g. `"DEL"`.
pub fn parse_manufacturer_id(edid: &[u8]) -> Option<String> {
    read_at(edid, MANUFACTURER_ID_OFFSET, be_u16).map(decode_pnp_id)
}

/// Resolves a PNP ID to a vendor name.
///
/// Unknown IDs are returned as they are; a missing or empty ID gives
/// `"Unknown"`.
pub fn parse_manufacturer_name(manufacturer_id: Option<&str>) -> &str {
    match manufacturer_id {
        None | Some("") => "Unknown",
        Some(id) => pnp::vendor_name(id).unwrap_or(id),
    }
}

pub fn parse_product_code(edid: &[u8]) -> Option<u16> {
    read_at(edid, PRODUCT_CODE_OFFSET, le_u16)
}

/// The 32-bit serial number from the header. Zero means "not set".
pub fn parse_numeric_serial(edid: &[u8]) -> Option<u32> {
    read_at(edid, SERIAL_NUMBER_OFFSET, le_u32).filter(|&serial| serial != 0)
}

/// Serial number string, from the serial number descriptor when there is
/// one, otherwise the numeric header serial in decimal. A blank serial
/// number descriptor counts as missing and also falls back to the header.
pub fn parse_serial_number(edid: &[u8]) -> Option<String> {
    descriptor::find_text(edid, TAG_SERIAL_NUMBER)
        .or_else(|| parse_numeric_serial(edid).map(|serial| serial.to_string()))
}

/// Week of manufacture, 1 to 53.
pub fn parse_manufacture_week(edid: &[u8]) -> Option<u8> {
    read_at(edid, MANUFACTURE_WEEK_OFFSET, le_u8).filter(|week| (1..=53).contains(week))
}

/// Year of manufacture, 1990 to 2100.
pub fn parse_manufacture_year(edid: &[u8]) -> Option<u16> {
    read_at(edid, MANUFACTURE_YEAR_OFFSET, le_u8)
        .map(|year| YEAR_BASE + u16::from(year))
        .filter(|year| *year <= LAST_YEAR)
}

pub fn parse_edid_version(edid: &[u8]) -> Option<EdidVersion> {
    let (major, minor) = read_at(edid, VERSION_OFFSET, nom::sequence::pair(le_u8, le_u8))?;
    Some(EdidVersion { major, minor })
}

pub fn parse_video_input_definition(edid: &[u8]) -> Option<VideoInputDefinition> {
    read_at(edid, VIDEO_INPUT_OFFSET, le_u8).map(|raw| VideoInputDefinition {
        is_digital: raw & 0x80 != 0,
        raw,
    })
}

/// Maximum image size. A zero dimension means the size is unknown or
/// the bytes carry an aspect ratio instead.
pub fn parse_screen_size(edid: &[u8]) -> Option<ScreenSize> {
    let (width_cm, height_cm) = read_at(edid, SCREEN_SIZE_OFFSET, nom::sequence::pair(le_u8, le_u8))?;
    if width_cm == 0 || height_cm == 0 {
        return None;
    }
    Some(ScreenSize { width_cm, height_cm })
}

/// Display transfer characteristic; `0xFF` means it is defined elsewhere.
pub fn parse_gamma(edid: &[u8]) -> Option<f64> {
    read_at(edid, GAMMA_OFFSET, le_u8)
        .filter(|&gamma| gamma != 0xff)
        .map(|gamma| (f64::from(gamma) + 100.0) / 100.0)
}

pub fn parse_supported_features(edid: &[u8]) -> Option<SupportedFeatures> {
    read_at(edid, FEATURES_OFFSET, le_u8).map(|val| SupportedFeatures {
        dpms_standby: val & 0x80 != 0,
        dpms_suspend: val & 0x40 != 0,
        dpms_active_off: val & 0x20 != 0,
        display_type: DisplayType::from_bits(val >> 3),
        default_color_space: val & 0x04 != 0,
        preferred_timing_mode: val & 0x02 != 0,
        continuous_frequency: val & 0x01 != 0,
    })
}

/// Red, green, blue and white points.
///
/// Byte 25 carries the two low bits of Rx, Ry, Gx, Gy and byte 26 those of
/// Bx, By, Wx, Wy (most significant pair first); bytes 27 to 34 carry the
/// eight high bits of each value in the same order.
///
/// This is the per-pair VESA layout, not one low-bits byte for all x values
/// and another for all y values.
pub fn parse_chromaticity(edid: &[u8]) -> Option<Chromaticity> {
    let bytes: &[u8; CHROMATICITY_LEN] = read_at(edid, CHROMATICITY_OFFSET, take(CHROMATICITY_LEN))?
        .try_into()
        .ok()?;
    let [rg_low, bw_low, rx, ry, gx, gy, bx, by, wx, wy] = *bytes;
    let coord = |high: u8, low: u8, shift: u8| (u16::from(high) << 2) | (u16::from(low >> shift) & 0b11);
    Some(Chromaticity {
        red: ChromaticityPoint::from_raw(coord(rx, rg_low, 6), coord(ry, rg_low, 4)),
        green: ChromaticityPoint::from_raw(coord(gx, rg_low, 2), coord(gy, rg_low, 0)),
        blue: ChromaticityPoint::from_raw(coord(bx, bw_low, 6), coord(by, bw_low, 4)),
        white: ChromaticityPoint::from_raw(coord(wx, bw_low, 2), coord(wy, bw_low, 0)),
    })
}

/// Monitor name from the product name descriptor.
pub fn parse_model_name(edid: &[u8]) -> Option<String> {
    descriptor::find_text(edid, TAG_PRODUCT_NAME)
}

/// Free-form text from the alphanumeric data string descriptor.
pub fn parse_alphanumeric_string(edid: &[u8]) -> Option<String> {
    descriptor::find_text(edid, TAG_ALPHANUMERIC_STRING)
}

/// Number of extension blocks following the base block.
pub fn parse_extension_count(edid: &[u8]) -> Option<u8> {
    read_at(edid, EXTENSION_COUNT_OFFSET, le_u8)
}

/// Decodes every field that is present.
pub fn decode(edid: &[u8]) -> EdidInfo {
    let manufacturer_id = parse_manufacturer_id(edid);
    let manufacturer_name = parse_manufacturer_name(manufacturer_id.as_deref()).to_owned();
    EdidInfo {
        header_valid: validate_header(edid),
        checksum_valid: validate_checksum(edid),
        manufacturer_id,
        manufacturer_name,
        model_name: parse_model_name(edid),
        serial_number: parse_serial_number(edid),
        alphanumeric_string: parse_alphanumeric_string(edid),
        product_code: parse_product_code(edid),
        manufacture_year: parse_manufacture_year(edid),
        manufacture_week: parse_manufacture_week(edid),
        edid_version: parse_edid_version(edid),
        video_input: parse_video_input_definition(edid),
        screen_size: parse_screen_size(edid),
        gamma: parse_gamma(edid),
        features: parse_supported_features(edid),
        chromaticity: parse_chromaticity(edid),
        extension_count: parse_extension_count(edid),
    }
}

impl EdidInfo {
    /// Same as [`decode`].
    pub fn decode(edid: &[u8]) -> Self {
        decode(edid)
    }
}
