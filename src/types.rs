use serde::{Serialize, Serializer};
use std::fmt;

/// EDID structure version, e.g. 1.3 or 1.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdidVersion {
    /// Version number (byte 18)
    pub major: u8,
    /// Revision number (byte 19)
    pub minor: u8,
}

impl fmt::Display for EdidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Video input definition byte (byte 20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoInputDefinition {
    /// Bit 7: digital input when set, analog otherwise
    pub is_digital: bool,
    /// The undecoded byte, for diagnostics
    pub raw: u8,
}

/// Display color type, bits 4..3 of the feature support byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayType {
    Monochrome,
    RgbColor,
    NonRgbColor,
    Undefined,
}

impl DisplayType {
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => DisplayType::Monochrome,
            0b01 => DisplayType::RgbColor,
            0b10 => DisplayType::NonRgbColor,
            _ => DisplayType::Undefined,
        }
    }

    /// Human readable description.
    pub fn description(&self) -> &'static str {
        match self {
            DisplayType::Monochrome => "Monochrome/Grayscale",
            DisplayType::RgbColor => "RGB Color",
            DisplayType::NonRgbColor => "Non-RGB Color",
            DisplayType::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for DisplayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for DisplayType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}

/// Feature support byte (byte 24), one field per bit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedFeatures {
    pub dpms_standby: bool,
    pub dpms_suspend: bool,
    pub dpms_active_off: bool,
    pub display_type: DisplayType,
    /// sRGB is the default color space
    pub default_color_space: bool,
    /// The first detailed timing descriptor holds the preferred mode
    pub preferred_timing_mode: bool,
    pub continuous_frequency: bool,
}

/// A CIE 1931 (x, y) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChromaticityPoint {
    pub x: f64,
    pub y: f64,
}

impl ChromaticityPoint {
    /// Builds a point from two 10-bit fixed point fractions of 1.0.
    pub fn from_raw(x: u16, y: u16) -> Self {
        ChromaticityPoint {
            x: f64::from(x) / 1024.0,
            y: f64::from(y) / 1024.0,
        }
    }
}

/// Color primaries and white point of the display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chromaticity {
    pub red: ChromaticityPoint,
    pub green: ChromaticityPoint,
    pub blue: ChromaticityPoint,
    pub white: ChromaticityPoint,
}

/// Maximum image size in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenSize {
    pub width_cm: u8,
    pub height_cm: u8,
}

/// Everything that could be decoded from one EDID block.
///
/// Each field is decoded on its own: a missing field never prevents
/// the others from being filled in. Absent fields are left out of the
/// serialized form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdidInfo {
    pub header_valid: bool,
    pub checksum_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<String>,
    pub manufacturer_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphanumeric_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_week: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edid_version: Option<EdidVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_input: Option<VideoInputDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_size: Option<ScreenSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SupportedFeatures>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chromaticity: Option<Chromaticity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_count: Option<u8>,
}

impl fmt::Display for EdidInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (SN: {})",
            self.manufacturer_name,
            self.model_name.as_deref().unwrap_or("N/A"),
            self.serial_number.as_deref().unwrap_or("N/A"),
        )
    }
}
