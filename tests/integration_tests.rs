extern crate ddc_edid;

use ddc_edid::{DisplayType, EdidVersion, Error, ScreenSize, SupportedFeatures, VideoInputDefinition};
use std::io::Cursor;

/// Samsung SyncMaster, 1680x1050, on a VGA connector.
const SYNCMASTER: &[u8; 128] = include_bytes!("data/samsung-syncmaster.bin");

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-6, "{} != {}", actual, expected);
}

#[test]
fn decodes_real_world_edid() {
    let info = ddc_edid::decode(SYNCMASTER);

    assert!(info.header_valid);
    assert!(info.checksum_valid);
    assert_eq!(info.manufacturer_id.as_deref(), Some("SAM"));
    assert_eq!(info.manufacturer_name, "Samsung Electric Company");
    assert_eq!(info.model_name.as_deref(), Some("SyncMaster"));
    assert_eq!(info.serial_number.as_deref(), Some("HS3P701105"));
    assert_eq!(info.alphanumeric_string, None);
    assert_eq!(info.product_code, Some(596));
    assert_eq!(info.manufacture_week, Some(27));
    assert_eq!(info.manufacture_year, Some(2007));
    assert_eq!(info.edid_version, Some(EdidVersion { major: 1, minor: 3 }));
    assert_eq!(
        info.video_input,
        Some(VideoInputDefinition {
            is_digital: false,
            raw: 0x0e
        })
    );
    assert_eq!(
        info.screen_size,
        Some(ScreenSize {
            width_cm: 47,
            height_cm: 30
        })
    );
    assert_close(info.gamma.unwrap(), 2.2);
    assert_eq!(
        info.features,
        Some(SupportedFeatures {
            dpms_standby: false,
            dpms_suspend: false,
            dpms_active_off: true,
            display_type: DisplayType::RgbColor,
            default_color_space: false,
            preferred_timing_mode: true,
            continuous_frequency: false,
        })
    );
    assert_eq!(info.extension_count, Some(0));

    let chromaticity = info.chromaticity.unwrap();
    assert_close(chromaticity.red.x, 659.0 / 1024.0);
    assert_close(chromaticity.red.y, 341.0 / 1024.0);
    assert_close(chromaticity.green.x, 293.0 / 1024.0);
    assert_close(chromaticity.green.y, 617.0 / 1024.0);
    assert_close(chromaticity.blue.x, 156.0 / 1024.0);
    assert_close(chromaticity.blue.y, 81.0 / 1024.0);
    assert_close(chromaticity.white.x, 321.0 / 1024.0);
    assert_close(chromaticity.white.y, 337.0 / 1024.0);

    assert_eq!(info.to_string(), "Samsung Electric Company SyncMaster (SN: HS3P701105)");
}

#[test]
fn agrees_with_edid_rs() {
    let reference = edid_rs::parse(&mut Cursor::new(SYNCMASTER.to_vec())).expect("edid-rs rejected the sample");
    let info = ddc_edid::decode(SYNCMASTER);

    assert_eq!(info.product_code, Some(reference.product.product_code));
    assert_eq!(info.manufacture_week, Some(reference.product.manufacture_date.week));
    assert_eq!(info.manufacture_year, Some(reference.product.manufacture_date.year));
    assert_eq!(
        info.edid_version,
        Some(EdidVersion {
            major: reference.version.version,
            minor: reference.version.revision
        })
    );
    assert_eq!(info.extension_count, Some(reference.extensions));

    let chromaticity = info.chromaticity.unwrap();
    let points = [
        (chromaticity.red, reference.color.red),
        (chromaticity.green, reference.color.green),
        (chromaticity.blue, reference.color.blue),
        (chromaticity.white, reference.color.white),
    ];
    for (ours, (x, y)) in points {
        assert_close(ours.x, f64::from(x));
        assert_close(ours.y, f64::from(y));
    }

    let names: Vec<_> = reference
        .descriptors
        .0
        .iter()
        .filter_map(|descriptor| match descriptor {
            edid_rs::MonitorDescriptor::MonitorName(name) => Some(name.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, [info.model_name.as_deref().unwrap()]);
}

#[test]
fn extension_blocks_are_ignored() {
    let mut edid = SYNCMASTER.to_vec();
    edid.extend_from_slice(&[0xaa; 128]);
    assert_eq!(ddc_edid::decode(&edid), ddc_edid::decode(SYNCMASTER));
}

#[test]
fn truncated_edid_keeps_header_fields() {
    let info = ddc_edid::decode(&SYNCMASTER[..20]);
    assert!(info.header_valid);
    assert!(!info.checksum_valid);
    assert_eq!(info.manufacturer_id.as_deref(), Some("SAM"));
    assert_eq!(info.edid_version, Some(EdidVersion { major: 1, minor: 3 }));
    assert_eq!(info.model_name, None);
    // Numeric serial from the header: the descriptor is out of reach.
    assert_eq!(info.serial_number.as_deref(), Some("1146106418"));
    assert_eq!(info.video_input, None);
    assert_eq!(info.chromaticity, None);
}

#[test]
fn serializes_with_camel_case_names() {
    let json = serde_json::to_value(ddc_edid::decode(SYNCMASTER)).unwrap();

    assert_eq!(json["manufacturerId"], "SAM");
    assert_eq!(json["manufacturerName"], "Samsung Electric Company");
    assert_eq!(json["modelName"], "SyncMaster");
    assert_eq!(json["serialNumber"], "HS3P701105");
    assert_eq!(json["productCode"], 596);
    assert_eq!(json["manufactureYear"], 2007);
    assert_eq!(json["manufactureWeek"], 27);
    assert_eq!(json["edidVersion"]["major"], 1);
    assert_eq!(json["edidVersion"]["minor"], 3);
    assert_eq!(json["videoInput"]["isDigital"], false);
    assert_eq!(json["features"]["displayType"], "RGB Color");
    assert_eq!(json["features"]["dpmsActiveOff"], true);
    assert_eq!(json["features"]["preferredTimingMode"], true);
    assert_close(json["chromaticity"]["white"]["y"].as_f64().unwrap(), 337.0 / 1024.0);
    assert!(json.get("alphanumericString").is_none());
}

#[test]
fn absent_fields_are_omitted_from_json() {
    let json = serde_json::to_value(ddc_edid::decode(&SYNCMASTER[..10])).unwrap();
    assert_eq!(json["manufacturerId"], "SAM");
    for field in ["modelName", "serialNumber", "productCode", "edidVersion", "chromaticity", "features"] {
        assert!(json.get(field).is_none(), "{} should be omitted", field);
    }
}

/// A DDC device backed by a byte buffer.
struct FakeDisplay {
    edid: Vec<u8>,
    broken: bool,
}

impl ddc::Edid for FakeDisplay {
    type EdidError = std::io::Error;

    fn read_edid(&mut self, offset: u8, data: &mut [u8]) -> Result<usize, Self::EdidError> {
        if self.broken {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "NAK from 0x50"));
        }
        let available = self.edid.get(offset as usize..).unwrap_or(&[]);
        let len = available.len().min(data.len());
        data[..len].copy_from_slice(&available[..len]);
        Ok(len)
    }
}

fn with_one_extension() -> Vec<u8> {
    let mut edid = SYNCMASTER.to_vec();
    edid[126] = 1;
    edid[127] = edid[127].wrapping_sub(1);
    edid.extend_from_slice(&[0x02; 128]);
    edid
}

#[test]
fn reads_base_block_from_device() {
    let mut display = FakeDisplay {
        edid: with_one_extension(),
        broken: false,
    };
    let edid = ddc_edid::read_edid(&mut display).unwrap();
    assert_eq!(edid.len(), 128);
    assert!(ddc_edid::validate_checksum(&edid));
    assert_eq!(ddc_edid::parse_extension_count(&edid), Some(1));
}

#[test]
fn reads_extension_block_from_device() {
    let mut display = FakeDisplay {
        edid: with_one_extension(),
        broken: false,
    };
    let edid = ddc_edid::read_edid_with_extensions(&mut display).unwrap();
    assert_eq!(edid, with_one_extension());

    let mut display = FakeDisplay {
        edid: SYNCMASTER.to_vec(),
        broken: false,
    };
    let edid = ddc_edid::read_edid_with_extensions(&mut display).unwrap();
    assert_eq!(edid, SYNCMASTER);
}

#[test]
fn short_device_read_is_an_error() {
    let mut display = FakeDisplay {
        edid: SYNCMASTER[..100].to_vec(),
        broken: false,
    };
    match ddc_edid::read_edid(&mut display) {
        Err(Error::ShortRead { expected, actual }) => assert_eq!((expected, actual), (128, 100)),
        other => panic!("unexpected result: {:?}", other),
    }

    // Extension announced but missing.
    let mut edid = with_one_extension();
    edid.truncate(200);
    let mut display = FakeDisplay { edid, broken: false };
    assert!(matches!(
        ddc_edid::read_edid_with_extensions(&mut display),
        Err(Error::ShortRead {
            expected: 128,
            actual: 72
        })
    ));
}

#[test]
fn device_errors_are_propagated() {
    let mut display = FakeDisplay {
        edid: SYNCMASTER.to_vec(),
        broken: true,
    };
    let err = ddc_edid::read_edid(&mut display).unwrap_err();
    assert!(matches!(err, Error::Device(_)));
    assert_eq!(err.to_string(), "DDC/CI error: NAK from 0x50");
}

#[test]
fn reads_edid_files() {
    let dir = std::env::temp_dir().join(format!("ddc-edid-files-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("edid");

    std::fs::write(&path, SYNCMASTER).unwrap();
    assert_eq!(ddc_edid::read_edid_file(&path).unwrap(), SYNCMASTER);

    std::fs::write(&path, b"").unwrap();
    assert!(matches!(ddc_edid::read_edid_file(&path), Err(Error::Empty)));

    assert!(matches!(ddc_edid::read_edid_file(dir.join("missing")), Err(Error::Io(_))));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[cfg(target_os = "linux")]
#[test]
fn lists_connected_drm_connectors() {
    let dir = std::env::temp_dir().join(format!("ddc-edid-drm-{}", std::process::id()));
    let connectors: [(&str, Option<&[u8]>); 3] = [
        ("card0-DP-1", Some(&SYNCMASTER[..])),
        ("card0-HDMI-A-1", Some(&b""[..])),
        ("card0", None),
    ];
    for (connector, edid) in connectors {
        let connector_dir = dir.join(connector);
        std::fs::create_dir_all(&connector_dir).unwrap();
        if let Some(edid) = edid {
            std::fs::write(connector_dir.join("edid"), edid).unwrap();
        }
    }

    let displays = ddc_edid::sysfs::connected_displays_in(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    assert_eq!(displays.len(), 1);
    assert_eq!(displays[0].name, "card0-DP-1");
    assert_eq!(displays[0].decode().model_name.as_deref(), Some("SyncMaster"));
}

#[test]
#[ignore]
/// Test reading EDIDs of attached monitors, this would fail on CI.
fn test_connected_displays() {
    #[cfg(target_os = "linux")]
    let displays = ddc_edid::sysfs::connected_displays().unwrap();
    #[cfg(target_os = "macos")]
    let displays = ddc_edid::macos::connected_displays().unwrap();
    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    let displays: Vec<ddc_edid::DisplayEdid> = Vec::new();

    assert_ne!(displays.len(), 0);
    for display in displays.iter() {
        let info = display.decode();
        assert!(info.header_valid, "{}: bad header", display.name);
        assert!(info.manufacturer_id.is_some());
    }
}
