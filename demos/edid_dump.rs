extern crate ddc_edid;

use anyhow::Context;
use clap::Parser;
use ddc_edid::{DisplayEdid, EdidInfo};
use std::path::PathBuf;

/// Decode the EDID of connected displays or of raw EDID dumps.
#[derive(Parser, Debug)]
#[command(name = "edid_dump")]
struct Cli {
    /// Print the decoded fields as JSON
    #[arg(long)]
    json: bool,
    /// Raw EDID files to decode instead of the connected displays
    paths: Vec<PathBuf>,
}

fn setup_logs() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("warn"));

    tracing_subscriber::registry().with(filter_layer).with(fmt_layer).init();
}

#[cfg(target_os = "linux")]
fn connected_displays() -> anyhow::Result<Vec<DisplayEdid>> {
    ddc_edid::sysfs::connected_displays().context("Could not list DRM connectors")
}

#[cfg(target_os = "macos")]
fn connected_displays() -> anyhow::Result<Vec<DisplayEdid>> {
    ddc_edid::macos::connected_displays().context("Could not enumerate displays")
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn connected_displays() -> anyhow::Result<Vec<DisplayEdid>> {
    anyhow::bail!("display enumeration is not supported on this platform, pass an EDID file")
}

fn or_na<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn print_report(name: &str, info: &EdidInfo) {
    println!("{}", name);
    println!("\tHeader valid: {}", info.header_valid);
    println!("\tChecksum valid: {}", info.checksum_valid);
    println!(
        "\tManufacturer: {} ({})",
        info.manufacturer_name,
        or_na(info.manufacturer_id.as_deref())
    );
    println!("\tModel: {}", or_na(info.model_name.as_deref()));
    println!("\tSerial Number: {}", or_na(info.serial_number.as_deref()));
    if let Some(text) = &info.alphanumeric_string {
        println!("\tText: {}", text);
    }
    println!("\tProduct Code: {}", or_na(info.product_code.map(|code| format!("{:04x}", code))));
    println!(
        "\tManufactured: week {}, {}",
        or_na(info.manufacture_week),
        or_na(info.manufacture_year)
    );
    println!("\tEDID Version: {}", or_na(info.edid_version));
    if let Some(input) = info.video_input {
        println!("\tInput: {}", if input.is_digital { "digital" } else { "analog" });
    }
    if let Some(size) = info.screen_size {
        println!("\tScreen Size: {}x{} cm", size.width_cm, size.height_cm);
    }
    println!("\tGamma: {}", or_na(info.gamma.map(|gamma| format!("{:.2}", gamma))));
    if let Some(features) = &info.features {
        println!("\tDisplay Type: {}", features.display_type.description());
    }
    if let Some(c) = &info.chromaticity {
        for (label, point) in [("Red", c.red), ("Green", c.green), ("Blue", c.blue), ("White", c.white)] {
            println!("\t{}: ({:.4}, {:.4})", label, point.x, point.y);
        }
    }
}

fn main() -> anyhow::Result<()> {
    setup_logs();

    let cli = Cli::parse();

    let displays = if cli.paths.is_empty() {
        connected_displays()?
    } else {
        cli.paths
            .into_iter()
            .map(|path| {
                let edid = ddc_edid::read_edid_file(&path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                Ok(DisplayEdid {
                    name: path.display().to_string(),
                    edid,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    if displays.is_empty() {
        println!("No displays found");
        return Ok(());
    }
    for display in displays {
        let info = display.decode();
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            print_report(&display.name, &info);
        }
    }
    Ok(())
}
