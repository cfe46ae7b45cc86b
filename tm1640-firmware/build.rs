//! Build script for tm1640-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates display.toml and generates `$OUT_DIR/config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tm1640_core::DriverConfig;

/// Number of GPIO pins on the RP2040
const GPIO_COUNT: u8 = 30;

/// Layout of display.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DisplayFile {
    pins: PinsSection,
    #[serde(default)]
    display: DriverConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PinsSection {
    clk: u8,
    dio: u8,
}

fn main() {
    setup_linker();
    let file = validate_config();
    generate_config(&file);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate display.toml at compile time
fn validate_config() -> DisplayFile {
    // Re-run if display.toml changes
    println!("cargo:rerun-if-changed=display.toml");

    let config_path = Path::new("display.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: display.toml not found!                                  ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a display.toml configuration file.        ║\n\
            ║  Please create one in the tm1640-firmware directory.             ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read display.toml                              ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let file: DisplayFile = match toml::from_str(&config_content) {
        Ok(file) => file,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid display.toml                                     ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e.to_string()
                    .lines()
                    .map(|line| format!("║  {:<64} ║", line))
                    .collect::<Vec<_>>()
                    .join("\n")
            );
        }
    };

    validate_pins(&file.pins);
    validate_display(&file.display);
    file
}

/// Validate the [pins] section
fn validate_pins(pins: &PinsSection) {
    let mut errors = Vec::new();

    if pins.clk >= GPIO_COUNT {
        errors.push(format!("[pins] clk must be 0-{}", GPIO_COUNT - 1));
    }
    if pins.dio >= GPIO_COUNT {
        errors.push(format!("[pins] dio must be 0-{}", GPIO_COUNT - 1));
    }
    if pins.clk == pins.dio {
        errors.push(format!("[pins] clk and dio both use gpio{}", pins.clk));
    }

    report("Invalid pin configuration", &errors);
}

/// Validate the [display] section
fn validate_display(display: &DriverConfig) {
    let mut errors = Vec::new();

    if display.timing.pulse_ns == 0 {
        errors.push("[display.timing] pulse_ns must be greater than 0".to_string());
    }

    report("Invalid display configuration", &errors);
}

fn report(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Write `$OUT_DIR/config.rs`
///
/// Contains the `DRIVER_CONFIG` const plus `clock_pin!` and `data_pin!`,
/// which take the configured GPIOs out of the peripherals struct.
fn generate_config(file: &DisplayFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let display = &file.display;

    let source = format!(
        "// Generated from display.toml\n\
        \n\
        pub const DRIVER_CONFIG: DriverConfig = DriverConfig {{\n    \
            line_polarity: LinePolarity::{line:?},\n    \
            polarity: DisplayPolarity::{polarity:?},\n    \
            timing: BusTiming::with_pulse_ns({pulse}),\n    \
            brightness: Brightness::{brightness:?},\n\
        }};\n\
        \n\
        pub const CLOCK_GPIO: u8 = {clk};\n\
        pub const DATA_GPIO: u8 = {dio};\n\
        \n\
        macro_rules! clock_pin {{\n    \
            ($p:expr) => {{ embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{clk}) }};\n\
        }}\n\
        \n\
        macro_rules! data_pin {{\n    \
            ($p:expr) => {{ embassy_rp::Peri::<embassy_rp::gpio::AnyPin>::from($p.PIN_{dio}) }};\n\
        }}\n",
        line = display.line_polarity,
        polarity = display.polarity,
        pulse = display.timing.pulse_ns,
        brightness = display.brightness,
        clk = file.pins.clk,
        dio = file.pins.dio,
    );

    fs::write(out_dir.join("config.rs"), source).unwrap();
}
