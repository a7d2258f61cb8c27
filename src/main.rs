// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Winix device status to sensor state conversion tool.

#![forbid(non_ascii_idents)]
#![deny(unsafe_code)]

use clap::Parser;
use log::{debug, error, info};
use serde_json::json;
use std::thread::sleep;
use winix_sensor::APP_VERSION;
use winix_sensor::configuration::{Settings, get_configuration};
use winix_sensor::device::{WinixDevice, load_status};
use winix_sensor::sensor::Normalizer;
use winix_sensor::telemetry::DeviceState;

#[derive(Parser)]
#[command(
    author = "Unfolded Circle ApS",
    version = APP_VERSION,
    about = "Convert Winix air purifier status data into sensor states"
)]
struct Args {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,
    /// Device name used in the sensor entity ids (overrides configuration)
    #[arg(short, long)]
    alias: Option<String>,
    /// Device id for log messages (overrides configuration and status data)
    #[arg(short = 'd', long)]
    device_id: Option<String>,
    /// Also print the decoded device state
    #[arg(long)]
    state: bool,
    /// Re-read the input at the configured polling interval
    #[arg(short, long)]
    watch: bool,
    /// Device status JSON file, `-` for stdin
    #[arg(default_value = "-")]
    input: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut cfg = get_configuration(args.config.as_deref())?;
    if let Some(alias) = &args.alias {
        cfg.device.alias = alias.clone();
    }
    if args.device_id.is_some() {
        cfg.device.id = args.device_id.clone();
    }

    let normalizer = Normalizer::from_settings(&cfg.winix)?;
    info!(
        "Winix sensor {APP_VERSION}: total filter life {}h",
        normalizer.filter_life().total_hours()
    );

    if !args.watch {
        return print_states(&cfg, &normalizer, &args);
    }

    if args.input == "-" {
        anyhow::bail!("Watch mode requires an input file");
    }
    info!("{}", cfg.polling);
    loop {
        // a failed cycle must not stop polling
        if let Err(e) = print_states(&cfg, &normalizer, &args) {
            error!("Error reading device status from {}: {e}", args.input);
        }
        sleep(cfg.polling.interval);
    }
}

fn print_states(cfg: &Settings, normalizer: &Normalizer, args: &Args) -> anyhow::Result<()> {
    let response = load_status(&args.input)?;
    let device_id = cfg
        .device
        .id
        .clone()
        .or_else(|| response.device_id().map(str::to_string))
        .unwrap_or_else(|| "?".into());
    let device = WinixDevice::new(device_id, &cfg.device.alias)
        .with_model(response.model_id().map(str::to_string));
    let telemetry = response.into_telemetry()?;
    debug!(
        "[{}] Telemetry of model {}: {telemetry:?}",
        device.id,
        device.model.as_deref().unwrap_or("?")
    );

    let mut output = json!({
        "device_id": device.id,
        "model": device.model,
        "sensors": normalizer.sensor_states(&device, &telemetry),
    });
    if args.state {
        output["state"] = serde_json::to_value(DeviceState::from(&telemetry))?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
