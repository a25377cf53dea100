use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

/// Parses demo-binary arguments: an input image path, or `--config <json>`,
/// with an optional `--json-out <path>` override.
pub fn parse_cli(program: &str) -> Result<RuntimeConfig, String> {
    let usage = format!("Usage: {program} (<image> | --config <config.json>) [--json-out <path>]");
    let mut input_path: Option<PathBuf> = None;
    let mut config: Option<RuntimeConfig> = None;
    let mut json_out: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().ok_or_else(|| usage.clone())?;
                config = Some(load_config(Path::new(&path))?);
            }
            "--json-out" => {
                let path = args.next().ok_or_else(|| usage.clone())?;
                json_out = Some(PathBuf::from(path));
            }
            "--help" | "-h" => return Err(usage),
            _ if input_path.is_none() && !arg.starts_with('-') => {
                input_path = Some(PathBuf::from(arg));
            }
            other => return Err(format!("Unexpected argument '{other}'\n{usage}")),
        }
    }

    let mut config = match (config, input_path) {
        (Some(cfg), None) => cfg,
        (None, Some(path)) => RuntimeConfig {
            input_path: path,
            output: OutputConfig::default(),
        },
        _ => return Err(usage),
    };
    if json_out.is_some() {
        config.output.json_out = json_out;
    }
    Ok(config)
}
