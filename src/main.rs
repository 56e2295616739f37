use std::path::{Path, PathBuf};
use anyhow::{bail, Context};
use bezier_rope::config::DEFAULT_CONFIG_FILE;
use bezier_rope::{Preset, RopeConfig};

const USAGE: &str = "usage: bezier_rope [--preset vanilla|component] [--print-config] [CONFIG.toml]";

struct Args {
    preset: Preset,
    config_path: Option<PathBuf>,
    print_config: bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args { preset: Preset::Vanilla, config_path: None, print_config: false };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--preset" => {
                let name = iter.next().context(USAGE)?;
                args.preset = name.parse()?;
            }
            "--print-config" => args.print_config = true,
            "-h" | "--help" => bail!(USAGE),
            _ if arg.starts_with('-') => bail!("unknown option {}\n{}", arg, USAGE),
            _ => args.config_path = Some(PathBuf::from(arg)),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> anyhow::Result<RopeConfig> {
    if let Some(path) = &args.config_path {
        return RopeConfig::load_from_file(path)
            .with_context(|| format!("loading {}", path.display()));
    }
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        return RopeConfig::load_from_file(default_path)
            .with_context(|| format!("loading {}", default_path.display()));
    }
    log::info!("No config file, using {:?} preset", args.preset);
    Ok(RopeConfig::preset(args.preset))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    log::info!("bezier_rope v{} starting", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;
    let config = load_config(&args)?;

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    bezier_rope::run(config).map_err(|e| anyhow::anyhow!("cannot start: {}", e))
}
