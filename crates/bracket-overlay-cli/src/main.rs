use anyhow::Result;
use bracket_overlay_config::Config;
use bracket_overlay_engine::HighlightStyle;
use std::{env, io, path::PathBuf, process};

mod preview;
mod resolve;

const USAGE: &str = "<resolve|preview> [config-path]";

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = program_name(&args);
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {program} {USAGE}");
        process::exit(1);
    }

    let config_path = args.get(2).map(PathBuf::from);
    let style = match load_style(config_path) {
        Ok(style) => style,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "using border width {} and left margin {}",
        style.border_width,
        style.left_margin_x
    );

    match args[1].as_str() {
        "resolve" => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            let written = resolve::resolve_stream(stdin, stdout, &style)?;
            log::info!("resolved {written} bracket highlight updates");
        }
        "preview" => preview::run(style)?,
        other => {
            eprintln!("Error: Unknown command '{other}'");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(1);
        }
    }

    Ok(())
}

/// argv[0], which the OS may leave out.
fn program_name(args: &[String]) -> &str {
    args.first().map_or("bracket-overlay-cli", String::as_str)
}

/// Reads the style from an explicit config path, or the default config file when none is given.
fn load_style(config_path: Option<PathBuf>) -> Result<HighlightStyle> {
    let config = match config_path {
        Some(path) => {
            log::info!("Config path: {}", path.display());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                log::warn!("Config file {} not found, using defaults", path.display());
            }
            config
        }
        None => Config::load()?,
    };

    Ok(config.map(|c| style_from_config(&c)).unwrap_or_default())
}

fn style_from_config(config: &Config) -> HighlightStyle {
    HighlightStyle {
        border_width: config.style.border_width,
        left_margin_x: config.style.left_margin_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_overlay_config::StyleConfig;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_program_name_without_argv() {
        assert_eq!(program_name(&[]), "bracket-overlay-cli");
        assert_eq!(program_name(&["overlay".to_string()]), "overlay");
    }

    #[test]
    fn test_style_from_config() {
        let config = Config {
            style: StyleConfig {
                border_width: 2.0,
                left_margin_x: 71.0,
            },
        };
        assert_eq!(
            style_from_config(&config),
            HighlightStyle {
                border_width: 2.0,
                left_margin_x: 71.0,
            }
        );
    }

    #[test]
    fn test_missing_explicit_config_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let style = load_style(Some(temp_dir.path().join("missing.toml"))).unwrap();
        assert_eq!(style, HighlightStyle::default());
    }

    #[test]
    fn test_explicit_config_is_loaded() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[style]\nleft_margin_x = 5.0\n").unwrap();

        let style = load_style(Some(path)).unwrap();

        assert_eq!(style.left_margin_x, 5.0);
        assert_eq!(style.border_width, 1.0);
    }
}
