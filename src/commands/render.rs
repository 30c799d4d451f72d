use crate::core::{
    args_parser::ArgsParser,
    config::Config,
    dirs::{
        compact_path, find_config_file, get_home_directory, get_working_directory, path_bytes,
        strip_leading,
    },
    error::{RainbowPathError, Result},
    indexer::{seeded_rng, IndexerKind},
    path_renderer::render_line,
    style_parser::StyleParser,
    terminal::{AnsiTerminal, ColorSupport},
};
use clap::Args;
use rand::RngCore;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Semicolon separated list of styles for path components
    #[arg(short = 'p', long = "palette", value_name = "PALETTE")]
    pub palette: Option<String>,

    /// Semicolon separated list of styles for path separators
    #[arg(short = 's', long = "separator-palette", value_name = "PALETTE")]
    pub separator_palette: Option<String>,

    /// String used to separate path components in the output (defaults to '/')
    #[arg(short = 'S', long = "separator", value_name = "SEPARATOR", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Method for selecting styles from the palette: sequential, hash or random
    #[arg(short = 'm', long = "method", value_name = "METHOD")]
    pub method: Option<String>,

    /// Method for selecting styles from the separator palette
    #[arg(short = 'M', long = "separator-method", value_name = "METHOD")]
    pub separator_method: Option<String>,

    /// Override style at the given index (can appear multiple times)
    #[arg(
        short = 'o',
        long = "override",
        num_args = 2,
        value_names = ["INDEX", "STYLE"],
        allow_hyphen_values = true,
        action = clap::ArgAction::Append
    )]
    pub overrides: Vec<String>,

    /// Override separator style at the given index (can appear multiple times)
    #[arg(
        short = 'O',
        long = "separator-override",
        num_args = 2,
        value_names = ["INDEX", "STYLE"],
        allow_hyphen_values = true,
        action = clap::ArgAction::Append
    )]
    pub separator_overrides: Vec<String>,

    /// Do not display leading path separator
    #[arg(short = 'l', long = "strip-leading")]
    pub strip_leading: bool,

    /// Replace home directory path prefix with ~
    #[arg(short = 'c', long = "compact")]
    pub compact: bool,

    /// Do not append newline
    #[arg(short = 'n', long = "newline")]
    pub no_newline: bool,

    /// Escape control codes for use in Bash prompts
    #[arg(short = 'b', long = "bash")]
    pub bash: bool,

    /// Path to display (defaults to the working directory)
    pub path: Option<PathBuf>,
}

impl RenderArgs {
    /// Layer command line values on top of `config`
    pub fn apply_to(&self, config: &mut Config, parser: StyleParser) -> Result<()> {
        if let Some(palette) = &self.palette {
            config.path_palette = Some(
                parser
                    .parse_palette(palette)
                    .map_err(|e| RainbowPathError::invalid_argument("--palette", e))?,
            );
        }
        if let Some(palette) = &self.separator_palette {
            config.separator_palette = Some(
                parser
                    .parse_palette(palette)
                    .map_err(|e| RainbowPathError::invalid_argument("--separator-palette", e))?,
            );
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(method) = &self.method {
            config.path_indexer = parse_method(method, "--method")?;
        }
        if let Some(method) = &self.separator_method {
            config.separator_indexer = parse_method(method, "--separator-method")?;
        }

        config.path_overrides.extend(
            ArgsParser::parse_overrides(&self.overrides, parser)
                .map_err(|e| RainbowPathError::invalid_argument("--override", e))?,
        );
        config.separator_overrides.extend(
            ArgsParser::parse_overrides(&self.separator_overrides, parser)
                .map_err(|e| RainbowPathError::invalid_argument("--separator-override", e))?,
        );

        if self.strip_leading {
            config.strip_leading = true;
        }
        if self.compact {
            config.compact = true;
        }
        if self.no_newline {
            config.new_line = false;
        }
        if self.bash {
            config.bash_escape = true;
        }
        if let Some(path) = &self.path {
            config.path = Some(path.clone());
        }
        Ok(())
    }
}

fn parse_method(name: &str, flag: &str) -> Result<IndexerKind> {
    name.parse()
        .map_err(|e| RainbowPathError::invalid_argument(flag, e))
}

/// Path bytes to render after working directory lookup, compaction and stripping
pub fn resolve_path(config: &Config) -> Result<Vec<u8>> {
    let mut path = match &config.path {
        Some(path) => path_bytes(path),
        None => path_bytes(&get_working_directory()?),
    };
    if config.compact {
        let home = get_home_directory()?;
        path = compact_path(&path, &path_bytes(&home));
    }
    if config.strip_leading {
        path = strip_leading(&path).to_vec();
    }
    Ok(path)
}

/// Render the configured path into a buffer. Nothing is returned on error.
pub fn render_to_bytes<R: RngCore>(config: &mut Config, color_count: u16, rng: &mut R) -> Result<Vec<u8>> {
    let path = resolve_path(config)?;
    let mut terminal = AnsiTerminal::new(Vec::new(), color_count);
    render_line(config, &path, &mut terminal, rng)?;
    Ok(terminal.into_inner())
}

pub fn execute_render(args: RenderArgs) -> Result<()> {
    let color_count = ColorSupport::from_env().color_count;
    let parser = StyleParser::with_color_count(color_count);
    let mut rng = seeded_rng();
    log::debug!("Terminal supports {color_count} colors");

    let mut config = Config::default();
    match find_config_file() {
        Some(path) => config.load_file(&path, parser)?,
        None => log::debug!("No config file found, using defaults"),
    }
    args.apply_to(&mut config, parser)?;

    let output = render_to_bytes(&mut config, color_count, &mut rng)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}
