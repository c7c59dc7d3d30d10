use clap::{ArgAction, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};

use std::path::{Path, PathBuf};

use crate::errors::{Error, Result};
use crate::geometry::BoundingBox;
use crate::strip::{QuadraticControl, ScaleAnchor, ScoreKind, StripConfig};
use crate::{align_and_save, strip_file, EditorConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Anchor {
    /// Scale from the coordinate origin
    Origin,
    /// Fit around the target center
    Center,
}

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// Icon base names; each NAME is read from DIR/NAME.svg and written to DIR/NAME.new.svg
    #[arg(required = true)]
    names: Vec<String>,

    /// Directory containing the icons
    #[arg(short, long, default_value = "icons")]
    dir: PathBuf,

    /// How the outer shape is identified
    #[arg(long, value_enum, default_value = "radial")]
    mode: ScoreKind,

    /// How the remaining artwork is scaled into the target box
    #[arg(long, value_enum, default_value = "origin")]
    anchor: Anchor,

    /// Side length of the (square) target canvas, in user-units
    #[arg(long, default_value = "48")]
    target: f32,

    /// Margin between the canvas edge and the box the artwork is fitted to
    #[arg(long, default_value = "0")]
    inner: f32,

    /// Add a ring around the full canvas after fitting
    #[arg(long)]
    ring: bool,

    /// Write an empty path rather than failing when only one shape is present
    #[arg(long)]
    allow_empty: bool,

    /// Scale quadratic control points without translating them (center anchor only)
    ///
    /// Reproduces output of older versions of the icon scripts.
    #[arg(long)]
    legacy_quadratic: bool,

    /// Center the result on the page with an external editor
    #[arg(long)]
    align: bool,

    /// Editor program used with --align
    #[arg(long, default_value = "inkscape")]
    editor: String,

    /// Increase logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Top-level configuration used by the `iconstrip` command-line process.
///
/// Front-end settings (which files, whether to run the editor) live here;
/// per-icon settings are in the embedded `StripConfig`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Icon base names, processed in order
    pub names: Vec<String>,
    /// Directory the icons are read from and written to
    pub dir: PathBuf,
    /// Run the editor on each output
    pub align: bool,
    pub editor: EditorConfig,
    /// Default log level (overridden by `RUST_LOG`)
    pub log_level: LevelFilter,
    /// strip config options
    pub strip: StripConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.target.is_nan() || args.target <= 0. {
            return Err(Error::Cli("--target must be positive".into()));
        }
        if args.inner < 0. || args.inner * 2. >= args.target {
            return Err(Error::Cli(
                "--inner must be non-negative and less than half of --target".into(),
            ));
        }

        let canvas = BoundingBox::square(args.target);
        let quadratic_control = if args.legacy_quadratic {
            QuadraticControl::ScaleOnly
        } else {
            QuadraticControl::Translate
        };
        let log_level = match (args.quiet, args.verbose) {
            (true, _) => LevelFilter::ERROR,
            (false, 0) => LevelFilter::WARN,
            (false, 1) => LevelFilter::INFO,
            _ => LevelFilter::DEBUG,
        };

        Ok(Self {
            names: args.names,
            dir: args.dir,
            align: args.align,
            editor: EditorConfig::with_program(args.editor),
            log_level,
            strip: StripConfig {
                score: args.mode,
                target: canvas.inset(args.inner),
                anchor: match args.anchor {
                    Anchor::Origin => ScaleAnchor::Origin,
                    Anchor::Center => ScaleAnchor::Center { quadratic_control },
                },
                ring: args.ring.then_some(canvas),
                allow_empty: args.allow_empty,
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }

    pub fn input_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.svg"))
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.new.svg"))
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Install a stderr log subscriber; `RUST_LOG` takes precedence over `level`.
pub fn init_logging(level: LevelFilter) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // a subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

fn process(config: &Config, input: &Path, output: &Path) -> Result<()> {
    strip_file(input, output, &config.strip)?;
    if config.align {
        align_and_save(&config.editor, output)?;
    }
    Ok(())
}

/// Run the `iconstrip` program with a given `Config`.
///
/// Every name is attempted; if any fail, the error lists all failed names.
pub fn run(config: Config) -> Result<()> {
    let mut failed = Vec::new();
    for name in &config.names {
        let input = config.input_path(name);
        let output = config.output_path(name);
        match process(&config, &input, &output) {
            Ok(()) => info!(%name, "done"),
            Err(e) => {
                if e.is_input_error() {
                    warn!(%name, input = %input.display(), "skipped: {e}");
                } else {
                    error!(%name, input = %input.display(), "{e}");
                }
                failed.push(name.clone());
            }
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(Error::Batch(failed))
    }
}
