use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "David Bickel",
    version,
    about = "secstructartist CLI - Render cartoon-style secondary structure annotations (helix ribbons, sheet arrows, loop lines) to SVG or PNG.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a secondary structure label string to an SVG or PNG figure.
    Render(RenderArgs),
    /// List, export, and locate artist presets.
    Presets(PresetsArgs),
}

/// Arguments for the `render` subcommand.
#[derive(Args, Debug)]
pub struct RenderArgs {
    // --- Input ---
    #[command(flatten)]
    pub input: LabelInput,

    /// Path for the output figure (.svg or .png).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    // --- Artist ---
    #[command(flatten)]
    pub style: StyleSource,

    // --- Placement ---
    /// x coordinate of the first residue. Conflicts with x positions from a label track.
    #[arg(short = 'x', long = "start", value_name = "FLOAT", allow_negative_numbers = true)]
    pub start: Option<f64>,

    /// Baseline y coordinate of the annotation.
    #[arg(
        short = 'y',
        long = "baseline",
        value_name = "FLOAT",
        default_value_t = 1.0,
        allow_negative_numbers = true
    )]
    pub baseline: f64,

    // --- Draw Style Overrides ---
    /// Override the draw style height (vertical extent of a full-height element).
    #[arg(long, value_name = "FLOAT")]
    pub height: Option<f64>,

    /// Override the x distance per residue.
    #[arg(long, value_name = "FLOAT")]
    pub stride: Option<f64>,

    /// Override the base line width.
    #[arg(long, value_name = "FLOAT")]
    pub linewidth: Option<f64>,

    // --- Figure ---
    /// Figure width in pixels. Defaults to 5 px per residue, at least 200 px.
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Figure height in pixels.
    #[arg(long = "fig-height", value_name = "PX")]
    pub fig_height: Option<u32>,

    /// Add a legend of the drawn elements.
    #[arg(long)]
    pub legend: bool,

    /// Draw the x axis.
    #[arg(long)]
    pub axes: bool,

    /// Set a style value, overriding the preset or config file.
    /// Can be used multiple times. Example: -S H.fillcolor=salmon -S drawstyle.height=2
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Where the labels come from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct LabelInput {
    /// Secondary structure label string, one character per residue (e.g., 'LLHHHHSSSL').
    #[arg(short = 's', long = "labels", value_name = "LABELS")]
    pub labels: Option<String>,

    /// CSV label track with a 'label' column and an optional 'x' column.
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub track: Option<PathBuf>,
}

/// Where the artist comes from. Defaults to the 'default' preset.
#[derive(Args, Debug, Clone, Default)]
#[group(required = false, multiple = false)]
pub struct StyleSource {
    /// A built-in preset (e.g., 'pymol2', 'dssp') or the name of a user preset.
    #[arg(short = 'a', long = "preset", value_name = "NAME")]
    pub preset: Option<String>,

    /// Path to an artist configuration file (.toml, .json, .yaml).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `presets` subcommand.
#[derive(Args, Debug)]
pub struct PresetsArgs {
    #[command(subcommand)]
    pub command: PresetsCommands,
}

#[derive(Subcommand, Debug)]
pub enum PresetsCommands {
    /// List the built-in presets and the user presets.
    List,
    /// Write a preset as an editable configuration file.
    Export {
        /// Preset name, built-in or user.
        #[arg(required = true)]
        name: String,
        /// Output path; the format follows the extension (.toml, .json, .yaml).
        #[arg(short, long, required = true, value_name = "PATH")]
        output: PathBuf,
    },
    /// Show the absolute path to the user preset directory.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_full_render_invocation() {
        let cli = Cli::try_parse_from([
            "ssa", "-vv", "render", "-s", "LLHHHHSSL", "-o", "out.svg", "-a", "pymol2", "-x",
            "-3.5", "-y", "0", "--height", "2", "--legend", "-S", "H.fillcolor=red",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.input.labels.as_deref(), Some("LLHHHHSSL"));
        assert_eq!(args.style.preset.as_deref(), Some("pymol2"));
        assert_eq!(args.start, Some(-3.5));
        assert_eq!(args.baseline, 0.0);
        assert_eq!(args.height, Some(2.0));
        assert!(args.legend);
        assert_eq!(args.set_values, vec!["H.fillcolor=red".to_string()]);
    }

    #[test]
    fn labels_and_track_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "ssa", "render", "-s", "HH", "-i", "track.csv", "-o", "out.svg",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn preset_and_config_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "ssa", "render", "-s", "HH", "-o", "out.svg", "-a", "dssp", "-c", "style.toml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn render_requires_an_input() {
        assert!(Cli::try_parse_from(["ssa", "render", "-o", "out.svg"]).is_err());
    }

    #[test]
    fn parses_presets_export() {
        let cli =
            Cli::try_parse_from(["ssa", "presets", "export", "dssp", "-o", "dssp.toml"]).unwrap();
        match cli.command {
            Commands::Presets(PresetsArgs {
                command: PresetsCommands::Export { name, output },
            }) => {
                assert_eq!(name, "dssp");
                assert_eq!(output, PathBuf::from("dssp.toml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
