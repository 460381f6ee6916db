use crate::cli::{LabelInput, RenderArgs};
use crate::config::{self, StyleOverrides};
use crate::error::{CliError, Result};
use crate::presets::PresetStore;
use secstructartist::core::io::track::LabelTrack;
use secstructartist::engine::positions::Positions;
use secstructartist::render::figure::{DEFAULT_HEIGHT, Figure};
use secstructartist::workflows::draw::{ArtistSource, DrawOptions, draw_secondary_structure};
use std::path::Path;
use tracing::info;

pub fn run(args: RenderArgs, store: &PresetStore) -> Result<()> {
    check_output_extension(&args.output)?;

    let (labels, track_positions) = read_labels(&args.input)?;
    let positions = resolve_positions(args.start, track_positions)?;

    let mut artist = config::load_artist(&args.style, store)?;
    StyleOverrides::from_args(&args)?.apply(&mut artist)?;
    info!("Using artist {}", artist);

    let residues = labels.chars().count();
    let options = DrawOptions {
        artist: ArtistSource::Artist(artist),
        positions,
        y: args.baseline,
        figure_size: Some(figure_size(residues, args.width, args.fig_height)),
        legend: args.legend,
        axes: args.axes,
        ..DrawOptions::default()
    };
    let output = draw_secondary_structure(&labels, None, &options)?;
    let figure = output.figure.ok_or_else(|| {
        CliError::Other(anyhow::anyhow!("Draw workflow returned no figure"))
    })?;
    figure.save(&args.output)?;

    println!(
        "Rendered {} residues ({} elements) to {}",
        residues,
        output.elements.len(),
        args.output.display()
    );
    Ok(())
}

fn check_output_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("svg") | Some("png") => Ok(()),
        _ => Err(CliError::Argument(format!(
            "Output '{}' must end in .svg or .png",
            path.display()
        ))),
    }
}

fn read_labels(input: &LabelInput) -> Result<(String, Option<Vec<f64>>)> {
    match (&input.labels, &input.track) {
        (Some(labels), _) => Ok((labels.clone(), None)),
        (None, Some(path)) => {
            let track = LabelTrack::load(path).map_err(|source| CliError::Track {
                path: path.clone(),
                source,
            })?;
            info!("Read {} residues from {:?}", track.len(), path);
            Ok((track.labels, track.positions))
        }
        (None, None) => Err(CliError::Argument(
            "Either --labels or --input is required".to_string(),
        )),
    }
}

fn resolve_positions(start: Option<f64>, track_positions: Option<Vec<f64>>) -> Result<Positions> {
    match (start, track_positions) {
        (Some(_), Some(_)) => Err(CliError::Argument(
            "--start cannot be combined with a label track that has an 'x' column".to_string(),
        )),
        (Some(start), None) => Ok(Positions::Start(start)),
        (None, Some(xs)) => Ok(Positions::Explicit(xs)),
        (None, None) => Ok(Positions::default()),
    }
}

fn figure_size(residues: usize, width: Option<u32>, height: Option<u32>) -> (u32, u32) {
    let (default_width, _) = Figure::for_residues(residues).size();
    (width.unwrap_or(default_width), height.unwrap_or(DEFAULT_HEIGHT))
}
