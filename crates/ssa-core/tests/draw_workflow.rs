use secstructartist::core::io::format::ConfigFormat;
use secstructartist::core::models::drawstyle::DrawStyleOverrides;
use secstructartist::core::models::run::segment_runs;
use secstructartist::core::models::shape::Shape;
use secstructartist::engine::artist::SecStructArtist;
use secstructartist::engine::error::{ArtistError, ConfigError, ValidationError};
use secstructartist::engine::positions::Positions;
use secstructartist::workflows::draw::{ArtistSource, DrawOptions, draw_secondary_structure};
use tempfile::tempdir;

const SEQUENCE: &str = "LLLSSSSSLLLLLHHHHHHHHLLLHHHHHHHHLLLLLLLLLSSSSSSLLLL";

fn draw_into_vec(labels: &str, options: &DrawOptions) -> Result<(Vec<Shape>, usize), ArtistError> {
    let mut shapes: Vec<Shape> = Vec::new();
    let output = draw_secondary_structure(labels, Some(&mut shapes), options)?;
    Ok((shapes, output.elements.len()))
}

#[test]
fn one_drawn_element_per_run_for_every_preset() {
    let sequences = [
        ("default", SEQUENCE),
        ("pymol3", "HHHHSSSLLLHS"),
        ("dssp", "HHHHGGGIIIIIEEEB TTSS-CCcc"),
        ("stride", "HHHGGGIIIIIEEEBbbTTTCC"),
    ];
    for (preset, labels) in sequences {
        let options = DrawOptions {
            artist: ArtistSource::Preset(preset.to_string()),
            ..DrawOptions::default()
        };
        let output = draw_secondary_structure(labels, None, &options).unwrap();
        assert_eq!(output.elements.len(), segment_runs(labels).len(), "{preset}");
    }
}

#[test]
fn run_boundaries_follow_label_changes() {
    let output = draw_secondary_structure(SEQUENCE, None, &DrawOptions::default()).unwrap();
    let codes: String = output.elements.iter().map(|e| e.code).collect();
    assert_eq!(codes, "LSLHLHLSL");

    let starts: Vec<usize> = output.elements.iter().map(|e| e.start).collect();
    assert_eq!(starts, vec![0, 3, 8, 13, 21, 24, 32, 41, 47]);
    for pair in output.elements.windows(2) {
        assert_eq!(pair[0].start + pair[0].length, pair[1].start);
        assert!((pair[0].x_end - pair[1].x_start).abs() < 1e-12);
    }
}

#[test]
fn drawing_is_deterministic() {
    let options = DrawOptions {
        artist: ArtistSource::Preset("pymol2".to_string()),
        positions: Positions::Start(-4.0),
        y: 2.5,
        ..DrawOptions::default()
    };
    let first = draw_into_vec(SEQUENCE, &options).unwrap();
    let second = draw_into_vec(SEQUENCE, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_sequence_draws_nothing() {
    let (shapes, elements) = draw_into_vec("", &DrawOptions::default()).unwrap();
    assert!(shapes.is_empty());
    assert_eq!(elements, 0);

    let output = draw_secondary_structure("", None, &DrawOptions::default()).unwrap();
    assert!(output.figure.unwrap().shapes().is_empty());
}

#[test]
fn unknown_code_names_code_and_position() {
    let mut shapes: Vec<Shape> = Vec::new();
    let err = draw_secondary_structure("LLHHZZ", Some(&mut shapes), &DrawOptions::default())
        .unwrap_err();
    match err {
        ArtistError::Config(ConfigError::UnknownCode { code, position }) => {
            assert_eq!(code, 'Z');
            assert_eq!(position, Some(4));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(shapes.is_empty());
}

#[test]
fn short_positions_are_a_validation_error() {
    let options = DrawOptions {
        positions: Positions::Explicit(vec![1.0, 2.0, 3.0]),
        ..DrawOptions::default()
    };
    let err = draw_into_vec("HHHHH", &options).unwrap_err();
    assert!(matches!(
        err,
        ArtistError::Validation(ValidationError::LengthMismatch {
            labels: 5,
            positions: 3
        })
    ));
}

#[test]
fn per_call_overrides_leave_the_artist_untouched() {
    let artist = SecStructArtist::from_preset("default").unwrap();
    let options = DrawOptions {
        artist: ArtistSource::Artist(artist.clone()),
        overrides: DrawStyleOverrides {
            stride: Some(2.0),
            ..DrawStyleOverrides::default()
        },
        ..DrawOptions::default()
    };
    let output = draw_secondary_structure("HHHHLL", None, &options).unwrap();
    let last = output.elements.last().unwrap();
    assert!((last.x_end - last.x_start - 4.0).abs() < 1e-12);
    assert_eq!(output.artist.drawstyle(), artist.drawstyle());
}

#[test]
fn config_round_trip_reproduces_the_artist() {
    let temp_dir = tempdir().unwrap();
    let mut artist = SecStructArtist::from_preset("dssp").unwrap();
    artist.element_mut('H').unwrap().set("fillcolor", "#123456").unwrap();
    artist.element_mut('E').unwrap().set("arrow-tip-length", "2.5").unwrap();

    for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
        let path = temp_dir.path().join(format!("style.{}", format.extension()));
        artist.to_config_path(&path).unwrap();
        assert_eq!(SecStructArtist::from_config_path(&path).unwrap(), artist);

        let text = artist.to_config_string(format).unwrap();
        assert_eq!(SecStructArtist::from_config_str(&text, format).unwrap(), artist);
    }
}

#[test]
fn drawing_from_a_config_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("simple.yaml");
    SecStructArtist::from_preset("simple")
        .unwrap()
        .to_config_path(&path)
        .unwrap();

    let options = DrawOptions {
        artist: ArtistSource::File(path),
        ..DrawOptions::default()
    };
    let output = draw_secondary_structure("LLHHHSS", None, &options).unwrap();
    assert_eq!(output.elements.len(), 3);
}

#[test]
fn exports_figures() {
    let temp_dir = tempdir().unwrap();
    let options = DrawOptions {
        axes: false,
        ..DrawOptions::default()
    };
    let figure = draw_secondary_structure(SEQUENCE, None, &options)
        .unwrap()
        .figure
        .unwrap();

    let svg_path = temp_dir.path().join("ss.svg");
    figure.save(&svg_path).unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("<polygon"));
    assert!(svg.contains("<polyline"));

    let png_path = temp_dir.path().join("ss.png");
    figure.save(&png_path).unwrap();
    assert!(std::fs::metadata(&png_path).unwrap().len() > 0);
}

#[test]
fn exports_annotated_figures() {
    let temp_dir = tempdir().unwrap();
    let options = DrawOptions {
        legend: true,
        axes: true,
        ..DrawOptions::default()
    };
    let figure = draw_secondary_structure(SEQUENCE, None, &options)
        .unwrap()
        .figure
        .unwrap();

    let png_path = temp_dir.path().join("annotated.png");
    figure.save(&png_path).unwrap();
    assert!(std::fs::metadata(&png_path).unwrap().len() > 0);

    let svg_path = temp_dir.path().join("annotated.svg");
    figure.save(&svg_path).unwrap();
    let svg = std::fs::read_to_string(&svg_path).unwrap();
    assert!(svg.contains("Helix"));
    assert!(svg.contains("Sheet"));
}
