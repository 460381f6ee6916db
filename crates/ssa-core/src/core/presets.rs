use crate::core::io::config::{ArtistConfig, ElementConfig};
use crate::core::models::color::Color;
use crate::core::models::drawstyle::DrawStyle;
use crate::core::primitives::{
    ArrowPrimitive, HelixPrimitive, LinePrimitive, PrimitiveArtist, RectanglePrimitive,
};
use phf::{Map, phf_map};

/// The built-in artist configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    Simple,
    Pymol1,
    Pymol2,
    Pymol3,
    Dssp,
    Stride,
}

static PRESETS: Map<&'static str, Preset> = phf_map! {
    "default" => Preset::Pymol1,
    "simple" => Preset::Simple,
    "pymol" => Preset::Pymol1,
    "pymol1" => Preset::Pymol1,
    "pymol2" => Preset::Pymol2,
    "pymol3" => Preset::Pymol3,
    "dssp" => Preset::Dssp,
    "stride" => Preset::Stride,
};

/// Preset names in presentation order.
pub const PRESET_NAMES: [&str; 8] = [
    "default", "simple", "pymol", "pymol1", "pymol2", "pymol3", "dssp", "stride",
];

const RED: Color = Color::rgb(255, 0, 0);
const DARK_RED: Color = Color::rgb(139, 0, 0);
const YELLOW: Color = Color::rgb(255, 255, 0);
const GREEN: Color = Color::rgb(0, 128, 0);
const SALMON: Color = Color::rgb(250, 128, 114);
const WHEAT: Color = Color::rgb(245, 222, 179);
const GRAY: Color = Color::rgb(128, 128, 128);
const MAGENTA: Color = Color::rgb(255, 0, 255);
const ORANGE: Color = Color::rgb(255, 165, 0);
const GOLDENROD: Color = Color::rgb(218, 165, 32);
const BLUE: Color = Color::rgb(0, 0, 255);

/// Looks up a preset by name (case-insensitive).
pub fn lookup(name: &str) -> Option<Preset> {
    PRESETS.get(name.to_ascii_lowercase().as_str()).copied()
}

fn helix(fill: Color, shade: Option<Color>, period: f64) -> PrimitiveArtist {
    let mut helix = HelixPrimitive {
        ribbon_period: period,
        fill_inner_ribbon: shade.is_some(),
        shadecolor: shade,
        ..Default::default()
    };
    helix.style.fillcolor = Some(fill);
    helix.into()
}

fn arrow(fill: Color) -> PrimitiveArtist {
    let mut arrow = ArrowPrimitive::default();
    arrow.style.fillcolor = Some(fill);
    arrow.into()
}

fn line(color: Color, linewidth_scalar: f64) -> PrimitiveArtist {
    let mut line = LinePrimitive::default();
    line.style.linecolor = color;
    line.style.linewidth_scalar = linewidth_scalar;
    line.into()
}

fn element(code: char, label: &str, primitives: Vec<PrimitiveArtist>) -> ElementConfig {
    ElementConfig {
        code,
        label: label.to_string(),
        primitives,
    }
}

/// The three-state H/S/L layout shared by the simple presets.
fn three_state(helix: PrimitiveArtist, sheet: PrimitiveArtist, lp: PrimitiveArtist) -> ArtistConfig {
    ArtistConfig {
        drawstyle: DrawStyle::default(),
        elements: vec![
            element('H', "Helix", vec![helix]),
            element('S', "Sheet", vec![sheet]),
            element('L', "Loop", vec![lp]),
        ],
    }
}

impl Preset {
    pub fn description(&self) -> &'static str {
        match self {
            Self::Simple => "Rectangles for helices, arrows for strands (H, S, L)",
            Self::Pymol1 => "Red shaded ribbons, yellow arrows, black loops (H, S, L)",
            Self::Pymol2 => "Salmon ribbons, wheat arrows, gray loops (H, S, L)",
            Self::Pymol3 => "Red ribbons, yellow arrows, green loops (H, S, L)",
            Self::Dssp => "All DSSP codes (H G I E B T S C, c, space, -)",
            Self::Stride => "All STRIDE codes (H G I E B b T C)",
        }
    }

    /// Builds the configuration of this preset.
    pub fn config(&self) -> ArtistConfig {
        let period = crate::core::primitives::helix::DEFAULT_RIBBON_PERIOD;
        match self {
            Self::Simple => {
                let mut rect = RectanglePrimitive::default();
                rect.style.fillcolor = Some(Color::WHITE);
                three_state(rect.into(), arrow(Color::WHITE), line(Color::BLACK, 1.0))
            }
            Self::Pymol1 => three_state(
                helix(RED, Some(DARK_RED), period),
                arrow(YELLOW),
                line(Color::BLACK, 1.0),
            ),
            Self::Pymol2 => three_state(
                helix(SALMON, Some(SALMON.darken(0.3)), period),
                arrow(WHEAT),
                line(GRAY, 1.5),
            ),
            Self::Pymol3 => three_state(
                helix(RED, None, period),
                arrow(YELLOW),
                line(GREEN, 1.5),
            ),
            Self::Dssp => {
                let coil = line(Color::BLACK, 1.0);
                ArtistConfig {
                    drawstyle: DrawStyle::default(),
                    elements: vec![
                        element('H', "Alpha helix", vec![helix(RED, Some(DARK_RED), period)]),
                        element('G', "3-10 helix", vec![helix(MAGENTA, None, 3.0)]),
                        element('I', "Pi helix", vec![helix(ORANGE, None, 4.4)]),
                        element('E', "Strand", vec![arrow(YELLOW)]),
                        element('B', "Bridge", vec![arrow(GOLDENROD)]),
                        element('T', "Turn", vec![line(BLUE, 1.5)]),
                        element('S', "Bend", vec![line(GRAY, 1.5)]),
                        element('C', "Coil", vec![coil.clone()]),
                        element('c', "", vec![coil.clone()]),
                        element(' ', "", vec![coil.clone()]),
                        element('-', "", vec![coil]),
                    ],
                }
            }
            Self::Stride => {
                let bridge = arrow(GOLDENROD);
                ArtistConfig {
                    drawstyle: DrawStyle::default(),
                    elements: vec![
                        element('H', "Alpha helix", vec![helix(RED, Some(DARK_RED), period)]),
                        element('G', "3-10 helix", vec![helix(MAGENTA, None, 3.0)]),
                        element('I', "Pi helix", vec![helix(ORANGE, None, 4.4)]),
                        element('E', "Strand", vec![arrow(YELLOW)]),
                        element('B', "Bridge", vec![bridge.clone()]),
                        element('b', "", vec![bridge]),
                        element('T', "Turn", vec![line(BLUE, 1.5)]),
                        element('C', "Coil", vec![line(Color::BLACK, 1.0)]),
                    ],
                }
            }
        }
    }
}
