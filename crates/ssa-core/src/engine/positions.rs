use super::error::ValidationError;

pub const DEFAULT_START: f64 = 1.0;

/// Horizontal placement of the residues of a label sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Positions {
    /// Residues are laid out from `x` onwards, one stride apart.
    Start(f64),
    /// One x coordinate per residue. Each residue extends to the next one;
    /// the last extends by one stride.
    Explicit(Vec<f64>),
}

impl Default for Positions {
    fn default() -> Self {
        Self::Start(DEFAULT_START)
    }
}

/// Residue boundaries: residue `i` spans `[edges[i], edges[i + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueEdges {
    edges: Vec<f64>,
}

impl ResidueEdges {
    /// The x extent of `length` residues starting at `start`.
    pub fn span(&self, start: usize, length: usize) -> Option<(f64, f64)> {
        let x0 = *self.edges.get(start)?;
        let x1 = *self.edges.get(start + length)?;
        Some((x0, x1))
    }

    /// Number of residues covered by these edges.
    pub fn residues(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<f64> {
        self.edges.first().copied()
    }

    pub fn last(&self) -> Option<f64> {
        self.edges.last().copied()
    }
}

impl Positions {
    /// Validates the positions against `count` residues and computes their edges.
    pub fn resolve(&self, count: usize, stride: f64) -> Result<ResidueEdges, ValidationError> {
        let edges = match self {
            Self::Start(x) => {
                if !x.is_finite() {
                    return Err(ValidationError::NonFinitePosition { index: 0, value: *x });
                }
                (0..=count).map(|i| x + i as f64 * stride).collect()
            }
            Self::Explicit(xs) => {
                if xs.len() != count {
                    return Err(ValidationError::LengthMismatch {
                        labels: count,
                        positions: xs.len(),
                    });
                }
                if let Some((index, &value)) = xs.iter().enumerate().find(|(_, x)| !x.is_finite()) {
                    return Err(ValidationError::NonFinitePosition { index, value });
                }
                if let Some(index) = xs.windows(2).position(|w| w[1] <= w[0]) {
                    return Err(ValidationError::NonIncreasingPositions { index: index + 1 });
                }
                let mut edges = xs.clone();
                if let Some(&last) = xs.last() {
                    edges.push(last + stride);
                }
                edges
            }
        };
        Ok(ResidueEdges { edges })
    }
}
