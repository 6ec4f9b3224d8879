use std::{fmt, str::FromStr};

use crate::foundation::error::{PlacementError, PlacementResult};

/// Side of the anchor the content is placed on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Above the anchor.
    Top,
    /// Below the anchor.
    #[default]
    Bottom,
    /// Left of the anchor.
    Left,
    /// Right of the anchor.
    Right,
}

impl Position {
    /// All positions in declaration order.
    pub const ALL: [Position; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The side across the anchor: `top <-> bottom`, `left <-> right`.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// `true` when the main axis is vertical, so alignment runs horizontally.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// CSS-style keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Parse a keyword, resolving anything unrecognized to [`Position::Bottom`].
    pub fn lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown placement position, using bottom");
            Self::Bottom
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(PlacementError::parse(format!("unknown position '{other}'"))),
        }
    }
}

/// Alignment of the content along the cross axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Content start edge flush with the anchor start edge.
    Start,
    /// Content centered on the anchor.
    #[default]
    Center,
    /// Content end edge flush with the anchor end edge.
    End,
}

impl Alignment {
    /// CSS-style keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// Parse a keyword, resolving anything unrecognized to [`Alignment::Center`].
    pub fn lenient(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(value = s, "unknown placement alignment, using center");
            Self::Center
        })
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alignment {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            other => Err(PlacementError::parse(format!(
                "unknown alignment '{other}'"
            ))),
        }
    }
}

/// Full placement descriptor.
///
/// Written as `"<position>"` or `"<position>-<align>"`, e.g. `"bottom-start"`.
/// A missing alignment means [`Alignment::Center`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Placement {
    /// Side of the anchor.
    pub position: Position,
    /// Cross-axis alignment.
    pub align: Alignment,
}

impl Placement {
    /// Build a placement from its parts.
    pub fn new(position: Position, align: Alignment) -> Self {
        Self { position, align }
    }

    /// Parse an alias, falling back to `bottom` / `center` for unknown words.
    pub fn lenient(s: &str) -> Self {
        let (position, align) = split_alias(s);
        Self {
            position: Position::lenient(position),
            align: align.map(Alignment::lenient).unwrap_or_default(),
        }
    }
}

fn split_alias(s: &str) -> (&str, Option<&str>) {
    match s.trim().split_once('-') {
        Some((position, align)) => (position, Some(align)),
        None => (s.trim(), None),
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.position, self.align)
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, align) = split_alias(s);
        Ok(Self {
            position: position.parse()?,
            align: align.map(str::parse).transpose()?.unwrap_or_default(),
        })
    }
}

impl TryFrom<String> for Placement {
    type Error = PlacementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Placement> for String {
    fn from(value: Placement) -> Self {
        value.to_string()
    }
}

/// Distance between anchor and content.
///
/// A single number moves the content along the main axis only; a pair is
/// `(main, cross)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Offset {
    /// Main-axis distance, zero cross-axis.
    Main(f64),
    /// `(main, cross)` distances.
    Pair(f64, f64),
}

impl Offset {
    /// Normalized `(main, cross)` pair.
    pub fn main_cross(self) -> (f64, f64) {
        match self {
            Self::Main(main) => (main, 0.0),
            Self::Pair(main, cross) => (main, cross),
        }
    }
}

impl From<f64> for Offset {
    fn from(main: f64) -> Self {
        Self::Main(main)
    }
}

impl From<(f64, f64)> for Offset {
    fn from((main, cross): (f64, f64)) -> Self {
        Self::Pair(main, cross)
    }
}

impl From<[f64; 2]> for Offset {
    fn from([main, cross]: [f64; 2]) -> Self {
        Self::Pair(main, cross)
    }
}

/// Behavior toggles for one placement computation. Everything defaults to off.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Force content width (and max width) to the anchor width.
    #[serde(alias = "keepAnchorWidth")]
    pub keep_anchor_width: bool,
    /// Flip to the opposite side when the content overflows the viewport.
    #[serde(alias = "autoPlacement")]
    pub auto_placement: bool,
    /// Push the content back inside the viewport while keeping it attached.
    #[serde(alias = "stickToEdges")]
    pub stick_to_edges: bool,
    /// Anchor/content distance.
    pub offset: Option<Offset>,
}

impl PlacementConfig {
    /// Check that the offset can take part in coordinate math.
    pub fn validate(&self) -> PlacementResult<()> {
        if let Some(offset) = self.offset {
            let (main, cross) = offset.main_cross();
            if !main.is_finite() || !cross.is_finite() {
                return Err(PlacementError::validation(
                    "offset components must be finite",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/model.rs"]
mod tests;
