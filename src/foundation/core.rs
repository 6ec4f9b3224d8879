use std::{fmt, str::FromStr};

use crate::foundation::error::{PlacementError, PlacementResult};

pub use kurbo::{Point, Rect, Vec2};

/// A bounding-box measurement in the shape a layout engine reports it.
///
/// This is the serialized form of a [`Rect`]: `left`/`top` is the origin and
/// `width`/`height` the (non-negative) size, all in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DomRect {
    /// Left edge.
    #[serde(alias = "x")]
    pub left: f64,
    /// Top edge.
    #[serde(alias = "y")]
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl DomRect {
    /// Build a measurement from origin and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Reject measurements no layout engine could produce.
    pub fn validate(&self) -> PlacementResult<()> {
        let all = [self.left, self.top, self.width, self.height];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(PlacementError::validation(
                "rect components must be finite",
            ));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(PlacementError::validation(
                "rect width and height must be >= 0",
            ));
        }
        Ok(())
    }

    /// Strict conversion from a kurbo rect: inverted or non-finite rects are
    /// rejected instead of normalized.
    pub fn try_from_rect(r: Rect) -> PlacementResult<Self> {
        let dom = Self::new(r.x0, r.y0, r.x1 - r.x0, r.y1 - r.y0);
        dom.validate()?;
        Ok(dom)
    }

    /// Convert into the geometry type used by the placement math.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

impl From<Rect> for DomRect {
    fn from(r: Rect) -> Self {
        let r = r.abs();
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<DomRect> for Rect {
    fn from(r: DomRect) -> Self {
        r.to_rect()
    }
}

/// Resolved value of the CSS `position` property.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssPosition {
    /// `static` (initial value).
    #[default]
    Static,
    /// `relative`; establishes the coordinate origin for absolute descendants.
    Relative,
    /// `absolute`.
    Absolute,
    /// `fixed`.
    Fixed,
    /// `sticky`.
    Sticky,
}

impl CssPosition {
    /// CSS keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Relative => "relative",
            Self::Absolute => "absolute",
            Self::Fixed => "fixed",
            Self::Sticky => "sticky",
        }
    }
}

impl fmt::Display for CssPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CssPosition {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Ok(Self::Static),
            "relative" => Ok(Self::Relative),
            "absolute" => Ok(Self::Absolute),
            "fixed" => Ok(Self::Fixed),
            "sticky" => Ok(Self::Sticky),
            other => Err(PlacementError::parse(format!(
                "unknown css position '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
