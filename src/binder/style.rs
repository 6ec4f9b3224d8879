use std::fmt;

use crate::foundation::core::{CssPosition, Point};

/// Fully resolved positioning style for one content element.
///
/// A binder writes one record per pass and it replaces whatever the previous
/// pass wrote.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StyleRecord {
    /// Always [`CssPosition::Absolute`] when produced by a binder.
    pub position: CssPosition,
    /// `left`, in root-relative pixels.
    pub left: f64,
    /// `top`, in root-relative pixels.
    pub top: f64,
    /// `width`, when the content must match the anchor width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// `max-width`, set together with `width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl StyleRecord {
    /// Absolutely positioned at `coords`.
    pub fn absolute(coords: Point) -> Self {
        Self {
            position: CssPosition::Absolute,
            left: coords.x,
            top: coords.y,
            width: None,
            max_width: None,
        }
    }

    /// Pin both `width` and `max-width`.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self.max_width = Some(width);
        self
    }

    /// Property/value pairs in declaration order.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("position", self.position.as_str().to_string()),
            ("left", px(self.left)),
            ("top", px(self.top)),
        ];
        if let Some(w) = self.width {
            out.push(("width", px(w)));
        }
        if let Some(w) = self.max_width {
            out.push(("max-width", px(w)));
        }
        out
    }

    /// Inline CSS text, e.g. `position: absolute; left: 120px; top: 150px;`.
    pub fn to_css(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for StyleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn px(v: f64) -> String {
    // `Display` keeps the sign of negative zero.
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}px")
}

#[cfg(test)]
#[path = "../../tests/unit/binder/style.rs"]
mod tests;
