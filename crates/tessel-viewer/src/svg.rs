//! SVG drawing primitives.
//!
//! Frames are built as lists of [`Primitive`]s and serialised only when the
//! document is emitted, so tests can inspect geometry without parsing markup.

use std::fmt;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Auto,
    Middle,
    Central,
    Hanging,
}

impl Baseline {
    fn as_str(self) -> &'static str {
        match self {
            Baseline::Auto => "auto",
            Baseline::Middle => "middle",
            Baseline::Central => "central",
            Baseline::Hanging => "hanging",
        }
    }
}

/// One SVG element.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
        stroke: Option<String>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: String,
        stroke_width: Option<f64>,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        fill: String,
        font_size: u32,
        anchor: Anchor,
        baseline: Baseline,
    },
}

impl Primitive {
    /// A black-outlined square of side `size` with its top-left corner at `(x, y)`.
    pub fn rect(x: f64, y: f64, size: f64, fill: impl Into<String>) -> Self {
        Primitive::Rect {
            x,
            y,
            width: size,
            height: size,
            fill: fill.into(),
        }
    }

    pub fn circle(cx: f64, cy: f64, r: f64, fill: impl Into<String>) -> Self {
        Primitive::Circle {
            cx,
            cy,
            r,
            fill: fill.into(),
            stroke: None,
        }
    }

    /// Same circle with a black outline.
    #[must_use]
    pub fn outlined(self) -> Self {
        match self {
            Primitive::Circle { cx, cy, r, fill, .. } => Primitive::Circle {
                cx,
                cy,
                r,
                fill,
                stroke: Some("black".into()),
            },
            other => other,
        }
    }

    /// A thin black line.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: "black".into(),
            stroke_width: None,
        }
    }

    /// A thick coloured line.
    pub fn thick_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) -> Self {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: stroke.to_string(),
            stroke_width: Some(width),
        }
    }

    pub fn text(
        x: f64,
        y: f64,
        content: impl Into<String>,
        fill: impl Into<String>,
        font_size: u32,
    ) -> Self {
        Primitive::Text {
            x,
            y,
            content: content.into(),
            fill: fill.into(),
            font_size,
            anchor: Anchor::Middle,
            baseline: Baseline::Central,
        }
    }

    /// Override the alignment of a text element.
    #[must_use]
    pub fn aligned(self, anchor: Anchor, baseline: Baseline) -> Self {
        match self {
            Primitive::Text {
                x,
                y,
                content,
                fill,
                font_size,
                ..
            } => Primitive::Text {
                x,
                y,
                content,
                fill,
                font_size,
                anchor,
                baseline,
            },
            other => other,
        }
    }

    /// The text content, if this is a text element.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Primitive::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => write!(
                f,
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill}" stroke="black"/>"#
            ),
            Primitive::Circle {
                cx,
                cy,
                r,
                fill,
                stroke,
            } => {
                write!(f, r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}""#)?;
                if let Some(stroke) = stroke {
                    write!(f, r#" stroke="{stroke}""#)?;
                }
                write!(f, "/>")
            }
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
                stroke_width,
            } => {
                write!(
                    f,
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}""#
                )?;
                if let Some(width) = stroke_width {
                    write!(f, r#" stroke-width="{width}""#)?;
                }
                write!(f, "/>")
            }
            Primitive::Text {
                x,
                y,
                content,
                fill,
                font_size,
                anchor,
                baseline,
            } => write!(
                f,
                r#"<text x="{x}" y="{y}" fill="{fill}" font-size="{font_size}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
                anchor.as_str(),
                baseline.as_str(),
                escape_text(content)
            ),
        }
    }
}

/// Escape special XML characters in text content.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_markup() {
        let rect = Primitive::rect(-16.0, 0.5, 32.0, "yellow");
        assert_eq!(
            rect.to_string(),
            r#"<rect x="-16" y="0.5" width="32" height="32" fill="yellow" stroke="black"/>"#
        );
    }

    #[test]
    fn test_circle_outline() {
        assert_eq!(
            Primitive::circle(0.0, 0.0, 5.0, "gray").to_string(),
            r#"<circle cx="0" cy="0" r="5" fill="gray"/>"#
        );
        assert_eq!(
            Primitive::circle(0.0, 0.0, 5.0, "gray").outlined().to_string(),
            r#"<circle cx="0" cy="0" r="5" fill="gray" stroke="black"/>"#
        );
    }

    #[test]
    fn test_lines() {
        assert_eq!(
            Primitive::line(0.0, 0.0, 32.0, 64.0).to_string(),
            r#"<line x1="0" y1="0" x2="32" y2="64" stroke="black"/>"#
        );
        assert_eq!(
            Primitive::thick_line(0.0, 0.0, 1.0, 1.0, "#FF8080", 8.0).to_string(),
            r##"<line x1="0" y1="0" x2="1" y2="1" stroke="#FF8080" stroke-width="8"/>"##
        );
    }

    #[test]
    fn test_text_alignment_and_escaping() {
        let text = Primitive::text(1.0, 2.0, "a<b & c", "red", 12)
            .aligned(Anchor::End, Baseline::Middle);
        assert_eq!(
            text.to_string(),
            r#"<text x="1" y="2" fill="red" font-size="12" text-anchor="end" dominant-baseline="middle">a&lt;b &amp; c</text>"#
        );
        assert_eq!(text.text_content(), Some("a<b & c"));
        assert_eq!(Primitive::line(0.0, 0.0, 1.0, 1.0).text_content(), None);
    }
}
