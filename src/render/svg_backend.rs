use std::fmt::Write as _;

use crate::error::PlotResult;
use crate::render::{
    Color, RenderFrame, Renderer, TextHAlign, TextOrientation,
};

/// Renders frames into standalone SVG documents.
///
/// SVG is the canonical vector output of the hazard views, so this backend
/// builds the document by hand with no drawing dependency. The most recent
/// document is kept until the next render call.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered document; empty before the first render call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let width = frame.viewport.width;
        let height = frame.viewport.height;
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}">"#
        );

        for (_, layer) in frame.layers() {
            for rect in &layer.rects {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                    rect.x,
                    rect.y,
                    rect.width,
                    rect.height,
                    css_color(rect.fill)
                );
                if rect.stroke_width > 0.0 {
                    let _ = write!(
                        out,
                        r#" stroke="{}" stroke-width="{}""#,
                        css_color(rect.stroke_color),
                        rect.stroke_width
                    );
                }
                let _ = writeln!(out, "/>");
            }
            for line in &layer.lines {
                let _ = writeln!(
                    out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    line.x1,
                    line.y1,
                    line.x2,
                    line.y2,
                    css_color(line.color),
                    line.stroke_width
                );
            }
            for circle in &layer.circles {
                let _ = writeln!(
                    out,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    circle.cx,
                    circle.cy,
                    circle.radius,
                    css_color(circle.color)
                );
            }
            for text in &layer.texts {
                let anchor = match text.h_align {
                    TextHAlign::Left => "start",
                    TextHAlign::Center => "middle",
                    TextHAlign::Right => "end",
                };
                let transform = match text.orientation {
                    TextOrientation::Horizontal => String::new(),
                    TextOrientation::VerticalUp => {
                        format!(r#" transform="rotate(-90 {} {})""#, text.x, text.y)
                    }
                };
                let _ = writeln!(
                    out,
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}"{transform}>{}</text>"#,
                    text.x,
                    text.y,
                    text.font_size_px,
                    css_color(text.color),
                    escape_text(&text.text)
                );
            }
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel * 255.0).round().clamp(0.0, 255.0) as u8;
    format!(
        "rgba({},{},{},{})",
        to_byte(color.red),
        to_byte(color.green),
        to_byte(color.blue),
        color.alpha
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
