// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG serialization of a retained [`Scene`].

use bizviz_core::{MarkPayload, PathPayload, RectPayload, Scene, TextAnchor, TextBaseline, TextPayload};
use kurbo::Rect;
use peniko::{Brush, Color};

/// Document-level settings for [`SvgDocument::render`].
#[derive(Clone, Debug)]
pub(crate) struct SvgDocument<'a> {
    /// Figure bounds; becomes the `viewBox` and the pixel size.
    pub(crate) view_box: Rect,
    /// Painted behind every mark.
    pub(crate) background: Color,
    /// CSS font family for all text.
    pub(crate) font_family: &'a str,
}

impl SvgDocument<'_> {
    /// Renders the scene's marks in paint order.
    pub(crate) fn render(&self, scene: &Scene) -> String {
        let v = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" font-family="{}">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height(),
            escape_xml(self.font_family),
        ));
        out.push('\n');
        out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            v.x0,
            v.y0,
            v.width(),
            v.height()
        ));
        write_paint_attr(&mut out, "fill", &Brush::Solid(self.background));
        out.push_str("/>\n");

        for (_id, _z, payload) in scene.sorted() {
            match payload {
                MarkPayload::Rect(r) => write_rect(&mut out, r),
                MarkPayload::Text(t) => write_text(&mut out, t),
                MarkPayload::Path(p) => write_path(&mut out, p),
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_rect(out: &mut String, r: &RectPayload) {
    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.rect.x0,
        r.rect.y0,
        r.rect.width(),
        r.rect.height(),
    ));
    write_paint_attr(out, "fill", &r.fill);
    if r.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &r.stroke);
        out.push_str(&format!(r#" stroke-width="{}""#, r.stroke_width));
    }
    out.push_str("/>\n");
}

fn write_text(out: &mut String, t: &TextPayload) {
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
        TextBaseline::Ideographic => "ideographic",
    };
    out.push_str(&format!(
        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
        t.pos.x, t.pos.y, t.font_size, baseline
    ));
    if t.font_weight != 400 {
        out.push_str(&format!(r#" font-weight="{}""#, t.font_weight));
    }
    if t.angle != 0.0 {
        out.push_str(&format!(
            r#" transform="rotate({} {} {})""#,
            t.angle, t.pos.x, t.pos.y
        ));
    }
    out.push_str(match t.anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    });
    write_paint_attr(out, "fill", &t.fill);
    out.push('>');
    out.push_str(&escape_xml(&t.text));
    out.push_str("</text>\n");
}

fn write_path(out: &mut String, p: &PathPayload) {
    let d = p.path.to_svg();
    out.push_str(&format!(r#"<path d="{d}""#));
    write_paint_attr(out, "fill", &p.fill);
    if p.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &p.stroke);
        out.push_str(&format!(r#" stroke-width="{}""#, p.stroke_width));
        if !p.dash.is_empty() {
            let dash: Vec<String> = p.dash.iter().map(ToString::to_string).collect();
            out.push_str(&format!(r#" stroke-dasharray="{}""#, dash.join(" ")));
        }
    }
    out.push_str("/>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o:.3}""#));
    }
}

/// Escapes the five XML special characters.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use bizviz_core::{Mark, MarkId};
    use kurbo::BezPath;
    use peniko::color::palette::css;

    use super::*;

    fn document(scene: &Scene) -> String {
        SvgDocument {
            view_box: Rect::new(0.0, 0.0, 200.0, 100.0),
            background: css::WHITE,
            font_family: "sans-serif",
        }
        .render(scene)
    }

    #[test]
    fn marks_are_written_in_z_order_over_the_background() {
        let mut scene = Scene::new();
        scene.tick([
            Mark::builder(MarkId::from_raw(2))
                .text()
                .z_index(10)
                .x_const(5.0)
                .y_const(6.0)
                .text_const("R&D <top>")
                .font_weight_const(700)
                .build(),
            Mark::builder(MarkId::from_raw(1))
                .rect()
                .z_index(0)
                .x_const(1.0)
                .y_const(2.0)
                .w_const(3.0)
                .h_const(4.0)
                .fill_const(css::STEEL_BLUE.with_alpha(0.5))
                .build(),
        ]);
        let svg = document(&scene);

        assert!(svg.starts_with("<svg"), "{svg}");
        assert!(svg.contains(r#"width="200" height="100""#));
        let bg = svg.find("#ffffff").unwrap_or(usize::MAX);
        let rect = svg.find(r#"<rect x="1""#).unwrap_or(usize::MAX);
        let text = svg.find("<text").unwrap_or(usize::MAX);
        assert!(bg < rect && rect < text, "paint order: {svg}");
        assert!(svg.contains(r#"fill-opacity="0.50"#), "{svg}");
        assert!(svg.contains(r#"font-weight="700""#));
        assert!(svg.contains("R&amp;D &lt;top&gt;"));
    }

    #[test]
    fn dashed_paths_carry_a_dasharray_and_transparent_fill_is_none() {
        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        let mut scene = Scene::new();
        scene.tick([Mark::builder(MarkId::from_raw(7))
            .path()
            .path_const(path)
            .fill_const(Color::TRANSPARENT)
            .stroke_brush_const(css::RED)
            .stroke_width_const(1.5)
            .stroke_dash_const(&[5.5, 2.5])
            .build()]);
        let svg = document(&scene);
        assert!(svg.contains(r#"fill="none""#), "{svg}");
        assert!(svg.contains(r##"stroke="#ff0000""##));
        assert!(svg.contains(r#"stroke-dasharray="5.5 2.5""#));
    }
}
