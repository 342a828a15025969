// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `campus_demo`.

use kurbo::{BezPath, Circle, Point, Rect};
use peniko::Color;

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TextAnchor {
    Start,
    Middle,
    End,
}

/// A flat list of SVG elements painted in z order.
#[derive(Debug)]
pub(crate) struct SvgDoc {
    view_box: Rect,
    background: Option<Color>,
    elements: Vec<(i32, String)>,
}

impl SvgDoc {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            background: None,
            elements: Vec::new(),
        }
    }

    pub(crate) fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub(crate) fn rect(&mut self, z: i32, rect: Rect, fill: Color) {
        let mut out = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
        write_paint_attr(&mut out, "fill", fill);
        out.push_str("/>");
        self.elements.push((z, out));
    }

    pub(crate) fn line(&mut self, z: i32, p0: Point, p1: Point, stroke: Color, width: f64) {
        let mut out = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke-width="{width}""#,
            p0.x, p0.y, p1.x, p1.y
        );
        write_paint_attr(&mut out, "stroke", stroke);
        out.push_str("/>");
        self.elements.push((z, out));
    }

    pub(crate) fn path(
        &mut self,
        z: i32,
        path: &BezPath,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) {
        if path.elements().is_empty() {
            return;
        }
        let mut out = format!(r#"<path d="{}""#, path.to_svg());
        match fill {
            Some(color) => write_paint_attr(&mut out, "fill", color),
            None => out.push_str(r#" fill="none""#),
        }
        if let Some((color, width)) = stroke {
            write_paint_attr(&mut out, "stroke", color);
            out.push_str(&format!(
                r#" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round""#
            ));
        }
        out.push_str("/>");
        self.elements.push((z, out));
    }

    pub(crate) fn circle(
        &mut self,
        z: i32,
        circle: Circle,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
    ) {
        if circle.radius <= 0.0 {
            return;
        }
        let mut out = format!(
            r#"<circle cx="{}" cy="{}" r="{}""#,
            circle.center.x, circle.center.y, circle.radius
        );
        match fill {
            Some(color) => write_paint_attr(&mut out, "fill", color),
            None => out.push_str(r#" fill="none""#),
        }
        if let Some((color, width)) = stroke {
            write_paint_attr(&mut out, "stroke", color);
            out.push_str(&format!(r#" stroke-width="{width}""#));
        }
        out.push_str("/>");
        self.elements.push((z, out));
    }

    pub(crate) fn text(
        &mut self,
        z: i32,
        pos: Point,
        font_size: f64,
        anchor: TextAnchor,
        text: &str,
        fill: Color,
    ) {
        let mut out = format!(
            r#"<text x="{}" y="{}" font-size="{font_size}" font-family="sans-serif" dominant-baseline="hanging""#,
            pos.x, pos.y
        );
        out.push_str(match anchor {
            TextAnchor::Start => r#" text-anchor="start""#,
            TextAnchor::Middle => r#" text-anchor="middle""#,
            TextAnchor::End => r#" text-anchor="end""#,
        });
        write_paint_attr(&mut out, "fill", fill);
        out.push('>');
        out.push_str(&escape_xml(text));
        out.push_str("</text>");
        self.elements.push((z, out));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let v = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            v.x0,
            v.y0,
            v.width(),
            v.height(),
            v.width(),
            v.height()
        ));
        out.push('\n');

        if let Some(bg) = self.background {
            let mut rect = format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                v.x0,
                v.y0,
                v.width(),
                v.height()
            );
            write_paint_attr(&mut rect, "fill", bg);
            out.push_str(&rect);
            out.push_str("/>\n");
        }

        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        order.sort_by_key(|&i| self.elements[i].0);
        for i in order {
            out.push_str(&self.elements[i].1);
            out.push('\n');
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
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
