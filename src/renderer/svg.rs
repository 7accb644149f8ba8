//! SVG generation from routed scenes

use crate::geometry::BoundingBox;
use crate::routing::path::fmt_num;
use crate::scene::{EndShape, RoutedArrow, Scene};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    defs: Vec<String>,
    elements: Vec<String>,
    connections: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            defs: vec![],
            elements: vec![],
            connections: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self, level: usize) -> String {
        if self.config.pretty_print {
            "  ".repeat(level)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the marker definition used by both ends of one connector
    ///
    /// Markers are sized in stroke-width units, so the shape scales with the
    /// line exactly as the endpoint adjustment assumes.
    pub fn add_marker(&mut self, id: &str, shape: &EndShape, stroke_color: &str) {
        let def = match shape {
            EndShape::Arrow(arrow) => {
                let len = fmt_num(arrow.arrow_length);
                let thick = fmt_num(arrow.arrow_thickness);
                let half = fmt_num(arrow.arrow_thickness / 2.0);
                format!(
                    r#"<marker id="{id}" markerWidth="{len}" markerHeight="{thick}" refX="0" refY="{half}" orient="auto-start-reverse" markerUnits="strokeWidth"><path d="M0,0 L0,{thick} L{len},{half} z" fill="{}"/></marker>"#,
                    escape_xml(stroke_color)
                )
            }
            EndShape::Circle(circle) => {
                let center = fmt_num(circle.radius + circle.stroke_width);
                let size = fmt_num(2.0 * (circle.radius + circle.stroke_width));
                let fill = circle.fill_color.as_deref().unwrap_or(stroke_color);
                let stroke = circle.stroke_color.as_deref().unwrap_or(stroke_color);
                format!(
                    r#"<marker id="{id}" markerWidth="{size}" markerHeight="{size}" refX="{center}" refY="{center}" markerUnits="strokeWidth"><circle cx="{center}" cy="{center}" r="{}" fill="{}" stroke="{}" stroke-width="{}"/></marker>"#,
                    fmt_num(circle.radius),
                    escape_xml(fill),
                    escape_xml(stroke),
                    fmt_num(circle.stroke_width)
                )
            }
        };
        self.defs.push(def);
    }

    /// Add an element's outline
    pub fn add_rect(&mut self, id: &str, bounds: BoundingBox) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r##"{}<rect id="{}" class="{}element" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#999"/>"##,
            self.indent_str(1),
            escape_xml(id),
            prefix,
            fmt_num(bounds.x),
            fmt_num(bounds.y),
            fmt_num(bounds.width),
            fmt_num(bounds.height)
        ));
        if self.config.debug {
            self.elements.push(format!(
                r#"{}<text class="{}debug" x="{}" y="{}" font-size="10">{}</text>"#,
                self.indent_str(1),
                prefix,
                fmt_num(bounds.x),
                fmt_num(bounds.y - 2.0),
                escape_xml(id)
            ));
        }
    }

    /// Add a routed connector; suppressed connectors add nothing
    pub fn add_arrow(&mut self, arrow: &RoutedArrow) {
        let Some(path) = arrow.geometry.path.path() else {
            return;
        };

        let style = &arrow.style;
        if style.start_marker || style.end_marker {
            self.add_marker(&arrow.marker_id, &style.end_shape, &style.stroke_color);
        }

        let prefix = self.prefix();
        let class_list = std::iter::once(format!("{}arrow", prefix))
            .chain(arrow.class_name.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        let marker_url = format!("url(#{})", arrow.marker_id);

        let mut attrs = format!(
            r#" fill="none" stroke="{}" stroke-width="{}""#,
            escape_xml(&style.stroke_color),
            fmt_num(style.stroke_width)
        );
        if let Some(dash) = &style.stroke_dasharray {
            attrs.push_str(&format!(r#" stroke-dasharray="{}""#, escape_xml(dash)));
        }
        if style.start_marker {
            attrs.push_str(&format!(r#" marker-start="{}""#, marker_url));
        }
        if style.end_marker {
            attrs.push_str(&format!(r#" marker-end="{}""#, marker_url));
        }

        self.connections.push(format!(
            r#"{}<g class="{}">"#,
            self.indent_str(1),
            class_list
        ));
        self.connections.push(format!(
            r#"{}<path d="{}"{}/>"#,
            self.indent_str(2),
            path.to_svg_d(),
            attrs
        ));

        let label = arrow.geometry.label;
        if let Some(text) = &arrow.label {
            self.connections.push(format!(
                r#"{}<foreignObject x="{}" y="{}" width="{}" height="{}" style="overflow: visible; pointer-events: none;"><div xmlns="http://www.w3.org/1999/xhtml" style="position: absolute; left: 50%; top: 50%; transform: translateX(-50%) translateY(-50%); pointer-events: all;">{}</div></foreignObject>"#,
                self.indent_str(2),
                fmt_num(label.x),
                fmt_num(label.y),
                fmt_num(label.width),
                fmt_num(label.height),
                escape_xml(text)
            ));
        }
        if self.config.debug {
            self.connections.push(format!(
                r##"{}<rect class="{}debug" x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#888" stroke-dasharray="2,2"/>"##,
                self.indent_str(2),
                prefix,
                fmt_num(label.x),
                fmt_num(label.y),
                fmt_num(label.width),
                fmt_num(label.height)
            ));
        }

        self.connections.push(format!("{}</g>", self.indent_str(1)));
    }

    /// Build the final SVG string
    pub fn build(self, viewbox: BoundingBox) -> String {
        let padding = self.config.viewbox_padding;
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
            fmt_num(viewbox.x - padding),
            fmt_num(viewbox.y - padding),
            fmt_num(viewbox.width + 2.0 * padding),
            fmt_num(viewbox.height + 2.0 * padding)
        ));
        svg.push_str(nl);

        if !self.defs.is_empty() {
            svg.push_str(&self.indent_str(1));
            svg.push_str("<defs>");
            svg.push_str(nl);
            for def in &self.defs {
                svg.push_str(&self.indent_str(2));
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(&self.indent_str(1));
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        // Connectors are drawn on top of elements
        for conn in &self.connections {
            svg.push_str(conn);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Render a scene and its routed connectors to an SVG string
pub fn render_svg(scene: &Scene, arrows: &[RoutedArrow], config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let mut extent: Option<BoundingBox> = None;
    let mut include = |b: BoundingBox| {
        extent = Some(match extent {
            Some(e) => e.union(&b),
            None => b,
        });
    };

    for element in &scene.elements {
        let b = element.bounds();
        let local = BoundingBox::new(b.x - scene.origin.x, b.y - scene.origin.y, b.width, b.height);
        include(local);
        if config.draw_elements {
            builder.add_rect(&element.id, local);
        }
    }

    for arrow in arrows.iter().filter(|a| !a.is_suppressed()) {
        include(arrow.geometry.label);
        builder.add_arrow(arrow);
    }

    builder.build(extent.unwrap_or_default())
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
