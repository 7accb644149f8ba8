//! Scenes: anchored elements, their relations, and the two-pass routing pipeline
//!
//! Routing a scene runs in two ordered passes. The first resolves every
//! member of the rounded right-angle batch and classifies the batch as a
//! whole; the second routes each relation with that shared classification.

pub mod config;
pub mod marker;

pub use config::{ArrowStyle, ContainerConfig, RelationStyle};
pub use marker::{marker_id, ArrowShape, CircleShape, EndShape};

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::error::SceneError;
use crate::geometry::{BoundingBox, LineStyle, Orientation, Point};
use crate::routing::{route_connector, Anchor, ConnectorGeometry, ConnectorSpec, LineGroup};

/// Locates anchor points for element ids
///
/// Returning `None` means the element cannot be located yet (for instance
/// it has not been measured); the connector is skipped on this pass.
pub trait AnchorResolver {
    fn anchor_point(&self, id: &str, orientation: Orientation) -> Option<Point>;
}

impl AnchorResolver for HashMap<String, BoundingBox> {
    fn anchor_point(&self, id: &str, orientation: Orientation) -> Option<Point> {
        self.get(id).map(|bounds| bounds.anchor_point(orientation))
    }
}

/// A rectangular region connectors attach to
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Element {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Element {
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }
}

/// A connector declared by its source element
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Relation {
    pub target_id: String,
    #[serde(default)]
    pub target_anchor: Orientation,
    #[serde(default)]
    pub source_anchor: Orientation,
    pub label: Option<String>,
    /// Drawing order; lower values are routed and drawn first
    #[serde(default)]
    pub order: i32,
    pub class_name: Option<String>,
    #[serde(default)]
    pub style: RelationStyle,
}

/// A relation together with the element that declares it
#[derive(Debug, Clone, Copy)]
pub struct SourcedRelation<'a> {
    pub source_id: &'a str,
    pub relation: &'a Relation,
}

/// A container of elements and the connectors between them
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub container: ContainerConfig,
    /// Position of the container; anchor points are reported relative to it
    #[serde(default)]
    pub origin: Point,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Scene {
    /// Load a scene from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a scene from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SceneError> {
        let scene: Scene = toml::from_str(content)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Check ids are unique and every size and style is drawable
    pub fn validate(&self) -> Result<(), SceneError> {
        self.container.validate()?;
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(SceneError::invalid_style(
                "scene",
                format!("origin must be finite, got ({}, {})", self.origin.x, self.origin.y),
            ));
        }

        let mut seen = HashSet::new();
        for element in &self.elements {
            if !seen.insert(element.id.as_str()) {
                return Err(SceneError::DuplicateElement(element.id.clone()));
            }
            let coords = [element.x, element.y, element.width, element.height];
            if coords.iter().any(|v| !v.is_finite()) {
                return Err(SceneError::invalid_element(
                    &element.id,
                    "position and size must be finite",
                ));
            }
            if element.width < 0.0 || element.height < 0.0 {
                return Err(SceneError::invalid_element(
                    &element.id,
                    format!("negative size {}x{}", element.width, element.height),
                ));
            }
            for relation in &element.relations {
                let owner = format!("relation {} -> {}", element.id, relation.target_id);
                relation.style.validate(&owner)?;
            }
        }
        Ok(())
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// All relations, stably sorted by their `order`
    pub fn relations(&self) -> Vec<SourcedRelation<'_>> {
        let mut relations: Vec<_> = self
            .elements
            .iter()
            .flat_map(|element| {
                element.relations.iter().map(move |relation| SourcedRelation {
                    source_id: element.id.as_str(),
                    relation,
                })
            })
            .collect();
        relations.sort_by_key(|r| r.relation.order);
        relations
    }

    /// Route every relation in the scene
    pub fn route(&self) -> Vec<RoutedArrow> {
        route_relations(&self.container, &self.relations(), self)
    }
}

impl AnchorResolver for Scene {
    fn anchor_point(&self, id: &str, orientation: Orientation) -> Option<Point> {
        let point = self.element(id)?.bounds().anchor_point(orientation);
        Some(Point::new(point.x - self.origin.x, point.y - self.origin.y))
    }
}

/// A routed relation, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedArrow {
    pub source_id: String,
    pub target_id: String,
    pub marker_id: String,
    pub label: Option<String>,
    pub class_name: Option<String>,
    pub style: ArrowStyle,
    pub geometry: ConnectorGeometry,
}

impl RoutedArrow {
    pub fn is_suppressed(&self) -> bool {
        self.geometry.path.is_suppressed()
    }
}

/// Resolve a relation's anchors and style into a connector spec
///
/// Returns `None` when either end cannot be located yet.
fn connector_spec<R: AnchorResolver + ?Sized>(
    container: &ContainerConfig,
    sourced: SourcedRelation<'_>,
    resolver: &R,
) -> Option<(ConnectorSpec, ArrowStyle)> {
    let relation = sourced.relation;
    let start = resolver.anchor_point(sourced.source_id, relation.source_anchor)?;
    let end = resolver.anchor_point(&relation.target_id, relation.target_anchor)?;
    let style = container.resolve(&relation.style);

    let spec = ConnectorSpec::new(
        Anchor::new(start, relation.source_anchor),
        Anchor::new(end, relation.target_anchor),
    )
    .with_stroke_width(style.stroke_width)
    .with_markers(
        style.start_marker,
        style.end_marker,
        style.end_shape.marker_length(),
    )
    .with_line_style(style.line_style)
    .with_offset(container.offset)
    .with_round_corner(container.round_corner);

    Some((spec, style))
}

/// First pass: classify the rounded right-angle batch
///
/// Only angled members take part. Members that cannot be located are left
/// out; they are reported when the second pass skips them.
pub fn classify_batch<R: AnchorResolver + ?Sized>(
    container: &ContainerConfig,
    relations: &[SourcedRelation<'_>],
    resolver: &R,
) -> LineGroup {
    if !container.batches_corners() {
        return LineGroup::None;
    }

    let members: Vec<_> = relations
        .iter()
        .filter_map(|sourced| {
            let (spec, _) = connector_spec(container, *sourced, resolver)?;
            (spec.line_style == LineStyle::Angle).then(|| spec.endpoints())
        })
        .collect();
    let group = LineGroup::classify(members.iter().copied());
    tracing::debug!(?group, members = members.len(), "classified connector batch");
    group
}

/// Route a set of relations in two passes
pub fn route_relations<R: AnchorResolver + ?Sized>(
    container: &ContainerConfig,
    relations: &[SourcedRelation<'_>],
    resolver: &R,
) -> Vec<RoutedArrow> {
    let group = classify_batch(container, relations, resolver);

    relations
        .iter()
        .filter_map(|sourced| {
            let relation = sourced.relation;
            if resolver
                .anchor_point(sourced.source_id, relation.source_anchor)
                .is_none()
            {
                tracing::warn!(
                    source = sourced.source_id,
                    "could not find starting point of element, not drawing the arrow"
                );
                return None;
            }
            let Some((spec, style)) = connector_spec(container, *sourced, resolver) else {
                tracing::warn!(
                    target_id = relation.target_id.as_str(),
                    "could not find target element, not drawing the arrow"
                );
                return None;
            };

            let geometry = route_connector(&spec, group);
            tracing::debug!(
                source = sourced.source_id,
                target_id = relation.target_id.as_str(),
                suppressed = geometry.path.is_suppressed(),
                "routed connector"
            );

            Some(RoutedArrow {
                source_id: sourced.source_id.to_string(),
                target_id: relation.target_id.clone(),
                marker_id: marker_id(
                    &container.unique_id,
                    sourced.source_id,
                    relation.source_anchor,
                    &relation.target_id,
                    relation.target_anchor,
                ),
                label: relation.label.clone(),
                class_name: relation.class_name.clone(),
                style,
                geometry,
            })
        })
        .collect()
}
