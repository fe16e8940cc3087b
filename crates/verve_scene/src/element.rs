//! Scene elements and property sets
//!
//! An element is declared as data: a name, a base [`PropertySet`], and a
//! list of timeline bindings. The scene merges base values, graph-node
//! bindings, and timeline outputs into one resolved property set per
//! element per frame.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use verve_animation::keyframe::{KeyValue, PathData};
use verve_animation::timeline::TimelineSpec;
use verve_core::geometry::Color;

use crate::error::SceneError;

new_key_type! {
    /// Identifier of a mounted scene element
    pub struct ElementId;
}

/// An animatable property of a scene element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    TranslateX,
    TranslateY,
    /// Uniform scale; writes both axes
    Scale,
    ScaleX,
    ScaleY,
    /// Z rotation in degrees
    Rotate,
    /// 3D tilt around X, degrees
    RotateX,
    /// 3D turn around Y, degrees
    RotateY,
    Opacity,
    Fill,
    PathD,
}

/// Resolved properties for one element
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertySet {
    pub translate_x: Option<f32>,
    pub translate_y: Option<f32>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
    pub rotate: Option<f32>,
    pub rotate_x: Option<f32>,
    pub rotate_y: Option<f32>,
    pub opacity: Option<f32>,
    pub fill: Option<Color>,
    pub path_d: Option<PathData>,
}

impl PropertySet {
    /// Builder: set opacity
    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale_x = Some(value);
        self.scale_y = Some(value);
        self
    }

    /// Builder: set translation
    pub fn with_translate(mut self, x: f32, y: f32) -> Self {
        self.translate_x = Some(x);
        self.translate_y = Some(y);
        self
    }

    /// Builder: set rotation
    pub fn with_rotate(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }

    /// Builder: set fill color
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    /// Builder: set path data
    pub fn with_path(mut self, d: impl Into<PathData>) -> Self {
        self.path_d = Some(d.into());
        self
    }

    /// Write one property from an animated value. The value kind must match
    /// the property; mismatches and non-finite scalars are evaluation
    /// errors the scene isolates per element.
    pub fn apply(&mut self, property: Property, value: &KeyValue) -> Result<(), SceneError> {
        match (property, value) {
            (Property::Fill, KeyValue::Color(c)) => {
                self.fill = Some(*c);
                Ok(())
            }
            (Property::PathD, KeyValue::Path(p)) => {
                self.path_d = Some(p.clone());
                Ok(())
            }
            (Property::Fill | Property::PathD, other) => Err(SceneError::PropertyType {
                property,
                found: other.kind_name(),
            }),
            (_, KeyValue::Scalar(v)) => {
                if !v.is_finite() {
                    return Err(SceneError::NonFinite { property });
                }
                let v = *v;
                match property {
                    Property::TranslateX => self.translate_x = Some(v),
                    Property::TranslateY => self.translate_y = Some(v),
                    Property::Scale => {
                        self.scale_x = Some(v);
                        self.scale_y = Some(v);
                    }
                    Property::ScaleX => self.scale_x = Some(v),
                    Property::ScaleY => self.scale_y = Some(v),
                    Property::Rotate => self.rotate = Some(v),
                    Property::RotateX => self.rotate_x = Some(v),
                    Property::RotateY => self.rotate_y = Some(v),
                    Property::Opacity => self.opacity = Some(v),
                    Property::Fill | Property::PathD => unreachable!("handled above"),
                }
                Ok(())
            }
            (_, other) => Err(SceneError::PropertyType {
                property,
                found: other.kind_name(),
            }),
        }
    }

    /// Resolved opacity (defaults to 1.0 if not set)
    pub fn resolved_opacity(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }

    /// Resolved scale (defaults to 1.0 if not set)
    pub fn resolved_scale(&self) -> (f32, f32) {
        (self.scale_x.unwrap_or(1.0), self.scale_y.unwrap_or(1.0))
    }

    /// Resolved translation (defaults to 0.0 if not set)
    pub fn resolved_translate(&self) -> (f32, f32) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }

    /// Resolved Z rotation in degrees (defaults to 0.0)
    pub fn resolved_rotate(&self) -> f32 {
        self.rotate.unwrap_or(0.0)
    }

    /// Resolved X tilt in degrees (defaults to 0.0)
    pub fn resolved_rotate_x(&self) -> f32 {
        self.rotate_x.unwrap_or(0.0)
    }

    /// Resolved Y turn in degrees (defaults to 0.0)
    pub fn resolved_rotate_y(&self) -> f32 {
        self.rotate_y.unwrap_or(0.0)
    }
}

/// One timeline driving one property
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineBinding {
    pub property: Property,
    pub spec: TimelineSpec,
}

/// Data-only element declaration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementDecl {
    pub name: String,
    #[serde(default)]
    pub base: PropertySet,
    #[serde(default)]
    pub timelines: Vec<TimelineBinding>,
}

impl ElementDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: PropertySet::default(),
            timelines: Vec::new(),
        }
    }

    /// Builder: base (un-animated) properties
    pub fn base(mut self, base: PropertySet) -> Self {
        self.base = base;
        self
    }

    /// Builder: drive `property` with `spec`
    pub fn animate(mut self, property: Property, spec: TimelineSpec) -> Self {
        self.timelines.push(TimelineBinding { property, spec });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verve_animation::keyframe::KeyframeTrack;

    #[test]
    fn apply_scalar_properties() {
        let mut props = PropertySet::default();
        props.apply(Property::Scale, &KeyValue::Scalar(1.5)).unwrap();
        props
            .apply(Property::Opacity, &KeyValue::Scalar(0.5))
            .unwrap();
        assert_eq!(props.resolved_scale(), (1.5, 1.5));
        assert_eq!(props.resolved_opacity(), 0.5);
    }

    #[test]
    fn apply_rejects_kind_mismatch() {
        let mut props = PropertySet::default();
        let err = props
            .apply(Property::TranslateX, &KeyValue::Color(Color::WHITE))
            .unwrap_err();
        assert!(matches!(err, SceneError::PropertyType { .. }));

        let err = props
            .apply(Property::Fill, &KeyValue::Scalar(1.0))
            .unwrap_err();
        assert!(matches!(err, SceneError::PropertyType { .. }));
    }

    #[test]
    fn apply_rejects_non_finite_scalars() {
        let mut props = PropertySet::default();
        let err = props
            .apply(Property::Rotate, &KeyValue::Scalar(f32::NAN))
            .unwrap_err();
        assert_eq!(err, SceneError::NonFinite {
            property: Property::Rotate
        });
    }

    #[test]
    fn decl_serde_roundtrip() {
        let decl = ElementDecl::new("star-0")
            .base(PropertySet::default().with_opacity(0.3))
            .animate(
                Property::Rotate,
                TimelineSpec::new(KeyframeTrack::scalars([0.0, 360.0]).unwrap(), 4.0).infinite(),
            );
        let json = serde_json::to_string(&decl).unwrap();
        let back: ElementDecl = serde_json::from_str(&json).unwrap();
        assert_eq!(decl, back);
    }
}
