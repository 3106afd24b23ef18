//! In-memory scene used by the binary and by tests as a geometry source.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::exclusion::ExclusionRules;
use super::host::GeometrySource;
use crate::camera::euler_xyz_to_quat;

/// Kind of scene object; only meshes contribute geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// Polygon mesh.
    #[default]
    Mesh,
    /// Light source.
    Light,
    /// Camera.
    Camera,
    /// Transform-only helper.
    Empty,
}

/// Object transform keyed at a frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyedTransform {
    /// Frame the transform takes effect.
    pub frame: i32,
    /// World translation.
    pub translation: Vec3,
    /// XYZ Euler rotation in degrees.
    pub rotation_degrees: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for KeyedTransform {
    fn default() -> Self {
        Self {
            frame: 1,
            translation: Vec3::ZERO,
            rotation_degrees: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl KeyedTransform {
    /// Object-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        let rotation = euler_xyz_to_quat(Vec3::new(
            self.rotation_degrees.x.to_radians(),
            self.rotation_degrees.y.to_radians(),
            self.rotation_degrees.z.to_radians(),
        ));
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.translation)
    }
}

/// One object of the in-memory scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    /// Object name, matched against exclusion patterns.
    pub name: String,
    /// Object kind.
    #[serde(default)]
    pub kind: ObjectKind,
    /// Whether the object is visible in the view layer.
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    /// Collections the object belongs to, nested ones included.
    #[serde(default)]
    pub collections: Vec<String>,
    /// Per-object exclude-from-framing flag.
    #[serde(default)]
    pub exclude_from_framing: bool,
    /// Vertices in object space.
    #[serde(default)]
    pub vertices: Vec<Vec3>,
    /// Transform keys; the last key at or before a frame applies, the
    /// first key before it. Identity when empty.
    #[serde(default)]
    pub transforms: Vec<KeyedTransform>,
}

const fn visible_by_default() -> bool {
    true
}

impl SceneObject {
    /// Visible mesh object with an identity transform.
    pub fn mesh(name: &str, collection: &str, vertices: Vec<Vec3>) -> Self {
        Self {
            name: name.to_owned(),
            kind: ObjectKind::Mesh,
            visible: true,
            collections: vec![collection.to_owned()],
            exclude_from_framing: false,
            vertices,
            transforms: Vec::new(),
        }
    }

    /// Builder: add a transform key.
    #[must_use]
    pub fn with_transform(mut self, key: KeyedTransform) -> Self {
        self.transforms.push(key);
        self.transforms.sort_by_key(|k| k.frame);
        self
    }

    /// Whether the object is in `collection`.
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collections.iter().any(|c| c == collection)
    }

    /// Object-to-world matrix at `frame`: the latest key at or before it,
    /// else the earliest key. Keys may be in any order.
    pub fn world_matrix(&self, frame: i32) -> Mat4 {
        let held = self
            .transforms
            .iter()
            .filter(|k| k.frame <= frame)
            .max_by_key(|k| k.frame)
            .or_else(|| self.transforms.iter().min_by_key(|k| k.frame));
        held.map_or(Mat4::IDENTITY, KeyedTransform::matrix)
    }

    /// World-space vertices at `frame`.
    pub fn world_vertices(&self, frame: i32) -> impl Iterator<Item = Vec3> + '_ {
        let matrix = self.world_matrix(frame);
        self.vertices.iter().map(move |v| matrix.transform_point3(*v))
    }
}

/// Flat list of scene objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneSnapshot {
    objects: Vec<SceneObject>,
}

impl SceneSnapshot {
    /// Scene holding `objects`.
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Add an object.
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// All objects.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }
}

impl GeometrySource for SceneSnapshot {
    fn get_snapshot(
        &self,
        collection: &str,
        rules: &ExclusionRules,
        frame: i32,
    ) -> Vec<Vec3> {
        self.objects
            .iter()
            .filter(|o| o.visible && o.kind == ObjectKind::Mesh)
            .filter(|o| o.in_collection(collection))
            .filter(|o| !rules.excludes(&o.name, &o.collections, o.exclude_from_framing))
            .flat_map(|o| o.world_vertices(frame))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![Vec3::ZERO, Vec3::X, Vec3::Y]
    }

    #[test]
    fn only_visible_meshes_in_collection_contribute() {
        let mut hidden = SceneObject::mesh("Hidden", "Product", triangle());
        hidden.visible = false;
        let mut lamp = SceneObject::mesh("Lamp", "Product", triangle());
        lamp.kind = ObjectKind::Light;
        let scene = SceneSnapshot::new(vec![
            SceneObject::mesh("Body", "Product", triangle()),
            SceneObject::mesh("Other", "Props", triangle()),
            hidden,
            lamp,
        ]);
        let points = scene.get_snapshot("Product", &ExclusionRules::none(), 1);
        assert_eq!(points.len(), 3);
        assert!(scene.get_snapshot("Missing", &ExclusionRules::none(), 1).is_empty());
    }

    #[test]
    fn exclusion_rules_filter_objects() {
        let mut flagged = SceneObject::mesh("Cap", "Product", triangle());
        flagged.exclude_from_framing = true;
        let mut modifier = SceneObject::mesh("Card", "Product", triangle());
        modifier.collections.push("LightMods".to_owned());
        let scene = SceneSnapshot::new(vec![
            SceneObject::mesh("Body", "Product", triangle()),
            SceneObject::mesh("Bounce_Left", "Product", triangle()),
            flagged,
            modifier,
        ]);
        let rules =
            ExclusionRules::new("_LM,LightMod,Bounce,Flag,Scrim", Some("LightMods".to_owned()));
        assert_eq!(scene.get_snapshot("Product", &rules, 1).len(), 3);
        assert_eq!(
            scene.get_snapshot("Product", &ExclusionRules::none(), 1).len(),
            12
        );
    }

    #[test]
    fn keyed_transforms_are_held_between_keys() {
        let object = SceneObject::mesh("Body", "Product", vec![Vec3::ZERO])
            .with_transform(KeyedTransform {
                frame: 10,
                translation: Vec3::new(5.0, 0.0, 0.0),
                ..KeyedTransform::default()
            })
            .with_transform(KeyedTransform {
                frame: 1,
                translation: Vec3::new(1.0, 0.0, 0.0),
                ..KeyedTransform::default()
            });
        let at = |frame| object.world_vertices(frame).next().unwrap();
        assert_eq!(at(-3), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(at(1), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(at(9), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(at(10), Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(at(400), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn unsorted_transform_keys_from_a_job_file() {
        let mut object = SceneObject::mesh("Body", "Product", vec![Vec3::ZERO]);
        object.transforms = [20, 5, 12]
            .into_iter()
            .map(|frame| KeyedTransform {
                frame,
                translation: Vec3::new(frame as f32, 0.0, 0.0),
                ..KeyedTransform::default()
            })
            .collect();
        let at = |frame| object.world_vertices(frame).next().unwrap().x;
        assert_eq!(at(1), 5.0);
        assert_eq!(at(11), 5.0);
        assert_eq!(at(15), 12.0);
        assert_eq!(at(25), 20.0);
    }

    #[test]
    fn transform_applies_scale_rotation_translation() {
        let key = KeyedTransform {
            translation: Vec3::new(0.0, 0.0, 1.0),
            rotation_degrees: Vec3::new(0.0, 0.0, 90.0),
            scale: Vec3::splat(2.0),
            ..KeyedTransform::default()
        };
        let p = key.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(0.0, 2.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn objects_parse_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            objects: Vec<SceneObject>,
        }
        let doc: Doc = toml::from_str(
            r#"
[[objects]]
name = "Bottle"
collections = ["Product"]
vertices = [[0.0, 0.0, 0.0], [0.0, 0.0, 2.0]]
"#,
        )
        .unwrap();
        let object = &doc.objects[0];
        assert!(object.visible);
        assert_eq!(object.kind, ObjectKind::Mesh);
        assert_eq!(object.vertices[1], Vec3::new(0.0, 0.0, 2.0));
    }
}
