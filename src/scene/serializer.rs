//! Scene serialization to/from TOML (default) and JSON.
//!
//! Nodes are written in pre-order with parent back-references, so the
//! loader can rebuild the hierarchy in a single pass and sibling order
//! survives the round trip.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{EditorState, NodeId, SceneGraph, SceneTree, Transform};

/// Scene file data structure.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneData {
    /// Scene metadata
    pub scene: SceneMetadata,
    /// All nodes, parents before children
    #[serde(default)]
    pub nodes: Vec<NodeData>,
}

/// Scene metadata.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_version")]
    pub version: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Node data for serialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NodeData {
    pub name: String,
    /// Index of the parent node in the `nodes` list; absent for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<usize>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub transform: TransformData,
}

fn default_visible() -> bool {
    true
}

/// Transform data for serialization.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransformData {
    #[serde(default)]
    pub position: [f32; 3],
    #[serde(default)]
    pub rotation: Option<[f32; 3]>,
    #[serde(default = "default_scale")]
    pub scale: ScaleData,
}

fn default_scale() -> ScaleData {
    ScaleData::Uniform(1.0)
}

/// Scale can be uniform or per-axis.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleData {
    Uniform(f32),
    PerAxis([f32; 3]),
}

impl ScaleData {
    pub fn to_array(&self) -> [f32; 3] {
        match self {
            ScaleData::Uniform(s) => [*s, *s, *s],
            ScaleData::PerAxis(arr) => *arr,
        }
    }
}

/// Scene serialization errors.
#[derive(Clone, Debug)]
pub enum SceneError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneError {}

fn is_json(path: &Path) -> bool {
    path.extension().map(|e| e == "json").unwrap_or(false)
}

/// Scene serializer for save/load operations.
pub struct SceneSerializer;

impl SceneSerializer {
    /// Save editor state to a scene file; format follows the extension.
    pub fn save(state: &EditorState, path: &Path) -> Result<(), SceneError> {
        let scene_data = Self::state_to_scene_data(state, path);

        let content = if is_json(path) {
            serde_json::to_string_pretty(&scene_data)
                .map_err(|e| SceneError::SerializeError(e.to_string()))?
        } else {
            toml::to_string_pretty(&scene_data)
                .map_err(|e| SceneError::SerializeError(e.to_string()))?
        };

        std::fs::write(path, content)
            .map_err(|e| SceneError::IoError(e.to_string()))?;

        Ok(())
    }

    /// Load a scene file into editor state, replacing the current tree.
    pub fn load(state: &mut EditorState, path: &Path) -> Result<(), SceneError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SceneError::IoError(e.to_string()))?;

        let scene_data: SceneData = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| SceneError::ParseError(e.to_string()))?
        } else {
            toml::from_str(&content).map_err(|e| SceneError::ParseError(e.to_string()))?
        };

        Self::apply_scene_data(state, &scene_data)
    }

    /// Convert editor state to the scene data structure.
    fn state_to_scene_data(state: &EditorState, path: &Path) -> SceneData {
        let mut nodes = Vec::with_capacity(state.tree.len());
        for &root in state.tree.root_nodes() {
            Self::collect_node(&state.tree, root, None, &mut nodes);
        }

        SceneData {
            scene: SceneMetadata {
                name: path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "Untitled Scene".to_string()),
                description: String::new(),
                version: default_version(),
            },
            nodes,
        }
    }

    fn collect_node(
        tree: &SceneTree,
        id: NodeId,
        parent_index: Option<usize>,
        out: &mut Vec<NodeData>,
    ) {
        let Some(node) = tree.get(id) else {
            return;
        };

        let index = out.len();
        let scale = node.transform.scale;
        out.push(NodeData {
            name: node.name.clone(),
            parent: parent_index,
            visible: node.visible,
            transform: TransformData {
                position: node.transform.position,
                rotation: Some(node.transform.rotation),
                scale: if scale[0] == scale[1] && scale[1] == scale[2] {
                    ScaleData::Uniform(scale[0])
                } else {
                    ScaleData::PerAxis(scale)
                },
            },
        });

        for &child in &node.children {
            Self::collect_node(tree, child, Some(index), out);
        }
    }

    /// Apply scene data to editor state.
    fn apply_scene_data(state: &mut EditorState, scene_data: &SceneData) -> Result<(), SceneError> {
        state.tree.clear();
        state.selection.clear();
        state.history.clear();

        let mut ids: Vec<NodeId> = Vec::with_capacity(scene_data.nodes.len());

        for node_data in &scene_data.nodes {
            let id = match node_data.parent {
                None => state.tree.spawn(node_data.name.clone()),
                Some(parent_index) => {
                    let parent = ids.get(parent_index).copied().ok_or_else(|| {
                        SceneError::ParseError(format!(
                            "node '{}' references parent {} before it is defined",
                            node_data.name, parent_index
                        ))
                    })?;
                    state.tree.spawn_child(node_data.name.clone(), parent).ok_or_else(|| {
                        SceneError::ParseError(format!(
                            "node '{}' has an invalid parent",
                            node_data.name
                        ))
                    })?
                }
            };

            if let Some(node) = state.tree.get_mut(id) {
                node.visible = node_data.visible;
                node.transform = Transform {
                    position: node_data.transform.position,
                    rotation: node_data.transform.rotation.unwrap_or([0.0, 0.0, 0.0]),
                    scale: node_data.transform.scale.to_array(),
                };
            }
            ids.push(id);
        }

        state.scene_modified = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EditorState;

    fn sample_state() -> EditorState {
        let mut state = EditorState::new();
        let a = state.tree.spawn("a");
        let b = state.tree.spawn("b");
        let x = state.tree.spawn_child("x", a).unwrap();
        state.tree.spawn_child("y", a).unwrap();
        state.tree.spawn_child("deep", x).unwrap();
        state.tree.set_local_transform(
            b,
            Transform::new().with_position([1.0, 2.0, 3.0]).with_scale(2.0),
        );
        state
    }

    #[test]
    fn test_round_trip_preserves_hierarchy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.scene.toml");

        let state = sample_state();
        SceneSerializer::save(&state, &path).unwrap();

        let mut loaded = EditorState::new();
        SceneSerializer::load(&mut loaded, &path).unwrap();

        assert_eq!(loaded.tree.len(), 5);
        let roots = loaded.tree.root_nodes().to_vec();
        assert_eq!(roots.len(), 2);

        let a = roots[0];
        let b = roots[1];
        assert_eq!(loaded.tree.get(a).unwrap().name, "a");
        assert_eq!(loaded.tree.children_of(a).len(), 2);

        let x = loaded.tree.children_of(a)[0];
        assert_eq!(loaded.tree.get(x).unwrap().name, "x");
        assert_eq!(loaded.tree.children_of(x).len(), 1);

        let t = loaded.tree.local_transform(b).unwrap();
        assert_eq!(t.position, [1.0, 2.0, 3.0]);
        assert_eq!(t.scale, [2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_json_extension_selects_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.scene.json");

        let state = sample_state();
        SceneSerializer::save(&state, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.trim_start().starts_with('{'));

        let mut loaded = EditorState::new();
        SceneSerializer::load(&mut loaded, &path).unwrap();
        assert_eq!(loaded.tree.len(), 5);
    }

    #[test]
    fn test_forward_parent_reference_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.scene.toml");
        std::fs::write(
            &path,
            r#"
[scene]
name = "bad"

[[nodes]]
name = "orphan"
parent = 7

[nodes.transform]
position = [0.0, 0.0, 0.0]
"#,
        )
        .unwrap();

        let mut state = EditorState::new();
        assert!(SceneSerializer::load(&mut state, &path).is_err());
    }
}
