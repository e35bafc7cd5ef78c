//! Scene file save/load.

mod serializer;

pub use serializer::{
    SceneSerializer, SceneData, SceneMetadata, NodeData, TransformData, ScaleData, SceneError,
};
