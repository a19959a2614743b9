use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wf_core::{Color, Placement, Vec3};

use crate::view::{Camera, DirectionalLight};

/// Edge length of every cube inserted into the scene.
pub const CUBE_SIZE: f64 = 0.5;

/// Background the renderer clears to.
const BACKGROUND: Color = Color::new(0x80, 0x80, 0x80);

/// One cube in the scene graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CubeNode {
    pub id: Uuid,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Color,
    pub size: f64,
}

impl CubeNode {
    /// Materialize a placement as a scene node with its own identity.
    pub fn from_placement(p: &Placement) -> Self {
        Self {
            id: Uuid::new_v4(),
            position: p.position,
            rotation: p.rotation,
            color: p.color,
            size: CUBE_SIZE,
        }
    }
}

/// Persistent scene graph the renderer draws every frame.
///
/// Placement batches are appended and never read back by the mapping core;
/// clearing the scene is the external re-initialization step between
/// sessions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    pub background: Color,
    pub camera: Camera,
    pub light: DirectionalLight,
    pub nodes: Vec<CubeNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            background: BACKGROUND,
            camera: Camera::default(),
            light: DirectionalLight::default(),
            nodes: Vec::new(),
        }
    }

    /// Insert one placement as a cube node. Returns the node id.
    pub fn insert(&mut self, placement: &Placement) -> Uuid {
        let node = CubeNode::from_placement(placement);
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Insert a whole placement batch. Returns how many nodes were added.
    pub fn insert_batch(&mut self, batch: &[Placement]) -> usize {
        for placement in batch {
            self.insert(placement);
        }
        tracing::debug!("inserted {} cube nodes", batch.len());
        batch.len()
    }

    pub fn count(&self) -> usize {
        self.nodes.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
