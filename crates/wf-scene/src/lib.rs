//! Scene-graph collaborator for the wordfall mapping engine.
//!
//! Holds the cube nodes produced by placement batches plus the camera,
//! lighting, and viewport defaults a renderer needs. No rendering happens
//! here — an external viewer consumes the exported scene JSON.

pub mod error;
pub mod export;
pub mod scene;
pub mod view;

pub use error::{Result, SceneError};
pub use export::{
    CURRENT_VERSION, export_json, export_json_file, import_json, import_json_file,
};
pub use scene::{CUBE_SIZE, CubeNode, Scene};
pub use view::{Camera, DirectionalLight, Viewport};
