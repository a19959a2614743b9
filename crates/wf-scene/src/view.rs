//! Camera, lighting, and viewport parameters handed to the renderer.

use serde::{Deserialize, Serialize};
use wf_core::{Color, Vec3};

/// Perspective camera. The default looks back at the column of cubes from
/// slightly above and behind the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 12.0, -20.0),
            fov: 75.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Single directional light illuminating the whole scene.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    pub intensity: f64,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Color::new(0x40, 0x40, 0x40),
            intensity: 100.0,
        }
    }
}

/// Render-target dimensions. The renderer updates these on window resize
/// and derives the camera aspect ratio from them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Width over height. A degenerate zero-height viewport reports 1.0
    /// instead of dividing by zero.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f64 / self.height as f64
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280, 720)
    }
}
