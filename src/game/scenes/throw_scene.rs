//! ThrowScene: composition of the throw simulation, camera and input.
//!
//! Call [`handle_key`](ThrowScene::handle_key) for key presses and
//! [`tick`](ThrowScene::tick) once per frame; read
//! [`frame`](ThrowScene::frame) for rendering. GPU-agnostic.

use glam::Vec3;
use tracing::debug;
use winit::keyboard::KeyCode;

use crate::camera::{CameraMode, ThrowCamera};
use crate::game::config::{InputAction, InputConfig, ThrowConfig};
use crate::game::field::FieldLayout;
use crate::game::render::{FrameTransforms, NodeTransform};
use crate::game::rig::{RigNode, Side};
use crate::game::systems::{ThrowEvent, ThrowPhase, ThrowSystem};
use crate::input::{ThrowCommand, ThrowInput};

/// Camera behavior for each throw phase.
pub fn camera_mode_for(phase: ThrowPhase) -> CameraMode {
    match phase {
        ThrowPhase::Idle | ThrowPhase::WindUp => CameraMode::Orbit,
        ThrowPhase::Flight => CameraMode::Follow,
        ThrowPhase::Landed => CameraMode::Hold,
    }
}

/// The whole throw scene.
pub struct ThrowScene {
    pub system: ThrowSystem,
    pub camera: ThrowCamera,
    pub input: ThrowInput,
    pub bindings: InputConfig,
    pub field: FieldLayout,
    /// Result of the most recent landed throw, cleared when a new throw starts
    last_distance: Option<f32>,
}

impl ThrowScene {
    pub fn new(config: ThrowConfig) -> Self {
        let camera = ThrowCamera::new(config.camera);
        let input = ThrowInput::new(config.power);
        Self::assemble(ThrowSystem::new(config), camera, input)
    }

    /// Scene with reproducible hammer tumble.
    pub fn with_seed(config: ThrowConfig, seed: u64) -> Self {
        let camera = ThrowCamera::new(config.camera);
        let input = ThrowInput::new(config.power);
        Self::assemble(ThrowSystem::with_seed(config, seed), camera, input)
    }

    fn assemble(system: ThrowSystem, camera: ThrowCamera, input: ThrowInput) -> Self {
        Self {
            system,
            camera,
            input,
            bindings: InputConfig::default(),
            field: FieldLayout::default(),
            last_distance: None,
        }
    }

    /// Translate a key press into a queued command.
    ///
    /// Returns the bound action so the caller can handle `Exit`.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<InputAction> {
        let action = self.bindings.action_for_key(key)?;
        match action {
            InputAction::Throw => self.input.request_throw(),
            InputAction::Reset => self.input.request_reset(),
            InputAction::Exit => {}
        }
        Some(action)
    }

    /// Apply the pending command, advance the simulation and move the camera.
    pub fn tick(&mut self, dt: f32) -> Option<ThrowEvent> {
        if let Some(command) = self.input.take_command() {
            self.apply(command);
        }

        let event = self.system.tick(dt);
        if let Some(ThrowEvent::Landed { distance }) = event {
            self.last_distance = Some(distance);
        }

        let mode = camera_mode_for(self.system.phase());
        self.camera
            .update(mode, self.system.clock(), self.system.head_position());
        event
    }

    fn apply(&mut self, command: ThrowCommand) {
        match command {
            ThrowCommand::Throw(power) => {
                if self.system.throw(power) {
                    self.last_distance = None;
                }
            }
            ThrowCommand::Reset => {
                debug!("scene reset");
                self.system.reset();
                self.last_distance = None;
            }
        }
    }

    pub fn phase(&self) -> ThrowPhase {
        self.system.phase()
    }

    pub fn last_distance(&self) -> Option<f32> {
        self.last_distance
    }

    /// Snapshot of every transform for the renderer.
    pub fn frame(&self) -> FrameTransforms {
        let rig = self.system.rig();
        let hammer = self.system.hammer();
        FrameTransforms {
            root: NodeTransform::from_affine(&rig.node_transform(RigNode::Root)),
            left_arm: NodeTransform::from_affine(&rig.arm_transform(Side::Left)),
            right_arm: NodeTransform::from_affine(&rig.arm_transform(Side::Right)),
            hammer: NodeTransform::new(hammer.anchor, hammer.orientation),
            hammer_head: hammer.head().extend(0.0).to_array(),
            camera_position: self.camera.position.extend(0.0).to_array(),
            camera_target: self.camera.target.extend(0.0).to_array(),
            phase: self.system.phase().as_u32(),
            time: self.system.clock(),
            distance: self.last_distance.unwrap_or(0.0),
            _padding: 0.0,
        }
    }

    /// Camera look-at point
    pub fn camera_target(&self) -> Vec3 {
        self.camera.target
    }
}
