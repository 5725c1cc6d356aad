use cgmath::Vector3;
use engine::{
    game_log, input_log,
    scene::{Fog, Light, Renderable, SceneObject},
    xr::ReferenceSpace,
};
use serde::Serialize;

use crate::{
    controllers,
    hands::HandModels,
    input_context::InputContext,
    input_events::{InputEvent, InputQueue},
    options::GameOptions,
    teleport::{TeleportOutcome, TeleportSystem, TeleportVisualStyle},
    time::Time,
    world::World,
};

/// Summary of one simulated frame, for hosts and tooling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    pub frame: u64,
    pub marker_visible: bool,
    pub marker_position: Vector3<f32>,
    /// Translation of the active reference space's origin offset, if a session is running.
    pub active_offset: Option<Vector3<f32>>,
    /// Ground points committed as teleports while draining this frame's events.
    pub teleports: Vec<Vector3<f32>>,
    pub sun_angle: f32,
    pub fog_density: f32,
}

pub struct Game {
    options: GameOptions,
    input: InputContext,
    queue: InputQueue,
    teleport: TeleportSystem,
    teleport_style: TeleportVisualStyle,
    hands: HandModels,
    world: World,
    frame: u64,
}

impl Game {
    pub fn new(options: GameOptions) -> Game {
        Game {
            teleport: TeleportSystem::new(options.teleport.clone()),
            teleport_style: TeleportVisualStyle::default(),
            input: InputContext::default(),
            queue: InputQueue::new(),
            hands: HandModels::default(),
            world: World::new(),
            frame: 0,
            options,
        }
    }

    /// Events are applied at the start of the next `update`, in push order.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    pub fn queue_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.queue.extend(events);
    }

    pub fn update(&mut self, time: &Time) -> FrameReport {
        let events: Vec<InputEvent> = self.queue.drain().collect();
        let teleports: Vec<Vector3<f32>> = events
            .into_iter()
            .filter_map(|event| self.apply_event(event))
            .collect();

        self.world.tick(time);
        self.teleport.evaluate(&self.input, self.world.ground());

        let marker = self.teleport.marker();
        let report = FrameReport {
            frame: self.frame,
            marker_visible: marker.visible,
            marker_position: marker.position,
            active_offset: self
                .teleport
                .active_reference_space()
                .map(|space| space.origin_offset.position),
            teleports,
            sun_angle: self.world.sun().angle,
            fog_density: self.world.fog().density(),
        };

        if self.options.log_frames {
            game_log!(
                INFO,
                "frame {}: marker {} at {:?}, offset {:?}, {} teleport(s)",
                report.frame,
                if report.marker_visible { "shown" } else { "hidden" },
                report.marker_position,
                report.active_offset,
                report.teleports.len()
            );
        }

        self.frame += 1;
        report
    }

    /// Returns the committed target when the event produced a teleport.
    fn apply_event(&mut self, event: InputEvent) -> Option<Vector3<f32>> {
        input_log!(DEBUG, "frame {}: {:?}", self.frame, event);

        match event {
            InputEvent::SessionStart { reference_space } => {
                self.teleport.on_session_start(reference_space);
            }
            InputEvent::SessionEnd => {
                self.teleport.on_session_end();
                self.input = InputContext::default();
            }
            InputEvent::SelectStart(controller) => {
                self.teleport.on_select_start(&mut self.input, controller);
            }
            InputEvent::SelectEnd(controller) => {
                if let TeleportOutcome::Teleported { target, .. } =
                    self.teleport.on_select_end(&mut self.input, controller)
                {
                    return Some(target);
                }
            }
            InputEvent::Connected {
                controller,
                target_ray_mode,
            } => {
                self.input.controller_mut(controller).target_ray_mode = Some(target_ray_mode);
            }
            InputEvent::Disconnected(controller) => {
                let state = self.input.controller_mut(controller);
                state.target_ray_mode = None;
                state.is_selecting = false;
            }
            InputEvent::PinchEnd(hand) => self.hands.on_pinch_end(hand),
            InputEvent::ControllerPose { controller, pose } => {
                self.input.controller_mut(controller).pose = pose;
            }
            InputEvent::HandPose { hand, pose } => self.input.set_hand_pose(hand, pose),
        }

        None
    }

    /// Everything the host should draw this frame.
    pub fn render(&self) -> Vec<SceneObject> {
        let mut objects = self.world.render();
        objects.extend(controllers::render_controllers(&self.input));
        objects.extend(self.hands.render(&self.input));
        objects.extend(
            self.teleport
                .marker()
                .scene_object(&self.teleport_style)
                .render_objects(),
        );
        objects
    }

    /// The space the host renderer should query viewer and controller poses in.
    pub fn active_reference_space(&self) -> Option<&ReferenceSpace> {
        self.teleport.active_reference_space()
    }

    pub fn lights(&self) -> [&Light; 2] {
        self.world.lights()
    }

    pub fn fog(&self) -> Fog {
        self.world.fog()
    }

    pub fn input_context(&self) -> &InputContext {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        controllers::TargetRayMode,
        input_context::Pose,
        vr_config::{ControllerId, Handedness},
        world::GROUND_TOP,
    };
    use cgmath::{InnerSpace, Quaternion, vec3};
    use engine::xr::ReferenceSpaceType;
    use std::time::Duration;

    fn frame_time() -> Time {
        Time::default().advance(Duration::from_millis(16))
    }

    fn aim_at(from: Vector3<f32>, target: Vector3<f32>) -> Pose {
        let rotation =
            Quaternion::from_arc(vec3(0.0, 0.0, -1.0), (target - from).normalize(), None);
        Pose::new(from, rotation)
    }

    fn session_start() -> InputEvent {
        InputEvent::SessionStart {
            reference_space: ReferenceSpace::new(ReferenceSpaceType::LocalFloor),
        }
    }

    #[test]
    fn test_aim_release_and_idle_frames() {
        let mut game = Game::new(GameOptions::default());
        let target = vec3(2.0, GROUND_TOP, -3.0);

        game.queue_events([
            session_start(),
            InputEvent::ControllerPose {
                controller: ControllerId::First,
                pose: aim_at(vec3(0.0, -1.0, 0.0), target),
            },
            InputEvent::SelectStart(ControllerId::First),
        ]);
        let aiming = game.update(&frame_time());
        assert!(aiming.marker_visible);
        assert!((aiming.marker_position - target).magnitude() < 1e-4);
        assert_eq!(aiming.active_offset, Some(vec3(0.0, 0.0, 0.0)));

        game.queue_event(InputEvent::SelectEnd(ControllerId::First));
        let released = game.update(&frame_time());
        assert_eq!(released.teleports.len(), 1);
        assert!(!released.marker_visible);

        let offset = released.active_offset.unwrap();
        assert!((offset - vec3(-2.0, -GROUND_TOP - 2.5, 3.0)).magnitude() < 1e-4);
        assert_eq!(released.frame, 1);
    }

    #[test]
    fn test_release_before_session_start_keeps_no_space() {
        let mut game = Game::new(GameOptions::default());
        game.queue_events([
            InputEvent::ControllerPose {
                controller: ControllerId::Second,
                pose: aim_at(vec3(0.0, -1.0, 0.0), vec3(1.0, GROUND_TOP, -1.0)),
            },
            InputEvent::SelectStart(ControllerId::Second),
        ]);
        assert!(game.update(&frame_time()).marker_visible);

        game.queue_event(InputEvent::SelectEnd(ControllerId::Second));
        let report = game.update(&frame_time());
        assert!(report.teleports.is_empty());
        assert_eq!(report.active_offset, None);
    }

    #[test]
    fn test_disconnect_clears_aim() {
        let mut game = Game::new(GameOptions::default());
        game.queue_events([
            session_start(),
            InputEvent::Connected {
                controller: ControllerId::First,
                target_ray_mode: TargetRayMode::TrackedPointer,
            },
            InputEvent::ControllerPose {
                controller: ControllerId::First,
                pose: aim_at(vec3(0.0, -1.0, 0.0), vec3(0.0, GROUND_TOP, -2.0)),
            },
            InputEvent::SelectStart(ControllerId::First),
        ]);
        assert!(game.update(&frame_time()).marker_visible);

        game.queue_event(InputEvent::Disconnected(ControllerId::First));
        let report = game.update(&frame_time());
        assert!(!report.marker_visible);
        assert!(!game.input_context().controller(ControllerId::First).is_connected());
    }

    #[test]
    fn test_render_includes_marker_only_while_aiming() {
        let mut game = Game::new(GameOptions::default());
        let has_marker = |game: &Game| game.render().iter().any(|o| o.name == "teleport_marker");

        game.update(&frame_time());
        assert!(!has_marker(&game));

        game.queue_events([
            InputEvent::ControllerPose {
                controller: ControllerId::First,
                pose: aim_at(vec3(0.0, -1.0, 0.0), vec3(4.0, GROUND_TOP, 4.0)),
            },
            InputEvent::SelectStart(ControllerId::First),
            InputEvent::HandPose {
                hand: Handedness::Left,
                pose: Some(Pose::default()),
            },
            InputEvent::PinchEnd(Handedness::Left),
        ]);
        game.update(&frame_time());
        let objects = game.render();
        assert!(objects.iter().any(|o| o.name == "teleport_marker"));
        assert!(objects.iter().any(|o| o.name == "hand_left_spheres"));
    }

    #[test]
    fn test_session_end_resets_input() {
        let mut game = Game::new(GameOptions::default());
        game.queue_events([session_start(), InputEvent::SelectStart(ControllerId::Second)]);
        game.update(&frame_time());

        game.queue_event(InputEvent::SessionEnd);
        let report = game.update(&frame_time());
        assert_eq!(report.active_offset, None);
        assert!(!game.input_context().controller(ControllerId::Second).is_selecting);
    }
}
