//! The glade: a grassy ground box ringed by trees and rocks, a lamp, a
//! drawing board showing the host canvas, and a sun cycling day and night.

pub mod props;
pub mod sun;

use cgmath::{Vector3, vec3};
use engine::{
    scene::{
        Blending, Fog, Geometry, Light, Material, SceneObject, ShadowCamera, TextureSource,
        color_from_hex, placement,
    },
    scene_log,
};

use crate::{
    physics::{SceneColliders, SceneCollisionGroups},
    teleport::GroundSurface,
    time::Time,
};
pub use sun::Sun;

const GROUND_POSITION: Vector3<f32> = Vector3::new(0.0, -3.0, 0.0);
const GROUND_SIZE: Vector3<f32> = Vector3::new(45.0, 1.0, 45.0);
const SKY_SCALE: f32 = 45.0;
const SHADOW_EXTENT: f32 = 40.0;
const DRAWING_CANVAS_ID: &str = "webgl";

/// Height of the walkable ground surface.
pub const GROUND_TOP: f32 = GROUND_POSITION.y + GROUND_SIZE.y * 0.5;

/// Board whose texture is re-uploaded from the host canvas every tick.
#[derive(Clone, Debug, Default)]
pub struct DrawingBoard {
    pub generation: u64,
}

impl DrawingBoard {
    fn scene_object(&self) -> SceneObject {
        SceneObject::new(
            "drawing_board",
            Geometry::unit_box(),
            Material::Standard {
                texture: TextureSource::Canvas {
                    element_id: DRAWING_CANVAS_ID.to_owned(),
                    generation: self.generation,
                },
                repeat: (1.0, 1.0),
            },
        )
        .with_transform(placement(vec3(0.0, 0.0, 0.0), vec3(3.0, 3.0, 0.1)))
    }
}

pub struct World {
    static_objects: Vec<SceneObject>,
    ambient_light: Light,
    main_light: Light,
    sun: Sun,
    /// Derived from the sun angle before the sun advances, so it trails by a frame.
    fog: Fog,
    drawing_board: DrawingBoard,
    colliders: SceneColliders,
}

impl World {
    pub fn new() -> World {
        let mut colliders = SceneColliders::new();
        let sun = Sun::default();

        let ground = SceneObject::new(
            "ground",
            Geometry::unit_box(),
            Material::Standard {
                texture: TextureSource::Asset("textures/grass.jpg".to_owned()),
                repeat: (GROUND_SIZE.x / 3.0, GROUND_SIZE.z / 3.0),
            },
        )
        .with_transform(placement(GROUND_POSITION, GROUND_SIZE))
        .with_shadows(false, true);
        colliders.add_box(GROUND_POSITION, GROUND_SIZE, SceneCollisionGroups::GROUND);

        let sky = SceneObject::new(
            "sky",
            Geometry::unit_sphere(),
            Material::BackSide {
                texture: TextureSource::Asset("textures/sky.jpg".to_owned()),
            },
        )
        .with_transform(placement(vec3(0.0, 0.0, 0.0), vec3(SKY_SCALE, SKY_SCALE, SKY_SCALE)));

        let mut static_objects = vec![ground, sky, props::create_lamp(&mut colliders)];
        static_objects.extend(props::create_trees(&mut colliders));
        static_objects.extend(props::create_rocks(&mut colliders));
        colliders.update();

        scene_log!(
            INFO,
            "world built: {} objects, {} colliders",
            static_objects.len(),
            colliders.len()
        );

        World {
            static_objects,
            ambient_light: Light::Ambient {
                color: vec3(1.0, 1.0, 1.0),
                intensity: 0.5,
            },
            main_light: Light::Directional {
                color: vec3(1.0, 1.0, 1.0),
                intensity: 1.0,
                position: sun.position(),
                target: vec3(0.0, 0.0, 0.0),
                shadow: Some(ShadowCamera::symmetric(SHADOW_EXTENT)),
            },
            fog: sun.fog(),
            sun,
            drawing_board: DrawingBoard::default(),
            colliders,
        }
    }

    pub fn tick(&mut self, time: &Time) {
        self.fog = self.sun.fog();
        self.sun.tick(time.delta_seconds());
        self.main_light.set_position(self.sun.position());
        self.drawing_board.generation += 1;
    }

    pub fn ground(&self) -> &dyn GroundSurface {
        &self.colliders
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn fog(&self) -> Fog {
        self.fog
    }

    pub fn lights(&self) -> [&Light; 2] {
        [&self.ambient_light, &self.main_light]
    }

    pub fn drawing_board(&self) -> &DrawingBoard {
        &self.drawing_board
    }

    pub fn render(&self) -> Vec<SceneObject> {
        let sun_visual = SceneObject::new(
            "sun",
            Geometry::unit_sphere(),
            Material::Basic {
                color: color_from_hex(0xffffe6),
                opacity: 1.0,
                blending: Blending::Normal,
            },
        )
        .with_transform(placement(self.sun.position(), vec3(1.0, 1.0, 1.0)));

        let mut objects = self.static_objects.clone();
        objects.push(self.drawing_board.scene_object());
        objects.push(sun_visual);
        objects
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
