use medusa::{
    BoxConstraint, Composite, Constraint, DirectionalForce, Force, Particle, ParticleSystem, Vec3,
};
use wasm_bindgen::prelude::*;

// ---- Rope Demo ----

#[wasm_bindgen]
pub struct RopeDemo {
    system: ParticleSystem<f32>,
    rope: usize,
}

#[wasm_bindgen]
impl RopeDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(particle_count: usize) -> Self {
        let mut system = ParticleSystem::new(2);
        system.config.friction = 0.99;
        system.add_force(Force::Directional(DirectionalForce::new(Vec3::new(
            0.0, -0.1, 0.0,
        ))));
        system.add_constraint(Constraint::Box(BoxConstraint::new(
            Vec3::new(-50.0, -50.0, -50.0),
            Vec3::new(50.0, 50.0, 50.0),
        )));

        let mut rope = Composite::line(
            Vec3::new(-10.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            particle_count.max(2),
            120.0,
        )
        .expect("at least two particles");
        rope.pin_first().pin_last();
        let rope = system.add_composite(rope);

        RopeDemo { system, rope }
    }

    pub fn update(&mut self) {
        self.system.update();
    }

    /// Flat [x0, y0, z0, x1, y1, z1, ...] positions.
    pub fn positions(&self) -> Vec<f32> {
        self.system.composite(self.rope).position_buffer().to_vec()
    }

    /// Line-list vertex indices for rendering the rope.
    pub fn indices(&self) -> Vec<u32> {
        self.system
            .composite(self.rope)
            .index_buffer()
            .map(|indices| indices.to_vec())
            .unwrap_or_default()
    }

    pub fn particle_count(&self) -> usize {
        self.system.composite(self.rope).particle_count()
    }
}

// ---- Point Cloud Demo ----

#[wasm_bindgen]
pub struct PointCloudDemo {
    system: ParticleSystem<f32>,
    cloud: usize,
}

#[wasm_bindgen]
impl PointCloudDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(side: usize, bounce_friction: f32) -> Self {
        let mut system = ParticleSystem::new(5);
        system.config.friction = 0.99;
        system.add_force(Force::Directional(DirectionalForce::new(Vec3::new(
            0.0, -0.1, 0.0,
        ))));
        system.add_constraint(Constraint::Box(
            BoxConstraint::new(Vec3::new(-50.0, -50.0, -50.0), Vec3::new(50.0, 50.0, 50.0))
                .with_bounce_friction(bounce_friction),
        ));

        let side = side.max(1);
        let spacing = 80.0 / side as f32;
        let mut points: Composite<f32> = Composite::new();
        for ix in 0..side {
            for iz in 0..side {
                let position = Vec3::new(
                    ix as f32 * spacing - 40.0,
                    40.0,
                    iz as f32 * spacing - 40.0,
                );
                let mut particle = Particle::new(position);
                // Deterministic per-particle jitter, no RNG in the kernel.
                let jitter = ((ix * 7 + iz * 13) % 9) as f32 / 4.0 - 1.0;
                particle.set_velocity(Vec3::new(jitter, 0.0, -jitter));
                points.particles.push(particle);
            }
        }
        let cloud = system.add_composite(points);

        PointCloudDemo { system, cloud }
    }

    pub fn update(&mut self) {
        self.system.update();
    }

    /// Flat [x0, y0, z0, ...] positions.
    pub fn positions(&self) -> Vec<f32> {
        self.system.composite(self.cloud).position_buffer().to_vec()
    }

    pub fn particle_count(&self) -> usize {
        self.system.composite(self.cloud).particle_count()
    }
}
