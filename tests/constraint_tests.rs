use medusa::{
    AxisConstraint, BoxConstraint, Composite, Constraint, DirectionalForce, DistanceConstraint,
    Force, Particle, ParticleSystem, PinConstraint, Vec3,
};

fn particles(positions: &[Vec3<f32>]) -> Vec<Particle<f32>> {
    positions.iter().map(|&p| Particle::new(p)).collect()
}

#[test]
fn distance_corrects_symmetrically() {
    let mut arena = particles(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)]);
    let constraint = DistanceConstraint::new(0, 1, 5.0, 5.0);

    constraint.solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(2.5, 0.0, 0.0));
    assert_eq!(arena[1].position, Vec3::new(7.5, 0.0, 0.0));

    // Once satisfied the constraint is a no-op.
    constraint.solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(2.5, 0.0, 0.0));
    assert_eq!(arena[1].position, Vec3::new(7.5, 0.0, 0.0));
}

#[test]
fn distance_in_range_is_noop() {
    let mut arena = particles(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 0.0, 0.0)]);
    DistanceConstraint::new(0, 1, 2.0, 5.0).solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(0.0, 0.0, 0.0));
    assert_eq!(arena[1].position, Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn distance_expands_to_min() {
    let mut arena = particles(&[Vec3::new(0.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0)]);
    DistanceConstraint::new(0, 1, 4.0, 4.0).solve(&mut arena);

    assert_eq!(arena[0].position, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(arena[1].position, Vec3::new(3.0, 0.0, 0.0));
    let d = arena[0].distance(&arena[1]);
    assert!((d - 4.0).abs() < 1e-6, "distance should reach min bound, got {}", d);
}

#[test]
fn distance_from_particles_locks_current_separation() {
    let arena = particles(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 4.0)]);
    let constraint = DistanceConstraint::from_particles(0, 1, &arena);
    assert!((constraint.min_distance - 4.0).abs() < 1e-6);
    assert!((constraint.max_distance - 4.0).abs() < 1e-6);
}

#[test]
fn distance_coincident_points_stay_finite() {
    // Coincident endpoints trade directional correctness for a finite
    // correction along x.
    let mut arena = particles(&[Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0)]);
    DistanceConstraint::new(0, 1, 2.0, 2.0).solve(&mut arena);

    for p in &arena {
        assert!(
            p.position.x.is_finite() && p.position.y.is_finite() && p.position.z.is_finite(),
            "positions must stay finite, got {:?}",
            p.position
        );
    }
    assert!(arena[0].position.x > arena[1].position.x, "particles should separate along x");
    assert!((arena[0].position.y - 1.0).abs() < 1e-6);
    assert!((arena[0].position.z - 1.0).abs() < 1e-6);
}

#[test]
fn pin_holds_position_against_forces() {
    let mut system: ParticleSystem<f32> = ParticleSystem::new(1);
    let mut composite = Composite::point(Vec3::new(1.0, 2.0, 3.0));
    composite.pin(0);
    system.add_composite(composite);
    system.add_force(Force::Directional(DirectionalForce::new(Vec3::new(0.0, -10.0, 0.0))));

    for _ in 0..10 {
        system.update();
        let p = system.composite(0).particles[0];
        assert_eq!(p.position, Vec3::new(1.0, 2.0, 3.0), "pinned particle must not drift");
    }
}

#[test]
fn pin_overwrites_earlier_corrections() {
    // Constraints run in insertion order; the later pin wins.
    let mut arena = particles(&[Vec3::new(0.0, 0.0, 0.0)]);
    let constraints = [
        Constraint::Pin(PinConstraint::new(0, Vec3::new(1.0, 0.0, 0.0))),
        Constraint::Pin(PinConstraint::new(0, Vec3::new(2.0, 0.0, 0.0))),
    ];
    for c in &constraints {
        c.solve(&mut arena);
    }
    assert_eq!(arena[0].position, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn box_clamps_to_bounds() {
    let mut arena = particles(&[Vec3::new(5.0, 5.0, 5.0)]);
    let constraint = BoxConstraint::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 3.0, 3.0));
    constraint.solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(3.0, 3.0, 3.0));
}

#[test]
fn box_bounce_damps_reversed_velocity() {
    // Approach velocity (1, 0, 0); on clamp the previous position lands
    // at boundary + velocity * bounce_friction.
    let mut arena = vec![Particle::from_positions(
        Vec3::new(0.25, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    )];
    let constraint = BoxConstraint::new(
        Vec3::new(-10.0, -10.0, -10.0),
        Vec3::new(0.0, 10.0, 10.0),
    )
    .with_bounce_friction(0.5);

    constraint.solve(&mut arena);
    assert_eq!(arena[0].position.x, 0.0);
    assert_eq!(arena[0].prev_position.x, 0.5);
    assert_eq!(arena[0].position.y, 0.0, "in-range axes untouched");
    assert_eq!(arena[0].prev_position.y, 0.0);
}

#[test]
fn box_inside_is_noop() {
    let mut arena = vec![Particle::from_positions(
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.5, 0.5, 0.5),
    )];
    BoxConstraint::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(3.0, 3.0, 3.0)).solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(arena[0].prev_position, Vec3::new(0.5, 0.5, 0.5));
}

#[test]
fn axis_projects_onto_line() {
    let mut arena = particles(&[Vec3::new(3.0, 4.0, 0.0)]);
    let constraint = AxisConstraint::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(10.0, 0.0, 0.0),
        0,
    );
    constraint.solve(&mut arena);
    assert_eq!(arena[0].position, Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn axis_projection_has_zero_perpendicular_distance() {
    let start = Vec3::new(1.0f32, 2.0, 3.0);
    let end = Vec3::new(4.0f32, 6.0, 3.0);
    let mut arena = particles(&[Vec3::new(-2.0, 7.0, 5.0)]);
    AxisConstraint::new(start, end, 0).solve(&mut arena);

    let axis = (end - start).normalize();
    let along = axis.scale((arena[0].position - start).dot(axis));
    let perpendicular = (arena[0].position - start) - along;
    assert!(
        perpendicular.length() < 1e-5,
        "projected point should lie on the line, perpendicular offset {}",
        perpendicular.length()
    );
}

#[test]
fn axis_point_on_line_stays_put() {
    let mut arena = particles(&[Vec3::new(5.0, 0.0, 0.0)]);
    AxisConstraint::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0), 0)
        .solve(&mut arena);
    assert!((arena[0].position.x - 5.0).abs() < 1e-6);
    assert_eq!(arena[0].position.y, 0.0);
    assert_eq!(arena[0].position.z, 0.0);
}
