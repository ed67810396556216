use disc_physics::collision::{
    bounce_off_walls, check_circle_circle, circles_overlap, resolve, Bounds, WallDamping,
};
use disc_physics::integration::integrate;
use disc_physics::{step_bodies, RigidBody, ResponseStrategy, Vec2, WorldConfig};
use proptest::prelude::*;

fn disc(x: f64, y: f64, r: f64, m: f64, vx: f64, vy: f64) -> RigidBody {
    RigidBody::new(Vec2::new(x, y), r, m)
        .unwrap()
        .with_velocity(Vec2::new(vx, vy))
}

proptest! {
    #[test]
    fn separated_pairs_are_left_alone(
        ax in 0.0..800.0f64, ay in 0.0..600.0f64,
        angle in 0.0..std::f64::consts::TAU,
        ra in 1.0..50.0f64, rb in 1.0..50.0f64,
        gap in 0.0..100.0f64,
        vx in -100.0..100.0f64, vy in -100.0..100.0f64,
    ) {
        // Far from every wall so only the pair pass can touch velocities
        let (ax, ay) = (5_000.0 + ax, 5_000.0 + ay);
        let dist = ra + rb + gap + 1e-6;
        let a = disc(ax, ay, ra, 1.0, vx, vy);
        let b = disc(ax + dist * angle.cos(), ay + dist * angle.sin(), rb, 2.0, -vy, vx);

        prop_assert!(!circles_overlap(&a, &b));
        prop_assert!(check_circle_circle(&a, 0, &b, 1).is_none());

        let config = WorldConfig {
            bounds: Bounds { width: 20_000.0, height: 20_000.0 },
            ..WorldConfig::default()
        };
        let dt = 1e-12;
        let mut bodies = vec![a.clone(), b.clone()];
        let report = step_bodies(&mut bodies, &config, dt);

        // Integration alone must explain the whole step
        let (mut moved_a, mut moved_b) = (a.clone(), b.clone());
        integrate(&mut moved_a, dt, config.gravity);
        integrate(&mut moved_b, dt, config.gravity);

        prop_assert!(report.contacts.is_empty());
        prop_assert_eq!(report.wall_hits, 0);
        prop_assert_eq!(bodies[0].velocity(), a.velocity());
        prop_assert_eq!(bodies[1].velocity(), b.velocity());
        prop_assert_eq!(bodies[0].position(), moved_a.position());
        prop_assert_eq!(bodies[1].position(), moved_b.position());
    }

    #[test]
    fn separation_never_brings_discs_closer(
        dx in -19.0..19.0f64, dy in -19.0..19.0f64,
        ma in 0.1..10.0f64, mb in 0.1..10.0f64,
    ) {
        let mut a = disc(400.0, 300.0, 10.0, ma, 0.0, 0.0);
        let mut b = disc(400.0 + dx, 300.0 + dy, 10.0, mb, 0.0, 0.0);
        if let Some(manifold) = check_circle_circle(&a, 0, &b, 1) {
            let before = a.position().distance(b.position());
            resolve(&mut a, &mut b, &manifold, ResponseStrategy::Separate, 1.0);
            let after = a.position().distance(b.position());
            prop_assert!(after >= before);
            prop_assert!(after >= 20.0 - 1e-9);
        }
    }

    #[test]
    fn impulse_conserves_momentum(
        dx in -19.0..19.0f64, dy in -19.0..19.0f64,
        ma in 0.1..10.0f64, mb in 0.1..10.0f64,
        vax in -50.0..50.0f64, vay in -50.0..50.0f64,
        vbx in -50.0..50.0f64, vby in -50.0..50.0f64,
        e in 0.0..=1.0f64,
    ) {
        let mut a = disc(400.0, 300.0, 10.0, ma, vax, vay);
        let mut b = disc(400.0 + dx, 300.0 + dy, 10.0, mb, vbx, vby);
        if let Some(manifold) = check_circle_circle(&a, 0, &b, 1) {
            let before = a.momentum() + b.momentum();
            resolve(&mut a, &mut b, &manifold, ResponseStrategy::Impulse, e);
            let after = a.momentum() + b.momentum();
            let scale = 1.0 + before.magnitude();
            prop_assert!((after - before).magnitude() < 1e-9 * scale);
            prop_assert!(a.velocity().is_finite() && b.velocity().is_finite());
        }
    }

    #[test]
    fn elastic_impulse_keeps_kinetic_energy(
        dx in 1.0..19.0f64, dy in -10.0..10.0f64,
        ma in 0.1..10.0f64, mb in 0.1..10.0f64,
        vax in -50.0..50.0f64, vbx in -50.0..50.0f64,
    ) {
        let mut a = disc(400.0, 300.0, 10.0, ma, vax, 0.0);
        let mut b = disc(400.0 + dx, 300.0 + dy, 10.0, mb, vbx, 0.0);
        if let Some(manifold) = check_circle_circle(&a, 0, &b, 1) {
            let before = a.kinetic_energy() + b.kinetic_energy();
            resolve(&mut a, &mut b, &manifold, ResponseStrategy::Impulse, 1.0);
            let after = a.kinetic_energy() + b.kinetic_energy();
            prop_assert!((after - before).abs() < 1e-7 * (1.0 + before));
        }
    }

    #[test]
    fn wall_bounce_is_idempotent(
        x in -50.0..850.0f64, y in -50.0..650.0f64,
        vx in -500.0..500.0f64, vy in -500.0..500.0f64,
        ground in 0.0..=1.0f64, walls in 0.0..=1.0f64,
    ) {
        let damping = WallDamping { ground, ceiling: 1.0, walls };
        let bounds = Bounds::default();
        let mut body = disc(x, y, 20.0, 1.0, vx, vy);

        bounce_off_walls(&mut body, &bounds, &damping);
        let settled = body.clone();
        let hits = bounce_off_walls(&mut body, &bounds, &damping);

        prop_assert!(!hits.any());
        prop_assert_eq!(body, settled);
    }

    #[test]
    fn resting_body_never_moves(
        x in 20.0..780.0f64, y in 20.0..580.0f64,
        steps in 1usize..200,
    ) {
        let config = WorldConfig::default();
        let mut bodies = vec![disc(x, y, 20.0, 1.0, 0.0, 0.0)];
        for _ in 0..steps {
            step_bodies(&mut bodies, &config, config.frame_time);
        }
        prop_assert_eq!(bodies[0].position(), Vec2::new(x, y));
    }
}

#[test]
fn head_on_equal_masses_reverse() {
    let mut a = disc(100.0, 100.0, 10.0, 3.0, 7.0, 0.0);
    let mut b = disc(115.0, 100.0, 10.0, 3.0, -7.0, 0.0);
    let manifold = check_circle_circle(&a, 0, &b, 1).unwrap();
    resolve(&mut a, &mut b, &manifold, ResponseStrategy::Impulse, 1.0);

    assert!((a.velocity() - Vec2::new(-7.0, 0.0)).magnitude() < 1e-9);
    assert!((b.velocity() - Vec2::new(7.0, 0.0)).magnitude() < 1e-9);
}
