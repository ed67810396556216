use crate::objects::rigid_body::RigidBody;

/// Advances a body by `dt` seconds using Semi-Implicit Euler.
/// `gravity` is a downward acceleration in pixels per second squared.
pub fn integrate(body: &mut RigidBody, dt: f64, gravity: f64) {
    if !body.is_dynamic() {
        // Static object, do not integrate
        return;
    }

    // --- Linear Motion --- //
    // Velocity first, then position with the updated velocity
    body.velocity.y -= gravity * dt;
    body.position += body.velocity * dt;

    // --- Angular Motion --- //
    body.rotation = wrap_angle(body.rotation + body.angular_velocity * dt);
}

/// Wraps an angle in radians to the range [-PI, PI].
fn wrap_angle(angle: f64) -> f64 {
    angle.sin().atan2(angle.cos())
}
