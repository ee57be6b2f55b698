use super::controller::PlayerMotionController;

/// Lands the player on a flat floor at `floor_y`.
///
/// Contact only counts while moving down (or at rest) so a jump leaving the
/// floor is not pulled back. Returns whether the player is grounded this frame.
pub fn resolve_floor_contact(controller: &mut PlayerMotionController, floor_y: f32) -> bool {
    let body = controller.body_mut();
    if body.position.y > floor_y || body.velocity.y > 0.0 {
        return false;
    }
    body.position.y = floor_y;
    body.velocity.y = 0.0;
    controller.set_grounded(true);
    true
}
