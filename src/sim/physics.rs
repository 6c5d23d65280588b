//! Player physics: horizontal movement, jumping, gravity and ground contact

use super::state::Player;
use super::tick::TickInput;
use crate::tuning::Tuning;

/// Advance the player by one tick from the sampled input
pub fn integrate_player(player: &mut Player, input: &TickInput, tuning: &Tuning) {
    // Horizontal movement, kept on screen
    let mut dx = 0.0;
    if input.move_left {
        dx -= player.speed;
    }
    if input.move_right {
        dx += player.speed;
    }
    let max_x = tuning.viewport.width - player.rect.size.x;
    player.rect.pos.x = (player.rect.pos.x + dx).clamp(0.0, max_x);

    // Jump impulse only from the ground (no double jump)
    if input.jump && !player.jumping {
        player.velocity_y = -tuning.jump_power;
        player.jumping = true;
    }

    player.velocity_y += tuning.gravity;
    player.rect.pos.y += player.velocity_y;

    // Ground contact
    let ground_y = tuning.viewport.ground_y();
    if player.rect.bottom() > ground_y {
        player.rect.pos.y = ground_y - player.rect.size.y;
        player.velocity_y = 0.0;
        player.jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, Tuning) {
        let tuning = Tuning::default();
        (Player::new(&tuning), tuning)
    }

    #[test]
    fn test_idle_player_stays_grounded() {
        let (mut player, tuning) = setup();
        let start = player.rect;
        integrate_player(&mut player, &TickInput::default(), &tuning);
        assert_eq!(player.rect, start);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.jumping);
    }

    #[test]
    fn test_move_left_right() {
        let (mut player, tuning) = setup();
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        integrate_player(&mut player, &right, &tuning);
        assert_eq!(player.rect.pos.x, 55.0);

        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        integrate_player(&mut player, &both, &tuning);
        assert_eq!(player.rect.pos.x, 55.0);
    }

    #[test]
    fn test_horizontal_clamp() {
        let (mut player, tuning) = setup();
        let left = TickInput {
            move_left: true,
            ..Default::default()
        };
        for _ in 0..20 {
            integrate_player(&mut player, &left, &tuning);
        }
        assert_eq!(player.rect.pos.x, 0.0);

        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..500 {
            integrate_player(&mut player, &right, &tuning);
        }
        assert_eq!(player.rect.right(), tuning.viewport.width);
    }

    #[test]
    fn test_jump_arc_and_landing() {
        let (mut player, tuning) = setup();
        let ground_top = player.rect.pos.y;
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        integrate_player(&mut player, &jump, &tuning);
        assert!(player.jumping);
        assert_eq!(player.velocity_y, -11.5);
        assert_eq!(player.rect.pos.y, ground_top - 11.5);

        // Fly until landing; 12 / 0.5 ticks up and the same back down
        let mut ticks = 1;
        while player.jumping {
            integrate_player(&mut player, &TickInput::default(), &tuning);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(player.rect.pos.y, ground_top);
        assert_eq!(player.velocity_y, 0.0);
        assert!(ticks >= 45);
    }

    #[test]
    fn test_no_double_jump() {
        let (mut player, tuning) = setup();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        integrate_player(&mut player, &jump, &tuning);
        let v_after_first = player.velocity_y;
        integrate_player(&mut player, &jump, &tuning);
        // Second press only adds gravity
        assert_eq!(player.velocity_y, v_after_first + tuning.gravity);
    }
}
