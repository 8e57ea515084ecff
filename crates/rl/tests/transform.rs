use physics::{Direction, PhysicsState};
use rl::transform::{THETA_THRESHOLD_RADIANS, X_THRESHOLD};
use rl::{decode_action, encode_state, is_terminal, reward, BrainAction, BrainState};

#[test]
fn encode_state_renames_fields_only() {
    let encoded = encode_state(&PhysicsState::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        encoded,
        BrainState { position: 1.0, velocity: 2.0, angle: 3.0, rotation: 4.0 }
    );
}

#[test]
fn decode_action_uses_sign_only() {
    assert_eq!(decode_action(&BrainAction::new(5.0)), Direction::Right);
    assert_eq!(decode_action(&BrainAction::new(1e-9)), Direction::Right);
    assert_eq!(decode_action(&BrainAction::new(-5.0)), Direction::Left);
    assert_eq!(decode_action(&BrainAction::new(0.0)), Direction::Left);
    assert_eq!(decode_action(&BrainAction::new(-0.0)), Direction::Left);
    assert_eq!(decode_action(&BrainAction::new(f32::NAN)), Direction::Left);
}

#[test]
fn thresholds_match_track_and_twelve_degrees() {
    assert_eq!(X_THRESHOLD, 2.4);
    assert!((THETA_THRESHOLD_RADIANS - 0.209_44).abs() < 1e-5);
}

#[test]
fn terminal_on_position_bounds() {
    assert!(!is_terminal(&PhysicsState::ZERO));
    assert!(!is_terminal(&PhysicsState::new(2.4, 0.0, 0.0, 0.0)));
    assert!(!is_terminal(&PhysicsState::new(-2.4, 0.0, 0.0, 0.0)));
    assert!(is_terminal(&PhysicsState::new(2.41, 0.0, 0.0, 0.0)));
    assert!(is_terminal(&PhysicsState::new(-2.41, 0.0, 0.0, 0.0)));
}

#[test]
fn terminal_on_angle_bounds() {
    let limit = THETA_THRESHOLD_RADIANS;
    assert!(!is_terminal(&PhysicsState::new(0.0, 0.0, limit, 0.0)));
    assert!(!is_terminal(&PhysicsState::new(0.0, 0.0, -limit, 0.0)));
    assert!(is_terminal(&PhysicsState::new(0.0, 0.0, 0.21, 0.0)));
    assert!(is_terminal(&PhysicsState::new(0.0, 0.0, -0.21, 0.0)));
}

#[test]
fn velocities_never_terminate() {
    assert!(!is_terminal(&PhysicsState::new(0.0, 100.0, 0.0, -100.0)));
}

#[test]
fn reward_is_flat() {
    let far = PhysicsState::new(2.3, 5.0, 0.2, 3.0);
    assert_eq!(reward(&PhysicsState::ZERO, false), 1.0);
    assert_eq!(reward(&far, false), 1.0);
    assert_eq!(reward(&PhysicsState::ZERO, true), -0.01);
    assert_eq!(reward(&far, true), -0.01);
}

#[test]
fn records_use_platform_field_names() -> anyhow::Result<()> {
    let action: BrainAction = serde_json::from_str(r#"{"command": -3.5}"#)?;
    assert_eq!(action.command, -3.5);

    let json = serde_json::to_value(encode_state(&PhysicsState::new(1.0, 2.0, 3.0, 4.0)))?;
    assert_eq!(
        json,
        serde_json::json!({"position": 1.0, "velocity": 2.0, "angle": 3.0, "rotation": 4.0})
    );
    Ok(())
}
