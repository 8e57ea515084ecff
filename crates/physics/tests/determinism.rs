use physics::{CartPole, CartPoleConfig, Direction, Integrator, PhysicsState};

fn trajectory(config: &CartPoleConfig, seed: u64, actions: &[Direction]) -> Vec<PhysicsState> {
    let mut model = CartPole::with_seed(config.clone(), seed).unwrap();
    model.reset();
    let mut states = vec![model.state()];
    for &a in actions {
        model.step(a).unwrap();
        states.push(model.state());
    }
    states
}

fn actions() -> Vec<Direction> {
    (0..60)
        .map(|i| if (i / 3) % 2 == 0 { Direction::Right } else { Direction::Left })
        .collect()
}

#[test]
fn same_seed_and_actions_give_identical_trajectories() {
    for integrator in [Integrator::Euler, Integrator::SemiImplicitEuler] {
        let config = CartPoleConfig { integrator, ..Default::default() };
        let a = trajectory(&config, 9, &actions());
        let b = trajectory(&config, 9, &actions());
        assert_eq!(a, b, "{integrator:?} should be deterministic");
    }
}

#[test]
fn same_start_state_gives_identical_trajectories() {
    let start = PhysicsState::new(0.1, -0.2, 0.03, 0.1);
    let run = || {
        let mut model = CartPole::new(CartPoleConfig::default()).unwrap();
        model.set_state(start);
        actions()
            .into_iter()
            .map(|a| {
                model.step(a).unwrap();
                model.state()
            })
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn different_seeds_give_different_resets() {
    let config = CartPoleConfig::default();
    let a = trajectory(&config, 1, &[]);
    let b = trajectory(&config, 2, &[]);
    assert_ne!(a[0], b[0]);
}
