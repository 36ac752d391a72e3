use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use regicide::{Card, GameEngine, GameState, Phase};

/// Cheapest set of positions covering the counter-attack, or the whole hand.
fn defense_for(engine: &GameEngine) -> Vec<usize> {
    let required = engine.effective_damage();
    let mut order: Vec<usize> = (0..engine.hand().len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(engine.hand()[i].value()));
    let mut total = 0;
    let mut picked = Vec::new();
    for idx in order {
        if total >= required {
            break;
        }
        total += engine.hand()[idx].value();
        picked.push(idx);
    }
    picked
}

/// Advance the game by up to `turns` engine calls with single-card attacks.
fn play_turns(engine: &mut GameEngine, rng: &mut SmallRng, turns: usize) {
    for _ in 0..turns {
        match engine.phase() {
            Phase::AwaitingPlay => {
                if engine.hand().is_empty() {
                    engine.concede();
                    continue;
                }
                let idx = rng.random_range(0..engine.hand().len());
                engine.play(&[idx]).unwrap();
            }
            Phase::AwaitingDefense => {
                let picked = defense_for(engine);
                engine.defend(&picked).unwrap();
            }
            Phase::Victory | Phase::Defeat => break,
        }
    }
}

fn all_cards(state: &GameState) -> Vec<Card> {
    let mut cards = Vec::new();
    for pile in [
        &state.deck,
        &state.hand,
        &state.castle,
        &state.tavern,
        &state.played,
        &state.discard,
    ] {
        cards.extend(pile.iter().copied());
    }
    cards
}

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), turns in 0usize..40) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new_game("Tester", &mut rng);
        play_turns(&mut engine, &mut rng, turns);

        let state = engine.state();
        let bytes = bincode::serialize(&state).unwrap();
        let decoded: GameState = bincode::deserialize(&bytes).unwrap();
        let restored = GameEngine::from_state(decoded);
        prop_assert_eq!(engine.state(), restored.state());
        prop_assert_eq!(engine.phase(), restored.phase());
        prop_assert_eq!(engine.effective_damage(), restored.effective_damage());
    }

    #[test]
    fn cards_are_conserved(seed in any::<u64>(), turns in 0usize..60) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new_game("Tester", &mut rng);
        play_turns(&mut engine, &mut rng, turns);
        let state = engine.state();

        let mut cards = all_cards(&state);
        prop_assert_eq!(cards.len(), 52);
        cards.sort_by_key(|c| (c.suit(), c.rank()));
        cards.dedup();
        prop_assert_eq!(cards.len(), 52);

        prop_assert!(state.hand.len() <= 8);
        prop_assert!(state.castle.windows(2).all(|w| w[0].rank() <= w[1].rank()));
        prop_assert!(state.castle.iter().all(|c| c.is_face()));
        prop_assert!(state.is_consistent());
    }
}

#[test]
fn restored_game_continues_identically() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut engine = GameEngine::new_game("Tester", &mut rng);
    play_turns(&mut engine, &mut rng, 5);

    let bytes = bincode::serialize(&engine.state()).unwrap();
    let mut restored = GameEngine::from_state(bincode::deserialize(&bytes).unwrap());

    let mut rng_a = SmallRng::seed_from_u64(99);
    let mut rng_b = SmallRng::seed_from_u64(99);
    play_turns(&mut engine, &mut rng_a, 20);
    play_turns(&mut restored, &mut rng_b, 20);
    assert_eq!(engine.state(), restored.state());
}
