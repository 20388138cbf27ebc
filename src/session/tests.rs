use super::*;
use bevy::prelude::Vec2;

const DT: f32 = 1.0 / 60.0;

fn config() -> SessionConfig {
    SessionConfig {
        seed: 7,
        lives: 3,
        respawn_delay: 1.5,
    }
}

// ---------------------------------------------------------------------------
// lives and respawn flow
// ---------------------------------------------------------------------------

#[test]
fn test_death_burns_a_life_and_delays_the_respawn() {
    let mut session = GameSession::new(&config());

    session.note_player_death();
    assert_eq!(session.lives, 2);

    // No decision until the delay has elapsed.
    let mut elapsed = 0.0;
    let decision = loop {
        match session.tick_respawn(DT) {
            None => {
                elapsed += DT;
                assert!(elapsed < 3.0, "respawn delay never elapsed");
            }
            Some(decision) => break decision,
        }
    };
    assert_eq!(decision, RespawnDecision::Respawn);
    assert!(elapsed >= 1.5 - DT);

    // Decision is yielded exactly once.
    assert_eq!(session.tick_respawn(DT), None);
}

#[test]
fn test_double_death_report_burns_one_life() {
    let mut session = GameSession::new(&config());

    session.note_player_death();
    session.note_player_death();
    assert_eq!(session.lives, 2);
}

#[test]
fn test_last_life_leads_to_game_over() {
    let mut session = GameSession::new(&config());

    for expected in [RespawnDecision::Respawn, RespawnDecision::Respawn, RespawnDecision::GameOver]
    {
        session.note_player_death();
        let decision = loop {
            if let Some(decision) = session.tick_respawn(DT) {
                break decision;
            }
        };
        assert_eq!(decision, expected);
    }
    assert_eq!(session.lives, 0);
}

#[test]
fn test_checkpoint_updates() {
    let mut session = GameSession::new(&config());

    assert_eq!(session.checkpoint, Vec2::new(0.0, 2.0));
    session.set_checkpoint(Vec2::new(40.0, 6.0));
    assert_eq!(session.checkpoint, Vec2::new(40.0, 6.0));
}

// ---------------------------------------------------------------------------
// tallies
// ---------------------------------------------------------------------------

#[test]
fn test_coin_and_defeat_tallies() {
    let mut session = GameSession::new(&config());

    session.add_coins(1);
    session.add_coins(5);
    session.report_enemy_defeated();
    assert_eq!(session.coins, 6);
    assert_eq!(session.enemies_defeated, 1);
}
