use std::thread;

use navigator_core::model::{JourneyPhase, MilestoneFacts};
use navigator_core::time::fixed_now;
use services::{Clock, JourneyRegistry, restore, snapshot};

#[test]
fn concurrent_marks_against_one_session_are_not_lost() {
    let registry = JourneyRegistry::new(Clock::fixed(fixed_now()));
    let id = registry
        .create_session(MilestoneFacts::default())
        .unwrap();

    // Two tabs completing tiles against the same session key.
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let registry = registry.clone();
            thread::spawn(move || {
                let key = format!("tile_{n}");
                registry
                    .with_session(id, |session| {
                        session.mark_tile_complete(&key, JourneyPhase::Discovery)
                    })
                    .unwrap()
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let count = registry
        .with_session(id, |session| session.completed_tiles().len())
        .unwrap();
    assert_eq!(count, 8);
}

#[test]
fn session_survives_snapshot_roundtrip_through_registry() {
    let registry = JourneyRegistry::new(Clock::fixed(fixed_now()));
    let id = registry
        .create_session(MilestoneFacts::new().with_guided_care_completed(true))
        .unwrap();

    registry
        .with_session(id, |session| {
            session.mark_tile_complete("care_plan_basics", JourneyPhase::Planning)
        })
        .unwrap()
        .unwrap();

    let json = registry
        .with_session(id, |session| snapshot(session))
        .unwrap()
        .unwrap();
    registry.end_session(id).unwrap();

    let restored = restore(&json, Clock::fixed(fixed_now())).unwrap();
    assert_eq!(restored.recorded_stage(), Some(JourneyPhase::Planning));
    assert_eq!(restored.completed_tiles().len(), 1);
    assert!(restored.stage_matches_facts());
}
