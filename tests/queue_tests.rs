//! Turn queue integration tests through the public API.

use duel_engine::{
    take_turn, ActionKind, Archetype, Combatant, CombatantId, DuelBuilder, QueueError, Roster,
    TurnOrder, TurnQueue,
};

const A: CombatantId = CombatantId(0);
const B: CombatantId = CombatantId(1);

fn rogue_pair() -> TurnQueue {
    let roster = Roster::new(
        Combatant::new("r", Archetype::Rogue),
        Combatant::new("r2", Archetype::Rogue),
    );
    TurnQueue::new(roster)
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_queue_starts_empty_and_fills() {
    let mut queue = rogue_pair();
    assert!(queue.is_empty());

    queue.enqueue(A);
    assert!(!queue.is_empty());
    assert_eq!(queue.peek(), Some(A));
}

#[test]
fn test_sides_are_fixed_once() {
    let mut queue = rogue_pair();
    queue.enqueue(B);
    queue.enqueue(A);
    queue.enqueue(B);

    // Draining and refilling never reassigns the sides.
    while queue.dequeue().is_ok() {}
    queue.enqueue(A);

    assert_eq!(queue.sides(), Some((B, A)));
}

#[test]
fn test_dequeue_on_empty_is_guarded() {
    let mut queue = rogue_pair();
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));

    queue.enqueue(A);
    queue.dequeue().unwrap();
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_peek_fallback_after_draining() {
    let mut queue = rogue_pair();
    queue.enqueue(B);
    queue.enqueue(A);
    queue.dequeue().unwrap();
    queue.dequeue().unwrap();

    // The queue is empty but side A (the first added, here B) still answers.
    assert_eq!(queue.peek(), Some(B));
}

// =============================================================================
// Cleaning
// =============================================================================

#[test]
fn test_cleaning_drops_a_run_of_exhausted_entries() {
    let mut queue = rogue_pair();
    queue.enqueue(A);
    queue.enqueue(A);
    queue.enqueue(B);
    queue.enqueue(A);

    queue.roster_mut()[A].set_resource(0);

    // All leading copies of A go at once; the trailing one stays until it
    // reaches the front.
    assert_eq!(queue.peek(), Some(B));
    assert_eq!(queue.dequeue(), Ok(B));
    assert!(queue.is_empty());
}

#[test]
fn test_cleaning_reports_via_is_empty() {
    let mut queue = rogue_pair();
    queue.enqueue(A);
    queue.roster_mut()[A].set_resource(2);

    // Rogue ordinary costs 3: the only entry is dead weight.
    assert!(queue.is_empty());
    assert!(queue.is_empty());
}

// =============================================================================
// Match progression
// =============================================================================

#[test]
fn test_take_turn_flows_through_skills() {
    let mut queue = DuelBuilder::new()
        .combatant_a("r", Archetype::Rogue)
        .combatant_b("m", Archetype::Mage)
        .build();

    take_turn(&mut queue, ActionKind::Ordinary);

    // Rogue ordinary: 15 power against defense 8, cost 3, one extra turn.
    assert_eq!(queue.roster()[B].hit_points(), 93);
    assert_eq!(queue.roster()[A].resource(), 97);
    assert_eq!(queue.peek(), Some(B));
}

#[test]
fn test_winner_after_knockout() {
    let mut queue = DuelBuilder::new()
        .combatant_a("r", Archetype::Rogue)
        .combatant_b("m", Archetype::Mage)
        .build();
    queue.roster_mut()[B].set_hit_points(3);

    take_turn(&mut queue, ActionKind::Ordinary);

    assert!(queue.is_over());
    assert_eq!(queue.winner(), Some(A));
}

#[test]
fn test_vampire_drain_can_outlast() {
    let mut queue = DuelBuilder::new()
        .combatant_a("v", Archetype::Vampire)
        .combatant_b("m", Archetype::Mage)
        .build();
    queue.roster_mut()[A].set_hit_points(50);

    take_turn(&mut queue, ActionKind::Special);

    // Power 30 against defense 8 deals 22, drained back.
    assert_eq!(queue.roster()[A].hit_points(), 72);
    assert_eq!(queue.roster()[B].hit_points(), 78);
}

// =============================================================================
// Clone isolation
// =============================================================================

#[test]
fn test_clone_mutations_never_reach_the_source() {
    let mut queue = DuelBuilder::new()
        .combatant_a("r", Archetype::Rogue)
        .combatant_b("m", Archetype::Mage)
        .build();

    let source_render = queue.to_string();
    let source_front = queue.peek();

    let mut clone = queue.clone();
    take_turn(&mut clone, ActionKind::Special);
    take_turn(&mut clone, ActionKind::Ordinary);
    clone.roster_mut()[A].set_hit_points(1);

    assert_eq!(queue.to_string(), source_render);
    assert_eq!(queue.peek(), source_front);
    assert_eq!(queue.roster()[A].hit_points(), 100);
    assert_eq!(queue.roster()[B].hit_points(), 100);
}

#[test]
fn test_clone_of_mid_match_state() {
    let mut queue = DuelBuilder::new().build();
    take_turn(&mut queue, ActionKind::Ordinary);
    take_turn(&mut queue, ActionKind::Special);

    let mut clone = queue.clone();
    assert_eq!(clone.to_string(), queue.to_string());

    take_turn(&mut clone, ActionKind::Ordinary);
    assert_ne!(clone.to_string(), queue.to_string());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_display_matches_entry_order() {
    let mut queue = rogue_pair();
    queue.enqueue(A);
    queue.enqueue(B);
    queue.enqueue(A);

    assert_eq!(
        queue.to_string(),
        "r (Rogue): 100/100 -> r2 (Rogue): 100/100 -> r (Rogue): 100/100"
    );
}

#[test]
fn test_empty_queue_renders_empty() {
    let queue = rogue_pair();
    assert_eq!(queue.to_string(), "");
}
