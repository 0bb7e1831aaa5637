//! Distribution quality of the assignment draw.
//!
//! The engine builds a single ring over a Fisher-Yates shuffle, so across
//! seeds a fixed giver should receive each other participant as their
//! assignee roughly uniformly. These tests run the engine many times and
//! check the observed frequencies, with tolerances loose enough to keep the
//! suite deterministic for the seed ranges used.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use exchange_engine::{AssignmentEngine, AssignmentEngineApi};
    use exchange_types::{EventId, Participant, ParticipantId};
    use uuid::Uuid;

    fn roster(n: u128) -> Vec<Participant> {
        let event_id = EventId(Uuid::from_u128(0xEE));
        (1..=n)
            .map(|k| Participant {
                id: ParticipantId(Uuid::from_u128(k)),
                event_id,
                name: format!("Person{k}"),
                email: format!("person{k}@example.com"),
                wish_note: None,
            })
            .collect()
    }

    #[test]
    fn test_fixed_giver_receives_everyone_else_roughly_uniformly() {
        let participants = roster(5);
        let giver = participants[0].id;
        let runs = 2000u64;

        let mut counts: HashMap<ParticipantId, u64> = HashMap::new();
        for seed in 0..runs {
            let engine = AssignmentEngine::seeded(seed);
            let set = engine.generate_assignments(&participants).unwrap();
            let receiver = set.receiver_of(giver).unwrap();
            assert_ne!(receiver, giver);
            *counts.entry(receiver).or_default() += 1;
        }

        // Four possible receivers, expected 500 each. A chi-square statistic
        // above 18.47 (p = 0.0004, 3 degrees of freedom) would be a real
        // bias, not seed noise.
        assert_eq!(counts.len(), 4);
        let expected = runs as f64 / 4.0;
        let chi_square: f64 = counts
            .values()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        assert!(
            chi_square < 18.47,
            "receiver distribution skewed: chi-square {chi_square:.2}, counts {counts:?}"
        );
    }

    #[test]
    fn test_every_pairing_is_reachable_for_a_small_group() {
        // With 4 participants there are 4!/4 = 6 distinct rings (3! fixing
        // one start). Over enough seeds each should show up.
        let participants = roster(4);
        let anchor = participants[0].id;

        let mut rings = std::collections::HashSet::new();
        for seed in 0..600u64 {
            let engine = AssignmentEngine::seeded(seed);
            let set = engine.generate_assignments(&participants).unwrap();

            let mut ring = Vec::new();
            let mut current = anchor;
            for _ in 0..participants.len() {
                current = set.receiver_of(current).unwrap();
                ring.push(current);
            }
            rings.insert(ring);
        }

        assert_eq!(rings.len(), 6, "some 4-person rings never produced");
    }

    #[test]
    fn test_distinct_seeds_disagree_somewhere() {
        let participants = roster(8);
        let a = AssignmentEngine::seeded(1)
            .generate_assignments(&participants)
            .unwrap();

        let mut differs = false;
        for seed in 2..10u64 {
            let b = AssignmentEngine::seeded(seed)
                .generate_assignments(&participants)
                .unwrap();
            if participants
                .iter()
                .any(|p| a.receiver_of(p.id) != b.receiver_of(p.id))
            {
                differs = true;
                break;
            }
        }
        assert!(differs, "eight seeds in a row produced the same ring");
    }
}
