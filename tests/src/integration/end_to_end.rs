//! Full submission-to-notification runs across all subsystems.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use exchange_engine::AssignmentError;
    use exchange_runtime::WorkflowError;
    use exchange_store::{EventStoreApi, InMemoryEventStore, StoreError};
    use exchange_types::ParticipantId;

    use crate::integration::fixtures::{submission, workflow_with, RecordingProvider};

    #[tokio::test]
    async fn test_full_run_links_every_giver_and_notifies_everyone() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 42);

        let report = workflow.run(submission(6)).await.unwrap();
        let event_id = report.event.id;

        assert_eq!(report.participant_count, 6);
        assert_eq!(report.delivery.total, 7);
        assert!(report.delivery.all_delivered());
        assert!(store.assignments_complete(event_id).await.unwrap());

        // Every participant got exactly one message; the organizer got the
        // summary.
        let sent = provider.sent();
        let participants = store.participants(event_id).await.unwrap();
        for p in &participants {
            assert_eq!(sent.iter().filter(|m| m.to == p.email).count(), 1);
        }
        assert_eq!(
            sent.iter()
                .filter(|m| m.to == "organizer@example.com")
                .count(),
            1
        );

        // The recorded links form a single cycle over all six participants.
        let assignments = store.assignments(event_id).await.unwrap();
        let mut seen: Vec<ParticipantId> = Vec::new();
        let mut current = participants[0].id;
        for _ in 0..participants.len() {
            seen.push(current);
            current = assignments.receiver_of(current).unwrap();
        }
        assert_eq!(current, participants[0].id);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), participants.len());
    }

    #[tokio::test]
    async fn test_delivery_failures_do_not_abort_the_run() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::failing_for(&["person2@example.com"]));
        let workflow = workflow_with(store.clone(), provider.clone(), 7);

        let report = workflow.run(submission(4)).await.unwrap();

        assert_eq!(report.delivery.total, 5);
        assert_eq!(report.delivery.failed, 1);
        assert_eq!(report.delivery.successful, 4);
        // Assignments were recorded before notification started.
        assert!(store
            .assignments_complete(report.event.id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_undersized_group_is_rejected_before_persistence_of_links() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 1);

        let err = workflow.run(submission(2)).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Assignment(AssignmentError::InsufficientParticipants {
                count: 2,
                min: 3
            })
        ));
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejects_the_whole_batch() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 1);

        let mut sub = submission(5);
        sub.participants[4].email = "PERSON1@example.com".to_owned();

        let err = workflow.run(sub).await.unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Store(StoreError::DuplicateEmail(_))
        ));
        assert!(provider.sent().is_empty());
    }

    #[tokio::test]
    async fn test_same_seed_reproduces_the_same_pairings() {
        let mut rings = Vec::new();
        for _ in 0..2 {
            let store = Arc::new(InMemoryEventStore::new());
            let provider = Arc::new(RecordingProvider::new());
            let workflow = workflow_with(store.clone(), provider, 99);
            let report = workflow.run(submission(5)).await.unwrap();

            let participants = store.participants(report.event.id).await.unwrap();
            let assignments = store.assignments(report.event.id).await.unwrap();
            // Ids differ across runs; compare by enrollment position.
            let position =
                |id: ParticipantId| participants.iter().position(|p| p.id == id).unwrap();
            let ring: Vec<(usize, usize)> = assignments
                .iter()
                .map(|a| (position(a.giver), position(a.receiver)))
                .collect();
            rings.push(ring);
        }
        assert_eq!(rings[0], rings[1]);
    }
}
