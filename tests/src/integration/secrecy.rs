//! Nobody learns a pairing that is not their own.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use exchange_store::{EventStoreApi, InMemoryEventStore};

    use crate::integration::fixtures::{submission, workflow_with, RecordingProvider};

    #[tokio::test]
    async fn test_each_notice_names_only_self_and_receiver() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 5);

        let report = workflow.run(submission(6)).await.unwrap();
        let participants = store.participants(report.event.id).await.unwrap();
        let assignments = store.assignments(report.event.id).await.unwrap();

        for message in provider.sent() {
            let Some(giver) = participants.iter().find(|p| p.email == message.to) else {
                continue; // organizer summary, checked separately
            };
            let receiver_id = assignments.receiver_of(giver.id).unwrap();

            for other in &participants {
                let expected = other.id == giver.id || other.id == receiver_id;
                assert_eq!(
                    message.body.contains(&other.name),
                    expected,
                    "notice to {} leaks or omits {}",
                    giver.email,
                    other.name
                );
            }
        }
    }

    #[tokio::test]
    async fn test_no_identifier_appears_in_any_message() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 5);

        let report = workflow.run(submission(4)).await.unwrap();
        let participants = store.participants(report.event.id).await.unwrap();

        for message in provider.sent() {
            let text = format!("{} {}", message.subject, message.body);
            assert!(!text.contains(&report.event.id.to_string()));
            for p in &participants {
                assert!(
                    !text.contains(&p.id.to_string()),
                    "message to {} carries a participant id",
                    message.to
                );
            }
        }
    }

    #[tokio::test]
    async fn test_organizer_summary_carries_counts_not_pairings() {
        let store = Arc::new(InMemoryEventStore::new());
        let provider = Arc::new(RecordingProvider::new());
        let workflow = workflow_with(store.clone(), provider.clone(), 5);

        let report = workflow.run(submission(5)).await.unwrap();
        let participants = store.participants(report.event.id).await.unwrap();

        let summary = provider
            .sent()
            .into_iter()
            .find(|m| m.to == "organizer@example.com")
            .unwrap();

        assert!(summary.body.contains("Total participants: 5"));
        for p in &participants {
            assert!(
                !summary.body.contains(&p.name),
                "organizer summary names {}",
                p.name
            );
        }
    }
}
