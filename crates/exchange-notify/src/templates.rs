//! Plain-text message rendering.
//!
//! The assignment notice is built from the participant's own contact info
//! plus the assigned receiver's display name and wish note - nothing else.
//! No identifiers and no other pairings ever appear in a message body, so
//! no single email leaks the exchange graph.

use exchange_types::{Assignment, Event, Participant};

use crate::domain::entities::EmailMessage;

/// Formats a date like "Thursday, December 24, 2026".
fn format_date(event: &Event) -> String {
    event.exchange_date.format("%A, %B %-d, %Y").to_string()
}

/// Formats the budget line, mirroring the organizer's form input.
fn format_budget(event: &Event) -> String {
    match event.budget {
        Some(amount) => format!("${amount:.2}"),
        None => "No limit set".to_owned(),
    }
}

/// Renders the secret assignment notice for one participant.
pub fn assignment_notice(
    participant: &Participant,
    assignment: &Assignment,
    event: &Event,
) -> EmailMessage {
    let wish_line = match &assignment.receiver_wish_note {
        Some(note) => format!("Their wish list: {note}"),
        None => "No specific wishes provided. Use your creativity!".to_owned(),
    };

    let body = format!(
        "Ho ho ho, {name}!\n\
         \n\
         The assignments for \"{event_name}\" have been drawn, and you have\n\
         been matched with someone special.\n\
         \n\
         You are buying a gift for: {receiver}\n\
         {wish_line}\n\
         \n\
         Exchange date: {date}\n\
         Suggested budget: {budget}\n\
         \n\
         Keep your assignment secret - that's what makes it fun!\n",
        name = participant.name,
        event_name = event.name,
        receiver = assignment.receiver_name,
        wish_line = wish_line,
        date = format_date(event),
        budget = format_budget(event),
    );

    EmailMessage {
        to: participant.email.clone(),
        subject: format!("🎁 Your Secret Santa Assignment - {}", event.name),
        body,
    }
}

/// Renders the confirmation summary for the organizer.
///
/// Deliberately carries only the participant count, never the pairings: the
/// organizer learns that everyone was notified, not who gives to whom.
pub fn organizer_summary(event: &Event, participant_count: usize) -> EmailMessage {
    let body = format!(
        "Your gift exchange has been created and all participants have been\n\
         notified of their assignments.\n\
         \n\
         Event: {event_name}\n\
         Exchange date: {date}\n\
         Suggested budget: {budget}\n\
         Total participants: {participant_count}\n\
         \n\
         The pairings stay secret - each participant only knows who they are\n\
         buying for.\n",
        event_name = event.name,
        date = format_date(event),
        budget = format_budget(event),
        participant_count = participant_count,
    );

    EmailMessage {
        to: event.organizer_email.clone(),
        subject: format!("✅ Secret Santa Event Created - {}", event.name),
        body,
    }
}
