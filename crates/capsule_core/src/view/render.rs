//! Plain-text rendering of the two views.
//!
//! # Responsibility
//! - Turn view state into terminal output; no side effects, no input.
//!
//! # Invariants
//! - Browse output shows every stored capsule, insertion order preserved.
//! - Capsules with a future open date are still shown; the date is a hint.

use super::Draft;
use crate::model::capsule::Capsule;
use chrono::{DateTime, Local, Utc};

/// Longest message excerpt shown on a card.
const MESSAGE_PREVIEW_CHARS: usize = 120;

/// Renders the browse view: header, one card per capsule, action hints.
pub fn render_browse(capsules: &[Capsule]) -> String {
    let mut out = String::from("=== Your Memory Capsules ===\n");

    if capsules.is_empty() {
        out.push_str("\nNo capsules yet. Write a note to your future self.\n");
    } else {
        for capsule in capsules {
            out.push('\n');
            out.push_str(&render_card(capsule));
        }
    }

    out.push_str("\n[w] write to future you   [q] quit\n");
    out
}

/// Renders the compose form with the current draft values.
pub fn render_compose(draft: &Draft, busy: bool) -> String {
    let mut out = String::from("=== New Capsule ===\n");
    out.push_str(&format!("Title:   {}\n", draft.title));
    out.push_str(&format!("Message: {}\n", message_preview(&draft.message)));
    match draft.open_date {
        Some(date) => out.push_str(&format!("Open on: {date}\n")),
        None => out.push_str("Open on: (none)\n"),
    }

    if busy {
        out.push_str("\nGenerating your quote...\n");
    } else {
        out.push_str("\n[s] save   [c] cancel\n");
    }
    out
}

fn render_card(capsule: &Capsule) -> String {
    let mut card = format!(
        "* {}  ({})\n  {}\n  \"{}\"\n",
        capsule.title,
        format_created(&capsule.date_created),
        message_preview(&capsule.message),
        capsule.ai_quote
    );
    if let Some(date) = capsule.date_to_open {
        card.push_str(&format!("  To be opened: {}\n", date.format("%B %-d, %Y")));
    }
    card
}

/// Truncates a message to the card excerpt budget, appending an ellipsis
/// when anything was cut.
pub fn message_preview(message: &str) -> String {
    let flattened = message.replace(['\n', '\r'], " ");
    let mut preview: String = flattened.chars().take(MESSAGE_PREVIEW_CHARS).collect();
    if flattened.chars().count() > MESSAGE_PREVIEW_CHARS {
        preview.push_str("...");
    }
    preview
}

// Shown in the user's local time, like the browse UI it mirrors.
fn format_created(created: &DateTime<Utc>) -> String {
    created.with_timezone(&Local).format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{message_preview, render_browse, render_compose};
    use crate::model::capsule::Capsule;
    use crate::view::Draft;
    use chrono::{Local, NaiveDate, TimeZone, Utc};

    fn capsule(title: &str, message: &str) -> Capsule {
        Capsule {
            id: "1700000000000".to_string(),
            title: title.to_string(),
            message: message.to_string(),
            ai_quote: "Every moment is a fresh beginning.".to_string(),
            date_created: Utc.with_ymd_and_hms(2026, 8, 27, 9, 30, 0).unwrap(),
            date_to_open: None,
        }
    }

    #[test]
    fn empty_browse_shows_placeholder_and_actions() {
        let output = render_browse(&[]);
        assert!(output.contains("No capsules yet"));
        assert!(output.contains("[w] write"));
    }

    #[test]
    fn card_shows_title_quote_and_long_local_date() {
        let subject = capsule("Hope", "Keep going.");
        let expected_date = subject
            .date_created
            .with_timezone(&Local)
            .format("%B %-d, %Y")
            .to_string();

        let output = render_browse(&[subject]);
        assert!(output.contains("Hope"));
        assert!(output.contains("Keep going."));
        assert!(output.contains("Every moment is a fresh beginning."));
        assert!(output.contains(&expected_date));
    }

    #[test]
    fn card_hints_at_open_date_only_when_present() {
        let mut with_date = capsule("Later", "body");
        with_date.date_to_open = NaiveDate::from_ymd_opt(2027, 1, 1);

        let output = render_browse(&[capsule("Now", "body"), with_date]);
        assert_eq!(output.matches("To be opened:").count(), 1);
        assert!(output.contains("To be opened: January 1, 2027"));
    }

    #[test]
    fn long_messages_are_truncated_with_ellipsis() {
        let long = "x".repeat(500);
        let preview = message_preview(&long);
        assert_eq!(preview.chars().count(), 123);
        assert!(preview.ends_with("..."));

        assert_eq!(message_preview("short"), "short");
    }

    #[test]
    fn compose_swaps_actions_for_progress_while_busy() {
        let draft = Draft {
            title: "Hope".to_string(),
            message: "Keep going.".to_string(),
            open_date: None,
        };

        let idle = render_compose(&draft, false);
        assert!(idle.contains("[s] save"));
        assert!(!idle.contains("Generating"));

        let busy = render_compose(&draft, true);
        assert!(busy.contains("Generating your quote"));
        assert!(!busy.contains("[s] save"));
    }
}
