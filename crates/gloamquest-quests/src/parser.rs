//! Parser for the model's labeled quest lines.
//!
//! The quest prompt asks for `Quest N Title:` / `Quest N Action:` lines.
//! Models drift from that format freely, so matching is case-insensitive and
//! order-independent: each line's quest index comes from the label itself and
//! title/action pairs are associated by that index, not by line sequence.
//! Lines that don't carry a recognizable label are ignored. If a label
//! repeats, the last occurrence wins.

use std::collections::BTreeMap;

use gloamquest_core::error::GenerationError;
use gloamquest_core::quest::Quest;

use crate::prompts::QUESTS_REQUIRED;

enum Field {
    Title,
    Action,
}

#[derive(Default)]
struct PartialQuest {
    title: Option<String>,
    description: Option<String>,
}

/// Parse the model's reply into exactly two quests.
///
/// Returns the first two complete title/action pairs in ascending index
/// order.
///
/// # Errors
///
/// Returns `GenerationError::MalformedQuests` when fewer than two complete
/// pairs are present, with the number of pairs that were found.
pub fn parse_quests(text: &str) -> Result<Vec<Quest>, GenerationError> {
    let mut partials: BTreeMap<usize, PartialQuest> = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((index, field, value)) = parse_label(line) else {
            continue;
        };
        let entry = partials.entry(index).or_default();
        match field {
            Field::Title => entry.title = Some(value),
            Field::Action => entry.description = Some(value),
        }
    }

    let mut quests: Vec<Quest> = partials
        .into_values()
        .filter_map(|partial| match (partial.title, partial.description) {
            (Some(title), Some(description)) => Some(Quest { title, description }),
            _ => None,
        })
        .collect();

    if quests.len() < QUESTS_REQUIRED {
        return Err(GenerationError::MalformedQuests {
            found: quests.len(),
        });
    }
    quests.truncate(QUESTS_REQUIRED);
    Ok(quests)
}

/// Split a line into its quest index, field kind, and field value.
///
/// Accepts `quest <digits> title: <value>` and `quest <digits> action:
/// <value>` with arbitrary casing and spacing. Returns `None` for anything
/// else.
fn parse_label(line: &str) -> Option<(usize, Field, String)> {
    let rest = strip_prefix_ignore_ascii_case(line, "quest")?;
    let rest = rest.trim_start();

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let index: usize = rest[..digits_end].parse().ok()?;
    let rest = rest[digits_end..].trim_start();

    let (field, rest) = if let Some(after) = strip_prefix_ignore_ascii_case(rest, "title") {
        (Field::Title, after)
    } else if let Some(after) = strip_prefix_ignore_ascii_case(rest, "action") {
        (Field::Action, after)
    } else {
        return None;
    };

    let value = rest.trim_start().strip_prefix(':')?.trim();
    Some((index, field, value.to_string()))
}

fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let (head, tail) = text.split_at_checked(prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then_some(tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_round_trip() {
        let text = "Quest 1 Title: A\nQuest 1 Action: B\nQuest 2 Title: C\nQuest 2 Action: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(
            quests,
            vec![Quest::new("A", "B"), Quest::new("C", "D")]
        );
    }

    #[test]
    fn test_reordered_lines_associate_by_index() {
        // Quest 2 Title before Quest 1 Action: pairing must follow the label
        // index, not line order.
        let text = "Quest 1 Title: A\nQuest 2 Title: C\nQuest 1 Action: B\nQuest 2 Action: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(
            quests,
            vec![Quest::new("A", "B"), Quest::new("C", "D")]
        );
    }

    #[test]
    fn test_labels_match_case_insensitively() {
        let text = "QUEST 1 TITLE: A\nquest 1 action: B\nQuest 2 title: C\nqUeSt 2 AcTiOn: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests[0], Quest::new("A", "B"));
        assert_eq!(quests[1], Quest::new("C", "D"));
    }

    #[test]
    fn test_chatter_and_blank_lines_are_ignored() {
        let text = "Here are your quests!\n\n  Quest 1 Title: A  \nQuest 1 Action: B\n---\nQuest 2 Title: C\nQuest 2 Action: D\nGood luck!";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests.len(), 2);
        assert_eq!(quests[0], Quest::new("A", "B"));
    }

    #[test]
    fn test_missing_action_line_fails_with_found_count() {
        let text = "Quest 1 Title: A\nQuest 1 Action: B\nQuest 2 Title: C";

        let err = parse_quests(text).unwrap_err();

        assert!(matches!(
            err,
            GenerationError::MalformedQuests { found: 1 }
        ));
    }

    #[test]
    fn test_empty_input_fails_with_zero_found() {
        let err = parse_quests("").unwrap_err();

        assert!(matches!(
            err,
            GenerationError::MalformedQuests { found: 0 }
        ));
    }

    #[test]
    fn test_repeated_label_last_occurrence_wins() {
        let text = "Quest 1 Title: old\nQuest 1 Title: A\nQuest 1 Action: B\nQuest 2 Title: C\nQuest 2 Action: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests[0].title, "A");
    }

    #[test]
    fn test_more_than_two_complete_pairs_truncates_to_two() {
        let text = "Quest 1 Title: A\nQuest 1 Action: B\nQuest 2 Title: C\nQuest 2 Action: D\nQuest 3 Title: E\nQuest 3 Action: F";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests.len(), 2);
        assert_eq!(quests[1], Quest::new("C", "D"));
    }

    #[test]
    fn test_value_case_is_preserved() {
        let text =
            "quest 1 title: The Hollow Crown\nquest 1 action: Read ONE chapter\nquest 2 title: C\nquest 2 action: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests[0].title, "The Hollow Crown");
        assert_eq!(quests[0].description, "Read ONE chapter");
    }

    #[test]
    fn test_unlabeled_numberless_lines_are_ignored() {
        let text = "Quest Title: nope\nQuest 1 Title: A\nQuest 1 Action: B\nQuest 2 Title: C\nQuest 2 Action: D";

        let quests = parse_quests(text).unwrap();

        assert_eq!(quests[0].title, "A");
    }
}
