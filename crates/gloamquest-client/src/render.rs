//! Terminal rendering: spinner, story panel, quest cards, selection.

use std::io::{self, Write};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use gloamquest_core::quest::Quest;

/// Spinner shown while the pipeline runs. It clears itself on drop, so it
/// disappears on every exit path.
pub struct SpinnerGuard(ProgressBar);

impl SpinnerGuard {
    /// Start a ticking spinner with the given message.
    #[must_use]
    pub fn start(message: &str) -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
                .template("{spinner:.magenta} {msg}")
                .expect("valid progress bar template"),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(message.to_string());
        Self(spinner)
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.0.finish_and_clear();
    }
}

/// Print the story panel.
pub fn story(text: &str) {
    println!();
    println!("{}", "── Your story begins ──".bold().magenta());
    println!("{text}");
    println!();
}

/// Print both quest cards.
pub fn quest_cards(quests: &[Quest], image_urls: &[String]) {
    for (i, quest) in quests.iter().enumerate() {
        println!("{}", card(i, quest, image_urls.get(i).map(String::as_str)));
    }
}

/// Format one quest card. A missing URL renders a placeholder marker, the
/// same way a broken image would render in a browser card.
fn card(index: usize, quest: &Quest, image_url: Option<&str>) -> String {
    let illustration = match image_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => "(no illustration)".to_string(),
    };
    format!(
        "{}\n  {}\n  {}\n  {}\n",
        format!("[{}] {}", index + 1, quest.title).bold().yellow(),
        illustration.dimmed(),
        quest.description,
        "Choose this quest with its number.".dimmed(),
    )
}

/// What the user typed at the selection prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index of the chosen quest.
    Quest(usize),
    /// The user wants out.
    Quit,
    /// Anything else; prompt again.
    Invalid,
}

/// Interpret one line of selection input against `count` cards.
#[must_use]
pub fn parse_selection(input: &str, count: usize) -> Selection {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Selection::Quit;
    }
    match input.parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Selection::Quest(n - 1),
        _ => Selection::Invalid,
    }
}

/// Prompt until the user picks a card or quits. Picking a card prints that
/// quest; the other card stays available, so the loop continues until `q`.
///
/// # Errors
///
/// Returns an I/O error if stdin or stdout fails.
pub fn select_quest(quests: &[Quest]) -> io::Result<()> {
    let mut input = String::new();
    loop {
        print!(
            "{}",
            format!("Choose your quest [1-{}] or q to quit: ", quests.len()).bold()
        );
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(());
        }

        match parse_selection(&input, quests.len()) {
            Selection::Quest(index) => {
                let quest = &quests[index];
                println!(
                    "\nYou chose: {}\nNow do: {}\n",
                    quest.title.bold().yellow(),
                    quest.description
                );
            }
            Selection::Quit => return Ok(()),
            Selection::Invalid => println!("{}", "That is not one of the cards.".dimmed()),
        }
    }
}

/// Ask for the goal interactively.
///
/// # Errors
///
/// Returns an I/O error if stdin or stdout fails.
pub fn prompt_goal() -> io::Result<String> {
    print!("{}", "What do you seek to achieve? ".bold());
    io::stdout().flush()?;
    let mut goal = String::new();
    io::stdin().read_line(&mut goal)?;
    Ok(goal.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_shows_title_description_and_url() {
        let quest = Quest::new("The Hollow Crown", "Read one chapter");

        let text = card(0, &quest, Some("https://img.example/first.png"));

        assert!(text.contains("The Hollow Crown"));
        assert!(text.contains("Read one chapter"));
        assert!(text.contains("https://img.example/first.png"));
        assert!(text.contains("[1]"));
    }

    #[test]
    fn test_card_without_url_shows_placeholder() {
        let quest = Quest::new("A", "B");

        let text = card(1, &quest, None);

        assert!(text.contains("(no illustration)"));
        assert!(text.contains("[2]"));
    }

    #[test]
    fn test_card_with_empty_url_shows_placeholder() {
        let quest = Quest::new("A", "B");

        let text = card(0, &quest, Some(""));

        assert!(text.contains("(no illustration)"));
    }

    #[test]
    fn test_parse_selection_accepts_card_numbers() {
        assert_eq!(parse_selection("1", 2), Selection::Quest(0));
        assert_eq!(parse_selection(" 2 \n", 2), Selection::Quest(1));
    }

    #[test]
    fn test_parse_selection_rejects_out_of_range() {
        assert_eq!(parse_selection("0", 2), Selection::Invalid);
        assert_eq!(parse_selection("3", 2), Selection::Invalid);
        assert_eq!(parse_selection("first", 2), Selection::Invalid);
    }

    #[test]
    fn test_parse_selection_quits_on_q() {
        assert_eq!(parse_selection("q", 2), Selection::Quit);
        assert_eq!(parse_selection("QUIT", 2), Selection::Quit);
    }
}
