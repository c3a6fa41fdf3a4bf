//! Prompt templates for the three generation calls.

/// Token limit for the intro narration.
pub const INTRO_MAX_TOKENS: u32 = 150;
/// Token limit for the two-quest reply.
pub const QUESTS_MAX_TOKENS: u32 = 200;
/// Number of quests a well-formed flow produces.
pub const QUESTS_REQUIRED: usize = 2;
/// Number of illustrations requested per pair of quests.
pub const ILLUSTRATION_COUNT: u8 = 2;
/// Resolution requested for quest illustrations.
pub const ILLUSTRATION_SIZE: &str = "256x256";

/// Prompt for the short dark fantasy introduction to the user's goal.
#[must_use]
pub fn intro(goal: &str) -> String {
    format!(
        "You are a narrator in a dark fantasy world. The user wants to achieve \
         the goal: \"{goal}\".\n\
         Write a short, immersive introduction (max 100 words) describing how \
         they begin this ominous quest.\n\
         Emphasize an eerie atmosphere, but keep it concise."
    )
}

/// Prompt requesting exactly two quests in the labeled line format the
/// parser understands.
#[must_use]
pub fn quests(goal: &str) -> String {
    format!(
        "The user wants to achieve: \"{goal}\".\n\
         Provide exactly two short \"quest\" options in a dark fantasy style:\n\
         1) Give each quest a 1-line fantasy-themed TITLE (no more than 7 words).\n\
         2) Then give a 1-line real-world ACTION (e.g. \"Study at the library for 1 hour\").\n\
         \n\
         Format:\n\
         Quest 1 Title: ...\n\
         Quest 1 Action: ...\n\
         Quest 2 Title: ...\n\
         Quest 2 Action: ..."
    )
}

/// Prompt for two tarot-styled illustrations, one per quest title.
#[must_use]
pub fn illustration(first_title: &str, second_title: &str) -> String {
    format!(
        "Create two dark fantasy style illustrations, each evoking a \
         tarot-card look for these quest titles:\n\
         1) {first_title}\n\
         2) {second_title}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_prompt_embeds_goal() {
        let prompt = intro("learn the violin");
        assert!(prompt.contains("\"learn the violin\""));
        assert!(prompt.contains("dark fantasy"));
    }

    #[test]
    fn test_quests_prompt_spells_out_label_format() {
        let prompt = quests("run a marathon");
        assert!(prompt.contains("\"run a marathon\""));
        for label in [
            "Quest 1 Title:",
            "Quest 1 Action:",
            "Quest 2 Title:",
            "Quest 2 Action:",
        ] {
            assert!(prompt.contains(label), "missing label {label}");
        }
    }

    #[test]
    fn test_illustration_prompt_embeds_both_titles() {
        let prompt = illustration("The Hollow Crown", "Ashes of the Scriptorium");
        assert!(prompt.contains("1) The Hollow Crown"));
        assert!(prompt.contains("2) Ashes of the Scriptorium"));
    }
}
