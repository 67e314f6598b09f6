//! Story nodes and the choices leading out of them.

use serde::{Deserialize, Serialize};

use super::{NodeId, Waypoint};

/// An edge of the story graph: one menu entry on a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Menu text shown to the player.
    pub prompt: String,

    /// Node the story moves to when this choice is taken.
    pub target: NodeId,

    /// Where taking this choice sends the traveller, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<Waypoint>,

    /// Optional flavor text appended to the menu entry.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Choice {
    /// Create a purely narrative choice with no waypoint and no detail.
    pub fn new(prompt: impl Into<String>, target: impl Into<NodeId>) -> Self {
        Self {
            prompt: prompt.into(),
            target: target.into(),
            waypoint: None,
            detail: String::new(),
        }
    }

    /// Attach a waypoint.
    pub fn with_waypoint(mut self, waypoint: Waypoint) -> Self {
        self.waypoint = Some(waypoint);
        self
    }

    /// Attach flavor text.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = detail.into();
        self
    }

    /// Format as a numbered menu line. `number` is the one-based display number.
    pub fn menu_line(&self, number: usize) -> String {
        if self.detail.is_empty() {
            format!("  {}. {}", number, self.prompt)
        } else {
            format!("  {}. {} — {}", number, self.prompt, self.detail)
        }
    }
}

/// A narrative beat: a titled description plus its ordered outgoing choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryNode {
    pub id: NodeId,
    pub title: String,
    pub description: String,

    /// Menu order is meaningful: index 0 is displayed as option 1.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl StoryNode {
    /// Create a node with no choices yet.
    pub fn new(
        id: impl Into<NodeId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            choices: Vec::new(),
        }
    }

    /// Append a choice to the menu.
    pub fn with_choice(mut self, choice: Choice) -> Self {
        self.choices.push(choice);
        self
    }

    /// Get a choice by zero-based index.
    pub fn choice(&self, index: usize) -> Option<&Choice> {
        self.choices.get(index)
    }

    /// A node without choices ends the story.
    pub fn is_terminal(&self) -> bool {
        self.choices.is_empty()
    }

    /// Render the node as a title, description, and numbered menu.
    pub fn describe(&self) -> String {
        let mut text = format!("=== {} ===\n{}\n", self.title, self.description);
        for (i, choice) in self.choices.iter().enumerate() {
            text.push('\n');
            text.push_str(&choice.menu_line(i + 1));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_node() -> StoryNode {
        StoryNode::new("zion", "Zion Canyon", "You conquer Angel's Landing.")
            .with_choice(
                Choice::new("Fly to Barcelona", "barcelona")
                    .with_waypoint(Waypoint::new("Barcelona, Spain", 41.3874, 2.1686))
                    .with_detail("Tapas and Gaudí architecture feel like a dream."),
            )
            .with_choice(Choice::new("Sit with the view a while longer", "zion"))
    }

    #[test]
    fn test_describe_numbers_from_one() {
        let text = sample_node().describe();

        assert!(text.starts_with("=== Zion Canyon ===\nYou conquer Angel's Landing.\n"));
        assert!(text.contains(
            "  1. Fly to Barcelona — Tapas and Gaudí architecture feel like a dream."
        ));
        assert!(text.ends_with("  2. Sit with the view a while longer"));
    }

    #[test]
    fn test_choice_lookup() {
        let node = sample_node();

        assert_eq!(node.choice(0).unwrap().target, "barcelona");
        assert!(node.choice(0).unwrap().waypoint.is_some());
        assert!(node.choice(1).unwrap().waypoint.is_none());
        assert!(node.choice(2).is_none());
        assert!(!node.is_terminal());
    }

    #[test]
    fn test_terminal_node() {
        let node = StoryNode::new("home", "Home", "You unpack for good.");
        assert!(node.is_terminal());
        assert_eq!(node.describe(), "=== Home ===\nYou unpack for good.\n");
    }

    #[test]
    fn test_choice_deserializes_without_optional_fields() {
        let choice: Choice = toml::from_str(
            r#"
prompt = "Wander the old town"
target = "prague"
"#,
        )
        .unwrap();

        assert_eq!(choice.target, "prague");
        assert!(choice.waypoint.is_none());
        assert!(choice.detail.is_empty());
    }
}
