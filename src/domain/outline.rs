//! Text outline of an interaction tree

use termtree::Tree;

use crate::domain::node::{Body, Continuation, Node};

impl Node {
    /// Render the tree below this node, e.g. for `interact outline`.
    pub fn outline(&self) -> Tree<String> {
        self.outline_as(describe(self))
    }

    fn outline_as(&self, label: String) -> Tree<String> {
        let mut tree = Tree::new(label);
        match &self.body {
            Body::Menu(options) => {
                for (idx, option) in options.iter().enumerate() {
                    let label = format!("{}. {}", idx, option.label);
                    tree.push(option.node.outline_as(label));
                }
            }
            Body::Prompt(table) => {
                for answer in &table.answers {
                    let label = format!("\"{}\"", answer.key);
                    tree.push(answer.node.outline_as(label));
                }
            }
            Body::Action { continuation, .. } => {
                tree.push(Tree::new(action_label(*continuation).to_string()));
            }
        }
        tree
    }
}

fn describe(node: &Node) -> String {
    if node.intro.is_empty() {
        "(interaction)".to_string()
    } else {
        node.intro.clone()
    }
}

fn action_label(continuation: Continuation) -> &'static str {
    match continuation {
        Continuation::Exit => "action, then exit",
        Continuation::GoBack => "action, then go back",
    }
}
