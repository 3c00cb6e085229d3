//! Text for replies, errors and prompts.
//!
//! Colors come from `colored`, which also honours `NO_COLOR` and `CLICOLOR`. With colors turned
//! off in the session the output is plain text.

use std::fmt;

use colored::{Color, Colorize};

use super::{Listing, Reply, Stats};
use crate::tree::{DepthRange, Order};

const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Tree Management:",
        &[
            ("create [name]", "Create new tree (auto-name if omitted)"),
            ("use <name>", "Switch to tree"),
            ("remove <name>", "Remove tree"),
            ("list", "List all trees"),
        ],
    ),
    (
        "Tree Operations:",
        &[
            ("insert <value> [0|1]", "Insert value, 1 admits duplicates (alias: +)"),
            ("search <value>", "Search for value"),
            ("count <value>", "Count occurrences of value"),
            ("path <value>", "Show path to value"),
            ("clear", "Clear current tree"),
        ],
    ),
    (
        "Tree Analysis:",
        &[
            ("levels [value]", "Leaf levels of the tree, or height below a value"),
            ("inorder", "Inorder traversal"),
            ("preorder", "Preorder traversal"),
            ("print", "Print tree structure"),
            ("size", "Get tree size"),
            ("stats", "Show tree statistics"),
            ("empty", "Check if current tree is empty"),
        ],
    ),
    (
        "History & Settings:",
        &[
            ("history", "Show command history"),
            ("treehistory", "Show tree operation history"),
            ("colors", "Toggle color output"),
            ("help, ?", "Show this help"),
            ("exit, quit", "Exit playground"),
        ],
    ),
];

const EXAMPLES: &[(&str, &str)] = &[
    ("create mytree", "# Create tree named 'mytree'"),
    ("insert 50 1", "# Insert value 50, duplicates allowed"),
    ("stats", "# Show tree statistics"),
];

/// Formats session output, colored or not.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    colors: bool,
}

impl Renderer {
    /// A renderer that colors its output when `colors` is set.
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&self, out: &mut String, text: &str, color: Color) {
        out.push_str(&self.paint(text, color));
        out.push('\n');
    }

    /// Start-up banner.
    pub fn banner(&self) -> String {
        let title = if self.colors {
            "Binary Tree Playground".green().bold().to_string()
        } else {
            "Binary Tree Playground".to_string()
        };
        let mut out = format!("\n{title}\n");
        self.line(&mut out, "Type 'help' for commands, 'exit' to quit", Color::Cyan);
        out
    }

    /// The prompt, naming the selected tree if there is one.
    pub fn prompt(&self, current: Option<&str>) -> String {
        match current {
            Some(name) => self.paint(&format!("bt[{name}]> "), Color::Green),
            None => self.paint("bt-playground> ", Color::Yellow),
        }
    }

    /// An error line.
    pub fn error(&self, err: &impl fmt::Display) -> String {
        let mut out = String::new();
        self.line(&mut out, &format!("Error: {err}"), Color::Red);
        out
    }

    /// Everything printed for a reply, newline terminated. Empty for [`Reply::Idle`].
    pub fn reply<T: fmt::Display>(&self, reply: &Reply<T>) -> String {
        let mut out = String::new();
        match reply {
            Reply::Idle => {}
            Reply::Created { name } => {
                self.line(&mut out, &format!("✓ Created tree: '{name}'"), Color::Green);
                self.line(&mut out, &format!("Now using: {name}"), Color::Cyan);
            }
            Reply::Using { name } => {
                self.line(&mut out, &format!("✓ Now using: {name}"), Color::Green)
            }
            Reply::Removed { name } => {
                self.line(&mut out, &format!("✓ Removed: {name}"), Color::Green)
            }
            Reply::Inserted { value, added: true } => {
                self.line(&mut out, &format!("✓ Inserted: {value}"), Color::Green)
            }
            Reply::Inserted {
                value,
                added: false,
            } => self.line(
                &mut out,
                &format!("Value '{value}' is already in the tree, nothing inserted"),
                Color::Yellow,
            ),
            Reply::Search { value, found } => {
                let (verdict, color) = if *found {
                    ("FOUND", Color::Green)
                } else {
                    ("NOT FOUND", Color::Yellow)
                };
                self.line(
                    &mut out,
                    &format!("Value '{value}' was {verdict} in the tree"),
                    color,
                );
            }
            Reply::Traversal { order, values } => {
                let title = match order {
                    Order::InOrder => "Inorder traversal:",
                    Order::PreOrder => "Preorder traversal:",
                };
                self.line(&mut out, title, Color::Cyan);
                if values.is_empty() {
                    self.line(&mut out, "(empty)", Color::Yellow);
                } else {
                    out.push_str(&join(values, " "));
                    out.push('\n');
                }
            }
            Reply::Count { value, occurrences } => {
                self.line(
                    &mut out,
                    &format!(
                        "Value '{value}' appears {} time(s) in the tree",
                        occurrences.count
                    ),
                    Color::Cyan,
                );
                if let Some(depths) = occurrences.depths {
                    out.push_str(&depth_line("Depths", depths));
                }
            }
            Reply::Path { value, found } => {
                self.line(&mut out, &format!("Path to '{value}':"), Color::Cyan);
                match found {
                    Some((values, depths)) => {
                        out.push_str(&join(values, " -> "));
                        out.push('\n');
                        out.push_str(&depth_line("Depths", *depths));
                    }
                    None => self.line(&mut out, "Not found", Color::Yellow),
                }
            }
            Reply::Structure(rows) => {
                self.line(&mut out, "Tree structure:", Color::Cyan);
                if rows.is_empty() {
                    self.line(&mut out, "(empty)", Color::Yellow);
                }
                for (depth, value) in rows {
                    out.push_str(&format!("{}{value}\n", "   ".repeat(*depth)));
                }
            }
            Reply::Levels(Some(depths)) => out.push_str(&depth_line("Leaf levels", *depths)),
            Reply::Levels(None) => self.line(&mut out, "(empty)", Color::Yellow),
            Reply::SubtreeHeight {
                value,
                height: Some(height),
            } => out.push_str(&format!("Height of subtree at '{value}': {height}\n")),
            Reply::SubtreeHeight {
                value,
                height: None,
            } => self.line(
                &mut out,
                &format!("Value '{value}' not found"),
                Color::Yellow,
            ),
            Reply::Cleared => self.line(&mut out, "✓ Tree cleared", Color::Green),
            Reply::Size(len) => out.push_str(&format!("Size: {len}\n")),
            Reply::Empty(true) => self.line(&mut out, "empty", Color::Yellow),
            Reply::Empty(false) => self.line(&mut out, "not empty", Color::Green),
            Reply::List(trees) => self.list(&mut out, trees),
            Reply::Stats(Some(stats)) => self.stats(&mut out, stats),
            Reply::Stats(None) => self.line(&mut out, "Tree is empty", Color::Yellow),
            Reply::History { capacity, entries } => {
                if entries.is_empty() {
                    self.line(&mut out, "No command history!", Color::Yellow);
                } else {
                    self.line(
                        &mut out,
                        &format!("Command history (last {capacity}):"),
                        Color::Cyan,
                    );
                    numbered(&mut out, entries);
                }
            }
            Reply::TreeHistory { name, entries } => {
                if entries.is_empty() {
                    self.line(
                        &mut out,
                        "No operations performed on this tree!",
                        Color::Yellow,
                    );
                } else {
                    self.line(
                        &mut out,
                        &format!("Operation history for '{name}':"),
                        Color::Cyan,
                    );
                    numbered(&mut out, entries);
                }
            }
            Reply::Colors(on) => {
                let status = if *on { "enabled" } else { "disabled" };
                self.line(&mut out, &format!("Colors {status}"), Color::Green);
            }
            Reply::Help => out.push_str(&self.help()),
            Reply::Exit => self.line(&mut out, "Exiting Binary Tree Playground...", Color::Green),
        }
        out
    }

    fn list(&self, out: &mut String, trees: &[Listing]) {
        if trees.is_empty() {
            self.line(out, "No trees created!", Color::Yellow);
            return;
        }

        self.line(out, "Available trees:", Color::Cyan);
        for tree in trees {
            let entry = if tree.current {
                self.paint(&format!(" → {}", tree.name), Color::Green)
            } else {
                format!("   {}", tree.name)
            };
            let status = match tree.len {
                0 => "empty".to_string(),
                1 => "1 node".to_string(),
                n => format!("{n} nodes"),
            };
            out.push_str(&format!("{entry} ({status})\n"));
        }
    }

    fn stats<T: fmt::Display>(&self, out: &mut String, stats: &Stats<T>) {
        self.line(out, "=== Tree Statistics ===", Color::Cyan);
        let fields = [
            ("Root value", stats.root.to_string()),
            ("Total nodes", stats.len.to_string()),
            ("Height", stats.height.to_string()),
            (
                "Leaf levels",
                format!("min {}, max {}", stats.leaves.min, stats.leaves.max),
            ),
            ("Min value", stats.min.to_string()),
            ("Max value", stats.max.to_string()),
        ];
        for (label, value) in fields {
            out.push_str(&format!("{label}: {}\n", self.bold(&value)));
        }
    }

    /// The command reference.
    pub fn help(&self) -> String {
        let mut out = String::from("\n");
        self.line(&mut out, "=== Binary Tree Playground Commands ===", Color::Cyan);
        for (i, (section, commands)) in HELP.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&self.bold(section));
            out.push('\n');
            for (usage, about) in commands.iter() {
                out.push_str(&format!("  {usage:<24}- {about}\n"));
            }
        }

        out.push('\n');
        out.push_str(&self.bold("Examples:"));
        out.push('\n');
        for (usage, comment) in EXAMPLES {
            out.push_str(&format!(
                "  {usage:<24}{}\n",
                self.paint(comment, Color::Yellow)
            ));
        }
        out
    }
}

fn join<T: fmt::Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn depth_line(label: &str, depths: DepthRange) -> String {
    format!("{label}: min {}, max {}\n", depths.min, depths.max)
}

fn numbered(out: &mut String, entries: &[String]) {
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("  {:>2}. {entry}\n", i + 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Occurrences;

    fn plain<T: fmt::Display>(reply: Reply<T>) -> String {
        Renderer::new(false).reply(&reply)
    }

    #[test]
    fn traversals() {
        assert_eq!(
            plain(Reply::Traversal {
                order: Order::InOrder,
                values: vec![1, 2, 3],
            }),
            "Inorder traversal:\n1 2 3\n"
        );
        assert_eq!(
            plain(Reply::<i64>::Traversal {
                order: Order::PreOrder,
                values: vec![],
            }),
            "Preorder traversal:\n(empty)\n"
        );
    }

    #[test]
    fn paths() {
        assert_eq!(
            plain(Reply::Path {
                value: 3,
                found: Some((vec![5, 3], DepthRange { min: 1, max: 3 })),
            }),
            "Path to '3':\n5 -> 3\nDepths: min 1, max 3\n"
        );
        assert_eq!(
            plain(Reply::Path {
                value: 4,
                found: None
            }),
            "Path to '4':\nNot found\n"
        );
    }

    #[test]
    fn counts() {
        assert_eq!(
            plain(Reply::Count {
                value: 'x',
                occurrences: Occurrences::default(),
            }),
            "Value 'x' appears 0 time(s) in the tree\n"
        );
        assert_eq!(
            plain(Reply::Count {
                value: 'x',
                occurrences: Occurrences {
                    count: 2,
                    depths: Some(DepthRange { min: 0, max: 1 }),
                },
            }),
            "Value 'x' appears 2 time(s) in the tree\nDepths: min 0, max 1\n"
        );
    }

    #[test]
    fn structure_is_indented_by_depth() {
        assert_eq!(
            plain(Reply::Structure(vec![(1, 3), (0, 2), (1, 1)])),
            "Tree structure:\n   3\n2\n   1\n"
        );
    }

    #[test]
    fn list_marks_current() {
        let reply: Reply<i64> = Reply::List(vec![
            Listing {
                name: "ash".into(),
                current: true,
                len: 0,
            },
            Listing {
                name: "elm".into(),
                current: false,
                len: 3,
            },
        ]);

        assert_eq!(
            plain(reply),
            "Available trees:\n → ash (empty)\n   elm (3 nodes)\n"
        );
    }

    #[test]
    fn numbered_histories() {
        let reply: Reply<i64> = Reply::History {
            capacity: 20,
            entries: vec!["create".into(), "insert 5".into()],
        };

        assert_eq!(
            plain(reply),
            "Command history (last 20):\n   1. create\n   2. insert 5\n"
        );
    }

    #[test]
    fn stats_block() {
        let reply = Reply::Stats(Some(Stats {
            root: 4,
            len: 4,
            height: 2,
            leaves: DepthRange { min: 1, max: 2 },
            min: 2,
            max: 9,
        }));

        assert_eq!(
            plain(reply),
            "=== Tree Statistics ===\nRoot value: 4\nTotal nodes: 4\nHeight: 2\n\
             Leaf levels: min 1, max 2\nMin value: 2\nMax value: 9\n"
        );
    }

    #[test]
    fn prompts_and_errors() {
        let renderer = Renderer::new(false);

        assert_eq!(renderer.prompt(None), "bt-playground> ");
        assert_eq!(renderer.prompt(Some("oak")), "bt[oak]> ");
        assert_eq!(renderer.error(&"boom"), "Error: boom\n");
        assert_eq!(renderer.reply(&Reply::<i64>::Idle), "");
    }

    #[test]
    fn help_lists_every_command() {
        let help = Renderer::new(false).help();

        for command in [
            "create", "use", "remove", "list", "insert", "search", "count", "path", "clear",
            "levels", "inorder", "preorder", "print", "size", "stats", "empty", "history",
            "treehistory", "colors", "help", "exit",
        ] {
            assert!(help.contains(&format!("  {command}")), "{command}");
        }
    }
}
