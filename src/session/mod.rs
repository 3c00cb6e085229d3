//! A playground session: a set of named trees, one of which may be selected, driven by
//! line-oriented commands.
//!
//! [`Session::execute`] parses a line, runs it against the selected tree and returns a [`Reply`]
//! holding plain data. Turning replies into text is left to [`render::Renderer`].
//!
//! # Examples
//!
//! ```
//! use bst::config::Settings;
//! use bst::session::{Reply, Session};
//!
//! let mut session: Session<i64> = Session::new(&Settings::default());
//!
//! session.execute("create oak").unwrap();
//! session.execute("insert 5 1").unwrap();
//! session.execute("insert 5 1").unwrap();
//!
//! match session.execute("count 5").unwrap() {
//!     Reply::Count { occurrences, .. } => assert_eq!(occurrences.count, 2),
//!     other => panic!("unexpected reply {other:?}"),
//! }
//! ```

mod command;
mod history;
pub mod render;
pub mod repl;

use std::collections::BTreeMap;

use tracing::debug;

pub use self::command::Command;
pub use self::history::History;

use crate::config::Settings;
use crate::element::Element;
use crate::error::SessionError;
use crate::tree::{DepthRange, Occurrences, Order, Tree};

/// A tree together with its name and the operations run on it.
#[derive(Debug)]
pub struct NamedTree<T> {
    name: String,
    tree: Tree<T>,
    history: History,
}

impl<T> NamedTree<T> {
    fn new(name: String, history_capacity: usize) -> Self {
        Self {
            name,
            tree: Tree::new(),
            history: History::new(history_capacity),
        }
    }

    /// The tree's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tree itself.
    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    /// Operations recorded against this tree.
    pub fn history(&self) -> &History {
        &self.history
    }
}

/// One row of the `list` reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Tree name.
    pub name: String,
    /// Whether this is the selected tree.
    pub current: bool,
    /// Number of nodes.
    pub len: usize,
}

/// Summary shown by `stats`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stats<T> {
    /// Value at the root.
    pub root: T,
    /// Number of nodes.
    pub len: usize,
    /// Height of the tree in edges.
    pub height: usize,
    /// Depths of the shallowest and deepest leaves.
    pub leaves: DepthRange,
    /// Smallest value.
    pub min: T,
    /// Largest value.
    pub max: T,
}

/// The outcome of a successfully executed line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    /// The line was blank.
    Idle,
    /// A tree was created and selected.
    Created {
        /// Name of the new tree.
        name: String,
    },
    /// A tree was selected.
    Using {
        /// Name of the selected tree.
        name: String,
    },
    /// A tree was removed.
    Removed {
        /// Name of the removed tree.
        name: String,
    },
    /// A value was offered to the tree.
    Inserted {
        /// The value.
        value: T,
        /// `false` when the value was already present and duplicates were rejected.
        added: bool,
    },
    /// Result of `search`.
    Search {
        /// The value looked for.
        value: T,
        /// Whether it is in the tree.
        found: bool,
    },
    /// Result of `inorder` or `preorder`.
    Traversal {
        /// Which traversal ran.
        order: Order,
        /// Values in visiting order.
        values: Vec<T>,
    },
    /// Result of `count`.
    Count {
        /// The value counted.
        value: T,
        /// How many nodes hold it and where.
        occurrences: Occurrences,
    },
    /// Result of `path`.
    Path {
        /// The value looked for.
        value: T,
        /// Root-to-match values and the depths of all matches, `None` when not found.
        found: Option<(Vec<T>, DepthRange)>,
    },
    /// Rows for `print`, as `(depth, value)` in sideways order.
    Structure(Vec<(usize, T)>),
    /// Leaf depths of the whole tree for `levels`, `None` for an empty tree.
    Levels(Option<DepthRange>),
    /// Height below a value for `levels <value>`.
    SubtreeHeight {
        /// The subtree's root value.
        value: T,
        /// Its height, `None` when the value is absent.
        height: Option<usize>,
    },
    /// The selected tree was cleared.
    Cleared,
    /// Node count of the selected tree.
    Size(usize),
    /// Whether the selected tree is empty.
    Empty(bool),
    /// Every tree, sorted by name.
    List(Vec<Listing>),
    /// Statistics of the selected tree, `None` when it is empty.
    Stats(Option<Stats<T>>),
    /// The session's command history.
    History {
        /// The history's capacity.
        capacity: usize,
        /// Commands from oldest to newest.
        entries: Vec<String>,
    },
    /// The selected tree's operation history.
    TreeHistory {
        /// Tree name.
        name: String,
        /// Operations from oldest to newest.
        entries: Vec<String>,
    },
    /// Colored output was toggled to this state.
    Colors(bool),
    /// The command reference was requested.
    Help,
    /// The session should end.
    Exit,
}

/// Named trees of one element type plus the selection and command history.
#[derive(Debug)]
pub struct Session<T> {
    trees: BTreeMap<String, NamedTree<T>>,
    current: Option<String>,
    created: usize,
    history: History,
    history_capacity: usize,
    colors: bool,
}

impl<T> Session<T>
where
    T: Element,
{
    /// A session with no trees.
    pub fn new(settings: &Settings) -> Self {
        Self {
            trees: BTreeMap::new(),
            current: None,
            created: 0,
            history: History::new(settings.history_capacity),
            history_capacity: settings.history_capacity,
            colors: settings.colors,
        }
    }

    /// Name of the selected tree.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Looks up a tree by name.
    pub fn tree(&self, name: &str) -> Option<&NamedTree<T>> {
        self.trees.get(name)
    }

    /// Lines entered so far, including ones that failed.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether replies should be colored.
    pub fn colors(&self) -> bool {
        self.colors
    }

    /// Records and runs one input line. Blank lines are ignored and not recorded.
    pub fn execute(&mut self, line: &str) -> Result<Reply<T>, SessionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Idle);
        }

        self.history.push(line);
        let command = Command::parse(line)?;
        debug!(?command, current = ?self.current, "executing");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command<T>) -> Result<Reply<T>, SessionError> {
        let reply = match command {
            Command::Create(name) => self.create(name)?,
            Command::Use(name) => {
                if !self.trees.contains_key(&name) {
                    return Err(SessionError::TreeNotFound(name));
                }
                self.current = Some(name.clone());
                Reply::Using { name }
            }
            Command::Remove(name) => {
                if self.trees.remove(&name).is_none() {
                    return Err(SessionError::TreeNotFound(name));
                }
                if self.current.as_deref() == Some(name.as_str()) {
                    self.current = None;
                }
                debug!(%name, "tree removed");
                Reply::Removed { name }
            }
            Command::Insert(value, duplicates) => {
                let selected = self.selected_mut()?;
                let added = selected.tree.insert(value.clone(), duplicates);
                selected.history.push(format!("insert {value}"));
                Reply::Inserted { value, added }
            }
            Command::Search(value) => {
                let selected = self.selected_mut()?;
                let found = selected.tree.contains(&value);
                let outcome = if found { "found" } else { "not found" };
                selected.history.push(format!("search {value} -> {outcome}"));
                Reply::Search { value, found }
            }
            Command::Count(value) => {
                let selected = self.selected_mut()?;
                let occurrences = selected.tree.count(&value);
                selected
                    .history
                    .push(format!("count {value} -> {}", occurrences.count));
                Reply::Count { value, occurrences }
            }
            Command::Path(value) => {
                let selected = self.selected_mut()?;
                let found = selected
                    .tree
                    .path(&value)
                    .map(|path| (path.values.into_iter().cloned().collect(), path.depths));
                selected.history.push(format!("path {value}"));
                Reply::Path { value, found }
            }
            Command::Traverse(order) => {
                let selected = self.selected_mut()?;
                let values = selected.tree.traverse(order).into_iter().cloned().collect();
                selected.history.push(match order {
                    Order::InOrder => "inorder",
                    Order::PreOrder => "preorder",
                });
                Reply::Traversal { order, values }
            }
            Command::Print => {
                let selected = self.selected_mut()?;
                let rows = selected
                    .tree
                    .sideways()
                    .into_iter()
                    .map(|row| (row.depth, row.value.clone()))
                    .collect();
                selected.history.push("print");
                Reply::Structure(rows)
            }
            Command::Levels(None) => {
                let selected = self.selected_mut()?;
                let levels = selected.tree.leaf_depths();
                selected.history.push("levels");
                Reply::Levels(levels)
            }
            Command::Levels(Some(value)) => {
                let selected = self.selected_mut()?;
                let height = selected.tree.subtree_height(&value);
                selected.history.push(format!("levels {value}"));
                Reply::SubtreeHeight { value, height }
            }
            Command::Clear => {
                let selected = self.selected_mut()?;
                selected.tree.clear();
                selected.history.push("clear");
                Reply::Cleared
            }
            Command::Size => Reply::Size(self.selected()?.tree.len()),
            Command::Empty => Reply::Empty(self.selected()?.tree.is_empty()),
            Command::List => Reply::List(
                self.trees
                    .values()
                    .map(|t| Listing {
                        name: t.name.clone(),
                        current: self.current.as_deref() == Some(t.name.as_str()),
                        len: t.tree.len(),
                    })
                    .collect(),
            ),
            Command::Stats => Reply::Stats(stats(&self.selected()?.tree)),
            Command::History => Reply::History {
                capacity: self.history.capacity(),
                entries: self.history.iter().map(str::to_string).collect(),
            },
            Command::TreeHistory => {
                let selected = self.selected()?;
                Reply::TreeHistory {
                    name: selected.name.clone(),
                    entries: selected.history.iter().map(str::to_string).collect(),
                }
            }
            Command::Colors => {
                self.colors = !self.colors;
                Reply::Colors(self.colors)
            }
            Command::Help => Reply::Help,
            Command::Exit => Reply::Exit,
        };
        Ok(reply)
    }

    fn create(&mut self, name: Option<String>) -> Result<Reply<T>, SessionError> {
        let name = match name {
            Some(name) => name,
            None => self.generate_name(),
        };
        if self.trees.contains_key(&name) {
            return Err(SessionError::TreeExists(name));
        }

        self.trees.insert(
            name.clone(),
            NamedTree::new(name.clone(), self.history_capacity),
        );
        self.current = Some(name.clone());
        debug!(%name, "tree created");
        Ok(Reply::Created { name })
    }

    /// Picks the first unused `tree_<n>` name.
    fn generate_name(&mut self) -> String {
        loop {
            self.created += 1;
            let name = format!("tree_{}", self.created);
            if !self.trees.contains_key(&name) {
                return name;
            }
        }
    }

    fn selected(&self) -> Result<&NamedTree<T>, SessionError> {
        self.current
            .as_ref()
            .and_then(|name| self.trees.get(name))
            .ok_or(SessionError::NoTreeSelected)
    }

    fn selected_mut(&mut self) -> Result<&mut NamedTree<T>, SessionError> {
        self.current
            .as_ref()
            .and_then(|name| self.trees.get_mut(name))
            .ok_or(SessionError::NoTreeSelected)
    }
}

fn stats<T: Clone>(tree: &Tree<T>) -> Option<Stats<T>> {
    Some(Stats {
        root: tree.root()?.clone(),
        len: tree.len(),
        height: tree.height()?,
        leaves: tree.leaf_depths()?,
        min: tree.min()?.clone(),
        max: tree.max()?.clone(),
    })
}
