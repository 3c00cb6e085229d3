use std::str::{FromStr, SplitWhitespace};

use crate::error::CommandError;
use crate::tree::{Duplicates, Order};

/// One parsed input line. Values are already of the session's element type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<T> {
    /// `create [name]`
    Create(Option<String>),
    /// `use <name>`
    Use(String),
    /// `remove <name>`
    Remove(String),
    /// `insert <value> [0|1]`, also spelled `+`
    Insert(T, Duplicates),
    /// `search <value>`
    Search(T),
    /// `count <value>`
    Count(T),
    /// `path <value>`
    Path(T),
    /// `inorder` / `preorder`
    Traverse(Order),
    /// `print`
    Print,
    /// `levels [value]`
    Levels(Option<T>),
    /// `clear`
    Clear,
    /// `size`
    Size,
    /// `empty`
    Empty,
    /// `list`
    List,
    /// `stats`
    Stats,
    /// `history`
    History,
    /// `treehistory`
    TreeHistory,
    /// `colors`
    Colors,
    /// `help` / `?`
    Help,
    /// `exit` / `quit`
    Exit,
}

impl<T> Command<T>
where
    T: FromStr,
{
    /// Parses a non-blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::session::Command;
    /// use bst::tree::Duplicates;
    ///
    /// let command: Command<i64> = Command::parse("insert 50 1").unwrap();
    /// assert_eq!(command, Command::Insert(50, Duplicates::Admit));
    ///
    /// assert!(Command::<i64>::parse("insert fifty").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or_default();
        let mut args = Args { command: name, words };

        let command = match name {
            "create" => Self::Create(args.optional().map(str::to_string)),
            "use" => Self::Use(args.required("a tree name")?.to_string()),
            "remove" => Self::Remove(args.required("a tree name")?.to_string()),
            "insert" | "+" => {
                let value = args.value()?;
                let duplicates = args.optional().map_or(Ok(Duplicates::Reject), parse_flag)?;
                Self::Insert(value, duplicates)
            }
            "search" => Self::Search(args.value()?),
            "count" => Self::Count(args.value()?),
            "path" => Self::Path(args.value()?),
            "inorder" => Self::Traverse(Order::InOrder),
            "preorder" => Self::Traverse(Order::PreOrder),
            "print" => Self::Print,
            "levels" => Self::Levels(args.optional_value()?),
            "clear" => Self::Clear,
            "size" => Self::Size,
            "empty" => Self::Empty,
            "list" => Self::List,
            "stats" => Self::Stats,
            "history" => Self::History,
            "treehistory" => Self::TreeHistory,
            "colors" => Self::Colors,
            "help" | "?" => Self::Help,
            "exit" | "quit" => Self::Exit,
            unknown => return Err(CommandError::Unknown(unknown.to_string())),
        };

        args.finish()?;
        Ok(command)
    }
}

fn parse_flag(flag: &str) -> Result<Duplicates, CommandError> {
    match flag {
        "1" | "true" => Ok(Duplicates::Admit),
        "0" | "false" => Ok(Duplicates::Reject),
        other => Err(CommandError::InvalidFlag(other.to_string())),
    }
}

/// The words following a command name.
struct Args<'a> {
    command: &'a str,
    words: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn optional(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    fn required(&mut self, expected: &'static str) -> Result<&'a str, CommandError> {
        self.words
            .next()
            .ok_or_else(|| CommandError::MissingArgument {
                command: self.command.to_string(),
                expected,
            })
    }

    fn value<T: FromStr>(&mut self) -> Result<T, CommandError> {
        let input = self.required("a value")?;
        self.parse_value(input)
    }

    fn optional_value<T: FromStr>(&mut self) -> Result<Option<T>, CommandError> {
        self.optional()
            .map(|input| self.parse_value(input))
            .transpose()
    }

    fn parse_value<T: FromStr>(&self, input: &str) -> Result<T, CommandError> {
        input.parse().map_err(|_| CommandError::InvalidValue {
            command: self.command.to_string(),
            input: input.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.words.next() {
            Some(input) => Err(CommandError::Unexpected {
                command: self.command.to_string(),
                input: input.to_string(),
            }),
            None => Ok(()),
        }
    }
}
