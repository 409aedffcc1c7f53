//! Interactive command loop.
//!
//! Single-character commands operate on one tree until `d` (or end of input):
//! `a` removes a value and everything below it, `b` prints the breadth-first
//! order, `c` prints the depth-first order. The loop is generic over its input
//! and output so that it can be driven by a script in tests.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{parse_integer, RemovalOutcome, Tree, TreeDisplay};

const MENU: &str = "\nEnter one of the following characters to perform an operation:\n\
a: Type in an integer, and output which level of the tree the integer is in, \
then remove that integer and everything below it from the tree.\n\
b: Do a breadth-first traversal of the tree.\n\
c: Do a depth-first traversal of the tree.\n\
d: Exit.\n";

const EMPTY_TREE: &str = "Tree is empty.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Remove,
    BreadthFirst,
    DepthFirst,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "a" => Some(Command::Remove),
            "b" => Some(Command::BreadthFirst),
            "c" => Some(Command::DepthFirst),
            "d" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Display switches for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub show_menu: bool,
    pub show_headers: bool,
    pub show_tree_after_removal: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            show_menu: true,
            show_headers: true,
            show_tree_after_removal: false,
        }
    }
}

impl From<&Settings> for SessionOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            show_menu: settings.show_menu,
            show_headers: settings.show_headers,
            show_tree_after_removal: settings.show_tree_after_removal,
        }
    }
}

pub struct Session<R, W> {
    tree: Tree,
    input: R,
    output: W,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(tree: Tree, input: R, output: W) -> Self {
        Self {
            tree,
            input,
            output,
            options: SessionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    /// Hand back the tree and the output sink once the session is over.
    pub fn into_parts(self) -> (Tree, W) {
        (self.tree, self.output)
    }

    /// Run commands until `d` or end of input.
    #[instrument(level = "debug", skip(self), fields(len = self.tree.len()))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        loop {
            if self.options.show_menu {
                self.say(MENU)?;
            }
            let Some(line) = self.read_line()? else {
                debug!("end of input, leaving session");
                self.say("\nExiting...")?;
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let flow = match Command::parse(line) {
                Some(Command::Remove) => self.remove()?,
                Some(Command::BreadthFirst) => self.breadth_first()?,
                Some(Command::DepthFirst) => self.depth_first()?,
                Some(Command::Exit) => {
                    self.say("\nExiting...")?;
                    Flow::Exit
                }
                None => {
                    self.say("\nPlease choose one of the listed operations.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }

        self.say("Program successful")?;
        self.output.flush().with_terminal_context("flush output")
    }

    fn remove(&mut self) -> ApplicationResult<Flow> {
        self.say("\nWhich integer would you like to remove?")?;

        let target = loop {
            let Some(line) = self.read_line()? else {
                debug!("end of input at removal prompt, leaving session");
                self.say("\nExiting...")?;
                return Ok(Flow::Exit);
            };
            // first whitespace-separated token; the rest of the line is ignored
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match parse_integer(token) {
                Some(value) => break value,
                None => self.say("Please enter an integer.")?,
            }
        };

        match self.tree.remove(target) {
            RemovalOutcome::Removed(removal) => {
                info!(
                    "removed {} at level {} ({} nodes)",
                    removal.value, removal.level, removal.released
                );
                self.say(&format!(
                    "The node {} at level {} will be removed and everything below it.",
                    removal.value, removal.level
                ))?;
                if self.options.show_tree_after_removal {
                    let rendered = self.tree.to_tree_string().to_string();
                    self.say(rendered.trim_end())?;
                }
            }
            RemovalOutcome::NotFound => self.say("Integer not found in tree.")?,
            RemovalOutcome::EmptyTree => self.say(EMPTY_TREE)?,
        }
        Ok(Flow::Continue)
    }

    fn breadth_first(&mut self) -> ApplicationResult<Flow> {
        let values: Vec<i32> = self.tree.breadth_first().collect();
        self.print_traversal("\nBreadth-First Search:", &values)?;
        Ok(Flow::Continue)
    }

    fn depth_first(&mut self) -> ApplicationResult<Flow> {
        let values = self.tree.depth_first();
        self.print_traversal("\nDepth-First Search:", &values)?;
        Ok(Flow::Continue)
    }

    fn print_traversal(&mut self, header: &str, values: &[i32]) -> ApplicationResult<()> {
        if self.options.show_headers {
            self.say(header)?;
        }
        if self.tree.is_empty() {
            return self.say(EMPTY_TREE);
        }
        for value in values {
            self.say(&value.to_string())?;
        }
        Ok(())
    }

    fn say(&mut self, text: &str) -> ApplicationResult<()> {
        writeln!(self.output, "{text}").with_terminal_context("write output")
    }

    fn read_line(&mut self) -> ApplicationResult<Option<String>> {
        self.output.flush().with_terminal_context("flush output")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_terminal_context("read input")?;
        Ok((read > 0).then_some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::TreeBuilder;

    fn run_script(values: &[i32], script: &str, options: SessionOptions) -> (Tree, String) {
        let tree = TreeBuilder::new().build(values).unwrap();
        let mut session = Session::new(tree, Cursor::new(script.to_string()), Vec::new())
            .with_options(options);
        session.run().unwrap();
        let (tree, output) = session.into_parts();
        (tree, String::from_utf8(output).unwrap())
    }

    fn quiet() -> SessionOptions {
        SessionOptions {
            show_menu: false,
            show_headers: false,
            show_tree_after_removal: false,
        }
    }

    #[test]
    fn given_command_letters_when_parsing_then_maps_each() {
        assert_eq!(Command::parse("a"), Some(Command::Remove));
        assert_eq!(Command::parse("b"), Some(Command::BreadthFirst));
        assert_eq!(Command::parse("c"), Some(Command::DepthFirst));
        assert_eq!(Command::parse("d"), Some(Command::Exit));
        assert_eq!(Command::parse("e"), None);
        assert_eq!(Command::parse("ab"), None);
    }

    #[test]
    fn given_traversal_commands_when_running_then_prints_values_per_line() {
        let (_, out) = run_script(&[1, 2, 3, 4, 5], "b\nc\nd\n", quiet());
        assert_eq!(
            out,
            "1\n2\n3\n4\n5\n1\n2\n4\n5\n3\n\nExiting...\nProgram successful\n"
        );
    }

    #[test]
    fn given_malformed_entries_when_removing_then_reprompts_until_integer() {
        let (tree, out) = run_script(&[1, 2, 3, 4, 5], "a\nx\n1-2\n2\nd\n", quiet());
        assert_eq!(out.matches("Please enter an integer.").count(), 2);
        assert!(out.contains("The node 2 at level 1 will be removed and everything below it."));
        assert_eq!(tree.breadth_first().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn given_unknown_command_when_running_then_prints_usage_reminder() {
        let (_, out) = run_script(&[1], "z\nd\n", quiet());
        assert!(out.contains("Please choose one of the listed operations."));
    }

    #[test]
    fn given_end_of_input_when_running_then_exits_cleanly() {
        let (_, out) = run_script(&[1], "b\n", quiet());
        assert!(out.ends_with("Exiting...\nProgram successful\n"));
    }

    #[test]
    fn given_menu_enabled_when_running_then_menu_precedes_each_prompt() {
        let (_, out) = run_script(&[1], "b\nd\n", SessionOptions::default());
        assert_eq!(out.matches("d: Exit.").count(), 2);
        assert!(out.contains("Breadth-First Search:"));
    }

    #[test]
    fn given_tree_view_enabled_when_removing_then_renders_remaining_tree() {
        let options = SessionOptions {
            show_tree_after_removal: true,
            ..quiet()
        };
        let (_, out) = run_script(&[1, 2, 3], "a\n3\nd\n", options);
        assert!(out.contains("1 (level 0)"));
        assert!(!out.contains("3 (level 1)"));
    }
}
