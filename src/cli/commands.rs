use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{Session, SessionOptions};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{expand_path, global_config_path, Settings};
use crate::domain::{RemovalOutcome, Tree, TreeDisplay};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};
use crate::infrastructure::InfraError;

const EMPTY_TREE: &str = "Tree is empty.";

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        None => _session(&container(cli)?, cli.file.as_deref()),
        Some(Commands::Bfs { file, inline }) => _bfs(&container(cli)?, file, *inline),
        Some(Commands::Dfs { file, inline }) => _dfs(&container(cli)?, file, *inline),
        Some(Commands::Levels { file }) => _levels(&container(cli)?, file),
        Some(Commands::Tree { file }) => _tree(&container(cli)?, file),
        Some(Commands::Remove { file, values }) => _remove(&container(cli)?, file, values),
        Some(Commands::Config { command }) => _config(command),
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let mut settings = Settings::load()?;
    if cli.no_menu {
        settings.show_menu = false;
    }
    debug!("settings: {:?}", settings);
    Ok(ServiceContainer::new(settings))
}

fn load_tree(container: &ServiceContainer, file: &Path) -> CliResult<Tree> {
    Ok(container.tree_service().load(file)?)
}

fn print_values(values: &[i32], inline: bool) {
    if inline {
        output::info(&values.iter().join(", "));
    } else {
        for value in values {
            output::info(value);
        }
    }
}

#[instrument(skip(container))]
fn _session(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = match (file, &container.settings.default_input) {
        (Some(file), _) => file.to_path_buf(),
        (None, Some(default)) => default.clone(),
        (None, None) => prompt_for_input()?,
    };
    let tree = load_tree(container, &path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(tree, stdin.lock(), stdout.lock())
        .with_options(SessionOptions::from(container.settings.as_ref()));
    session.run()?;
    Ok(())
}

fn prompt_for_input() -> CliResult<PathBuf> {
    output::prompt("Specify file with integers:");
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| InfraError::io("read input file name", e))?;
    let name = line.trim();
    if read == 0 || name.is_empty() {
        return Err(CliError::Usage("no input file given".to_string()));
    }
    Ok(expand_path(name))
}

#[instrument(skip(container))]
fn _bfs(container: &ServiceContainer, file: &Path, inline: bool) -> CliResult<()> {
    let tree = load_tree(container, file)?;
    let values: Vec<i32> = tree.breadth_first().collect();
    print_values(&values, inline);
    Ok(())
}

#[instrument(skip(container))]
fn _dfs(container: &ServiceContainer, file: &Path, inline: bool) -> CliResult<()> {
    let tree = load_tree(container, file)?;
    print_values(&tree.depth_first(), inline);
    Ok(())
}

#[instrument(skip(container))]
fn _levels(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = load_tree(container, file)?;
    for node in tree.level_order() {
        output::info(&format!("{}\t{}", node.value, node.level));
    }
    Ok(())
}

#[instrument(skip(container))]
fn _tree(container: &ServiceContainer, file: &Path) -> CliResult<()> {
    let tree = load_tree(container, file)?;
    output::header(&format!("{} nodes, {} levels", tree.len(), tree.depth()));
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument(skip(container))]
fn _remove(container: &ServiceContainer, file: &Path, values: &[i32]) -> CliResult<()> {
    let mut tree = load_tree(container, file)?;

    for &value in values {
        match tree.remove(value) {
            RemovalOutcome::Removed(removal) => output::action(
                "Removed",
                &format!(
                    "{} at level {} ({} nodes)",
                    removal.value, removal.level, removal.released
                ),
            ),
            RemovalOutcome::NotFound => {
                output::warning(&format!("{value}: Integer not found in tree."))
            }
            RemovalOutcome::EmptyTree => output::warning(&format!("{value}: {EMPTY_TREE}")),
        }
    }

    if tree.is_empty() {
        output::info(EMPTY_TREE);
    } else {
        let remaining: Vec<i32> = tree.breadth_first().collect();
        print_values(&remaining, false);
    }
    Ok(())
}

#[instrument]
fn _config(command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load()?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this platform"),
        },
        ConfigCommands::Init { force } => {
            let path = global_config_path().ok_or_else(|| {
                CliError::Usage("no config directory available on this platform".to_string())
            })?;
            let fs = RealFileSystem;
            if fs.exists(&path) && !force {
                return Err(CliError::Usage(format!(
                    "config already exists: {} (use --force to overwrite)",
                    path.display()
                )));
            }
            fs.write(&path, &Settings::template())
                .map_err(|e| InfraError::io(format!("write {}", path.display()), e))?;
            output::action("Created", &path.display());
        }
    }
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
