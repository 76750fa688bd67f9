//! Build helpers: shell completions and man pages for the `humanizer` CLI.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Project automation")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (default: all)
        #[arg(long, value_enum)]
        shell: Vec<Shell>,
    },
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    match Cli::parse().command {
        Task::Completions { out_dir, shell } => {
            let shells = if shell.is_empty() {
                Shell::value_variants().to_vec()
            } else {
                shell
            };
            completions(&out_dir, &shells)
        }
        Task::Man { out_dir } => man_pages(&out_dir),
    }
}

fn completions(out_dir: &Path, shells: &[Shell]) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut cmd = humanizer::command();
    let name = cmd.get_name().to_string();
    for &shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, &name, out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}

fn man_pages(out_dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    for (page, cmd) in man_page_commands(humanizer::command()) {
        write_man(out_dir, &page, cmd)?;
    }
    Ok(())
}

/// The root command plus one `<root>-<sub>` command per subcommand.
fn man_page_commands(cmd: clap::Command) -> Vec<(String, clap::Command)> {
    let name = cmd.get_name().to_string();
    let mut pages = vec![(name.clone(), cmd.clone())];
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        let page = format!("{name}-{}", sub.get_name());
        pages.push((page.clone(), sub.clone().name(page)));
    }
    pages
}

fn write_man(out_dir: &Path, page: &str, cmd: clap::Command) -> anyhow::Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd)
        .render(&mut buffer)
        .with_context(|| format!("failed to render {page}"))?;
    let path = out_dir.join(format!("{page}.1"));
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}
