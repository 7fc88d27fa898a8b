use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use git_issue_doc::cli::run_issue_doc_workflow;
use git_issue_doc::git::Git2Repository;
use git_issue_doc::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-issue-doc",
    version,
    about = "Create an issue documentation file for the current git branch"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    // Initialize git access
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let result = match run_issue_doc_workflow(&repo, &mut input, &mut output) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    output.flush().context("Failed to flush stdout")?;

    ui::display_status(&format!("Issue types: {}", result.labels.joined()));
    ui::display_success(&format!("Created {}", result.path.display()));

    Ok(())
}
