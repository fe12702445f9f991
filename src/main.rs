//! src/main.rs

use anyhow::Result;
use git_fixup::{
    app::{App, AppReturn, Outcome},
    config::Config,
    error::AppResult,
    event::{EventHandler, InputEvent},
    git::GitRepo,
    tui::Tui,
    ui,
};
use log::LevelFilter;
use simplelog::WriteLogger;
use std::{env, fs::File, process};

#[tokio::main]
async fn main() -> Result<()> {
    // Debug logging only when asked for; the alternate screen makes
    // stderr useless while the picker is running.
    if env::var_os("DEBUG").is_some() {
        WriteLogger::init(
            LevelFilter::Debug,
            simplelog::Config::default(),
            File::create("git-fixup.log")?,
        )?;
    }

    let repo = match GitRepo::new(".") {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("Error fetching commits: {}", err);
            process::exit(1);
        }
    };
    let commits = match repo.list_branch_commits() {
        Ok(commits) => commits,
        Err(err) => {
            eprintln!("Error fetching commits: {}", err);
            process::exit(1);
        }
    };
    log::info!(
        "{} commits on this branch in {:?}",
        commits.len(),
        repo.path()
    );

    if commits.is_empty() {
        println!("No commits found on this branch");
        return Ok(());
    }

    let config = Config::load()?;

    let mut tui = Tui::new()?;
    tui.enter()?;
    let size = tui.size()?;
    let mut app = App::new(repo, commits, size);

    let result = run(&mut tui, &mut app, &config).await;

    // The terminal is restored on every exit path before anything is
    // printed to the normal screen.
    tui.exit()?;

    if let Err(err) = result {
        eprintln!("Error running program: {}", err);
        process::exit(1);
    }

    match app.outcome() {
        Some(Outcome::Succeeded(commit)) => {
            println!("✓ Created fixup commit for: {}", commit.summary);
        }
        Some(Outcome::Failed(message)) => {
            eprintln!("Error: {}", message);
        }
        None => {}
    }
    Ok(())
}

async fn run(tui: &mut Tui, app: &mut App, config: &Config) -> AppResult<()> {
    let mut events = EventHandler::new();
    loop {
        tui.draw(|frame| ui::render(frame, app, &config.theme))?;

        match events.next().await? {
            InputEvent::Key(key) => {
                if app.handle_key_event(key) == AppReturn::Exit {
                    // One last frame so a terminal outcome replaces the
                    // list before teardown.
                    tui.draw(|frame| ui::render(frame, app, &config.theme))?;
                    break;
                }
            }
            InputEvent::Resize(width, height) => app.handle_resize(width, height),
            InputEvent::Tick => {}
        }
    }
    Ok(())
}
