mod cli;

use anyhow::{Context, Result};
use async_std::stream::StreamExt;
use async_std::task;
use clap::Parser;
use cli::{Cli, Command};
use loader::{EpisodePage, Loader, LoaderConfig};
use state::{CurrentPlayer, PlayerState};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

// Generates episode pages and walks a playback queue from the command line.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    task::block_on(run(cli))
}

fn config(cli: &Cli) -> Result<LoaderConfig> {
    let mut config = match &cli.config {
        Some(path) => LoaderConfig::load(path)?,
        None => LoaderConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }

    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let loader = Loader::new(config(&cli)?)?;
    let (current, mut waiter) = CurrentPlayer::new();

    let watched = Arc::clone(&current);
    task::spawn(async move {
        while waiter.next().await.is_some() {
            let state = watched.get();
            debug!(
                index = state.current_index(),
                queued = state.queue().len(),
                playing = state.is_playing(),
                "player updated"
            );
        }
    });

    match cli.command {
        Command::Episode { slug, json, play } => {
            let page = EpisodePage::generate(&loader, &slug).await;

            match (&page.props, json) {
                (Ok(props), true) => println!("{}", serde_json::to_string_pretty(props)?),
                _ => print!("{}", page.render()),
            }

            if play {
                let props = page
                    .props
                    .with_context(|| format!("cannot play {}", slug))?;
                current.play(props.episode.to_episode());
                print_now_playing(&current.get());
            }
        }
        Command::Queue {
            slugs,
            start,
            shuffle,
            looping,
            steps,
        } => {
            let mut episodes = Vec::with_capacity(slugs.len());
            for slug in &slugs {
                match loader.fetch_episode(slug).await {
                    Ok(detail) => episodes.push(detail.to_episode()),
                    Err(err) => warn!(slug = slug.as_str(), %err, "skipping episode"),
                }
            }

            let steps = steps.unwrap_or(episodes.len());
            current.play_list(episodes, start)?;
            if shuffle {
                current.toggle_shuffle();
            }
            if looping {
                current.toggle_loop();
            }

            print_now_playing(&current.get());
            for _ in 0..steps {
                if !current.get().has_next() {
                    break;
                }
                current.play_next();
                print_now_playing(&current.get());
            }

            current.set_playing(false);
        }
    }

    Ok(())
}

fn print_now_playing(state: &PlayerState) {
    match state.current_episode() {
        Some(episode) => println!(
            "[{}/{}] {} - {} ({}s){}{}{}",
            state.current_index() + 1,
            state.queue().len(),
            episode.title(),
            episode.members(),
            episode.duration(),
            if state.is_playing() { "" } else { " [paused]" },
            if state.is_shuffling() { " [shuffle]" } else { "" },
            if state.is_looping() { " [loop]" } else { "" },
        ),
        None => println!("Nothing playing"),
    }
}
