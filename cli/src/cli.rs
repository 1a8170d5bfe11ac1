use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "podcastr",
    version,
    about = "Generate podcast episode pages and drive a playback session"
)]
pub struct Cli {
    /// YAML file with base_url, locale and revalidate_secs.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub locale: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch one episode and print its page.
    Episode {
        slug: String,

        /// Print the page props as JSON instead of HTML.
        #[arg(long)]
        json: bool,

        /// Also start playing the episode.
        #[arg(long)]
        play: bool,
    },

    /// Fetch several episodes, queue them and step through the queue.
    Queue {
        #[arg(required = true)]
        slugs: Vec<String>,

        #[arg(long, default_value_t = 0)]
        start: usize,

        #[arg(long)]
        shuffle: bool,

        #[arg(long)]
        looping: bool,

        /// How many times to skip forward. Defaults to the queue length.
        #[arg(long)]
        steps: Option<usize>,
    },
}
