use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "nomad_cities", version, about = "City directory for remote workers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web server (default).
    Serve,
    /// Fetch stock photography into the public directory.
    Images {
        #[command(subcommand)]
        task: ImageTask,
    },
}

#[derive(Debug, Subcommand)]
pub enum ImageTask {
    /// Download a photo for every city in the catalog.
    Cities {
        /// Leave photos that are already on disk alone.
        #[arg(long)]
        skip_existing: bool,
    },
    /// Download the landing page hero images.
    Hero,
    /// Replace photos for cities known to have poor first results.
    Retouch,
    /// Replace the photo for a single city.
    Fix {
        #[arg(long)]
        id: String,
        /// Search terms; defaults to "<name> <country> cityscape".
        #[arg(long)]
        query: Option<String>,
        /// Result page to take the photo from; defaults to 2.
        #[arg(long)]
        page: Option<u32>,
    },
}
