use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "regsim", about = "Registration form backend & route simulator")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send registration payloads through the mock backend
    Submit {
        /// JSON payload, or `-` to read it from stdin
        #[arg(short, long, default_value = "{}")]
        data: String,

        /// Number of submissions to send
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,
    },
    /// List the declared routes
    Routes,
    /// Resolve a request path against the route table
    Resolve {
        /// Request path, e.g. /greeting
        path: String,
    },
}
