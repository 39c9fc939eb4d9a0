use clap::Parser;

use crate::config::ServerConfig;

/// Serve a pre-built web player from a local directory or a storage bucket.
#[derive(Parser, Debug)]
#[command(name = "origin-server", version)]
pub struct Cli {
    /// Local build directory, or a locator such as gs://bucket/prefix
    #[arg(default_value = "./", env = "ORIGIN_BUILD_PATH")]
    pub build_path: String,

    #[arg(short, long, default_value = "8080", env = "ORIGIN_PORT")]
    pub port: u16,

    #[arg(short = 'a', long, default_value = "0.0.0.0", env = "ORIGIN_HOST")]
    pub host: String,
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            build_path: cli.build_path,
        }
    }
}
