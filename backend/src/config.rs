//! Command-line and environment configuration of the console host.

use std::path::PathBuf;

use clap::Parser;

/// Serves the training management console and fronts its REST API.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Address to bind to
    #[arg(long, env = "CONSOLE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "CONSOLE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Base URL of the training REST API; `/api/*` is forwarded there
    #[arg(long, env = "CONSOLE_API_UPSTREAM", default_value = "http://127.0.0.1:3000")]
    pub api_upstream: String,

    /// Directory holding the certificate font files
    #[arg(long, env = "CONSOLE_FONTS_DIR", default_value = "./fonts")]
    pub fonts_dir: PathBuf,

    /// Font family name, e.g. `LiberationSans` for `LiberationSans-Regular.ttf`
    #[arg(long, env = "CONSOLE_FONT_FAMILY", default_value = "LiberationSans")]
    pub font_family: String,

    /// Do not open the console in a browser on startup
    #[arg(long)]
    pub no_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_a_local_api() {
        let config = Config::try_parse_from(["backend"]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
        assert_eq!(config.api_upstream, "http://127.0.0.1:3000");
        assert_eq!(config.fonts_dir, PathBuf::from("./fonts"));
        assert!(!config.no_browser);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "backend",
            "--port",
            "9000",
            "--api-upstream",
            "http://api.internal:4000/",
            "--no-browser",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.api_upstream, "http://api.internal:4000/");
        assert!(config.no_browser);
    }
}
