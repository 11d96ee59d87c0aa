use clap::Parser;

const HOST: &str = "127.0.0.1";
const PORT: u16 = 8000;
const API_PREFIX: &str = "/api/v1";

/// Server settings, read from the command line or the environment.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct Config {
    /// The address to bind to
    #[arg(long, env = "BOOKSTORE_HOST", default_value = HOST)]
    pub host: String,

    /// The port to listen on
    #[arg(short, long, env = "BOOKSTORE_PORT", default_value_t = PORT)]
    pub port: u16,

    /// Path prefix the books resource is mounted under
    #[arg(long, env = "BOOKSTORE_API_PREFIX", default_value = API_PREFIX)]
    pub api_prefix: String,

    /// Start with an empty catalogue instead of the example books
    #[arg(long)]
    pub empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            api_prefix: API_PREFIX.to_string(),
            empty: false,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Where the books resource lives, e.g. `/api/v1/books`. The configured prefix may be given
    /// with or without its leading and trailing slashes.
    pub fn books_path(&self) -> String {
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            String::from("/books")
        } else {
            format!("/{}/books", prefix)
        }
    }
}
