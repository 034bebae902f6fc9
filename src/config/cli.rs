use clap::Parser;
use std::fmt;

#[derive(Clone, Parser)]
#[command(name = "git-gateway-adapter")]
#[command(about = "Invoke the single-tenant git gateway handler locally")]
pub struct CliConfig {
    #[arg(long, default_value = "GET")]
    pub method: String,

    #[arg(long, default_value = "/health")]
    pub path: String,

    #[arg(long = "header", help = "Request header as 'Name: value' (repeatable)")]
    pub headers: Vec<String>,

    #[arg(long, help = "Request body")]
    pub body: Option<String>,

    #[arg(long, help = "Only check that the dispatch handler can be obtained")]
    pub preflight: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Splits each `--header` argument at the first colon.
    pub fn parsed_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .filter_map(|raw| {
                let (name, value) = raw.split_once(':')?;
                Some((name.trim().to_string(), value.trim().to_string()))
            })
            .collect()
    }
}

/// Header values are left out: `--header` routinely carries credentials.
impl fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<String> = self
            .parsed_headers()
            .into_iter()
            .map(|(name, _)| format!("{}: <redacted>", name))
            .collect();

        f.debug_struct("CliConfig")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &header_names)
            .field("body_len", &self.body.as_ref().map(String::len))
            .field("preflight", &self.preflight)
            .field("verbose", &self.verbose)
            .finish()
    }
}
