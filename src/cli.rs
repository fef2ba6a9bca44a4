//! Command-line interface for the URL and query-string codecs.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use urlcodec::{
    parse_query_string, parse_url, stringify_query, stringify_url, ParseOptions, QueryField,
    QueryInput, Scalar, UrlBuildOptions,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "urlcodec")]
#[command(about = "Parse and build URLs and query strings", long_about = None)]
pub struct Cli {
    /// Log every rejected input at debug level (overridden by RUST_LOG).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into its components and print them as JSON.
    ParseUrl {
        /// URL text; components are printed without percent-decoding.
        url: String,
    },

    /// Assemble a URL from components and print it.
    BuildUrl {
        /// Scheme including the trailing ':' (e.g. "https:").
        #[arg(long)]
        protocol: Option<String>,
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        pass: Option<String>,
        #[arg(long)]
        hostname: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        port: Option<i64>,
        #[arg(long)]
        pathname: Option<String>,
        /// Pre-encoded query text.
        #[arg(long)]
        query: Option<String>,
        /// Query field as key=value; repeat a key to build a list. Takes precedence over --query.
        #[arg(long = "param", value_name = "KEY=VALUE")]
        params: Vec<String>,
        #[arg(long)]
        hash: Option<String>,
    },

    /// Decode a query string and print the mapping as JSON.
    ParseQuery {
        /// Query text, without the leading '?'.
        query: String,
        /// Keep '+' as a literal plus instead of a space.
        #[arg(long)]
        no_plus_as_space: bool,
        /// Store every key as a list.
        #[arg(long)]
        always_array: bool,
        /// Do not force keys ending in "[]" into lists.
        #[arg(long)]
        no_array_like_as_array: bool,
        /// Trim whitespace around decoded keys and values.
        #[arg(long)]
        trim: bool,
    },

    /// Encode key=value pairs into a query string.
    StringifyQuery {
        /// Fields as key=value; repeat a key to build a list.
        #[arg(value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
}

/// Collect `key=value` arguments into a builder input, in first-seen order.
fn collect_fields(pairs: &[String]) -> Result<QueryInput> {
    let mut fields = QueryInput::new();

    for pair in pairs {
        let Some((key, value)) = pair.split_once('=') else {
            bail!("expected KEY=VALUE, got {:?}", pair);
        };

        let value = Scalar::from(value);
        match fields.get_mut(key) {
            Some(QueryField::List(values)) => values.push(value),
            Some(field) => {
                let prev = std::mem::replace(field, QueryField::List(Vec::new()));
                if let QueryField::Scalar(first) = prev {
                    *field = QueryField::List(vec![first, value]);
                }
            }
            None => {
                fields.insert(key.to_string(), QueryField::Scalar(value));
            }
        }
    }

    Ok(fields)
}

impl CliCommand {
    /// Execute the command and return what should be printed to stdout.
    pub fn run(self) -> Result<String> {
        match self {
            CliCommand::ParseUrl { url } => {
                let parts = parse_url(&url).with_context(|| format!("parsing {:?}", url))?;
                Ok(serde_json::to_string_pretty(&parts)?)
            }
            CliCommand::BuildUrl {
                protocol,
                user,
                pass,
                hostname,
                port,
                pathname,
                query,
                params,
                hash,
            } => {
                let mut opts = UrlBuildOptions {
                    protocol,
                    user,
                    pass,
                    hostname,
                    port,
                    pathname,
                    query: query.map(Into::into),
                    hash,
                };
                if !params.is_empty() {
                    opts.query = Some(collect_fields(&params)?.into());
                }

                let url = stringify_url(&opts).context("building URL")?;
                info!(%url, "built URL");
                Ok(url)
            }
            CliCommand::ParseQuery {
                query,
                no_plus_as_space,
                always_array,
                no_array_like_as_array,
                trim,
            } => {
                let opts = ParseOptions::default()
                    .with_plus_as_space(!no_plus_as_space)
                    .with_always_array(always_array)
                    .with_array_like_as_array_always(!no_array_like_as_array)
                    .with_trim(trim);

                let map = parse_query_string(&query, &opts)
                    .with_context(|| format!("decoding {:?}", query))?;
                Ok(serde_json::to_string_pretty(&map)?)
            }
            CliCommand::StringifyQuery { pairs } => Ok(stringify_query(&collect_fields(&pairs)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("urlcodec").chain(args.iter().copied()))?;
        cli.command.run()
    }

    #[test]
    fn test_collect_fields_groups_repeats() {
        let pairs: Vec<String> = vec!["a=1".into(), "b=2".into(), "a=3".into(), "a=".into()];
        let fields = collect_fields(&pairs).unwrap();

        assert_eq!(
            fields["a"],
            QueryField::List(vec!["1".into(), "3".into(), "".into()])
        );
        assert_eq!(fields["b"], QueryField::Scalar("2".into()));
        assert!(collect_fields(&["novalue".to_string()]).is_err());
    }

    #[test]
    fn test_build_url_command() {
        let out = run(&[
            "build-url",
            "--protocol",
            "https:",
            "--hostname",
            "example.com",
            "--pathname",
            "the/path/",
            "--param",
            "c=a b",
        ])
        .unwrap();
        assert_eq!(out, "https://example.com/the/path/?c=a%20b");

        assert!(run(&["build-url", "--hostname", "h", "--port", "-1"]).is_err());
        assert!(run(&["build-url"]).is_err());
    }

    #[test]
    fn test_parse_url_command_prints_json() {
        let out = run(&["parse-url", "ssh://hostname.com:1234"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(json["protocol"], "ssh:");
        assert_eq!(json["port"], 1234);
        assert_eq!(json["pathname"], "/");
        assert!(json.get("hash").is_none());
    }

    #[test]
    fn test_query_commands() {
        let out = run(&["parse-query", "a=1&a=2&b%5B%5D=x"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["a"], serde_json::json!(["1", "2"]));
        assert_eq!(json["b[]"], serde_json::json!(["x"]));

        let out = run(&["stringify-query", "a[]=1", "a[]=2"]).unwrap();
        assert_eq!(out, "a%5B%5D=1&a%5B%5D=2");
    }
}
