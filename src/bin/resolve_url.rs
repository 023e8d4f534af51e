//! Resolve URLs given on the command line and print one JSON object per line.
//!
//! Usage: `resolve_url <url>...`

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use linkshelf::{logging, url_utils, MetadataRecord, Options, ReqwestClient, Resolver};
use serde::Serialize;

/// Resolved lines carry the normalized URL; failures echo the argument.
#[derive(Serialize)]
#[serde(untagged)]
enum Output<'a> {
    Resolved {
        url: String,
        #[serde(flatten)]
        record: MetadataRecord,
    },
    Failed {
        url: &'a str,
        error: String,
    },
}

impl<'a> Output<'a> {
    fn new(url: &'a str, result: linkshelf::Result<MetadataRecord>) -> Self {
        match result {
            Ok(record) => Output::Resolved {
                url: url_utils::normalize(url),
                record,
            },
            Err(err) => Output::Failed { url, error: err.to_string() },
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init_logging();

    let urls: Vec<String> = env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("Usage: resolve_url <url>...");
        return ExitCode::from(2);
    }

    let options = Options::default();
    let client = match ReqwestClient::new(&options) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let resolver = Resolver::new(client, options);

    let mut failed = false;
    for url in &urls {
        let url = url.as_str();
        let output = Output::new(url, resolver.resolve(url).await);
        failed |= matches!(output, Output::Failed { .. });

        match serde_json::to_string(&output) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("could not serialize result for {url}: {err}"),
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
