//! deeplink-router CLI.
//!
//! Resolves links against the configured origins and the default route
//! table, printing one JSON document per link.
//!
//! ```text
//! deeplink-router --web-base-url https://web.example resolve https://web.example/discover
//! deeplink-router routes
//! deeplink-router --config router.toml check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

use deeplink_router::config::{load_config, validate_config, RouterConfig};
use deeplink_router::observability::logging;
use deeplink_router::routing::table::validate_routes;
use deeplink_router::routing::{Explanation, Outcome, Router};

#[derive(Parser)]
#[command(name = "deeplink-router")]
#[command(about = "Resolve deep links into app destinations", long_about = None)]
struct Cli {
    /// TOML config file; built-in defaults when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override origins.api_base_url.
    #[arg(long)]
    api_base_url: Option<String>,

    /// Override origins.web_base_url.
    #[arg(long)]
    web_base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one or more links
    Resolve {
        #[arg(required = true)]
        urls: Vec<String>,

        /// Include the routes whose shape matched and why they failed
        #[arg(long)]
        explain: bool,
    },
    /// List the route table in match order
    Routes,
    /// Validate config and route table
    Check,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    if let Some(url) = cli.api_base_url {
        config.origins.api_base_url = url;
    }
    if let Some(url) = cli.web_base_url {
        config.origins.web_base_url = url;
    }

    if let Err(errors) = validate_config(&config) {
        for error in &errors {
            eprintln!("config error: {}", error);
        }
        return Ok(ExitCode::FAILURE);
    }

    logging::init(&config.observability)?;

    tracing::debug!(
        api_base_url = %config.origins.api_base_url,
        web_base_url = %config.origins.web_base_url,
        "Configuration loaded"
    );

    let router = Router::new(&config.origins);

    match cli.command {
        Commands::Resolve { urls, explain } => {
            for raw in &urls {
                let report = resolve(&router, raw, explain);
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Commands::Routes => {
            for (i, route) in router.routes().iter().enumerate() {
                println!("{:>2}  {:<26} {}", i, route.name, route.template);
            }
        }
        Commands::Check => {
            validate_routes(router.routes())?;
            tracing::info!(routes = router.routes().len(), "Configuration and route table are valid");
            println!("ok");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn resolve(router: &Router, raw: &str, explain: bool) -> Value {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => return json!({ "url": raw, "error": e.to_string(), "destination": null }),
    };

    let (resolution, trace) = if explain {
        let trace = router.explain(&url);
        (trace.resolution(), Some(trace))
    } else {
        (router.resolve(&url), None)
    };

    let mut report = json!({
        "url": raw,
        "route": resolution.as_ref().map(|r| r.route),
        "destination": resolution.map(|r| r.destination),
    });
    if let Some(trace) = trace {
        report["explain"] = explanation(&trace);
    }
    report
}

fn explanation(explanation: &Explanation) -> Value {
    let attempts: Vec<Value> = explanation
        .attempts
        .iter()
        .filter_map(|attempt| match &attempt.outcome {
            Outcome::ShapeMismatch => None,
            Outcome::DecodeFailed(e) => Some(json!({ "route": attempt.route, "error": e.to_string() })),
            Outcome::Matched(_) => Some(json!({ "route": attempt.route, "matched": true })),
        })
        .collect();

    json!({
        "admitted": explanation.admitted,
        "malformed": explanation.malformed,
        "attempts": attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use deeplink_router::OriginConfig;

    fn router() -> Router {
        Router::new(&OriginConfig {
            api_base_url: "https://api.web.example".into(),
            web_base_url: "https://web.example".into(),
        })
    }

    #[test]
    fn test_resolve_report() {
        let report = resolve(&router(), "https://web.example/checkouts/42/payments/new", false);
        assert_eq!(report["url"], "https://web.example/checkouts/42/payments/new");
        assert_eq!(report["route"], "payments_new");
        assert_eq!(report["destination"]["checkout"]["id"], 42);
        assert_eq!(report["destination"]["checkout"]["detail"]["payments"], "new");
        assert!(report.get("explain").is_none());
    }

    #[test]
    fn test_resolve_report_no_match() {
        let report = resolve(&router(), "https://unrelated.example/discover", false);
        assert!(report["route"].is_null());
        assert!(report["destination"].is_null());
    }

    #[test]
    fn test_resolve_report_unparseable() {
        let report = resolve(&router(), "not a url", false);
        assert!(report["error"].is_string());
        assert!(report["destination"].is_null());
    }

    #[test]
    fn test_explain_report_lists_decode_failures() {
        let report = resolve(&router(), "https://web.example/checkouts/notanumber/payments", true);
        assert!(report["destination"].is_null());

        let explain = &report["explain"];
        assert_eq!(explain["admitted"], true);
        assert_eq!(explain["malformed"], false);
        let attempts = explain["attempts"].as_array().unwrap();
        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0]["route"], "payments_root");
        assert!(attempts[0]["error"].as_str().unwrap().contains("checkout_param"));
    }

    #[test]
    fn test_explain_report_marks_match() {
        let report = resolve(&router(), "https://web.example/authorize", true);
        assert_eq!(report["route"], "authorize");
        assert_eq!(report["destination"]["tab"], "login");
        assert_eq!(report["explain"]["attempts"], json!([{ "route": "authorize", "matched": true }]));
    }

    #[test]
    fn test_explain_report_malformed() {
        let report = resolve(&router(), "https://web.example/projects/abc/%FF", true);
        assert!(report["destination"].is_null());
        assert_eq!(report["explain"]["malformed"], true);
    }
}
