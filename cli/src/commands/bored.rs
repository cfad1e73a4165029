//! Bored command implementation
//!
//! Validates the filter flags, fetches one idea and prints it.

use std::io::Write;

use bored_core::{ActivityResponse, BoredClient};

use crate::cli::args::{BoredArgs, OutputFormat};
use crate::cli::output::write_response;
use crate::error::{AppError, Result};
use crate::transport::Transport;

/// Execute the bored command
///
/// Validation happens before anything is sent, so a bad flag never reaches
/// the network. An error message from the service is printed like an idea
/// and is not a failure of the command.
pub fn run_bored<T: Transport, W: Write>(
    args: &BoredArgs,
    client: &BoredClient,
    transport: &T,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let params = args.flag_values().validate()?;

    let request = client.build_fetch_idea(&params);
    let response = transport.execute(&request)?;
    let decoded = client.parse_fetch_idea(response)?;

    match &decoded {
        ActivityResponse::Empty => return Err(AppError::NoIdea),
        ActivityResponse::Rejected(rejected) => {
            log::info!("service reported: {}", rejected.error);
        }
        ActivityResponse::Idea(idea) => {
            log::debug!("got idea {:?} ({})", idea.key, idea.kind);
        }
    }

    write_response(out, &decoded, format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use bored_core::{ApiConfig, HttpRequest, HttpResponse, ValidationError};
    use clap::Parser;

    use crate::cli::args::{Cli, Commands};
    use crate::error::TransportError;

    /// Replies with a canned response and remembers what it was asked.
    struct CannedTransport {
        status: u16,
        body: &'static str,
        seen: RefCell<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self {
                status,
                body,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for CannedTransport {
        fn execute(
            &self,
            request: &HttpRequest,
        ) -> std::result::Result<HttpResponse, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            Ok(HttpResponse {
                status: self.status,
                body: self.body.as_bytes().to_vec(),
            })
        }
    }

    const CHESS: &str = r#"{"activity":"Play chess","accessibility":0.5,"type":"recreational","participants":2,"price":0.1,"link":"","key":"abc"}"#;

    fn args(extra: &[&str]) -> BoredArgs {
        let argv = ["boredcli", "bored"].into_iter().chain(extra.iter().copied());
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Bored(args) => args,
            other => panic!("expected bored, got {other:?}"),
        }
    }

    fn client() -> BoredClient {
        BoredClient::new(ApiConfig::new("http://localhost:3000/api/activity/").unwrap())
    }

    fn run(
        extra: &[&str],
        transport: &CannedTransport,
        format: OutputFormat,
    ) -> (Result<()>, String) {
        let mut out = Vec::new();
        let result = run_bored(&args(extra), &client(), transport, format, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prints_idea() {
        let transport = CannedTransport::new(200, CHESS);
        let (result, out) = run(&[], &transport, OutputFormat::Text);
        result.unwrap();
        assert!(out.starts_with('\n'));
        assert!(out.contains("Activity      = Play chess\n"));
        assert!(!out.contains("Link"));
    }

    #[test]
    fn test_sends_validated_query() {
        let transport = CannedTransport::new(200, CHESS);
        let (result, _) = run(
            &["--type", "recreational", "--participants", "2", "--access-max", "0.6"],
            &transport,
            OutputFormat::Text,
        );
        result.unwrap();
        let seen = transport.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(
            seen[0].url.query(),
            Some("access-max=0.6&participants=2&type=recreational")
        );
    }

    #[test]
    fn test_invalid_flag_sends_nothing() {
        let transport = CannedTransport::new(200, CHESS);
        let (result, out) = run(&["--type", "sports"], &transport, OutputFormat::Text);
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::Category(ref c)) if c == "sports"
        ));
        assert_eq!(err.exit_code(), 2);
        assert!(transport.seen.borrow().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_service_error_is_printed_not_failed() {
        let transport = CannedTransport::new(
            200,
            r#"{"error":"No activities found with the specified parameters"}"#,
        );
        let (result, out) = run(&[], &transport, OutputFormat::Text);
        result.unwrap();
        assert_eq!(out, "No activities found with the specified parameters\n");
    }

    #[test]
    fn test_empty_body_reports_no_idea() {
        let transport = CannedTransport::new(200, "{}");
        let (result, out) = run(&[], &transport, OutputFormat::Text);
        assert!(matches!(result, Err(AppError::NoIdea)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_malformed_body_is_api_error() {
        let transport = CannedTransport::new(200, "<html></html>");
        let (result, _) = run(&[], &transport, OutputFormat::Text);
        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_json_format() {
        let transport = CannedTransport::new(200, CHESS);
        let (result, out) = run(&[], &transport, OutputFormat::Json);
        result.unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["key"], "abc");
    }
}
