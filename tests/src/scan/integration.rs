#![cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use nmapr_common::error::ValidationError;
use nmapr_common::scan::ScanType;
use nmapr_common::scan::output::OutputFormat;
use nmapr_core::command::{self, NMAP_BINARY};
use nmapr_core::request::{self, RawScanOptions};
use nmapr_core::runner::ProcessRunner;

/// A runner that records what it was asked to execute instead of
/// spawning anything. The pipeline only ever talks to the trait, so the
/// whole flow can be exercised without nmap installed.
struct StubRunner {
    invocations: Mutex<Vec<(String, Vec<String>)>>,
    exit_code: i32,
}

impl StubRunner {
    fn new(exit_code: i32) -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            exit_code,
        }
    }
}

#[async_trait]
impl ProcessRunner for StubRunner {
    async fn run(&self, program: &str, argv: &[String]) -> anyhow::Result<i32> {
        self.invocations
            .lock()
            .unwrap()
            .push((program.to_string(), argv.to_vec()));
        Ok(self.exit_code)
    }
}

/// This test walks the whole pipeline the way the flag path does:
/// raw options -> request builder -> command assembler -> runner.
#[tokio::test]
async fn pipeline_flags_to_invocation() {
    let raw = RawScanOptions {
        target: "https://www.example.com".to_string(),
        syn: true,
        service_detection: true,
        timing: Some(4),
        ports: Some("1-1000".to_string()),
        format: OutputFormat::Json,
        ..RawScanOptions::default()
    };

    let request = request::build(raw).expect("request should validate");
    assert_eq!(request.scan_type, ScanType::Syn);
    assert_eq!(request.target.as_str(), "example.com");

    let assembled = command::assemble(request);
    assert_eq!(
        assembled.argv,
        vec![
            "-sS",
            "-sV",
            "-T4",
            "-p",
            "1-1000",
            "-oJ",
            "example_com_scan.json",
            "example.com",
        ]
    );

    let runner = StubRunner::new(0);
    let code = runner.run(NMAP_BINARY, &assembled.argv).await.unwrap();
    assert_eq!(code, 0);

    let invocations = runner.invocations.lock().unwrap();
    assert_eq!(invocations.len(), 1);
    let (program, argv) = &invocations[0];
    assert_eq!(program, "nmap");
    // The argv reaches the runner token for token, never joined.
    assert_eq!(argv, &assembled.argv);
}

/// A wizard user can tick SYN and UDP at once; the builder must reject
/// that exactly like conflicting flags.
#[tokio::test]
async fn pipeline_rejects_conflicting_wizard_answers() {
    let raw = RawScanOptions {
        target: "example.com".to_string(),
        syn: true,
        udp: true,
        timing: Some(4),
        ports: Some("1-1000".to_string()),
        ..RawScanOptions::default()
    };

    assert_eq!(
        request::build(raw),
        Err(ValidationError::ConflictingScanType)
    );
}

/// Non-zero scanner exits pass through the runner untouched.
#[tokio::test]
async fn pipeline_reports_exit_code_as_is() {
    let raw = RawScanOptions {
        target: "example.com".to_string(),
        connect: true,
        ..RawScanOptions::default()
    };
    let assembled = command::assemble(request::build(raw).unwrap());

    let runner = StubRunner::new(1);
    let code = runner.run(NMAP_BINARY, &assembled.argv).await.unwrap();
    assert_eq!(code, 1);
}

#[tokio::test]
async fn pipeline_assembly_is_repeatable() {
    let raw = RawScanOptions {
        target: "10.0.0.0".to_string(),
        udp: true,
        skip_discovery: true,
        decoys: Some("10.0.0.7,10.0.0.8".to_string()),
        format: OutputFormat::Grepable,
        ..RawScanOptions::default()
    };

    let first = command::assemble(request::build(raw.clone()).unwrap());
    let second = command::assemble(request::build(raw).unwrap());
    assert_eq!(first, second);
    assert_eq!(first.argv.last().map(String::as_str), Some("10.0.0.0"));
}
