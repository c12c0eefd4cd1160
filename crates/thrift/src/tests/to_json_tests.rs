use crate::commands::ToJsonCmd;
use crate::tests::utils::ScratchDir;
use crate::Cli;
use crate::CommandResult;
use clap::Parser;

const SOURCE: &str = "\
namespace java com.example
struct Point { 1: required i64 x (js.type = \"Long\"); 2: i64 y }
";

#[test]
fn converts_to_pretty_json() {
    let json = ToJsonCmd::for_test(false, false).convert(SOURCE).unwrap();
    assert!(json.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["namespace"]["java"]["serviceName"], "com.example");
    assert_eq!(value["struct"]["Point"][0]["option"], "required");
    assert_eq!(value["struct"]["Point"][1]["name"], "y");
}

#[test]
fn compact_json_is_one_line() {
    let json = ToJsonCmd::for_test(true, false).convert(SOURCE).unwrap();
    assert!(!json.contains('\n'));
}

/// Without stripping, the annotation is a syntax error.
#[test]
fn keep_annotations_reports_parse_error() {
    let message = ToJsonCmd::for_test(false, true).convert(SOURCE).unwrap_err();
    assert!(message.starts_with("error: "), "{message}");
    assert!(message.contains("--> test.thrift:2"), "{message}");
}

/// Parses `thrift <args>` and runs the resulting subcommand.
async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(std::iter::once("thrift").chain(args.iter().copied()))
        .unwrap();
    let cmd = cli.cmd.take().unwrap();
    cmd.run(cli).await
}

#[tokio::test]
async fn run_reads_file_and_succeeds() {
    let dir = ScratchDir::new("to-json-run");
    let path = dir.write("point.thrift", SOURCE);
    let path_arg = path.to_string_lossy().to_string();

    let result = run_cli(&["to-json", "--compact", &path_arg]).await;

    assert!(result.succeeded);
    assert!(result.stderr.is_none());
    assert!(result.stdout.unwrap().contains("\"Point\""));
}

#[tokio::test]
async fn run_fails_on_missing_file() {
    let result = run_cli(&["to-json", "/definitely/not/here.thrift"]).await;

    assert!(!result.succeeded);
    assert!(result.stdout.is_none());
    assert!(result.stderr.unwrap().contains("is not a file"));
}
