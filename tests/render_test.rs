//! Tests for Renderer

use std::io::{self, Write};

use rstest::rstest;

use cloud_discovery::application::services::Renderer;
use cloud_discovery::application::ApplicationError;
use cloud_discovery::domain::{DomainError, OutputFormat, ResourceList};

fn names(items: &[&str]) -> ResourceList {
    items.iter().map(|s| s.to_string()).collect()
}

/// Writer that fails every write
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_two_load_balancers_when_rendering_json_then_writes_envelope_line() {
    // Arrange
    let renderer = Renderer::new(OutputFormat::Json, "");
    let mut out = Vec::new();

    // Act
    renderer.render(&names(&["lb-a", "lb-b"]), &mut out).unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "{\"data\":[\"lb-a\",\"lb-b\"]}\n");
}

#[test]
fn given_empty_list_when_rendering_json_then_writes_empty_array() {
    let renderer = Renderer::new(OutputFormat::Json, "");
    let mut out = Vec::new();

    renderer.render(&ResourceList::default(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "{\"data\":[]}\n");
}

#[test]
fn given_n_names_when_rendering_json_then_data_has_n_strings_in_order() {
    // Arrange
    let input: Vec<String> = (0..25).map(|i| format!("lb-{:02}", 24 - i)).collect();
    let renderer = Renderer::new(OutputFormat::Json, "");
    let mut out = Vec::new();

    // Act
    renderer
        .render(&ResourceList::new(input.clone()), &mut out)
        .unwrap();

    // Assert
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let data: Vec<String> = parsed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(data, input);
}

#[test]
fn given_range_template_when_rendering_query_then_each_name_once_in_order() {
    // Arrange
    let renderer = Renderer::new(OutputFormat::Query, "{{range .}}{{.}}\n{{end}}");
    let mut out = Vec::new();

    // Act
    renderer
        .render(&names(&["lb-b", "lb-a", "lb-c"]), &mut out)
        .unwrap();

    // Assert
    assert_eq!(String::from_utf8(out).unwrap(), "lb-b\nlb-a\nlb-c\n");
}

#[test]
fn given_literal_template_when_rendering_query_then_writes_text_without_newline() {
    let renderer = Renderer::new(OutputFormat::Query, "static");
    let mut out = Vec::new();

    renderer.render(&names(&["lb-a"]), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "static");
}

#[rstest]
#[case("{{range .}}{{.}}")]
#[case("{{.")]
fn given_invalid_template_when_rendering_query_then_fails_without_output(#[case] query: &str) {
    // Arrange
    let renderer = Renderer::new(OutputFormat::Query, query);
    let mut out = Vec::new();

    // Act
    let err = renderer
        .render(&names(&["lb-a", "lb-b"]), &mut out)
        .unwrap_err();

    // Assert
    assert!(
        matches!(err, ApplicationError::Domain(DomainError::Template { .. })),
        "got: {:?}",
        err
    );
    assert!(out.is_empty(), "no partial output expected");
}

#[test]
fn given_failing_writer_when_rendering_then_returns_operation_failed() {
    let renderer = Renderer::new(OutputFormat::Json, "");

    let err = renderer
        .render(&names(&["lb-a"]), &mut BrokenPipe)
        .unwrap_err();

    assert!(matches!(err, ApplicationError::OperationFailed { .. }));
}
