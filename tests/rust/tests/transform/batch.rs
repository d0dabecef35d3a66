//! Tests for BatchBuilder over the sample catalog

use pretty_assertions::assert_eq;

use mcpseed_core::branding;
use mcpseed_core::BatchBuilder;
use tests::assertions::{assert_single_shape, assert_variables_referenced, find};
use tests::fixtures::sample_catalog;

#[test]
fn test_remote_entries_are_excluded_by_default() {
    let servers = BatchBuilder::new().build(&sample_catalog());

    let names: Vec<_> = servers.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            branding::server_name("filesystem"),
            branding::server_name("github"),
            branding::server_name("postgres"),
            branding::server_name("time"),
        ]
    );
    assert!(servers.iter().all(|s| s.remotes.is_empty()));
}

#[test]
fn test_include_remote_reaches_remote_branch() {
    let servers = BatchBuilder::new()
        .include_remote(true)
        .build(&sample_catalog());

    assert_eq!(servers.len(), 5);
    let notion = find(&servers, &branding::server_name("notion-remote"));
    assert!(notion.is_remote());
    assert_eq!(notion.remotes[0].url.as_deref(), Some("https://mcp.notion.com/mcp"));
}

#[test]
fn test_every_descriptor_is_well_formed() {
    let servers = BatchBuilder::new()
        .include_remote(true)
        .build(&sample_catalog());

    for server in &servers {
        assert_single_shape(server);
        assert_variables_referenced(server);
        assert!(server.description.chars().count() <= 100);
    }
}

#[test]
fn test_repeated_builds_are_byte_identical() {
    let catalog = sample_catalog();
    let builder = BatchBuilder::new();

    let first = mcpseed_core::encode_seed(&builder.build(&catalog)).unwrap();
    let second = mcpseed_core::encode_seed(&builder.build(&catalog)).unwrap();
    assert_eq!(first, second);
}
