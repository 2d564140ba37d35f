/// Zip packaging of the materialized plugin tree.
pub mod archive;

/// The build pipeline orchestrator.
pub mod builder;

/// Handles argument parsing for the collaborator binary.
pub mod cli;

/// Engine configuration, constructed once and passed by reference.
pub mod config;

/// Placeholder tokens, markers and injected fragments.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Marker-based feature code injection and removal.
pub mod features;

/// Sandbox containment checks for externally influenced paths.
pub mod guard;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Declarative copy manifests.
pub mod manifest;

/// Derived naming variants and the placeholder table.
pub mod placeholders;

/// Build request types.
pub mod request;

/// Whole-content placeholder substitution.
pub mod rewrite;

/// Build request field validators.
pub mod validation;
