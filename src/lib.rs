//! # depmap
//!
//! File-level dependency graph extraction for JavaScript codebases.
//!
//! depmap walks a project tree, pulls import/export facts out of every source
//! file with lexical pattern matching, and assembles a file -> imports graph.
//! The graph is served over a small HTTP API and persisted as pretty-printed
//! JSON. Code snippets can optionally be forwarded to a text-generation
//! endpoint to produce natural-language documentation.
//!
//! ## Pipeline
//!
//! Discovery ([`core::scanner`]) -> fact extraction ([`core::extractor`]) ->
//! graph assembly ([`core::graph`]), orchestrated by
//! [`core::analyzer::CodebaseAnalyzer`].
//!
//! Extraction is deliberately lexical: it recognizes the common
//! `import ... from '...'` and `export function|const|class name` forms by
//! pattern matching and never builds a syntax tree. The resulting graph
//! records *declared* imports, not resolved ones.

pub mod config;
pub mod core;
pub mod error;
pub mod llm;
pub mod server;
