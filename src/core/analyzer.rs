use rayon::prelude::*;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use super::extractor::SourceFactExtractor;
use super::graph::{DependencyGraph, GraphAssembler, SourceRecord};
use super::scanner::FileScanner;
use crate::config::AppConfig;
use crate::error::{AnalyzeError, Result};

/// Orchestrates one pipeline run: discovery, per-file extraction, assembly.
pub struct CodebaseAnalyzer {
    scanner: FileScanner,
    extractor: SourceFactExtractor,
    assembler: GraphAssembler,
}

impl CodebaseAnalyzer {
    pub fn new() -> Self {
        Self {
            scanner: FileScanner::new(),
            extractor: SourceFactExtractor::new(),
            assembler: GraphAssembler::new(),
        }
    }

    /// Builds the dependency graph for `config.root`, filtered to
    /// `config.extension`.
    ///
    /// File reads run in parallel; the order-preserving collect keeps record
    /// order equal to discovery order, and per-file extraction depends only
    /// on that file's content. The first read failure aborts the run.
    pub fn analyze(&self, config: &AppConfig) -> Result<DependencyGraph> {
        let start = Instant::now();

        let files = self.scanner.discover(&config.root, &config.extension)?;
        info!(
            count = files.len(),
            root = %config.root.display(),
            "discovered source files"
        );

        let records: Vec<SourceRecord> = files
            .par_iter()
            .map(|path| {
                let contents =
                    fs::read_to_string(path).map_err(|source| AnalyzeError::Extraction {
                        path: path.clone(),
                        source,
                    })?;
                let facts = self.extractor.extract(&contents);
                Ok(SourceRecord {
                    file: path.display().to_string(),
                    imports: facts.imports,
                    exports: facts.exports,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let graph = self.assembler.assemble(&records);
        info!(
            files = graph.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "assembled dependency graph"
        );

        Ok(graph)
    }

    /// Runs [`analyze`](Self::analyze) and persists the graph as
    /// pretty-printed JSON at `config.output`, overwriting any previous
    /// artifact. The output directory must already exist; a failed write
    /// surfaces as [`AnalyzeError::GraphWrite`].
    pub fn analyze_and_persist(&self, config: &AppConfig) -> Result<DependencyGraph> {
        let graph = self.analyze(config)?;
        write_graph(&graph, &config.output)?;
        Ok(graph)
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the graph as human-readable JSON. Overwrites; never creates
/// missing parent directories.
pub fn write_graph(graph: &DependencyGraph, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(graph)?;
    fs::write(path, json).map_err(|source| AnalyzeError::GraphWrite {
        path: path.to_path_buf(),
        source,
    })
}
