use std::collections::BTreeMap;

/// Extraction result for one discovered file.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    /// Path of the file the facts came from; unique within one run.
    pub file: String,
    /// Raw import specifiers, in order of appearance, duplicates kept.
    pub imports: Vec<String>,
    /// Exported symbol names, in order of appearance, duplicates kept.
    pub exports: Vec<String>,
}

/// Mapping from file path to the raw import specifiers it declares.
///
/// Values are unresolved: a specifier may name a package, a file outside the
/// scanned tree, or nothing that exists at all. The graph records declared
/// references, not resolved ones. Sorted keys keep the serialized form
/// stable across runs on an unchanged tree.
pub type DependencyGraph = BTreeMap<String, Vec<String>>;

pub struct GraphAssembler;

impl GraphAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Projects the records into a file -> imports mapping.
    ///
    /// Every record contributes a key, so a file with no imports maps to an
    /// empty list rather than being absent. A repeated file path keeps the
    /// last record seen. Export facts are carried by the records but do not
    /// appear in the graph.
    pub fn assemble(&self, records: &[SourceRecord]) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for record in records {
            graph.insert(record.file.clone(), record.imports.clone());
        }
        graph
    }
}

impl Default for GraphAssembler {
    fn default() -> Self {
        Self::new()
    }
}
