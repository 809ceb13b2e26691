pub mod analyzer;
pub mod extractor;
pub mod graph;
pub mod scanner;

pub use analyzer::CodebaseAnalyzer;
pub use extractor::{SourceFactExtractor, SourceFacts};
pub use graph::{DependencyGraph, GraphAssembler, SourceRecord};
pub use scanner::FileScanner;
