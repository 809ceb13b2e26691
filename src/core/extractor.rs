use regex::Regex;

/// Import and export facts extracted from one file's text.
///
/// Both lists keep source order and retain duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFacts {
    /// Raw module specifiers as written, e.g. `./utils/x` or `lodash`.
    /// Never resolved to filesystem paths.
    pub imports: Vec<String>,
    /// Names of symbols exported via `export function|const|class`.
    pub exports: Vec<String>,
}

/// Lexical import/export scanner for ES-module style source.
///
/// This is pattern matching over raw text, not parsing. An import-like form
/// inside a comment or string literal is extracted as if it were live code,
/// and `export default ...` / `export { x }` re-export forms are not
/// recognized. Both are accepted limitations of the lexical approach; a real
/// parser can replace this module later as long as it honors the same
/// contract.
pub struct SourceFactExtractor {
    import_re: Regex,
    export_re: Regex,
}

impl SourceFactExtractor {
    pub fn new() -> Self {
        Self {
            import_re: Regex::new(r#"import\s+(?:[\w*\s{},]+)\s+from\s+['"](.+)['"]"#)
                .expect("import pattern is valid"),
            export_re: Regex::new(r"export\s+(?:function|const|class)\s+(\w+)")
                .expect("export pattern is valid"),
        }
    }

    /// Scans `contents` and returns every import target and exported name,
    /// in order of first appearance. Pure text scan; cannot fail.
    pub fn extract(&self, contents: &str) -> SourceFacts {
        let imports = self
            .import_re
            .captures_iter(contents)
            .map(|cap| cap[1].to_string())
            .collect();

        let exports = self
            .export_re
            .captures_iter(contents)
            .map(|cap| cap[1].to_string())
            .collect();

        SourceFacts { imports, exports }
    }
}

impl Default for SourceFactExtractor {
    fn default() -> Self {
        Self::new()
    }
}
