//! Prompt templates and response shaping for documentation generation.
//!
//! Templates use literal `{{placeholder}}` markers; substitution is plain
//! string replacement with no escaping. Response parsing is a heading scan
//! over the generated text, so a response that ignores the requested
//! structure still comes back with the full text attached.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{GenerationError, TextGenerator};

/// Prompt for documenting a single function.
pub const FUNCTION_ANALYSIS: &str = "You are a senior software architect analyzing code for documentation.

CONTEXT:
- File: {{filepath}}
- Module purpose: {{moduleRole}}
- Project purpose: {{projectPurpose}}

SOURCE CODE:
```{{language}}
{{sourceCode}}
```

DEPENDENCIES:
- Imports: {{imports}}
- Called by: {{calledBy}}
- Calls: {{calls}}

TASK:
1. Analyze what this function does at a high level
2. Identify parameters, return values, and side effects
3. Note any error handling or special cases
4. Understand how it connects to the broader system

Provide a structured documentation for this function with:
- Summary (one sentence)
- Description (2-3 sentences)
- Parameters and returns
- Examples of usage
- Dependencies and relationships";

/// Prompt for rolling function-level docs up into module documentation.
pub const MODULE_INTEGRATION: &str = "You are creating high-level documentation for related functions in a module.

You've analyzed these individual functions:
{{functionDocsList}}

They all belong to module: {{modulePath}}
Module purpose: {{moduleRole}}

Create a cohesive module-level documentation that:
1. Explains the overall purpose of this module
2. Shows how these functions work together
3. Highlights the main entry points and workflows
4. Identifies any architectural patterns used";

/// A function to document, as supplied by the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionData {
    pub name: String,
    pub source_code: String,
    pub filepath: String,
    #[serde(default)]
    pub dependencies: FunctionDependencies,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDependencies {
    #[serde(default)]
    pub imports: Vec<String>,
    #[serde(default)]
    pub called_by: Vec<String>,
    #[serde(default)]
    pub calls: Vec<String>,
}

/// Optional caller-supplied context about the surrounding project.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    #[serde(default)]
    pub module_role: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
}

/// Structured documentation for one function, split out of the generated
/// text by heading. `full_documentation` always carries the raw response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDocs {
    pub entity: String,
    pub summary: String,
    pub description: String,
    pub parameters: String,
    pub returns: String,
    pub usage: String,
    pub dependencies: String,
    pub full_documentation: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleDocs {
    pub module_path: String,
    pub documentation: String,
    pub functions: Vec<String>,
}

/// Generates documentation for one function via the injected generator.
pub async fn generate_function_docs(
    generator: &dyn TextGenerator,
    function: &FunctionData,
    context: &ProjectContext,
) -> Result<FunctionDocs, GenerationError> {
    let deps = &function.dependencies;
    let prompt = FUNCTION_ANALYSIS
        .replacen("{{filepath}}", &function.filepath, 1)
        .replacen(
            "{{moduleRole}}",
            context.module_role.as_deref().unwrap_or("Unknown"),
            1,
        )
        .replacen(
            "{{projectPurpose}}",
            context.purpose.as_deref().unwrap_or("Code analysis project"),
            1,
        )
        .replacen("{{language}}", language_from_path(&function.filepath), 1)
        .replacen("{{sourceCode}}", &function.source_code, 1)
        .replacen("{{imports}}", &format_list(&deps.imports), 1)
        .replacen("{{calledBy}}", &format_list(&deps.called_by), 1)
        .replacen("{{calls}}", &format_list(&deps.calls), 1);

    let response = generator.generate(&prompt).await?;
    Ok(parse_docs_response(&response, &function.name))
}

/// Generates module-level documentation from previously generated
/// function docs.
pub async fn generate_module_docs(
    generator: &dyn TextGenerator,
    module_path: &str,
    function_docs: &[FunctionDocs],
    context: &ProjectContext,
) -> Result<ModuleDocs, GenerationError> {
    let functions_list = function_docs
        .iter()
        .map(|doc| format!("- {}: {}", doc.entity, doc.summary))
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = MODULE_INTEGRATION
        .replacen("{{functionDocsList}}", &functions_list, 1)
        .replacen("{{modulePath}}", module_path, 1)
        .replacen(
            "{{moduleRole}}",
            context.module_role.as_deref().unwrap_or("Unknown"),
            1,
        );

    let documentation = generator.generate(&prompt).await?;
    Ok(ModuleDocs {
        module_path: module_path.to_string(),
        documentation,
        functions: function_docs.iter().map(|d| d.entity.clone()).collect(),
    })
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

fn language_from_path(filepath: &str) -> &'static str {
    let extension = Path::new(filepath)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match extension.as_str() {
        "js" => "javascript",
        "ts" => "typescript",
        "py" => "python",
        "java" => "java",
        "rb" => "ruby",
        "php" => "php",
        "go" => "go",
        _ => "plaintext",
    }
}

fn parse_docs_response(response: &str, entity: &str) -> FunctionDocs {
    // First paragraph doubles as the summary when no heading is present.
    let summary = response
        .split("\n\n")
        .next()
        .unwrap_or("")
        .replacen("Summary:", "", 1)
        .trim()
        .to_string();

    FunctionDocs {
        entity: entity.to_string(),
        summary,
        description: extract_section(response, "Description:").unwrap_or_default(),
        parameters: extract_section(response, "Parameters:").unwrap_or_default(),
        returns: extract_section(response, "Returns:").unwrap_or_default(),
        usage: extract_section(response, "Examples of usage:").unwrap_or_default(),
        dependencies: extract_section(response, "Dependencies:").unwrap_or_default(),
        full_documentation: response.to_string(),
    }
}

/// Returns the text between `title` and the next blank line followed by a
/// capitalized heading, or the end of the response. Title match is
/// ASCII-case-insensitive.
fn extract_section(text: &str, title: &str) -> Option<String> {
    let start = find_ignore_ascii_case(text, title)? + title.len();
    let rest = &text[start..];

    let end = rest
        .match_indices("\n\n")
        .find(|(idx, _)| {
            rest[idx + 2..]
                .chars()
                .next()
                .map(|c| c.is_ascii_uppercase())
                .unwrap_or(false)
        })
        .map(|(idx, _)| idx)
        .unwrap_or(rest.len());

    Some(rest[..end].trim().to_string())
}

// Needle is expected to be ASCII; the returned offset is the byte position
// of the match start, which is a char boundary because the match itself is
// ASCII.
fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle.as_bytes()))
}
