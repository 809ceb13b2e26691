use criterion::{black_box, criterion_group, criterion_main, Criterion};
use depmap::config::AppConfig;
use depmap::core::CodebaseAnalyzer;

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("dependency_analysis");

    // Generate a synthetic JS project with a mix of import styles
    let test_dir = std::env::temp_dir().join("depmap_bench");
    std::fs::create_dir_all(test_dir.join("lib")).unwrap();
    std::fs::create_dir_all(test_dir.join("node_modules/dep")).unwrap();

    for i in 0..50 {
        let content = format!(
            r#"import {{ helper{i} }} from './lib/helper{i}';
import fs from 'fs';
import * as path from 'path';

export function process{i}(input) {{
    return helper{i}(path.join(input)) + {i};
}}

export const LIMIT_{i} = {i};
"#
        );
        std::fs::write(test_dir.join(format!("mod_{i}.js")), content).unwrap();

        let helper = format!("export function helper{i}(x) {{ return x; }}\n");
        std::fs::write(test_dir.join(format!("lib/helper{i}.js")), helper).unwrap();
    }

    // Excluded content that the scanner has to skip over
    std::fs::write(
        test_dir.join("node_modules/dep/index.js"),
        "export const d = 1;\n",
    )
    .unwrap();

    let config = AppConfig {
        root: test_dir.clone(),
        ..AppConfig::default()
    };

    group.bench_function("analyze_100_js_files", |b| {
        b.iter(|| {
            let analyzer = CodebaseAnalyzer::new();
            let graph = analyzer.analyze(black_box(&config)).unwrap();
            black_box(graph)
        });
    });

    group.finish();
    let _ = std::fs::remove_dir_all(&test_dir);
}

criterion_group!(benches, benchmark_analysis);
criterion_main!(benches);
