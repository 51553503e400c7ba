use std::fs;
use std::path::Path;

use tempfile::tempdir;
use vudoc_docs::DocsPipeline;

#[test]
fn documents_a_vue_file_and_caches_the_fragment() {
    let dir = tempdir().expect("tempdir should be created");
    let path = dir.path().join("counter.vue");
    fs::write(
        &path,
        r#"<template><button>{{ count }}</button></template>
<script>
export default {
    name: 'counter',
    props: ['count'],
    methods: {
        bump() {
            this.$emit('bump', this.count + 1);
        }
    }
}
</script>
"#,
    )
    .expect("fixture should be written");

    let pipeline = DocsPipeline::new();
    let fragment = pipeline
        .document_file(&path)
        .expect("pipeline should succeed");

    assert!(fragment.contains("> counter"));
    assert!(fragment.contains("| bump | `this.count + 1` |"));
    assert_eq!(pipeline.cached(&path).as_deref(), Some(fragment.as_str()));
}

#[test]
fn setup_and_options_blocks_are_combined() {
    let pipeline = DocsPipeline::new();
    let source = r#"<script setup>
const count = ref(0)
</script>
<script>
export default { name: 'combined' }
</script>
"#;

    let fragment = pipeline
        .document_source(Path::new("combined.vue"), source)
        .expect("pipeline should succeed");
    assert!(fragment.contains("> combined"));
}

#[test]
fn the_most_recent_fragment_wins() {
    let pipeline = DocsPipeline::new();
    let path = Path::new("src/component.js");

    pipeline
        .document_source(path, "export default { name: 'one' }")
        .expect("first run should succeed");
    let second = pipeline
        .document_source(path, "export default { name: 'two' }")
        .expect("second run should succeed");

    assert_eq!(pipeline.cached(path), Some(second));
}

#[test]
fn a_scriptless_component_still_renders_a_fragment() {
    let pipeline = DocsPipeline::new();
    let fragment = pipeline
        .document_source(Path::new("empty.vue"), "<template><div /></template>")
        .expect("pipeline should succeed");

    assert!(fragment.contains("_No exported configuration object._"));
    assert!(pipeline.cached(Path::new("empty.vue")).is_some());
}

#[test]
fn parse_failures_propagate_and_leave_no_cache_entry() {
    let pipeline = DocsPipeline::new();
    let path = Path::new("broken.js");

    let result = pipeline.document_source(path, "export default {");
    assert!(result.is_err());
    assert!(pipeline.cached(path).is_none());
}
