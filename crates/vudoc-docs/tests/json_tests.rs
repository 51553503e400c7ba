use serde_json::Value;
use vudoc_docs::{render_json, ComponentDescriptor, ComponentExtractor};

#[test]
fn payload_wraps_the_descriptor_with_metadata() {
    let descriptor = ComponentExtractor::new()
        .extract("export default { name: 'counter', props: { count: { type: Number, default: 0 } } }")
        .expect("extraction should succeed");

    let json = render_json(&descriptor).expect("rendering should succeed");
    let value: Value = serde_json::from_str(&json).expect("payload should be valid JSON");

    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
    assert!(value["generated_at"].is_string());
    assert_eq!(value["component"]["name"], "counter");
    assert_eq!(value["component"]["props"][0]["name"], "count");
    assert_eq!(value["component"]["props"][0]["type"], "Number");
    assert_eq!(value["component"]["props"][0]["default"], 0.0);
}

#[test]
fn literal_prop_values_serialize_untagged() {
    let descriptor = ComponentExtractor::new()
        .extract("export default { props: { open: { required: true, default: null } } }")
        .expect("extraction should succeed");

    let json = render_json(&descriptor).expect("rendering should succeed");
    let value: Value = serde_json::from_str(&json).expect("payload should be valid JSON");

    assert_eq!(value["component"]["props"][0]["required"], true);
    assert_eq!(value["component"]["props"][0]["default"], Value::Null);
}

#[test]
fn descriptors_round_trip_through_serde() {
    let descriptor = ComponentExtractor::new()
        .extract(
            "export default { name: 'panel', props: ['a', b], methods: { toggle() { this.$emit('toggle') } } }",
        )
        .expect("extraction should succeed");

    let json = serde_json::to_string(&descriptor).expect("serialization should succeed");
    let restored: ComponentDescriptor =
        serde_json::from_str(&json).expect("deserialization should succeed");
    assert_eq!(descriptor, restored);
}
