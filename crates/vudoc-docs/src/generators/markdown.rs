use std::fmt::Write;

use crate::model::{ComponentDescriptor, EventDescriptor, MemberDescriptor, PropDescriptor};

/// Render a component descriptor as a GitHub-flavoured Markdown fragment.
pub fn render_markdown(descriptor: &ComponentDescriptor) -> String {
    let mut output = String::new();

    if !descriptor.name.is_empty() {
        let _ = writeln!(&mut output, "## Name");
        let _ = writeln!(&mut output, "> {}", descriptor.name);
        output.push('\n');
    }

    render_props(&mut output, &descriptor.props);
    render_events(&mut output, &descriptor.events);
    render_members(&mut output, "Methods", &descriptor.methods);
    render_members(&mut output, "Computed", &descriptor.computeds);

    let _ = writeln!(&mut output, "## Components");
    if descriptor.components.is_empty() {
        let _ = writeln!(&mut output, "_None registered._");
    }
    for component in &descriptor.components {
        let _ = writeln!(&mut output, "- {component}");
    }
    output.push('\n');

    let _ = writeln!(&mut output, "## Options");
    if descriptor.options.is_empty() {
        let _ = writeln!(&mut output, "_No exported configuration object._");
    }
    for option in &descriptor.options {
        let _ = writeln!(&mut output, "- {option}");
    }

    output
}

fn render_props(buffer: &mut String, props: &[PropDescriptor]) {
    let _ = writeln!(buffer, "## Props");
    let _ = writeln!(buffer, "| Name | Type | Required | Default | Validator |");
    let _ = writeln!(buffer, "| ---- | ---- | -------- | ------- | --------- |");
    for prop in props {
        let _ = writeln!(
            buffer,
            "| {} | `{}` | `{}` | `{}` | `{}` |",
            prop.name,
            cell(prop.prop_type.as_deref()),
            cell(prop.required.as_ref().map(ToString::to_string).as_deref()),
            cell(prop.default.as_ref().map(ToString::to_string).as_deref()),
            cell(prop.validator.as_deref()),
        );
    }
    if props.is_empty() {
        let _ = writeln!(buffer, "| | | | | |");
    }
    buffer.push('\n');
}

fn render_events(buffer: &mut String, events: &[EventDescriptor]) {
    let _ = writeln!(buffer, "## Events");
    let _ = writeln!(buffer, "| Name | Data |");
    let _ = writeln!(buffer, "| ---- | ---- |");
    for event in events {
        let _ = writeln!(
            buffer,
            "| {} | `{}` |",
            event.name.as_deref().unwrap_or("(anonymous)"),
            cell(event.data.as_deref()),
        );
    }
    if events.is_empty() {
        let _ = writeln!(buffer, "| | |");
    }
    buffer.push('\n');
}

fn render_members(buffer: &mut String, title: &str, members: &[MemberDescriptor]) {
    let _ = writeln!(buffer, "## {title}");
    let _ = writeln!(buffer, "| Name | Signature |");
    let _ = writeln!(buffer, "| ---- | --------- |");
    for member in members {
        let _ = writeln!(buffer, "| {} | `{}` |", member.name, member.code);
    }
    if members.is_empty() {
        let _ = writeln!(buffer, "| | |");
    }
    buffer.push('\n');
}

fn cell(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => "-",
    }
}
