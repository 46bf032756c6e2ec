//! Parameter listing command.

#![allow(clippy::print_literal)] // Table headers use literal strings intentionally

use clap::Args;
use glide_core::{GlideParams, ParamDescriptor, ParamFlags, ParameterInfo, PluginInfo};

#[derive(Args)]
pub struct ParamsArgs {
    /// Show details for one parameter (name, short name, or string ID)
    #[arg(value_name = "PARAM")]
    param: Option<String>,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let params = GlideParams::new();

    if let Some(name) = &args.param {
        let index = params
            .find_param_by_name(name)
            .ok_or_else(|| anyhow::anyhow!("Unknown parameter: {}", name))?;
        let desc = params
            .param_info(index)
            .ok_or_else(|| anyhow::anyhow!("No descriptor at index {}", index))?;
        print_details(&desc);
        return Ok(());
    }

    let title = format!("{} Parameters", PluginInfo::GLIDE.name);
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();
    println!(
        "  {:6}  {:16}  {:8}  {:20}  {:10}  {}",
        "ID", "String ID", "Name", "Range", "Default", "Unit"
    );
    println!("  {}", "-".repeat(72));

    for desc in params.descriptors() {
        println!(
            "  {:6}  {:16}  {:8}  {:20}  {:10}  {}",
            desc.id.0,
            desc.string_id,
            desc.name,
            format!("{} - {}", desc.format_value(desc.min), desc.format_value(desc.max)),
            desc.format_value(desc.default),
            unit_label(&desc)
        );
    }

    println!();
    println!("Set values with: glide process in.wav out.wav --rate 2 --depth 0.8");
    Ok(())
}

fn print_details(desc: &ParamDescriptor) {
    println!("{}", desc.name);
    println!("{}", "=".repeat(desc.name.len()));
    println!();
    println!("  ID:         {}", desc.id.0);
    println!("  String ID:  {}", desc.string_id);
    println!("  Short name: {}", desc.short_name);
    println!(
        "  Range:      {} - {}",
        desc.format_value(desc.min),
        desc.format_value(desc.max)
    );
    println!("  Default:    {}", desc.format_value(desc.default));
    println!("  Unit:       {}", unit_label(desc));
    println!("  Scale:      {:?}", desc.scale);
    println!("  Flags:      {}", flag_labels(desc.flags).join(", "));
}

fn flag_labels(flags: ParamFlags) -> Vec<&'static str> {
    let labels: Vec<&'static str> = [
        (ParamFlags::AUTOMATABLE, "automatable"),
        (ParamFlags::HIDDEN, "hidden"),
        (ParamFlags::READ_ONLY, "read-only"),
    ]
    .into_iter()
    .filter(|&(flag, _)| flags.contains(flag))
    .map(|(_, label)| label)
    .collect();

    if labels.is_empty() { vec!["none"] } else { labels }
}

fn unit_label(desc: &ParamDescriptor) -> &'static str {
    match desc.unit.suffix().trim() {
        "" => "-",
        suffix => suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_labels_list_every_set_flag() {
        assert_eq!(flag_labels(ParamFlags::AUTOMATABLE), vec!["automatable"]);
        assert_eq!(
            flag_labels(ParamFlags::HIDDEN.union(ParamFlags::READ_ONLY)),
            vec!["hidden", "read-only"]
        );
        assert_eq!(flag_labels(ParamFlags::NONE), vec!["none"]);
    }
}
