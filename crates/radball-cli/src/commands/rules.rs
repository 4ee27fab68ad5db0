//! Implementation of the `radball rules` command.

use serde::Serialize;

use radball_core::domain::{Entity, LayeredCatalog, MessageCatalog, RULE_REGISTRY, RuleKind};

use crate::{
    cli::{GlobalArgs, ListFormat, RulesArgs},
    commands::{configured_catalog, effective_locale},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of the rule listing.
#[derive(Debug, Serialize)]
struct RuleRow<'a> {
    code: &'static str,
    entity: Entity,
    field: &'static str,
    kind: RuleKind,
    message: &'a str,
}

pub fn execute(
    args: RulesArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let locale = effective_locale(global, config);
    let catalog =
        configured_catalog(locale, config)?.unwrap_or_else(|| LayeredCatalog::new(locale));
    let rows: Vec<RuleRow<'_>> = RULE_REGISTRY
        .iter()
        .filter(|def| args.entity.is_none_or(|e| e == def.entity))
        .map(|def| RuleRow {
            code: def.code,
            entity: def.entity,
            field: def.field,
            kind: def.kind,
            message: catalog.message(def.rule),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Validation Rules:")?;
            for row in &rows {
                output.print(&format!(
                    "  {:<42} {:<20} {:<30} {}",
                    row.code, row.field, row.kind.as_str(), row.message
                ))?;
            }
        }

        // Machine formats go straight to stdout so they survive --quiet.
        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.code);
            }
        }

        ListFormat::Csv => {
            println!("code,entity,field,kind,message");
            for row in &rows {
                println!(
                    "{},{},{},{},{}",
                    row.code,
                    row.entity,
                    row.field,
                    row.kind,
                    csv_field(row.message)
                );
            }
        }
    }

    Ok(())
}

/// Quote a CSV field when it contains a separator or quote.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
