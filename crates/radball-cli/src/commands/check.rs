//! `radball check` - report every violation in a payload document.

use serde::Serialize;
use tracing::info;

use radball_adapters::{DocumentSource, read_entity_inputs};
use radball_core::domain::{ValidationResult, Violation};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    commands::build_validator,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Result of one payload in the JSON report.
#[derive(Debug, Serialize)]
struct PayloadReport<'a> {
    index: usize,
    valid: bool,
    #[serde(flatten)]
    result: &'a ValidationResult,
}

pub fn execute(
    args: CheckArgs,
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let validator = build_validator(&args, global, config)?;
    let source = DocumentSource::parse(&args.input);
    let inputs = read_entity_inputs(&source, args.entity)?;

    let results: Vec<ValidationResult> = inputs.iter().map(|i| validator.check(i)).collect();
    let failed = results.iter().filter(|r| r.has_errors()).count();
    info!(entity = %args.entity, total = results.len(), failed, "Checked document");

    if output.is_json() {
        let reports: Vec<PayloadReport<'_>> = results
            .iter()
            .enumerate()
            .map(|(index, result)| PayloadReport {
                index,
                valid: result.is_valid(),
                result,
            })
            .collect();
        output.json(&reports)?;
    } else {
        let numbered = results.len() > 1;
        for (index, result) in results.iter().enumerate() {
            if numbered {
                output.header(&format!("{} #{}", args.entity, index + 1))?;
            }
            print_result(output, &args.entity.to_string(), result)?;
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

fn print_result(output: &OutputManager, entity: &str, result: &ValidationResult) -> CliResult<()> {
    for violation in result.violations() {
        output.error(&line(violation))?;
    }
    for violation in result.warning_violations() {
        output.warning(&line(violation))?;
    }

    if result.is_valid() {
        output.success(&format!("{entity} payload is valid"))?;
    }
    Ok(())
}

fn line(violation: &Violation) -> String {
    format!("{}: {}", violation.field, violation.message)
}
