//! `radball validate` - one combined message per failing payload.

use serde::Serialize;

use radball_adapters::{DocumentSource, read_entity_inputs};

use crate::{
    cli::{CheckArgs, GlobalArgs},
    commands::build_validator,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct Outcome {
    index: usize,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
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

    let outcomes: Vec<Outcome> = inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let message = validator.validate(input).err().map(|e| e.to_string());
            Outcome {
                index,
                valid: message.is_none(),
                message,
            }
        })
        .collect();

    if output.is_json() {
        output.json(&outcomes)?;
    } else {
        for outcome in &outcomes {
            match &outcome.message {
                Some(message) => output.error(message)?,
                None => output.success(&format!("{} payload is valid", args.entity))?,
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.valid).count();
    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}
