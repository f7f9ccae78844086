//! The `quizscore` scoring command.

use std::io::{self, Write};

use anyhow::{Context, Result};

use quizscore_core::answers::parse_answer_set;
use quizscore_core::scorer::Scorer;

use crate::OutputFormat;

pub fn execute(user_json: &str, correct_json: &str, format: OutputFormat) -> Result<()> {
    let user = parse_answer_set(user_json);
    let correct = parse_answer_set(correct_json);

    let report = Scorer::exact().report(user.as_slice(), correct.as_slice());
    tracing::debug!("scored {}/{}", report.score, report.total);

    let output = match format {
        OutputFormat::Plain => report.score.to_string(),
        OutputFormat::Json => report.to_json().context("failed to serialize score report")?,
    };

    let mut stdout = io::stdout().lock();
    write!(stdout, "{output}").context("failed to write score")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}
