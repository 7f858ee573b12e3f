//! Interactive compound entry on the terminal.
//!
//! One prompt per field; a blank field leaves the element out, a blank
//! weight ends the session. Input that ends partway through a compound
//! ends the session and drops that compound.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use smelt_core::{Compound, Element};

/// Reads one trimmed line. `None` on end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

enum Answer {
    Number(f64),
    Blank,
    Closed,
}

/// Prompts until the answer is blank or a number.
fn prompt_number(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
) -> Result<Answer> {
    loop {
        write!(output, "{prompt}").context("writing prompt")?;
        output.flush().context("flushing prompt")?;
        let Some(line) = read_line(input)? else {
            return Ok(Answer::Closed);
        };
        if line.is_empty() {
            return Ok(Answer::Blank);
        }
        match line.parse::<f64>() {
            Ok(value) => return Ok(Answer::Number(value)),
            Err(_) => writeln!(output, "'{line}' is not a number, try again")
                .context("writing prompt")?,
        }
    }
}

/// Collects compounds until a blank weight or end of input.
///
/// A compound that fails validation is reported and entered again; compounds
/// already accepted are kept.
pub fn prompt_compounds(input: &mut impl BufRead, output: &mut impl Write) -> Result<Vec<Compound>> {
    let mut compounds = Vec::new();
    loop {
        let number = compounds.len() + 1;
        let weight_prompt = format!("Compound {number} Weight (blank to finish): ");
        let Answer::Number(weight) = prompt_number(input, output, &weight_prompt)? else {
            break;
        };

        let mut pairs = Vec::new();
        for element in Element::ALL {
            let prompt = format!("  {element} %: ");
            match prompt_number(input, output, &prompt)? {
                Answer::Number(value) => pairs.push((element.symbol(), value)),
                Answer::Blank => {}
                Answer::Closed => {
                    tracing::warn!(compound = number, "input ended mid-compound, discarding it");
                    writeln!(
                        output,
                        "\nInput ended before compound {number} was complete; it was discarded."
                    )
                    .context("writing prompt")?;
                    return Ok(compounds);
                }
            }
        }

        match Compound::from_symbols(Some(weight), pairs) {
            Ok(compound) => compounds.push(compound),
            Err(err) => {
                tracing::warn!(compound = number, "rejected entered compound: {err}");
                writeln!(output, "Compound {number} rejected: {err}. Enter it again.")
                    .context("writing prompt")?;
            }
        }
    }
    Ok(compounds)
}
