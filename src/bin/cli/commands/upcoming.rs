use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

use super::day::assignment_json;

pub fn run(
    app: &App,
    from: Option<NaiveDate>,
    days: usize,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let listed = app.upcoming(from, days)?;

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = listed.iter().map(assignment_json).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (i, assignment) in listed.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", terminal::render_assignment(assignment, use_color));
            }
        }
    }

    Ok(())
}
