use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;
use ratib_lib::schedule::Slot;

pub fn run(
    app: &App,
    slot: Slot,
    date: Option<NaiveDate>,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let assignment = app.assignment_for(date)?;
    let reading = assignment.reading(slot);
    let content = app.reading_content(&assignment, slot);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": assignment.date.to_string(),
                "slot": slot,
                "label": reading.label(),
                "ayahs": content.ayahs,
                "error": content.error,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if let Some(error) = content.error {
                bail!("Could not load {}: {}", reading.label(), error);
            }

            println!("{}", terminal::paint(&reading.label(), Color::BOLD, use_color));
            println!("{}", terminal::paint("رواية ورش عن نافع", Color::DIM, use_color));
            println!();
            println!("{}", terminal::render_ayahs(&content.ayahs, use_color));
        }
    }

    Ok(())
}
