use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, date: Option<NaiveDate>, format: &OutputFormat) -> Result<()> {
    let assignment = app.assignment_for(date)?;
    let text = app.reflection(&assignment);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "date": assignment.date.to_string(),
                "morningLabel": assignment.morning_label(),
                "eveningLabel": assignment.evening_label(),
                "reflection": text,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", text),
    }

    Ok(())
}
