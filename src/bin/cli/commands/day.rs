use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;
use ratib_lib::schedule::DailyAssignment;

/// JSON shape shared by `day` and `upcoming`
pub fn assignment_json(assignment: &DailyAssignment) -> serde_json::Value {
    serde_json::json!({
        "date": assignment.date.to_string(),
        "morningLabel": assignment.morning_label(),
        "eveningLabel": assignment.evening_label(),
        "morningHizb": assignment.morning_hizb().map(|h| h.get()),
        "eveningHizb": assignment.evening_hizb().map(|h| h.get()),
    })
}

pub fn run(app: &App, date: Option<NaiveDate>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let assignment = app.assignment_for(date)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assignment_json(&assignment))?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::render_assignment(&assignment, use_color));
        }
    }

    Ok(())
}
