use anyhow::Result;
use chrono::NaiveDate;

use crate::app::App;
use crate::OutputFormat;
use ratib_lib::schedule::Baseline;

fn print_baseline(app: &App, baseline: &Baseline, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "startDate": baseline.start_date.to_string(),
                "startHizb": baseline.start_hizb.get(),
                "dataDir": app.data_dir.to_string_lossy(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("Start date: {}", baseline.start_date);
            println!("Start hizb: {}", baseline.start_hizb);
            println!("Stored in:  {}", app.settings.settings_file().display());
        }
    }
    Ok(())
}

pub fn run_show(app: &App, format: &OutputFormat) -> Result<()> {
    print_baseline(app, &app.baseline, format)
}

pub fn run_set_hizb(app: &mut App, hizb: i64, format: &OutputFormat) -> Result<()> {
    let baseline = app.set_start_hizb(hizb)?;
    print_baseline(app, &baseline, format)
}

pub fn run_set_date(app: &mut App, date: NaiveDate, format: &OutputFormat) -> Result<()> {
    let baseline = app.set_start_date(date)?;
    print_baseline(app, &baseline, format)
}

pub fn run_reset(app: &mut App, date: Option<NaiveDate>, hizb: i64, format: &OutputFormat) -> Result<()> {
    let date = date.unwrap_or_else(App::today);
    let baseline = app.reset_baseline(date, hizb)?;
    print_baseline(app, &baseline, format)
}
