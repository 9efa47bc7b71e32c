//! `clipplan generate` command: compose a plan and print or export it.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use clipplan_core::{GeneratedPlan, PlanRequest, compose_plan};

/// Inputs for a single generate run.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    pub niche: String,
    pub trend: Option<String>,
    pub goal: Option<String>,
    pub tone: Option<String>,
    /// Write the plan to this file instead of stdout.
    pub output: Option<PathBuf>,
    /// Write the plan to a timestamped file in the current directory.
    pub export: bool,
    /// Print the caption and hashtags only.
    pub share: bool,
}

/// Run the generate command.
pub fn run_generate(options: &GenerateOptions) -> Result<()> {
    let request = PlanRequest::new(
        &options.niche,
        options.trend.as_deref(),
        options.goal.as_deref(),
        options.tone.as_deref(),
    )?;
    let plan = compose_plan(&request);

    if options.share {
        println!("{}", plan.share_text());
        return Ok(());
    }

    let target = match (&options.output, options.export) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(PathBuf::from(export_file_name(
            chrono::Utc::now().timestamp_millis(),
        ))),
        (None, false) => None,
    };

    match target {
        Some(path) => {
            export_plan(&plan, &path)?;
            println!("Plan written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_plan(&plan, &mut stdout)?;
        }
    }

    Ok(())
}

/// Default export file name for a plan generated at `millis` since the epoch.
pub fn export_file_name(millis: i64) -> String {
    format!("tiktok-plan-{millis}.json")
}

/// Write `plan` as indented JSON followed by a newline.
pub fn write_plan(plan: &GeneratedPlan, writer: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string_pretty(plan).context("failed to serialize plan")?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Write `plan` to `path`, replacing any existing file.
pub fn export_plan(plan: &GeneratedPlan, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("cannot create output file: {}", path.display()))?;
    write_plan(plan, &mut file)
}
