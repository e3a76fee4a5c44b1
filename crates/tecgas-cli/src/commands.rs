use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::{info, info_span};

use tecgas_core::{EditReport, GasPlan};
use tecgas_model::gas_planning_sheet;
use tecgas_persistence::{PersistenceError, load_plan, save_plan};
use tecgas_report::{ExportOptions, export_plan};

use crate::cli::{ClearArgs, ExportArgs, SetArgs, ShowArgs};
use crate::summary::{changes_table, print_plan, sections_table};

pub fn run_sections() -> Result<()> {
    println!("{}", sections_table(&gas_planning_sheet()));
    Ok(())
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let plan = match &args.plan {
        Some(path) => open_plan(path)?,
        None => GasPlan::new()?,
    };
    print_plan(plan.form());
    Ok(())
}

/// Result of `tecgas set`.
pub struct SetOutcome {
    pub plan: GasPlan,
    pub reports: Vec<EditReport>,
}

pub fn run_set(args: &SetArgs) -> Result<SetOutcome> {
    let span = info_span!("set", plan = %args.plan.display());
    let _guard = span.enter();

    let mut plan = if args.new {
        GasPlan::new()?
    } else {
        open_plan(&args.plan)?
    };

    let mut reports = Vec::with_capacity(args.assignments.len());
    for assignment in &args.assignments {
        let (field, value) = parse_assignment(assignment)?;
        let report = plan
            .edit_path(field, value)
            .with_context(|| format!("set {field}"))?;
        info!(field, value, changed = report.changed.len(), "applied edit");
        reports.push(report);
    }

    store_plan(&plan, &args.plan)?;
    if reports.iter().all(EditReport::is_unchanged) {
        println!("No fields changed");
    } else {
        println!("{}", changes_table(plan.form(), &reports));
    }
    Ok(SetOutcome { plan, reports })
}

pub fn run_clear(args: &ClearArgs) -> Result<()> {
    let mut plan = open_plan(&args.plan)?;
    plan.clear_all();
    store_plan(&plan, &args.plan)?;
    println!("Cleared {}", args.plan.display());
    Ok(())
}

pub fn run_export(args: &ExportArgs) -> Result<PathBuf> {
    let plan = open_plan(&args.plan)?;
    let title = args.title.clone().unwrap_or_else(|| default_title(&args.plan));
    let mut options = ExportOptions::default()
        .with_page_size(args.page.into())
        .with_title(title);
    if !args.no_timestamp {
        options = options.with_timestamp(Local::now().naive_local());
    }
    export_plan(plan.form(), &options, &args.output)
        .with_context(|| format!("export {}", args.output.display()))?;
    println!("Exported {}", args.output.display());
    Ok(args.output.clone())
}

/// Split `FIELD=VALUE` at the first `=`. The value may be empty.
pub fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    let (field, value) = assignment
        .split_once('=')
        .ok_or_else(|| anyhow!("expected FIELD=VALUE, got {assignment:?}"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(anyhow!("missing field name in {assignment:?}"));
    }
    Ok((field, value.trim()))
}

fn open_plan(path: &Path) -> Result<GasPlan> {
    let mut plan = GasPlan::new()?;
    load_plan(path, plan.form_mut()).map_err(describe)?;
    Ok(plan)
}

fn store_plan(plan: &GasPlan, path: &Path) -> Result<()> {
    save_plan(plan.form(), path).map_err(describe)
}

fn describe(error: PersistenceError) -> anyhow::Error {
    let message = match error.suggestion() {
        Some(hint) => format!("{} ({hint})", error.user_message()),
        None => error.user_message(),
    };
    anyhow::Error::new(error).context(message)
}

fn default_title(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| "Gas Plan".to_string(), str::to_string)
}
