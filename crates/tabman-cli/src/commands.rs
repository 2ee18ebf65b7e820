//! Command implementations. Each returns data; `main` does the printing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tabman_core::{ActionOutcome, ColumnRegistry, TableAction, TableState};
use tabman_ingest::{ImportOutcome, import_csv_bytes, read_import_file, write_export};
use tabman_model::{
    ColumnId, ColumnType, ImportIssue, RecordIdGenerator, SortDirection, Theme, sample_records,
};
use tabman_persist::{Preferences, load_preferences, save_preferences};
use tracing::{debug, info};

use crate::cli::{ColumnTypeArg, ExportArgs, RunArgs, ViewArgs, ViewOptions};
use crate::logging::redact_value;
use crate::render::PageView;
use crate::settings::Settings;

/// Result of a command that first imports a CSV file.
#[derive(Debug)]
pub enum CommandOutput<T> {
    Done(T),
    ImportRejected(Vec<ImportIssue>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug)]
pub struct ScriptResult {
    pub outcomes: Vec<ActionOutcome>,
    pub page: PageView,
    pub prefs_saved: bool,
}

/// Settings plus the resolved preferences path.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub settings: Settings,
    pub prefs_path: PathBuf,
}

impl AppContext {
    pub fn new(settings: Settings, prefs_override: Option<PathBuf>) -> Self {
        let prefs_path = prefs_override.unwrap_or_else(|| settings.preferences_path.clone());
        Self {
            settings,
            prefs_path,
        }
    }

    pub fn load_preferences(&self) -> Result<Preferences> {
        Ok(load_preferences(&self.prefs_path)?)
    }

    fn save(&self, state: &TableState) -> Result<()> {
        let mut prefs = Preferences::new(state.columns().columns().to_vec(), state.theme());
        save_preferences(&mut prefs, &self.prefs_path)?;
        Ok(())
    }

    /// Empty table configured from settings and saved preferences.
    pub fn new_state(&self, rows_per_page: Option<usize>) -> Result<TableState> {
        let prefs = self.load_preferences()?;
        let mut config = self.settings.table_config();
        if let Some(rows) = rows_per_page {
            config = config.with_rows_per_page(rows);
        }
        let state = TableState::new(config)
            .context("invalid table configuration")?
            .with_columns(ColumnRegistry::from_columns(prefs.columns))
            .with_theme(prefs.theme);
        Ok(state)
    }
}

/// Import `path` into `state`. Bytes that are not UTF-8 count as a parse
/// failure.
pub fn import_file(state: &mut TableState, path: &Path) -> Result<Result<usize, Vec<ImportIssue>>> {
    let bytes = read_import_file(path)?;
    let imported = match String::from_utf8(bytes) {
        Ok(text) => state.import_csv(&text),
        Err(_) => state.apply_import(ImportOutcome::parse_failure()),
    };
    Ok(imported)
}

pub fn apply_view_options(state: &mut TableState, options: &ViewOptions) -> Result<()> {
    if let Some(query) = &options.search {
        debug!(query = redact_value(query), "search");
        state.search(query.as_str());
    }
    if let Some(field) = &options.sort {
        let field = ColumnId::from_label(field)
            .with_context(|| format!("invalid sort field {field:?}"))?;
        let direction = if options.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        state.sort(field, direction);
    }
    Ok(())
}

pub fn page_view(state: &TableState) -> PageView {
    PageView {
        columns: state.columns().visible().cloned().collect(),
        rows: state.page_rows().into_iter().cloned().collect(),
        page: state.criteria().page,
        page_count: state.page_count(),
        rows_per_page: state.criteria().rows_per_page,
        total: state.view_indices().len(),
    }
}

pub fn run_view(ctx: &AppContext, args: &ViewArgs) -> Result<CommandOutput<PageView>> {
    let mut state = ctx.new_state(args.rows_per_page)?;
    match (&args.csv, args.sample) {
        (_, true) | (None, false) => state.set_records(sample_records()),
        (Some(path), false) => {
            if let Err(issues) = import_file(&mut state, path)? {
                return Ok(CommandOutput::ImportRejected(issues));
            }
        }
    }
    apply_view_options(&mut state, &args.view)?;
    state.set_page(args.page);
    Ok(CommandOutput::Done(page_view(&state)))
}

pub fn run_export(ctx: &AppContext, args: &ExportArgs) -> Result<CommandOutput<ExportSummary>> {
    let mut state = ctx.new_state(None)?;
    if let Err(issues) = import_file(&mut state, &args.csv)? {
        return Ok(CommandOutput::ImportRejected(issues));
    }
    apply_view_options(&mut state, &args.view)?;

    let csv = state.export_csv()?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&ctx.settings.export_file_name));
    write_export(&path, &csv)?;
    let rows = state.view_indices().len();
    info!(rows, "Exported to {}", path.display());
    Ok(CommandOutput::Done(ExportSummary { path, rows }))
}

/// Validate without touching any state.
pub fn run_check(path: &Path) -> Result<ImportOutcome> {
    let bytes = read_import_file(path)?;
    Ok(import_csv_bytes(&bytes, &mut RecordIdGenerator::new()))
}

pub fn read_script(path: &Path) -> Result<Vec<TableAction>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid action script {}", path.display()))
}

pub fn run_script(ctx: &AppContext, args: &RunArgs) -> Result<CommandOutput<ScriptResult>> {
    let actions = read_script(&args.script)?;
    let mut state = ctx.new_state(None)?;
    match &args.csv {
        Some(path) => {
            if let Err(issues) = import_file(&mut state, path)? {
                return Ok(CommandOutput::ImportRejected(issues));
            }
        }
        None => state.set_records(sample_records()),
    }

    let count = actions.len();
    let outcomes = state.dispatch_all(actions)?;
    info!(actions = count, "script finished");

    if args.save_prefs {
        ctx.save(&state)?;
    }
    Ok(CommandOutput::Done(ScriptResult {
        outcomes,
        page: page_view(&state),
        prefs_saved: args.save_prefs,
    }))
}

pub fn columns_list(ctx: &AppContext) -> Result<ColumnRegistry> {
    Ok(ColumnRegistry::from_columns(ctx.load_preferences()?.columns))
}

/// Add a column and save. Returns the registry and whether it changed.
pub fn columns_add(
    ctx: &AppContext,
    label: &str,
    column_type: ColumnTypeArg,
) -> Result<(ColumnRegistry, bool)> {
    let mut state = ctx.new_state(None)?;
    let added = state.add_column_from_label(label, column_type.into())?;
    if added {
        ctx.save(&state)?;
    }
    Ok((state.columns().clone(), added))
}

pub fn columns_toggle(ctx: &AppContext, id: &str) -> Result<(ColumnRegistry, bool)> {
    let id = ColumnId::new(id)?;
    let mut state = ctx.new_state(None)?;
    let changed = state.toggle_column_visibility(&id);
    if changed {
        ctx.save(&state)?;
    }
    Ok((state.columns().clone(), changed))
}

pub fn theme_show(ctx: &AppContext) -> Result<Theme> {
    Ok(ctx.load_preferences()?.theme)
}

pub fn theme_toggle(ctx: &AppContext) -> Result<Theme> {
    let mut state = ctx.new_state(None)?;
    let theme = state.toggle_theme();
    ctx.save(&state)?;
    Ok(theme)
}

impl From<ColumnTypeArg> for ColumnType {
    fn from(value: ColumnTypeArg) -> Self {
        match value {
            ColumnTypeArg::String => ColumnType::String,
            ColumnTypeArg::Number => ColumnType::Number,
            ColumnTypeArg::Email => ColumnType::Email,
        }
    }
}
