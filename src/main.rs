mod cli;
mod config;
mod logging;

use cli::{Args, Command};
use config::{CliOverrides, ConfigFile, Settings};
use pyenv_inspector::adapters::outbound::console::StderrProgressReporter;
use pyenv_inspector::adapters::outbound::formatters::{
    EnvironmentTableFormatter, PackageTableFormatter, TreeRenderer,
};
use pyenv_inspector::adapters::outbound::pip::PipClient;
use pyenv_inspector::application::dto::{ExportFormat, IndexScope, RenderMode};
use pyenv_inspector::application::factories::{ExporterFactory, PresenterFactory, PresenterType};
use pyenv_inspector::application::use_cases::InspectEnvironmentUseCase;
use pyenv_inspector::inspection::domain::{PackageIndex, PackageRecord, TreeNode};
use pyenv_inspector::shared::error::ExitCode;
use pyenv_inspector::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

type PipUseCase = InspectEnvironmentUseCase<PipClient, PipClient, PipClient, StderrProgressReporter>;

fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let all_roots = matches!(args.command, Some(Command::Tree { all_roots: true, .. }));
    let color_by_default =
        std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();

    let settings = Settings::merge(
        CliOverrides {
            python: args.python,
            timeout_secs: args.timeout,
            all_roots,
            no_color: args.no_color,
        },
        config,
        color_by_default,
    );
    tracing::debug!(?settings, "resolved settings");

    // Create adapters (Dependency Injection)
    let pip = PipClient::new(settings.python.clone(), settings.timeout);
    let use_case = InspectEnvironmentUseCase::new(
        pip.clone(),
        pip.clone(),
        pip,
        StderrProgressReporter::new(),
    );

    match args.command {
        None => {
            let info = render_info(&use_case, RenderMode::Human)?;
            // One listing feeds both the table and the tree
            let index = use_case.load_index(IndexScope::WithDependencies)?;
            let forest = PipUseCase::forest_for(&index, settings.root_selection);
            let sections = [
                info,
                render_list(&index, RenderMode::Human)?,
                render_tree(&forest, &settings, RenderMode::Human)?,
            ];
            present_stdout(&sections.join("\n"))
        }
        Some(Command::Info { json }) => {
            present_stdout(&render_info(&use_case, RenderMode::from_json_flag(json))?)
        }
        Some(Command::List { json }) => {
            let index = use_case.load_index(IndexScope::PackagesOnly)?;
            present_stdout(&render_list(&index, RenderMode::from_json_flag(json))?)
        }
        Some(Command::Tree { json, .. }) => {
            let forest = use_case.dependency_forest(settings.root_selection)?;
            let mode = RenderMode::from_json_flag(json);
            present_stdout(&render_tree(&forest, &settings, mode)?)
        }
        Some(Command::Search { query }) => {
            let found = use_case.search(&query)?;
            if found.is_empty() {
                eprintln!("No installed package matches '{}'.", query.trim());
                return Ok(());
            }
            let refs: Vec<&PackageRecord> = found.iter().collect();
            present_stdout(&PackageTableFormatter::render(&refs, RenderMode::Human)?)
        }
        Some(Command::Export { format, output }) => export(&use_case, format, output),
    }
}

/// Loads the config from `--config`, or from the current directory if present
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

fn render_info(use_case: &PipUseCase, mode: RenderMode) -> Result<String> {
    let snapshot = use_case.environment_info()?;
    EnvironmentTableFormatter::render(&snapshot, mode)
}

fn render_list(index: &PackageIndex, mode: RenderMode) -> Result<String> {
    let packages: Vec<&PackageRecord> = index.iter().collect();
    PackageTableFormatter::render(&packages, mode)
}

fn render_tree(forest: &[TreeNode], settings: &Settings, mode: RenderMode) -> Result<String> {
    if forest.is_empty() && mode == RenderMode::Human {
        eprintln!("No packages installed.");
    }
    TreeRenderer::new(settings.colored && mode == RenderMode::Human).render(forest, mode)
}

fn export(use_case: &PipUseCase, format: ExportFormat, output: PathBuf) -> Result<()> {
    // Requirements files only pin versions, so the dependency query is skipped
    let scope = match format {
        ExportFormat::Json => IndexScope::WithDependencies,
        ExportFormat::Requirements => IndexScope::PackagesOnly,
    };
    let index = use_case.load_index(scope)?;
    let packages: Vec<&PackageRecord> = index.iter().collect();

    eprintln!("{}", ExporterFactory::progress_message(format));
    let content = ExporterFactory::create(format).export(&packages)?;

    PresenterFactory::create(PresenterType::File(output)).present(&content)
}

fn present_stdout(content: &str) -> Result<()> {
    PresenterFactory::create(PresenterType::Stdout).present(content)
}
