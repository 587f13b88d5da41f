//! Command handlers

use crate::cli::{Cli, Commands, ScenarioCommands};
use crate::output::{output_comparison, output_presets, output_result, output_scenarios};
use touring_app::app::TripService;
use touring_app::config::Config;
use touring_app::constants::PRESETS;
use touring_app::repository::open_state_repo;
use touring_domain::model::SaveOutcome;
use touring_infra::persistence::FileTripStateRepository;
use touring_types::{OutputFormat, Result};

type Service = TripService<FileTripStateRepository>;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    tracing::debug!(%output_format, remember = config.remember_inputs, "resolved configuration");

    match &cli.command {
        Commands::Calc { inputs, no_save } => {
            let service = Service::new(open_state_repo(&config)?);
            let (_, result) = service.calculate(&inputs.to_overrides(), !no_save)?;
            output_result(output_format, &result)
        }

        Commands::Presets => output_presets(output_format, PRESETS),

        Commands::Reset => {
            let service = Service::new(open_state_repo(&config)?);
            service.reset()?;
            println!("初期値に戻しました。");
            Ok(())
        }

        Commands::Scenario { action } => {
            let service = Service::new(open_state_repo(&config)?);
            cmd_scenario(&service, action, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_remember,
            set_state_dir,
            reset,
        } => cmd_config(
            config,
            *show,
            *set_output,
            *set_remember,
            set_state_dir.clone(),
            *reset,
        ),
    }
}

fn cmd_scenario(
    service: &Service,
    action: &ScenarioCommands,
    output_format: OutputFormat,
) -> Result<()> {
    match action {
        ScenarioCommands::Save { name, inputs } => {
            let (outcome, scenario) = service.save_scenario(name, &inputs.to_overrides())?;
            match outcome {
                SaveOutcome::Saved => println!("シナリオを保存しました: {} ({})", scenario.name, scenario.id),
                SaveOutcome::Updated => {
                    println!("同名シナリオを更新しました: {} ({})", scenario.name, scenario.id)
                }
            }
            Ok(())
        }

        ScenarioCommands::List => output_scenarios(output_format, &service.scenarios()?),

        ScenarioCommands::Load { id } => {
            let (scenario, result) = service.load_scenario(id)?;
            if output_format == OutputFormat::Table {
                println!("「{}」を呼び出しました。\n", scenario.name);
            }
            output_result(output_format, &result)
        }

        ScenarioCommands::Delete { id } => {
            let removed = service.delete_scenario(id)?;
            println!("「{}」を削除しました。", removed.name);
            Ok(())
        }

        ScenarioCommands::Clear => {
            let count = service.clear_scenarios()?;
            println!("保存シナリオを全削除しました ({}件)。", count);
            Ok(())
        }

        ScenarioCommands::Compare => {
            output_comparison(output_format, &service.scenarios()?.comparison())
        }
    }
}

/// Switch remembering on or off
///
/// Turning it off forgets the last inputs; scenarios stay on disk.
fn apply_remember(config: &mut Config, remember: bool) -> Result<()> {
    if !remember {
        Service::new(open_state_repo(config)?).reset()?;
    }
    config.remember_inputs = remember;
    Ok(())
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_remember: Option<bool>,
    set_state_dir: Option<std::path::PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut changed = false;

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
    }
    if let Some(remember) = set_remember {
        apply_remember(&mut config, remember)?;
        changed = true;
    }
    if let Some(dir) = set_state_dir {
        config.state_dir = Some(dir);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use touring_app::app::InputOverrides;
    use touring_app::repository::open_state_repo_at;
    use touring_domain::repository::TripStateRepository;

    #[test]
    fn test_remember_off_forgets_last_inputs() {
        let dir = tempdir().unwrap();
        let mut config = Config {
            state_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        let service = Service::new(open_state_repo(&config).unwrap());
        service
            .calculate(&InputOverrides::new().with_assignment("n=3"), true)
            .unwrap();
        service.save_scenario("keep", &InputOverrides::new()).unwrap();

        apply_remember(&mut config, false).unwrap();

        assert!(!config.remember_inputs);
        let state = open_state_repo_at(dir.path().to_path_buf()).load().unwrap();
        assert!(state.last.is_none());
        assert_eq!(state.scenarios.len(), 1);
    }

    #[test]
    fn test_remember_on_keeps_state() {
        let dir = tempdir().unwrap();
        let mut config = Config {
            remember_inputs: false,
            state_dir: Some(dir.path().to_path_buf()),
            ..Config::default()
        };

        apply_remember(&mut config, true).unwrap();

        assert!(config.remember_inputs);
        assert!(!open_state_repo_at(dir.path().to_path_buf()).path().exists());
    }
}
