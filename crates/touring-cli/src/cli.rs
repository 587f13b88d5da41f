//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use touring_app::app::InputOverrides;
use touring_domain::Field;
use touring_types::OutputFormat;

#[derive(Parser)]
#[command(name = "touring-cost")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Touring trip cost calculator: fuel, totals, and per-person split")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Trip inputs shared by `calc` and `scenario save`
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// KEY=VALUE pairs, e.g. `d=300 n=2`. Keys: field names or d,f,p,h,m,l,s,o,n
    pub assignments: Vec<String>,

    /// Start from a preset instead of the remembered inputs (see `presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Distance (km)
    #[arg(long, allow_hyphen_values = true)]
    pub distance: Option<String>,

    /// Fuel efficiency (km/L)
    #[arg(long, allow_hyphen_values = true)]
    pub fuel_efficiency: Option<String>,

    /// Fuel price (円/L)
    #[arg(long, allow_hyphen_values = true)]
    pub gas_price: Option<String>,

    /// Tolls (円)
    #[arg(long, allow_hyphen_values = true)]
    pub highway: Option<String>,

    /// Meals (円)
    #[arg(long, allow_hyphen_values = true)]
    pub meals: Option<String>,

    /// Lodging (円)
    #[arg(long, allow_hyphen_values = true)]
    pub lodging: Option<String>,

    /// Sightseeing / onsen (円)
    #[arg(long, allow_hyphen_values = true)]
    pub sightseeing: Option<String>,

    /// Other costs (円)
    #[arg(long, allow_hyphen_values = true)]
    pub other: Option<String>,

    /// Party size
    #[arg(long, allow_hyphen_values = true)]
    pub people: Option<String>,
}

impl InputArgs {
    fn field_value(&self, field: Field) -> Option<&String> {
        match field {
            Field::Distance => self.distance.as_ref(),
            Field::FuelEfficiency => self.fuel_efficiency.as_ref(),
            Field::GasPrice => self.gas_price.as_ref(),
            Field::Highway => self.highway.as_ref(),
            Field::Meals => self.meals.as_ref(),
            Field::Lodging => self.lodging.as_ref(),
            Field::Sightseeing => self.sightseeing.as_ref(),
            Field::Other => self.other.as_ref(),
            Field::People => self.people.as_ref(),
        }
    }

    pub fn to_overrides(&self) -> InputOverrides {
        InputOverrides {
            preset: self.preset.clone(),
            fields: Field::ALL
                .into_iter()
                .filter_map(|f| self.field_value(f).map(|v| (f, v.clone())))
                .collect(),
            assignments: self.assignments.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate trip cost
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Do not remember these inputs for the next run
        #[arg(long)]
        no_save: bool,
    },

    /// List built-in presets
    Presets,

    /// Forget the remembered inputs
    Reset,

    /// Manage saved scenarios
    Scenario {
        #[command(subcommand)]
        action: ScenarioCommands,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable remembering inputs and scenarios
        #[arg(long)]
        set_remember: Option<bool>,

        /// Set state directory
        #[arg(long)]
        set_state_dir: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum ScenarioCommands {
    /// Save the current inputs under a name (same name overwrites)
    Save {
        /// Scenario name (max 24 characters)
        name: String,

        #[command(flatten)]
        inputs: InputArgs,
    },

    /// List saved scenarios
    List,

    /// Load a scenario by id or name and calculate it
    Load {
        /// Scenario id or name
        id: String,
    },

    /// Delete a scenario by id or name
    Delete {
        /// Scenario id or name
        id: String,
    },

    /// Delete all scenarios
    Clear,

    /// Compare saved scenarios side by side
    Compare,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_calc_args() {
        let cli = Cli::try_parse_from([
            "touring-cost",
            "calc",
            "d=300",
            "n=2",
            "--preset",
            "day200",
            "--meals",
            "-100",
            "--no-save",
        ])
        .unwrap();

        match cli.command {
            Commands::Calc { inputs, no_save } => {
                assert!(no_save);
                let overrides = inputs.to_overrides();
                assert_eq!(overrides.preset.as_deref(), Some("day200"));
                assert_eq!(overrides.fields, vec![(Field::Meals, "-100".to_string())]);
                assert_eq!(overrides.assignments, vec!["d=300", "n=2"]);
            }
            _ => panic!("expected calc"),
        }
    }

    #[test]
    fn test_scenario_save_args() {
        let cli = Cli::try_parse_from([
            "touring-cost",
            "-f",
            "json",
            "scenario",
            "save",
            "箱根",
            "--people",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Scenario {
                action: ScenarioCommands::Save { name, inputs },
            } => {
                assert_eq!(name, "箱根");
                assert_eq!(inputs.people.as_deref(), Some("2"));
            }
            _ => panic!("expected scenario save"),
        }
    }
}
