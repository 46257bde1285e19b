use std::{
    fs,
    path::{Path, PathBuf},
};

use aeroheat_models::{
    models::aero::heating::{
        AeroHeating, FlightCondition, GivenFluxConfig, HeatingConfig, HeatingResults,
        HeatingSummary,
    },
    support::{
        airframe::{Airframe, Segment, ThermalMap},
        constraint::NonNegative,
        scoring::ScoringRules,
    },
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use uom::si::{
    area::square_meter,
    f64::{HeatFluxDensity, Length, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    length::{foot, meter},
    power::watt,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

#[derive(Parser)]
#[command(name = "aeroheat")]
#[command(version)]
#[command(about = "Aerodynamic heating estimates for sounding rockets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the heating chain at one flight condition
    Report {
        #[command(flatten)]
        environment: Environment,

        /// Flight velocity (m/s)
        #[arg(short = 'v', long, default_value = "327.17125982677516")]
        velocity: f64,

        /// Characteristic diameter (m)
        #[arg(short = 'd', long, default_value = "0.1525")]
        diameter: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Find the velocity at which the heat flux magnitude reaches a target
    VelocityLimit {
        #[command(flatten)]
        environment: Environment,

        /// Target heat flux magnitude (W/m²)
        #[arg(long)]
        flux: f64,

        /// Characteristic diameter (m)
        #[arg(short = 'd', long, default_value = "0.1525")]
        diameter: f64,

        /// Lower end of the velocity search (m/s)
        #[arg(long, default_value = "0.0")]
        min: f64,

        /// Upper end of the velocity search (m/s)
        #[arg(long, default_value = "2000.0")]
        max: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },

    /// Score an apogee against the competition target
    Score {
        /// Achieved apogee (ft)
        #[arg(long)]
        actual: f64,

        /// Target apogee (ft)
        #[arg(long)]
        target: f64,

        /// Points for an exact hit
        #[arg(long, default_value = "350.0")]
        max_points: f64,

        /// Miss, as a fraction of the target, that scores zero
        #[arg(long, default_value = "0.3")]
        tolerance: f64,
    },

    /// Per-segment heating of the Ouroboros I airframe
    Map {
        #[command(flatten)]
        environment: Environment,

        /// Flight velocity (m/s)
        #[arg(short = 'v', long, default_value = "327.17125982677516")]
        velocity: f64,

        /// Use the recorded segment fluxes instead of evaluating the model
        #[arg(long)]
        recorded: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct Environment {
    /// Altitude above sea level (m)
    #[arg(short = 'a', long, default_value = "815.5475110127112")]
    altitude: f64,

    /// Material temperature limit (°C)
    #[arg(short = 't', long, default_value = "198.9")]
    threshold_celsius: f64,

    /// JSON file overriding the physical constants
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,
}

impl Environment {
    fn condition(&self, velocity: f64, diameter: f64) -> FlightCondition {
        FlightCondition {
            altitude: Length::new::<meter>(self.altitude),
            velocity: Velocity::new::<meter_per_second>(velocity),
            diameter: Length::new::<meter>(diameter),
            material_threshold: ThermodynamicTemperature::new::<degree_celsius>(
                self.threshold_celsius,
            ),
        }
    }

    fn model(&self) -> Result<AeroHeating> {
        let config = match &self.config {
            Some(path) => load_config(path)?,
            None => HeatingConfig::default(),
        };
        let model: AeroHeating = config
            .try_into()
            .context("invalid heating constants")?;
        Ok(model)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: &Path) -> Result<HeatingConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    HeatingConfig::from_json(&json)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            environment,
            velocity,
            diameter,
            format,
        } => {
            let model = environment.model()?;
            let results = model.evaluate(&environment.condition(velocity, diameter));
            print_results(&results, format)?;
        }

        Commands::VelocityLimit {
            environment,
            flux,
            diameter,
            min,
            max,
            format,
        } => {
            let model = environment.model()?;
            let target = NonNegative::new(HeatFluxDensity::new::<watt_per_square_meter>(flux))
                .context("target flux must be a non-negative number")?;

            let results = model
                .velocity_for_heat_flux(
                    &environment.condition(0.0, diameter),
                    target,
                    [
                        Velocity::new::<meter_per_second>(min),
                        Velocity::new::<meter_per_second>(max),
                    ],
                    GivenFluxConfig::default(),
                )
                .with_context(|| {
                    format!("no velocity in [{min}, {max}] m/s reaches |q| = {flux} W/m²")
                })?;

            if let OutputFormat::Text = format {
                println!(
                    "|q| = {flux:.2} W/m² is reached at {:.2} m/s",
                    results.condition.velocity.get::<meter_per_second>()
                );
                println!();
            }
            print_results(&results, format)?;
        }

        Commands::Score {
            actual,
            target,
            max_points,
            tolerance,
        } => {
            let rules = ScoringRules::new(max_points, tolerance).context("invalid scoring rules")?;
            let points = rules.score(Length::new::<foot>(actual), Length::new::<foot>(target));
            println!("Actual= {actual} ft, Target= {target} ft -> {points:.1} pts");
        }

        Commands::Map {
            environment,
            velocity,
            recorded,
            format,
        } => {
            let airframe = ouroboros()?;
            let map = if recorded {
                ThermalMap::from_fluxes(
                    &airframe,
                    RECORDED_FLUXES
                        .iter()
                        .map(|&(name, q)| (name, HeatFluxDensity::new::<watt_per_square_meter>(q))),
                )?
            } else {
                let model = environment.model()?;
                ThermalMap::new(&airframe, |segment| {
                    let diameter = segment.shape().characteristic_length().get::<meter>();
                    model
                        .evaluate(&environment.condition(velocity, diameter))
                        .heat_flux
                })
            };
            print_map(&map, format)?;
        }
    }

    Ok(())
}

fn print_results(results: &HeatingResults, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{results}"),
        OutputFormat::Json => {
            let summary = HeatingSummary::from(results);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct MapRow<'a> {
    name: &'a str,
    forward: f64,
    aft: f64,
    heat_flux: f64,
    intensity: f64,
    wetted_area: f64,
    heat_rate: f64,
}

#[derive(Serialize)]
struct MapSummary<'a> {
    segments: Vec<MapRow<'a>>,
    total_heat_rate: f64,
}

fn print_map(map: &ThermalMap, format: OutputFormat) -> Result<()> {
    let rows: Vec<MapRow<'_>> = map
        .segments()
        .iter()
        .map(|segment| MapRow {
            name: &segment.name,
            forward: segment.station.forward.get::<meter>(),
            aft: segment.station.aft.get::<meter>(),
            heat_flux: segment.heat_flux.get::<watt_per_square_meter>(),
            intensity: segment.intensity,
            wetted_area: segment.wetted_area.get::<square_meter>(),
            heat_rate: segment.heat_rate.get::<watt>(),
        })
        .collect();
    let total_heat_rate = map.total_heat_rate().get::<watt>();

    match format {
        OutputFormat::Text => {
            println!(
                "{:<18} {:>15} {:>12} {:>9} {:>10}",
                "Segment", "Station (m)", "q (W/m²)", "Intensity", "Q (W)"
            );
            for row in &rows {
                println!(
                    "{:<18} {:>6.3} - {:>6.3} {:>12.1} {:>9.2} {:>10.1}",
                    row.name, row.forward, row.aft, row.heat_flux, row.intensity, row.heat_rate
                );
            }
            println!("Total heat rate = {total_heat_rate:.1} W");
        }
        OutputFormat::Json => {
            let summary = MapSummary {
                segments: rows,
                total_heat_rate,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }
    Ok(())
}

/// Segment fluxes (W/m²) recorded for the Ouroboros I thermal map.
const RECORDED_FLUXES: [(&str, f64); 11] = [
    ("NoseCone", 76_810.0),
    ("NoseConeTube", 65_320.0),
    ("IntermediateTube", 50_395.0),
    ("RecoveryTube", 50_395.0),
    ("AvionicsTube", 50_395.0),
    ("UpperCasing", 50_395.0),
    ("UpperTransition", 47_921.0),
    ("PVTube", 46_694.0),
    ("LowerTransition", 47_767.0),
    ("FinCan", 56_000.0),
    ("Fins", 32_800.0),
];

fn ouroboros() -> Result<Airframe> {
    let m = |value: f64| Length::new::<meter>(value);

    let airframe = Airframe::new()
        .with(Segment::nose_cone("NoseCone", m(0.1524), 2.9856)?)?
        .with(Segment::tube("NoseConeTube", m(0.238), m(0.1524))?)?
        .with(Segment::tube("IntermediateTube", m(0.3747), m(0.1524))?)?
        .with(Segment::tube("RecoveryTube", m(0.6096), m(0.1524))?)?
        .with(Segment::tube("AvionicsTube", m(0.58), m(0.1524))?)?
        .with(Segment::tube("UpperCasing", m(0.057_15), m(0.1524))?)?
        .with(Segment::transition(
            "UpperTransition",
            m(0.025),
            m(0.1524),
            m(0.142_875),
        )?)?
        .with(Segment::tube("PVTube", m(1.66), m(0.142_875))?)?
        .with(Segment::transition(
            "LowerTransition",
            m(0.084_277_2),
            m(0.142_875),
            m(0.168),
        )?)?
        .with(Segment::tube("FinCan", m(0.868), m(0.168))?)?
        .with(Segment::fin_set("Fins", 3, m(0.14), m(0.36), m(0.009_906))?)?;

    Ok(airframe)
}
