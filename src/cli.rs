use crate::config::{DEFAULT_API_URL, DEFAULT_IMAGE_DIR, DEFAULT_TIMEOUT_SECS};
use crate::models::{CarClass, Cylinders, Drive, Transmission};
use crate::pipeline::filters::{
    DEFAULT_MIN_YEAR, MAX_MODEL_YEAR, MIN_MODEL_YEAR, MPG_CEILING, MPG_FLOOR,
};
use crate::pipeline::PreferenceSet;
use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "automatch",
    version,
    about = "AutoMatch: your personalized car finder"
)]
pub struct Cli {
    #[arg(
        long,
        default_value_t = DEFAULT_MIN_YEAR,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_MODEL_YEAR)..=i64::from(MAX_MODEL_YEAR)),
        help = "Oldest model year to search"
    )]
    pub min_year: u16,
    #[arg(
        long,
        default_value_t = MAX_MODEL_YEAR,
        value_parser = clap::value_parser!(u16).range(i64::from(MIN_MODEL_YEAR)..=i64::from(MAX_MODEL_YEAR)),
        help = "Newest model year to search"
    )]
    pub max_year: u16,
    #[arg(long = "class", value_enum, ignore_case = true, help = "Car class")]
    pub car_class: Option<CarClass>,
    #[arg(long, help = "Maker of the car (e.g. Toyota, Ford)")]
    pub make: Option<String>,
    #[arg(long, help = "Number of cylinders (2, 3, 4, 5, 6, 8, 10, 12 or 16)")]
    pub cylinders: Option<Cylinders>,
    #[arg(long, value_enum, ignore_case = true, help = "Drive type")]
    pub drive: Option<Drive>,
    #[arg(long, help = "Electric fuel type")]
    pub electric: bool,
    #[arg(long, help = "Gas fuel type")]
    pub gas: bool,
    #[arg(long, help = "Diesel fuel type")]
    pub diesel: bool,
    #[arg(
        long,
        default_value_t = MPG_FLOOR,
        value_parser = clap::value_parser!(u8).range(i64::from(MPG_FLOOR)..=i64::from(MPG_CEILING)),
        help = "Minimum combined MPG"
    )]
    pub min_mpg: u8,
    #[arg(
        long,
        default_value_t = MPG_CEILING,
        value_parser = clap::value_parser!(u8).range(i64::from(MPG_FLOOR)..=i64::from(MPG_CEILING)),
        help = "Maximum combined MPG"
    )]
    pub max_mpg: u8,
    #[arg(long, value_enum, ignore_case = true, help = "Transmission type")]
    pub transmission: Option<Transmission>,

    #[arg(long, env = "AUTOMATCH_API_KEY", hide_env_values = true, help = "API Ninjas key")]
    pub api_key: String,
    #[arg(long, default_value = DEFAULT_API_URL, help = "Car API endpoint")]
    pub api_url: String,
    #[arg(long, default_value = DEFAULT_IMAGE_DIR, help = "Directory holding the car pictures")]
    pub image_dir: PathBuf,
    #[arg(long, help = "Image metadata CSV [default: <image-dir>/cars_metadata.csv]")]
    pub metadata_csv: Option<PathBuf>,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "Per-request timeout in seconds")]
    pub timeout_secs: u64,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(long, help = "Also save the report as JSON to this file")]
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn preferences(&self) -> Result<PreferenceSet> {
        if self.min_year > self.max_year {
            bail!(
                "--min-year {} is after --max-year {}",
                self.min_year,
                self.max_year
            );
        }

        Ok(PreferenceSet {
            min_year: self.min_year,
            max_year: self.max_year,
            car_class: self.car_class,
            make: self.make.clone(),
            cylinders: self.cylinders,
            drive: self.drive,
            electric: self.electric,
            gas: self.gas,
            diesel: self.diesel,
            min_comb_mpg: self.min_mpg,
            max_comb_mpg: self.max_mpg,
            transmission: self.transmission,
        })
    }
}
