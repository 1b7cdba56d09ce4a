use std::{ fs::File, io::BufReader, path::{ Path, PathBuf }, time::{ SystemTime, UNIX_EPOCH } };

use anyhow::{ Context, Result };
use clap::Parser;
use disc_engine as de;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(about = "Discs filling the window, pushed around by the mouse")]
pub struct Args {
    /// YAML settings file, every field is optional
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Seed of the body spawner, overrides the settings file
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub simulation: de::SimConfig,
    pub render: RenderSettings,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    /// Background color (red, green, blue) in 0..=1
    pub background: [f32; 3],
    pub body_alpha: f32,
    pub show_stats: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: [0x22 as f32 / 255., 0., 0.],
            body_alpha: 0.2,
            show_stats: false,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open settings file {}", path.display()))?;
        serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid settings file {}", path.display()))
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if args.seed.is_some() {
            settings.seed = args.seed;
        }
        Ok(settings)
    }

    /// Configured seed, or one derived from the clock
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let settings: Settings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings.simulation, de::SimConfig::default());
        assert_eq!(settings.render.body_alpha, 0.2);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_document() {
        let settings: Settings = serde_yaml::from_str(
            "
simulation:
  area_per_body: 5000
  pointer_radius: 60
render:
  show_stats: true
seed: 42
",
        ).unwrap();

        assert_eq!(settings.simulation.area_per_body, 5000.);
        assert_eq!(settings.simulation.pointer_radius, 60.);
        assert_eq!(settings.simulation.min_radius, 10.);
        assert!(settings.render.show_stats);
        assert_eq!(settings.seed(), 42);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = serde_yaml::from_str::<Settings>("simulation:\n  gravity: 9.8\n");
        assert!(err.is_err());
    }

    #[test]
    fn test_seed_argument_wins() {
        let args = Args { config: None, seed: Some(7) };
        let settings = Settings::from_args(&args).unwrap();
        assert_eq!(settings.seed(), 7);
    }

    #[test]
    fn test_missing_file() {
        let args = Args { config: Some(PathBuf::from("/nonexistent/settings.yaml")), seed: None };
        let err = Settings::from_args(&args).unwrap_err();
        assert!(err.to_string().contains("could not open settings file"));
    }
}
