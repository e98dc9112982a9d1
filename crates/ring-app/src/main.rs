use std::path::Path;

use anyhow::Result;
use clap::Parser;
use ring_core::config::RenderConfig;
use ring_core::ring::RingClassifier;

pub mod cli;

/// Artefacts effectivement écrits par un passage.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub png: bool,
    pub ascii: bool,
    pub survey: Option<bool>,
    pub geometry: Option<bool>,
}

/// Rapports optionnels demandés en ligne de commande.
#[derive(Debug, Default, Clone, Copy)]
pub struct Extras<'a> {
    pub survey: Option<&'a Path>,
    /// Chemin, première bande, nombre de bandes.
    pub geometry: Option<(&'a Path, u64, u32)>,
}

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config (seule erreur fatale)
    let config = resolve_config(cli.config.as_deref())?;

    // 4. Rendus. Un échec d'écriture est logué ; le code de sortie reste 0.
    let extras = Extras {
        survey: cli.survey.as_deref(),
        geometry: cli
            .geometry
            .as_deref()
            .map(|path| (path, cli.geometry_from, cli.geometry_rings)),
    };
    let summary = run(&config, extras);
    log::debug!("Passage terminé : {summary:?}");
    Ok(())
}

/// PNG d'abord, puis ASCII, puis survey et géométrie si demandés. Chaque
/// rendu est indépendant : un échec n'empêche pas les suivants.
fn run(config: &RenderConfig, extras: Extras<'_>) -> RunSummary {
    let classifier = RingClassifier::new(config.ring);

    let png = ring_export::render_png_file(&classifier, &config.png);
    let ascii = ring_ascii::render_ascii_file(
        &classifier,
        config.ascii.cols,
        config.ascii.rows,
        &config.ascii.output,
    );
    let survey = extras
        .survey
        .map(|path| ring_export::render_survey_file(&classifier, path));
    let geometry = extras
        .geometry
        .map(|(path, first, count)| ring_export::render_geometry_file(first, count, path));

    RunSummary {
        png,
        ascii,
        survey,
        geometry,
    }
}

/// Config explicite si fournie, défauts intégrés sinon.
fn resolve_config(path: Option<&Path>) -> Result<RenderConfig> {
    match path {
        Some(path) => {
            let config = ring_core::config::load_config(path)?;
            log::info!("Config chargée depuis {}", path.display());
            Ok(config)
        }
        None => Ok(RenderConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small_config(dir: &Path) -> RenderConfig {
        let mut config = RenderConfig::default();
        config.png.width = 64;
        config.png.height = 64;
        config.png.output = dir.join("end_world.png");
        config.ascii.cols = 20;
        config.ascii.rows = 10;
        config.ascii.output = dir.join("end_world.txt");
        config
    }

    #[test]
    fn run_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let summary = run(&config, Extras::default());
        assert_eq!(
            summary,
            RunSummary {
                png: true,
                ascii: true,
                survey: None,
                geometry: None,
            }
        );
        assert!(config.png.output.exists());
        let text = std::fs::read_to_string(&config.ascii.output).unwrap();
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn ascii_still_runs_after_png_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config(dir.path());
        config.png.output = dir.path().join("absent").join("end_world.png");
        let summary = run(&config, Extras::default());
        assert!(!summary.png);
        assert!(summary.ascii);
    }

    #[test]
    fn survey_is_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let survey_path = dir.path().join("survey.txt");
        let summary = run(
            &config,
            Extras {
                survey: Some(&survey_path),
                ..Extras::default()
            },
        );
        assert_eq!(summary.survey, Some(true));
        assert_eq!(summary.geometry, None);
        assert!(survey_path.exists());
    }

    #[test]
    fn geometry_table_is_opt_in_and_bounded() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config(dir.path());
        let path = dir.path().join("geometry.txt");
        let summary = run(
            &config,
            Extras {
                geometry: Some((&path, 10, 3)),
                ..Extras::default()
            },
        );
        assert_eq!(summary.geometry, Some(true));
        assert_eq!(summary.survey, None);
        let report = std::fs::read_to_string(&path).unwrap();
        assert!(report.contains("[Anneau 10]"));
        assert!(report.contains("[Anneau 12]"));
        assert!(!report.contains("[Anneau 13]"));
        assert!(report.ends_with("=== 3 anneaux ==="));
    }

    #[test]
    fn resolve_config_defaults_and_file() {
        assert_eq!(resolve_config(None).unwrap(), RenderConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[png]\nshow_missing_transparent = false").unwrap();
        let config = resolve_config(Some(file.path())).unwrap();
        assert!(!config.png.show_missing_transparent);
    }

    #[test]
    fn resolve_config_bad_file_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[png\nwidth = ").unwrap();
        assert!(resolve_config(Some(file.path())).is_err());
    }
}
