use std::path::PathBuf;

use clap::Parser;

/// endrings — carte des anneaux manquants (PNG) et grille de densité (ASCII).
///
/// Sans argument : `end_world.png` (8000×8000) puis `end_world.txt` (100×100).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichier de configuration TOML (optionnel). Défaut : constantes intégrées.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Écrire aussi le survey anneau par anneau dans ce fichier.
    #[arg(long)]
    pub survey: Option<PathBuf>,

    /// Écrire aussi la table de géométrie des bandes dans ce fichier.
    #[arg(long)]
    pub geometry: Option<PathBuf>,

    /// Première bande de la table de géométrie.
    #[arg(long, default_value_t = 0)]
    pub geometry_from: u64,

    /// Nombre de bandes de la table (borné).
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1_000_000))]
    pub geometry_rings: u32,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
