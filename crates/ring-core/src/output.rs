use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CoreError;

/// Écrit `text` dans `path` (création ou troncature).
///
/// Le handle est libéré sur tous les chemins. Un fichier partiellement
/// écrit est laissé tel quel en cas d'échec.
///
/// # Errors
/// Returns [`CoreError::Io`] if the file cannot be created, written, or flushed.
pub fn write_text(path: &Path, text: &str) -> Result<(), CoreError> {
    let io_err = |source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)
}

/// Politique commune des rendus : log du succès ou de l'échec, jamais de propagation.
///
/// Retourne `true` si l'artefact a été écrit.
pub fn report_write(label: &str, path: &Path, result: anyhow::Result<()>) -> bool {
    match result {
        Ok(()) => {
            println!("{label} généré : {}", path.display());
            log::info!("{label} écrit dans {}", path.display());
            true
        }
        Err(e) => {
            log::error!("{label} : échec d'écriture de {} : {e:#}", path.display());
            false
        }
    }
}
