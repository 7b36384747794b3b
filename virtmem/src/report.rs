//! Log de resultados: uma linha CSV por execução, acrescentada a um arquivo
//! compartilhado entre execuções.

use std::{fs::File, io::Write, path::Path};

use vm::{stats::Stats, Result};

pub const HEADER: &str = "Frames, Pages, Faults, Reads, Writes";

pub fn row(frames: usize, pages: usize, stats: &Stats) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        frames, pages, stats.faults, stats.reads, stats.writes
    )
}

/// Acrescenta uma linha em `path`, escrevendo antes o header se o arquivo
/// estiver vazio.
pub fn append<P: AsRef<Path>>(path: P, frames: usize, pages: usize, stats: &Stats) -> Result<()> {
    let mut file = File::options().create(true).append(true).open(path)?;

    if file.metadata()?.len() == 0 {
        writeln!(file, "{}", HEADER)?;
    }

    writeln!(file, "{}", row(frames, pages, stats))?;

    Ok(())
}
