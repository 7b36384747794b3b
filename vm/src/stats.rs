use std::fmt;

/// Contadores reportados no fim da execução.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Todo acesso (byte ou palavra) que a MMU traduziu.
    pub accesses: u64,
    /// Faltas em páginas que não estavam na memória.
    pub faults: u64,
    pub reads: u64,
    pub writes: u64,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Faults: {}, Reads: {}, Writes: {}",
            self.faults, self.reads, self.writes
        )
    }
}
