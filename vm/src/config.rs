//! Configuração da execução: tamanhos, política de substituição e programa.

use std::{fmt, str::FromStr};

use crate::{
    page_replacer::{FIFOPageReplacer, PageReplacer, RandomPageReplacer, SecondChancePageReplacer},
    pages_to_bytes, Error, Result,
};

/// Menor número de páginas ou frames aceito.
pub const MIN_COUNT: usize = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Random,
    Fifo,
    /// Sorteio aleatório com segunda chance para páginas recém-carregadas.
    Custom,
}

impl Policy {
    /// Constrói o substituidor da política. `seed` fixa as políticas
    /// aleatórias; sem ela, a entropia vem do sistema operacional.
    pub fn replacer(self, seed: Option<u64>) -> Box<dyn PageReplacer> {
        match (self, seed) {
            (Policy::Fifo, _) => Box::new(FIFOPageReplacer::new()),
            (Policy::Random, Some(seed)) => Box::new(RandomPageReplacer::with_seed(seed)),
            (Policy::Random, None) => Box::new(RandomPageReplacer::new()),
            (Policy::Custom, Some(seed)) => Box::new(SecondChancePageReplacer::with_seed(seed)),
            (Policy::Custom, None) => Box::new(SecondChancePageReplacer::new()),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "rand" => Ok(Policy::Random),
            "fifo" => Ok(Policy::Fifo),
            "custom" => Ok(Policy::Custom),
            other => Err(Error::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Random => "rand",
            Policy::Fifo => "fifo",
            Policy::Custom => "custom",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Program {
    Sort,
    Scan,
    Focus,
}

impl FromStr for Program {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sort" => Ok(Program::Sort),
            "scan" => Ok(Program::Scan),
            "focus" => Ok(Program::Focus),
            other => Err(Error::UnknownProgram(other.to_string())),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Program::Sort => "sort",
            Program::Scan => "scan",
            Program::Focus => "focus",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub pages: usize,
    pub frames: usize,
    pub policy: Policy,
    pub program: Program,
    pub seed: Option<u64>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.pages < MIN_COUNT {
            return Err(Error::InvalidConfig(format!(
                "número de páginas {} muito pequeno, o mínimo é {}",
                self.pages, MIN_COUNT
            )));
        }

        if self.frames < MIN_COUNT {
            return Err(Error::InvalidConfig(format!(
                "número de frames {} muito pequeno, o mínimo é {}",
                self.frames, MIN_COUNT
            )));
        }

        pages_to_bytes(self.pages)?;
        pages_to_bytes(self.frames)?;

        Ok(())
    }
}
