//! Simulador de paginação sob demanda.
//!
//! O espaço virtual é dividido em páginas de tamanho fixo guardadas num
//! [`disk::Disk`]; um pequeno conjunto de frames físicos mantém algumas delas
//! em memória. A [`mmu::Mmu`] traduz cada acesso e repassa as faltas de página
//! ao [`pager::Pager`], que escolhe frames com um
//! [`page_replacer::PageReplacer`] e mantém os contadores em [`stats::Stats`].

pub mod config;
pub mod disk;
pub mod error;
pub mod frame_directory;
pub mod mmu;
pub mod page_replacer;
pub mod page_table;
pub mod pager;
pub mod program;
pub mod stats;

pub use error::{Error, Result};

/// Tamanho de uma página, de um frame e de um bloco de disco, em bytes.
pub const PAGE_SIZE: usize = 4096;

/// Quantos bytes ocupam `count` páginas (ou frames, ou blocos). Falha em vez
/// de estourar `usize`.
pub fn pages_to_bytes(count: usize) -> Result<usize> {
    count.checked_mul(PAGE_SIZE).ok_or_else(|| {
        Error::InvalidConfig(format!(
            "{} páginas de {} bytes não cabem no espaço de endereçamento",
            count, PAGE_SIZE
        ))
    })
}
