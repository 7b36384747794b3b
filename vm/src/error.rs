//! Tipos de erro do simulador.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuração inválida: {0}")]
    InvalidConfig(String),

    #[error("política de substituição desconhecida: {0} (esperado rand, fifo ou custom)")]
    UnknownPolicy(String),

    #[error("programa desconhecido: {0} (esperado sort, scan ou focus)")]
    UnknownProgram(String),

    #[error("endereço {address:#X} fora do espaço virtual ({size:#X} bytes)")]
    AddressOutOfRange { address: usize, size: usize },

    #[error("bloco {block} fora do disco ({blocks} blocos)")]
    BlockOutOfRange { block: usize, blocks: usize },

    #[error("erro de E/S no disco: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
