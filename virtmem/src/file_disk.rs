//! FileDisk - Implementação do `Disk` que usa um arquivo comum como disco.
//!
//! Sem header: o arquivo é só uma sequência de blocos, um por
//! página, e o bloco `i` começa no byte `i * PAGE_SIZE`. O arquivo é criado
//! (ou truncado) na abertura e estendido para `blocks * PAGE_SIZE` bytes, então
//! todo bloco lê zeros até o pager escrever nele.

use std::{
    fs::File,
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};

use log::trace;
use vm::{
    disk::{check_block, Disk},
    pages_to_bytes, Result, PAGE_SIZE,
};

/// Quantos bytes de cada bloco aparecem no log de trace.
const PREVIEW_LEN: usize = 16;

#[derive(Debug)]
pub struct FileDisk {
    file: File,
    blocks: usize,
}

impl FileDisk {
    pub fn create<P: AsRef<Path>>(path: P, blocks: usize) -> Result<FileDisk> {
        let len = pages_to_bytes(blocks)?;

        let file = File::options()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;

        file.set_len(len as u64)?;

        Ok(FileDisk { file, blocks })
    }

    fn seek_block(&mut self, block: usize) -> Result<()> {
        self.file.seek(SeekFrom::Start((block * PAGE_SIZE) as u64))?;

        Ok(())
    }
}

impl Disk for FileDisk {
    fn block_count(&self) -> usize {
        self.blocks
    }

    fn read_block(&mut self, block: usize, target: &mut [u8]) -> Result<()> {
        check_block(block, self.blocks, target.len())?;

        self.seek_block(block)?;
        self.file.read_exact(target)?;

        trace!(
            "file_disk: leitura do bloco {} [{}..]",
            block,
            hex::encode(&target[..PREVIEW_LEN])
        );

        Ok(())
    }

    fn write_block(&mut self, block: usize, buffer: &[u8]) -> Result<()> {
        check_block(block, self.blocks, buffer.len())?;

        trace!(
            "file_disk: escrita do bloco {} [{}..]",
            block,
            hex::encode(&buffer[..PREVIEW_LEN])
        );

        self.seek_block(block)?;
        self.file.write_all(buffer)?;

        Ok(())
    }
}
