use crate::{Error, Result, PAGE_SIZE};

/// Armazenamento secundário com um bloco de `PAGE_SIZE` bytes por página.
pub trait Disk {
    fn block_count(&self) -> usize;

    fn read_block(&mut self, block: usize, target: &mut [u8]) -> Result<()>;

    fn write_block(&mut self, block: usize, buffer: &[u8]) -> Result<()>;
}

/// Confere o índice do bloco e o tamanho do buffer num disco de `blocks` blocos.
pub fn check_block(block: usize, blocks: usize, buffer_len: usize) -> Result<()> {
    if block >= blocks {
        return Err(Error::BlockOutOfRange { block, blocks });
    }

    assert_eq!(
        buffer_len, PAGE_SIZE,
        "disk: o buffer precisa ter exatamente um bloco"
    );

    Ok(())
}

/// Disco em memória. Conta as próprias transferências, o que ajuda a conferir
/// os contadores do pager com o que realmente aconteceu.
#[derive(Debug, Clone)]
pub struct MemoryDisk {
    data: Vec<u8>,
    reads: u64,
    writes: u64,
}

impl MemoryDisk {
    pub fn new(blocks: usize) -> Self {
        MemoryDisk {
            data: vec![0; blocks * PAGE_SIZE],
            reads: 0,
            writes: 0,
        }
    }

    pub fn block(&self, block: usize) -> &[u8] {
        &self.data[block * PAGE_SIZE..(block + 1) * PAGE_SIZE]
    }

    pub fn reads(&self) -> u64 {
        self.reads
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Disk for MemoryDisk {
    fn block_count(&self) -> usize {
        self.data.len() / PAGE_SIZE
    }

    fn read_block(&mut self, block: usize, target: &mut [u8]) -> Result<()> {
        check_block(block, self.block_count(), target.len())?;

        target.copy_from_slice(self.block(block));
        self.reads += 1;

        Ok(())
    }

    fn write_block(&mut self, block: usize, buffer: &[u8]) -> Result<()> {
        check_block(block, self.block_count(), buffer.len())?;

        self.data[block * PAGE_SIZE..(block + 1) * PAGE_SIZE].copy_from_slice(buffer);
        self.writes += 1;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_round_trip() {
        let mut disk = MemoryDisk::new(2);
        let page = vec![0xAB; PAGE_SIZE];
        let mut target = vec![0; PAGE_SIZE];

        disk.write_block(1, &page).unwrap();
        disk.read_block(1, &mut target).unwrap();

        assert_eq!(target, page);
        assert!(disk.block(0).iter().all(|b| *b == 0));
        assert_eq!((disk.reads(), disk.writes()), (1, 1));
    }

    #[test]
    fn out_of_range_block_is_an_error() {
        let mut disk = MemoryDisk::new(1);
        let mut target = vec![0; PAGE_SIZE];

        let err = disk.read_block(1, &mut target).unwrap_err();

        assert!(matches!(err, Error::BlockOutOfRange { block: 1, blocks: 1 }));
        assert_eq!(disk.reads(), 0);
    }
}
