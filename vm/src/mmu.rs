use log::trace;

use crate::{
    disk::Disk,
    frame_directory::FrameDirectory,
    page_replacer::PageReplacer,
    page_table::{PageTable, Protection},
    pager::Pager,
    stats::Stats,
    pages_to_bytes, Error, Result, PAGE_SIZE,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

impl Access {
    fn required(self) -> Protection {
        match self {
            Access::Read => Protection::READ,
            Access::Write => Protection::READ | Protection::WRITE,
        }
    }
}

pub struct Mmu<R: PageReplacer, D: Disk> {
    memory: Vec<u8>,
    page_table: PageTable,
    pager: Pager<R>,
    disk: D,
}

impl<R, D> Mmu<R, D>
where
    R: PageReplacer,
    D: Disk,
{
    pub fn new(page_count: usize, frame_count: usize, replacer: R, disk: D) -> Result<Self> {
        if page_count == 0 || frame_count == 0 {
            return Err(Error::InvalidConfig(
                "é preciso pelo menos uma página e um frame".to_string(),
            ));
        }

        let memory_len = pages_to_bytes(frame_count)?;
        pages_to_bytes(page_count)?;

        if disk.block_count() < page_count {
            return Err(Error::InvalidConfig(format!(
                "o disco tem {} blocos mas foram pedidas {} páginas",
                disk.block_count(),
                page_count
            )));
        }

        Ok(Mmu {
            memory: vec![0; memory_len],
            page_table: PageTable::new(page_count, frame_count),
            pager: Pager::new(frame_count, replacer),
            disk,
        })
    }

    /// Tamanho do espaço virtual em bytes.
    pub fn size(&self) -> usize {
        self.page_table.page_count() * PAGE_SIZE
    }

    pub fn stats(&self) -> Stats {
        self.pager.stats()
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn frames(&self) -> &FrameDirectory {
        self.pager.frames()
    }

    pub fn replacer(&self) -> &R {
        self.pager.replacer()
    }

    pub fn disk(&self) -> &D {
        &self.disk
    }

    /// Devolve o endereço físico de `address`, gerando quantas faltas forem
    /// necessárias até a página ter a permissão que `access` exige.
    fn translate_addr(&mut self, address: usize, access: Access) -> Result<usize> {
        if address >= self.size() {
            return Err(Error::AddressOutOfRange {
                address,
                size: self.size(),
            });
        }

        let page_number = address / PAGE_SIZE;
        let page_offset = address % PAGE_SIZE;

        self.pager.count_access();

        loop {
            let (frame_idx, protection) = self.page_table.get_entry(page_number);

            if protection.contains(access.required()) {
                trace!(
                    "mmu: {:?} addr {:#X} página={} frame={}",
                    access,
                    address,
                    page_number,
                    frame_idx
                );

                return Ok(frame_idx * PAGE_SIZE + page_offset);
            }

            trace!("mmu: falta de página {} ({:?}), tratando...", page_number, access);

            self.pager.handle_fault(
                &mut self.page_table,
                &mut self.memory,
                &mut self.disk,
                page_number,
            )?;
        }
    }

    pub fn read(&mut self, address: usize) -> Result<u8> {
        let physical = self.translate_addr(address, Access::Read)?;

        Ok(self.memory[physical])
    }

    pub fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let physical = self.translate_addr(address, Access::Write)?;

        self.memory[physical] = value;

        Ok(())
    }

    /// Lê a palavra little-endian de índice `index`. Palavras nunca cruzam a
    /// fronteira de uma página.
    pub fn read_u32(&mut self, index: usize) -> Result<u32> {
        let physical = self.translate_addr(index * 4, Access::Read)?;

        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.memory[physical..physical + 4]);

        Ok(u32::from_le_bytes(bytes))
    }

    pub fn write_u32(&mut self, index: usize, value: u32) -> Result<()> {
        let physical = self.translate_addr(index * 4, Access::Write)?;

        self.memory[physical..physical + 4].copy_from_slice(&value.to_le_bytes());

        Ok(())
    }

    /// Número de palavras de 32 bits no espaço virtual.
    pub fn word_count(&self) -> usize {
        self.size() / 4
    }
}
