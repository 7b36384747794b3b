use std::ops::Range;

use log::debug;

use crate::{
    disk::Disk,
    frame_directory::FrameDirectory,
    page_replacer::PageReplacer,
    page_table::{PageTable, Protection},
    stats::Stats,
    Result, PAGE_SIZE,
};

pub fn frame_idx_to_range(frame_idx: usize) -> Range<usize> {
    Range {
        start: frame_idx * PAGE_SIZE,
        end: (frame_idx + 1) * PAGE_SIZE,
    }
}

/// Tratador de faltas de página. Guarda tudo que a substituição precisa: qual
/// página está em qual frame, o estado da política e os contadores.
pub struct Pager<R: PageReplacer> {
    frames: FrameDirectory,
    replacer: R,
    stats: Stats,
}

impl<R: PageReplacer> Pager<R> {
    pub fn new(frame_count: usize, replacer: R) -> Self {
        Pager {
            frames: FrameDirectory::new(frame_count),
            replacer,
            stats: Stats::default(),
        }
    }

    pub fn frames(&self) -> &FrameDirectory {
        &self.frames
    }

    pub fn replacer(&self) -> &R {
        &self.replacer
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub(crate) fn count_access(&mut self) {
        self.stats.accesses += 1;
    }

    /// Trata uma falta em `page_number`. Na volta a página está residente, e
    /// se já estava, passa a aceitar escrita.
    ///
    /// Um `Err` vem sempre do disco e deixa o pager num estado inconsistente
    /// (a política pode já ter descartado a vítima): o pager não deve ser
    /// usado depois disso. Os contadores só contam transferências que
    /// terminaram.
    pub fn handle_fault<D: Disk>(
        &mut self,
        table: &mut PageTable,
        memory: &mut [u8],
        disk: &mut D,
        page_number: usize,
    ) -> Result<()> {
        let (frame_idx, protection) = table.get_entry(page_number);

        if protection.contains(Protection::READ) {
            debug!("pager: página {} escrita, marcando como suja", page_number);

            table.set_entry(page_number, frame_idx, Protection::READ | Protection::WRITE);

            return Ok(());
        }

        self.stats.faults += 1;

        let frame_idx = match self.frames.free_frame() {
            Some(free_idx) => {
                debug!("pager: página {} -> frame livre {}", page_number, free_idx);
                free_idx
            }
            None => self.evict(table, memory, disk)?,
        };

        disk.read_block(page_number, &mut memory[frame_idx_to_range(frame_idx)])?;
        self.stats.reads += 1;

        table.set_entry(page_number, frame_idx, Protection::READ);
        self.frames.assign(frame_idx, page_number);
        self.replacer.admit(page_number);

        Ok(())
    }

    /// Remove a vítima da política e devolve o frame que ela deixou.
    fn evict<D: Disk>(
        &mut self,
        table: &mut PageTable,
        memory: &mut [u8],
        disk: &mut D,
    ) -> Result<usize> {
        let victim = self.replacer.select_victim(&self.frames);
        let entry = table.get(victim);

        assert!(
            entry.is_resident(),
            "pager: a política escolheu a página {}, que não está residente",
            victim
        );
        assert_eq!(
            self.frames.occupant_of(entry.frame_index),
            Some(victim),
            "pager: a tabela mapeia a página {} no frame {}, mas o diretório discorda",
            victim,
            entry.frame_index
        );

        if entry.is_dirty() {
            debug!(
                "pager: página {} suja, salvando o frame {} antes de sobrescrever",
                victim, entry.frame_index
            );

            disk.write_block(victim, &memory[frame_idx_to_range(entry.frame_index)])?;
            self.stats.writes += 1;
        } else {
            debug!("pager: removendo a página limpa {}", victim);
        }

        table.set_entry(victim, 0, Protection::empty());
        self.frames.clear(entry.frame_index);

        Ok(entry.frame_index)
    }
}
