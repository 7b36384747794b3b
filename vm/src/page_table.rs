use bitflags::bitflags;

bitflags! {
    /// Permissões de uma página. `WRITE` também serve de bit de "suja".
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Protection: u8 {
        const READ = 0b01;
        const WRITE = 0b10;
    }
}

#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct PageTableEntry {
    pub frame_index: usize,
    pub protection: Protection,
}

impl PageTableEntry {
    pub fn is_resident(&self) -> bool {
        self.protection.contains(Protection::READ)
    }

    pub fn is_dirty(&self) -> bool {
        self.protection.contains(Protection::WRITE)
    }
}

pub struct PageTable {
    table: Vec<PageTableEntry>,
    frame_count: usize,
}

impl PageTable {
    pub fn new(page_count: usize, frame_count: usize) -> Self {
        PageTable {
            table: vec![PageTableEntry::default(); page_count],
            frame_count,
        }
    }

    pub fn get_entry(&self, page_number: usize) -> (usize, Protection) {
        let entry = self.table[page_number];

        (entry.frame_index, entry.protection)
    }

    pub fn set_entry(&mut self, page_number: usize, frame_index: usize, protection: Protection) {
        assert!(
            frame_index < self.frame_count,
            "page_table: frame {} fora do intervalo para a página {}",
            frame_index,
            page_number
        );

        self.table[page_number] = PageTableEntry {
            frame_index,
            protection,
        };
    }

    pub fn get(&self, page_number: usize) -> PageTableEntry {
        self.table[page_number]
    }

    pub fn page_count(&self) -> usize {
        self.table.len()
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Páginas com pelo menos READ, junto com suas entradas.
    pub fn resident_pages(&self) -> impl Iterator<Item = (usize, PageTableEntry)> + '_ {
        self.table
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, entry)| entry.is_resident())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_start_unmapped() {
        let table = PageTable::new(8, 3);

        assert_eq!(table.page_count(), 8);
        assert_eq!(table.frame_count(), 3);
        assert_eq!(table.resident_pages().count(), 0);
        assert_eq!(table.get_entry(5), (0, Protection::empty()));
    }

    #[test]
    fn set_entry_replaces_mapping() {
        let mut table = PageTable::new(4, 3);

        table.set_entry(2, 1, Protection::READ);
        assert!(table.get(2).is_resident());
        assert!(!table.get(2).is_dirty());

        table.set_entry(2, 1, Protection::READ | Protection::WRITE);
        assert!(table.get(2).is_dirty());

        table.set_entry(2, 0, Protection::empty());
        assert!(!table.get(2).is_resident());
    }

    #[test]
    #[should_panic(expected = "fora do intervalo")]
    fn rejects_frames_past_the_pool() {
        let mut table = PageTable::new(4, 3);

        table.set_entry(0, 3, Protection::READ);
    }
}
