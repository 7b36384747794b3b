/// Registra qual página ocupa cada frame físico.
///
/// É só contabilidade: o diretório não decide nada, apenas precisa concordar
/// com a tabela de páginas sobre toda página residente.
#[derive(Debug, Clone)]
pub struct FrameDirectory {
    occupants: Vec<Option<usize>>,
}

impl FrameDirectory {
    pub fn new(frame_count: usize) -> Self {
        FrameDirectory {
            occupants: vec![None; frame_count],
        }
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    pub fn occupant_of(&self, frame_index: usize) -> Option<usize> {
        self.occupants[frame_index]
    }

    /// Linear no número de frames.
    pub fn frame_of(&self, page_number: usize) -> Option<usize> {
        self.occupants
            .iter()
            .position(|occupant| *occupant == Some(page_number))
    }

    /// Menor frame desocupado.
    pub fn free_frame(&self) -> Option<usize> {
        self.occupants.iter().position(Option::is_none)
    }

    pub fn assign(&mut self, frame_index: usize, page_number: usize) {
        let slot = &mut self.occupants[frame_index];

        assert!(
            slot.is_none(),
            "frame_directory: frame {} já contém a página {:?}, impossível atribuir a página {}",
            frame_index,
            slot,
            page_number
        );

        *slot = Some(page_number);
    }

    pub fn clear(&mut self, frame_index: usize) {
        self.occupants[frame_index] = None;
    }

    pub fn resident_count(&self) -> usize {
        self.occupants.iter().filter(|occupant| occupant.is_some()).count()
    }

    /// `(frame, página)` para cada frame ocupado.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.occupants
            .iter()
            .enumerate()
            .filter_map(|(frame, occupant)| occupant.map(|page| (frame, page)))
    }
}
