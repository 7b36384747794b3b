use std::collections::{HashSet, VecDeque};

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::frame_directory::FrameDirectory;

/// Decide qual página residente sai quando não há frame livre.
pub trait PageReplacer {
    /// Chamado uma vez, quando `page_number` passa a residir na memória.
    fn admit(&mut self, _page_number: usize) {}

    /// Só é chamado com todos os frames ocupados. A página devolvida precisa
    /// estar residente; quem chamou faz a remoção.
    fn select_victim(&mut self, frames: &FrameDirectory) -> usize;
}

impl<R: PageReplacer + ?Sized> PageReplacer for Box<R> {
    fn admit(&mut self, page_number: usize) {
        (**self).admit(page_number)
    }

    fn select_victim(&mut self, frames: &FrameDirectory) -> usize {
        (**self).select_victim(frames)
    }
}

#[derive(Debug, Default)]
pub struct FIFOPageReplacer {
    fifo: VecDeque<usize>,
}

impl FIFOPageReplacer {
    pub fn new() -> Self {
        FIFOPageReplacer {
            fifo: VecDeque::new(),
        }
    }

    /// Páginas residentes, da mais antiga para a mais nova.
    pub fn queue(&self) -> impl Iterator<Item = &usize> {
        self.fifo.iter()
    }
}

impl PageReplacer for FIFOPageReplacer {
    fn admit(&mut self, page_number: usize) {
        self.fifo.push_back(page_number)
    }

    fn select_victim(&mut self, _frames: &FrameDirectory) -> usize {
        self.fifo
            .pop_front()
            .expect("fifo: remoção pedida sem nenhuma página na fila")
    }
}

fn random_resident(rng: &mut StdRng, frames: &FrameDirectory) -> usize {
    assert!(!frames.is_empty(), "replacer: nenhum frame para sortear");

    let frame_index = rng.random_range(0..frames.len());

    frames.occupant_of(frame_index).unwrap_or_else(|| {
        panic!(
            "replacer: frame livre {} sorteado ao escolher uma vítima",
            frame_index
        )
    })
}

/// Remove o ocupante de um frame sorteado uniformemente.
#[derive(Debug)]
pub struct RandomPageReplacer {
    rng: StdRng,
}

impl RandomPageReplacer {
    pub fn new() -> Self {
        RandomPageReplacer {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomPageReplacer {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPageReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageReplacer for RandomPageReplacer {
    fn select_victim(&mut self, frames: &FrameDirectory) -> usize {
        random_resident(&mut self.rng, frames)
    }
}

/// Sorteio aleatório com uma segunda chance por residência.
///
/// Toda página carregada começa poupada. Sortear uma página poupada gasta a
/// chance dela e sorteia de novo; sortear uma página sem chance a remove. Cada
/// sorteio ou devolve uma vítima ou limpa uma das no máximo `frames.len()`
/// marcas, então a escolha termina em até `frames.len() + 1` sorteios.
#[derive(Debug)]
pub struct SecondChancePageReplacer {
    rng: StdRng,
    spared: HashSet<usize>,
}

impl SecondChancePageReplacer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        SecondChancePageReplacer {
            rng,
            spared: HashSet::new(),
        }
    }

    pub fn is_spared(&self, page_number: usize) -> bool {
        self.spared.contains(&page_number)
    }

    /// Oferece `page_number` para remoção. Devolve `true` se a página gastou
    /// a segunda chance e fica.
    pub fn give_chance(&mut self, page_number: usize) -> bool {
        self.spared.remove(&page_number)
    }
}

impl Default for SecondChancePageReplacer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageReplacer for SecondChancePageReplacer {
    fn admit(&mut self, page_number: usize) {
        self.spared.insert(page_number);
    }

    fn select_victim(&mut self, frames: &FrameDirectory) -> usize {
        for _ in 0..=frames.len() {
            let page_number = random_resident(&mut self.rng, frames);

            if self.give_chance(page_number) {
                log::trace!("second_chance: poupando a página {}", page_number);
                continue;
            }

            return page_number;
        }

        unreachable!("second_chance: mais páginas poupadas do que frames")
    }
}
