//! Programas sintéticos. Cada um percorre todo o espaço virtual pela MMU com
//! um padrão de acesso diferente e devolve uma soma do que leu.

use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{config::Program, disk::Disk, mmu::Mmu, page_replacer::PageReplacer, Result};

const SORT_SEED: u64 = 48271;
const FOCUS_SEED: u64 = 38290;

impl Program {
    pub fn run<R: PageReplacer, D: Disk>(self, mmu: &mut Mmu<R, D>) -> Result<u64> {
        let result = match self {
            Program::Scan => scan(mmu)?,
            Program::Sort => sort(mmu)?,
            Program::Focus => focus(mmu)?,
        };

        info!("resultado do {}: {}", self, result);

        Ok(result)
    }
}

/// Preenche todos os bytes e depois soma o espaço inteiro dez vezes.
pub fn scan<R: PageReplacer, D: Disk>(mmu: &mut Mmu<R, D>) -> Result<u64> {
    let length = mmu.size();

    for i in 0..length {
        mmu.write(i, (i % 256) as u8)?;
    }

    let mut total = 0u64;

    for _ in 0..10 {
        for i in 0..length {
            total += u64::from(mmu.read(i)?);
        }
    }

    Ok(total)
}

/// Enche o espaço de palavras aleatórias e as ordena no lugar (heapsort).
pub fn sort<R: PageReplacer, D: Disk>(mmu: &mut Mmu<R, D>) -> Result<u64> {
    let words = mmu.word_count();
    let mut rng = StdRng::seed_from_u64(SORT_SEED);

    for i in 0..words {
        mmu.write_u32(i, rng.random())?;
    }

    for start in (0..words / 2).rev() {
        sift_down(mmu, start, words)?;
    }

    for end in (1..words).rev() {
        swap(mmu, 0, end)?;
        sift_down(mmu, 0, end)?;
    }

    sum_words(mmu)
}

/// Zera o espaço e depois escreve em cem pedaços pequenos e aleatórios.
pub fn focus<R: PageReplacer, D: Disk>(mmu: &mut Mmu<R, D>) -> Result<u64> {
    let words = mmu.word_count();
    let mut rng = StdRng::seed_from_u64(FOCUS_SEED);

    for i in 0..words {
        mmu.write_u32(i, 0)?;
    }

    for _ in 0..100 {
        let start = rng.random_range(0..words);
        let chunk = rng.random_range(0..100u32);

        for i in 0..chunk {
            mmu.write_u32((start + i as usize) % words, i)?;
        }
    }

    sum_words(mmu)
}

fn sum_words<R: PageReplacer, D: Disk>(mmu: &mut Mmu<R, D>) -> Result<u64> {
    let mut total = 0u64;

    for i in 0..mmu.word_count() {
        total = total.wrapping_add(u64::from(mmu.read_u32(i)?));
    }

    Ok(total)
}

fn swap<R: PageReplacer, D: Disk>(mmu: &mut Mmu<R, D>, a: usize, b: usize) -> Result<()> {
    let (x, y) = (mmu.read_u32(a)?, mmu.read_u32(b)?);

    mmu.write_u32(a, y)?;
    mmu.write_u32(b, x)
}

fn sift_down<R: PageReplacer, D: Disk>(
    mmu: &mut Mmu<R, D>,
    mut root: usize,
    end: usize,
) -> Result<()> {
    loop {
        let mut child = 2 * root + 1;

        if child >= end {
            return Ok(());
        }

        if child + 1 < end && mmu.read_u32(child)? < mmu.read_u32(child + 1)? {
            child += 1;
        }

        if mmu.read_u32(root)? >= mmu.read_u32(child)? {
            return Ok(());
        }

        swap(mmu, root, child)?;
        root = child;
    }
}
