use vm::{
    config::{Policy, Program},
    disk::MemoryDisk,
    mmu::Mmu,
    page_replacer::{FIFOPageReplacer, PageReplacer, RandomPageReplacer, SecondChancePageReplacer},
    page_table::Protection,
    PAGE_SIZE,
};

fn mmu<R: PageReplacer>(pages: usize, frames: usize, replacer: R) -> Mmu<R, MemoryDisk> {
    Mmu::new(pages, frames, replacer, MemoryDisk::new(pages)).unwrap()
}

fn touch<R: PageReplacer>(mmu: &mut Mmu<R, MemoryDisk>, page: usize) {
    mmu.read(page * PAGE_SIZE).unwrap();
}

fn resident<R: PageReplacer>(mmu: &Mmu<R, MemoryDisk>) -> Vec<usize> {
    mmu.page_table().resident_pages().map(|(page, _)| page).collect()
}

fn assert_consistent<R: PageReplacer>(mmu: &Mmu<R, MemoryDisk>) {
    let table = mmu.page_table();
    let frames = mmu.frames();

    assert!(table.resident_pages().count() <= table.frame_count());

    for (frame, page) in frames.iter() {
        let entry = table.get(page);
        assert!(entry.is_resident(), "frame {} contém a página não residente {}", frame, page);
        assert_eq!(entry.frame_index, frame);
    }

    for (page, entry) in table.resident_pages() {
        assert_eq!(frames.occupant_of(entry.frame_index), Some(page));
    }
}

#[test]
fn fifo_read_only_sequence() {
    let mut mmu = mmu(4, 3, FIFOPageReplacer::new());

    for page in 0..4 {
        touch(&mut mmu, page);
    }

    let stats = mmu.stats();
    assert_eq!((stats.faults, stats.reads, stats.writes), (4, 4, 0));
    assert_eq!(resident(&mmu), vec![1, 2, 3]);
    assert_eq!(mmu.frames().frame_of(3), Some(0));
    assert_consistent(&mmu);
}

#[test]
fn fifo_ignores_recency() {
    let mut mmu = mmu(5, 3, FIFOPageReplacer::new());

    for page in [0, 1, 2, 0, 0] {
        touch(&mut mmu, page);
    }
    mmu.write(0, 1).unwrap();
    touch(&mut mmu, 3);

    assert_eq!(resident(&mmu), vec![1, 2, 3]);
    assert_eq!(mmu.stats().writes, 1);
    assert_eq!(mmu.replacer().queue().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn random_victim_comes_from_resident_set() {
    for seed in 0..20 {
        let mut mmu = mmu(4, 3, RandomPageReplacer::with_seed(seed));

        for page in 0..3 {
            touch(&mut mmu, page);
        }
        touch(&mut mmu, 3);

        let now = resident(&mmu);
        assert_eq!(now.len(), 3);
        assert!(now.contains(&3));
        assert_eq!(now.iter().filter(|page| **page < 3).count(), 2);
        assert_consistent(&mmu);
    }
}

#[test]
fn dirty_eviction_writes_once_clean_eviction_never() {
    let mut mmu = mmu(4, 3, FIFOPageReplacer::new());

    mmu.write(0, 0x42).unwrap();
    touch(&mut mmu, 1);
    touch(&mut mmu, 2);
    touch(&mut mmu, 3);

    assert_eq!(mmu.stats().writes, 1);
    assert_eq!(mmu.stats().reads, 4);
    assert_eq!(mmu.disk().block(0)[0], 0x42);

    touch(&mut mmu, 0);

    assert_eq!(mmu.stats().writes, 1);
    assert_eq!(mmu.stats().reads, 5);
    assert_eq!(mmu.read(0).unwrap(), 0x42);
}

#[test]
fn upgrade_keeps_frame_and_skips_io() {
    let mut mmu = mmu(4, 3, SecondChancePageReplacer::with_seed(9));

    touch(&mut mmu, 2);
    let (frame, _) = mmu.page_table().get_entry(2);
    mmu.write(2 * PAGE_SIZE + 5, 1).unwrap();

    assert_eq!(mmu.page_table().get_entry(2), (frame, Protection::READ | Protection::WRITE));
    assert_eq!(mmu.disk().reads(), 1);
    assert_eq!(mmu.disk().writes(), 0);
}

#[test]
fn second_chance_never_evicts_faulting_page() {
    for seed in 0..20 {
        let mut mmu = mmu(6, 3, SecondChancePageReplacer::with_seed(seed));

        for page in 0..6 {
            touch(&mut mmu, page);
            assert!(resident(&mmu).contains(&page));
            assert_consistent(&mmu);
        }
    }
}

#[test]
fn every_policy_keeps_invariants_under_workloads() {
    for policy in [Policy::Fifo, Policy::Random, Policy::Custom] {
        for program in [Program::Scan, Program::Focus] {
            let mut mmu = mmu(5, 3, policy.replacer(Some(1234)));

            program.run(&mut mmu).unwrap();

            assert_consistent(&mmu);
            assert_eq!(mmu.frames().resident_count(), 3);

            let stats = mmu.stats();
            assert_eq!(stats.reads, stats.faults);
            assert_eq!(stats.reads, mmu.disk().reads());
            assert_eq!(stats.writes, mmu.disk().writes());
        }
    }
}

#[test]
fn workload_results_do_not_depend_on_policy() {
    let expected = Program::Focus.run(&mut mmu(5, 5, FIFOPageReplacer::new())).unwrap();

    for policy in [Policy::Fifo, Policy::Random, Policy::Custom] {
        let mut mmu = mmu(5, 3, policy.replacer(Some(99)));

        assert_eq!(Program::Focus.run(&mut mmu).unwrap(), expected);
    }
}

#[test]
fn more_frames_than_pages_never_evicts() {
    let mut mmu = mmu(3, 5, RandomPageReplacer::with_seed(0));

    Program::Scan.run(&mut mmu).unwrap();

    let stats = mmu.stats();
    assert_eq!((stats.faults, stats.reads, stats.writes), (3, 3, 0));
}
