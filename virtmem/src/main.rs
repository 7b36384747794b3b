mod file_disk;
mod report;

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use log::{info, warn};
use vm::{
    config::{Config, Policy, Program},
    mmu::Mmu,
};

use crate::file_disk::FileDisk;

/// Roda um programa sobre uma memória virtual paginada e conta o tráfego de disco.
#[derive(Parser, Debug)]
#[command(name = "virtmem")]
struct Args {
    /// Número de páginas virtuais.
    npages: usize,
    /// Número de frames físicos.
    nframes: usize,
    /// Política de substituição: rand, fifo ou custom.
    policy: Policy,
    /// Programa: sort, scan ou focus.
    program: Program,
    /// Semente das políticas aleatórias.
    #[arg(long)]
    seed: Option<u64>,
    /// Arquivo usado como disco virtual.
    #[arg(long, default_value = "myvirtualdisk")]
    disk: PathBuf,
    /// Arquivo CSV onde os resultados são acrescentados.
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,
}

fn run(args: Args) -> vm::Result<()> {
    let config = Config {
        pages: args.npages,
        frames: args.nframes,
        policy: args.policy,
        program: args.program,
        seed: args.seed,
    };

    config.validate()?;

    info!(
        "virtmem: {} páginas, {} frames, política {}, programa {}",
        config.pages, config.frames, config.policy, config.program
    );

    let disk = FileDisk::create(&args.disk, config.pages)?;
    let mut mmu = Mmu::new(
        config.pages,
        config.frames,
        config.policy.replacer(config.seed),
        disk,
    )?;

    config.program.run(&mut mmu)?;

    let stats = mmu.stats();

    info!("virtmem: {} acessos traduzidos", stats.accesses);
    println!(
        "\nFrames: {}, Pages: {}, {}",
        config.frames, config.pages, stats
    );

    if let Err(err) = report::append(&args.output, config.frames, config.pages, &stats) {
        warn!("virtmem: não foi possível escrever em {}: {}", args.output.display(), err);
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("virtmem: {}", err);
            ExitCode::FAILURE
        }
    }
}
