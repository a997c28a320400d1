//! Expands the free left regular band and prints its elements.
//!
//! Run with:
//!   cargo run --example lrb -- 3
//!   cargo run --example lrb -- 2 --side twosided --dot lrb2.dot

use clap::{Parser, ValueEnum};

use kr_expansion::config::ExpansionConfig;
use kr_expansion::expansion::Expansion;
use kr_expansion::monoids::FreeLeftRegularBand;
use kr_expansion::types::Side;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum SideArg {
    Right,
    Left,
    Twosided,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Right => Side::Right,
            SideArg::Left => Side::Left,
            SideArg::Twosided => Side::TwoSided,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of generators.
    #[arg(value_name = "INT", default_value = "2")]
    n: usize,

    /// Side on which words are extended during enumeration.
    #[clap(long, value_enum, default_value = "right")]
    side: SideArg,

    /// Write the underlying Cayley graph in DOT format to this file.
    #[clap(long, value_name = "FILE")]
    dot: Option<std::path::PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let lrb = FreeLeftRegularBand::new(args.n);
    let config = ExpansionConfig::default().with_side(args.side.into());
    let k = Expansion::with_config(lrb, config)?;
    println!("{}", k);
    println!("k = {:?}", k);

    println!(
        "|M| = {}, components = {}, transition edges = {}",
        k.cayley_graph().num_vertices(),
        k.components().count(),
        k.transition_edges().len()
    );
    println!("|K| = {} <= {}", k.len(), k.size_bound());

    let mut elements: Vec<_> = k.iter().collect();
    elements.sort_by(|x, y| x.cmp_by_word(y));
    for x in elements {
        println!("  {} -> {:?} via {} transition edges", x, x.value(), x.transition_edges().len());
    }

    if let Some(path) = args.dot {
        std::fs::write(&path, k.to_dot()?)?;
        println!("Wrote Cayley graph to {}", path.display());
    }

    println!("Total time: {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
