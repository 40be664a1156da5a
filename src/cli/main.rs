#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use clap::Parser;
use rand::SeedableRng;

use dpll_sat::{
    builder::{uniform::uniform_formula, ClauseOk},
    config::{Config, SearchStrategy},
    context::Context,
    generic::minimal_pcg::MinimalPCG32,
    reports::Report,
};

/// Search a uniform random k-CNF formula for a satisfying assignment.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The number of atoms, named 1 to n
    #[arg(short, long, default_value_t = 20)]
    atoms: u32,

    /// The number of clauses
    #[arg(short, long, default_value_t = 91)]
    clauses: usize,

    /// The number of (distinct) atoms in each clause
    #[arg(short = 'k', long, default_value_t = 3)]
    length: usize,

    /// Seed for the random generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// How to walk the tree of choices
    #[arg(long, default_value_t, value_enum)]
    strategy: SearchStrategy,

    /// Bind pure literals before search
    #[arg(short, long, default_value_t = false)]
    preprocessing: bool,

    /// Display the formula
    #[arg(short, long, default_value_t = false)]
    formula: bool,

    /// Display a satisfying assignment, if one is found
    #[arg(short, long, default_value_t = false)]
    model: bool,

    /// Display stats on the search
    #[arg(short = 't', long, default_value_t = false)]
    stats: bool,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let mut rng = MinimalPCG32::seed_from_u64(args.seed);
    let formula = match uniform_formula(&mut rng, args.atoms, args.clauses, args.length) {
        Ok(formula) => formula,
        Err(e) => {
            println!("c Error generating formula: {e:?}");
            std::process::exit(1);
        }
    };

    println!(
        "c {} atoms, {} clauses of length {}, seed {}",
        args.atoms, args.clauses, args.length, args.seed
    );
    if args.formula {
        println!("c {formula}");
    }

    let mut the_context = Context::from_config(Config::default());

    let configured = the_context
        .set_strategy(args.strategy)
        .and_then(|_| the_context.set_preprocessing(args.preprocessing));
    if let Err(e) = configured {
        println!("c Error configuring context: {e:?}");
        std::process::exit(1);
    }

    if the_context.add_formula(formula) == ClauseOk::Empty {
        println!("s UNSATISFIABLE");
        std::process::exit(20);
    }

    let the_report = match the_context.solve() {
        Ok(report) => report,
        Err(e) => {
            println!("c Context error: {e:?}");
            std::process::exit(1);
        }
    };

    if args.stats {
        let counters = &the_context.counters;
        println!("c STATS");
        println!("c   strategy:     {}", the_context.config.search.value);
        println!("c   decisions:    {}", counters.total_decisions);
        println!("c   propagations: {}", counters.total_propagations);
        println!("c   conflicts:    {}", counters.total_conflicts);
        println!("c   backtracks:   {}", counters.total_backtracks);
        println!("c   max depth:    {}", counters.max_depth);
        println!("c   time:         {:.2?}", counters.time);
    }

    match the_report {
        Report::Satisfiable => {
            println!("s SATISFIABLE");
            if args.model {
                if let Some(assignment) = the_context.assignment() {
                    println!("v {} 0", assignment.as_string());
                }
            }
            std::process::exit(10)
        }
        Report::Unsatisfiable => {
            println!("s UNSATISFIABLE");
            std::process::exit(20)
        }
        Report::Unknown => {
            println!("s UNKNOWN");
            std::process::exit(0)
        }
    }
}
