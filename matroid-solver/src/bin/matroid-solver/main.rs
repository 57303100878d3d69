mod generator;
mod os_signal_termination;
mod output;
mod result;
mod validation;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use clap::Subcommand;
use generator::InstanceGenerator;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use matroid_solver::core::convert_case::Case;
use matroid_solver::core::oracles::ForestCheck;
use matroid_solver::core::solvers::local_search::LocalSearch;
use matroid_solver::core::solvers::BaselineSolver;
use matroid_solver::core::solvers::ExactBipartiteMatcher;
use matroid_solver::core::statistics::configure_statistic_logging;
use matroid_solver::core::statistics::log_statistic_postfix;
use matroid_solver::core::termination::Combinator;
use matroid_solver::core::termination::TimeBudget;
use matroid_solver::core::ApproximationSolution;
use matroid_solver::core::MatroidProblem;
use os_signal_termination::OsSignal;
use output::Report;
use result::MatroidSolverError;
use result::MatroidSolverResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The kind of instance to generate and solve.
    #[command(subcommand)]
    problem: ProblemKind,

    /// The random seed used to generate the instance.
    ///
    /// Possible values: u64
    #[arg(
        short = 'r',
        long = "seed",
        default_value_t = 42,
        global = true,
        verbatim_doc_comment
    )]
    seed: u64,

    /// The time budget for the local search, given in seconds.
    ///
    /// When the budget is exhausted the search reports the best solution it found, with the
    /// certificate of the last neighbourhood size it completed.
    ///
    /// Possible values: u64
    #[arg(
        short = 't',
        long = "time-limit",
        default_value_t = 10,
        global = true,
        verbatim_doc_comment
    )]
    time_limit: u64,

    /// How cycles are ruled out in the Hamiltonian-path problem.
    ///
    /// - "functional-links" follows the forward links of the current paths; it relies on the
    ///   degree constraints being checked first
    /// - "traversal" searches the undirected forest of the current edges
    #[arg(long, value_enum, default_value_t, global = true, verbatim_doc_comment)]
    forest_check: ForestCheck,

    /// Enables log message output from the solvers on standard error.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solvers on standard error.
    ///
    /// Possible values: bool
    #[arg(
        short = 's',
        long = "log-statistics",
        global = true,
        verbatim_doc_comment
    )]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", global = true, verbatim_doc_comment)]
    omit_timestamp: bool,
}

#[derive(Debug, Subcommand)]
enum ProblemKind {
    /// Maximum matching in a random bipartite graph with `n` vertices on each side.
    Bipartite {
        /// The number of vertices on each side.
        n: usize,
        /// The probability with which each edge is present.
        p: f64,
    },
    /// Maximum 3-dimensional matching in a random tripartite hypergraph with `n` vertices in each
    /// part.
    #[command(name = "3dmatching")]
    ThreeDimensionalMatching {
        /// The number of vertices in each part.
        n: usize,
        /// The probability with which each hyperedge is present.
        p: f64,
    },
    /// Longest collection of vertex-disjoint paths in a random directed graph on `n` vertices.
    Hamiltonian {
        /// The number of vertices.
        n: usize,
        /// The probability with which each directed edge is present.
        p: f64,
        /// The number of vertices on a path which is planted in the graph.
        #[arg(long, default_value_t = 0)]
        min_path_length: usize,
    },
}

impl ProblemKind {
    fn name(&self) -> &'static str {
        match self {
            ProblemKind::Bipartite { .. } => "BIPARTITE",
            ProblemKind::ThreeDimensionalMatching { .. } => "3DMATCHING",
            ProblemKind::Hamiltonian { .. } => "HAMILTONIAN",
        }
    }

    fn edge_probability(&self) -> f64 {
        match self {
            ProblemKind::Bipartite { p, .. }
            | ProblemKind::ThreeDimensionalMatching { p, .. }
            | ProblemKind::Hamiltonian { p, .. } => *p,
        }
    }
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%% matroid-stat:",
            None,
            Some(Case::Camel),
            Some(Box::new(std::io::stderr())),
        );
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            if !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            writeln!(buf, "{}: {}", record.level(), record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> MatroidSolverResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics, args.omit_timestamp)?;

    if matroid_solver::core::asserts::MATROID_ASSERT_LEVEL_DEFINITION
        >= matroid_solver::core::asserts::MATROID_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the matroid assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            matroid_solver::core::asserts::MATROID_ASSERT_LEVEL_DEFINITION
        );
    };

    let p = args.problem.edge_probability();
    if !(0.0..=1.0).contains(&p) {
        return Err(MatroidSolverError::InvalidProbability(p));
    }

    let mut generator = InstanceGenerator::new(args.seed);
    let mut problem = match args.problem {
        ProblemKind::Bipartite { n, p } => {
            MatroidProblem::matching(2, n, generator.bipartite(n, p))?
        }
        ProblemKind::ThreeDimensionalMatching { n, p } => {
            MatroidProblem::matching(3, n, generator.three_dimensional(n, p))?
        }
        ProblemKind::Hamiltonian {
            n,
            p,
            min_path_length,
        } => MatroidProblem::hamiltonian_path(
            n,
            generator.directed_graph(n, p, min_path_length),
            args.forest_check,
        )?,
    };
    info!("Generated {} edges", problem.ground_set_size());

    let mut report = Report::new(args.problem.name(), problem.structure());

    let baseline = BaselineSolver.solve(&mut problem)?;
    validate("baseline", &problem, &baseline)?;
    report.add_solution("baseline", &baseline);

    if matches!(args.problem, ProblemKind::Bipartite { .. }) {
        let exact = ExactBipartiteMatcher.solve(&mut problem)?;
        validate("kuhn", &problem, &exact)?;
        report.add_solution("kuhn", &exact);
    }

    let termination = Combinator::new(
        TimeBudget::starting_now(Duration::from_secs(args.time_limit)),
        OsSignal::install()?,
    );
    let mut local_search = LocalSearch::new(termination);
    let outcome = local_search.solve(&mut problem)?;
    if outcome.stopped_early {
        warn!(
            "Local search was stopped at neighbourhood size {}; the certificate is degraded",
            outcome.num_steps
        );
    }
    for checkpoint in &outcome.checkpoints {
        validate("localsearch", &problem, checkpoint)?;
        report.add_solution("localsearch", checkpoint);
    }
    report.set_local_search_steps(outcome.num_steps);

    if args.log_statistics {
        problem.log_statistics();
        local_search.log_statistics();
        log_statistic_postfix();
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &report)?;
    writeln!(stdout)?;

    Ok(())
}

fn validate(
    algorithm: &'static str,
    problem: &MatroidProblem,
    solution: &ApproximationSolution,
) -> MatroidSolverResult<()> {
    validation::validate(problem.structure(), &solution.indices())
        .map_err(|source| MatroidSolverError::invalid_solution(algorithm, source))
}
