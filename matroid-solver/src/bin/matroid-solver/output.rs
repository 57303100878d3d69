use matroid_solver::core::problem::InstanceStructure;
use matroid_solver::core::ApproximationSolution;
use serde::Serialize;

/// The JSON document printed on standard output after all solvers have run.
#[derive(Debug, Serialize)]
pub(crate) struct Report {
    problem_name: &'static str,
    /// Every edge as the list of its endpoints.
    graph: Vec<Vec<usize>>,
    solutions: Vec<SolutionRecord>,
    local_search_steps: usize,
}

#[derive(Debug, Serialize)]
struct SolutionRecord {
    algorithm: &'static str,
    #[serde(rename = "approxRatio")]
    approx_ratio: f64,
    certificate: String,
    solution: Vec<usize>,
}

impl Report {
    pub(crate) fn new(problem_name: &'static str, structure: &InstanceStructure) -> Report {
        let graph = match structure {
            InstanceStructure::Matching { edges, .. } => edges.clone(),
            InstanceStructure::DirectedGraph { edges, .. } => edges
                .iter()
                .map(|&(tail, head)| vec![tail, head])
                .collect(),
            InstanceStructure::Unstructured => vec![],
        };

        Report {
            problem_name,
            graph,
            solutions: vec![],
            local_search_steps: 0,
        }
    }

    pub(crate) fn add_solution(
        &mut self,
        algorithm: &'static str,
        solution: &ApproximationSolution,
    ) {
        self.solutions.push(SolutionRecord {
            algorithm,
            approx_ratio: solution.approximation_ratio(),
            certificate: solution.ratio().kind().to_string(),
            solution: solution.indices(),
        });
    }

    pub(crate) fn set_local_search_steps(&mut self, steps: usize) {
        self.local_search_steps = steps;
    }
}
