use aco_csp::colony::{ACOParameters, Colony};
use aco_csp::construct::AssignmentConstructor;
use aco_csp::csp::{AllDifferent, Problem, VarId, Variable};
use aco_csp::propagate::ForwardCheckingPropagator;
use aco_csp::rng::rng64;
use aco_csp::select::{default_heuristic, RouletteSelector, SmallestDomainSelector};

/// Demonstrates the engine on a tiny 4-queens-flavored CSP: four variables with domain
/// `{1..4}`, all pairwise different. Not a reference problem definition in its own right
/// (those live in sample-problem crates out of scope here) — just enough to drive the colony
/// loop end to end.
fn main() {
    let a = Variable::new("A", vec![1, 2, 3, 4]).unwrap();
    let b = Variable::new("B", vec![1, 2, 3, 4]).unwrap();
    let c = Variable::new("C", vec![1, 2, 3, 4]).unwrap();
    let d = Variable::new("D", vec![1, 2, 3, 4]).unwrap();
    let problem = Problem::new(
        vec![a, b, c, d],
        vec![Box::new(AllDifferent::new(vec![
            VarId(0),
            VarId(1),
            VarId(2),
            VarId(3),
        ]))],
    )
    .unwrap();

    let params = ACOParameters::defaults();
    let mut colony = Colony::create(&problem, params).expect("valid parameters and problem");
    let mut constructor = AssignmentConstructor::new(
        SmallestDomainSelector,
        RouletteSelector::new(rng64(42), default_heuristic),
        ForwardCheckingPropagator::new(&problem),
    );

    let max_cycles = 100;
    let result = colony
        .solve(&problem, &mut constructor, max_cycles)
        .expect("no invariant violation for a well-formed problem");

    if problem.is_solution(&result) {
        println!("solution found within {} cycles", max_cycles);
    } else {
        println!("budget exhausted; best assignment has size {}", result.size());
    }
    for (var, value) in result.iter() {
        println!("{} = {:?}", problem.variable(var).name(), value);
    }
}
