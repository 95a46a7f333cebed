//! Behavioural tests for deriving edge weights with rstest-bdd.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tour_core::{
    AttractivenessModel, EdgeRecord, FactorTable, GraphError, Landmark, TourGraph,
};

#[derive(Debug, Default)]
struct ModelWorld {
    records: RefCell<Vec<EdgeRecord>>,
    interest: RefCell<FactorTable>,
    load: RefCell<FactorTable>,
    outcome: RefCell<Option<Result<TourGraph, GraphError>>>,
}

impl ModelWorld {
    fn outcome(&self) -> Result<TourGraph, GraphError> {
        match self.outcome.borrow().as_ref() {
            Some(outcome) => outcome.clone(),
            None => panic!("graph should be built before assertions"),
        }
    }
}

#[fixture]
fn world() -> ModelWorld {
    ModelWorld::default()
}

#[given("a record from {from} to {to} with base score {score} and travel time {time}")]
fn given_record(world: &ModelWorld, from: String, to: String, score: f64, time: f64) {
    world
        .records
        .borrow_mut()
        .push(EdgeRecord::new(from, to, score, time));
}

#[given("the interest in {landmark} is {value}")]
fn given_interest(world: &ModelWorld, landmark: String, value: f64) {
    world
        .interest
        .borrow_mut()
        .insert(Landmark::new(landmark), value);
}

#[given("the load at {landmark} is {value}")]
fn given_load(world: &ModelWorld, landmark: String, value: f64) {
    world.load.borrow_mut().insert(Landmark::new(landmark), value);
}

#[when("the graph is built")]
fn when_graph_built(world: &ModelWorld) {
    let model = AttractivenessModel::new(world.interest.borrow().clone(), world.load.borrow().clone());
    let outcome = model.and_then(|model| TourGraph::build(&world.records.borrow(), &model));
    world.outcome.replace(Some(outcome));
}

#[then("the edge from {from} to {to} scores {score} and takes {time}")]
fn then_edge_weight(world: &ModelWorld, from: String, to: String, score: f64, time: f64) {
    let graph = match world.outcome() {
        Ok(graph) => graph,
        Err(err) => panic!("expected graph, found {err}"),
    };
    let Some(weight) = graph.weight(&from, &to) else {
        panic!("expected an edge from {from} to {to}");
    };
    assert!((weight.score - score).abs() < 1e-9);
    assert!((weight.time - time).abs() < 1e-9);
}

#[then("graph construction fails with a non-finite edge error")]
fn then_non_finite(world: &ModelWorld) {
    assert!(matches!(
        world.outcome(),
        Err(GraphError::NonFiniteEdge { .. })
    ));
}

#[scenario(path = "tests/features/attractiveness.feature", index = 0)]
fn full_interest(world: ModelWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/attractiveness.feature", index = 1)]
fn missing_interest(world: ModelWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/attractiveness.feature", index = 2)]
fn load_discount(world: ModelWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/attractiveness.feature", index = 3)]
fn non_finite_edge(world: ModelWorld) {
    let _ = world;
}
