use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use roadflow::{
    build_road_network, max_flow, Algorithm, Dinitz, EdmondsKarp, Error, FlowNetwork,
    FordFulkerson, MaxFlow, RandomCapacity, RoadSegment,
};

fn diamond() -> FlowNetwork<&'static str, i32> {
    FlowNetwork::from_arcs([
        ("s", "a", 3),
        ("s", "b", 2),
        ("a", "t", 2),
        ("b", "t", 3),
        ("a", "b", 1),
    ])
    .unwrap()
}

fn random_network(seed: u64, nodes: u32, arcs: usize) -> FlowNetwork<u32, i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut network = FlowNetwork::new();
    for n in 0..nodes {
        network.add_node(n);
    }
    for _ in 0..arcs {
        let tail = rng.gen_range(0..nodes);
        let head = rng.gen_range(0..nodes);
        if tail != head {
            network.add_arc(tail, head, rng.gen_range(0..=20)).unwrap();
        }
    }
    network
}

fn solve<M: MaxFlow>(mut solver: M) -> (M::Amount, M) {
    let value = solver.compute_max_flow().unwrap();
    (value, solver)
}

#[test]
fn diamond_max_flow() {
    for algo in Algorithm::ALL {
        let (value, network) = max_flow(diamond(), "s", "t", algo).unwrap();

        // Every s-t cut has capacity 5: s-a-t (2), s-b-t (2) and s-a-b-t (1).
        assert_eq!(value, 5, "{algo}");
        assert_eq!(network.flow(&"a", &"b"), 1, "{algo}");
        assert!(network.check(&"s", &"t").is_ok());
    }
}

#[test]
fn disconnected_source_and_sink() {
    let network = FlowNetwork::from_arcs([(1, 2, 4), (2, 1, 4), (3, 4, 4), (4, 3, 4)]).unwrap();
    for algo in Algorithm::ALL {
        let (value, network) = max_flow(network.clone(), 1, 4, algo).unwrap();
        assert_eq!(value, 0, "{algo}");
        assert_eq!(network.flow_path(&1, &4), Ok(None));

        let cut = network.min_cut(&1).unwrap();
        assert_eq!(cut.capacity, 0);
        assert!(cut.arcs.is_empty());
    }
}

#[test]
fn single_arc_in_one_augmentation() {
    let network = FlowNetwork::from_arcs([('s', 't', 10)]).unwrap();

    let (value, dinitz) = solve(Dinitz::new(network.clone(), 's', 't').unwrap());
    assert_eq!((value, dinitz.stats().augmentations), (10, 1));

    let (value, ek) = solve(EdmondsKarp::new(network.clone(), 's', 't').unwrap());
    assert_eq!((value, ek.stats().augmentations), (10, 1));

    let (value, ff) = solve(FordFulkerson::new(network, 's', 't').unwrap());
    assert_eq!((value, ff.stats().augmentations), (10, 1));
}

#[test]
fn endpoints_are_validated_before_solving() {
    let network = diamond();
    assert_eq!(
        Dinitz::new(network.clone(), "s", "x").unwrap_err(),
        Error::MissingNode("\"x\"".into())
    );
    assert_eq!(
        EdmondsKarp::new(network.clone(), "y", "t").unwrap_err(),
        Error::MissingNode("\"y\"".into())
    );
    assert_eq!(
        FordFulkerson::new(network.clone(), "t", "t").unwrap_err(),
        Error::SourceIsSink
    );
    assert!(network.positive_flows().is_empty());
}

#[test]
fn algorithms_agree_on_random_networks() {
    for seed in 0..40 {
        let network = random_network(seed, 30, 120);
        let (dinitz, d) = solve(Dinitz::new(network.clone(), 0, 29).unwrap());
        let (edmonds_karp, e) = solve(EdmondsKarp::new(network.clone(), 0, 29).unwrap());
        let (ford_fulkerson, f) = solve(FordFulkerson::new(network, 0, 29).unwrap());

        assert_eq!(dinitz, edmonds_karp, "seed {seed}");
        assert_eq!(dinitz, ford_fulkerson, "seed {seed}");

        for network in [d.network(), e.network(), f.network()] {
            assert!(network.check(&0, &29).is_ok(), "seed {seed}");
            assert_eq!(network.flow_value(&0), Ok(dinitz), "seed {seed}");
            assert_eq!(network.min_cut(&0).unwrap().capacity, dinitz, "seed {seed}");
        }
    }
}

#[test]
fn flows_respect_capacities_and_antisymmetry() {
    for seed in 100..120 {
        let (_, dinitz) = solve(Dinitz::new(random_network(seed, 20, 80), 0, 19).unwrap());
        let network = dinitz.network();

        for tail in network.nodes() {
            for head in network.neighbors(&tail).unwrap() {
                let flow = network.flow(&tail, &head);
                assert_eq!(flow, -network.flow(&head, &tail));
                assert!(flow <= network.capacity(&tail, &head));
                assert!(network.residual_capacity(&tail, &head) >= 0);
            }
        }

        for node in network.nodes().filter(|&n| n != 0 && n != 19) {
            let outflow: i64 = network
                .positive_flows()
                .iter()
                .filter(|((tail, _), _)| *tail == node)
                .map(|(_, flow)| flow)
                .sum();
            let inflow: i64 = network
                .positive_flows()
                .iter()
                .filter(|((_, head), _)| *head == node)
                .map(|(_, flow)| flow)
                .sum();
            assert_eq!(inflow, outflow, "seed {seed}, node {node}");
        }
    }
}

#[test]
fn recomputing_a_maximal_flow_adds_nothing() {
    for seed in 0..10 {
        let mut solvers: Vec<Box<dyn MaxFlow<NodeId = u32, Amount = i64>>> = vec![
            Box::new(Dinitz::new(random_network(seed, 15, 60), 0, 14).unwrap()),
            Box::new(EdmondsKarp::new(random_network(seed, 15, 60), 0, 14).unwrap()),
            Box::new(FordFulkerson::new(random_network(seed, 15, 60), 0, 14).unwrap()),
        ];
        for solver in &mut solvers {
            let value = solver.compute_max_flow().unwrap();
            let flows = solver.network().positive_flows();
            let stats = solver.stats();

            assert_eq!(solver.compute_max_flow(), Ok(0));
            assert_eq!(solver.network().positive_flows(), flows);
            assert_eq!(solver.stats().augmentations, stats.augmentations);
            assert_eq!(solver.flow_value(), Ok(value));
        }
    }
}

#[test]
fn flow_path_follows_positive_flow() {
    let (value, network) = max_flow(diamond(), "s", "t", Algorithm::Dinitz).unwrap();
    assert_eq!(value, 5);

    let path = network.flow_path(&"s", &"t").unwrap().unwrap();
    assert_eq!(path.first(), Some(&"s"));
    assert_eq!(path.last(), Some(&"t"));
    assert!(path.windows(2).all(|w| network.flow(&w[0], &w[1]) > 0));

    let records = network.flow_records();
    assert_eq!(records.len(), 5);
    assert!(records.iter().all(|r| r.flow > 0));
}

#[test]
fn reset_network_can_be_solved_again() {
    let (value, mut network) = max_flow(diamond(), "s", "t", Algorithm::FordFulkerson).unwrap();
    network.reset();
    assert_eq!(network.flow_value(&"s"), Ok(0));

    let (again, _) = max_flow(network, "s", "t", Algorithm::EdmondsKarp).unwrap();
    assert_eq!(again, value);
}

#[test]
fn road_network_between_two_intersections() {
    // A ring road with a single shortcut through the middle.
    let segments = [
        RoadSegment::new(10u64, 11),
        RoadSegment::new(11, 12),
        RoadSegment::new(12, 13),
        RoadSegment::new(13, 10),
        RoadSegment::new(10, 12),
    ];
    let network =
        build_road_network(segments, &mut RandomCapacity::<i64>::seeded(2024)).unwrap();
    assert_eq!(network.arc_count(), 10);

    let out_capacity: i64 = [11, 12, 13].iter().map(|n| network.capacity(&10, n)).sum();
    let values: Vec<i64> = Algorithm::ALL
        .iter()
        .map(|&algo| max_flow(network.clone(), 10, 12, algo).unwrap().0)
        .collect();

    assert!(values.iter().all(|&v| v == values[0]));
    assert!(values[0] > 0 && values[0] <= out_capacity);
}
