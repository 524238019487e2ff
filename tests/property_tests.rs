//! Property-based tests for exploration and plan generation.
//!
//! These tests use proptest to verify the explorer's guarantees -
//! determinism, shortest paths, filter soundness, termination - across
//! many generated filter bounds.

use proptest::prelude::*;
use std::collections::HashMap;
use waypoint::builder::{MachineBuilder, TransitionBuilder};
use waypoint::core::{Configuration, Context, MachineDefinition};
use waypoint::explore::{ConfigFilter, Explorer};
use waypoint::{context, plan};

/// Cart machine whose CANCEL and CONTINUE_SHOPPING transitions bump
/// counters, making the unfiltered configuration space unbounded.
fn counting_cart_machine() -> MachineDefinition {
    MachineBuilder::new()
        .initial("shopping")
        .context(context! { ordersCompleted: 0, ordersCanceled: 0 })
        .state("shopping")
        .state("cart")
        .state("ordered")
        .on("shopping", "ADD_TO_CART", "cart")
        .on("cart", "PLACE_ORDER", "ordered")
        .transition(
            TransitionBuilder::new()
                .from("cart")
                .on("CANCEL")
                .to("shopping")
                .update(|ctx: &Context| ctx.increment("ordersCanceled")),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .from("ordered")
                .on("CONTINUE_SHOPPING")
                .to("shopping")
                .update(|ctx: &Context| ctx.increment("ordersCompleted")),
        )
        .unwrap()
        .build()
        .unwrap()
}

/// Machine with a single counter-bumping self-loop and one exit.
fn looping_machine() -> MachineDefinition {
    MachineBuilder::new()
        .initial("looping")
        .context(context! { n: 0 })
        .state("looping")
        .state("done")
        .transition(
            TransitionBuilder::new()
                .from("looping")
                .on("SPIN")
                .to("looping")
                .update(|ctx: &Context| ctx.increment("n")),
        )
        .unwrap()
        .on("looping", "LEAVE", "done")
        .build()
        .unwrap()
}

fn bounded_filter(completed: i64, canceled: i64) -> ConfigFilter {
    ConfigFilter::new(move |config: &Configuration| {
        config.context().get("ordersCompleted") <= completed
            && config.context().get("ordersCanceled") <= canceled
    })
}

/// Independent brute-force search: the earliest depth at which each
/// canonical configuration appears, expanding only filter-accepted,
/// non-no-op successors - the same subgraph the explorer walks, found a
/// different way.
fn brute_force_depths(
    machine: &MachineDefinition,
    filter: &ConfigFilter,
    max_depth: usize,
) -> HashMap<String, usize> {
    let mut depths = HashMap::new();
    let mut level = vec![machine.initial_configuration()];
    depths.insert(machine.initial_configuration().canonical_key(), 0);

    for depth in 1..=max_depth {
        let mut next_level = Vec::new();
        for config in &level {
            for event in machine.events() {
                let candidate = machine.step(config, event);
                if candidate == *config || !filter.check(&candidate) {
                    continue;
                }
                let key = candidate.canonical_key();
                if !depths.contains_key(&key) {
                    depths.insert(key, depth);
                    next_level.push(candidate);
                }
            }
        }
        if next_level.is_empty() {
            break;
        }
        level = next_level;
    }

    depths
}

proptest! {
    #[test]
    fn exploration_is_deterministic(completed in 0i64..3, canceled in 0i64..3) {
        let machine = counting_cart_machine();

        let a = Explorer::new()
            .with_filter(bounded_filter(completed, canceled))
            .explore(&machine)
            .unwrap();
        let b = Explorer::new()
            .with_filter(bounded_filter(completed, canceled))
            .explore(&machine)
            .unwrap();

        prop_assert_eq!(a.len(), b.len());
        for ((ca, pa), (cb, pb)) in a.iter().zip(b.iter()) {
            prop_assert_eq!(ca, cb);
            prop_assert_eq!(pa.events(), pb.events());
        }
    }

    #[test]
    fn plans_are_stable_across_runs(completed in 0i64..3, canceled in 0i64..3) {
        let machine = counting_cart_machine();
        let explore = || {
            Explorer::new()
                .with_filter(bounded_filter(completed, canceled))
                .explore(&machine)
                .unwrap()
        };

        let first = plan::build(&explore());
        let second = plan::build(&explore());

        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            prop_assert_eq!(a.target(), b.target());
            prop_assert_eq!(a.description(), b.description());
        }
    }

    #[test]
    fn recorded_paths_are_shortest(completed in 0i64..3, canceled in 0i64..3) {
        let machine = counting_cart_machine();
        let filter = bounded_filter(completed, canceled);
        let space = Explorer::new()
            .with_filter(filter.clone())
            .explore(&machine)
            .unwrap();

        // Deep enough for every configuration of this model under the
        // widest generated filter.
        let depths = brute_force_depths(&machine, &filter, 32);

        for (config, path) in space.iter() {
            let depth = depths.get(&config.canonical_key());
            prop_assert_eq!(depth, Some(&path.len()));
        }
    }

    #[test]
    fn no_recorded_configuration_fails_the_filter(completed in 0i64..3, canceled in 0i64..3) {
        let machine = counting_cart_machine();
        let filter = bounded_filter(completed, canceled);
        let space = Explorer::new()
            .with_filter(filter.clone())
            .explore(&machine)
            .unwrap();

        for config in space.configurations() {
            prop_assert!(filter.check(config));
        }
    }

    #[test]
    fn self_loop_enumerates_exactly_the_counter_range(k in 0i64..8) {
        let machine = looping_machine();
        let space = Explorer::new()
            .filter(move |config: &Configuration| config.context().get("n") <= k)
            .explore(&machine)
            .unwrap();

        let mut counters: Vec<i64> = space
            .configurations()
            .filter(|c| c.state() == "looping")
            .map(|c| c.context().get("n"))
            .collect();
        counters.sort_unstable();

        let expected: Vec<i64> = (0..=k).collect();
        prop_assert_eq!(counters, expected);
    }

    #[test]
    fn paths_replay_through_the_engine(completed in 0i64..2, canceled in 0i64..2) {
        // Re-running every recorded path through the pure engine lands on
        // the recorded target: paths are internally consistent.
        let machine = counting_cart_machine();
        let space = Explorer::new()
            .with_filter(bounded_filter(completed, canceled))
            .explore(&machine)
            .unwrap();

        for (config, path) in space.iter() {
            let mut current = machine.initial_configuration();
            for event in path.events() {
                current = machine.step(&current, event);
            }
            prop_assert_eq!(&current, config);
            prop_assert_eq!(path.target(), config);
        }
    }
}
