//! Example: solve two textbook knapsack instances and print the chosen items.
//!
//! Run with:
//! `cargo run --example knapsack`

use knapsack_dp::{solve_knapsack, Item, KnapsackSolver, KnapsackTable};

fn main() {
    let instances: [(&str, Vec<Item>, i64); 2] = [
        (
            "four items",
            vec![Item::new(2, 3), Item::new(3, 4), Item::new(4, 5), Item::new(5, 6)],
            5,
        ),
        (
            "three items",
            vec![Item::new(10, 60), Item::new(20, 100), Item::new(30, 120)],
            50,
        ),
    ];

    let solver = KnapsackSolver::builder().block_size(2).build();
    for (name, items, capacity) in &instances {
        println!("{name} (capacity {capacity}):");
        match solve_knapsack(items, *capacity) {
            Ok(best) => println!("  best value: {best}"),
            Err(err) => {
                println!("  rejected: {err}");
                continue;
            }
        }

        if let Ok(sol) = solver.solve_with_selection(items, *capacity) {
            println!("  selection (weight {}):", sol.weight);
            for &k in &sol.selected {
                let it = items[k];
                let ratio = it
                    .value_per_weight()
                    .map_or_else(|| "-".to_string(), |r| format!("{r:.2}"));
                println!("    item {k}: weight={} value={} value/weight={ratio}", it.weight, it.value);
            }
        }

        if let Ok(table) = KnapsackTable::build(items, *capacity) {
            for i in 0..table.rows() {
                if let Some(row) = table.row(i) {
                    println!("  row {i}: {row:?}");
                }
            }
        }
        println!();
    }

    if let Err(err) = solve_knapsack(&[Item::new(1, 1)], -1) {
        println!("negative capacity: {err}");
    }
}
