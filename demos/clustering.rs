//! Fuzzy C-Means on a simple 2D dataset.

use fcmeans::{Fcm, FcmFit};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    // One initial center per expected cluster, deliberately off-target.
    let initial_centers = vec![vec![1.0, 1.0], vec![4.0, 4.0], vec![9.0, 1.0]];

    let fcm = Fcm::new(initial_centers, 2.0)
        .unwrap()
        .with_tolerance(1e-4)
        .with_max_iter(100);
    fcm.verify(&data).unwrap();

    let mut fit = FcmFit::new();
    fcm.process(&data, &mut fit).unwrap();

    println!("=== Fuzzy C-Means (c=3, m=2.0) ===");
    for (i, row) in fit.membership.iter().enumerate() {
        let memberships: Vec<String> = row.iter().map(|m| format!("{m:.3}")).collect();
        println!(
            "  point {:2} ({:5.1}, {:5.1}) => [{}]",
            i,
            data[i][0],
            data[i][1],
            memberships.join(", ")
        );
    }

    println!("\nHard clusters:");
    for (j, members) in fit.clusters.iter().enumerate() {
        println!("  cluster {} (center {:?}): {:?}", j, fit.centers[j], members);
    }

    println!(
        "\n{} iterations in {:.3} ms (avg {:.3} ms), extraction {:.3} ms",
        fit.iterations,
        fit.total_iteration_time_ms,
        fit.average_iteration_time_ms,
        fit.classify_time_ms
    );
}
