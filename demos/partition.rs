//! Partitioning a stream of outcomes with different drivers
//!
//! Run with: cargo run --example partition --features rayon

use routine::aggregate::{
    aggregate, aggregate_split, mapping, monoid, par_aggregate, to_btree_set, to_vec,
};
use routine::either::partition;
use routine::monoid::Sum;
use routine::{grouping_to, Either};

#[derive(Debug, Clone)]
enum Outcome {
    Delivered { parcel: u32, grams: u64 },
    Returned { parcel: u32, reason: &'static str },
}

fn classify(outcome: Outcome) -> Either<(u32, &'static str), (u32, u64)> {
    match outcome {
        Outcome::Returned { parcel, reason } => Either::left((parcel, reason)),
        Outcome::Delivered { parcel, grams } => Either::right((parcel, grams)),
    }
}

fn outcomes() -> Vec<Outcome> {
    (1..=20)
        .map(|parcel| {
            if parcel % 5 == 0 {
                Outcome::Returned {
                    parcel,
                    reason: if parcel % 10 == 0 { "refused" } else { "no address" },
                }
            } else {
                Outcome::Delivered {
                    parcel,
                    grams: u64::from(parcel) * 150,
                }
            }
        })
        .collect()
}

fn main() {
    let classified: Vec<_> = outcomes().into_iter().map(classify).collect();

    // Two plain lists
    let lists = partition(classified.clone());
    println!("returned: {:?}", lists.left());

    // Distinct reasons on the left, total weight on the right
    let summary = grouping_to(
        mapping(|(_, reason): (u32, &'static str)| reason, to_btree_set()),
        mapping(|(_, grams): (u32, u64)| Sum(grams), monoid()),
    );

    let sequential = aggregate(classified.clone(), &summary);
    let chunked = aggregate_split(classified.clone(), 3, &summary);
    let parallel = par_aggregate(classified, &summary);

    assert_eq!(sequential, chunked);
    assert_eq!(sequential, parallel);

    println!(
        "reasons: {:?}, delivered weight: {}g",
        sequential.left(),
        sequential.right().0
    );

    let to_lists = grouping_to(to_vec::<(u32, &str)>(), to_vec::<(u32, u64)>());
    let again = aggregate(outcomes().into_iter().map(classify), &to_lists);
    assert_eq!(again, lists);
}
