//! Property-based tests for the blog statistics functions.
//!
//! These tests check each function against an independent reference
//! reduction over randomly generated collections.

use proptest::prelude::*;

use bloglist::blog::Blog;
use bloglist::stats::{self, StatsError};

fn blog_strategy() -> impl Strategy<Value = Blog> {
    // A small author pool so generated collections actually share authors.
    (
        0u32..10_000,
        prop::option::of(prop::sample::select(vec![
            "Alice", "Bob", "Carol", "Dijkstra",
        ])),
        0u64..1_000,
    )
        .prop_map(|(n, author, likes)| {
            let mut blog = Blog::new(
                format!("id-{n}"),
                format!("Blog {n}"),
                format!("http://example.com/{n}"),
            )
            .with_likes(likes);
            blog.author = author.map(str::to_owned);
            blog
        })
}

fn blogs_strategy() -> impl Strategy<Value = Vec<Blog>> {
    prop::collection::vec(blog_strategy(), 0..32)
}

/// Reference per-author reduction: first-occurrence order, summed weights.
fn reference_tallies(blogs: &[Blog], weight: impl Fn(&Blog) -> u64) -> Vec<(Option<String>, u64)> {
    let mut tallies: Vec<(Option<String>, u64)> = Vec::new();
    for blog in blogs {
        let key = blog.author.clone();
        match tallies.iter_mut().find(|(author, _)| *author == key) {
            Some((_, tally)) => *tally += weight(blog),
            None => tallies.push((key, weight(blog))),
        }
    }
    tallies
}

/// Reference winner: first group to reach the eventual maximum, with zero
/// tallies never winning.
fn reference_best(tallies: Vec<(Option<String>, u64)>) -> (Option<String>, u64) {
    let mut best: (Option<String>, u64) = (None, 0);
    for (author, tally) in tallies {
        if tally > best.1 {
            best = (author, tally);
        }
    }
    best
}

proptest! {
    #[test]
    fn total_likes_equals_the_sum(blogs in blogs_strategy()) {
        let expected: u64 = blogs.iter().map(|b| b.likes).sum();
        prop_assert_eq!(stats::total_likes(&blogs), expected);
    }

    #[test]
    fn dummy_is_constant(blogs in blogs_strategy()) {
        prop_assert_eq!(stats::dummy(&blogs), 1);
    }

    #[test]
    fn favorite_blog_fails_only_on_empty_input(blogs in blogs_strategy()) {
        match stats::favorite_blog(&blogs) {
            Ok(_) => prop_assert!(!blogs.is_empty()),
            Err(StatsError::EmptyList) => prop_assert!(blogs.is_empty()),
        }
    }

    #[test]
    fn favorite_blog_is_the_first_with_maximum_likes(blogs in blogs_strategy()) {
        prop_assume!(!blogs.is_empty());

        let favorite = stats::favorite_blog(&blogs).ok();
        let max_likes = blogs.iter().map(|b| b.likes).max().unwrap_or(0);

        prop_assert_eq!(favorite.map(|b| b.likes), Some(max_likes));

        let first_with_max = blogs.iter().find(|b| b.likes == max_likes);
        prop_assert_eq!(favorite, first_with_max);
    }

    #[test]
    fn most_blogs_matches_the_reference_reduction(blogs in blogs_strategy()) {
        let result = stats::most_blogs(&blogs);
        let (author, count) = reference_best(reference_tallies(&blogs, |_| 1));

        prop_assert_eq!(result.author, author);
        prop_assert_eq!(result.blogs, count);
    }

    #[test]
    fn most_likes_matches_the_reference_reduction(blogs in blogs_strategy()) {
        let result = stats::most_likes(&blogs);
        let (author, likes) = reference_best(reference_tallies(&blogs, |b| b.likes));

        prop_assert_eq!(result.author, author);
        prop_assert_eq!(result.likes, likes);
    }

    #[test]
    fn grouping_functions_never_fail_and_agree_on_the_sentinel(blogs in blogs_strategy()) {
        let count = stats::most_blogs(&blogs);
        let likes = stats::most_likes(&blogs);

        if blogs.is_empty() {
            prop_assert_eq!(count.author, None);
            prop_assert_eq!(count.blogs, 0);
            prop_assert_eq!(likes.author, None);
            prop_assert_eq!(likes.likes, 0);
        } else {
            // Every record belongs to some author group (possibly the
            // absent-author group), so a non-empty collection always has a
            // winning count. The likes winner may still be the sentinel when
            // every entry has zero likes.
            prop_assert!(count.blogs > 0);
            prop_assert!(likes.likes <= stats::total_likes(&blogs));
        }
    }
}
