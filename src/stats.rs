//! Pure statistics over blog collections.
//!
//! Every function here is a single-pass reduction over a borrowed slice of
//! [`Blog`] records: no state is kept between calls, nothing is mutated, and
//! concurrent callers need no synchronization. The only failure mode in the
//! module is [`StatsError::EmptyList`], raised by [`favorite_blog`] when
//! asked for the favorite of an empty collection; the grouping functions
//! return a `None`-author sentinel aggregate for empty input instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::blog::Blog;

/// Errors that can occur during statistics computation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StatsError {
    #[error("blog list is empty")]
    EmptyList,
}

/// The author with the most blog entries, and how many.
///
/// `author` is `None` when the input collection is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBlogCount {
    pub author: Option<String>,
    pub blogs: u64,
}

/// The author with the most accumulated likes, and their total.
///
/// `author` is `None` when the input collection is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: Option<String>,
    pub likes: u64,
}

/// Always returns 1. Used to verify call wiring, not to compute anything.
pub fn dummy(_blogs: &[Blog]) -> u64 {
    1
}

/// Sum of likes across all records. Zero for an empty collection.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The record with the strictly greatest like count.
///
/// The running maximum is replaced only on a strictly greater count, so the
/// first record in input order wins ties.
pub fn favorite_blog(blogs: &[Blog]) -> Result<&Blog, StatsError> {
    let mut iter = blogs.iter();
    let Some(first) = iter.next() else {
        return Err(StatsError::EmptyList);
    };

    Ok(iter.fold(first, |favorite, blog| {
        if blog.likes > favorite.likes {
            blog
        } else {
            favorite
        }
    }))
}

/// The author with the most blog entries.
///
/// Authors are grouped by exact name (case-sensitive, no normalization); an
/// absent author is its own group. Ties go to the first author to reach the
/// winning count, scanning groups in first-occurrence order.
pub fn most_blogs(blogs: &[Blog]) -> AuthorBlogCount {
    let tallies = tally_by_author(blogs, |_| 1);
    let (author, count) = running_best(&tallies);

    AuthorBlogCount {
        author: author.map(str::to_owned),
        blogs: count,
    }
}

/// The author with the most accumulated likes across their entries.
///
/// Grouping and tie-break policy match [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> AuthorLikes {
    let tallies = tally_by_author(blogs, |blog| blog.likes);
    let (author, likes) = running_best(&tallies);

    AuthorLikes {
        author: author.map(str::to_owned),
        likes,
    }
}

/// Accumulate a per-author tally in first-occurrence order.
///
/// An explicit ordered list is used instead of a hash map so the tie-break
/// scan below never depends on map iteration order.
fn tally_by_author<'a>(
    blogs: &'a [Blog],
    weight: impl Fn(&Blog) -> u64,
) -> Vec<(Option<&'a str>, u64)> {
    let mut tallies: Vec<(Option<&str>, u64)> = Vec::new();

    for blog in blogs {
        let key = blog.author.as_deref();
        match tallies.iter_mut().find(|(author, _)| *author == key) {
            Some((_, tally)) => *tally += weight(blog),
            None => tallies.push((key, weight(blog))),
        }
    }

    tallies
}

/// Pick the group with the greatest tally, replacing the incumbent only on
/// strict improvement. Starts from a zero tally with no author, so an empty
/// tally list yields the `(None, 0)` sentinel.
fn running_best<'a>(tallies: &[(Option<&'a str>, u64)]) -> (Option<&'a str>, u64) {
    let mut best: (Option<&str>, u64) = (None, 0);

    for (author, tally) in tallies {
        if *tally > best.1 {
            best = (*author, *tally);
        }
    }

    best
}
