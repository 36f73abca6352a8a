//! Random blog post generators for seeding stores in tests.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::domain::{Author, NewBlogPost};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Barbara", "Brian", "Claude", "Dennis", "Donald", "Edsger", "Frances", "Grace",
    "Grady", "John", "Katherine", "Ken", "Leslie", "Linus", "Margaret", "Niklaus", "Radia",
    "Shafi",
];

const LAST_NAMES: &[&str] = &[
    "Allen", "Booch", "Dijkstra", "Goldwasser", "Hamilton", "Hopper", "Johnson", "Kernighan",
    "Knuth", "Lamport", "Liskov", "Lovelace", "McCarthy", "Perlman", "Ritchie", "Shannon",
    "Thompson", "Torvalds", "Turing", "Wirth",
];

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "commodo", "consequat", "duis", "aute", "irure", "reprehenderit", "voluptate",
];

fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("lorem")
}

/// A capitalized sentence of 4-10 words ending in a period.
pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let len = rng.gen_range(4..=10);
    let words: Vec<&str> = (0..len).map(|_| pick(rng, WORDS)).collect();
    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

/// A few paragraphs of sentences separated by blank lines.
pub fn text<R: Rng>(rng: &mut R) -> String {
    let paragraphs = rng.gen_range(1..=3);
    (0..paragraphs)
        .map(|_| {
            let sentences = rng.gen_range(2..=5);
            (0..sentences)
                .map(|_| sentence(rng))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Generate one random post input.
pub fn generate_post() -> NewBlogPost {
    let mut rng = rand::thread_rng();
    generate_post_with(&mut rng)
}

pub fn generate_post_with<R: Rng>(rng: &mut R) -> NewBlogPost {
    let author = Author::new(pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES));
    NewBlogPost::new(author, sentence(rng), text(rng))
}

/// Generate `n` random post inputs.
pub fn generate_posts(n: usize) -> Vec<NewBlogPost> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| generate_post_with(&mut rng)).collect()
}
