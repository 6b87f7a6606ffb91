//! Built-in demonstration phrases.
use rand::Rng;

/// Famous quotes used by the demo subcommands when no corpus is given.
pub static PHRASES: [&str; 10] = [
    "Do or do not, there is no try.",
    "To be, or not to be, that is the question.",
    "The only thing we have to fear is fear itself.",
    "In the beginning, God created the heavens and the earth.",
    "How much wood would a woodchuck chuck if a woodchuck could chuck wood?",
    "A journey of a thousand miles begins with a single step.",
    "It was the best of times, it was the worst of times.",
    "Call me Ishmael.",
    "All happy families are alike; each unhappy family is unhappy in its own way.",
    "It was a bright cold day in April, and the clocks were striking thirteen.",
];

/// Pick one phrase at random.
pub fn pick<R: Rng>(rng: &mut R) -> &'static str {
    PHRASES[rng.gen_range(0..PHRASES.len())]
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{pick, PHRASES};

    #[test]
    fn picks_from_the_list() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let phrase = pick(&mut rng);
            assert!(PHRASES.contains(&phrase));
        }
    }

    #[test]
    fn same_seed_same_phrase() {
        let a = pick(&mut StdRng::seed_from_u64(42));
        let b = pick(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
