//! Random content generation for seeded entities.
//!
//! Every generated value satisfies the downstream services' length and
//! format constraints. Generation is deterministic for a given RNG stream,
//! so a fixed seed reproduces a run's content exactly.

use flocknet_types::AccountFields;
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Upper bound on tweet body length, in characters.
pub const MAX_TWEET_CHARS: usize = 280;

/// Length of generated passwords.
const PASSWORD_CHARS: usize = 16;

const ADJECTIVES: &[&str] = &[
    "amber", "brisk", "cedar", "dusty", "early", "fuzzy", "gilded", "hazy", "iron", "jolly",
    "keen", "lunar", "mossy", "noisy", "ochre", "pale", "quiet", "rusty", "sable", "tidal",
    "umber", "vivid", "wired", "zesty",
];

const NOUNS: &[&str] = &[
    "finch", "heron", "kestrel", "lark", "magpie", "osprey", "petrel", "quail", "raven",
    "sparrow", "swift", "tern", "wren", "crane", "dove", "egret", "gull", "ibis", "jay", "owl",
];

const DOMAINS: &[&str] = &["flock.dev", "example.net", "birdmail.io"];

const WORDS: &[&str] = &[
    "just", "saw", "the", "most", "amazing", "sunrise", "over", "bay", "coffee", "first",
    "then", "world", "shipping", "new", "build", "today", "tests", "green", "finally",
    "weekend", "plans", "cancelled", "again", "reading", "about", "distributed", "systems",
    "cannot", "stop", "thinking", "this", "city", "never", "sleeps", "neither", "do",
    "deploys", "hot", "take", "monoliths", "are", "fine", "actually", "rain", "all", "week",
    "send", "help",
];

const HASHTAGS: &[&str] = &[
    "#buildinpublic",
    "#rustlang",
    "#birdwatching",
    "#devlife",
    "#nofilter",
    "#tgif",
];

/// Generate the field values for one account-creation attempt.
///
/// Handles are lowercase `adjective + noun + 4 digits`; the email reuses
/// the handle so generated accounts stay easy to spot in a shared
/// deployment.
pub fn account_fields(rng: &mut impl Rng) -> AccountFields {
    let adjective = pick(rng, ADJECTIVES);
    let noun = pick(rng, NOUNS);
    let username = format!("{}{}{:04}", adjective, noun, rng.gen_range(0..10_000));
    let email = format!("{}@{}", username, pick(rng, DOMAINS));
    let display_name = format!("{} {}", capitalize(adjective), capitalize(noun));
    let password = password(rng);

    AccountFields {
        username,
        email,
        display_name,
        password,
    }
}

/// Generate a tweet body: 1..=280 characters, non-empty after trimming.
pub fn tweet_body(rng: &mut impl Rng) -> String {
    let word_count = rng.gen_range(3..=12);
    let mut body = String::new();
    for i in 0..word_count {
        if i > 0 {
            body.push(' ');
        }
        body.push_str(pick(rng, WORDS));
    }
    if rng.gen_bool(0.3) {
        body.push(' ');
        body.push_str(pick(rng, HASHTAGS));
    }
    truncate_chars(body, MAX_TWEET_CHARS)
}

fn pick<'a>(rng: &mut impl Rng, table: &'a [&'a str]) -> &'a str {
    table[rng.gen_range(0..table.len())]
}

fn password(rng: &mut impl Rng) -> String {
    (0..PASSWORD_CHARS)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn truncate_chars(body: String, max: usize) -> String {
    if body.chars().count() <= max {
        body
    } else {
        body.chars().take(max).collect()
    }
}
