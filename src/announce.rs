//! Attributes a rant to a chat user, e.g. `<@U123> bellows:`.

use crate::random::RandomSource;

/// Ways of saying "says"
pub const SAYNONYMS: [&str; 18] = [
    "says",
    "intones",
    "announces",
    "conveys",
    "expresses",
    "speaks",
    "gabs",
    "flaps",
    "orates",
    "puts forth",
    "makes known",
    "yaks",
    "verbalizes",
    "utters",
    "opines",
    "recites",
    "remarks",
    "communicates",
];

/// Prefix `rant` with a mention of `user` and a random verb
pub fn announce<S: RandomSource>(user: &str, rant: &str, mut source: S) -> String {
    let verb = SAYNONYMS[source.pick(SAYNONYMS.len())];
    format!("<@{}> {}:\n {}", user, verb, rant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_announce_format() {
        let out = announce("U42", "HI!!! 😤 ", StdRng::seed_from_u64(0));

        assert!(out.starts_with("<@U42> "));
        assert!(out.ends_with(":\n HI!!! 😤 "));

        let verb = out
            .strip_prefix("<@U42> ")
            .and_then(|rest| rest.split(':').next())
            .unwrap();
        assert!(SAYNONYMS.contains(&verb));
    }

    #[test]
    fn test_verbs_vary() {
        let mut rng = StdRng::seed_from_u64(8);
        let verbs: std::collections::HashSet<String> = (0..200)
            .map(|_| announce("u", "", &mut rng))
            .collect();
        assert!(verbs.len() > 1);
    }
}
