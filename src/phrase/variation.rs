use rand::Rng;

/// Picks one phrasing uniformly at random. An empty candidate list yields an
/// empty string; call sites always pass at least two templates.
pub fn pick(rng: &mut impl Rng, options: &[String]) -> String {
    if options.is_empty() {
        return String::new();
    }
    options[rng.gen_range(0..options.len())].clone()
}
