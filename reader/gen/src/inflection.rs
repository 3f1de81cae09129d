//! English noun singularization for entity names.
//!
//! Entity names are plural CamelCase identifiers such as `SecurityGroups` or
//! `DBInstances`. Only the last CamelCase word is singularized; everything in
//! front of it is kept verbatim.
//!
//! ## Rules
//!
//! The last word is checked against, in order:
//!
//! 1. Uncountable and invariant words (`series`, `news`, `dns`, ...) which are
//!    returned unchanged
//! 2. Singular words ending in `s` (`campus`, `redis`, ...), and their `-es`
//!    plurals
//! 3. Irregular plurals (`people` -> `person`, `data` -> `datum`, ...)
//! 4. Ordered suffix rules where the first match wins (`ies` -> `y`,
//!    `xes` -> `x`, `s` -> ``, ...). Singular endings (`-sis`, `-ius`,
//!    `-eus`, `-ss`) map to themselves before the bare `s` rule applies.
//!
//! Singularization is idempotent: singularizing its own output returns it
//! unchanged, and known singular words come back as they are. A singular
//! word ending in a bare `-us` or `-is` outside the table above reads like
//! a plural (`Menus`, `Taxis`) and loses its `s`.
//!
//! ## Examples
//!
//! ```
//! use reader_gen::inflection::singularize;
//!
//! assert_eq!(singularize("Instances"), "Instance");
//! assert_eq!(singularize("Policies"), "Policy");
//! assert_eq!(singularize("Addresses"), "Address");
//! assert_eq!(singularize("Address"), "Address");
//! ```

/// Words that have no distinct singular form, or that end in `s` while
/// already being singular.
const UNCOUNTABLE: &[&str] = &[
    "equipment", "information", "rice", "money", "species", "series", "fish", "sheep", "jeans",
    "police", "news", "dns", "bias", "canvas", "chaos", "corpus", "gas", "lens", "plus", "bonus",
    "census", "focus", "nexus", "atlas", "apparatus",
];

/// Singular words ending in `s` that the suffix rules would otherwise strip.
/// Their plural is the word plus `es`.
const SINGULAR_ENDING_IN_S: &[&str] = &[
    "abacus", "cactus", "campus", "chorus", "circus", "corpus", "exodus", "fungus", "impetus",
    "iris", "lotus", "minus", "onus", "opus", "prospectus", "redis", "sinus", "stimulus",
    "syllabus", "terminus", "thesaurus", "walrus",
];

/// Irregular `(singular, plural)` pairs, matched against the whole last word.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
    ("datum", "data"),
    ("medium", "media"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
];

/// Stems of the `-sis`/`-ses` family (`analysis`, `basis`, `thesis`, ...).
const SIS_STEMS: &[&str] = &[
    "analy", "ba", "diagno", "parenthe", "progno", "synop", "the",
];

/// Extra condition a suffix rule needs before it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Guard {
    /// Suffix match is enough.
    Any,
    /// The whole word must equal the plural form.
    WholeWord,
    /// The suffix must follow a consonant, or `qu` (`queries` -> `query`).
    AfterConsonant,
    /// The suffix must follow some character other than the given one.
    NotAfter(char),
}

/// One ordered rewrite: a word ending in `plural` ends in `singular` instead.
#[derive(Debug, Clone, Copy)]
struct SuffixRule {
    plural: &'static str,
    singular: &'static str,
    guard: Guard,
}

const fn rule(plural: &'static str, singular: &'static str, guard: Guard) -> SuffixRule {
    SuffixRule {
        plural,
        singular,
        guard,
    }
}

/// Suffix rules in priority order. Identity rules (`status` -> `status`)
/// stop lower priority rules from stripping a trailing `s`.
const RULES: &[SuffixRule] = &[
    rule("databases", "database", Guard::Any),
    rule("quizzes", "quiz", Guard::Any),
    rule("matrices", "matrix", Guard::Any),
    rule("vertices", "vertex", Guard::Any),
    rule("indices", "index", Guard::Any),
    rule("oxen", "ox", Guard::WholeWord),
    rule("aliases", "alias", Guard::Any),
    rule("alias", "alias", Guard::Any),
    rule("statuses", "status", Guard::Any),
    rule("status", "status", Guard::Any),
    rule("octopi", "octopus", Guard::Any),
    rule("octopus", "octopus", Guard::Any),
    rule("viri", "virus", Guard::Any),
    rule("virus", "virus", Guard::Any),
    rule("axes", "axis", Guard::WholeWord),
    rule("axis", "axis", Guard::WholeWord),
    rule("crises", "crisis", Guard::Any),
    rule("crisis", "crisis", Guard::Any),
    rule("testes", "testis", Guard::Any),
    rule("testis", "testis", Guard::Any),
    rule("shoes", "shoe", Guard::Any),
    rule("oes", "o", Guard::Any),
    rule("buses", "bus", Guard::Any),
    rule("bus", "bus", Guard::Any),
    rule("mice", "mouse", Guard::WholeWord),
    rule("lice", "louse", Guard::WholeWord),
    rule("xes", "x", Guard::Any),
    rule("ches", "ch", Guard::Any),
    rule("sses", "ss", Guard::Any),
    rule("shes", "sh", Guard::Any),
    rule("movies", "movie", Guard::Any),
    rule("series", "series", Guard::Any),
    rule("ies", "y", Guard::AfterConsonant),
    rule("lves", "lf", Guard::Any),
    rule("rves", "rf", Guard::Any),
    rule("tives", "tive", Guard::Any),
    rule("hives", "hive", Guard::Any),
    rule("ves", "fe", Guard::NotAfter('f')),
];

/// Rules checked after the `-sis` family, lowest priority last.
const TRAILING_RULES: &[SuffixRule] = &[
    rule("news", "news", Guard::Any),
    rule("sis", "sis", Guard::Any),
    rule("ius", "ius", Guard::Any),
    rule("eus", "eus", Guard::Any),
    rule("ss", "ss", Guard::Any),
    rule("s", "", Guard::Any),
];

/// Returns the singular form of a plural CamelCase entity name.
///
/// Only the last CamelCase word is rewritten, so `SecurityGroups` becomes
/// `SecurityGroup` and `DBInstances` becomes `DBInstance`. Known singular
/// words such as `Status` or `Kinesis` come back unchanged.
///
/// ## Examples
///
/// ```
/// use reader_gen::inflection::singularize;
///
/// assert_eq!(singularize("SecurityGroups"), "SecurityGroup");
/// assert_eq!(singularize("Vpcs"), "Vpc");
/// assert_eq!(singularize("People"), "Person");
/// assert_eq!(singularize("Status"), "Status");
/// assert_eq!(singularize("Kinesis"), "Kinesis");
/// ```
pub fn singularize(entity: &str) -> String {
    let Some(last) = split_camel_case(entity).pop() else {
        return String::new();
    };
    let prefix = &entity[..entity.len() - last.len()];

    format!("{}{}", prefix, singularize_word(last))
}

/// Singularizes a single word.
fn singularize_word(word: &str) -> String {
    let lower = word.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    for singular in SINGULAR_ENDING_IN_S {
        if lower == *singular {
            return word.to_string();
        }
        if lower.strip_suffix("es") == Some(singular) {
            return word[..singular.len()].to_string();
        }
    }

    for (singular, plural) in IRREGULAR {
        if lower == *plural {
            return match_case(word, singular);
        }
        if lower == *singular {
            return word.to_string();
        }
    }

    for rule in RULES {
        if let Some(result) = apply_rule(word, &lower, rule) {
            return result;
        }
    }

    for stem in SIS_STEMS {
        for plural in [format!("{stem}ses"), format!("{stem}sis")] {
            if lower.ends_with(&plural) {
                let kept = &word[..word.len() - plural.len()];
                let matched = &word[word.len() - plural.len()..];
                return format!("{}{}", kept, match_case(matched, &format!("{stem}sis")));
            }
        }
    }

    for rule in TRAILING_RULES {
        if let Some(result) = apply_rule(word, &lower, rule) {
            return result;
        }
    }

    word.to_string()
}

/// Applies one suffix rule, returning `None` when it does not match.
///
/// `lower` is the ASCII-lowercased `word`, so both have the same byte
/// layout and suffix offsets can be shared.
fn apply_rule(word: &str, lower: &str, rule: &SuffixRule) -> Option<String> {
    if !lower.ends_with(rule.plural) {
        return None;
    }

    let stem = &lower[..lower.len() - rule.plural.len()];
    let allowed = match rule.guard {
        Guard::Any => true,
        Guard::WholeWord => stem.is_empty(),
        Guard::AfterConsonant => match stem.chars().last() {
            Some(c) => !"aeiouy".contains(c) || stem.ends_with("qu"),
            None => false,
        },
        Guard::NotAfter(forbidden) => stem.chars().last().is_some_and(|c| c != forbidden),
    };
    if !allowed {
        return None;
    }

    if rule.plural == rule.singular {
        return Some(word.to_string());
    }

    let split = word.len() - rule.plural.len();
    Some(format!(
        "{}{}",
        &word[..split],
        match_case(&word[split..], rule.singular)
    ))
}

/// Carries the casing of `original` over to `replacement`.
///
/// All-uppercase originals give an uppercase replacement; a capitalized
/// original gives a capitalized replacement.
fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();

    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }

    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = replacement.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => replacement.to_string(),
    }
}

/// Splits a CamelCase string into individual words.
///
/// Handles various CamelCase patterns:
/// - "SecurityGroups" -> ["Security", "Groups"]
/// - "DBInstances" -> ["DB", "Instances"]
/// - "LoadBalancersV2" -> ["Load", "Balancers", "V2"]
/// - "instances" -> ["instances"]
pub fn split_camel_case(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut word_start = 0;

    for i in 1..chars.len() {
        let (offset, current) = chars[i];
        let prev = chars[i - 1].1;

        // Split before uppercase that follows lowercase: "securityGroups" -> "security", "Groups"
        // Split before uppercase followed by lowercase after uppercase: "DBInstances" -> "DB", "Instances"
        let next_is_lower = chars.get(i + 1).is_some_and(|(_, c)| c.is_lowercase());
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (next_is_lower && prev.is_uppercase()));

        if is_new_word {
            if offset > word_start {
                words.push(&s[word_start..offset]);
            }
            word_start = offset;
        }
    }

    if word_start < s.len() {
        words.push(&s[word_start..]);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // === split_camel_case tests ===

    #[test]
    fn split_camel_case_multi_word() {
        assert_eq!(split_camel_case("SecurityGroups"), vec!["Security", "Groups"]);
    }

    #[test]
    fn split_camel_case_acronym_at_start() {
        assert_eq!(split_camel_case("DBInstances"), vec!["DB", "Instances"]);
    }

    #[test]
    fn split_camel_case_trailing_acronym_plural() {
        assert_eq!(split_camel_case("VPCs"), vec!["VP", "Cs"]);
    }

    #[test]
    fn split_camel_case_with_version_suffix() {
        assert_eq!(
            split_camel_case("LoadBalancersV2"),
            vec!["Load", "Balancers", "V2"]
        );
    }

    #[test]
    fn split_camel_case_empty() {
        assert_eq!(split_camel_case(""), Vec::<&str>::new());
    }

    // === singularize tests ===

    #[test]
    fn strips_regular_s() {
        assert_eq!(singularize("Instances"), "Instance");
        assert_eq!(singularize("Buckets"), "Bucket");
        assert_eq!(singularize("Vpcs"), "Vpc");
        assert_eq!(singularize("HostedZones"), "HostedZone");
    }

    #[test]
    fn handles_acronym_plurals() {
        assert_eq!(singularize("VPCs"), "VPC");
        assert_eq!(singularize("NetworkACLs"), "NetworkACL");
        assert_eq!(singularize("DBInstances"), "DBInstance");
    }

    #[test]
    fn handles_ies() {
        assert_eq!(singularize("Policies"), "Policy");
        assert_eq!(singularize("Queries"), "Query");
        assert_eq!(singularize("Identities"), "Identity");
        assert_eq!(
            singularize("CloudFrontOriginAccessIdentities"),
            "CloudFrontOriginAccessIdentity"
        );
    }

    #[test]
    fn handles_es_after_sibilants() {
        assert_eq!(singularize("Addresses"), "Address");
        assert_eq!(singularize("Boxes"), "Box");
        assert_eq!(singularize("Branches"), "Branch");
        assert_eq!(singularize("Aliases"), "Alias");
        assert_eq!(singularize("Statuses"), "Status");
    }

    #[test]
    fn handles_ves() {
        assert_eq!(singularize("Wolves"), "Wolf");
        assert_eq!(singularize("Knives"), "Knife");
        assert_eq!(singularize("Archives"), "Archive");
        assert_eq!(singularize("Objectives"), "Objective");
    }

    #[test]
    fn handles_irregulars() {
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("Children"), "Child");
        assert_eq!(singularize("Data"), "Datum");
        assert_eq!(singularize("AdminPeople"), "AdminPerson");
    }

    #[test]
    fn handles_latin_and_sis_forms() {
        assert_eq!(singularize("Indices"), "Index");
        assert_eq!(singularize("Matrices"), "Matrix");
        assert_eq!(singularize("Analyses"), "Analysis");
        assert_eq!(singularize("Bases"), "Basis");
        assert_eq!(singularize("Databases"), "Database");
        assert_eq!(singularize("Axes"), "Axis");
    }

    #[test]
    fn keeps_uncountables() {
        assert_eq!(singularize("Series"), "Series");
        assert_eq!(singularize("News"), "News");
        assert_eq!(singularize("Dns"), "Dns");
        assert_eq!(singularize("RouteDns"), "RouteDns");
    }

    #[test]
    fn keeps_already_singular_words() {
        for word in [
            "Instance", "Vpc", "Bucket", "Policy", "Address", "Status", "Alias", "Analysis",
            "Person", "Index", "Bus", "Box",
        ] {
            assert_eq!(singularize(word), word, "{word} should be unchanged");
        }
    }

    #[test]
    fn keeps_singular_words_ending_in_s() {
        for word in [
            "Kinesis", "Genesis", "Chassis", "Campus", "Radius", "Genius", "Nucleus", "Redis",
            "Iris", "ElastiCacheRedis", "KinesisStreamGenesis",
        ] {
            assert_eq!(singularize(word), word, "{word} should be unchanged");
            assert_eq!(singularize(&singularize(word)), word);
        }
    }

    #[test]
    fn plurals_ending_in_us_still_strip() {
        assert_eq!(singularize("Menus"), "Menu");
        assert_eq!(singularize("Campuses"), "Campus");
        assert_eq!(singularize("Syllabuses"), "Syllabus");
    }

    #[test]
    fn preserves_uppercase_words() {
        assert_eq!(singularize("ADDRESSES"), "ADDRESS");
        assert_eq!(singularize("PEOPLE"), "PERSON");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(singularize(""), "");
    }

    proptest! {
        #[test]
        fn singularize_is_idempotent(
            stem in "[A-Z][a-z]{2,8}",
            suffix in prop::sample::select(vec!["", "s", "es", "ies", "ves", "ses"]),
        ) {
            let word = format!("{stem}{suffix}");
            let once = singularize(&word);
            let twice = singularize(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn only_the_last_word_changes(
            head in "[A-Z][a-z]{2,6}",
            tail in "[A-Z][a-z]{2,6}",
        ) {
            let entity = format!("{head}{tail}s");
            let singular = singularize(&entity);
            prop_assert!(singular.starts_with(&head));
        }
    }
}
