//! Built-in sample proverbs used when no proverb file exists yet

use crate::domain::Proverb;

fn sample(
    text: &str,
    transliteration: &str,
    meaning: &str,
    english_equivalent: &str,
    tags: &[&str],
    region: &str,
    usage_context: &str,
) -> Proverb {
    Proverb {
        text: text.to_string(),
        transliteration: transliteration.to_string(),
        meaning: meaning.to_string(),
        english_equivalent: english_equivalent.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        region: region.to_string(),
        usage_context: usage_context.to_string(),
    }
}

/// The seed set written on first run
pub fn seed_proverbs() -> Vec<Proverb> {
    vec![
        sample(
            "जे बाढ़ि अनैत अछि, ओ नौका सेहो अनैत अछि",
            "Je barhi anait achhi, o nauka seho anait achhi",
            "With every problem comes a solution",
            "Every cloud has a silver lining",
            &["hope", "optimism"],
            "Mithila",
            "Used to encourage someone facing difficulties",
        ),
        sample(
            "थारी मे भात, हाथ मे लाठी",
            "Thari me bhat, hath me lathi",
            "Being prepared for all situations",
            "Better safe than sorry",
            &["preparation", "caution"],
            "Darbhanga",
            "When advising someone to be cautious while moving forward",
        ),
        sample(
            "Hey labna, tu bhitre rahna.",
            "Hey labna, tu bhitre rahna.",
            "Hey foolish one, stay inside.",
            "Better to stay silent than to expose ignorance.",
            &["ignorance", "wisdom"],
            "Mithila",
            "Used to advise someone to avoid making a fool of themselves.",
        ),
        sample(
            "Aaitho khelau, peto nai bharal.",
            "Aaitho khelau, peto nai bharal.",
            "I played the game, but my stomach remains empty.",
            "All play and no gain.",
            &["effort", "reward"],
            "Mithila",
            "Used when efforts don't yield expected results.",
        ),
        sample(
            "Du du gam bhoj bhel, kukurak pet bhukhle.",
            "Du du gam bhoj bhel, kukurak pet bhukhle.",
            "A feast in two villages, but the dog remains hungry.",
            "Left out despite abundance.",
            &["exclusion", "injustice"],
            "Mithila",
            "Used when someone is left out despite there being plenty.",
        ),
        sample(
            "Ankar nun tel, ankar ghee; hamra tora lagai aa ki?",
            "Ankar nun tel, ankar ghee; hamra tora lagai aa ki?",
            "You have your own oil and ghee, do I need to apply it for you?",
            "Mind your own business.",
            &["self-reliance", "independence"],
            "Mithila",
            "Used to tell someone to handle their own affairs.",
        ),
        sample(
            "Aayl pani, gel pani, biche bilyal pani.",
            "Aayl pani, gel pani, biche bilyal pani.",
            "Water came, water went, and the cat remained stuck in between.",
            "Caught in the middle.",
            &["trouble", "confusion"],
            "Mithila",
            "Used when someone is stuck between two opposing forces.",
        ),
    ]
}
