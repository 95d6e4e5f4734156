//! Animal fact catalog.

/// Animal name to fact, in the order the choices are presented.
pub const ANIMAL_FACTS: &[(&str, &str)] = &[
    (
        "koala",
        "Koala fingerprints are so close to humans' that they could taint crime scenes.",
    ),
    ("parrot", "Parrots will selflessly help each other out."),
    (
        "mantis shrimp",
        "The mantis shrimp has the world's fastest punch.",
    ),
    ("lion", "Female lions do 90 percent of the hunting."),
    ("narwhal", "Narwhal tusks are really an \"inside out\" tooth."),
    ("puffin", "Puffins use twigs to scratch their bodies."),
    ("shark", "Some sharks glow in the dark."),
    (
        "grizzly bear",
        "A grizzly bear's bite is strong enough to crush a bowling ball.",
    ),
    ("zebra", "Zebra stripes act as a natural bug repellant."),
    ("octopus", "Octopuses can taste with their arms."),
    ("reindeer", "Reindeer eyes turn blue in the winter."),
];

/// All catalog keys in presentation order.
pub fn animal_names() -> Vec<&'static str> {
    ANIMAL_FACTS.iter().map(|(name, _)| *name).collect()
}

/// Look up the fact for `animal`. Exact, case-sensitive match; `None` for a
/// missing or unknown key.
pub fn fact_for(animal: Option<&str>) -> Option<&'static str> {
    let animal = animal?;
    ANIMAL_FACTS
        .iter()
        .find(|(name, _)| *name == animal)
        .map(|(_, fact)| *fact)
}
