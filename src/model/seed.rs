//! Built-in starting data, used whenever nothing usable is persisted.

use super::aesthetic::Aesthetic;
use super::aesthetic::Aesthetic::{BlackGirl, Colombian, Cottagecore, EarthyGoddess};
use super::board::Board;
use super::pin::{Aesthetics, Attribution, Pin};

/// Id of the board every fresh store starts with
pub const DEFAULT_BOARD_ID: &str = "b-default";
pub const DEFAULT_BOARD_NAME: &str = "Favorites";

struct SeedPin {
    id: &'static str,
    title: &'static str,
    photo: &'static str,
    tags: &'static [&'static str],
    aesthetics: &'static [Aesthetic],
    author: &'static str,
    origin: &'static str,
}

const SEED_PINS: &[SeedPin] = &[
    SeedPin {
        id: "p1",
        title: "Sunset over cottage meadow",
        photo: "photo-1501785888041-af3ef285b470",
        tags: &["sunset", "cottagecore", "meadow"],
        aesthetics: &[Cottagecore],
        author: "Unsplash Photographer",
        origin: "Unsplash",
    },
    SeedPin {
        id: "p2",
        title: "Earthy goddess braids",
        photo: "photo-1524504388940-b1c1722653e1",
        tags: &["braids", "earthy-goddess", "natural-hair"],
        aesthetics: &[EarthyGoddess, BlackGirl],
        author: "Photographer B",
        origin: "Instagram",
    },
    SeedPin {
        id: "p3",
        title: "Handwoven Colombian textile",
        photo: "photo-1562158070-6d8f5d3b6f6a",
        tags: &["colombian", "textile", "crafts"],
        aesthetics: &[Colombian],
        author: "Local Artisan",
        origin: "Market",
    },
    SeedPin {
        id: "p4",
        title: "Boho sunset and crystals",
        photo: "photo-1500530855697-b586d89ba3ee",
        tags: &["sunset", "boho", "crystals"],
        aesthetics: &[EarthyGoddess],
        author: "Photographer C",
        origin: "Portfolio",
    },
    SeedPin {
        id: "p5",
        title: "Black girl braids inspiration",
        photo: "photo-1607746882042-944635dfe10e",
        tags: &["braids", "natural", "black-girl"],
        aesthetics: &[BlackGirl],
        author: "Photographer D",
        origin: "Studio",
    },
    SeedPin {
        id: "p6",
        title: "Cottage interior with teacups",
        photo: "photo-1505692794405-06f1d2d8a6b9",
        tags: &["interior", "cottagecore", "cozy"],
        aesthetics: &[Cottagecore],
        author: "Designer X",
        origin: "Blog",
    },
    SeedPin {
        id: "p7",
        title: "Colombian street festival",
        photo: "photo-1549213783-8284d0336a46",
        tags: &["colombian", "dance", "festival"],
        aesthetics: &[Colombian],
        author: "Photographer E",
        origin: "Documentary",
    },
    SeedPin {
        id: "p8",
        title: "Natural hair care routine",
        photo: "photo-1501004318641-b39e6451bec6",
        tags: &["natural-hair", "care", "black-girl"],
        aesthetics: &[BlackGirl],
        author: "Creator Y",
        origin: "YouTube",
    },
    SeedPin {
        id: "p9",
        title: "Wildflower path",
        photo: "photo-1470770841072-f978cf4d019e",
        tags: &["wildflowers", "path", "cottagecore"],
        aesthetics: &[Cottagecore],
        author: "Photographer F",
        origin: "Portfolio",
    },
    SeedPin {
        id: "p10",
        title: "Braids with beads, a cultural nod",
        photo: "photo-1516685304081-de7947d419d0",
        tags: &["braids", "beads", "culture", "black-girl"],
        aesthetics: &[BlackGirl, EarthyGoddess],
        author: "Photographer G",
        origin: "Archive",
    },
    SeedPin {
        id: "p11",
        title: "Tropical Colombian landscape",
        photo: "photo-1501785888041-af3ef285b470",
        tags: &["landscape", "colombia", "tropical"],
        aesthetics: &[Colombian],
        author: "Photographer H",
        origin: "Travel",
    },
    SeedPin {
        id: "p12",
        title: "Handmade pottery and herbs",
        photo: "photo-1519681393784-d120267933ba",
        tags: &["pottery", "herbs", "earthy-goddess"],
        aesthetics: &[EarthyGoddess],
        author: "Maker Z",
        origin: "Studio",
    },
];

fn unsplash_url(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?w=1200&q=80&auto=format&fit=crop",
        photo
    )
}

/// The sample catalog: twelve pins, every aesthetic represented.
pub fn seed_pins() -> Vec<Pin> {
    SEED_PINS
        .iter()
        .map(|s| Pin {
            id: s.id.to_string(),
            title: s.title.to_string(),
            image: unsplash_url(s.photo),
            tags: s.tags.iter().map(|t| t.to_string()).collect(),
            aesthetics: Aesthetics::try_from(s.aesthetics.to_vec()).unwrap_or_default(),
            attribution: Attribution {
                author: s.author.to_string(),
                origin: s.origin.to_string(),
            },
        })
        .collect()
}

/// A single empty "Favorites" board.
pub fn seed_boards() -> Vec<Board> {
    vec![Board::new(
        DEFAULT_BOARD_ID.to_string(),
        DEFAULT_BOARD_NAME.to_string(),
    )]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_covers_every_aesthetic() {
        let pins = seed_pins();
        for a in Aesthetic::ALL {
            assert!(
                pins.iter().any(|p| p.has_aesthetic(a)),
                "no seed pin for {}",
                a
            );
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let pins = seed_pins();
        let ids: HashSet<&str> = pins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), pins.len());
    }

    #[test]
    fn seed_board_is_empty_favorites() {
        let boards = seed_boards();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, "b-default");
        assert_eq!(boards[0].name, "Favorites");
        assert!(boards[0].pins.is_empty());
    }
}
