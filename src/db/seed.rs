//! Demo rows for a fresh database. Each group is only inserted into an empty table.

use super::Store;
use crate::models::artist::ArtistInput;
use crate::models::show::ShowInput;
use crate::models::trivia::NewQuestion;
use crate::models::venue::VenueInput;
use anyhow::Result;
use tracing::info;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub venues: usize,
    pub artists: usize,
    pub shows: usize,
    pub questions: usize,
}

impl SeedReport {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.venues == 0 && self.artists == 0 && self.shows == 0 && self.questions == 0
    }
}

/// `(question, answer, difficulty, category)`
const QUESTIONS: &[(&str, &str, i32, i32)] = &[
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        5,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        4,
        5,
    ),
    (
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        3,
        5,
    ),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    (
        "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
        "Escher",
        1,
        2,
    ),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

fn demo_venues() -> Vec<VenueInput> {
    vec![
        VenueInput {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: "123-123-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1543900694-133f37abaaa5".to_string(),
            facebook_link: "https://www.facebook.com/TheMusicalHop".to_string(),
            website_link: "https://www.themusicalhop.com".to_string(),
            genres: "Jazz,Reggae,Swing,Classical,Folk".to_string(),
            seeking_talent: true,
            seeking_description:
                "We are on the lookout for a local artist to play every two weeks. Please call us."
                    .to_string(),
        },
        VenueInput {
            name: "The Dueling Pianos Bar".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: "335 Delancey Street".to_string(),
            phone: "914-003-1132".to_string(),
            image_link: "https://images.unsplash.com/photo-1497032205916-ac775f0649ae".to_string(),
            facebook_link: "https://www.facebook.com/theduelingpianos".to_string(),
            website_link: "https://www.theduelingpianos.com".to_string(),
            genres: "Classical,R&B,Hip-Hop".to_string(),
            ..Default::default()
        },
        VenueInput {
            name: "Park Square Live Music & Coffee".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "34 Whiskey Moore Ave".to_string(),
            phone: "415-000-1234".to_string(),
            image_link: "https://images.unsplash.com/photo-1485686531765-ba63b07845a7".to_string(),
            facebook_link: "https://www.facebook.com/ParkSquareLiveMusicAndCoffee".to_string(),
            website_link: "https://www.parksquarelivemusicandcoffee.com".to_string(),
            genres: "Rock n Roll,Jazz,Classical,Folk".to_string(),
            ..Default::default()
        },
    ]
}

fn demo_artists() -> Vec<ArtistInput> {
    vec![
        ArtistInput {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "326-123-5000".to_string(),
            genres: "Rock n Roll".to_string(),
            image_link: "https://images.unsplash.com/photo-1549213783-8284d0336c4f".to_string(),
            facebook_link: "https://www.facebook.com/GunsNPetals".to_string(),
            website_link: "https://www.gunsnpetalsband.com".to_string(),
            seeking_venue: true,
            seeking_description: "Looking for shows to perform at in the San Francisco Bay Area!"
                .to_string(),
        },
        ArtistInput {
            name: "Matt Quevedo".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            phone: "300-400-5000".to_string(),
            genres: "Jazz".to_string(),
            image_link: "https://images.unsplash.com/photo-1495223153807-b916f75de8c5".to_string(),
            facebook_link: "https://www.facebook.com/mattquevedo923251523".to_string(),
            ..Default::default()
        },
        ArtistInput {
            name: "The Wild Sax Band".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "432-325-5432".to_string(),
            genres: "Jazz,Classical".to_string(),
            image_link: "https://images.unsplash.com/photo-1558369981-f9ca78462e61".to_string(),
            ..Default::default()
        },
    ]
}

/// `(venue index, artist index, start time)` into the demo lists above.
const SHOWS: &[(usize, usize, &str)] = &[
    (0, 0, "2019-05-21 21:30:00"),
    (2, 1, "2019-06-15 23:00:00"),
    (2, 2, "2035-04-01 20:00:00"),
    (2, 2, "2035-04-08 20:00:00"),
    (2, 2, "2035-04-15 20:00:00"),
];

pub async fn seed_demo_data(store: &Store) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    let venues = store.search_venues("").await?;
    let artists = store.list_artists().await?;

    if venues.count == 0 && artists.is_empty() {
        let mut venue_ids = Vec::new();
        for input in demo_venues() {
            venue_ids.push(store.create_venue(input).await?.id);
        }

        let mut artist_ids = Vec::new();
        for input in demo_artists() {
            artist_ids.push(store.create_artist(input).await?.id);
        }

        for (venue, artist, start_time) in SHOWS {
            store
                .create_show(ShowInput {
                    venue_id: venue_ids[*venue],
                    artist_id: artist_ids[*artist],
                    start_time: (*start_time).to_string(),
                })
                .await?;
        }

        report.venues = venue_ids.len();
        report.artists = artist_ids.len();
        report.shows = SHOWS.len();
    } else {
        info!("Venues or artists already present, skipping Fyyur demo data");
    }

    if store.count_questions().await? == 0 {
        for (question, answer, difficulty, category_id) in QUESTIONS {
            store
                .create_question(NewQuestion {
                    question: (*question).to_string(),
                    answer: (*answer).to_string(),
                    difficulty: *difficulty,
                    category_id: *category_id,
                })
                .await?;
        }
        report.questions = QUESTIONS.len();
    } else {
        info!("Questions already present, skipping trivia demo data");
    }

    info!(
        "Seeded {} venues, {} artists, {} shows, {} questions",
        report.venues, report.artists, report.shows, report.questions
    );

    Ok(report)
}
