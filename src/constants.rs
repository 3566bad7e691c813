pub mod trivia {

    pub const QUESTIONS_PER_PAGE: u64 = 10;

    pub const MIN_DIFFICULTY: i32 = 1;

    pub const MAX_DIFFICULTY: i32 = 5;

    /// Quiz category id meaning "any category".
    pub const ALL_CATEGORIES: i32 = 0;
}

pub mod schedule {

    /// Storage format for show start times. Zero padded and most significant
    /// field first, so string order is chronological order.
    pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub const ACCEPTED_INPUT_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
    ];

    pub const FULL_DISPLAY_FORMAT: &str = "%A %B, %-d, %Y at %-I:%M%p";

    pub const MEDIUM_DISPLAY_FORMAT: &str = "%a %m, %d, %Y %-I:%M%p";
}

pub mod session {

    pub const FLASH_KEY: &str = "_flashes";
}

pub mod forms {

    pub const GENRES: &[&str] = &[
        "Alternative",
        "Blues",
        "Classical",
        "Country",
        "Electronic",
        "Folk",
        "Funk",
        "Hip-Hop",
        "Heavy Metal",
        "Instrumental",
        "Jazz",
        "Musical Theatre",
        "Pop",
        "Punk",
        "R&B",
        "Reggae",
        "Rock n Roll",
        "Soul",
        "Swing",
        "Other",
    ];

    pub const STATES: &[&str] = &[
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
        "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
        "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
        "VT", "VA", "WA", "WV", "WI", "WY",
    ];

    /// Checkbox values treated as checked.
    pub const TRUTHY: &[&str] = &["y", "yes", "on", "true", "1"];
}
