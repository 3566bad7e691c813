use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub venue_id: i32,
    pub artist_id: i32,
    /// Already normalized to the stored timestamp format.
    pub start_time: String,
}

/// One show as seen from a venue or artist page: the other party plus the start time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSlot {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: String,
    pub start_time: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}
