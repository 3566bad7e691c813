use crate::entities::{artists, categories, questions, shows, venues};
use crate::models::artist::{ArtistDetail, ArtistInput};
use crate::models::listing::{NamedRef, SearchResults};
use crate::models::show::{ShowInput, ShowListing};
use crate::models::trivia::{NewQuestion, QuestionPage};
use crate::models::venue::{VenueArea, VenueDetail, VenueInput};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

/// File path behind a sqlite URL, or `None` for in-memory databases.
fn sqlite_file_path(db_url: &str) -> Option<&str> {
    if db_url.contains(":memory:") || db_url.contains("mode=memory") {
        return None;
    }

    let path = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);

    (!path.is_empty()).then_some(path)
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let (max_connections, min_connections) = match sqlite_file_path(db_url) {
            Some(path_str) => {
                if let Some(parent) = Path::new(path_str).parent() {
                    tokio::fs::create_dir_all(parent).await.ok();
                }
                if !Path::new(path_str).exists() {
                    std::fs::File::create(path_str)?;
                }
                (max_connections, min_connections)
            }
            // Every pooled connection would otherwise see its own empty database.
            None => (1, 1),
        };

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn venue_repo(&self) -> repositories::venue::VenueRepository {
        repositories::venue::VenueRepository::new(self.conn.clone())
    }

    fn artist_repo(&self) -> repositories::artist::ArtistRepository {
        repositories::artist::ArtistRepository::new(self.conn.clone())
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    fn category_repo(&self) -> repositories::category::CategoryRepository {
        repositories::category::CategoryRepository::new(self.conn.clone())
    }

    fn question_repo(&self) -> repositories::question::QuestionRepository {
        repositories::question::QuestionRepository::new(self.conn.clone())
    }

    // Venues

    pub async fn create_venue(&self, input: VenueInput) -> Result<venues::Model> {
        self.venue_repo().create(input).await
    }

    pub async fn get_venue(&self, id: i32) -> Result<Option<venues::Model>> {
        self.venue_repo().get(id).await
    }

    pub async fn update_venue(&self, id: i32, input: VenueInput) -> Result<Option<venues::Model>> {
        self.venue_repo().update(id, input).await
    }

    pub async fn delete_venue(&self, id: i32) -> Result<bool> {
        self.venue_repo().delete(id).await
    }

    pub async fn search_venues(&self, term: &str) -> Result<SearchResults> {
        self.venue_repo().search(term).await
    }

    pub async fn list_venue_areas(&self, now: &str) -> Result<Vec<VenueArea>> {
        self.venue_repo().list_areas(now).await
    }

    pub async fn venue_detail(&self, id: i32, now: &str) -> Result<Option<VenueDetail>> {
        let Some(venue) = self.get_venue(id).await? else {
            return Ok(None);
        };
        let (past, upcoming) = self.show_repo().for_venue(id, now).await?;
        Ok(Some(VenueDetail::new(venue, past, upcoming)))
    }

    // Artists

    pub async fn create_artist(&self, input: ArtistInput) -> Result<artists::Model> {
        self.artist_repo().create(input).await
    }

    pub async fn get_artist(&self, id: i32) -> Result<Option<artists::Model>> {
        self.artist_repo().get(id).await
    }

    pub async fn list_artists(&self) -> Result<Vec<NamedRef>> {
        self.artist_repo().list().await
    }

    pub async fn update_artist(
        &self,
        id: i32,
        input: ArtistInput,
    ) -> Result<Option<artists::Model>> {
        self.artist_repo().update(id, input).await
    }

    pub async fn delete_artist(&self, id: i32) -> Result<bool> {
        self.artist_repo().delete(id).await
    }

    pub async fn search_artists(&self, term: &str) -> Result<SearchResults> {
        self.artist_repo().search(term).await
    }

    pub async fn artist_detail(&self, id: i32, now: &str) -> Result<Option<ArtistDetail>> {
        let Some(artist) = self.get_artist(id).await? else {
            return Ok(None);
        };
        let (past, upcoming) = self.show_repo().for_artist(id, now).await?;
        Ok(Some(ArtistDetail::new(artist, past, upcoming)))
    }

    // Shows

    pub async fn create_show(&self, input: ShowInput) -> Result<shows::Model> {
        self.show_repo().create(input).await
    }

    pub async fn list_shows(&self) -> Result<Vec<ShowListing>> {
        self.show_repo().list().await
    }

    // Trivia

    pub async fn list_categories(&self) -> Result<Vec<categories::Model>> {
        self.category_repo().list().await
    }

    pub async fn get_category(&self, id: i32) -> Result<Option<categories::Model>> {
        self.category_repo().get(id).await
    }

    pub async fn question_page(&self, page: u64, per_page: u64) -> Result<QuestionPage> {
        self.question_repo().page(page, per_page).await
    }

    pub async fn count_questions(&self) -> Result<u64> {
        self.question_repo().count().await
    }

    pub async fn search_questions(&self, term: &str) -> Result<Vec<questions::Model>> {
        self.question_repo().search(term).await
    }

    pub async fn questions_by_category(&self, category_id: i32) -> Result<Vec<questions::Model>> {
        self.question_repo().by_category(category_id).await
    }

    pub async fn create_question(&self, input: NewQuestion) -> Result<questions::Model> {
        self.question_repo().create(input).await
    }

    pub async fn delete_question(&self, id: i32) -> Result<bool> {
        self.question_repo().delete(id).await
    }

    pub async fn quiz_candidates(
        &self,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Vec<questions::Model>> {
        self.question_repo()
            .quiz_candidates(category_id, previous)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(sqlite_file_path("sqlite:fyyur.db"), Some("fyyur.db"));
        assert_eq!(
            sqlite_file_path("sqlite://data/fyyur.db?mode=rwc"),
            Some("data/fyyur.db")
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
    }
}
