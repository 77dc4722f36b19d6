//! Integration tests for catalog CRUD operations.
//!
//! Exercises the repository layer against a real database:
//! - Create / list / update / delete for reference and content tables
//! - Foreign key violations on insert
//! - RESTRICT behaviour when deleting referenced reference rows
//! - Unique constraint violations on users
//! - Full-overwrite update semantics

use sqlx::PgPool;
use holocron_db::models::category::CategoryForm;
use holocron_db::models::game::GameForm;
use holocron_db::models::movie::MovieForm;
use holocron_db::models::series::SeriesForm;
use holocron_db::models::trilogy::TrilogyForm;
use holocron_db::models::user::CreateUser;
use holocron_db::repositories::{
    CategoryRepo, GameRepo, MovieRepo, SeriesRepo, TrilogyRepo, UserRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(kind: &str) -> CategoryForm {
    CategoryForm {
        kind: kind.to_string(),
    }
}

fn new_trilogy(kind: &str) -> TrilogyForm {
    TrilogyForm {
        kind: kind.to_string(),
    }
}

fn new_movie(category_id: i64, trilogy_id: i64, title: &str) -> MovieForm {
    MovieForm {
        category_id,
        trilogy_id,
        title: title.to_string(),
        year_made: 1977,
        synopsis: "A farm boy leaves home.".to_string(),
        poster: "/posters/a_new_hope.jpg".to_string(),
    }
}

fn new_series(category_id: i64, title: &str) -> SeriesForm {
    SeriesForm {
        category_id,
        series_title: title.to_string(),
        series_episode_title: "Chapter 1".to_string(),
        year_made: 2019,
        last_year_made: None,
        synopsis: "A lone gunfighter makes his way.".to_string(),
        poster: "/posters/mando.jpg".to_string(),
    }
}

fn new_game(category_id: i64, title: &str) -> GameForm {
    GameForm {
        category_id,
        title: title.to_string(),
        gaming_system: "PC".to_string(),
        year_made: 2003,
        synopsis: "Four thousand years before the Empire.".to_string(),
        poster: "/posters/kotor.jpg".to_string(),
    }
}

fn new_user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        email: email.to_string(),
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        password_hash: "$argon2id$fake".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Test: Reference table CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_category_crud_roundtrip(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Movies"))
        .await
        .unwrap();
    assert_eq!(created.kind, "Movies");

    let found = CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("created category should be findable");
    assert_eq!(found.kind, "Movies");

    let updated = CategoryRepo::update(&pool, created.id, &new_category("Films"))
        .await
        .unwrap()
        .expect("update should return the row");
    assert_eq!(updated.kind, "Films");

    let deleted = CategoryRepo::delete(&pool, created.id).await.unwrap();
    assert!(deleted);
    assert!(CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_preserves_insertion_order(pool: PgPool) {
    TrilogyRepo::create(&pool, &new_trilogy("Original"))
        .await
        .unwrap();
    TrilogyRepo::create(&pool, &new_trilogy("Prequel"))
        .await
        .unwrap();
    TrilogyRepo::create(&pool, &new_trilogy("Sequel"))
        .await
        .unwrap();

    let trilogies = TrilogyRepo::list(&pool).await.unwrap();
    let kinds: Vec<&str> = trilogies.iter().map(|t| t.kind.as_str()).collect();
    assert_eq!(kinds, ["Original", "Prequel", "Sequel"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = CategoryRepo::update(&pool, 999_999, &new_category("Ghost"))
        .await
        .unwrap();
    assert!(
        result.is_none(),
        "Updating non-existent ID should return None"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_nonexistent_returns_false(pool: PgPool) {
    let result = GameRepo::delete(&pool, 999_999).await.unwrap();
    assert!(!result, "Deleting non-existent ID should return false");
}

// ---------------------------------------------------------------------------
// Test: Content rows reference their lookups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_movie_crud_roundtrip(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Movies"))
        .await
        .unwrap();
    let trilogy = TrilogyRepo::create(&pool, &new_trilogy("Original"))
        .await
        .unwrap();

    let movie = MovieRepo::create(&pool, &new_movie(category.id, trilogy.id, "A New Hope"))
        .await
        .unwrap();
    assert_eq!(movie.category_id, category.id);
    assert_eq!(movie.trilogy_id, trilogy.id);
    assert_eq!(movie.year_made, 1977);

    let mut replacement = new_movie(category.id, trilogy.id, "The Empire Strikes Back");
    replacement.year_made = 1980;
    let updated = MovieRepo::update(&pool, movie.id, &replacement)
        .await
        .unwrap()
        .expect("update should return the row");
    assert_eq!(updated.title, "The Empire Strikes Back");
    assert_eq!(updated.year_made, 1980);

    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(MovieRepo::find_by_id(&pool, movie.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_fk_violation_movie_bad_category(pool: PgPool) {
    let trilogy = TrilogyRepo::create(&pool, &new_trilogy("Original"))
        .await
        .unwrap();
    let result = MovieRepo::create(&pool, &new_movie(999_999, trilogy.id, "Ghost")).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent category_id"
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_fk_violation_game_bad_category(pool: PgPool) {
    let result = GameRepo::create(&pool, &new_game(999_999, "Ghost")).await;
    assert!(
        result.is_err(),
        "FK violation should fail for non-existent category_id"
    );
}

// ---------------------------------------------------------------------------
// Test: RESTRICT blocks deleting referenced reference rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_referenced_category_is_restricted(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Games"))
        .await
        .unwrap();
    GameRepo::create(&pool, &new_game(category.id, "Knights of the Old Republic"))
        .await
        .unwrap();

    let result = CategoryRepo::delete(&pool, category.id).await;
    assert!(
        result.is_err(),
        "Deleting a category still referenced by a game should fail"
    );

    // The category must survive the failed delete.
    assert!(CategoryRepo::find_by_id(&pool, category.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_referenced_trilogy_is_restricted(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Movies"))
        .await
        .unwrap();
    let trilogy = TrilogyRepo::create(&pool, &new_trilogy("Prequel"))
        .await
        .unwrap();
    let movie = MovieRepo::create(&pool, &new_movie(category.id, trilogy.id, "The Phantom Menace"))
        .await
        .unwrap();

    assert!(TrilogyRepo::delete(&pool, trilogy.id).await.is_err());

    // Once the movie is gone the trilogy can be deleted.
    assert!(MovieRepo::delete(&pool, movie.id).await.unwrap());
    assert!(TrilogyRepo::delete(&pool, trilogy.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Test: Series optional end year
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_series_last_year_made_overwrite(pool: PgPool) {
    let category = CategoryRepo::create(&pool, &new_category("Series"))
        .await
        .unwrap();

    let mut form = new_series(category.id, "The Clone Wars");
    form.last_year_made = Some(2020);
    let series = SeriesRepo::create(&pool, &form).await.unwrap();
    assert_eq!(series.last_year_made, Some(2020));

    // A full overwrite with an empty end year clears the stored value.
    form.last_year_made = None;
    let updated = SeriesRepo::update(&pool, series.id, &form)
        .await
        .unwrap()
        .expect("update should return the row");
    assert_eq!(updated.last_year_made, None);
}

// ---------------------------------------------------------------------------
// Test: User uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("yoda", "yoda@jedi.example"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &new_user("yoda", "other@jedi.example")).await;
    assert!(result.is_err(), "Duplicate username should fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("yoda", "yoda@jedi.example"))
        .await
        .unwrap();
    let result = UserRepo::create(&pool, &new_user("grogu", "yoda@jedi.example")).await;
    assert!(result.is_err(), "Duplicate email should fail");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_user_count_tracks_inserts(pool: PgPool) {
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
    UserRepo::create(&pool, &new_user("yoda", "yoda@jedi.example"))
        .await
        .unwrap();
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}
