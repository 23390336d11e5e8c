//! Lookup against a real Postgres database.
//!
//! Requires a reachable database configured through DB_* variables.
//! Run with: DB_USER=... DB_NAME=... cargo test -p hierarchical-server --test postgres_lookup -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use hierarchical_server::db::{create_pool, migrations};
use hierarchical_server::{
    DatabaseConfig, LookupError, Relation, SyllabusId, SyllabusRepo, SyllabusService,
};
use sqlx::PgPool;

async fn setup() -> PgPool {
    let config = DatabaseConfig::from_env().expect("invalid DB_* environment");
    let pool = create_pool(&config).await.expect("failed to connect to test database");
    migrations::run(&pool).await.expect("migrations failed");
    pool
}

/// Unique id prefix so concurrent runs don't collide
fn prefix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("t{}-", nanos)
}

async fn cleanup(pool: &PgPool, prefix: &str) {
    let pattern = format!("{}%", prefix);
    sqlx::query("DELETE FROM syllabus_relations WHERE parent_id LIKE $1")
        .bind(&pattern)
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("DELETE FROM syllabuses WHERE id LIKE $1")
        .bind(&pattern)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires database"]
async fn lookup_returns_parent_side_relations() {
    let pool = setup().await;
    let p = prefix();
    let (s1, s2, s3) = (format!("{p}s1"), format!("{p}s2"), format!("{p}s3"));

    sqlx::query("INSERT INTO syllabuses (id, name, term) VALUES ($1, 'Algebra', '2024')")
        .bind(&s1)
        .execute(&pool)
        .await
        .unwrap();
    for (parent, child) in [(&s1, &s3), (&s1, &s2), (&s2, &s3)] {
        sqlx::query("INSERT INTO syllabus_relations (parent_id, child_id) VALUES ($1, $2)")
            .bind(parent)
            .bind(child)
            .execute(&pool)
            .await
            .unwrap();
    }

    let service = SyllabusService::new(SyllabusRepo::new(pool.clone()));
    let syllabus = service.get_by_id(&SyllabusId::new(&s1).unwrap()).await.unwrap();

    assert_eq!(syllabus.name, "Algebra");
    assert_eq!(syllabus.term, "2024");
    assert_eq!(
        syllabus.relations,
        vec![Relation::new(&s1, &s2), Relation::new(&s1, &s3)]
    );

    let again = service.get_by_id(&SyllabusId::new(&s1).unwrap()).await.unwrap();
    assert_eq!(syllabus, again);

    cleanup(&pool, &p).await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn lookup_of_missing_row_is_unknown() {
    let pool = setup().await;
    let service = SyllabusService::new(SyllabusRepo::new(pool));

    let missing = format!("{}missing", prefix());
    let err = service
        .get_by_id(&SyllabusId::new(&missing).unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, LookupError::UnknownSyllabus(_)));
}
