use super::*;

/// Tests fetching recent entries newest first.
///
/// Expected: Ok with entries in reverse insertion order
#[tokio::test]
async fn returns_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    repo.create(CreateLogParam {
        message: "first".to_string(),
        message_type: None,
    })
    .await?;
    repo.create(CreateLogParam {
        message: "second".to_string(),
        message_type: None,
    })
    .await?;

    let entries = repo.get_recent(10).await?;

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].message, "second");
    assert_eq!(entries[1].message, "first");

    Ok(())
}

/// Tests that the limit caps the number of returned entries.
///
/// Expected: Ok with only the newest entry
#[tokio::test]
async fn respects_limit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    for i in 0..3 {
        repo.create(CreateLogParam {
            message: format!("entry {}", i),
            message_type: None,
        })
        .await?;
    }

    let entries = repo.get_recent(1).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "entry 2");

    Ok(())
}
