use super::*;

/// Tests persisting an audit log entry.
///
/// Expected: Ok with message and type stored
#[tokio::test]
async fn creates_log_entry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::LogEntry)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LogRepository::new(db);
    let entry = repo
        .create(CreateLogParam {
            message: "Admin deleted group Moderators".to_string(),
            message_type: Some("admingroup".to_string()),
        })
        .await?;

    assert_eq!(entry.message, "Admin deleted group Moderators");
    assert_eq!(entry.message_type.as_deref(), Some("admingroup"));

    Ok(())
}
