use crate::*;
use assert_cmd::prelude::*;
use csvgate::error::{Error, Result};
use csvgate::storage::CsvGateway;
use predicates::prelude::*;
use tokio::fs;

pub fn tests(client: &CsvGateway, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_upload_then_download_round_trip,
        test_download_creates_nested_directory,
        test_download_into_existing_directory,
        test_download_non_existent_object,
        test_download_key_without_object_name
    ));

    tests.extend(async_trials!(
        client,
        e2e_test_download_command_succeeds,
        e2e_test_download_command_fails_for_missing_object
    ));
}

struct StagedFile {
    key: String,
    content: Vec<u8>,
    file_name: String,
}

async fn stage_remote_csv(client: &CsvGateway) -> Result<StagedFile> {
    let (content, _) = TEST_FIXTURE.new_csv(1..100);
    let file_name = "staged.csv".to_string();
    let key = format!("{}{file_name}", TEST_FIXTURE.new_dir_path());

    bucket_operator(client)?.write(&key, content.clone()).await?;

    Ok(StagedFile {
        key,
        content,
        file_name,
    })
}

async fn test_upload_then_download_round_trip(client: CsvGateway) -> Result<()> {
    let (content, _) = TEST_FIXTURE.new_csv(1..200);
    let local = write_local_file(&new_local_dir(), "local.csv", &content);
    let prefix = TEST_FIXTURE.new_dir_path();

    client
        .upload(&local, &storage_uri(&prefix))
        .await
        .into_result()?;

    let target_dir = new_local_dir();
    let downloaded = client
        .download(&storage_uri(&format!("{prefix}local.csv")), &target_dir)
        .await
        .into_result()?;

    assert_eq!(downloaded, target_dir.join("local.csv"));
    assert_eq!(fs::read(&downloaded).await?, content);
    Ok(())
}

async fn test_download_creates_nested_directory(client: CsvGateway) -> Result<()> {
    let staged = stage_remote_csv(&client).await?;
    let target_dir = new_local_dir().join("nested").join("deeper");

    let downloaded = client
        .download(&storage_uri(&staged.key), &target_dir)
        .await
        .into_result()?;

    assert!(target_dir.is_dir());
    assert_eq!(downloaded, target_dir.join(&staged.file_name));
    assert_eq!(fs::read(&downloaded).await?, staged.content);
    Ok(())
}

async fn test_download_into_existing_directory(client: CsvGateway) -> Result<()> {
    let staged = stage_remote_csv(&client).await?;
    let target_dir = new_local_dir();
    fs::create_dir_all(&target_dir).await?;

    let downloaded = client
        .download(&storage_uri(&staged.key), &target_dir)
        .await
        .into_result()?;

    assert_eq!(fs::read(&downloaded).await?, staged.content);
    Ok(())
}

async fn test_download_non_existent_object(client: CsvGateway) -> Result<()> {
    let key = format!("{}absent.csv", TEST_FIXTURE.new_dir_path());
    let target_dir = new_local_dir();

    let outcome = client.download(&storage_uri(&key), &target_dir).await;
    let err = outcome.failure().expect("download of a missing object must fail");
    assert!(
        matches!(err.root_cause(), Error::Backend { .. }),
        "unexpected error: {err:?}"
    );

    // The directory is created before the transfer and is not rolled back.
    assert!(target_dir.is_dir());
    assert!(!target_dir.join("absent.csv").exists());
    Ok(())
}

async fn test_download_key_without_object_name(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();

    let outcome = client.download(&storage_uri(&prefix), new_local_dir()).await;
    let err = outcome.failure().expect("download of a prefix must fail");
    assert!(
        matches!(err.root_cause(), Error::InvalidPath { .. }),
        "unexpected error: {err:?}"
    );
    Ok(())
}

async fn e2e_test_download_command_succeeds(client: CsvGateway) -> Result<()> {
    let staged = stage_remote_csv(&client).await?;
    let target_dir = new_local_dir();

    csvgate_cmd()
        .arg("--download")
        .arg(storage_uri(&staged.key))
        .arg(&target_dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("Download successful"));

    let downloaded = fs::read(target_dir.join(&staged.file_name)).await?;
    assert_eq!(downloaded, staged.content);
    Ok(())
}

async fn e2e_test_download_command_fails_for_missing_object(_client: CsvGateway) -> Result<()> {
    let key = format!("{}absent.csv", TEST_FIXTURE.new_dir_path());

    csvgate_cmd()
        .arg("--download")
        .arg(storage_uri(&key))
        .arg(new_local_dir())
        .assert()
        .failure()
        .code(1);
    Ok(())
}
