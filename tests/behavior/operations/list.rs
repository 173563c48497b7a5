use crate::*;
use assert_cmd::prelude::*;
use csvgate::error::Result;
use csvgate::storage::constants::LIST_PAGE_LIMIT;
use csvgate::storage::{CsvGateway, StoragePath};
use predicates::prelude::*;

pub fn tests(client: &CsvGateway, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        client,
        test_list_only_csv_files,
        test_list_nested_keys,
        test_list_empty_prefix,
        test_list_invalid_uri,
        test_list_reads_a_single_page
    ));

    tests.extend(async_trials!(
        client,
        e2e_test_list_command_prints_csv_paths,
        e2e_test_list_command_succeeds_on_bad_uri,
        e2e_test_list_command_succeeds_on_bad_config
    ));
}

async fn stage_keys(client: &CsvGateway, keys: &[String]) -> Result<()> {
    let op = bucket_operator(client)?;
    for key in keys {
        op.write(key, b"a,b\n1,2\n".to_vec()).await?;
    }
    Ok(())
}

fn sorted(mut paths: Vec<StoragePath>) -> Vec<String> {
    paths.sort_by(|a, b| a.key.cmp(&b.key));
    paths.into_iter().map(|p| p.to_string()).collect()
}

pub async fn test_list_only_csv_files(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();
    let keys: Vec<String> = ["a.csv", "b.txt", "C.CSV", "notes.txt"]
        .iter()
        .map(|name| format!("{prefix}{name}"))
        .collect();
    stage_keys(&client, &keys).await?;

    let listed = client.list(&storage_uri(&prefix)).await.into_result()?;
    assert_eq!(
        sorted(listed),
        vec![
            storage_uri(&format!("{prefix}C.CSV")),
            storage_uri(&format!("{prefix}a.csv")),
        ]
    );
    Ok(())
}

pub async fn test_list_nested_keys(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();
    let keys = vec![
        format!("{prefix}top.csv"),
        format!("{prefix}sub/inner.csv"),
        format!("{prefix}sub/deeper/leaf.Csv"),
        format!("{prefix}sub/readme.md"),
    ];
    stage_keys(&client, &keys).await?;

    let listed = client.list(&storage_uri(&prefix)).await.into_result()?;
    assert_eq!(
        sorted(listed),
        vec![
            storage_uri(&format!("{prefix}sub/deeper/leaf.Csv")),
            storage_uri(&format!("{prefix}sub/inner.csv")),
            storage_uri(&format!("{prefix}top.csv")),
        ]
    );
    Ok(())
}

pub async fn test_list_empty_prefix(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();

    let listed = client.list(&storage_uri(&prefix)).await.into_result()?;
    assert!(listed.is_empty(), "unexpected entries: {listed:?}");
    Ok(())
}

pub async fn test_list_invalid_uri(client: CsvGateway) -> Result<()> {
    let outcome = client.list("not-a-storage-uri").await;
    assert!(!outcome.is_success());
    assert!(outcome.ok().is_none());
    Ok(())
}

pub async fn test_list_reads_a_single_page(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();
    let keys: Vec<String> = (0..LIST_PAGE_LIMIT + 5)
        .map(|i| format!("{prefix}part-{i:05}.csv"))
        .collect();
    stage_keys(&client, &keys).await?;

    let listed = client.list(&storage_uri(&prefix)).await.into_result()?;
    assert_eq!(listed.len(), LIST_PAGE_LIMIT);
    assert!(listed.iter().all(|p| p.key.starts_with(&prefix)));
    Ok(())
}

pub async fn e2e_test_list_command_prints_csv_paths(client: CsvGateway) -> Result<()> {
    let prefix = TEST_FIXTURE.new_dir_path();
    let keys = vec![format!("{prefix}one.csv"), format!("{prefix}two.txt")];
    stage_keys(&client, &keys).await?;

    csvgate_cmd()
        .arg("--list")
        .arg(storage_uri(&prefix))
        .arg("unused")
        .assert()
        .success()
        .stdout(format!("{}\n", storage_uri(&format!("{prefix}one.csv"))));
    Ok(())
}

pub async fn e2e_test_list_command_succeeds_on_bad_uri(_client: CsvGateway) -> Result<()> {
    csvgate_cmd()
        .arg("--list")
        .arg("bucket/without/scheme")
        .arg("unused")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    Ok(())
}

pub async fn e2e_test_list_command_succeeds_on_bad_config(_client: CsvGateway) -> Result<()> {
    csvgate_cmd()
        .env("STORAGE_PROVIDER", "gcs")
        .arg("--list")
        .arg(storage_uri(&TEST_FIXTURE.new_dir_path()))
        .arg("unused")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported storage provider: gcs"));
    Ok(())
}
