use species_harvester::harvest::{HarvestConfig, HarvestPipeline};
use species_harvester::FetchError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FINCH_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <title>American Goldfinch - eBird</title>
  <meta name="description" content="Adult males in spring and summer are bright yellow with black forehead and wings. Females, immatures, and winter birds are duller, with &quot;wing bars&quot;.">
</head>
<body><h1>American Goldfinch</h1></body>
</html>"#;

fn read_rows(path: &std::path::Path) -> Vec<(String, String)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].to_string(), r[1].to_string())
        })
        .collect()
}

async fn setup(taxonomy: &str) -> (MockServer, tempfile::TempDir, HarvestConfig) {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let taxonomy_path = dir.path().join("taxonomy.csv");
    std::fs::write(&taxonomy_path, taxonomy).unwrap();

    let config = HarvestConfig::default()
        .with_base_url(format!("{}/species", server.uri()))
        .with_taxonomy_path(taxonomy_path)
        .with_output_path(dir.path().join("descriptions.csv"));
    (server, dir, config)
}

#[tokio::test]
async fn test_found_and_not_found_species() {
    let (server, _dir, config) =
        setup("code,name,SPECIES_CODE\ncode,name,amegfi\ncode,name,noeegr\n").await;

    Mock::given(method("GET"))
        .and(path("/species/amegfi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FINCH_PAGE))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/species/noeegr"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let pipeline = HarvestPipeline::http(config).unwrap();
    let result = pipeline.execute().await.unwrap();

    let rows = read_rows(&result.output_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0, "amegfi");
    assert_eq!(
        rows[0].1,
        "Adult males in spring and summer are bright yellow with black forehead and wings. \
         Females, immatures, and winter birds are duller, with \"wing bars\"."
    );

    assert_eq!(result.failures.len(), 1);
    assert!(matches!(
        result.failures[0].1,
        FetchError::Status { status: 404, .. }
    ));
}

#[tokio::test]
async fn test_page_without_description_is_skipped() {
    let (server, _dir, config) = setup("code,name,ostric2\ncode,name,amegfi\n").await;

    Mock::given(method("GET"))
        .and(path("/species/amegfi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FINCH_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/species/ostric2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><head><title>Ostrich</title></head></html>"),
        )
        .mount(&server)
        .await;

    let result = HarvestPipeline::http(config)
        .unwrap()
        .execute()
        .await
        .unwrap();

    assert_eq!(result.stats.succeeded, 1);
    assert!(matches!(
        result.failures[0].1,
        FetchError::MissingDescription { .. }
    ));
    assert_eq!(read_rows(&result.output_path)[0].0, "amegfi");
}

#[tokio::test]
async fn test_rerun_yields_same_identifiers() {
    let (server, _dir, config) = setup("a,b,amegfi\na,b,bkcchi\na,b,amegfi\n").await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FINCH_PAGE))
        .mount(&server)
        .await;

    let pipeline = HarvestPipeline::http(config).unwrap();
    let first = pipeline.execute().await.unwrap();
    let second = pipeline.execute().await.unwrap();

    let ids = |rows: Vec<(String, String)>| rows.into_iter().map(|r| r.0).collect::<Vec<_>>();
    assert_eq!(ids(read_rows(&first.output_path)), vec!["amegfi", "bkcchi"]);
    assert_eq!(ids(read_rows(&second.output_path)), vec!["amegfi", "bkcchi"]);
}

#[tokio::test]
async fn test_unreachable_host_is_per_species_failure() {
    let dir = tempfile::tempdir().unwrap();
    let taxonomy_path = dir.path().join("taxonomy.csv");
    std::fs::write(&taxonomy_path, "code,name,amegfi\n").unwrap();

    // Bind a port, then release it so nothing answers there. A pooled
    // MockServer keeps listening after drop, so a plain listener is used.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let closed_uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let config = HarvestConfig::default()
        .with_base_url(format!("{closed_uri}/species"))
        .with_taxonomy_path(taxonomy_path)
        .with_output_path(dir.path().join("descriptions.csv"));

    let result = HarvestPipeline::http(config)
        .unwrap()
        .execute()
        .await
        .unwrap();

    assert_eq!(result.stats.failed, 1);
    assert!(matches!(result.failures[0].1, FetchError::Transport { .. }));
    assert_eq!(std::fs::read_to_string(&result.output_path).unwrap(), "");
}
