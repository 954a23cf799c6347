//! Client round trips against a live server on an ephemeral port.

use dr_macadamia::api::create_router;
use dr_macadamia::cli::{Commands, Source};
use dr_macadamia::client::{ClientError, DoctorClient};
use dr_macadamia::kb::KnowledgeBase;

const TABLE: &str = r#"name,symptoms,treatments
Anthracnose,"['leaf spot','dieback']","['copper fungicide']"
Husk Rot,"['leaf spot']","['fungicide X']"
Twig/Branch Dieback,"['twig dieback']",
"#;

/// Helper to start a server and return a client pointed at it.
async fn setup() -> DoctorClient {
    let kb = KnowledgeBase::from_reader(TABLE.as_bytes()).expect("Failed to load table");
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, create_router(kb))
            .await
            .expect("Server failed");
    });

    DoctorClient::new(format!("http://{}/api/v1", addr))
}

#[tokio::test]
async fn health_check_succeeds() {
    let client = setup().await;

    let health = client.health().await.expect("Health check failed");
    assert_eq!(health["status"], "ok");
}

#[tokio::test]
async fn diagnose_matches_local_knowledge_base() {
    let client = setup().await;
    let kb = KnowledgeBase::from_reader(TABLE.as_bytes()).expect("Failed to load table");

    let diagnosis = client.diagnose("leaf spot").await.expect("Diagnose failed");
    assert_eq!(diagnosis, kb.diagnose("leaf spot"));
}

#[tokio::test]
async fn profile_matches_local_knowledge_base() {
    let client = setup().await;
    let kb = KnowledgeBase::from_reader(TABLE.as_bytes()).expect("Failed to load table");

    let profile = client.profile("Anthracnose").await.expect("Profile failed");
    assert_eq!(profile, kb.profile("Anthracnose"));
}

#[tokio::test]
async fn path_queries_encode_names() {
    let client = setup().await;

    assert_eq!(
        client.diseases_with("leaf spot").await.expect("Query failed"),
        vec!["Anthracnose".to_string(), "Husk Rot".to_string()]
    );
    assert_eq!(
        client.treatments_for("leaf spot").await.expect("Query failed"),
        vec!["copper fungicide".to_string(), "fungicide X".to_string()]
    );
    assert_eq!(
        client
            .symptoms_of("Twig/Branch Dieback")
            .await
            .expect("Query failed"),
        vec!["twig dieback".to_string()]
    );
    assert!(client
        .treatments_of("Twig/Branch Dieback")
        .await
        .expect("Query failed")
        .is_empty());
}

#[tokio::test]
async fn lists_match_catalog() {
    let client = setup().await;

    let catalog = client.catalog().await.expect("Catalog failed");
    assert_eq!(client.symptoms().await.expect("Query failed"), catalog.symptoms);
    assert_eq!(client.diseases().await.expect("Query failed"), catalog.diseases);
    assert_eq!(
        client.treatments().await.expect("Query failed"),
        vec!["copper fungicide".to_string(), "fungicide X".to_string()]
    );
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let client = setup().await;
    let client = DoctorClient::new(format!("{}/missing", client.base_url()));

    let err = client.health().await.expect_err("Request should fail");
    assert!(matches!(err, ClientError::NotFound(_)));
}

#[tokio::test]
async fn remote_source_renders_same_views_as_local() {
    let client = setup().await;
    let kb = KnowledgeBase::from_reader(TABLE.as_bytes()).expect("Failed to load table");
    let remote = Source::Remote(client);
    let local = Source::Local(kb);

    let commands = [
        Commands::Diagnose {
            symptom: "leaf spot".to_string(),
        },
        Commands::Diagnose {
            symptom: "glowing".to_string(),
        },
        Commands::Lookup {
            disease: "Twig/Branch Dieback".to_string(),
        },
        Commands::Symptoms,
        Commands::Diseases,
    ];

    for command in &commands {
        let expected = local.run(command).await.expect("Local query failed");
        let actual = remote.run(command).await.expect("Remote query failed");
        assert_eq!(actual, expected);
    }
}

#[tokio::test]
async fn remote_source_surfaces_client_errors() {
    let client = setup().await;
    let remote = Source::Remote(DoctorClient::new(format!("{}/missing", client.base_url())));

    let err = remote
        .run(&Commands::Symptoms)
        .await
        .expect_err("Request should fail");
    assert!(err.to_string().starts_with("Not found"));
}
