//! Listing and pagination against a mocked Cloud Controller.

use ccv2::{
    Application, Client, Context, Event, FilterField, List, Organization, Query, Resource, Space,
};
use chrono::{TimeZone, Utc};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn org_json(guid: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "metadata": {
            "guid": guid,
            "url": format!("/v2/organizations/{guid}"),
            "created_at": "2016-06-08T16:41:33Z",
            "updated_at": "2016-06-08T16:41:37Z"
        },
        "entity": {
            "name": name,
            "billing_enabled": false,
            "quota_definition_guid": "dcb680a9-b190-4838-a3d2-b84aa17517a6",
            "status": "active"
        }
    })
}

fn names(orgs: &[Organization]) -> Vec<&str> {
    orgs.iter().map(|o| o.name()).collect()
}

#[tokio::test]
async fn test_list_organizations_with_query() {
    let mock_server = MockServer::start().await;

    let body = r#"
{
    "next_url": "",
    "resources": [
        {
            "entity": {
                "billing_enabled": true,
                "name": "NASA",
                "quota_definition_guid": "dcb680a9-b190-4838-a3d2-b84aa17517a6",
                "status": "active"
            },
            "metadata": {
                "created_at": "2016-06-08T16:41:33Z",
                "guid": "a7aff246-5f5b-4cf8-87d8-f316053e4a20",
                "updated_at": "2016-06-08T16:41:37Z"
            }
        }
    ]
}"#;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("q", "name:NASA"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let orgs = client
        .organizations(
            &Context::background(),
            &[Query::equal(FilterField::Name, "NASA")],
        )
        .await
        .unwrap();

    assert_eq!(orgs.len(), 1);
    let org = &orgs[0];
    assert_eq!(org.guid(), "a7aff246-5f5b-4cf8-87d8-f316053e4a20");
    assert_eq!(org.metadata.created_at, "2016-06-08T16:41:33Z");
    assert_eq!(org.metadata.updated_at, "2016-06-08T16:41:37Z");
    assert_eq!(org.entity.name, "NASA");
    assert!(org.entity.billing_enabled);
    assert_eq!(
        org.entity.quota_definition_guid,
        "dcb680a9-b190-4838-a3d2-b84aa17517a6"
    );
    assert_eq!(org.entity.status, "active");
}

#[tokio::test]
async fn test_list_spaces_null_quota() {
    let mock_server = MockServer::start().await;

    let body = r#"
{
    "next_url": null,
    "resources": [
        {
            "entity": {
                "allow_ssh": true,
                "name": "rocket",
                "organization_guid": "d154425c-dccc-42e6-b6b4-27d46c3b42cb",
                "space_quota_definition_guid": null
            },
            "metadata": {
                "created_at": "2016-06-08T16:41:40Z",
                "guid": "2e100106-0b74-4062-8671-0d375f951cb4",
                "updated_at": "2016-06-08T16:41:26Z"
            }
        }
    ]
}"#;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param("q", "name:rocket"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let spaces = client
        .spaces(
            &Context::background(),
            &[Query::equal(FilterField::Name, "rocket")],
        )
        .await
        .unwrap();

    assert_eq!(spaces.len(), 1);
    let space = &spaces[0];
    assert_eq!(space.guid(), "2e100106-0b74-4062-8671-0d375f951cb4");
    assert_eq!(space.metadata.created_at, "2016-06-08T16:41:40Z");
    assert_eq!(space.metadata.updated_at, "2016-06-08T16:41:26Z");
    assert_eq!(space.entity.name, "rocket");
    assert_eq!(
        space.entity.organization_guid,
        "d154425c-dccc-42e6-b6b4-27d46c3b42cb"
    );
    assert_eq!(space.entity.space_quota_definition_guid, "");
    assert!(space.entity.allow_ssh);
}

#[tokio::test]
async fn test_space_quota_accepts_misspelled_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [
                { "metadata": { "guid": "s-1" }, "entity": { "space_quota_definition_guid": "quota-1" } },
                { "metadata": { "guid": "s-2" }, "entity": { "space_quota_definiton_guid": "quota-2" } }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let spaces = Space::list(&client, &Context::background(), &[]).await.unwrap();

    assert_eq!(spaces[0].entity.space_quota_definition_guid, "quota-1");
    assert_eq!(spaces[1].entity.space_quota_definition_guid, "quota-2");
}

#[tokio::test]
async fn test_list_applications_decodes_every_field() {
    let mock_server = MockServer::start().await;

    let body = r#"
{
    "next_url": null,
    "resources": [
        {
            "entity": {
                "buildpack": "buildpack",
                "command": "command",
                "detected_buildpack": "detected_buildpack",
                "detected_start_command": "detected_start_command",
                "diego": true,
                "disk_quota": 1024,
                "enable_ssh": true,
                "health_check_timeout": 30,
                "health_check_type": "port",
                "instances": 1,
                "memory": 1024,
                "name": "name-2443",
                "package_state": "PENDING",
                "package_updated_at": "2016-06-08T16:41:45Z",
                "space_guid": "9c5c8a91-a728-4608-9f5e-6c8026c3a2ac",
                "stack_guid": "f6c960cc-98ba-4fd1-b197-ecbf39108aa2",
                "staging_failed_description": null,
                "staging_failed_reason": null,
                "staging_task_id": null,
                "state": "STOPPED",
                "version": "f5696e0f-087d-49b0-9ad7-4756c49a6ba6"
            },
            "metadata": {
                "created_at": "2016-06-08T16:41:45Z",
                "guid": "6064d98a-95e6-400b-bc03-be65e6d59622",
                "updated_at": "2016-06-08T16:41:45Z"
            }
        }
    ]
}"#;

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .and(query_param_is_missing("q"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let apps = client
        .applications(&Context::background(), &[])
        .await
        .unwrap();

    assert_eq!(apps.len(), 1);
    let app = &apps[0];
    assert_eq!(app.guid(), "6064d98a-95e6-400b-bc03-be65e6d59622");
    assert_eq!(app.metadata.created_at, "2016-06-08T16:41:45Z");
    assert_eq!(app.metadata.updated_at, "2016-06-08T16:41:45Z");
    assert_eq!(app.entity.name, "name-2443");
    assert_eq!(app.entity.space_guid, "9c5c8a91-a728-4608-9f5e-6c8026c3a2ac");
    assert_eq!(app.entity.stack_guid, "f6c960cc-98ba-4fd1-b197-ecbf39108aa2");
    assert_eq!(app.entity.memory, 1024);
    assert_eq!(app.entity.instances, 1);
    assert_eq!(app.entity.disk_quota, 1024);
    assert_eq!(app.entity.state, "STOPPED");
    assert_eq!(app.entity.version, "f5696e0f-087d-49b0-9ad7-4756c49a6ba6");
    assert_eq!(app.entity.package_state, "PENDING");
    assert_eq!(app.entity.health_check_type, "port");
    assert_eq!(app.entity.health_check_timeout, 30);
    assert_eq!(app.entity.buildpack, "buildpack");
    assert_eq!(app.entity.command, "command");
    assert_eq!(app.entity.detected_buildpack, "detected_buildpack");
    assert_eq!(app.entity.detected_command, "detected_start_command");
    assert!(app.entity.diego);
    assert!(app.entity.enable_ssh);
}

#[tokio::test]
async fn test_list_events_parses_timestamp() {
    let mock_server = MockServer::start().await;

    let body = r#"
{
    "next_url": null,
    "resources": [
        {
            "metadata": {
                "created_at": "2016-06-08T16:41:23Z",
                "guid": "b8ede8e1-afc8-40a1-baae-236a0a77b27b",
                "updated_at": "2016-06-08T16:41:26Z"
            },
            "entity": {
                "actee": "guid-e7790fa4-be2b-4a0f-aa82-c124342b0bb4",
                "actee_name": "name-171",
                "actee_type": "name-170",
                "actor": "guid-008640fc-d316-4602-9251-c8d09bbdc750",
                "actor_name": "name-169",
                "actor_type": "name-168",
                "organization_guid": "86aa12ee-8c4f-4b26-b391-2be6c1730dbc",
                "space_guid": "3a1368e7-e3b7-46af-a98d-57b9c71445e7",
                "timestamp": "2016-06-08T16:41:23Z",
                "type": "app.crash"
            }
        }
    ]
}"#;

    Mock::given(method("GET"))
        .and(path("/v2/events"))
        .and(query_param("q", "type:app.crash"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let events = client
        .events(
            &Context::background(),
            &[Query::equal(FilterField::Type, "app.crash")],
        )
        .await
        .unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.guid(), "b8ede8e1-afc8-40a1-baae-236a0a77b27b");
    assert_eq!(event.metadata.created_at, "2016-06-08T16:41:23Z");
    assert_eq!(event.metadata.updated_at, "2016-06-08T16:41:26Z");
    assert_eq!(event.entity.event_type, "app.crash");
    assert_eq!(event.entity.actor, "guid-008640fc-d316-4602-9251-c8d09bbdc750");
    assert_eq!(event.entity.actor_type, "name-168");
    assert_eq!(event.entity.actor_name, "name-169");
    assert_eq!(event.entity.actee, "guid-e7790fa4-be2b-4a0f-aa82-c124342b0bb4");
    assert_eq!(event.entity.actee_type, "name-170");
    assert_eq!(event.entity.actee_name, "name-171");
    assert_eq!(
        event.entity.timestamp,
        Utc.with_ymd_and_hms(2016, 6, 8, 16, 41, 23).unwrap()
    );
    assert_eq!(event.entity.space_guid, "3a1368e7-e3b7-46af-a98d-57b9c71445e7");
    assert_eq!(
        event.entity.organization_guid,
        "86aa12ee-8c4f-4b26-b391-2be6c1730dbc"
    );
}

#[tokio::test]
async fn test_multiple_queries_are_repeated_q_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/events"))
        .and(query_param("q", "type:app.crash"))
        .and(query_param("q", "timestamp>2016-06-08T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let events = Event::list(
        &client,
        &Context::background(),
        &[
            Query::equal(FilterField::Type, "app.crash"),
            Query::greater(FilterField::Timestamp, "2016-06-08T00:00:00Z"),
        ],
    )
    .await
    .unwrap();

    assert!(events.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let q_count = requests[0].url.query_pairs().filter(|(k, _)| k == "q").count();
    assert_eq!(q_count, 2);
}

#[tokio::test]
async fn test_single_page_issues_one_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 3,
            "total_pages": 1,
            "prev_url": null,
            "next_url": null,
            "resources": [org_json("o-3", "c"), org_json("o-1", "a"), org_json("o-2", "b")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let orgs = client
        .organizations(&Context::background(), &[])
        .await
        .unwrap();

    assert_eq!(names(&orgs), vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_two_pages_follow_relative_next_url() {
    let mock_server = MockServer::start().await;
    let next = "/v2/organizations?order-direction=asc&page=2&q=name%3Ax&results-per-page=2";

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 3,
            "total_pages": 2,
            "next_url": next,
            "resources": [org_json("o-1", "first"), org_json("o-2", "second")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 3,
            "total_pages": 2,
            "prev_url": "/v2/organizations?order-direction=asc&page=1&q=name%3Ax&results-per-page=2",
            "next_url": null,
            "resources": [org_json("o-3", "third")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let orgs = client
        .organizations(
            &Context::background(),
            &[Query::equal(FilterField::Name, "x")],
        )
        .await
        .unwrap();

    assert_eq!(names(&orgs), vec!["first", "second", "third"]);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    let second = &requests[1].url;
    assert_eq!(
        format!("{}?{}", second.path(), second.query().unwrap_or_default()),
        next
    );
}

#[tokio::test]
async fn test_absolute_next_url_is_used_verbatim() {
    let first_server = MockServer::start().await;
    let second_server = MockServer::start().await;
    let next = format!("{}/v2/apps?page=2&results-per-page=1", second_server.uri());

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": next,
            "resources": [{ "metadata": { "guid": "app-1" }, "entity": { "name": "one" } }]
        })))
        .expect(1)
        .mount(&first_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": "",
            "resources": [{ "metadata": { "guid": "app-2" }, "entity": { "name": "two" } }]
        })))
        .expect(1)
        .mount(&second_server)
        .await;

    let client = Client::new(&first_server.uri()).unwrap();
    let apps = Application::list(&client, &Context::background(), &[])
        .await
        .unwrap();

    let guids: Vec<_> = apps.iter().map(|a| a.guid()).collect();
    assert_eq!(guids, vec!["app-1", "app-2"]);
}

#[tokio::test]
async fn test_pages_are_concatenated_without_dedup() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param_is_missing("page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": "/v2/organizations?page=2",
            "resources": [org_json("o-1", "same")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/organizations"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [org_json("o-1", "same")]
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let orgs = Organization::list(&client, &Context::background(), &[])
        .await
        .unwrap();

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0], orgs[1]);
}

#[tokio::test]
async fn test_list_page_returns_single_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param("q", "organization_guid:org-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "total_results": 2,
            "total_pages": 2,
            "prev_url": null,
            "next_url": "/v2/spaces?page=2&q=organization_guid%3Aorg-1",
            "resources": [{ "metadata": { "guid": "s-1" }, "entity": { "name": "dev" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let page = Space::list_page(
        &client,
        &Context::background(),
        Space::PATH,
        &[Query::equal(FilterField::OrganizationGuid, "org-1")],
    )
    .await
    .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.resources[0].name(), "dev");
    assert!(page.has_more());
    assert_eq!(
        page.next_url.as_deref(),
        Some("/v2/spaces?page=2&q=organization_guid%3Aorg-1")
    );
    assert_eq!(page.total_results, Some(2));
    assert_eq!(page.total_pages, Some(2));
    assert!(page.prev_url.is_none());
}

#[tokio::test]
async fn test_organization_spaces_filters_by_guid() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/spaces"))
        .and(query_param("q", "organization_guid:o-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [{ "metadata": { "guid": "s-1" }, "entity": { "name": "dev", "organization_guid": "o-1" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/apps"))
        .and(query_param("q", "space_guid:s-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": [{ "metadata": { "guid": "a-1" }, "entity": { "name": "web", "space_guid": "s-1" } }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let ctx = Context::background();
    let org: Organization = serde_json::from_value(org_json("o-1", "acme")).unwrap();

    let spaces = org.spaces(&client, &ctx).await.unwrap();
    assert_eq!(spaces.len(), 1);

    let apps = spaces[0].applications(&client, &ctx).await.unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].name(), "web");
}

#[tokio::test]
async fn test_application_events_filters_by_actee() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/events"))
        .and(query_param("q", "actee:a-1"))
        .and(query_param("q", "type:app.crash"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_url": null,
            "resources": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri()).unwrap();
    let app: Application =
        serde_json::from_value(serde_json::json!({ "metadata": { "guid": "a-1" } })).unwrap();

    let events = app
        .events(
            &client,
            &Context::background(),
            &[Query::equal(FilterField::Type, "app.crash")],
        )
        .await
        .unwrap();
    assert!(events.is_empty());
}
