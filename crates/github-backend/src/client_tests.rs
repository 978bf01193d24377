//! Unit tests for GitHubClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::GitHubClient;
    use crate::error::GitHubError;
    use clone_core::{CloneProtocol, ListError, RepositoryLister};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Helper to create a mock GitHub repository record
    fn mock_github_repo(name: &str, archived: bool, has_wiki: bool) -> serde_json::Value {
        serde_json::json!({
            "id": 12345,
            "name": name,
            "full_name": format!("modular-server-manager/{}", name),
            "private": false,
            "archived": archived,
            "has_wiki": has_wiki,
            "ssh_url": format!("git@github.com:modular-server-manager/{}.git", name),
            "clone_url": format!("https://github.com/modular-server-manager/{}.git", name),
            "owner": {"login": "modular-server-manager", "id": 1}
        })
    }

    async fn mount_listing(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/orgs/modular-server-manager/repos"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    fn client(server: &MockServer) -> GitHubClient {
        GitHubClient::with_base_url(&server.uri(), "modular-server-manager", "test-token")
    }

    #[tokio::test]
    async fn test_list_sends_expected_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/orgs/modular-server-manager/repos"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/vnd.github+json"))
            .and(header("X-GitHub-Api-Version", "2022-11-28"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([mock_github_repo("alpha", false, true)])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let repos = client(&mock_server).list_org_repos().unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "alpha");
        assert!(repos[0].has_wiki);
        assert!(!repos[0].archived);
        assert_eq!(
            repos[0].full_name.as_deref(),
            Some("modular-server-manager/alpha")
        );
    }

    #[tokio::test]
    async fn test_list_repositories_filters_and_derives_wiki() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("alpha", false, true),
                mock_github_repo("beta", true, false),
                mock_github_repo("root", false, false)
            ])),
        )
        .await;

        let repos = client(&mock_server).list_repositories().unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name(), "alpha");
        assert_eq!(
            repos[0].clone_url(),
            "git@github.com:modular-server-manager/alpha.git"
        );
        assert_eq!(
            repos[0].wiki_clone_url(),
            Some("git@github.com:modular-server-manager/alpha.wiki.git")
        );
    }

    #[tokio::test]
    async fn test_list_repositories_preserves_order() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("zeta", false, false),
                mock_github_repo("alpha", false, false),
                mock_github_repo("mu", false, true)
            ])),
        )
        .await;

        let repos = client(&mock_server).list_repositories().unwrap();
        let names: Vec<&str> = repos.iter().map(|r| r.name()).collect();

        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
        assert!(repos[0].wiki_clone_url().is_none());
        assert!(repos[2].wiki_clone_url().is_some());
    }

    #[tokio::test]
    async fn test_list_repositories_https_and_custom_control_repo() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_github_repo("root", false, false),
                mock_github_repo(".github", false, false)
            ])),
        )
        .await;

        let repos = client(&mock_server)
            .control_repo(".github")
            .protocol(CloneProtocol::Https)
            .list_repositories()
            .unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(
            repos[0].clone_url(),
            "https://github.com/modular-server-manager/root.git"
        );
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Bad credentials"})),
        )
        .await;

        let err = client(&mock_server).list_org_repos().unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized));

        let err = client(&mock_server).list_repositories().unwrap_err();
        assert!(matches!(err, ListError::Unauthorized));
    }

    #[tokio::test]
    async fn test_forbidden_is_unauthorized() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "42")
                .set_body_json(serde_json::json!({"message": "Resource not accessible"})),
        )
        .await;

        let err = client(&mock_server).list_org_repos().unwrap_err();
        assert!(matches!(err, GitHubError::Unauthorized));
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(403)
                .insert_header("x-ratelimit-remaining", "0")
                .set_body_json(serde_json::json!({"message": "API rate limit exceeded"})),
        )
        .await;

        let err = client(&mock_server).list_repositories().unwrap_err();
        assert!(matches!(err, ListError::Api { status: 429, .. }));
    }

    #[tokio::test]
    async fn test_org_not_found() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "Not Found"})),
        )
        .await;

        let err = client(&mock_server).list_repositories().unwrap_err();
        match err {
            ListError::NotFound(org) => assert_eq!(org, "modular-server-manager"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_carries_message() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"message": "boom"})),
        )
        .await;

        let err = client(&mock_server).list_org_repos().unwrap_err();
        match err {
            GitHubError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_protocol_error() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200).set_body_string("<html>not json</html>"),
        )
        .await;

        let err = client(&mock_server).list_repositories().unwrap_err();
        assert!(matches!(err, ListError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_protocol_error() {
        let mock_server = MockServer::start().await;
        mount_listing(
            &mock_server,
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"name": "alpha", "archived": false}])),
        )
        .await;

        let err = client(&mock_server).list_repositories().unwrap_err();
        assert!(matches!(err, ListError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_next_page_is_not_followed() {
        let mock_server = MockServer::start().await;
        let next = format!(
            "<{}/orgs/modular-server-manager/repos?page=2>; rel=\"next\"",
            mock_server.uri()
        );
        Mock::given(method("GET"))
            .and(path("/orgs/modular-server-manager/repos"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("link", next.as_str())
                    .set_body_json(serde_json::json!([mock_github_repo("alpha", false, false)])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let repos = client(&mock_server).list_repositories().unwrap();
        assert_eq!(repos.len(), 1);
    }

    #[test]
    fn test_transport_error() {
        // Nothing listens on port 1
        let client = GitHubClient::with_base_url("http://127.0.0.1:1", "org", "token");
        let err = client.list_repositories().unwrap_err();
        assert!(matches!(err, ListError::Transport(_)));
    }

    #[test]
    fn test_org_accessor() {
        let client = GitHubClient::new("modular-server-manager", "token");
        assert_eq!(client.org(), "modular-server-manager");
    }
}
