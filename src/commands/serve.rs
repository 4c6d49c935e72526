use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use tower_http::services::ServeDir;

use crate::{
    ServeArgs,
    config::Config,
    page::{PageComposer, PageError, ReadErrorKind, SyntaxHighlighter},
};

#[derive(Clone)]
struct AppState {
    composer: Arc<PageComposer>,
    highlight_css: Arc<str>,
}

/// A failed page request. Always answered with an error status, never with
/// partial content.
#[derive(thiserror::Error, Debug)]
enum ServeError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error("page task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl ServeError {
    /// Client-facing reason. Carries no filesystem paths.
    fn reason(&self) -> &'static str {
        match self {
            ServeError::Page(PageError::DocumentRead(err)) => match err.kind() {
                ReadErrorKind::NotFound => "document not found",
                ReadErrorKind::Io => "document could not be read",
            },
            ServeError::Page(PageError::Render(_)) => "document could not be rendered",
            ServeError::Page(PageError::Template(_)) => "page template failed",
            ServeError::Join(_) => "page task failed",
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        match &self {
            ServeError::Page(PageError::DocumentRead(err)) => {
                tracing::error!(error = %self, kind = ?err.kind(), "failed to read document");
            }
            _ => tracing::error!(error = %self, "failed to compose page"),
        }
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to render page: {}\n", self.reason()),
        )
            .into_response()
    }
}

/// Compose the page fresh for every request.
async fn page_handler(State(state): State<AppState>) -> Result<Html<String>, ServeError> {
    let composer = Arc::clone(&state.composer);
    let page = tokio::task::spawn_blocking(move || composer.compose()).await??;
    Ok(Html(page))
}

async fn highlight_css_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        state.highlight_css.to_string(),
    )
}

fn router(composer: PageComposer, config: &Config) -> Router {
    let highlight_css = SyntaxHighlighter::new(&config.markdown.highlight_theme)
        .generate_css()
        .unwrap_or_else(|| {
            tracing::warn!(
                theme = %config.markdown.highlight_theme,
                "unknown highlight theme, serving empty stylesheet"
            );
            String::new()
        });

    let state = AppState {
        composer: Arc::new(composer),
        highlight_css: highlight_css.into(),
    };

    Router::new()
        .route("/", get(page_handler))
        .route("/highlight.css", get(highlight_css_handler))
        .with_state(state)
        .fallback_service(ServeDir::new(&config.server.static_dir))
}

pub async fn run(args: &ServeArgs, config: &Config) -> Result<(), anyhow::Error> {
    // Fail on bad markdown settings or a broken template before binding
    let composer = PageComposer::from_config(config)?;
    let document = composer.source().path().display().to_string();
    let app = router(composer, config);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;

    let display_host = if args.bind == "0.0.0.0" {
        "localhost"
    } else {
        &args.bind
    };
    let url = format!("http://{}:{}", display_host, args.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%url, %document, "serving page");
    println!("\nServing {} at {}", document, url);
    println!("Press Ctrl+C to stop\n");

    if args.open
        && let Err(e) = open::that(&url)
    {
        tracing::warn!(error = %e, "failed to open browser");
    }

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    fn test_config(dir: &Path) -> Config {
        let mut config = Config::default();
        config.document.path = dir.join("README.md");
        config.server.static_dir = dir.join("static");
        config
    }

    fn test_router(config: &Config) -> Router {
        router(PageComposer::from_config(config).unwrap(), config)
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_page_route_renders_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# Hello\n\nWorld").unwrap();
        let config = test_config(dir.path());

        let (status, body) = get_path(test_router(&config), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<p>World</p>"));
        assert!(body.contains("Mastering Next.js Interview"));
    }

    #[tokio::test]
    async fn test_page_route_rereads_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("README.md");
        std::fs::write(&doc, "first").unwrap();
        let config = test_config(dir.path());
        let app = test_router(&config);

        let (_, body) = get_path(app.clone(), "/").await;
        assert!(body.contains("<p>first</p>"));

        std::fs::write(&doc, "second").unwrap();
        let (_, body) = get_path(app, "/").await;
        assert!(body.contains("<p>second</p>"));
    }

    #[tokio::test]
    async fn test_missing_document_is_server_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let (status, body) = get_path(test_router(&config), "/").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Failed to render page: document not found\n");
        assert!(!body.contains(&*dir.path().to_string_lossy()));
    }

    #[tokio::test]
    async fn test_highlight_css_route() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.markdown.highlight_theme = "dracula".to_string();

        let (status, body) = get_path(test_router(&config), "/highlight.css").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.is_empty());
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("static")).unwrap();
        std::fs::write(dir.path().join("static/logo.svg"), "<svg></svg>").unwrap();
        let config = test_config(dir.path());

        let (status, body) = get_path(test_router(&config), "/logo.svg").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<svg></svg>");

        let (status, _) = get_path(test_router(&config), "/nope.png").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
