//! Preview server with live rendering and live reload

use anyhow::Result;
use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket},
        Path, State, WebSocketUpgrade,
    },
    http::{header, HeaderMap, Request, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::content::loader::ContentLoader;
use crate::templates::{dark_mode_url, TemplateRenderer};
use crate::Blog;

/// Live reload script injected into HTML pages
const LIVE_RELOAD_SCRIPT: &str = r#"
<script>
(function() {
    var ws = new WebSocket('ws://' + location.host + '/__livereload');
    ws.onmessage = function(msg) {
        if (msg.data === 'reload') {
            location.reload();
        }
    };
    ws.onclose = function() {
        console.log('Live reload disconnected. Attempting to reconnect...');
        setTimeout(function() { location.reload(); }, 1000);
    };
})();
</script>
</body>
"#;

/// Server state
struct ServerState {
    blog: Blog,
    renderer: TemplateRenderer,
    reload_tx: broadcast::Sender<()>,
    live_reload: bool,
}

/// Body of the dark-mode toggle form
#[derive(Debug, Deserialize)]
struct DarkModeForm {
    on: bool,
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16, watch: bool, open: bool) -> Result<()> {
    let (reload_tx, _) = broadcast::channel::<()>(16);

    let state = Arc::new(ServerState {
        blog: blog.clone(),
        renderer: TemplateRenderer::new(&blog.config),
        reload_tx: reload_tx.clone(),
        live_reload: watch,
    });

    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}", ip, port);
    println!("Server running at {}", url);
    if watch {
        println!("Live reload enabled. Watching for changes...");
    }
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    if watch {
        let source_dir = blog.source_dir.clone();
        let config_path = blog.base_dir.join("_config.yml");
        let blog_clone = blog.clone();

        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_reload(source_dir, config_path, blog_clone, reload_tx) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<ServerState>) -> Router {
    let post_route = format!("/{}/:slug", state.blog.config.post_dir.trim_matches('/'));
    let dark_mode_route = dark_mode_url(&state.blog.config);

    Router::new()
        .route("/__livereload", get(livereload_handler))
        .route(&dark_mode_route, post(dark_mode_handler))
        .route(&post_route, get(post_handler))
        .route(&format!("{}/", post_route), get(post_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Render a post on request with the current dark-mode preference
async fn post_handler(
    State(state): State<Arc<ServerState>>,
    Path(slug): Path<String>,
) -> Response {
    let loader = ContentLoader::new(&state.blog);

    match loader.load_post(&slug) {
        Ok(Some(loaded)) => {
            let html = state
                .renderer
                .render_post(&loaded.post, state.blog.dark_mode.is_dark_mode());
            if state.live_reload {
                Html(inject_live_reload(&html)).into_response()
            } else {
                Html(html).into_response()
            }
        }
        Ok(None) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        Err(e) => {
            tracing::error!("Failed to load post {}: {}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to load post").into_response()
        }
    }
}

/// Set the dark-mode preference and send the browser back where it was
async fn dark_mode_handler(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    Form(form): Form<DarkModeForm>,
) -> Redirect {
    state.blog.dark_mode.set_is_dark_mode(form.on);

    let back = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(local_path)
        .unwrap_or_else(|| "/".to_string());
    Redirect::to(&back)
}

/// Path and query of a referer, if it stays on this site
///
/// Absolute URLs are reduced to their path. Protocol-relative values and
/// anything not rooted at `/` are refused.
fn local_path(referer: &str) -> Option<String> {
    if let Ok(parsed) = ::url::Url::parse(referer) {
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        let mut path = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            path.push('?');
            path.push_str(query);
        }
        return local_path(&path);
    }

    let rooted = referer.starts_with('/')
        && !referer.starts_with("//")
        && !referer.starts_with("/\\");
    rooted.then(|| referer.to_string())
}

/// Watch for file changes and trigger reload
///
/// Blocks on the debouncer channel, so it runs on a blocking thread.
fn watch_and_reload(
    source_dir: PathBuf,
    config_path: PathBuf,
    blog: Blog,
    reload_tx: broadcast::Sender<()>,
) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();

    // Create debouncer to avoid multiple rapid rebuilds
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if source_dir.exists() {
        debouncer
            .watcher()
            .watch(&source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", source_dir);
    }

    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .map(|e| e.path.as_path())
                    .filter(|path| is_relevant_change(path))
                    .collect();

                if changed.is_empty() {
                    continue;
                }

                for path in &changed {
                    tracing::info!("File changed: {}", path.display());
                }

                match blog.generate() {
                    Ok(_) => {
                        tracing::info!("Regenerated successfully");
                        // Notify all connected clients to reload
                        let _ = reload_tx.send(());
                    }
                    Err(e) => {
                        tracing::error!("Generation failed: {}", e);
                    }
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Whether a changed path should trigger a rebuild
///
/// Editor backups, VCS internals and Finder metadata are ignored.
fn is_relevant_change(path: &std::path::Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git") && !path_str.contains(".DS_Store") && !path_str.ends_with('~')
}

/// WebSocket handler for live reload
async fn livereload_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    let reload_rx = state.reload_tx.subscribe();
    ws.on_upgrade(move |socket| handle_livereload_socket(socket, reload_rx))
}

/// Handle WebSocket connection for live reload
async fn handle_livereload_socket(mut socket: WebSocket, mut reload_rx: broadcast::Receiver<()>) {
    tracing::debug!("Live reload client connected");

    loop {
        tokio::select! {
            result = reload_rx.recv() => {
                match result {
                    Ok(_) => {
                        if socket.send(Message::Text("reload".to_string())).await.is_err() {
                            break;
                        }
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                }
            }
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        if socket.send(Message::Pong(data)).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }
        }
    }

    tracing::debug!("Live reload client disconnected");
}

/// Serve generated files, injecting the live reload script into HTML
async fn fallback_handler(
    State(state): State<Arc<ServerState>>,
    request: Request<Body>,
) -> Response {
    let public_dir = &state.blog.public_dir;
    let path = request.uri().path();
    let clean_path = path.trim_start_matches('/');
    let candidate = public_dir.join(clean_path);
    let file_path = if candidate.is_dir() {
        candidate.join("index.html")
    } else {
        candidate
    };

    let is_html = file_path
        .extension()
        .map(|ext| ext == "html" || ext == "htm")
        .unwrap_or(false);

    if is_html && state.live_reload {
        match tokio::fs::read_to_string(&file_path).await {
            Ok(content) => Html(inject_live_reload(&content)).into_response(),
            Err(_) => (StatusCode::NOT_FOUND, "Not found").into_response(),
        }
    } else {
        let mut service = ServeDir::new(public_dir).append_index_html_on_directories(true);
        match service.try_call(request).await {
            Ok(response) => response.into_response(),
            Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response(),
        }
    }
}

/// Inject live reload script into HTML content
fn inject_live_reload(html: &str) -> String {
    if html.contains("</body>") {
        html.replace("</body>", LIVE_RELOAD_SCRIPT)
    } else {
        format!("{}{}", html, LIVE_RELOAD_SCRIPT)
    }
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::DARK_MODE_PATH;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[test]
    fn test_inject_live_reload() {
        let html = inject_live_reload("<html><body><p>x</p></body></html>");
        assert!(html.contains("/__livereload"));
        assert!(html.ends_with("</body>\n</html>"));
        assert_eq!(html.matches("</body>").count(), 1);
    }

    #[test]
    fn test_inject_without_body_appends() {
        let html = inject_live_reload("<p>x</p>");
        assert!(html.starts_with("<p>x</p>"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn test_relevant_changes() {
        use std::path::Path;
        assert!(is_relevant_change(Path::new("/site/posts/hello.json")));
        assert!(!is_relevant_change(Path::new("/site/posts/hello.json~")));
        assert!(!is_relevant_change(Path::new("/site/.git/index")));
    }

    #[tokio::test]
    async fn test_dark_mode_endpoint_sets_preference() {
        let dir = TempDir::new().unwrap();
        let (blog, app) = test_app(dir.path());

        let request = Request::post(DARK_MODE_PATH)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(header::REFERER, "/posts/hello")
            .body(Body::from("on=true"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/posts/hello");
        assert!(blog.dark_mode.is_dark_mode());
    }

    #[tokio::test]
    async fn test_dark_mode_redirect_stays_on_site() {
        let dir = TempDir::new().unwrap();

        for (referer, expected) in [
            ("https://evil.example/phish", "/phish"),
            ("//evil.example/phish", "/"),
            ("javascript:alert(1)", "/"),
            ("http://localhost:4000/posts/hello?x=1", "/posts/hello?x=1"),
        ] {
            let (_, app) = test_app(dir.path());
            let request = Request::post(DARK_MODE_PATH)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::REFERER, referer)
                .body(Body::from("on=false"))
                .unwrap();
            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.headers()[header::LOCATION], expected, "{}", referer);
        }
    }

    #[test]
    fn test_local_path() {
        assert_eq!(local_path("/posts/a").as_deref(), Some("/posts/a"));
        assert_eq!(local_path("/\\evil.example"), None);
        assert_eq!(local_path("posts/a"), None);
    }

    #[tokio::test]
    async fn test_dark_mode_route_under_site_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "root: /blog/\n").unwrap();
        let (blog, app) = test_app(dir.path());

        let request = Request::post("/blog/dark-mode")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("on=true"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(blog.dark_mode.is_dark_mode());
    }

    #[tokio::test]
    async fn test_post_rendered_with_current_preference() {
        let dir = TempDir::new().unwrap();
        let posts_dir = dir.path().join("posts");
        fs::create_dir_all(&posts_dir).unwrap();
        fs::write(posts_dir.join("hello.json"), r#"{ "title": "Hello" }"#).unwrap();

        let (blog, app) = test_app(dir.path());
        blog.dark_mode.set_is_dark_mode(true);

        let request = Request::get("/posts/hello").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains(r#"<div class="page dark">"#));
    }

    #[tokio::test]
    async fn test_missing_post_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (_, app) = test_app(dir.path());

        let request = Request::get("/posts/missing").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_encoded_traversal_slug_is_not_found() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("posts")).unwrap();
        fs::write(dir.path().join("secret.json"), r#"{ "title": "TOP-SECRET" }"#).unwrap();
        let (_, app) = test_app(dir.path());

        let request = Request::get("/posts/..%2Fsecret").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(!String::from_utf8_lossy(&bytes).contains("TOP-SECRET"));
    }

    fn test_app(dir: &std::path::Path) -> (Blog, Router) {
        let blog = Blog::new(dir).unwrap();
        let (reload_tx, _) = broadcast::channel::<()>(1);
        let state = Arc::new(ServerState {
            blog: blog.clone(),
            renderer: TemplateRenderer::new(&blog.config),
            reload_tx,
            live_reload: false,
        });
        (blog, router(state))
    }
}
