//! Generate static files

use anyhow::Result;
use notify::Watcher;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::content::loader::ContentLoader;
use crate::generator::Generator;
use crate::Blog;

/// Render every post to the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = ContentLoader::new(blog).load_posts()?;
    tracing::info!("Loaded {} posts", posts.len());

    Generator::new(blog).generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(blog: &Blog) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    if blog.source_dir.exists() {
        watcher.watch(&blog.source_dir, notify::RecursiveMode::Recursive)?;
    }

    let config_path = blog.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, notify::RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    // Reload so config edits take effect.
                    match Blog::new(&blog.base_dir) {
                        Ok(fresh) => {
                            fresh.dark_mode.set_is_dark_mode(blog.dark_mode.is_dark_mode());
                            if let Err(e) = run(&fresh) {
                                tracing::error!("Generation failed: {}", e);
                            }
                        }
                        Err(e) => tracing::error!("Failed to reload config: {}", e),
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
