//! Layout loader for the tieba CLI
//!
//! Implements single-source priority loading:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./tieba.json or ./.tieba/config.json
//! 3. User config: <config_dir>/tieba/config.json
//! 4. Built-in tieba homepage layout

use anyhow::{anyhow, Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use tieba_core::SiteLayout;
use tracing::debug;

/// Where a loaded layout came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutSource {
    File(PathBuf),
    BuiltIn,
}

impl fmt::Display for LayoutSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutSource::File(path) => write!(f, "{}", path.display()),
            LayoutSource::BuiltIn => f.write_str("built-in layout"),
        }
    }
}

/// A validated layout together with its origin
#[derive(Debug, Clone)]
pub struct LoadedLayout {
    pub layout: SiteLayout,
    pub source: LayoutSource,
}

/// CLI layout loader
pub struct LayoutLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Directory searched for project-local layouts (defaults to cwd)
    search_root: Option<PathBuf>,
    /// User configuration directory (defaults to the platform config dir)
    user_config_dir: Option<PathBuf>,
    /// Whether to consult the user configuration directory at all
    use_user_config: bool,
}

impl LayoutLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            search_root: None,
            user_config_dir: None,
            use_user_config: true,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Search this directory instead of the current working directory
    pub fn with_search_root(mut self, root: PathBuf) -> Self {
        self.search_root = Some(root);
        self
    }

    /// Use this directory instead of the platform config directory
    pub fn with_user_config_dir(mut self, dir: PathBuf) -> Self {
        self.user_config_dir = Some(dir);
        self
    }

    /// Skip the user configuration directory
    pub fn without_user_config(mut self) -> Self {
        self.use_user_config = false;
        self
    }

    /// Load and validate the layout
    pub async fn load(&self) -> Result<LoadedLayout> {
        if let Some(override_path) = &self.config_override {
            let (layout, path) = self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load layout from override path: {}",
                    override_path.display()
                )
            })?;
            return Ok(LoadedLayout {
                layout,
                source: LayoutSource::File(path),
            });
        }

        for candidate in self.candidates()? {
            if candidate.is_file() {
                let layout = self.load_file(&candidate).await?;
                return Ok(LoadedLayout {
                    layout,
                    source: LayoutSource::File(candidate),
                });
            }
        }

        debug!("no layout file found, using built-in layout");
        Ok(LoadedLayout {
            layout: SiteLayout::tieba(),
            source: LayoutSource::BuiltIn,
        })
    }

    /// Candidate files in priority order
    fn candidates(&self) -> Result<Vec<PathBuf>> {
        let root = match &self.search_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        let mut candidates = vec![
            root.join("tieba.json"),
            root.join(".tieba").join("config.json"),
        ];

        if self.use_user_config {
            let user_dir = self.user_config_dir.clone().or_else(dirs::config_dir);
            if let Some(dir) = user_dir {
                candidates.push(dir.join("tieba").join("config.json"));
            }
        }

        Ok(candidates)
    }

    /// Load a layout from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<(SiteLayout, PathBuf)> {
        if path.is_file() {
            Ok((self.load_file(path).await?, path.to_path_buf()))
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                Ok((self.load_file(&config_file).await?, config_file))
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single layout file
    async fn load_file(&self, path: &Path) -> Result<SiteLayout> {
        debug!(path = %path.display(), "loading layout");
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

        SiteLayout::from_json(&content)
            .with_context(|| format!("Failed to parse layout file: {}", path.display()))
    }
}

impl Default for LayoutLoader {
    fn default() -> Self {
        Self::new()
    }
}
