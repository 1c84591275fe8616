use std::path::{Path, PathBuf};

use serde::Deserialize;

use pbxpatch::{BlockId, PatchError, PatchRule, PatchSpec};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "xcprep.toml";

// Defaults mirror the GeoCameraApp project this tool grew out of.
const DEFAULT_TARGET_BLOCKS: [&str; 4] = [
    "25A3AEBA2F4029A600740ED4", // GeoCameraAppTests Debug
    "25A3AEBB2F4029A600740ED4", // GeoCameraAppTests Release
    "25A3AEBD2F4029A600740ED4", // GeoCameraAppUITests Debug
    "25A3AEBE2F4029A600740ED4", // GeoCameraAppUITests Release
];

const DEFAULT_NEEDLE: &str =
    "GENERATE_INFOPLIST_FILE = NO; INFOPLIST_FILE = GeoCameraApp/Info.plist;";
const DEFAULT_REPLACEMENT: &str = "GENERATE_INFOPLIST_FILE = YES;";

/// Optional `xcprep.toml`. Every key has a default, so an absent file means
/// an all-default config.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub patch: PatchConfig,

    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PatchConfig {
    /// pbxproj file to patch when the CLI gives no path.
    #[serde(default)]
    pub project_file: Option<PathBuf>,

    /// Build-configuration blocks the rewrite is confined to.
    #[serde(default = "default_target_blocks")]
    pub target_blocks: Vec<String>,

    /// Exact substring to rewrite inside those blocks.
    #[serde(default = "default_needle")]
    pub needle: String,

    #[serde(default = "default_replacement")]
    pub replacement: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct IconsConfig {
    /// Square source image; falls back to the synthesized placeholder.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Xcode project directory containing Assets.xcassets.
    #[serde(default)]
    pub project_dir: Option<PathBuf>,

    /// Where to persist the placeholder when no source exists.
    #[serde(default)]
    pub reference_out: Option<PathBuf>,
}

fn default_target_blocks() -> Vec<String> {
    DEFAULT_TARGET_BLOCKS.iter().map(|s| s.to_string()).collect()
}

fn default_needle() -> String {
    DEFAULT_NEEDLE.to_string()
}

fn default_replacement() -> String {
    DEFAULT_REPLACEMENT.to_string()
}

impl Default for PatchConfig {
    fn default() -> Self {
        PatchConfig {
            project_file: None,
            target_blocks: default_target_blocks(),
            needle: default_needle(),
            replacement: default_replacement(),
        }
    }
}

impl Config {
    /// Read config from `path`, or from `xcprep.toml` in the working
    /// directory if present. An absent default file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Config, String> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Config::default());
                }
                p
            }
        };

        let text = std::fs::read_to_string(&path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        toml::from_str(&text)
            .map_err(|e| format!("TOML parse error in '{}': {}", path.display(), e))
    }
}

impl PatchConfig {
    /// Build the patch spec, with CLI-provided IDs taking precedence over
    /// the configured ones.
    pub fn to_spec(&self, override_ids: &[String]) -> Result<PatchSpec, PatchError> {
        let ids = if override_ids.is_empty() {
            &self.target_blocks
        } else {
            override_ids
        };

        let mut target_blocks = Vec::with_capacity(ids.len());
        for id in ids {
            target_blocks.push(BlockId::parse(id)?);
        }

        Ok(PatchSpec {
            target_blocks,
            rule: PatchRule {
                needle: self.needle.clone(),
                replacement: self.replacement.clone(),
            },
        })
    }
}
