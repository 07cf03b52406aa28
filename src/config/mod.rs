use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "greet")]
#[command(about = "Say hello to a name from a flag or free-form arguments")]
pub struct GreeterConfig {
    #[arg(long, default_value = "Your Name")]
    pub name: String,

    /// Free-form words; when present they are joined and used as the name
    pub words: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "walkdir")]
#[command(about = "Recursively walk a directory and log every entry")]
pub struct WalkConfig {
    /// Directory to walk; multiple words are joined with spaces
    pub dir: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl WalkConfig {
    pub fn root(&self) -> String {
        self.dir.join(" ")
    }
}

impl Validate for WalkConfig {
    fn validate(&self) -> Result<()> {
        validate_path("dir", &self.root())
    }
}

/// DEBUG 大於零才算開啟，解析失敗一律當 0
pub fn debug_from(value: Option<&str>) -> bool {
    value.and_then(|v| v.parse::<i64>().ok()).unwrap_or(0) > 0
}

pub fn debug_enabled() -> bool {
    debug_from(std::env::var("DEBUG").ok().as_deref())
}
