use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(default)]
pub struct Cfg {
    api_base: String,
    fetch_limit: usize,
    timeout_secs: u64,
}

impl Default for Cfg {
    fn default() -> Self {
        Cfg {
            api_base: String::from("https://hacker-news.firebaseio.com/v0"),
            fetch_limit: 500,
            timeout_secs: 10,
        }
    }
}

impl Cfg {
    pub fn new() -> Self {
        Cfg::default()
    }

    pub fn from_str(cfg_str: &str) -> Self {
        if let Ok(cfg) = serde_yaml::from_str(cfg_str) {
            return cfg;
        }
        return Cfg::new();
    }

    pub fn load(path: &Path) -> Self {
        if let Ok(cfg_str) = fs::read_to_string(path) {
            return Cfg::from_str(&cfg_str);
        }
        Cfg::new()
    }

    pub fn get_api_base(&self) -> &str {
        &self.api_base
    }

    pub fn get_fetch_limit(&self) -> usize {
        self.fetch_limit
    }

    pub fn set_fetch_limit(&mut self, limit: usize) {
        self.fetch_limit = limit;
    }

    pub fn get_timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_syntax() {
        let cfg_str = "api_base: https://example.org/v0
fetch_limit: 100
timeout_secs: 5
";
        let cfg = Cfg::from_str(cfg_str);
        assert_eq!(cfg.get_api_base(), "https://example.org/v0");
        assert_eq!(cfg.get_fetch_limit(), 100);
        assert_eq!(cfg.get_timeout_secs(), 5);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let cfg = Cfg::from_str("fetch_limit: 50\n");
        assert_eq!(cfg.get_fetch_limit(), 50);
        assert_eq!(cfg.get_api_base(), "https://hacker-news.firebaseio.com/v0");
        assert_eq!(cfg.get_timeout_secs(), 10);
    }

    #[test]
    fn test_malformed_yaml_falls_back() {
        let cfg = Cfg::from_str(": not yaml : [");
        assert_eq!(cfg, Cfg::new());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let cfg = Cfg::load(Path::new("./no-such-config-file"));
        assert_eq!(cfg, Cfg::new());
    }
}
