use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_FILE: &str = "tareas.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_file: PathBuf,
    pub base_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source. Unset and empty
    /// variables both fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| format!("PORT is not a valid port number: {port:?}"))?,
            None => DEFAULT_PORT,
        };

        let data_file = var("TAREAS_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        let base_path = var("TAREAS_BASE_PATH")
            .map(|path| normalize_base_path(&path))
            .unwrap_or_default();

        Ok(Config {
            port,
            data_file,
            base_path,
        })
    }
}

fn normalize_base_path(path: &str) -> String {
    let path = path.trim().trim_end_matches('/');
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_file, PathBuf::from("tareas.json"));
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn empty_port_uses_default() {
        assert_eq!(config(&[("PORT", "")]).unwrap().port, 8080);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("PORT", "3000"),
            ("TAREAS_DATA_FILE", "/var/lib/tareas/data.json"),
            ("TAREAS_BASE_PATH", "todo/"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_file, PathBuf::from("/var/lib/tareas/data.json"));
        assert_eq!(config.base_path, "/todo");
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert!(config(&[("PORT", "http")]).is_err());
        assert!(config(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn root_base_path_means_none() {
        assert_eq!(config(&[("TAREAS_BASE_PATH", "/")]).unwrap().base_path, "");
    }
}
