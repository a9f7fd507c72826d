use std::env;

pub const DEFAULT_MAX_TICKS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub log_json: bool,
    pub max_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { log_json: false, max_ticks: DEFAULT_MAX_TICKS }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_json = lookup("GRIDWALK_LOG_JSON")
            .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let max_ticks = lookup("GRIDWALK_MAX_TICKS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_TICKS);
        Self { log_json, max_ticks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(SimConfig::from_lookup(lookup_from(&[])), SimConfig::default());
    }

    #[test]
    fn reads_flags_and_ignores_garbage() {
        let cfg = SimConfig::from_lookup(lookup_from(&[
            ("GRIDWALK_LOG_JSON", "True"),
            ("GRIDWALK_MAX_TICKS", "25"),
        ]));
        assert!(cfg.log_json);
        assert_eq!(cfg.max_ticks, 25);

        let cfg = SimConfig::from_lookup(lookup_from(&[("GRIDWALK_MAX_TICKS", "lots")]));
        assert_eq!(cfg.max_ticks, DEFAULT_MAX_TICKS);
    }
}
