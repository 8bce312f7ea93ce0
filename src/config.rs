use std::{env, path::PathBuf};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMER_SECS: u32 = 90;
pub const DEFAULT_PRESETS: [u32; 4] = [60, 90, 120, 180];
pub const DEFAULT_WEEKLY_GOAL: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub port: u16,
    pub timer_default_secs: u32,
    pub presets: Vec<u32>,
    pub weekly_goal: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            port: DEFAULT_PORT,
            timer_default_secs: DEFAULT_TIMER_SECS,
            presets: DEFAULT_PRESETS.to_vec(),
            weekly_goal: DEFAULT_WEEKLY_GOAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unparseable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup("APP_DATA_PATH") {
            config.data_dir = PathBuf::from(path);
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(err) => warn!("ignoring PORT={port:?}: {err}"),
            }
        }

        if let Some(secs) = lookup("TIMER_DEFAULT_SECS") {
            match secs.trim().parse::<u32>() {
                Ok(secs) if secs > 0 => config.timer_default_secs = secs,
                _ => warn!("ignoring TIMER_DEFAULT_SECS={secs:?}"),
            }
        }

        if let Some(raw) = lookup("TIMER_PRESETS") {
            let presets = parse_presets(&raw);
            if presets.is_empty() {
                warn!("TIMER_PRESETS={raw:?} has no usable entries, keeping defaults");
            } else {
                config.presets = presets;
            }
        }

        if let Some(goal) = lookup("WEEKLY_GOAL") {
            match goal.trim().parse::<usize>() {
                Ok(goal) if (1..=7).contains(&goal) => config.weekly_goal = goal,
                _ => warn!("ignoring WEEKLY_GOAL={goal:?}"),
            }
        }

        config
    }
}

fn parse_presets(raw: &str) -> Vec<u32> {
    raw.split(',')
        .filter_map(|item| item.trim().parse::<u32>().ok())
        .filter(|secs| *secs > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.timer_default_secs, 90);
        assert_eq!(config.weekly_goal, 5);
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_DATA_PATH", "/tmp/gym"),
            ("PORT", "9000"),
            ("TIMER_DEFAULT_SECS", "45"),
            ("TIMER_PRESETS", "30, 45,60"),
            ("WEEKLY_GOAL", "4"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/gym"));
        assert_eq!(config.port, 9000);
        assert_eq!(config.timer_default_secs, 45);
        assert_eq!(config.presets, vec![30, 45, 60]);
        assert_eq!(config.weekly_goal, 4);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("TIMER_DEFAULT_SECS", "0"),
            ("TIMER_PRESETS", "0,abc,"),
            ("WEEKLY_GOAL", "12"),
        ]));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timer_default_secs, DEFAULT_TIMER_SECS);
        assert_eq!(config.presets, DEFAULT_PRESETS.to_vec());
        assert_eq!(config.weekly_goal, DEFAULT_WEEKLY_GOAL);
    }

    #[test]
    fn preset_list_skips_bad_entries() {
        assert_eq!(parse_presets("60,x,0,120"), vec![60, 120]);
    }
}
