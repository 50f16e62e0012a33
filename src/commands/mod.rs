pub mod events;
pub mod replay;

use gqlog::{Bindings, LifecycleEvent, LogLevel, LogPlugin};
use indexmap::IndexMap;

use crate::config::Config;

/// Effective extra bindings: config file first, then `--bind` flags
pub fn overrides(config: &Config, bind: &[(LifecycleEvent, LogLevel)]) -> IndexMap<LifecycleEvent, LogLevel> {
    let mut merged = config.bindings.clone();
    merged.extend(bind.iter().copied());
    merged
}

/// Build the plugin with `overrides` layered over its defaults
pub fn build_plugin(overrides: IndexMap<LifecycleEvent, LogLevel>) -> LogPlugin {
    if overrides.is_empty() {
        return LogPlugin::new();
    }

    LogPlugin::with_handlers(move |log| {
        overrides
            .iter()
            .fold(Bindings::new(), |bindings, (event, level)| bindings.bind(*event, log.handler(*level)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let mut config = Config::default();
        config.bindings.insert(LifecycleEvent::DidResolveOperation, LogLevel::Info);
        config.bindings.insert(LifecycleEvent::ParsingDidStart, LogLevel::Info);

        let merged = overrides(&config, &[(LifecycleEvent::DidResolveOperation, LogLevel::Error)]);

        assert_eq!(merged.get(&LifecycleEvent::DidResolveOperation), Some(&LogLevel::Error));
        assert_eq!(merged.get(&LifecycleEvent::ParsingDidStart), Some(&LogLevel::Info));
    }

    #[test]
    fn test_build_plugin_binds_overrides() {
        let plugin = build_plugin(IndexMap::from([(LifecycleEvent::WillSendResponse, LogLevel::Info)]));
        let bindings = plugin.bindings();
        assert!(bindings.contains(LifecycleEvent::WillSendResponse));
        assert!(bindings.contains(LifecycleEvent::DidEncounterErrors));
        assert!(bindings.contains(LifecycleEvent::DidResolveOperation));
    }
}
