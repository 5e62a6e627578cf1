//! Tests for engine configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        environment_mode = "reproducible"
        random_seed = 42

        [k_opt]
        min_k = 3
        max_k = 5
        max_cycles_patched = 2
        moves_per_step = 25
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.k_opt.min_k, 3);
    assert_eq!(config.k_opt.max_k, 5);
    assert_eq!(config.k_opt.max_cycles_patched(), 2);
    assert_eq!(config.k_opt.moves_per_step, 25);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        environment_mode: reproducible
        random_seed: 42
        k_opt:
          max_k: 3
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.k_opt.min_k, 2);
    assert_eq!(config.k_opt.max_k, 3);
    assert_eq!(config.k_opt.max_cycles_patched(), 3);
}

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.environment_mode, EnvironmentMode::NonReproducible);
    assert_eq!(config.random_seed, None);
    assert_eq!(config.k_opt, KOptSelectorConfig::default());
    assert_eq!(config.k_opt.min_k, 2);
    assert_eq!(config.k_opt.max_k, 2);
    assert_eq!(config.k_opt.moves_per_step, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_builder_methods() {
    let config = EngineConfig::new()
        .with_random_seed(9)
        .with_environment_mode(EnvironmentMode::Reproducible)
        .with_k_opt(KOptSelectorConfig::new(2, 4).with_moves_per_step(3));

    assert_eq!(config.random_seed, Some(9));
    assert_eq!(config.k_opt.max_k, 4);
    assert_eq!(config.k_opt.moves_per_step, 3);
}

#[test]
fn test_effective_seed() {
    let config = EngineConfig::new();
    assert_eq!(config.effective_seed(), None);

    let config = config.with_environment_mode(EnvironmentMode::Reproducible);
    assert_eq!(config.effective_seed(), Some(0));

    let config = config.with_random_seed(11);
    assert_eq!(config.effective_seed(), Some(11));
}

#[test]
fn test_validation_rejects_bad_ranges() {
    let err = EngineConfig::from_toml_str("[k_opt]\nmin_k = 1").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = EngineConfig::from_toml_str("[k_opt]\nmin_k = 4\nmax_k = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));

    let err = EngineConfig::from_yaml_str("k_opt:\n  moves_per_step: 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_unknown_environment_mode_is_a_parse_error() {
    let err = EngineConfig::from_toml_str(r#"environment_mode = "sometimes""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_missing_file() {
    let err = EngineConfig::load("/nonexistent/tourforge.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
