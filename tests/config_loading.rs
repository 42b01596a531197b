//! Integration tests for layered configuration loading.
//!
//! Uses figment::Jail for a sandboxed working directory and environment.

use std::path::Path;

use figment::Jail;
use luach::config::Config;
use luach::hebrew::fmt::{Language, Numerals};
use luach::to_jewish_date;

/// Points the user-global config at the jail so the host's file is ignored.
fn isolate(jail: &mut Jail) {
    let dir = jail.directory().to_string_lossy().into_owned();
    jail.set_env("XDG_CONFIG_HOME", &dir);
    jail.set_env("HOME", &dir);
}

#[test]
fn loads_defaults_without_files() {
    Jail::expect_with(|jail| {
        isolate(jail);
        let config = Config::load().expect("config loads");
        assert_eq!(Config::default(), config);
        Ok(())
    });
}

#[test]
fn loads_project_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file(
            "luach.toml",
            r#"
[display]
include_year = false
numerals = "arabic"
language = "english"

[logging]
enabled = true
"#,
        )?;

        let config = Config::load().expect("config loads");
        assert!(!config.display.include_year);
        assert_eq!(Numerals::Arabic, config.display.numerals);
        assert_eq!(Language::English, config.display.language);
        assert!(config.display.geresh);
        assert!(config.logging.enabled);
        Ok(())
    });
}

#[test]
fn loads_user_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_dir("luach")?;
        jail.create_file("luach/config.toml", "[display]\ngeresh = false\n")?;

        let config = Config::load().expect("config loads");
        assert!(!config.display.geresh);
        Ok(())
    });
}

#[test]
fn explicit_file_beats_project_file() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file("luach.toml", "[display]\nlanguage = \"english\"\n")?;
        jail.create_file("custom.toml", "[display]\nlanguage = \"hebrew\"\n")?;

        let config = Config::load_from(Path::new("custom.toml")).expect("config loads");
        assert_eq!(Language::Hebrew, config.display.language);
        Ok(())
    });
}

#[test]
fn env_beats_files() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file("luach.toml", "[display]\ninclude_year = true\n")?;
        jail.set_env("LUACH_DISPLAY__INCLUDE_YEAR", "false");
        jail.set_env("LUACH_DISPLAY__NUMERALS", "arabic");

        let config = Config::load().expect("config loads");
        assert!(!config.display.include_year);
        assert_eq!(Numerals::Arabic, config.display.numerals);
        Ok(())
    });
}

#[test]
fn rejects_unknown_values() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file("luach.toml", "[display]\nnumerals = \"roman\"\n")?;
        assert!(Config::load().is_err());
        Ok(())
    });
}

#[test]
fn style_from_loaded_config() {
    Jail::expect_with(|jail| {
        isolate(jail);
        jail.create_file(
            "luach.toml",
            "[display]\nlanguage = \"english\"\nnumerals = \"arabic\"\n",
        )?;

        let config = Config::load().expect("config loads");
        let date = to_jewish_date(2024, 3, 24).expect("valid date");
        assert_eq!(
            "14 Adar II 5784",
            luach::hebrew::fmt::format_with(&date, true, &config.display.style())
        );
        Ok(())
    });
}
