use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};
use url::Url;

use crate::form::FormTarget;
use crate::period::Periods;

const DEFAULT_ACTION: &str = "http://localhost:8000/prospectos";

#[derive(Debug, Clone)]
pub struct Config {
    /// Form and field ids the range is written to.
    pub target: FormTarget,
    /// Where the filter form submits to (its `action`).
    pub action: Url,
    /// Human-facing format for printed dates. Default is "%A, %d %b %Y".
    pub display_date_format: String,
    /// Formats tried, in order, when reading dates typed by the user.
    pub input_date_formats: Vec<String>,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace.
    pub level: String,
    /// Optional log file; gets its own level when `file_level` is set.
    pub file: Option<PathBuf>,
    pub file_level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            file_level: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    form_id: Option<String>,
    start_field: Option<String>,
    end_field: Option<String>,
    action: Option<String>,
    display_date_format: Option<String>,
    input_date_formats: Option<Vec<String>>,
    logging: Option<LoggingConfig>,
    /// Optional table:
    /// [synonyms]
    /// quincena = "week"
    /// ytd = "year"
    synonyms: Option<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: FormTarget::default(),
            action: Url::parse(DEFAULT_ACTION).expect("valid default action"),
            display_date_format: "%A, %d %b %Y".to_string(),
            input_date_formats: Self::default_input_formats(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global period registry with user-defined synonyms if present.
    ///
    /// A config file that cannot be read or parsed is reported and ignored.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            tracing::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    /// Loads a specific config file. Unlike [`Config::load`], errors are returned.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let file_config =
            Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))?;
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Result<Self> {
        let defaults = FormTarget::default();
        let target = FormTarget {
            form_id: file_config.form_id.unwrap_or(defaults.form_id),
            start_field: file_config.start_field.unwrap_or(defaults.start_field),
            end_field: file_config.end_field.unwrap_or(defaults.end_field),
        };

        let action = file_config.action.as_deref().unwrap_or(DEFAULT_ACTION);
        let action = Url::parse(action).with_context(|| format!("invalid form action '{action}'"))?;

        let display_date_format = file_config
            .display_date_format
            .unwrap_or_else(|| "%A, %d %b %Y".to_string());

        let input_date_formats = file_config
            .input_date_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(Self::default_input_formats);

        // Extend global period registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Ok(Self {
            target,
            action,
            display_date_format,
            input_date_formats,
            logging: file_config.logging.unwrap_or_default(),
        })
    }

    fn default_input_formats() -> Vec<String> {
        crate::parse_input::DEFAULT_FORMATS
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    /// Candidate config files, most preferred first.
    pub fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("rango").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("rango").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            tracing::debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global period registry.
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> =
                    map.iter().map(|(a, t)| (a.clone(), t.clone())).collect();
                Periods::extend(&pairs);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::period::Period;
    use std::io::Write;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("rango").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
        }
    }

    #[test]
    fn defaults_match_the_filter_page() {
        let c = Config::default();
        assert_eq!(c.target.form_id, "formFiltroFechas");
        assert_eq!(c.target.start_field, "fecha_inicio");
        assert_eq!(c.target.end_field, "fecha_fin");
        assert_eq!(c.action.as_str(), "http://localhost:8000/prospectos");
        assert_eq!(c.input_date_formats, vec!["%Y-%m-%d", "%d/%m/%Y"]);
        assert_eq!(c.logging.level, "warn");
    }

    #[test]
    fn parse_file_accepts_ids_and_action() {
        let toml = r#"
            form_id = "filtros"
            start_field = "desde"
            action = "https://crm.example.com/dashboard"

            [logging]
            level = "debug"
        "#;
        let c = Config::from_file_config(Config::parse_file(toml).unwrap()).unwrap();
        assert_eq!(c.target.form_id, "filtros");
        assert_eq!(c.target.start_field, "desde");
        assert_eq!(c.target.end_field, "fecha_fin");
        assert_eq!(c.action.host_str(), Some("crm.example.com"));
        assert_eq!(c.logging.level, "debug");
        assert!(c.logging.file.is_none());
    }

    #[test]
    fn invalid_action_is_an_error() {
        let fc = Config::parse_file(r#"action = "not a url""#).unwrap();
        assert!(Config::from_file_config(fc).is_err());
    }

    #[test]
    fn empty_input_formats_fall_back_to_defaults() {
        let fc = Config::parse_file("input_date_formats = []").unwrap();
        let c = Config::from_file_config(fc).unwrap();
        assert_eq!(c.input_date_formats.len(), 2);
    }

    #[test]
    fn parse_file_accepts_synonyms_and_extends_registry() {
        let toml = r#"
            [synonyms]
            bimestre = "quarter"
            ESTEANIO = "año"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert!(fc.synonyms.is_some());

        Config::load_synonyms(&fc.synonyms);

        assert_eq!(Periods::find("bimestre"), Some(Period::Quarter));
        assert_eq!(Periods::find("esteanio"), Some(Period::Year));
    }

    #[test]
    fn load_from_reads_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "end_field = \"hasta\"").unwrap();
        let c = Config::load_from(file.path()).unwrap();
        assert_eq!(c.target.end_field, "hasta");
    }

    #[test]
    fn load_from_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "form_id = ").unwrap();
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
