use common::{CurrencyFormatter, DateLocale, DisplayFormat};
use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Backend API host (e.g., "localhost" or "api.example.com")
    pub api_host: String,

    /// Backend API port (e.g., 3333)
    pub api_port: u16,

    /// API path prefix, empty when the API is served at the root
    pub api_path: String,

    /// Use HTTPS for API requests
    pub api_use_https: bool,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,

    /// ISO-4217 code used to format amounts
    pub currency_code: String,

    /// Locale used for relative dates
    pub date_locale: DateLocale,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_host: "localhost".to_string(),
            api_port: 3333,
            api_path: String::new(),
            api_use_https: false,
            log_level: Level::Info,
            debug_mode: false,
            currency_code: "BRL".to_string(),
            date_locale: DateLocale::Pt,
        }
    }
}

impl AppSettings {
    /// Create settings from environment/window location.
    ///
    /// Stored values that cannot be used are skipped and reported in the
    /// returned list, since the logger is not running yet at this point.
    pub fn from_environment() -> (Self, Vec<String>) {
        let mut settings = Self::default();
        let mut rejected = Vec::new();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            // Custom settings live in localStorage
            if let Ok(Some(storage)) = window.local_storage() {
                rejected = settings.apply_overrides(|key| storage.get_item(key).ok().flatten());
            }
        }

        (settings, rejected)
    }

    /// Apply `gofinances_*` overrides, returning a message for every value
    /// that was ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();

        if let Some(api_host) = lookup("gofinances_api_host") {
            self.api_host = api_host;
        }

        if let Some(api_port) = lookup("gofinances_api_port") {
            match api_port.parse::<u16>() {
                Ok(port_val) => self.api_port = port_val,
                Err(_) => rejected.push(format!("Ignoring stored API port: {}", api_port)),
            }
        }

        if let Some(api_path) = lookup("gofinances_api_path") {
            self.api_path = api_path;
        }

        if let Some(use_https) = lookup("gofinances_api_use_https") {
            self.api_use_https = use_https.to_lowercase() == "true";
        }

        if let Some(log_level) = lookup("gofinances_log_level") {
            match log_level.to_lowercase().as_str() {
                "error" => self.log_level = Level::Error,
                "warn" => self.log_level = Level::Warn,
                "info" => self.log_level = Level::Info,
                "debug" => self.log_level = Level::Debug,
                "trace" => self.log_level = Level::Trace,
                _ => rejected.push(format!("Ignoring stored log level: {}", log_level)),
            }
        }

        if let Some(currency) = lookup("gofinances_currency") {
            match CurrencyFormatter::new(&currency) {
                Ok(_) => self.currency_code = currency,
                Err(e) => rejected.push(format!("Ignoring stored currency: {}", e)),
            }
        }

        if let Some(locale) = lookup("gofinances_date_locale") {
            match locale.parse::<DateLocale>() {
                Ok(locale) => self.date_locale = locale,
                Err(e) => rejected.push(format!("Ignoring stored locale: {}", e)),
            }
        }

        rejected
    }

    /// Get the base API URL (protocol + host + port)
    pub fn api_base_url(&self) -> String {
        let protocol = if self.api_use_https { "https" } else { "http" };
        format!("{}://{}:{}{}", protocol, self.api_host, self.api_port, self.api_path)
    }

    /// Formatting configuration for amounts and dates
    pub fn display_format(&self) -> DisplayFormat {
        let currency = CurrencyFormatter::new(&self.currency_code).unwrap_or_else(|e| {
            log::warn!("{}, falling back to {}", e, CurrencyFormatter::default().code());
            CurrencyFormatter::default()
        });

        DisplayFormat {
            currency,
            locale: self.date_locale,
        }
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup).
///
/// Returns the stored values that were ignored so they can be logged once
/// the logger is up.
pub fn init_settings() -> Vec<String> {
    let (settings, rejected) = AppSettings::from_environment();
    SETTINGS.with(|s| {
        *s.borrow_mut() = settings;
    });
    rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn stored(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_overrides_applied() {
        let storage = stored(&[
            ("gofinances_api_host", "api.example.com"),
            ("gofinances_api_port", "8080"),
            ("gofinances_api_use_https", "TRUE"),
            ("gofinances_currency", "usd"),
            ("gofinances_date_locale", "en-US"),
        ]);
        let mut settings = AppSettings::default();

        let rejected = settings.apply_overrides(|key| storage.get(key).cloned());

        assert!(rejected.is_empty());
        assert_eq!(settings.api_base_url(), "https://api.example.com:8080");
        assert_eq!(settings.display_format().currency.code(), "USD");
        assert_eq!(settings.date_locale, DateLocale::EnUs);
    }

    #[test]
    fn test_invalid_values_are_reported_and_skipped() {
        let storage = stored(&[
            ("gofinances_api_port", "eighty"),
            ("gofinances_log_level", "loud"),
            ("gofinances_currency", "XYZ1"),
            ("gofinances_date_locale", "fr"),
        ]);
        let mut settings = AppSettings::default();

        let rejected = settings.apply_overrides(|key| storage.get(key).cloned());

        assert_eq!(rejected.len(), 4);
        assert!(rejected.iter().any(|m| m.contains("Unknown locale: fr")));
        assert!(rejected.iter().any(|m| m.contains("Unknown currency: XYZ1")));
        assert_eq!(settings.api_port, 3333);
        assert_eq!(settings.log_level, Level::Info);
        assert_eq!(settings.currency_code, "BRL");
        assert_eq!(settings.date_locale, DateLocale::Pt);
    }

    #[test]
    fn test_default_display_format() {
        let format = AppSettings::default().display_format();
        assert_eq!(format, DisplayFormat::default());
        assert_eq!(AppSettings::default().api_base_url(), "http://localhost:3333");
    }
}
