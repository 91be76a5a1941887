use crate::cli::ColorWhen;
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use lytics::config::{ColorMode, Config, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(cli_json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(cli_json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        cli_json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let json = cli_json || config.output.format == OutputFormat::Json;
        let unicode = config.output.unicode && caps.supports_unicode;

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            color,
            unicode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ci_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            supports_color: true,
            supports_unicode: true,
            is_ci: true,
        }
    }

    #[test]
    fn ci_defaults_to_no_color_when_auto() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, None, &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn ci_allows_explicit_color_always_flag() {
        let config = Config::default();
        let ui = UiContext::from_caps(false, Some(ColorWhen::Always), &config, ci_caps());
        assert!(ui.color);
    }

    #[test]
    fn cli_never_beats_config_always() {
        let mut config = Config::default();
        config.output.color = ColorMode::Always;
        let ui = UiContext::from_caps(false, Some(ColorWhen::Never), &config, ci_caps());
        assert!(!ui.color);
    }

    #[test]
    fn config_format_json_selects_json_output() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        let ui = UiContext::from_caps(false, None, &config, ci_caps());
        assert!(ui.json);
    }
}
