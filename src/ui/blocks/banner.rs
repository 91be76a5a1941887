//! Opening block printed once before the watch loop starts

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Title line, aligned settings and an optional dim hint
#[derive(Debug, Clone)]
pub struct Banner {
    icon: Icon,
    title: String,
    settings: Vec<(&'static str, String)>,
    hint: Option<String>,
}

impl Banner {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            settings: Vec::new(),
            hint: None,
        }
    }

    pub fn setting(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.settings.push((label, value.into()));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Labels are padded to the widest one so values line up
    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info(self.title.as_str())
            .bold()
            .render(supports_color);
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        );

        let width = self
            .settings
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, value) in &self.settings {
            let label = ColoredText::dim(format!("{:<width$}", label, width = width))
                .render(supports_color);
            out.push_str(&format!("  {}  {}\n", label, value));
        }

        if let Some(hint) = &self.hint {
            out.push_str(&format!(
                "  {}\n",
                ColoredText::dim(hint.as_str()).render(supports_color)
            ));
        }
        out
    }
}
