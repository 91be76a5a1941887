use crate::ui::blocks::banner::Banner;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use lytics::application::watch::{EvaluationMode, WatchEvent};

pub fn render_watch_header(
    root: &str,
    api_url: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    Banner::new(Icon::Watch, "Lytics Watch")
        .setting("Directory", root)
        .setting("API", api_url)
        .hint("Edit .lql, .json or .csv files; press Ctrl+C to stop")
        .render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = format!("[{}]", timestamp);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted { root, files } => format!(
            "{} {} Watching: {} ({} files)\n",
            prefix,
            icon(Icon::Watch),
            root,
            files
        ),
        WatchEvent::FileChanged { path } => {
            format!("{} {} Changed: {}\n", prefix, icon(Icon::Arrow), path)
        }
        WatchEvent::QueryValidated { name, stream } => match stream {
            Some(stream) => format!(
                "{} {} {}: query ok, reading from {}\n",
                prefix,
                icon(Icon::Success),
                name,
                stream
            ),
            None => format!("{} {} {}: query ok\n", prefix, icon(Icon::Success), name),
        },
        WatchEvent::QueryInvalid { name, message } => format!(
            "{} {} {}: invalid query\n{}\n",
            prefix,
            icon(Icon::Error),
            name,
            ColoredText::error(message.as_str()).render(supports_color)
        ),
        WatchEvent::RecentSamples {
            name,
            stream,
            count,
        } => format!(
            "{} {} {}: using {} recent events from stream {}\n",
            prefix,
            icon(Icon::Data),
            name,
            count,
            stream
        ),
        WatchEvent::NoData { name } => format!(
            "{} {} {}: no sample data; add {}.json or {}.csv\n",
            prefix,
            icon(Icon::Warning),
            name,
            name,
            name
        ),
        WatchEvent::EvaluationStarted { name, mode } => {
            let against = match mode {
                EvaluationMode::Query => "query",
                EvaluationMode::DeployedQueries => "deployed queries",
            };
            format!(
                "{} {} {}: evaluating against {}\n",
                prefix,
                icon(Icon::Progress),
                name,
                against
            )
        }
        WatchEvent::EntityEvaluated { entity, .. } => {
            let pretty =
                serde_json::to_string_pretty(entity).unwrap_or_else(|_| entity.to_string());
            format!("{}\n", pretty)
        }
        WatchEvent::EvaluationFailed {
            name,
            message,
            record,
        } => format!(
            "{} {} {}: {}\n{}\n",
            prefix,
            icon(Icon::Error),
            name,
            message,
            ColoredText::dim(record.as_str()).render(supports_color)
        ),
        WatchEvent::Error { message } => {
            format!("{} {} Error: {}\n", prefix, icon(Icon::Error), message)
        }
        WatchEvent::Shutdown => {
            format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_started_event_with_watch_icon() {
        let event = WatchEvent::WatchStarted {
            root: "./queries".to_string(),
            files: 2,
        };
        let rendered = render_watch_event("00:00:00", &event, false, false);
        assert_eq!(rendered, "[00:00:00] [~] Watching: ./queries (2 files)\n");
    }

    #[test]
    fn renders_entity_as_indented_json() {
        let event = WatchEvent::EntityEvaluated {
            name: "orders".to_string(),
            entity: serde_json::json!({"user_id": "1"}),
        };
        let rendered = render_watch_event("00:00:00", &event, false, false);
        assert_eq!(rendered, "{\n  \"user_id\": \"1\"\n}\n");
    }

    #[test]
    fn renders_failure_with_encoded_record() {
        let event = WatchEvent::EvaluationFailed {
            name: "orders".to_string(),
            message: "api error (400): bad field".to_string(),
            record: "id=1&name=a".to_string(),
        };
        let rendered = render_watch_event("12:00:00", &event, false, false);
        assert!(rendered.contains("[FAIL] orders: api error (400): bad field"));
        assert!(rendered.contains("id=1&name=a"));
    }

    #[test]
    fn renders_header_with_directory() {
        let rendered = render_watch_header("./queries", "https://api.lytics.io", false, false);
        assert!(rendered.starts_with("[~] Lytics Watch\n"));
        assert!(rendered.contains("Directory  ./queries"));
        assert!(rendered.contains("API        https://api.lytics.io"));
        assert!(rendered.ends_with("press Ctrl+C to stop\n"));
    }
}
