use polyglot_core::AppViewModel;

/// Formats the session as plain text, one section per target.
pub fn render(view: &AppViewModel) -> String {
    let session = &view.session;
    let targets = session
        .targets
        .iter()
        .map(|lang| lang.display_name())
        .collect::<Vec<_>>()
        .join(", ");
    let status = if session.is_loading {
        " (translating...)"
    } else {
        ""
    };

    let mut lines = vec![format!(
        "=== {} -> {}{}",
        view.source_language.display_name(),
        targets,
        status
    )];
    if let Some(rejection) = &view.rejection {
        lines.push(format!("! {rejection}"));
    }

    for target in &session.targets {
        let name = target.display_name();
        if let Some(code) = session.outcome.translations.get(target) {
            lines.push(format!("--- {name}"));
            lines.push(code.clone());
        } else if let Some(message) = session.outcome.errors.get(target) {
            lines.push(format!("--- {name} [error]"));
            lines.push(message.clone());
        } else if session.is_loading {
            lines.push(format!("--- {name}"));
            lines.push("(waiting)".to_string());
        }
    }

    lines.join("\n")
}
