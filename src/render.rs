use std::fmt::Write;

use crate::assets::{LOGIN_HTML, TAREAS_HTML};
use crate::models::TaskList;

pub fn login_page(base_path: &str) -> String {
    fill(LOGIN_HTML, &[("base", base_path)])
}

/// Task page for `user`. Tasks link to the toggle/delete routes by their
/// position in the list.
pub fn tasks_page(user: &str, list: &TaskList, base_path: &str) -> String {
    let mut rows = String::new();
    for (index, task) in list.tasks.iter().enumerate() {
        let (class, action) = if task.done {
            ("done", "Reabrir")
        } else {
            ("open", "Completar")
        };
        let _ = writeln!(
            rows,
            r#"            <li class="{class}"><span class="name">{name}</span><span class="date">{date}</span><a href="{base}/completar?id={index}">{action}</a><a href="{base}/borrar?id={index}">Borrar</a></li>"#,
            name = escape(&task.name),
            date = escape(&task.created_at),
            base = base_path,
        );
    }

    fill(
        TAREAS_HTML,
        &[
            ("base", base_path),
            ("usuario", &escape(user)),
            ("total", &list.total.to_string()),
            ("completadas", &list.completed.to_string()),
            ("tareas", rows.trim_end()),
        ],
    )
}

/// Substitutes `{{key}}` placeholders in a single pass, so substituted text
/// is never scanned again. Unknown placeholders are kept as they are.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn task(name: &str, done: bool) -> Task {
        Task {
            name: name.to_string(),
            done,
            created_at: "19/10 12:30".to_string(),
        }
    }

    #[test]
    fn shows_counters_and_links() {
        let list = TaskList::new(vec![task("walk dog", false), task("buy milk", true)]);
        let html = tasks_page("ana", &list, "");

        assert!(html.contains("Tareas de ana"));
        assert!(html.contains("Total: 2"));
        assert!(html.contains("Completadas: 1"));
        assert!(html.contains(r#"href="/completar?id=0""#));
        assert!(html.contains(r#"href="/borrar?id=1""#));
        assert!(html.contains(r#"<li class="done"><span class="name">buy milk</span>"#));
    }

    #[test]
    fn escapes_user_text() {
        let list = TaskList::new(vec![task("<script>alert('x')</script>", false)]);
        let html = tasks_page("a&b", &list, "");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tareas de a&amp;b"));
    }

    #[test]
    fn placeholders_in_task_names_are_left_alone() {
        let list = TaskList::new(vec![task("{{usuario}}", false)]);
        let html = tasks_page("{{tareas}}", &list, "");
        assert!(html.contains(r#"<span class="name">{{usuario}}</span>"#));
        assert!(html.contains("Tareas de {{tareas}}"));
    }

    #[test]
    fn fill_keeps_unknown_and_unterminated_placeholders() {
        assert_eq!(fill("a {{x}} {{y}} {{z", &[("x", "1")]), "a 1 {{y}} {{z");
    }

    #[test]
    fn prefixes_base_path() {
        let html = login_page("/todo");
        assert!(html.contains(r#"action="/todo/entrar""#));

        let list = TaskList::new(vec![task("a", false)]);
        let html = tasks_page("ana", &list, "/todo");
        assert!(html.contains(r#"href="/todo/borrar?id=0""#));
        assert!(html.contains(r#"href="/todo/salir""#));
    }
}
