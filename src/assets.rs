pub const LOGIN_HTML: &str = include_str!("../frontend/login.html");
pub const TAREAS_HTML: &str = include_str!("../frontend/tareas.html");
pub const STYLE_CSS: &str = include_str!("../frontend/style.css");
