use crate::sections::*;
use crate::Route;

pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<main class="not-found">
    <h1>404</h1>
    <p>Oops! Page not found: {}</p>
    <a href="{}">Return to Home</a>
</main>"#,
        html_escape(path),
        Route::Home.path()
    )
}
