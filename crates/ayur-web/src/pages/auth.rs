//! Sign-in and sign-up page.

use crate::sections::*;
use crate::{Route, ViewContext};

/// Render the auth page. A signed-in visitor is pointed back to the site
/// instead of being shown the forms.
pub fn render_auth(ctx: &ViewContext<'_>) -> String {
    let content = match &ctx.auth.user {
        Some(user) => format!(
            r#"<section class="auth-card">
        <h1>You're signed in</h1>
        <p>Signed in as {}.</p>
        <a class="button" href="{}">Continue</a>
    </section>"#,
            html_escape(user.display_name()),
            Route::Home.path()
        ),
        None => r#"<section class="auth-card">
        <h1>Welcome to AyurvedaCareConnect</h1>
        <form class="sign-in" method="post" action="/auth/sign-in">
            <h2>Sign In</h2>
            <label for="signin-email">Email</label>
            <input id="signin-email" type="email" name="email" required>
            <label for="signin-password">Password</label>
            <input id="signin-password" type="password" name="password" required>
            <button type="submit">Sign In</button>
        </form>
        <form class="sign-up" method="post" action="/auth/sign-up">
            <h2>Create Account</h2>
            <label for="signup-name">Full Name</label>
            <input id="signup-name" type="text" name="full_name" required>
            <label for="signup-email">Email</label>
            <input id="signup-email" type="email" name="email" required>
            <label for="signup-password">Password</label>
            <input id="signup-password" type="password" name="password" minlength="6" required>
            <button type="submit">Sign Up</button>
        </form>
    </section>"#
            .to_string(),
    };

    format!(
        "{}\n<main>\n    {}\n</main>\n{}",
        render_header(&inner_nav(&[])),
        content,
        render_footer()
    )
}
