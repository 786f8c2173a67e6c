//! Wellness program and consultation cards.

use super::html_escape;
use ayur_commerce::programs::{ConsultationType, TreatmentProgram};

fn render_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("<li>{}</li>", html_escape(i)))
        .collect()
}

/// Render a treatment program card.
pub fn render_program_card(program: &TreatmentProgram) -> String {
    format!(
        r#"<article class="program-card" data-program-id="{id}">
    <h3>{name}</h3>
    <p class="program-meta"><span>{duration}</span> &middot; <span>{sessions} sessions</span></p>
    <p>{description}</p>
    <h4>Key Benefits:</h4>
    <ul>{benefits}</ul>
    <h4>Program Includes:</h4>
    <ul>{includes}</ul>
    <h4>Suitable For:</h4>
    <p>{suitable}</p>
    <div class="program-footer">
        <span class="price-current">{price}</span>
        <form method="post" action="/cart/items">
            <input type="hidden" name="id" value="{id}">
            <button type="submit">Start Program</button>
        </form>
    </div>
</article>"#,
        id = html_escape(program.id.as_str()),
        name = html_escape(&program.name),
        duration = program.duration_label(),
        sessions = program.sessions,
        description = html_escape(&program.description),
        benefits = render_list(&program.benefits),
        includes = render_list(&program.includes),
        suitable = html_escape(&program.suitable_for),
        price = program.price.display(),
    )
}

/// Render a consultation card.
pub fn render_consultation_card(consultation: &ConsultationType) -> String {
    format!(
        r#"<article class="consultation-card" data-consultation-id="{id}">
    <h3>{name}</h3>
    <div class="price-current">{price}</div>
    <p class="consultation-duration">{duration}</p>
    <p>{description}</p>
    <form method="post" action="/cart/items">
        <input type="hidden" name="id" value="{id}">
        <button class="button--outline" type="submit">Book Consultation</button>
    </form>
</article>"#,
        id = html_escape(consultation.id.as_str()),
        name = html_escape(&consultation.name),
        price = consultation.price.display(),
        duration = consultation.duration_label(),
        description = html_escape(&consultation.description),
    )
}
