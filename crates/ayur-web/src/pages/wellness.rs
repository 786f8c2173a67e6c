//! Wellness journey: treatment programs and consultations.

use crate::sections::*;
use crate::{Route, ViewContext};

/// Render the wellness journey page.
pub fn render_wellness_journey(ctx: &ViewContext<'_>) -> String {
    let programs = ctx
        .programs
        .iter()
        .map(render_program_card)
        .collect::<Vec<_>>()
        .join("\n");
    let consultations = ctx
        .consultations
        .iter()
        .map(render_consultation_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"{header}
<main>
    <section class="hero">
        <span class="badge">Personalized Wellness Programs</span>
        <h1>Start Your <span class="accent">Wellness Journey</span></h1>
        <p>Transform your health with personalized Ayurvedic treatments designed for your unique body type and wellness goals</p>
    </section>
    <section class="programs">
{programs}
    </section>
    <section id="consultations" class="consultations">
        <h2>Expert Consultations</h2>
        <p>Book one-on-one sessions with certified Ayurvedic practitioners</p>
{consultations}
    </section>
    <section class="cta">
        <h2>Ready to Transform Your Health?</h2>
        <a class="button" href="{book}">Book Free Consultation</a>
        <a class="button button--outline" href="{marketplace}">Browse Products</a>
    </section>
</main>
{footer}"#,
        header = render_header(&inner_nav(&[
            NavLink::new("Marketplace", Route::Marketplace.path()),
            cart_link(ctx),
        ])),
        programs = programs,
        consultations = consultations,
        book = "#consultations",
        marketplace = Route::Marketplace.path(),
        footer = render_footer(),
    )
}
