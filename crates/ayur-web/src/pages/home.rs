//! Landing page.

use crate::sections::*;
use crate::{Route, ViewContext};

struct Feature {
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        title: "Trusted Herbal Marketplace",
        description: "Browse and purchase verified Ayurvedic & Unani products from trusted brands like Dabur, Hamdard, and Baidyanath.",
    },
    Feature {
        title: "Personalized Wellness Routines",
        description: "Create custom daily Ayurvedic care routines based on your body type, goals, and symptoms with smart reminders.",
    },
    Feature {
        title: "Dr. Veda AI Assistant",
        description: "Get instant guidance on herbs, dosages, natural remedies, and wellness practices from our AI-powered Ayurvedic expert.",
    },
    Feature {
        title: "Daily Journal & Reminders",
        description: "Track your wellness journey with gentle check-ins, medicine reminders, and progress insights.",
    },
    Feature {
        title: "Ayurveda Learning Hub",
        description: "Discover ancient wisdom through bite-sized articles, videos, and visual guides on doshas, herbs, and rituals.",
    },
    Feature {
        title: "Expert Consultations",
        description: "Connect with certified Ayurvedic doctors and practitioners for personalized guidance and treatment plans.",
    },
];

struct Testimonial {
    name: &'static str,
    location: &'static str,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai",
        text: "AyurvedaCareConnect helped me find the right herbs for my digestion issues. The AI guidance is amazing!",
    },
    Testimonial {
        name: "Rajesh Kumar",
        location: "Delhi",
        text: "Finally, an app that makes Ayurveda simple and accessible. Love the daily routines feature.",
    },
    Testimonial {
        name: "Anita Patel",
        location: "Bangalore",
        text: "The herbal marketplace has authentic products and fast delivery. Highly recommended!",
    },
];

/// Header links. Signed-in visitors get the member pages and sign-out;
/// everyone else is offered sign-in.
fn home_nav(ctx: &ViewContext<'_>) -> Vec<NavLink> {
    let mut links = vec![
        NavLink::new("Features", "#features"),
        NavLink::new("About", "#about"),
        NavLink::new("Reviews", "#testimonials"),
    ];
    match &ctx.auth.user {
        Some(user) => {
            links.push(NavLink::new("Marketplace", Route::Marketplace.path()));
            links.push(NavLink::new("Wellness", Route::WellnessJourney.path()));
            links.push(NavLink::new(user.display_name(), "#profile"));
            links.push(NavLink::new("Sign Out", "/auth/sign-out"));
        }
        None => {
            links.push(NavLink::new("Sign In", Route::Auth.path()));
            links.push(NavLink::new("Get Started", Route::Auth.path()).primary());
        }
    }
    links
}

/// Render the landing page.
pub fn render_home(ctx: &ViewContext<'_>) -> String {
    let journey = ctx.gated(Route::WellnessJourney);
    let marketplace = ctx.gated(Route::Marketplace);

    let features: String = FEATURES
        .iter()
        .map(|f| {
            format!(
                r#"
        <article class="feature-card"><h3>{}</h3><p>{}</p></article>"#,
                html_escape(f.title),
                html_escape(f.description)
            )
        })
        .collect();

    let testimonials: String = TESTIMONIALS
        .iter()
        .map(|t| {
            format!(
                r#"
        <blockquote class="testimonial">{}<p>"{}"</p><footer>{} &middot; {}</footer></blockquote>"#,
                render_stars(5),
                html_escape(t.text),
                html_escape(t.name),
                html_escape(t.location)
            )
        })
        .collect();

    format!(
        r#"{header}
<main>
    <section class="hero">
        <span class="badge">Your Daily Ayurvedic Wellness Companion</span>
        <h1>Wellness rooted in <span class="accent">tradition</span>,<br>guided by AI</h1>
        <p>Discover authentic Ayurvedic healing with personalized routines, AI-powered guidance, and trusted herbal remedies - all in one calming space designed for modern wellness seekers.</p>
        <a class="button" href="{journey}">Start Your Wellness Journey</a>
        <a class="button button--outline" href="{marketplace}">Explore Marketplace</a>
    </section>
    <section id="features">
        <h2>Everything you need for Ayurvedic wellness</h2>{features}
    </section>
    <section id="testimonials">
        <h2>Loved by wellness seekers across India</h2>{testimonials}
    </section>
    <section class="cta">
        <h2>Ready to begin your Ayurvedic journey?</h2>
        <a class="button" href="{journey}">Get Started Free</a>
        <p>No credit card required &bull; Start your wellness journey today</p>
    </section>
</main>
{footer}"#,
        header = render_header(&home_nav(ctx)),
        journey = journey,
        marketplace = marketplace,
        features = features,
        testimonials = testimonials,
        footer = render_footer(),
    )
}
