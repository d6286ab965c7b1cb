use yew::prelude::*;

use crate::components::demo_form::DemoForm;
use crate::components::page_effects::AnchorLink;

struct Card {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const CAPABILITIES: &[Card] = &[
    Card {
        icon: "🎙️",
        title: "Natural voice agents",
        text: "Human-sounding agents that answer, qualify and route calls around the clock.",
    },
    Card {
        icon: "🌐",
        title: "Multilingual by default",
        text: "Hindi, English, Tamil, Marathi and more, including mid-sentence code switching.",
    },
    Card {
        icon: "⚡",
        title: "Low latency",
        text: "Sub-second turn taking so conversations never feel like a phone tree.",
    },
    Card {
        icon: "🔗",
        title: "Plugs into your stack",
        text: "CRM, ticketing and calendar integrations with call summaries pushed where your team works.",
    },
];

const USE_CASES: &[Card] = &[
    Card {
        icon: "📞",
        title: "Inbound support",
        text: "Resolve the repetitive questions and hand the rest to a human with full context.",
    },
    Card {
        icon: "📅",
        title: "Appointment booking",
        text: "Confirm, reschedule and remind without anyone touching a phone.",
    },
    Card {
        icon: "💳",
        title: "Payment reminders",
        text: "Polite, compliant follow-ups that adapt to what the customer says.",
    },
];

const INDUSTRIES: &[&str] = &["Healthcare", "Banking & NBFC", "Real estate", "E-commerce", "Education", "Logistics"];

const STEPS: &[(&str, &str)] = &[
    ("Share your workflow", "Tell us which calls you want handled and where the data lives."),
    ("We tune the agent", "Voice, language and script are shaped around your customers."),
    ("Go live", "Start with a slice of traffic and scale once the numbers look right."),
];

const SECURITY: &[(&str, &str)] = &[
    ("Encrypted end to end", "Calls and transcripts are encrypted in transit and at rest."),
    ("Data stays in region", "Hosting in India for teams with residency requirements."),
    ("Access controls", "Role based access and audit logs for every recording."),
];

fn render_card(class: &'static str, card: &Card) -> Html {
    html! {
        <div class={class}>
            <div class="card-icon">{card.icon}</div>
            <h3>{card.title}</h3>
            <p>{card.text}</p>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page section {
                        padding: 6rem 2rem;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .hero {
                        min-height: 90vh;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        text-align: center;
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        background: linear-gradient(45deg, #fff, #7EB2FF);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .card-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 1.5rem;
                    }
                    .capability-card, .use-case-card, .industry-tile, .step, .security-item {
                        background: rgba(30, 30, 30, 0.7);
                        border: 1px solid rgba(30, 144, 255, 0.1);
                        border-radius: 16px;
                        padding: 2rem;
                        transition: all 0.3s ease;
                    }
                    .demo-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        max-width: 480px;
                        margin: 0 auto;
                    }
                    .demo-form input {
                        width: 100%;
                        padding: 0.8rem;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(0, 0, 0, 0.3);
                        color: #fff;
                    }
                    .demo-form button:disabled {
                        cursor: not-allowed;
                        opacity: 0.9;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 2.4rem;
                        }
                        .landing-page section {
                            padding: 4rem 1rem;
                        }
                    }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Voice AI that speaks your customers' language"}</h1>
                    <p>{"VoxSetu builds voice agents for Indian businesses: always on, multilingual and wired into the tools you already use."}</p>
                    <div class="waveform-animation"></div>
                    <AnchorLink target="demo" classes="btn btn-primary">{"Book a demo"}</AnchorLink>
                </div>
            </section>

            <section id="capabilities">
                <h2>{"What VoxSetu does"}</h2>
                <div class="card-grid">
                    { for CAPABILITIES.iter().map(|card| render_card("capability-card", card)) }
                </div>
            </section>

            <section id="use-cases">
                <h2>{"Use cases"}</h2>
                <div class="card-grid">
                    { for USE_CASES.iter().map(|card| render_card("use-case-card", card)) }
                </div>
                <div class="card-grid industries">
                    { for INDUSTRIES.iter().map(|industry| html! {
                        <div class="industry-tile">{*industry}</div>
                    }) }
                </div>
            </section>

            <section id="how-it-works">
                <h2>{"How it works"}</h2>
                <div class="card-grid">
                    { for STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="step">
                            <span class="step-number">{(i + 1).to_string()}</span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="security">
                <h2>{"Security"}</h2>
                <div class="card-grid">
                    { for SECURITY.iter().map(|(title, text)| html! {
                        <div class="security-item">
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section id="demo">
                <h2>{"Request a demo"}</h2>
                <p>{"Leave your details and we will set up a call with a live agent tuned to your use case."}</p>
                <DemoForm />
            </section>

            <footer class="footer">
                <p>{"© VoxSetu. All rights reserved."}</p>
            </footer>
        </div>
    }
}
