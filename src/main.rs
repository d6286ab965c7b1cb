use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod form {
    pub mod controller;
    pub mod delivery;
    pub mod error;
    pub mod model;
}
mod components {
    pub mod demo_form;
    pub mod page_effects;
}
mod pages {
    pub mod landing;
}

use components::page_effects::{is_active_link, use_active_section, use_body_loaded_class, AnchorLink};
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing not found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to VoxSetu"}</Link<Route>>
                </div>
            }
        },
    }
}

// (section id, nav label)
const NAV_LINKS: &[(&str, &str)] = &[
    ("capabilities", "Capabilities"),
    ("use-cases", "Use Cases"),
    ("how-it-works", "How It Works"),
    ("security", "Security"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let active = use_active_section();

    html! {
        <nav class="navbar">
            <div class="nav-content">
                <AnchorLink target="home" classes="nav-logo">
                    {"VoxSetu"}
                </AnchorLink>
                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let is_active = is_active_link(active.as_deref(), id);
                        html! {
                            <AnchorLink target={*id} classes={classes!("nav-link", is_active.then(|| "active"))}>
                                {*label}
                            </AnchorLink>
                        }
                    }) }
                    <AnchorLink target="demo" classes={classes!("nav-cta", is_active_link(active.as_deref(), "demo").then(|| "active"))}>
                        {"Request Demo"}
                    </AnchorLink>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    use_body_loaded_class();

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting VoxSetu site");
    yew::Renderer::<App>::new().render();
}
